//! Type interning for structural deduplication.
//!
//! Converts `TypeData` structures into lightweight `TypeId` handles.
//!
//! Benefits:
//! - O(1) type equality (just compare `TypeId` values)
//! - Each unique structure stored once
//! - Handles are `Copy`, so the declaration model stays cheap to clone

use crate::inheritance::InheritanceGraph;
use crate::types::{DeclaredType, PrimitiveKind, TypeData, TypeId, TypeParamRef, WildcardBound};
use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use std::sync::{Arc, PoisonError, RwLock};
use tracing::trace;

/// Qualified name of the universal supertype of all reference types.
pub const OBJECT_TYPE_NAME: &str = "java.lang.Object";

/// Deduplicating store of types plus the declared inheritance edges between them.
///
/// All methods take `&self`; the tables sit behind `RwLock`s so a single
/// interner can be shared by independent traversals.
pub struct TypeInterner {
    key_to_id: RwLock<FxHashMap<TypeData, TypeId>>,
    id_to_key: RwLock<Vec<TypeData>>,
    inheritance: InheritanceGraph,
}

impl TypeInterner {
    /// Create an interner with `void` and the primitives pre-registered.
    pub fn new() -> Self {
        let interner = TypeInterner {
            key_to_id: RwLock::new(FxHashMap::default()),
            id_to_key: RwLock::new(Vec::with_capacity(64)),
            inheritance: InheritanceGraph::new(),
        };
        interner.intern(TypeData::Void);
        for kind in PrimitiveKind::ALL {
            let id = interner.intern(TypeData::Primitive(kind));
            debug_assert_eq!(id, kind.type_id());
        }
        interner
    }

    /// Intern `data`, returning the existing id when the structure was seen before.
    pub fn intern(&self, data: TypeData) -> TypeId {
        if let Some(&id) = self
            .key_to_id
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&data)
        {
            return id;
        }

        let mut map = self.key_to_id.write().unwrap_or_else(PoisonError::into_inner);
        // Another writer may have won the race between the read and write locks.
        if let Some(&id) = map.get(&data) {
            return id;
        }
        let mut keys = self.id_to_key.write().unwrap_or_else(PoisonError::into_inner);
        let id = TypeId(keys.len() as u32);
        trace!(type_id = id.0, ?data, "intern");
        keys.push(data.clone());
        map.insert(data, id);
        id
    }

    /// Structure behind `id`, or `None` for an id this interner never produced.
    pub fn lookup(&self, id: TypeId) -> Option<TypeData> {
        self.id_to_key
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(id.0 as usize)
            .cloned()
    }

    /// Number of distinct types interned so far.
    pub fn len(&self) -> usize {
        self.id_to_key.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn void(&self) -> TypeId {
        TypeId::VOID
    }

    pub fn primitive(&self, kind: PrimitiveKind) -> TypeId {
        kind.type_id()
    }

    pub fn boxed(&self, kind: PrimitiveKind) -> TypeId {
        self.intern(TypeData::Boxed(kind))
    }

    /// A declared type reference.
    ///
    /// Names of boxed primitives (`Boolean`, `java.lang.Integer`) are folded
    /// into `TypeData::Boxed` so both spellings compare equal.
    pub fn declared(&self, name: &str, args: &[TypeId]) -> TypeId {
        if args.is_empty() {
            if let Some(kind) = PrimitiveKind::from_box_name(name) {
                return self.boxed(kind);
            }
        }
        self.intern(TypeData::Declared(DeclaredType {
            name: Arc::from(name),
            args: SmallVec::from_slice(args),
        }))
    }

    /// The type variable `name` introduced by `owner`.
    pub fn type_param(&self, owner: &str, name: &str) -> TypeId {
        self.intern(TypeData::TypeParam(TypeParamRef {
            owner: Arc::from(owner),
            name: Arc::from(name),
        }))
    }

    pub fn array(&self, element: TypeId) -> TypeId {
        self.intern(TypeData::Array(element))
    }

    pub fn wildcard(&self, bound: WildcardBound) -> TypeId {
        self.intern(TypeData::Wildcard(bound))
    }

    /// The erasure of `id`: declared types lose their type arguments and
    /// arrays erase their element type. Everything else erases to itself.
    pub fn erasure(&self, id: TypeId) -> TypeId {
        match self.lookup(id) {
            Some(TypeData::Declared(declared)) if !declared.args.is_empty() => {
                self.declared(&declared.name, &[])
            }
            Some(TypeData::Array(element)) => {
                let erased = self.erasure(element);
                if erased == element { id } else { self.array(erased) }
            }
            _ => id,
        }
    }

    /// Qualified name of a declared type, ignoring its arguments.
    pub fn declared_name(&self, id: TypeId) -> Option<Arc<str>> {
        match self.lookup(id)? {
            TypeData::Declared(declared) => Some(declared.name),
            TypeData::Boxed(kind) => Some(Arc::from(format!("java.lang.{}", kind.box_name()))),
            _ => None,
        }
    }

    /// Record that `sub` directly extends each of `supertypes`.
    ///
    /// Edges are stored between erasures; `List<String>` and `List<T>`
    /// share the same inheritance.
    pub fn add_supertypes(&self, sub: TypeId, supertypes: &[TypeId]) {
        let sub = self.erasure(sub);
        let erased: SmallVec<[TypeId; 4]> = supertypes.iter().map(|&ty| self.erasure(ty)).collect();
        self.inheritance.add_inheritance(sub, &erased);
    }

    pub fn inheritance(&self) -> &InheritanceGraph {
        &self.inheritance
    }
}

impl Default for TypeInterner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "../tests/intern_tests.rs"]
mod tests;

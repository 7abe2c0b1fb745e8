//! Structural type representation.
//!
//! Types are described by `TypeData` and referred to everywhere else by the
//! interned `TypeId` handle. Two structurally equal types always intern to
//! the same id, so identity comparison is type equality.

use smallvec::SmallVec;
use std::sync::Arc;

/// Interned type handle.
///
/// The primitive types and `void` are pre-registered at fixed ids so callers
/// can refer to them without an interner at hand.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeId(pub u32);

impl TypeId {
    pub const VOID: TypeId = TypeId(0);
    pub const BOOLEAN: TypeId = TypeId(1);
    pub const BYTE: TypeId = TypeId(2);
    pub const SHORT: TypeId = TypeId(3);
    pub const INT: TypeId = TypeId(4);
    pub const LONG: TypeId = TypeId(5);
    pub const CHAR: TypeId = TypeId(6);
    pub const FLOAT: TypeId = TypeId(7);
    pub const DOUBLE: TypeId = TypeId(8);

    /// Number of ids reserved for intrinsics.
    pub const FIRST_USER: u32 = 9;
}

/// The primitive value types of the host language.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PrimitiveKind {
    Boolean,
    Byte,
    Short,
    Int,
    Long,
    Char,
    Float,
    Double,
}

impl PrimitiveKind {
    pub const ALL: [PrimitiveKind; 8] = [
        PrimitiveKind::Boolean,
        PrimitiveKind::Byte,
        PrimitiveKind::Short,
        PrimitiveKind::Int,
        PrimitiveKind::Long,
        PrimitiveKind::Char,
        PrimitiveKind::Float,
        PrimitiveKind::Double,
    ];

    /// Source keyword for the primitive (`int`, `boolean`, ...).
    pub const fn keyword(self) -> &'static str {
        match self {
            PrimitiveKind::Boolean => "boolean",
            PrimitiveKind::Byte => "byte",
            PrimitiveKind::Short => "short",
            PrimitiveKind::Int => "int",
            PrimitiveKind::Long => "long",
            PrimitiveKind::Char => "char",
            PrimitiveKind::Float => "float",
            PrimitiveKind::Double => "double",
        }
    }

    /// Simple name of the boxed reference type (`Integer`, `Boolean`, ...).
    pub const fn box_name(self) -> &'static str {
        match self {
            PrimitiveKind::Boolean => "Boolean",
            PrimitiveKind::Byte => "Byte",
            PrimitiveKind::Short => "Short",
            PrimitiveKind::Int => "Integer",
            PrimitiveKind::Long => "Long",
            PrimitiveKind::Char => "Character",
            PrimitiveKind::Float => "Float",
            PrimitiveKind::Double => "Double",
        }
    }

    /// Fixed id the interner reserves for this primitive.
    pub const fn type_id(self) -> TypeId {
        match self {
            PrimitiveKind::Boolean => TypeId::BOOLEAN,
            PrimitiveKind::Byte => TypeId::BYTE,
            PrimitiveKind::Short => TypeId::SHORT,
            PrimitiveKind::Int => TypeId::INT,
            PrimitiveKind::Long => TypeId::LONG,
            PrimitiveKind::Char => TypeId::CHAR,
            PrimitiveKind::Float => TypeId::FLOAT,
            PrimitiveKind::Double => TypeId::DOUBLE,
        }
    }

    pub fn from_keyword(keyword: &str) -> Option<PrimitiveKind> {
        Self::ALL.into_iter().find(|kind| kind.keyword() == keyword)
    }

    /// Accepts both the simple box name and its `java.lang.` qualified form.
    pub fn from_box_name(name: &str) -> Option<PrimitiveKind> {
        let simple = name.strip_prefix("java.lang.").unwrap_or(name);
        Self::ALL.into_iter().find(|kind| kind.box_name() == simple)
    }
}

/// A reference to a declared (named) type, with optional type arguments.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DeclaredType {
    pub name: Arc<str>,
    pub args: SmallVec<[TypeId; 4]>,
}

/// Bound of a `?` wildcard type argument.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum WildcardBound {
    Unbounded,
    Extends(TypeId),
    Super(TypeId),
}

/// A type variable and the declaration that introduces it.
///
/// `T` on `Named<T>` and `T` on `Box<T>` are different types.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TypeParamRef {
    /// Qualified name of the interface, or `Interface.method` for a
    /// method type parameter.
    pub owner: Arc<str>,
    pub name: Arc<str>,
}

/// The structure behind a `TypeId`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum TypeData {
    Void,
    Primitive(PrimitiveKind),
    /// Boxed reference form of a primitive.
    Boxed(PrimitiveKind),
    Declared(DeclaredType),
    /// A type variable, distinct per introducing declaration.
    TypeParam(TypeParamRef),
    Array(TypeId),
    Wildcard(WildcardBound),
}

impl TypeData {
    /// Returns `true` for types whose values may be `null`.
    pub fn is_reference(&self) -> bool {
        matches!(
            self,
            TypeData::Boxed(_) | TypeData::Declared(_) | TypeData::TypeParam(_) | TypeData::Array(_)
        )
    }
}

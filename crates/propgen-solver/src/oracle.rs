//! The type oracle: the only way the introspection engine asks about types.
//!
//! The walker and extractor never inspect `TypeData` themselves. They go
//! through `TypeOracle`, so a host with a richer type system can plug in its
//! own notion of equality and subtyping.

use crate::format::TypeFormatter;
use crate::intern::{OBJECT_TYPE_NAME, TypeInterner};
use crate::types::{PrimitiveKind, TypeData, TypeId, WildcardBound};

/// Synchronous type-query service.
pub trait TypeOracle {
    /// Type identity as the host language defines it.
    fn is_same_type(&self, left: TypeId, right: TypeId) -> bool;

    /// Reflexive subtype test: `is_subtype(t, t)` is always `true`.
    fn is_subtype(&self, sub: TypeId, sup: TypeId) -> bool;

    fn primitive_type(&self, kind: PrimitiveKind) -> TypeId;

    fn boxed_type(&self, kind: PrimitiveKind) -> TypeId;

    /// The type with its type arguments removed; used to find the declaration behind a reference.
    fn erasure(&self, ty: TypeId) -> TypeId;

    /// Source-level rendering of a type, suitable for splicing into generated code.
    fn display(&self, ty: TypeId) -> String;
}

impl TypeOracle for TypeInterner {
    fn is_same_type(&self, left: TypeId, right: TypeId) -> bool {
        if left != right {
            return false;
        }
        // Two occurrences of a wildcard never denote the same type.
        !matches!(self.lookup(left), Some(TypeData::Wildcard(_)))
    }

    fn is_subtype(&self, sub: TypeId, sup: TypeId) -> bool {
        if sub == sup {
            return true;
        }
        let (Some(sub_data), Some(sup_data)) = (self.lookup(sub), self.lookup(sup)) else {
            return false;
        };

        if sub_data.is_reference()
            && self.declared_name(sup).as_deref() == Some(OBJECT_TYPE_NAME)
        {
            return true;
        }

        match (&sub_data, &sup_data) {
            (TypeData::Array(sub_elem), TypeData::Array(sup_elem)) => {
                let sub_is_ref = self.lookup(*sub_elem).is_some_and(|d| d.is_reference());
                sub_is_ref && self.is_subtype(*sub_elem, *sup_elem)
            }
            (TypeData::Declared(_), TypeData::Declared(sup_declared)) => {
                let sub_erased = self.erasure(sub);
                let sup_erased = self.erasure(sup);
                if sub_erased == sup_erased {
                    // Same generic type: arguments must agree (or the target is raw).
                    return sup_declared.args.is_empty() || self.type_args_contain(sub, sup);
                }
                self.inheritance().is_derived_from(sub_erased, sup_erased)
            }
            (TypeData::Boxed(_), TypeData::Declared(_)) => {
                self.inheritance().is_derived_from(sub, self.erasure(sup))
            }
            _ => false,
        }
    }

    fn primitive_type(&self, kind: PrimitiveKind) -> TypeId {
        self.primitive(kind)
    }

    fn boxed_type(&self, kind: PrimitiveKind) -> TypeId {
        self.boxed(kind)
    }

    fn erasure(&self, ty: TypeId) -> TypeId {
        TypeInterner::erasure(self, ty)
    }

    fn display(&self, ty: TypeId) -> String {
        TypeFormatter::new(self).format(ty)
    }
}

impl TypeInterner {
    /// Argument-wise containment for two parameterizations of the same generic type.
    fn type_args_contain(&self, sub: TypeId, sup: TypeId) -> bool {
        let (Some(TypeData::Declared(sub_decl)), Some(TypeData::Declared(sup_decl))) =
            (self.lookup(sub), self.lookup(sup))
        else {
            return false;
        };
        if sub_decl.args.len() != sup_decl.args.len() {
            // Raw source against a parameterized target is an unchecked conversion.
            return sub_decl.args.is_empty();
        }
        sub_decl
            .args
            .iter()
            .zip(sup_decl.args.iter())
            .all(|(&arg, &target)| match self.lookup(target) {
                Some(TypeData::Wildcard(WildcardBound::Unbounded)) => true,
                Some(TypeData::Wildcard(WildcardBound::Extends(bound))) => self.is_subtype(arg, bound),
                Some(TypeData::Wildcard(WildcardBound::Super(bound))) => self.is_subtype(bound, arg),
                _ => arg == target,
            })
    }
}

#[cfg(test)]
#[path = "../tests/oracle_tests.rs"]
mod tests;

//! Accessor pattern extraction.
//!
//! | shape                         | result                         |
//! |-------------------------------|--------------------------------|
//! | `getX()`                      | readable `x`, return type      |
//! | `setX(v)`                     | writable `x`, parameter type   |
//! | `isX()` returning `boolean`/`Boolean` | readable `x`, return type |
//! | anything else                 | plain method                   |
//!
//! A bare `get`, `set` or `is` names no property and is a plain method.

use crate::annotation::apply_property_annotation;
use crate::environment::Environment;
use crate::error::IntrospectError;
use propgen_common::uncapitalize;
use propgen_model::{MethodDecl, Property};
use propgen_solver::{PrimitiveKind, TypeId, TypeOracle};

/// Which accessor convention a method follows.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum AccessorKind {
    Getter,
    Setter,
    Predicate,
}

impl AccessorKind {
    pub const fn prefix(self) -> &'static str {
        match self {
            AccessorKind::Getter => "get",
            AccessorKind::Setter => "set",
            AccessorKind::Predicate => "is",
        }
    }

    /// Kind and remaining name, if `name` starts with an accessor prefix
    /// followed by at least one character.
    pub fn split(name: &str) -> Option<(AccessorKind, &str)> {
        [AccessorKind::Getter, AccessorKind::Setter, AccessorKind::Predicate]
            .into_iter()
            .find_map(|kind| {
                name.strip_prefix(kind.prefix())
                    .filter(|rest| !rest.is_empty())
                    .map(|rest| (kind, rest))
            })
    }
}

/// The property candidate `method` describes, ignoring annotations.
pub fn property_candidate(method: &MethodDecl, oracle: &dyn TypeOracle) -> Option<Property> {
    let (kind, rest) = AccessorKind::split(&method.name)?;
    let name = uncapitalize(rest);
    match kind {
        AccessorKind::Getter if method.parameters.is_empty() => {
            Some(Property::readable(name, method.return_type))
        }
        AccessorKind::Setter if method.parameters.len() == 1 => {
            Some(Property::writable(name, method.parameters[0].ty))
        }
        AccessorKind::Predicate
            if method.parameters.is_empty() && is_boolean(oracle, method.return_type) =>
        {
            Some(Property::readable(name, method.return_type))
        }
        _ => None,
    }
}

fn is_boolean(oracle: &dyn TypeOracle, ty: TypeId) -> bool {
    oracle.is_same_type(ty, oracle.primitive_type(PrimitiveKind::Boolean))
        || oracle.is_same_type(ty, oracle.boxed_type(PrimitiveKind::Boolean))
}

/// Property described by `method` with its annotation applied, or `None`
/// for a plain method.
pub fn extract_property(
    method: &MethodDecl,
    env: &Environment<'_>,
) -> Result<Option<Property>, IntrospectError> {
    let Some(mut property) = property_candidate(method, env.oracle) else {
        return Ok(None);
    };
    if let Some(annotation_type) = env.property_annotation {
        apply_property_annotation(&mut property, method, annotation_type, env.oracle)?;
    }
    Ok(Some(property))
}

#[cfg(test)]
#[path = "../tests/accessor_tests.rs"]
mod tests;

//! Reading the property annotation on an accessor.
//!
//! The annotation has three members, each optional:
//!
//! | member       | value               | default              |
//! |--------------|---------------------|----------------------|
//! | `retainType` | `HOLD`/`NEW`/`CLONE` | `HOLD`              |
//! | `realType`   | a type              | the declared type    |
//! | `ignore`     | boolean             | `false`              |
//!
//! A fresh `Property` already carries the defaults, so only members that
//! are present change it.

use crate::error::IntrospectError;
use propgen_model::{AnnotationValue, MethodDecl, Property, RetainType};
use propgen_solver::{TypeId, TypeOracle};
use tracing::trace;

/// Simple name of the property annotation used when none is configured.
pub const DEFAULT_PROPERTY_ANNOTATION: &str = "Property";

pub const RETAIN_TYPE_MEMBER: &str = "retainType";
pub const REAL_TYPE_MEMBER: &str = "realType";
pub const IGNORE_MEMBER: &str = "ignore";

/// Apply the first annotation on `method` whose type equals `annotation_type`.
pub fn apply_property_annotation(
    property: &mut Property,
    method: &MethodDecl,
    annotation_type: TypeId,
    oracle: &dyn TypeOracle,
) -> Result<(), IntrospectError> {
    let Some(annotation) = method
        .annotations
        .iter()
        .find(|a| oracle.is_same_type(a.annotation_type, annotation_type))
    else {
        return Ok(());
    };

    for (member, value) in &annotation.values {
        let invalid = |message: String| IntrospectError::InvalidAnnotationValue {
            method: method.name.clone(),
            member: member.clone(),
            message,
        };
        match member.as_str() {
            RETAIN_TYPE_MEMBER => {
                let constant = match value {
                    AnnotationValue::EnumConstant(name) | AnnotationValue::Str(name) => name,
                    other => return Err(invalid(format!("expected an enum constant, found {other:?}"))),
                };
                // `RetainType.NEW` and `NEW` both name the constant.
                let simple = constant.rsplit('.').next().unwrap_or(constant.as_str());
                let retain = simple
                    .parse::<RetainType>()
                    .map_err(|err| invalid(err.to_string()))?;
                property.set_retain(retain);
            }
            REAL_TYPE_MEMBER => match value {
                AnnotationValue::Type(ty) => property.set_real_type(Some(*ty)),
                other => return Err(invalid(format!("expected a type, found {other:?}"))),
            },
            IGNORE_MEMBER => match value {
                AnnotationValue::Bool(ignore) => property.set_ignored(*ignore),
                other => return Err(invalid(format!("expected a boolean, found {other:?}"))),
            },
            _ => trace!(method = %method.name, member = %member, "ignoring unknown annotation member"),
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "../tests/annotation_tests.rs"]
mod tests;

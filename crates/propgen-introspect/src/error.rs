//! Errors raised while introspecting an interface.

/// Fatal introspection failure. Non-accessor methods and unknown annotation
/// members are not errors; they are recorded or skipped.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IntrospectError {
    #[error("the qualified name of the interface was empty")]
    MissingQualifiedName,

    #[error("`{name}` is not an interface")]
    NotAnInterface { name: String },

    #[error("`{referenced_from}` extends `{name}`, which has no declaration")]
    UnresolvedType { name: String, referenced_from: String },

    #[error("cyclic inheritance: `{name}` extends itself through `{via}`")]
    CyclicInheritance { name: String, via: String },

    #[error("interface hierarchy of `{root}` is deeper than {limit} levels")]
    HierarchyTooDeep { root: String, limit: u32 },

    #[error("interface hierarchy of `{root}` has more than {limit} superinterface visits")]
    HierarchyTooLarge { root: String, limit: u32 },

    #[error("invalid value for `{member}` on `{method}`: {message}")]
    InvalidAnnotationValue {
        method: String,
        member: String,
        message: String,
    },
}

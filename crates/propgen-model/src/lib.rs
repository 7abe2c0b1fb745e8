//! Declaration and property model.
//!
//! Two halves:
//!
//! - **Input**: `DeclarationSet` and friends describe interfaces the way an
//!   external declaration loader hands them over (qualified name, extended
//!   interfaces, members, type parameters). `loader` builds them from JSON.
//! - **Output**: `Property`, `Field` and `InterfaceDefinition` hold what the
//!   walker infers, ready for an emitter.
pub mod attribute;
pub mod declarations;
pub mod definition;
pub mod loader;

pub use attribute::{
    Attribute, DEFAULT_METHOD_MODIFIER, Field, Property, PropertyFlags, RetainType,
    UnknownRetainType,
};
pub use declarations::{
    AnnotationDecl, AnnotationValue, ConstantDecl, DeclKind, DeclarationSet, MemberDecl,
    MethodDecl, ParameterDecl, TypeDecl, TypeParameterDecl,
};
pub use definition::{InterfaceDefinition, InterfaceHeader, PlainMethod};
pub use loader::{LoadError, parse_declarations};

//! Inputs for class emission.
//!
//! Nothing here writes source text. This crate computes what an emitter
//! needs besides the `InterfaceDefinition` itself:
//!
//! - **Naming**: concrete and abstract class names for an interface
//! - **Retain**: the expression that stores a constructor/setter argument
//! - **Plan**: a serializable bundle of names, fields and plain methods
pub mod naming;
pub mod plan;
pub mod retain;

pub use naming::{ClassNameResolver, NamingError, NamingStrategy, UnknownNamingStrategy};
pub use plan::{ClassPlan, FieldPlan, MethodPlan, ParameterPlan, TypeParameterPlan};
pub use retain::{RetainCode, capture_expression};

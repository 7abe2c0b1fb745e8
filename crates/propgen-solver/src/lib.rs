//! Type model and type oracle.
//!
//! This crate owns everything the introspection engine needs to ask about
//! types without knowing where they came from:
//!
//! - **Interning**: `TypeData` structures are deduplicated into `TypeId` handles
//! - **Inheritance**: declared supertype edges, queried by erasure
//! - **Oracle**: the `TypeOracle` trait answering equality and subtype questions
//! - **Syntax**: textual type references (`java.util.List<T>[]`) parsed into `TypeId`s
//! - **Recursion**: `RecursionGuard` for cycle detection in hierarchy walks
mod format;
mod inheritance;
mod intern;
mod oracle;
pub mod recursion;
pub mod type_syntax;
pub mod types;

pub use format::TypeFormatter;
pub use inheritance::InheritanceGraph;
pub use intern::TypeInterner;
pub use oracle::TypeOracle;
pub use recursion::{RecursionGuard, RecursionProfile, RecursionResult};
pub use type_syntax::{TypeParser, TypeScope, TypeSyntaxError};
pub use types::{DeclaredType, PrimitiveKind, TypeData, TypeId, TypeParamRef, WildcardBound};

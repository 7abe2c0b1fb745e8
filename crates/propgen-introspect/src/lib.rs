//! Property introspection.
//!
//! Turns interface declarations into `InterfaceDefinition`s:
//!
//! - **Accessor**: classifies one method as getter, setter, boolean predicate or plain
//! - **Annotation**: applies the property annotation (`retainType`, `realType`, `ignore`)
//! - **Merge**: folds duplicate declarations of the same property together
//! - **Walker**: drives the above over an interface and its superinterfaces
//!
//! `Introspector` is the entry point for callers that hold a whole
//! `DeclarationSet`.
pub mod accessor;
pub mod annotation;
pub mod capability;
mod environment;
mod error;
pub mod filter;
pub mod merge;
pub mod walker;

pub use accessor::{AccessorKind, extract_property, property_candidate};
pub use annotation::{DEFAULT_PROPERTY_ANNOTATION, apply_property_annotation};
pub use capability::{CapabilityPredicate, DEFAULT_CAPABILITY_MARKER};
pub use environment::Environment;
pub use error::IntrospectError;
pub use filter::{AcceptAll, GlobFilter, InterfaceFilter};
pub use merge::{MergeOutcome, merge_property};
pub use walker::HierarchyWalker;

use propgen_model::{DeclarationSet, InterfaceDefinition, TypeDecl};
use propgen_solver::{TypeId, TypeOracle};
use tracing::debug;

/// Introspects the interfaces of one `DeclarationSet`.
pub struct Introspector<'a> {
    env: Environment<'a>,
    filter: Box<dyn InterfaceFilter + 'a>,
}

impl<'a> Introspector<'a> {
    pub fn new(oracle: &'a dyn TypeOracle, declarations: &'a DeclarationSet) -> Self {
        Introspector {
            env: Environment::new(oracle, declarations),
            filter: Box::new(AcceptAll),
        }
    }

    pub fn with_capability(mut self, capability: CapabilityPredicate) -> Self {
        self.env.capability = capability;
        self
    }

    pub fn with_property_annotation(mut self, annotation_type: TypeId) -> Self {
        self.env.property_annotation = Some(annotation_type);
        self
    }

    pub fn with_filter(mut self, filter: impl InterfaceFilter + 'a) -> Self {
        self.filter = Box::new(filter);
        self
    }

    pub fn environment(&self) -> &Environment<'a> {
        &self.env
    }

    /// Walk one interface and its superinterfaces.
    pub fn introspect(&self, decl: &TypeDecl) -> Result<InterfaceDefinition, IntrospectError> {
        HierarchyWalker::walk(&self.env, decl)
    }

    /// Walk every interface the filter accepts, in declaration order.
    ///
    /// The capability marker itself is never processed. The first failure
    /// stops the run.
    pub fn introspect_all(&self) -> Result<Vec<(&'a TypeDecl, InterfaceDefinition)>, IntrospectError> {
        let declarations: &'a DeclarationSet = self.env.declarations;
        let mut definitions = Vec::new();
        for decl in declarations.interfaces() {
            if self.env.capability.is_marker(self.env.oracle, decl.ty) {
                debug!(interface = %decl.qualified_name, "skipping capability marker");
                continue;
            }
            if !self.filter.can_handle(decl) {
                debug!(interface = %decl.qualified_name, "rejected by filter");
                continue;
            }
            definitions.push((decl, self.introspect(decl)?));
        }
        Ok(definitions)
    }
}

#[cfg(test)]
#[path = "../tests/introspector_tests.rs"]
mod tests;

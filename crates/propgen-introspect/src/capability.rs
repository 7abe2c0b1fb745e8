//! Detection of capability (marker) superinterfaces.
//!
//! A superinterface that is a subtype of the configured marker contributes
//! behaviour the generated class supplies on its own (change-event
//! plumbing), so the walker skips its whole subtree.

use propgen_common::split_qualified_name;
use propgen_model::DeclarationSet;
use propgen_solver::{TypeId, TypeInterner, TypeOracle};
use tracing::debug;

/// Simple name of the marker used when none is configured. Being
/// unqualified, it matches a declared interface of that name in any package.
pub const DEFAULT_CAPABILITY_MARKER: &str = "PropertyChangeEventAware";

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum CapabilityPredicate {
    /// No superinterface is ever treated as a capability.
    #[default]
    Disabled,
    /// Superinterfaces that are subtypes of this marker are capabilities.
    SubtypeOf(TypeId),
}

impl CapabilityPredicate {
    /// Predicate for the marker named `qualified_name`.
    pub fn marker(interner: &TypeInterner, qualified_name: &str) -> Self {
        CapabilityPredicate::SubtypeOf(interner.declared(qualified_name, &[]))
    }

    /// Predicate for the marker called `name`.
    ///
    /// A name without a package selects the first declared interface with
    /// that simple name; a qualified name is taken as is.
    pub fn resolve(interner: &TypeInterner, declarations: &DeclarationSet, name: &str) -> Self {
        if !name.contains('.') {
            let found = declarations.interfaces().find(|decl| {
                split_qualified_name(&decl.qualified_name).is_some_and(|q| q.simple_name == name)
            });
            if let Some(decl) = found {
                debug!(marker = name, resolved = %decl.qualified_name, "capability marker resolved by simple name");
                return CapabilityPredicate::SubtypeOf(decl.ty);
            }
        }
        Self::marker(interner, name)
    }

    pub fn matches(&self, oracle: &dyn TypeOracle, ty: TypeId) -> bool {
        match *self {
            CapabilityPredicate::Disabled => false,
            CapabilityPredicate::SubtypeOf(marker) => oracle.is_subtype(ty, marker),
        }
    }

    /// `true` if `ty` is the marker interface itself.
    pub fn is_marker(&self, oracle: &dyn TypeOracle, ty: TypeId) -> bool {
        match *self {
            CapabilityPredicate::Disabled => false,
            CapabilityPredicate::SubtypeOf(marker) => oracle.erasure(ty) == marker,
        }
    }
}

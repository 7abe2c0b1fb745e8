use crate::capability::CapabilityPredicate;
use propgen_model::DeclarationSet;
use propgen_solver::{TypeId, TypeOracle};

/// Read-only inputs shared by every traversal of one run.
#[derive(Copy, Clone)]
pub struct Environment<'a> {
    pub oracle: &'a dyn TypeOracle,
    pub declarations: &'a DeclarationSet,
    pub capability: CapabilityPredicate,
    /// Type of the property annotation; `None` disables annotation handling.
    pub property_annotation: Option<TypeId>,
}

impl<'a> Environment<'a> {
    pub fn new(oracle: &'a dyn TypeOracle, declarations: &'a DeclarationSet) -> Self {
        Environment {
            oracle,
            declarations,
            capability: CapabilityPredicate::Disabled,
            property_annotation: None,
        }
    }
}

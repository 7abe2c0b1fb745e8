//! Reconciling a property candidate with those already collected.

use propgen_model::{Attribute, InterfaceDefinition, Property};
use propgen_solver::TypeOracle;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MergeOutcome {
    /// An entry with the same name and type absorbed the candidate's access flags.
    Merged,
    /// The candidate was appended as a new property.
    Added,
}

/// Merge `candidate` into `definition`.
///
/// Only readable/writable are combined; every other attribute of the
/// existing entry wins and the candidate is dropped.
pub fn merge_property(
    definition: &mut InterfaceDefinition,
    candidate: Property,
    oracle: &dyn TypeOracle,
) -> MergeOutcome {
    match definition.find_property_mut(oracle, candidate.name(), candidate.declared_type()) {
        Some(existing) => {
            existing.absorb_access(&candidate);
            MergeOutcome::Merged
        }
        None => {
            definition.push_property(candidate);
            MergeOutcome::Added
        }
    }
}

#[cfg(test)]
#[path = "../tests/merge_tests.rs"]
mod tests;

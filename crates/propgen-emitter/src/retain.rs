//! Field retention code.

use propgen_model::{Attribute, RetainType};
use propgen_solver::TypeOracle;

/// The expression storing `arg_name` under `retain`, with `real_type` as
/// the instantiated type for `NEW`.
pub fn capture_expression(retain: RetainType, arg_name: &str, real_type: &str) -> String {
    match retain {
        RetainType::Hold => arg_name.to_string(),
        RetainType::New => format!("{arg_name} == null ? null : new {real_type}({arg_name})"),
        RetainType::Clone => format!("{arg_name}.clone()"),
    }
}

/// Capture code for an attribute.
pub trait RetainCode {
    fn code_for(&self, arg_name: &str, attribute: &dyn Attribute, oracle: &dyn TypeOracle) -> String;
}

impl RetainCode for RetainType {
    fn code_for(&self, arg_name: &str, attribute: &dyn Attribute, oracle: &dyn TypeOracle) -> String {
        let real_type = oracle.display(attribute.real_type());
        capture_expression(*self, arg_name, &real_type)
    }
}

#[cfg(test)]
#[path = "../tests/retain_tests.rs"]
mod tests;

//! Selection of the interfaces a run processes.

use globset::{GlobBuilder, GlobSet, GlobSetBuilder};
use propgen_model::TypeDecl;

/// Decides whether an interface is handed to the walker at all.
pub trait InterfaceFilter {
    fn can_handle(&self, decl: &TypeDecl) -> bool;
}

/// Accepts every interface.
#[derive(Copy, Clone, Debug, Default)]
pub struct AcceptAll;

impl InterfaceFilter for AcceptAll {
    fn can_handle(&self, _decl: &TypeDecl) -> bool {
        true
    }
}

/// Include/exclude glob patterns over qualified names (`com.acme.*`).
///
/// An empty include list accepts everything not excluded.
#[derive(Clone, Debug)]
pub struct GlobFilter {
    include: Option<GlobSet>,
    exclude: GlobSet,
}

impl GlobFilter {
    pub fn new<S: AsRef<str>>(include: &[S], exclude: &[S]) -> Result<Self, globset::Error> {
        let include = if include.is_empty() {
            None
        } else {
            Some(build_set(include)?)
        };
        Ok(GlobFilter {
            include,
            exclude: build_set(exclude)?,
        })
    }
}

fn build_set<S: AsRef<str>>(patterns: &[S]) -> Result<GlobSet, globset::Error> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        builder.add(
            GlobBuilder::new(pattern.as_ref().trim())
                .literal_separator(false)
                .build()?,
        );
    }
    builder.build()
}

impl InterfaceFilter for GlobFilter {
    fn can_handle(&self, decl: &TypeDecl) -> bool {
        let name = decl.qualified_name.as_str();
        if self.exclude.is_match(name) {
            return false;
        }
        self.include.as_ref().is_none_or(|include| include.is_match(name))
    }
}

#[cfg(test)]
#[path = "../tests/filter_tests.rs"]
mod tests;

//! Class name resolution.
//!
//! Both strategies build names as `prefix + capitalize(stem) + suffix`; they
//! differ only in the affixes and in how the stem is taken from the
//! interface's simple name.
//!
//! | strategy        | `Foo`                  | `IFoo`                  |
//! |-----------------|------------------------|-------------------------|
//! | `default`       | `FooImpl`, `AbstractFoo` | `IFooImpl`, `AbstractIFoo` |
//! | `remove-prefix` | error                  | `Foo`, `AbstractFoo`    |

use propgen_common::capitalize;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NamingError {
    #[error("interface name must not be empty")]
    Empty,
    #[error("interface name `{0}` is too short; expected a prefix letter followed by a name")]
    TooShort(String),
    #[error("interface name `{0}` must start with `I` or `T`")]
    MissingPrefix(String),
}

/// Affixes plus the stem rule of one naming strategy.
#[derive(Copy, Clone, Debug)]
pub struct ClassNameResolver {
    pub prefix: &'static str,
    pub suffix: &'static str,
    pub abstract_prefix: &'static str,
    pub abstract_suffix: &'static str,
    /// Validates the interface name and returns the part that is capitalized.
    pub stem: fn(&str) -> Result<&str, NamingError>,
}

impl ClassNameResolver {
    pub const DEFAULT: ClassNameResolver = ClassNameResolver {
        prefix: "",
        suffix: "Impl",
        abstract_prefix: "Abstract",
        abstract_suffix: "",
        stem: whole_name,
    };

    pub const REMOVE_PREFIX: ClassNameResolver = ClassNameResolver {
        prefix: "",
        suffix: "",
        abstract_prefix: "Abstract",
        abstract_suffix: "",
        stem: strip_interface_prefix,
    };

    pub fn class_name_for(&self, interface_name: &str) -> Result<String, NamingError> {
        let stem = (self.stem)(interface_name)?;
        Ok(format!("{}{}{}", self.prefix, capitalize(stem), self.suffix))
    }

    pub fn abstract_class_name_for(&self, interface_name: &str) -> Result<String, NamingError> {
        let stem = (self.stem)(interface_name)?;
        Ok(format!(
            "{}{}{}",
            self.abstract_prefix,
            capitalize(stem),
            self.abstract_suffix
        ))
    }
}

fn whole_name(name: &str) -> Result<&str, NamingError> {
    Ok(name)
}

fn strip_interface_prefix(name: &str) -> Result<&str, NamingError> {
    let mut chars = name.chars();
    let first = chars.next().ok_or(NamingError::Empty)?;
    let rest = chars.as_str();
    if rest.is_empty() {
        return Err(NamingError::TooShort(name.to_string()));
    }
    if first != 'I' && first != 'T' {
        return Err(NamingError::MissingPrefix(name.to_string()));
    }
    Ok(rest)
}

/// Named choice of resolver, as written in configuration.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NamingStrategy {
    #[default]
    Default,
    RemovePrefix,
}

impl NamingStrategy {
    pub const fn resolver(self) -> ClassNameResolver {
        match self {
            NamingStrategy::Default => ClassNameResolver::DEFAULT,
            NamingStrategy::RemovePrefix => ClassNameResolver::REMOVE_PREFIX,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            NamingStrategy::Default => "default",
            NamingStrategy::RemovePrefix => "remove-prefix",
        }
    }
}

impl fmt::Display for NamingStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown naming strategy `{0}` (expected `default` or `remove-prefix`)")]
pub struct UnknownNamingStrategy(pub String);

impl FromStr for NamingStrategy {
    type Err = UnknownNamingStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default" => Ok(NamingStrategy::Default),
            "remove-prefix" => Ok(NamingStrategy::RemovePrefix),
            other => Err(UnknownNamingStrategy(other.to_string())),
        }
    }
}

#[cfg(test)]
#[path = "../tests/naming_tests.rs"]
mod tests;

//! `propgen.json` loading and resolution against CLI flags.

use crate::args::CliArgs;
use anyhow::{Context, Result, bail};
use propgen_emitter::NamingStrategy;
use propgen_introspect::{DEFAULT_CAPABILITY_MARKER, DEFAULT_PROPERTY_ANNOTATION};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "propgen.json";

/// Contents of `propgen.json`. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PropgenConfig {
    #[serde(default)]
    pub naming: Option<NamingStrategy>,
    /// Name of the capability marker, qualified or simple; `null` disables
    /// the skip.
    #[serde(default, deserialize_with = "deserialize_marker")]
    pub capability_marker: Option<Option<String>>,
    #[serde(default)]
    pub property_annotation: Option<String>,
    #[serde(default)]
    pub include: Option<Vec<String>>,
    #[serde(default)]
    pub exclude: Option<Vec<String>>,
}

/// Keeps an explicit `null` apart from an absent field.
fn deserialize_marker<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

pub fn parse_config(source: &str) -> Result<PropgenConfig> {
    serde_json::from_str(source).context("failed to parse propgen config JSON")
}

pub fn load_config(path: &Path) -> Result<PropgenConfig> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    parse_config(&source).with_context(|| format!("failed to parse config: {}", path.display()))
}

/// The config file to use: the explicit one, or `propgen.json` beside the
/// declaration document when it exists.
pub fn find_config(explicit: Option<&Path>, declarations: &Path) -> Result<Option<PathBuf>> {
    if let Some(path) = explicit {
        let candidate = if path.is_dir() {
            path.join(CONFIG_FILE_NAME)
        } else {
            path.to_path_buf()
        };
        if !candidate.is_file() {
            bail!("config not found at {}", candidate.display());
        }
        return Ok(Some(candidate));
    }
    let sibling = declarations
        .parent()
        .map_or_else(|| PathBuf::from(CONFIG_FILE_NAME), |dir| dir.join(CONFIG_FILE_NAME));
    Ok(sibling.is_file().then_some(sibling))
}

/// Settings after applying defaults, the config file and CLI flags, in
/// increasing precedence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedConfig {
    pub naming: NamingStrategy,
    pub capability_marker: Option<String>,
    pub property_annotation: String,
    pub include: Vec<String>,
    pub exclude: Vec<String>,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        ResolvedConfig {
            naming: NamingStrategy::Default,
            capability_marker: Some(DEFAULT_CAPABILITY_MARKER.to_string()),
            property_annotation: DEFAULT_PROPERTY_ANNOTATION.to_string(),
            include: Vec::new(),
            exclude: Vec::new(),
        }
    }
}

impl ResolvedConfig {
    pub fn resolve(config: Option<PropgenConfig>, args: &CliArgs) -> Self {
        let mut resolved = ResolvedConfig::default();

        if let Some(config) = config {
            if let Some(naming) = config.naming {
                resolved.naming = naming;
            }
            if let Some(marker) = config.capability_marker {
                resolved.capability_marker = marker;
            }
            if let Some(annotation) = config.property_annotation {
                resolved.property_annotation = annotation;
            }
            if let Some(include) = config.include {
                resolved.include = include;
            }
            if let Some(exclude) = config.exclude {
                resolved.exclude = exclude;
            }
        }

        if let Some(naming) = args.naming {
            resolved.naming = naming;
        }
        if args.no_capability {
            resolved.capability_marker = None;
        } else if let Some(marker) = &args.capability_marker {
            resolved.capability_marker = Some(marker.clone());
        }
        if let Some(annotation) = &args.property_annotation {
            resolved.property_annotation = annotation.clone();
        }
        if !args.include.is_empty() {
            resolved.include = args.include.clone();
        }
        if !args.exclude.is_empty() {
            resolved.exclude = args.exclude.clone();
        }
        resolved
    }
}

#[cfg(test)]
#[path = "../tests/config_tests.rs"]
mod tests;

//! Logging for the `propgen` binary.
//!
//! Logging stays off unless filter directives are given, through `--log`
//! or `PROPGEN_LOG` (`RUST_LOG` as a last resort). Events always go to
//! stderr; stdout carries the class plans.
//!
//! ```bash
//! PROPGEN_LOG=debug propgen decls.json
//! propgen decls.json --log propgen_introspect=trace --logFormat tree
//! ```

use clap::ValueEnum;
use tracing_subscriber::prelude::*;
use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{EnvFilter, Layer, Registry, fmt};

pub const LOG_ENV: &str = "PROPGEN_LOG";
pub const LOG_FORMAT_ENV: &str = "PROPGEN_LOG_FORMAT";
const FALLBACK_LOG_ENV: &str = "RUST_LOG";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Flat `tracing-subscriber` lines.
    #[default]
    Text,
    /// Indented spans and events via `tracing-tree`.
    Tree,
    /// One JSON object per event.
    Json,
}

impl LogFormat {
    /// Case-insensitive; unknown names fall back to `Text`.
    pub fn parse(value: &str) -> Self {
        <Self as ValueEnum>::from_str(value.trim(), true).unwrap_or_default()
    }

    fn layer(self) -> Box<dyn Layer<Registry> + Send + Sync> {
        match self {
            LogFormat::Text => fmt::layer().with_writer(std::io::stderr).boxed(),
            LogFormat::Json => fmt::layer().json().with_writer(std::io::stderr).boxed(),
            LogFormat::Tree => tracing_tree::HierarchicalLayer::default()
                .with_indent_amount(2)
                .with_indent_lines(true)
                .with_targets(true)
                .boxed(),
        }
    }
}

/// Filter directives and output format for one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogSettings {
    /// `RUST_LOG`-style directives; `None` disables logging.
    pub directives: Option<String>,
    pub format: LogFormat,
}

impl LogSettings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// `PROPGEN_LOG` wins over `RUST_LOG`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        LogSettings {
            directives: lookup(LOG_ENV).or_else(|| lookup(FALLBACK_LOG_ENV)),
            format: lookup(LOG_FORMAT_ENV)
                .map(|value| LogFormat::parse(&value))
                .unwrap_or_default(),
        }
    }

    /// Command-line values take precedence over the environment.
    pub fn with_overrides(mut self, directives: Option<&str>, format: Option<LogFormat>) -> Self {
        if let Some(directives) = directives {
            self.directives = Some(directives.to_string());
        }
        if let Some(format) = format {
            self.format = format;
        }
        self
    }
}

/// Install the global subscriber described by `settings`.
pub fn init_tracing(settings: &LogSettings) -> Result<(), TryInitError> {
    let Some(directives) = &settings.directives else {
        return Ok(());
    };
    let filter = EnvFilter::builder().parse_lossy(directives);
    Registry::default()
        .with(settings.format.layer().with_filter(filter))
        .try_init()
}

#[cfg(test)]
#[path = "../tests/tracing_config_tests.rs"]
mod tests;

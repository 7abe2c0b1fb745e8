use crate::tracing_config::LogFormat;
use clap::Parser;
use propgen_emitter::NamingStrategy;
use std::path::PathBuf;

/// CLI arguments for the propgen binary.
#[derive(Parser, Debug)]
#[command(
    name = "propgen",
    version,
    about = "Infer properties from interface declarations and plan their implementation classes"
)]
pub struct CliArgs {
    /// Declaration document (JSON) describing the interfaces to process.
    pub declarations: PathBuf,

    /// Path to propgen.json. Defaults to propgen.json next to the declarations.
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,

    /// Write the class plans here instead of stdout.
    #[arg(short = 'o', long = "out")]
    pub out: Option<PathBuf>,

    /// Class naming strategy: `default` (FooImpl) or `remove-prefix` (IFoo -> Foo).
    #[arg(long)]
    pub naming: Option<NamingStrategy>,

    /// Name of the capability marker interface [default: PropertyChangeEventAware].
    ///
    /// A name without a package matches a declared interface of that simple name.
    #[arg(long = "capabilityMarker", alias = "capability-marker")]
    pub capability_marker: Option<String>,

    /// Treat no superinterface as a capability.
    #[arg(long = "noCapability", alias = "no-capability", conflicts_with = "capability_marker")]
    pub no_capability: bool,

    /// Qualified name of the property annotation.
    #[arg(long = "propertyAnnotation", alias = "property-annotation")]
    pub property_annotation: Option<String>,

    /// Glob over qualified interface names to process (repeatable).
    #[arg(long)]
    pub include: Vec<String>,

    /// Glob over qualified interface names to skip (repeatable).
    #[arg(long)]
    pub exclude: Vec<String>,

    /// Process only this interface.
    #[arg(long)]
    pub interface: Option<String>,

    /// Print the resolved configuration instead of processing.
    #[arg(long = "showConfig", alias = "show-config")]
    pub show_config: bool,

    /// Pretty-print the JSON output.
    #[arg(long)]
    pub pretty: bool,

    /// Log filter directives, as in `RUST_LOG`. Overrides `PROPGEN_LOG`.
    #[arg(long)]
    pub log: Option<String>,

    /// Log output format. Overrides `PROPGEN_LOG_FORMAT`.
    #[arg(long = "logFormat", alias = "log-format", value_enum)]
    pub log_format: Option<LogFormat>,
}

//! Load declarations, introspect them and emit class plans.

use crate::args::CliArgs;
use crate::config::{ResolvedConfig, find_config, load_config};
use anyhow::{Context, Result, bail};
use propgen_emitter::ClassPlan;
use propgen_introspect::{CapabilityPredicate, GlobFilter, Introspector};
use propgen_model::parse_declarations;
use propgen_solver::TypeInterner;
use serde::Serialize;
use std::io::Write;
use tracing::{debug, info};

/// The document written by a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlanDocument {
    pub classes: Vec<ClassPlan>,
}

/// Introspect every selected interface in `source` and plan its classes.
///
/// `only` restricts the run to one interface by qualified name; the
/// include/exclude filter does not apply to it.
pub fn generate(source: &str, config: &ResolvedConfig, only: Option<&str>) -> Result<PlanDocument> {
    let interner = TypeInterner::new();
    let declarations =
        parse_declarations(source, &interner).context("failed to load declarations")?;
    debug!(types = declarations.len(), "declarations loaded");

    let filter = GlobFilter::new(config.include.as_slice(), config.exclude.as_slice())
        .context("invalid include/exclude pattern")?;
    let mut introspector = Introspector::new(&interner, &declarations)
        .with_property_annotation(interner.declared(&config.property_annotation, &[]))
        .with_filter(filter);
    if let Some(marker) = &config.capability_marker {
        introspector = introspector.with_capability(CapabilityPredicate::resolve(&interner, &declarations, marker));
    }

    let definitions = match only {
        Some(name) => {
            let Some(decl) = declarations.by_name(name) else {
                bail!("interface `{name}` is not declared");
            };
            let definition = introspector
                .introspect(decl)
                .with_context(|| format!("failed to introspect `{name}`"))?;
            vec![(decl, definition)]
        }
        None => introspector
            .introspect_all()
            .context("failed to introspect declarations")?,
    };

    let resolver = config.naming.resolver();
    let mut classes = Vec::with_capacity(definitions.len());
    for (decl, definition) in &definitions {
        let plan = ClassPlan::build(definition, &interner, &resolver)
            .with_context(|| format!("cannot name the classes for `{}`", decl.qualified_name))?;
        classes.push(plan);
    }
    Ok(PlanDocument { classes })
}

/// Run the CLI: resolve configuration, generate, write the result.
pub fn run(args: &CliArgs) -> Result<()> {
    let config_path = find_config(args.config.as_deref(), &args.declarations)?;
    let config = config_path.as_deref().map(load_config).transpose()?;
    if let Some(path) = &config_path {
        debug!(config = %path.display(), "using config file");
    }
    let resolved = ResolvedConfig::resolve(config, args);

    if args.show_config {
        let rendered = render(&resolved, true)?;
        return write_output(args, &rendered);
    }

    let source = std::fs::read_to_string(&args.declarations).with_context(|| {
        format!("failed to read declarations: {}", args.declarations.display())
    })?;
    let document = generate(&source, &resolved, args.interface.as_deref())?;
    info!(classes = document.classes.len(), "planned classes");

    let rendered = render(&document, args.pretty)?;
    write_output(args, &rendered)
}

fn render<T: Serialize>(value: &T, pretty: bool) -> Result<String> {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    rendered.context("failed to serialize output")
}

fn write_output(args: &CliArgs, rendered: &str) -> Result<()> {
    match &args.out {
        Some(path) => std::fs::write(path, format!("{rendered}\n"))
            .with_context(|| format!("failed to write output: {}", path.display())),
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{rendered}").context("failed to write to stdout")
        }
    }
}

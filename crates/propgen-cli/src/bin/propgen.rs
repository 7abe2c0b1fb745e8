use anyhow::{Context, Result};
use clap::Parser;
use propgen_cli::args::CliArgs;
use propgen_cli::driver;
use propgen_cli::tracing_config::{LogSettings, init_tracing};

fn main() -> Result<()> {
    let args = CliArgs::parse();
    let settings = LogSettings::from_env().with_overrides(args.log.as_deref(), args.log_format);
    init_tracing(&settings).context("failed to install the log subscriber")?;
    driver::run(&args)
}

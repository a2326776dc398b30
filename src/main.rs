use anyhow::Context;
use clap::Parser;
use swaglint::{cli::Cli, commands, telemetry};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    telemetry::init_telemetry();

    let report = commands::execute_validate(&cli.input, cli.format)
        .with_context(|| format!("Failed to lint {}", cli.input.display()))?;

    if !report.is_empty() {
        std::process::exit(1);
    }

    Ok(())
}

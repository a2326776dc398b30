use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "swaglint")]
#[command(version)]
#[command(about = "Lint Swagger 2.0 documents against API naming conventions", long_about = None)]
pub struct Cli {
    /// Swagger 2.0 file (JSON, or YAML with a .yaml/.yml extension)
    #[arg(short, long)]
    pub input: PathBuf,

    /// Report format
    #[arg(short, long, default_value = "text")]
    pub format: ReportFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Violations grouped by resource, one per line
    Text,
    /// JSON object with the grouped violations and their total
    Json,
}

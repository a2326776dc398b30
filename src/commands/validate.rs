use crate::{
    cli::ReportFormat,
    loader,
    validation::{self, ViolationReport},
    Result,
};
use colored::*;
use serde::Serialize;
use std::fmt::Write as _;
use std::path::Path;
use tracing::info;

const CLEAN_MESSAGE: &str = "File follows the expected Swagger 2.0 rules";

/// Lint the document at `input` and print the report to stdout.
///
/// Returns the report so the caller can pick the exit status.
pub fn execute_validate(input: &Path, format: ReportFormat) -> Result<ViolationReport> {
    info!(input = %input.display(), "Linting Swagger document");

    let swagger = loader::load_swagger(input)?;
    let report = validation::validate(&swagger)?;

    match format {
        ReportFormat::Text => {
            print!("{}", render_text(&report));
            if report.is_empty() {
                println!("{}", CLEAN_MESSAGE.green());
            } else {
                println!(
                    "\n{}",
                    format!("Total violations: {}", report.total_violations())
                        .red()
                        .bold()
                );
            }
        }
        ReportFormat::Json => println!("{}", render_json(&report)?),
    }

    Ok(report)
}

/// Resource headers followed by their tab-indented violations
pub fn render_text(report: &ViolationReport) -> String {
    let mut out = String::new();

    for (resource, violations) in report.iter() {
        let _ = writeln!(out, "\n{}", resource);
        for violation in violations {
            let _ = writeln!(out, "\t{}", violation);
        }
    }

    out
}

#[derive(Serialize)]
struct JsonReport<'a> {
    violations: &'a ViolationReport,
    total: usize,
}

pub fn render_json(report: &ViolationReport) -> Result<String> {
    let body = JsonReport {
        violations: report,
        total: report.total_violations(),
    };

    Ok(serde_json::to_string_pretty(&body)?)
}

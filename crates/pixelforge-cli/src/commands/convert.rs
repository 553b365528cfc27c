//! Convert command implementation

use std::collections::BTreeMap;
use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use colored::Colorize;
use pixelforge_backend_image::{convert_to_png, copy_aliases, AliasReport, ConvertReport};

use super::reporting;

/// Run the convert command
///
/// # Returns
/// Exit code: 0 on success, 1 on error
pub fn run(input: &str, output: &str) -> Result<ExitCode> {
    let input = Path::new(input);
    reporting::print_header("Processing:", input.display());
    let report = execute(input, Path::new(output))?;
    print_report(&report);
    Ok(ExitCode::SUCCESS)
}

pub(crate) fn execute(input: &Path, output: &Path) -> Result<ConvertReport> {
    convert_to_png(input, output).with_context(|| format!("failed to convert {}", input.display()))
}

pub(crate) fn print_report(report: &ConvertReport) {
    println!(
        "{} {} {}x{}",
        "Source:".dimmed(),
        report.original_color_type,
        report.width,
        report.height
    );
    reporting::print_saved(&report.output);
}

pub(crate) fn execute_aliases(
    source_dir: &Path,
    dest_dir: &Path,
    mapping: &BTreeMap<String, String>,
) -> Result<AliasReport> {
    copy_aliases(source_dir, dest_dir, mapping)
        .with_context(|| format!("failed to copy aliases from {}", source_dir.display()))
}

pub(crate) fn print_alias_report(report: &AliasReport) {
    for copy in &report.copied {
        reporting::print_saved(&copy.output);
    }
    if !report.missing.is_empty() {
        println!(
            "  {} {} source(s) not present, skipped",
            "-".dimmed(),
            report.missing.len()
        );
    }
}

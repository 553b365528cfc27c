//! Replicate command implementation
//!
//! Writes rotated and mirrored variants of each source tile.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use colored::Colorize;
use pixelforge_backend_image::{replicate_tiles, ReplicateReport};

use super::json_output::{warning_codes, JsonWarning};
use super::reporting;

/// Run the replicate command
///
/// # Arguments
/// * `sources` - Source tiles, in order
/// * `output_dir` - Directory receiving `<prefix>_<NN>.png`
/// * `count` - Variants per source
/// * `prefix` - Output file name prefix
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 on success (even with missing sources), 1 on error
pub fn run(
    sources: &[String],
    output_dir: &str,
    count: u32,
    prefix: &str,
    json_output: bool,
) -> Result<ExitCode> {
    let sources: Vec<PathBuf> = sources.iter().map(PathBuf::from).collect();
    let output_dir = Path::new(output_dir);

    if json_output {
        let outcome = execute(&sources, output_dir, count, prefix).map(|r| {
            let warnings = missing_warnings(&r);
            (r, warnings)
        });
        return reporting::finish_json("replicate", outcome, None);
    }

    reporting::print_header("Replicating tiles into:", output_dir.display());
    let report = execute(&sources, output_dir, count, prefix)?;
    print_report(&report);
    Ok(ExitCode::SUCCESS)
}

pub(crate) fn execute(
    sources: &[PathBuf],
    output_dir: &Path,
    count: u32,
    prefix: &str,
) -> Result<ReplicateReport> {
    replicate_tiles(sources, output_dir, count, prefix)
        .with_context(|| format!("failed to replicate tiles into {}", output_dir.display()))
}

fn missing_warnings(report: &ReplicateReport) -> Vec<JsonWarning> {
    report
        .missing
        .iter()
        .map(|p| {
            JsonWarning::new(
                warning_codes::MISSING_SOURCE,
                format!("source tile not found: {}", p.display()),
            )
        })
        .collect()
}

pub(crate) fn print_report(report: &ReplicateReport) {
    for path in &report.missing {
        reporting::print_warning(format!("source tile not found: {}", path.display()));
    }

    let mut current: Option<&Path> = None;
    for output in &report.outputs {
        if current != Some(output.source.as_path()) {
            println!("{} {}", "Processing".dimmed(), output.source.display());
            current = Some(output.source.as_path());
        }
        println!(
            "  {} {} {}",
            "ok".green(),
            output.path.display(),
            format!("({})", output.transform).dimmed()
        );
    }
    println!(
        "{} {} tiles written",
        "Replaced:".green().bold(),
        report.outputs.len()
    );
}

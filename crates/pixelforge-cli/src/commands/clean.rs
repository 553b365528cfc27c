//! Clean command implementation
//!
//! Analyzes a sprite for an opaque white/gray background and writes a
//! cleaned copy when one is found.

use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use colored::Colorize;
use pixelforge_backend_image::{clean_transparency, CleanReport};

use super::json_output::{warning_codes, JsonWarning};
use super::reporting;

/// Run the clean command
///
/// # Arguments
/// * `input` - Image to analyze
/// * `output` - Cleaned file path (default: `<stem>_clean.png` beside the input)
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 on success (cleaned or not), 1 on error
pub fn run(input: &str, output: Option<&str>, json_output: bool) -> Result<ExitCode> {
    let input = Path::new(input);
    let output = output.map(Path::new);

    if json_output {
        let outcome = execute(input, output).map(|r| {
            let warnings = if r.background_detected {
                Vec::new()
            } else {
                vec![JsonWarning::new(
                    warning_codes::NOTHING_CLEANED,
                    "no significant white background detected",
                )]
            };
            (r, warnings)
        });
        return reporting::finish_json("clean", outcome, Some(input));
    }

    reporting::print_header("Cleaning:", input.display());
    let report = execute(input, output)?;
    print_report(&report);
    Ok(ExitCode::SUCCESS)
}

pub(crate) fn execute(input: &Path, output: Option<&Path>) -> Result<CleanReport> {
    clean_transparency(input, output)
        .with_context(|| format!("failed to clean {}", input.display()))
}

pub(crate) fn print_report(report: &CleanReport) {
    let stats = &report.stats;

    println!("{} {}", "Original mode:".dimmed(), report.original_color_type);
    println!("{} {}x{}", "Original size:".dimmed(), report.width, report.height);
    if report.converted {
        println!("{}", "Converted to RGBA".dimmed());
    } else {
        println!("{}", "Already in RGBA mode".dimmed());
    }

    println!("\n{}", "Alpha value distribution:".cyan().bold());
    for (alpha, count) in &stats.alpha_histogram {
        println!(
            "  Alpha {}: {} pixels ({:.2}%)",
            alpha,
            count,
            stats.percent(*count)
        );
    }

    println!("\n{}", "Pixel analysis:".cyan().bold());
    println!(
        "  Fully transparent (a=0): {} ({:.2}%)",
        stats.transparent_count,
        stats.percent(stats.transparent_count)
    );
    println!(
        "  White-like pixels: {} ({:.2}%)",
        stats.white_count,
        stats.percent(stats.white_count)
    );
    println!(
        "  Gray-like pixels: {} ({:.2}%)",
        stats.gray_count,
        stats.percent(stats.gray_count)
    );

    match &report.output {
        Some(saved) => {
            println!("\n{}", "!!! DETECTED WHITE/GRAY BACKGROUND !!!".yellow().bold());
            reporting::print_saved(saved);
            println!(
                "{}",
                "Replace the original file with the clean version, \
                 or point the game at the _clean.png file"
                    .dimmed()
            );
        }
        None => {
            println!("\n{}", "No significant white background detected.".green());
            println!(
                "{}",
                "Transparency issue may be in the engine's import settings or rendering.".dimmed()
            );
        }
    }
}

//! Inspect command implementation

use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use colored::Colorize;
use pixelforge_backend_image::{inspect_image, InspectReport};
use pixelforge_spec::Grid;

use super::reporting;

/// Run the inspect command
///
/// # Returns
/// Exit code: 0 on success, 1 on error
pub fn run(input: &str, grid: Grid, frame_count: u32, json_output: bool) -> Result<ExitCode> {
    let input = Path::new(input);
    let outcome = execute(input, grid, frame_count);
    if json_output {
        return reporting::finish_json("inspect", outcome.map(|r| (r, Vec::new())), Some(input));
    }

    let report = outcome?;
    print_report(&report);
    Ok(ExitCode::SUCCESS)
}

pub(crate) fn execute(input: &Path, grid: Grid, frame_count: u32) -> Result<InspectReport> {
    inspect_image(input, grid, frame_count)
        .with_context(|| format!("failed to inspect {}", input.display()))
}

pub(crate) fn print_report(report: &InspectReport) {
    reporting::print_header("Image:", report.path.display());
    println!("{} {}x{}", "Image dimensions:".dimmed(), report.width, report.height);
    println!("{} {}", "Color type:".dimmed(), report.original_color_type);
    println!(
        "{} {}x{} {}",
        "Frame size:".dimmed(),
        report.frame_width,
        report.frame_height,
        format!("(grid {})", report.grid).dimmed()
    );

    let layout = report
        .frames_per_row
        .iter()
        .enumerate()
        .map(|(row, n)| format!("{} in row {}", n, row + 1))
        .collect::<Vec<_>>()
        .join(", ");
    println!("{} {} ({})", "Total frames:".dimmed(), report.frame_count, layout);
}

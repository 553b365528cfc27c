//! Generate command implementation
//!
//! Draws the procedural asset pack under an output root.

use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use colored::Colorize;
use pixelforge_backend_image::{generate_asset_pack, GenerationReport};

use super::reporting::{self, short_hash};

/// Run the generate command
///
/// # Arguments
/// * `out_root` - Directory receiving `sprites/` and `anim/`
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 on success, 1 on error
pub fn run(out_root: &str, json_output: bool) -> Result<ExitCode> {
    let out_root = Path::new(out_root);
    let outcome = execute(out_root);
    if json_output {
        return reporting::finish_json("generate", outcome.map(|r| (r, Vec::new())), Some(out_root));
    }

    reporting::print_header("Generating asset pack:", out_root.display());
    let report = outcome?;
    print_report(&report);
    Ok(ExitCode::SUCCESS)
}

pub(crate) fn execute(out_root: &Path) -> Result<GenerationReport> {
    generate_asset_pack(out_root)
        .with_context(|| format!("failed to generate assets under {}", out_root.display()))
}

pub(crate) fn print_report(report: &GenerationReport) {
    for asset in &report.assets {
        let frames = if asset.frames > 1 {
            format!(" x{}", asset.frames)
        } else {
            String::new()
        };
        println!(
            "  {} {} {}{} {}",
            "ok".green(),
            asset.rel_path,
            format!("{}x{}", asset.width / asset.frames.max(1), asset.height).dimmed(),
            frames.dimmed(),
            format!("({})", short_hash(&asset.hash)).dimmed()
        );
    }
    println!(
        "{} {} static, {} animated",
        "Done:".green().bold(),
        report.static_count(),
        report.animated_count()
    );
}

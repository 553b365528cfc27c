//! Split command implementation
//!
//! Slices a sprite sheet into named PNG cells.

use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use colored::Colorize;
use pixelforge_backend_image::{split_sprite_sheet, SplitReport};
use pixelforge_spec::Grid;

use super::json_output::{warning_codes, JsonWarning};
use super::reporting::{self, short_hash};

/// Run the split command
///
/// # Arguments
/// * `input` - Sprite sheet to slice
/// * `output_dir` - Directory receiving `<name>.png`
/// * `grid` - Column and row count
/// * `names` - Row-major cell names, `skip` discards a cell
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 on success, 1 on error
pub fn run(
    input: &str,
    output_dir: &str,
    grid: Grid,
    names: &[String],
    json_output: bool,
) -> Result<ExitCode> {
    let input = Path::new(input);
    let output_dir = Path::new(output_dir);

    if json_output {
        let outcome = execute(input, output_dir, grid, names).map(|r| {
            let warnings = remainder_warning(&r).into_iter().collect();
            (r, warnings)
        });
        return reporting::finish_json("split", outcome, Some(input));
    }

    reporting::print_header("Processing:", input.display());
    println!("{} {}", "Grid:".dimmed(), grid);
    let report = execute(input, output_dir, grid, names)?;
    print_report(&report);
    Ok(ExitCode::SUCCESS)
}

pub(crate) fn execute(
    input: &Path,
    output_dir: &Path,
    grid: Grid,
    names: &[String],
) -> Result<SplitReport> {
    split_sprite_sheet(input, output_dir, grid, names)
        .with_context(|| format!("failed to split {}", input.display()))
}

fn remainder_warning(report: &SplitReport) -> Option<JsonWarning> {
    report.has_remainder().then(|| {
        JsonWarning::new(
            warning_codes::GRID_REMAINDER,
            format!(
                "{}x{} remainder pixels dropped at the right/bottom edges",
                report.remainder.0, report.remainder.1
            ),
        )
    })
}

pub(crate) fn print_report(report: &SplitReport) {
    println!(
        "{} {}x{}",
        "Image size:".dimmed(),
        report.image_width,
        report.image_height
    );
    println!(
        "{} {}x{}",
        "Cell size:".dimmed(),
        report.cell_width,
        report.cell_height
    );
    if let Some(warning) = remainder_warning(report) {
        reporting::print_warning(warning.message);
    }
    for (i, cell) in report.emitted.iter().enumerate() {
        println!(
            "  {} [{}] {}.png {}",
            "ok".green(),
            i + 1,
            cell.name,
            format!("(r{} c{}, {})", cell.row, cell.col, short_hash(&cell.hash)).dimmed()
        );
    }
    println!(
        "{} {} images extracted, {} skipped",
        "Completed:".green().bold(),
        report.emitted.len(),
        report.skipped
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbaImage;

    fn sheet(dir: &tempfile::TempDir) -> std::path::PathBuf {
        let path = dir.path().join("sheet.png");
        RgbaImage::new(20, 10).save(&path).unwrap();
        path
    }

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn split_rejects_escaping_name() {
        let tmp = tempfile::tempdir().unwrap();
        let input = sheet(&tmp);
        let out = tmp.path().join("cells");

        let result = run(
            input.to_str().unwrap(),
            out.to_str().unwrap(),
            Grid::new(2, 1),
            &names(&["../escaped", "b"]),
            false,
        );
        assert!(result.is_err());
        assert!(!tmp.path().join("escaped.png").exists());
        assert!(!out.exists());
    }

    #[test]
    fn split_json_reports_duplicate_names() {
        let tmp = tempfile::tempdir().unwrap();
        let input = sheet(&tmp);
        let out = tmp.path().join("cells");

        let code = run(
            input.to_str().unwrap(),
            out.to_str().unwrap(),
            Grid::new(2, 1),
            &names(&["a", "a"]),
            true,
        )
        .unwrap();
        assert_eq!(code, ExitCode::from(1));
        assert!(!out.exists());
    }

    #[test]
    fn split_writes_one_file_per_name() {
        let tmp = tempfile::tempdir().unwrap();
        let input = sheet(&tmp);
        let out = tmp.path().join("cells");

        let report = execute(&input, &out, Grid::new(2, 1), &names(&["a", "b"])).unwrap();
        assert_eq!(report.emitted.len(), 2);
        assert!(out.join("a.png").exists());
        assert!(out.join("b.png").exists());
    }
}

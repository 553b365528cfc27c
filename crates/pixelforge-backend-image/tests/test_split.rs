//! Integration tests for the sprite-sheet splitter.
//!
//! Sheets are painted with a distinct color per cell so every emitted file
//! can be traced back to its grid position.

use image::{Rgba, RgbaImage};
use pixelforge_backend_image::png::save_png;
use pixelforge_backend_image::split::split_sprite_sheet;
use pixelforge_spec::Grid;
use pretty_assertions::assert_eq;

fn cell_color(row: u32, col: u32) -> Rgba<u8> {
    Rgba([(row * 40) as u8, (col * 40) as u8, 200, 255])
}

/// A sheet where every pixel carries the color of its grid cell.
fn painted_sheet(width: u32, height: u32, grid: Grid) -> RgbaImage {
    let cw = width / grid.cols;
    let ch = height / grid.rows;
    RgbaImage::from_fn(width, height, |x, y| {
        cell_color((y / ch).min(grid.rows - 1), (x / cw).min(grid.cols - 1))
    })
}

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

// ============================================================================
// Reference scenario
// ============================================================================

/// 64x96 sheet, grid 2x3, names [a, b, skip, c, d, e].
#[test]
fn test_reference_sheet_emits_five_cells() {
    let dir = tempfile::tempdir().unwrap();
    let grid = Grid::new(2, 3);
    let input = dir.path().join("sheet.png");
    save_png(&painted_sheet(64, 96, grid), &input).unwrap();

    let out = dir.path().join("cells");
    let cell_names = names(&["a", "b", "skip", "c", "d", "e"]);
    let report = split_sprite_sheet(&input, &out, grid, &cell_names).unwrap();

    assert_eq!((report.cell_width, report.cell_height), (32, 32));
    assert_eq!(report.emitted.len(), 5);
    assert_eq!(report.skipped, 1);

    let positions: Vec<_> = report
        .emitted
        .iter()
        .map(|c| (c.name.as_str(), c.row, c.col))
        .collect();
    assert_eq!(
        positions,
        vec![("a", 0, 0), ("b", 0, 1), ("c", 1, 1), ("d", 2, 0), ("e", 2, 1)]
    );

    let mut files: Vec<_> = std::fs::read_dir(&out)
        .unwrap()
        .map(|e| e.unwrap().file_name().into_string().unwrap())
        .collect();
    files.sort();
    assert_eq!(files, vec!["a.png", "b.png", "c.png", "d.png", "e.png"]);

    // Row-major correspondence: file content matches its source cell
    for cell in &report.emitted {
        let img = image::open(&cell.path).unwrap().into_rgba8();
        assert_eq!(img.dimensions(), (32, 32));
        assert!(
            img.pixels().all(|p| *p == cell_color(cell.row, cell.col)),
            "{} should come from cell ({}, {})",
            cell.name,
            cell.row,
            cell.col
        );
    }
}

// ============================================================================
// Truncation and input handling
// ============================================================================

/// Remainder pixels are dropped, not spread into the cells.
#[test]
fn test_non_divisible_sheet_truncates() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("odd.png");
    save_png(&RgbaImage::from_pixel(100, 50, Rgba([1, 2, 3, 255])), &input).unwrap();

    let report =
        split_sprite_sheet(&input, &dir.path().join("o"), Grid::new(3, 2), &names(&["x"]))
            .unwrap();
    assert_eq!((report.cell_width, report.cell_height), (33, 25));
    assert_eq!(report.remainder, (1, 0));

    let img = image::open(&report.emitted[0].path).unwrap();
    assert_eq!((img.width(), img.height()), (33, 25));
}

/// JPEG input is normalized to RGBA before cropping.
#[test]
fn test_jpeg_input_is_normalized() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("dronen-1.jpg");
    image::RgbImage::from_pixel(40, 60, image::Rgb([30, 200, 30]))
        .save(&input)
        .unwrap();

    let report = split_sprite_sheet(
        &input,
        &dir.path().join("enemies"),
        Grid::new(2, 3),
        &names(&["standard_drone", "fast_drone"]),
    )
    .unwrap();

    assert_eq!(report.emitted.len(), 2);
    let decoded = image::open(&report.emitted[1].path).unwrap();
    assert_eq!(decoded.color(), image::ColorType::Rgba8);
    assert_eq!((decoded.width(), decoded.height()), (20, 20));
}

/// Re-running overwrites with identical bytes.
#[test]
fn test_rerun_is_stable() {
    let dir = tempfile::tempdir().unwrap();
    let grid = Grid::new(2, 2);
    let input = dir.path().join("sheet.png");
    save_png(&painted_sheet(20, 20, grid), &input).unwrap();

    let out = dir.path().join("cells");
    let first = split_sprite_sheet(&input, &out, grid, &names(&["a", "b", "c", "d"])).unwrap();
    let second = split_sprite_sheet(&input, &out, grid, &names(&["a", "b", "c", "d"])).unwrap();
    assert_eq!(first.emitted, second.emitted);
}

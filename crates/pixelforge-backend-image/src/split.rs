//! Sprite-sheet splitter.
//!
//! Cuts a sheet into a row-major grid of equal cells and saves each named
//! cell as its own PNG. Cells named [`SKIP_SENTINEL`] are discarded.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use image::imageops;
use pixelforge_spec::{is_safe_file_name, Grid, SKIP_SENTINEL};
use serde::Serialize;
use thiserror::Error;

use crate::io::{load_rgba, LoadError};
use crate::png::{save_png, PngError};

/// Errors from splitting a sheet.
#[derive(Debug, Error)]
pub enum SplitError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error("grid {0} has a zero dimension")]
    InvalidGrid(Grid),

    #[error("{names} names given for a {grid} grid with {cells} cells")]
    TooManyNames { grid: Grid, names: usize, cells: u64 },

    #[error("cell name {name:?} at index {index} is not a bare file name")]
    InvalidName { index: usize, name: String },

    #[error("cell name '{0}' is used more than once")]
    DuplicateName(String),

    #[error("grid {grid} does not fit a {width}x{height} image")]
    GridTooLarge { grid: Grid, width: u32, height: u32 },

    #[error("failed to create output directory '{}': {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Png(#[from] PngError),
}

/// One emitted cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SplitCell {
    pub name: String,
    pub row: u32,
    pub col: u32,
    pub path: PathBuf,
    pub hash: String,
}

/// Result of a split.
#[derive(Debug, Clone, Serialize)]
pub struct SplitReport {
    pub image_width: u32,
    pub image_height: u32,
    pub cell_width: u32,
    pub cell_height: u32,
    /// Pixels dropped at the right and bottom edges.
    pub remainder: (u32, u32),
    pub emitted: Vec<SplitCell>,
    /// Cells that were visited but named `skip`.
    pub skipped: usize,
}

impl SplitReport {
    /// True when the grid did not divide the image evenly.
    pub fn has_remainder(&self) -> bool {
        self.remainder != (0, 0)
    }
}

/// Checks that every non-skip name is a unique bare file name and that the
/// names fit in the grid.
pub fn check_cell_names(grid: Grid, names: &[String]) -> Result<(), SplitError> {
    if names.len() as u64 > grid.cell_count() {
        return Err(SplitError::TooManyNames {
            grid,
            names: names.len(),
            cells: grid.cell_count(),
        });
    }

    let mut seen = HashSet::new();
    for (index, name) in names.iter().enumerate() {
        if name == SKIP_SENTINEL {
            continue;
        }
        if !is_safe_file_name(name) {
            return Err(SplitError::InvalidName {
                index,
                name: name.clone(),
            });
        }
        if !seen.insert(name.as_str()) {
            return Err(SplitError::DuplicateName(name.clone()));
        }
    }
    Ok(())
}

/// Split `input` into `grid` cells and save the named ones under `output_dir`.
///
/// Names are consumed in row-major order. Once the names run out, the
/// remaining cells are left alone. Names are checked and the source is
/// loaded before the output directory is created, so a rejected call
/// leaves the filesystem untouched.
pub fn split_sprite_sheet(
    input: &Path,
    output_dir: &Path,
    grid: Grid,
    names: &[String],
) -> Result<SplitReport, SplitError> {
    check_cell_names(grid, names)?;
    let loaded = load_rgba(input)?;
    let (width, height) = (loaded.width(), loaded.height());

    let (cell_width, cell_height) = grid
        .cell_size(width, height)
        .ok_or(SplitError::InvalidGrid(grid))?;
    if cell_width == 0 || cell_height == 0 {
        return Err(SplitError::GridTooLarge {
            grid,
            width,
            height,
        });
    }

    std::fs::create_dir_all(output_dir).map_err(|source| SplitError::CreateDir {
        path: output_dir.to_path_buf(),
        source,
    })?;

    let mut emitted = Vec::new();
    let mut skipped = 0;

    'rows: for row in 0..grid.rows {
        for col in 0..grid.cols {
            let index = (row * grid.cols + col) as usize;
            let Some(name) = names.get(index) else {
                break 'rows;
            };
            if name == SKIP_SENTINEL {
                skipped += 1;
                continue;
            }

            let cell = imageops::crop_imm(
                &loaded.image,
                col * cell_width,
                row * cell_height,
                cell_width,
                cell_height,
            )
            .to_image();

            let path = output_dir.join(format!("{name}.png"));
            let saved = save_png(&cell, &path)?;
            emitted.push(SplitCell {
                name: name.clone(),
                row,
                col,
                path: saved.path,
                hash: saved.hash,
            });
        }
    }

    Ok(SplitReport {
        image_width: width,
        image_height: height,
        cell_width,
        cell_height,
        remainder: grid.remainder(width, height).unwrap_or((0, 0)),
        emitted,
        skipped,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::draw::new_image;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_missing_input_creates_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out");
        let err = split_sprite_sheet(
            &dir.path().join("nope.png"),
            &out,
            Grid::new(2, 2),
            &names(&["a"]),
        )
        .unwrap_err();
        assert!(matches!(err, SplitError::Load(ref e) if e.is_not_found()));
        assert!(!out.exists());
    }

    #[test]
    fn test_short_name_list_stops_early() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("sheet.png");
        save_png(&new_image(30, 20, Color::rgb(1, 2, 3)), &input).unwrap();

        let out = dir.path().join("cells");
        let report =
            split_sprite_sheet(&input, &out, Grid::new(3, 2), &names(&["a", "skip", "b", "c"]))
                .unwrap();

        assert_eq!((report.cell_width, report.cell_height), (10, 10));
        assert_eq!(report.skipped, 1);
        let emitted: Vec<_> = report
            .emitted
            .iter()
            .map(|c| (c.name.as_str(), c.row, c.col))
            .collect();
        assert_eq!(emitted, vec![("a", 0, 0), ("b", 0, 2), ("c", 1, 0)]);
        assert!(!report.has_remainder());
    }

    #[test]
    fn test_remainder_reported() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("odd.png");
        save_png(&new_image(65, 97, Color::rgb(9, 9, 9)), &input).unwrap();

        let report =
            split_sprite_sheet(&input, &dir.path().join("o"), Grid::new(2, 3), &names(&["a"]))
                .unwrap();
        assert_eq!((report.cell_width, report.cell_height), (32, 32));
        assert_eq!(report.remainder, (1, 1));
        assert!(report.has_remainder());
    }

    #[test]
    fn test_grid_larger_than_image() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("tiny.png");
        save_png(&new_image(2, 2, Color::rgb(0, 0, 0)), &input).unwrap();

        let err = split_sprite_sheet(&input, &dir.path().join("o"), Grid::new(4, 1), &names(&["a"]))
            .unwrap_err();
        assert!(matches!(err, SplitError::GridTooLarge { .. }));
    }

    #[test]
    fn test_path_like_names_rejected_before_writing() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("sheet.png");
        save_png(&new_image(20, 10, Color::rgb(5, 5, 5)), &input).unwrap();
        let out = dir.path().join("out");

        let err = split_sprite_sheet(&input, &out, Grid::new(2, 1), &names(&["../escaped", "b"]))
            .unwrap_err();
        assert!(matches!(err, SplitError::InvalidName { index: 0, .. }));

        let err =
            split_sprite_sheet(&input, &out, Grid::new(2, 1), &names(&["a", ""])).unwrap_err();
        assert!(matches!(err, SplitError::InvalidName { index: 1, .. }));

        assert!(!out.exists());
        assert!(!dir.path().join("escaped.png").exists());
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let grid = Grid::new(3, 1);
        let err = check_cell_names(grid, &names(&["a", "skip", "a"])).unwrap_err();
        assert!(matches!(err, SplitError::DuplicateName(ref n) if n == "a"));

        check_cell_names(grid, &names(&["skip", "skip", "a"])).unwrap();
    }

    #[test]
    fn test_more_names_than_cells_rejected() {
        let err = check_cell_names(Grid::new(1, 1), &names(&["a", "b"])).unwrap_err();
        assert!(matches!(err, SplitError::TooManyNames { names: 2, cells: 1, .. }));
    }
}

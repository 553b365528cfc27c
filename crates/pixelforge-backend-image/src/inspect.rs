//! Image metadata inspector.

use std::path::{Path, PathBuf};

use pixelforge_spec::Grid;
use serde::Serialize;

use crate::io::{load_rgba, LoadError};

/// Dimensions and frame layout of an image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InspectReport {
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
    pub original_color_type: String,
    pub grid: Grid,
    pub frame_width: u32,
    pub frame_height: u32,
    pub frame_count: u32,
    /// Frames per grid row, e.g. `[4, 2]` for six frames on a 4x2 grid.
    pub frames_per_row: Vec<u32>,
}

/// Distribute `frame_count` frames row-major over `grid`.
pub fn frames_per_row(grid: Grid, frame_count: u32) -> Vec<u32> {
    if grid.cols == 0 {
        return Vec::new();
    }
    let mut left = frame_count;
    let mut rows = Vec::new();
    for _ in 0..grid.rows {
        if left == 0 {
            break;
        }
        let n = left.min(grid.cols);
        rows.push(n);
        left -= n;
    }
    rows
}

/// Load `path` and describe it as a `grid` of `frame_count` frames.
///
/// Frame size truncates like the splitter does.
pub fn inspect_image(
    path: &Path,
    grid: Grid,
    frame_count: u32,
) -> Result<InspectReport, LoadError> {
    let loaded = load_rgba(path)?;
    let (width, height) = (loaded.width(), loaded.height());
    let (frame_width, frame_height) = grid.cell_size(width, height).unwrap_or((0, 0));

    Ok(InspectReport {
        path: path.to_path_buf(),
        width,
        height,
        original_color_type: loaded.original_color_type,
        grid,
        frame_width,
        frame_height,
        frame_count,
        frames_per_row: frames_per_row(grid, frame_count),
    })
}

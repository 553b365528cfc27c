//! Job types for every asset operation a pipeline can run.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Reserved cell name meaning "do not emit a file for this cell".
pub const SKIP_SENTINEL: &str = "skip";

/// Default replicas produced per source tile.
pub const DEFAULT_REPLICA_COUNT: u32 = 16;

/// Default file name prefix for replicated tiles.
pub const DEFAULT_REPLICA_PREFIX: &str = "danger_tile";

/// Default inspection grid (4 columns, 2 rows).
pub const DEFAULT_INSPECT_GRID: Grid = Grid { cols: 4, rows: 2 };

/// Default inspection frame count (4 frames in row 1, 2 in row 2).
pub const DEFAULT_INSPECT_FRAME_COUNT: u32 = 6;

/// A sprite-sheet grid, addressed row-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Grid {
    /// Number of columns.
    pub cols: u32,
    /// Number of rows.
    pub rows: u32,
}

impl Grid {
    /// Creates a new grid.
    pub const fn new(cols: u32, rows: u32) -> Self {
        Self { cols, rows }
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> u64 {
        self.cols as u64 * self.rows as u64
    }

    /// Cell size for an image of the given dimensions, truncating any remainder.
    ///
    /// Returns `None` if either grid dimension is zero.
    pub fn cell_size(&self, width: u32, height: u32) -> Option<(u32, u32)> {
        if self.cols == 0 || self.rows == 0 {
            return None;
        }
        Some((width / self.cols, height / self.rows))
    }

    /// Pixels dropped on the right and bottom edges by integer division.
    pub fn remainder(&self, width: u32, height: u32) -> Option<(u32, u32)> {
        if self.cols == 0 || self.rows == 0 {
            return None;
        }
        Some((width % self.cols, height % self.rows))
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.cols, self.rows)
    }
}

/// A single pipeline job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Job {
    /// Draw the procedural asset pack.
    Generate(GenerateJob),
    /// Re-encode one image as an RGBA PNG.
    Convert(ConvertJob),
    /// Slice a sprite sheet into named cells.
    Split(SplitJob),
    /// Copy existing PNGs under new names.
    Alias(AliasJob),
    /// Strip a white/gray background to transparency.
    Clean(CleanJob),
    /// Report image dimensions and frame layout.
    Inspect(InspectJob),
    /// Produce rotated/mirrored tile variants.
    Replicate(ReplicateJob),
}

impl Job {
    /// Returns the job kind as used in the `kind` tag.
    pub fn kind(&self) -> &'static str {
        match self {
            Job::Generate(_) => "generate",
            Job::Convert(_) => "convert",
            Job::Split(_) => "split",
            Job::Alias(_) => "alias",
            Job::Clean(_) => "clean",
            Job::Inspect(_) => "inspect",
            Job::Replicate(_) => "replicate",
        }
    }

    /// Short human-readable description of what the job touches.
    pub fn describe(&self) -> String {
        match self {
            Job::Generate(j) => format!("asset pack -> {}", j.out_root),
            Job::Convert(j) => format!("{} -> {}", j.input, j.output),
            Job::Split(j) => format!("{} ({}) -> {}", j.input, j.grid, j.output_dir),
            Job::Alias(j) => format!(
                "{} -> {} ({} file(s))",
                j.source_dir,
                j.dest_dir,
                j.mapping.len()
            ),
            Job::Clean(j) => j.input.clone(),
            Job::Inspect(j) => j.input.clone(),
            Job::Replicate(j) => format!(
                "{} source(s) x {} -> {}",
                j.sources.len(),
                j.count,
                j.output_dir
            ),
        }
    }
}

/// Draw the procedural asset pack under `out_root`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GenerateJob {
    /// Root directory; static sprites land in `sprites/`, sheets in `anim/`.
    #[serde(default = "default_out_root")]
    pub out_root: String,
}

fn default_out_root() -> String {
    "assets".to_string()
}

impl Default for GenerateJob {
    fn default() -> Self {
        Self {
            out_root: default_out_root(),
        }
    }
}

/// Re-encode a single image as an RGBA PNG.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConvertJob {
    pub input: String,
    pub output: String,
}

/// Slice a sprite sheet into a grid of named PNG cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SplitJob {
    /// Sheet to slice.
    pub input: String,
    /// Directory receiving `<name>.png` files.
    pub output_dir: String,
    /// Cell layout.
    pub grid: Grid,
    /// Row-major cell names; [`SKIP_SENTINEL`] discards a cell.
    pub names: Vec<String>,
}

impl SplitJob {
    /// Number of files this job writes.
    pub fn emitted_count(&self) -> usize {
        self.names.iter().filter(|n| n.as_str() != SKIP_SENTINEL).count()
    }
}

/// Copy PNGs from `source_dir` to `dest_dir` under new names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AliasJob {
    pub source_dir: String,
    pub dest_dir: String,
    /// Source file name to destination file name.
    pub mapping: BTreeMap<String, String>,
}

/// Strip a white/gray background from an image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CleanJob {
    pub input: String,
    /// Defaults to `<input_stem>_clean.png` beside the input.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
}

/// Report dimensions and frame layout of an image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InspectJob {
    pub input: String,
    #[serde(default = "default_inspect_grid")]
    pub grid: Grid,
    #[serde(default = "default_inspect_frame_count")]
    pub frame_count: u32,
}

fn default_inspect_grid() -> Grid {
    DEFAULT_INSPECT_GRID
}

fn default_inspect_frame_count() -> u32 {
    DEFAULT_INSPECT_FRAME_COUNT
}

/// Produce rotated and mirrored variants of a set of tiles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReplicateJob {
    /// Source tiles, processed in order.
    pub sources: Vec<String>,
    pub output_dir: String,
    /// Variants per source.
    #[serde(default = "default_replica_count")]
    pub count: u32,
    /// Output names are `<prefix>_<counter:02>.png`.
    #[serde(default = "default_replica_prefix")]
    pub prefix: String,
}

fn default_replica_count() -> u32 {
    DEFAULT_REPLICA_COUNT
}

fn default_replica_prefix() -> String {
    DEFAULT_REPLICA_PREFIX.to_string()
}

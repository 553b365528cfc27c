//! Tile variant replicator.
//!
//! Expands each source tile into a run of rotated and mirrored variants.
//! Variant `v` of `count` is rotated `(v % 4) * 90°` counter-clockwise,
//! then mirrored left-to-right when `v >= count / 2`.

use std::fmt;
use std::path::{Path, PathBuf};

use image::{imageops, RgbaImage};
use pixelforge_spec::is_safe_file_name;
use serde::Serialize;
use thiserror::Error;

use crate::io::{load_rgba, LoadError};
use crate::png::{save_png, PngError};

/// Errors from replicating tiles.
#[derive(Debug, Error)]
pub enum ReplicateError {
    /// A source exists but could not be read.
    #[error(transparent)]
    Load(LoadError),

    #[error("prefix {0:?} does not form a bare file name")]
    InvalidPrefix(String),

    #[error("failed to create output directory '{}': {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Png(#[from] PngError),
}

/// A rotation followed by an optional horizontal mirror.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TileTransform {
    /// Counter-clockwise quarter turns, `0..4`.
    pub quarter_turns: u8,
    /// Flip left-to-right after rotating.
    pub mirror: bool,
}

impl TileTransform {
    pub const IDENTITY: TileTransform = TileTransform {
        quarter_turns: 0,
        mirror: false,
    };

    pub fn new(quarter_turns: u8, mirror: bool) -> Self {
        Self {
            quarter_turns: quarter_turns % 4,
            mirror,
        }
    }

    /// Transform for variant `variant` out of `count`.
    pub fn for_variant(variant: u32, count: u32) -> Self {
        Self::new((variant % 4) as u8, variant >= count / 2)
    }

    /// Apply the transform to `image`.
    pub fn apply(&self, image: &RgbaImage) -> RgbaImage {
        let rotated = match self.quarter_turns {
            1 => imageops::rotate270(image),
            2 => imageops::rotate180(image),
            3 => imageops::rotate90(image),
            _ => image.clone(),
        };
        if self.mirror {
            imageops::flip_horizontal(&rotated)
        } else {
            rotated
        }
    }

    /// The transform that undoes this one.
    ///
    /// A mirrored transform is a reflection and is its own inverse; a pure
    /// rotation is undone by the opposite rotation.
    pub fn inverse(&self) -> Self {
        if self.mirror {
            *self
        } else {
            Self::new((4 - self.quarter_turns) % 4, false)
        }
    }

    /// Rotation angle in degrees, counter-clockwise.
    pub fn degrees(&self) -> u32 {
        self.quarter_turns as u32 * 90
    }
}

impl fmt::Display for TileTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rot{}", self.degrees())?;
        if self.mirror {
            write!(f, "+mirror")?;
        }
        Ok(())
    }
}

/// One written variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplicaOutput {
    pub source: PathBuf,
    pub variant: u32,
    pub transform: TileTransform,
    pub path: PathBuf,
    pub hash: String,
}

/// Result of a replication run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ReplicateReport {
    pub outputs: Vec<ReplicaOutput>,
    /// Sources that did not exist and were skipped.
    pub missing: Vec<PathBuf>,
}

/// Output file name for global counter `counter`.
pub fn replica_file_name(prefix: &str, counter: usize) -> String {
    format!("{prefix}_{counter:02}.png")
}

/// Write `count` variants of every source into `output_dir`.
///
/// Output names use one counter across all sources. Missing sources are
/// recorded in [`ReplicateReport::missing`] and do not advance the counter.
pub fn replicate_tiles(
    sources: &[PathBuf],
    output_dir: &Path,
    count: u32,
    prefix: &str,
) -> Result<ReplicateReport, ReplicateError> {
    if !is_safe_file_name(prefix) {
        return Err(ReplicateError::InvalidPrefix(prefix.to_string()));
    }

    std::fs::create_dir_all(output_dir).map_err(|source| ReplicateError::CreateDir {
        path: output_dir.to_path_buf(),
        source,
    })?;

    let mut report = ReplicateReport::default();

    for source in sources {
        let base = match load_rgba(source) {
            Ok(loaded) => loaded.image,
            Err(e) if e.is_not_found() => {
                report.missing.push(source.clone());
                continue;
            }
            Err(e) => return Err(ReplicateError::Load(e)),
        };

        for variant in 0..count {
            let transform = TileTransform::for_variant(variant, count);
            let path = output_dir.join(replica_file_name(prefix, report.outputs.len()));
            let saved = save_png(&transform.apply(&base), &path)?;
            report.outputs.push(ReplicaOutput {
                source: source.clone(),
                variant,
                transform,
                path: saved.path,
                hash: saved.hash,
            });
        }
    }

    Ok(report)
}

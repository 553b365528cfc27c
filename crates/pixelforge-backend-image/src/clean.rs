//! Transparency cleaner.
//!
//! Detects sheets exported with an opaque white or light-gray background
//! and makes those background pixels transparent. Color channels are kept
//! so the edit only touches alpha.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use image::{Rgba, RgbaImage};
use serde::Serialize;
use thiserror::Error;

use crate::io::{load_rgba, LoadError};
use crate::png::{save_png, PngError, SavedFile};

/// A channel above this value counts as white.
pub const WHITE_THRESHOLD: u8 = 200;
/// Exclusive lower bound for gray channels.
pub const GRAY_MIN: u8 = 100;
/// Exclusive upper bound for gray channels.
pub const GRAY_MAX: u8 = 200;
/// Fraction of white-like pixels above which a background is assumed.
pub const BACKGROUND_FRACTION: f64 = 0.05;

/// Errors from cleaning an image.
#[derive(Debug, Error)]
pub enum CleanError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Png(#[from] PngError),
}

/// True when every color channel is above [`WHITE_THRESHOLD`].
pub fn is_white_like(pixel: &Rgba<u8>) -> bool {
    let [r, g, b, _] = pixel.0;
    r > WHITE_THRESHOLD && g > WHITE_THRESHOLD && b > WHITE_THRESHOLD
}

/// True when every color channel is strictly between [`GRAY_MIN`] and [`GRAY_MAX`].
pub fn is_gray_like(pixel: &Rgba<u8>) -> bool {
    let in_band = |c: u8| c > GRAY_MIN && c < GRAY_MAX;
    let [r, g, b, _] = pixel.0;
    in_band(r) && in_band(g) && in_band(b)
}

fn is_background(pixel: &Rgba<u8>) -> bool {
    pixel.0[3] > 0 && (is_white_like(pixel) || is_gray_like(pixel))
}

/// Pixel statistics of an RGBA image.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PixelStats {
    pub total_pixels: u64,
    pub transparent_count: u64,
    /// Opaque-ish pixels matching [`is_white_like`].
    pub white_count: u64,
    /// Opaque-ish pixels matching [`is_gray_like`] but not white.
    pub gray_count: u64,
    pub alpha_histogram: BTreeMap<u8, u64>,
}

impl PixelStats {
    /// Percentage of all pixels, for display.
    pub fn percent(&self, count: u64) -> f64 {
        if self.total_pixels == 0 {
            0.0
        } else {
            count as f64 / self.total_pixels as f64 * 100.0
        }
    }

    /// Whether the white share is large enough to treat as a background.
    pub fn background_detected(&self) -> bool {
        self.white_count as f64 > self.total_pixels as f64 * BACKGROUND_FRACTION
    }
}

/// Count alpha values and background-colored pixels.
pub fn analyze(image: &RgbaImage) -> PixelStats {
    let mut stats = PixelStats {
        total_pixels: image.width() as u64 * image.height() as u64,
        ..Default::default()
    };

    for pixel in image.pixels() {
        let alpha = pixel.0[3];
        *stats.alpha_histogram.entry(alpha).or_insert(0) += 1;

        if alpha == 0 {
            stats.transparent_count += 1;
        } else if is_white_like(pixel) {
            stats.white_count += 1;
        } else if is_gray_like(pixel) {
            stats.gray_count += 1;
        }
    }

    stats
}

/// Copy of `image` with every background-colored pixel made transparent.
pub fn clean_image(image: &RgbaImage) -> RgbaImage {
    let mut cleaned = image.clone();
    for pixel in cleaned.pixels_mut() {
        if is_background(pixel) {
            pixel.0[3] = 0;
        }
    }
    cleaned
}

/// Result of a cleaning pass.
#[derive(Debug, Clone, Serialize)]
pub struct CleanReport {
    pub input: PathBuf,
    pub original_color_type: String,
    /// True when the input was not already RGBA.
    pub converted: bool,
    pub width: u32,
    pub height: u32,
    #[serde(flatten)]
    pub stats: PixelStats,
    pub background_detected: bool,
    /// Written only when a background was detected.
    pub output: Option<SavedFile>,
}

/// `<stem>_clean.png` next to `input`.
pub fn default_clean_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "image".to_string());
    input.with_file_name(format!("{stem}_clean.png"))
}

/// Analyze `input` and, if it has a white/gray background, write a cleaned copy.
///
/// The cleaned image goes to `output` or [`default_clean_path`]. Below the
/// background threshold nothing is written and `report.output` is `None`.
pub fn clean_transparency(input: &Path, output: Option<&Path>) -> Result<CleanReport, CleanError> {
    let loaded = load_rgba(input)?;
    let stats = analyze(&loaded.image);
    let background_detected = stats.background_detected();

    let output = if background_detected {
        let path = output.map_or_else(|| default_clean_path(input), Path::to_path_buf);
        Some(save_png(&clean_image(&loaded.image), &path)?)
    } else {
        None
    };

    Ok(CleanReport {
        input: input.to_path_buf(),
        original_color_type: loaded.original_color_type,
        converted: loaded.converted,
        width: loaded.image.width(),
        height: loaded.image.height(),
        stats,
        background_detected,
        output,
    })
}

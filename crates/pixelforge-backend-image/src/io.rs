//! Image loading with RGBA normalization.

use std::path::{Path, PathBuf};

use image::{ColorType, DynamicImage, ImageError, RgbaImage};
use thiserror::Error;

/// Errors from loading an image.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file does not exist.
    #[error("image not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The file exists but could not be decoded.
    #[error("failed to decode '{}': {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: ImageError,
    },

    /// Any other I/O failure while reading.
    #[error("failed to read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl LoadError {
    /// True when the source file was missing.
    pub fn is_not_found(&self) -> bool {
        matches!(self, LoadError::NotFound(_))
    }
}

/// An image decoded and normalized to 8-bit RGBA.
#[derive(Debug, Clone)]
pub struct LoadedImage {
    /// Pixel data.
    pub image: RgbaImage,
    /// Color type of the file before normalization (e.g. "Rgb8").
    pub original_color_type: String,
    /// True when normalization changed the channel layout.
    pub converted: bool,
}

impl LoadedImage {
    /// Normalize an already-decoded image.
    pub fn from_dynamic(image: DynamicImage) -> Self {
        let color = image.color();
        Self {
            original_color_type: color_type_name(color),
            converted: color != ColorType::Rgba8,
            image: image.into_rgba8(),
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }
}

/// Load a JPEG/PNG file and normalize it to RGBA.
pub fn load_rgba(path: &Path) -> Result<LoadedImage, LoadError> {
    if !path.exists() {
        return Err(LoadError::NotFound(path.to_path_buf()));
    }

    let image = image::open(path).map_err(|source| match source {
        ImageError::IoError(e) if e.kind() == std::io::ErrorKind::NotFound => {
            LoadError::NotFound(path.to_path_buf())
        }
        ImageError::IoError(e) => LoadError::Io {
            path: path.to_path_buf(),
            source: e,
        },
        other => LoadError::Decode {
            path: path.to_path_buf(),
            source: other,
        },
    })?;

    Ok(LoadedImage::from_dynamic(image))
}

fn color_type_name(color: ColorType) -> String {
    format!("{:?}", color)
}

//! Single-image conversion and aliased copies.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use pixelforge_spec::is_safe_file_name;
use serde::Serialize;
use thiserror::Error;

use crate::io::{load_rgba, LoadError};
use crate::png::{save_png, PngError, SavedFile};

/// Errors from conversion.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error("alias file name {0:?} is not a bare file name")]
    InvalidName(String),

    #[error(transparent)]
    Png(#[from] PngError),
}

/// Result of converting one image.
#[derive(Debug, Clone, Serialize)]
pub struct ConvertReport {
    pub input: PathBuf,
    pub original_color_type: String,
    pub width: u32,
    pub height: u32,
    pub output: SavedFile,
}

/// Re-encode any supported raster as an RGBA PNG.
pub fn convert_to_png(input: &Path, output: &Path) -> Result<ConvertReport, ConvertError> {
    let loaded = load_rgba(input)?;
    let saved = save_png(&loaded.image, output)?;
    Ok(ConvertReport {
        input: input.to_path_buf(),
        original_color_type: loaded.original_color_type,
        width: loaded.image.width(),
        height: loaded.image.height(),
        output: saved,
    })
}

/// One alias written by [`copy_aliases`].
#[derive(Debug, Clone, Serialize)]
pub struct AliasCopy {
    pub source: PathBuf,
    pub output: SavedFile,
}

/// Result of [`copy_aliases`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct AliasReport {
    pub copied: Vec<AliasCopy>,
    /// Mapping entries whose source file did not exist.
    pub missing: Vec<PathBuf>,
}

/// Copy `source_dir/<from>` to `dest_dir/<to>` for every mapping entry.
///
/// Entries are processed in source-name order. A missing source is skipped
/// and listed; any other read failure aborts.
pub fn copy_aliases(
    source_dir: &Path,
    dest_dir: &Path,
    mapping: &BTreeMap<String, String>,
) -> Result<AliasReport, ConvertError> {
    if let Some(bad) = mapping
        .iter()
        .flat_map(|(from, to)| [from, to])
        .find(|name| !is_safe_file_name(name))
    {
        return Err(ConvertError::InvalidName(bad.clone()));
    }

    let mut report = AliasReport::default();

    for (from, to) in mapping {
        let source = source_dir.join(from);
        let loaded = match load_rgba(&source) {
            Ok(loaded) => loaded,
            Err(e) if e.is_not_found() => {
                report.missing.push(source);
                continue;
            }
            Err(e) => return Err(e.into()),
        };
        let output = save_png(&loaded.image, &dest_dir.join(to))?;
        report.copied.push(AliasCopy { source, output });
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    #[test]
    fn test_convert_jpeg_to_rgba_png() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("hero.jpg");
        RgbImage::from_pixel(8, 6, Rgb([200, 10, 10])).save(&input).unwrap();

        let output = dir.path().join("player/player.png");
        let report = convert_to_png(&input, &output).unwrap();
        assert_eq!(report.original_color_type, "Rgb8");
        assert_eq!((report.width, report.height), (8, 6));

        let decoded = image::open(&output).unwrap();
        assert_eq!(decoded.color(), image::ColorType::Rgba8);
    }

    #[test]
    fn test_aliases_skip_missing_sources() {
        let dir = tempfile::tempdir().unwrap();
        let items = dir.path().join("items");
        let drugs = dir.path().join("drugs");
        save_png(&image::RgbaImage::new(4, 4), &items.join("crystal_pink.png")).unwrap();

        let mapping = BTreeMap::from([
            ("crystal_pink.png".to_string(), "stim_pack.png".to_string()),
            ("gem_rainbow.png".to_string(), "combat_drug.png".to_string()),
        ]);
        let report = copy_aliases(&items, &drugs, &mapping).unwrap();

        assert_eq!(report.copied.len(), 1);
        assert_eq!(report.missing, vec![items.join("gem_rainbow.png")]);
        assert!(drugs.join("stim_pack.png").exists());
        assert!(!drugs.join("combat_drug.png").exists());
    }

    #[test]
    fn test_aliases_reject_path_names() {
        let dir = tempfile::tempdir().unwrap();
        let items = dir.path().join("items");
        save_png(&image::RgbaImage::new(4, 4), &items.join("crystal_pink.png")).unwrap();

        let mapping = BTreeMap::from([(
            "crystal_pink.png".to_string(),
            "../stim_pack.png".to_string(),
        )]);
        let err = copy_aliases(&items, &dir.path().join("drugs"), &mapping).unwrap_err();
        assert!(matches!(err, ConvertError::InvalidName(ref n) if n == "../stim_pack.png"));
        assert!(!dir.path().join("stim_pack.png").exists());
    }
}

//! Integration tests for the tile variant replicator.

use std::path::PathBuf;

use image::{Rgba, RgbaImage};
use pixelforge_backend_image::png::save_png;
use pixelforge_backend_image::replicate::{replicate_tiles, TileTransform};

/// Asymmetric tile so every dihedral transform gives a distinct image.
fn asymmetric_tile(size: u32) -> RgbaImage {
    RgbaImage::from_fn(size, size, |x, y| {
        Rgba([(x * 11) as u8, (y * 5) as u8, ((x * y) % 251) as u8, 255])
    })
}

/// Transform schedule for count 16.
#[test]
fn test_schedule_for_sixteen() {
    for v in 0..16u32 {
        let t = TileTransform::for_variant(v, 16);
        assert_eq!(t.quarter_turns as u32, v % 4);
        assert_eq!(t.mirror, v >= 8);
    }
}

/// Applying the inverse restores the source, for every variant.
#[test]
fn test_inverse_restores_source() {
    let tile = asymmetric_tile(9);
    for v in 0..16 {
        let t = TileTransform::for_variant(v, 16);
        let restored = t.inverse().apply(&t.apply(&tile));
        assert_eq!(restored, tile, "variant {v} ({t})");
    }
}

/// The eight distinct transforms give eight distinct images.
#[test]
fn test_transforms_are_distinct() {
    let tile = asymmetric_tile(6);
    let mut outputs: Vec<RgbaImage> = Vec::new();
    for q in 0..4u8 {
        for m in [false, true] {
            outputs.push(TileTransform::new(q, m).apply(&tile));
        }
    }
    assert_eq!(outputs.len(), 8);
    for i in 0..outputs.len() {
        for j in i + 1..outputs.len() {
            assert_ne!(outputs[i], outputs[j], "transforms {i} and {j} collide");
        }
    }
}

/// Missing sources are skipped without consuming counter values.
#[test]
fn test_missing_source_does_not_advance_counter() {
    let dir = tempfile::tempdir().unwrap();
    let a = dir.path().join("tile_a.png");
    let b = dir.path().join("tile_b.png");
    save_png(&asymmetric_tile(8), &a).unwrap();
    save_png(&asymmetric_tile(8), &b).unwrap();
    let missing = dir.path().join("tile_missing.png");

    let out = dir.path().join("danger");
    let sources: Vec<PathBuf> = vec![a.clone(), missing.clone(), b.clone()];
    let report = replicate_tiles(&sources, &out, 4, "danger_tile").unwrap();

    assert_eq!(report.missing, vec![missing]);
    assert_eq!(report.outputs.len(), 8);
    assert_eq!(report.outputs[3].path, out.join("danger_tile_03.png"));
    assert_eq!(report.outputs[4].path, out.join("danger_tile_04.png"));
    assert_eq!(report.outputs[4].source, b);
    assert_eq!(report.outputs[4].variant, 0);
    assert!(!out.join("danger_tile_08.png").exists());
}

/// Written files match the in-memory transform.
#[test]
fn test_written_variants_match_transform() {
    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("tile.png");
    let tile = asymmetric_tile(10);
    save_png(&tile, &src).unwrap();

    let report = replicate_tiles(&[src], &dir.path().join("out"), 16, "v").unwrap();
    assert_eq!(report.outputs.len(), 16);
    for output in &report.outputs {
        let written = image::open(&output.path).unwrap().into_rgba8();
        assert_eq!(written, output.transform.apply(&tile));
    }
    // Variant 0 is the untouched source
    let first = image::open(&report.outputs[0].path).unwrap().into_rgba8();
    assert_eq!(first, tile);
}

/// A present but undecodable source aborts.
#[test]
fn test_corrupt_source_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let bad = dir.path().join("bad.png");
    std::fs::write(&bad, b"not a png").unwrap();
    assert!(replicate_tiles(&[bad], &dir.path().join("out"), 4, "t").is_err());
}

//! Integration tests for the transparency cleaner.

use image::{Rgba, RgbaImage};
use pixelforge_backend_image::clean::{clean_image, clean_transparency, is_gray_like, is_white_like};
use pixelforge_backend_image::png::save_png;

/// An all-white opaque 10x10 image is fully cleared, RGB preserved.
#[test]
fn test_all_white_becomes_transparent() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("white.png");
    save_png(&RgbaImage::from_pixel(10, 10, Rgba([255, 255, 255, 255])), &input).unwrap();

    let report = clean_transparency(&input, None).unwrap();
    assert_eq!(report.stats.white_count, 100);
    assert_eq!(report.stats.total_pixels, 100);
    assert!(report.background_detected);

    let saved = report.output.expect("cleaned file should be written");
    assert_eq!(saved.path, dir.path().join("white_clean.png"));

    let cleaned = image::open(&saved.path).unwrap().into_rgba8();
    assert!(cleaned.pixels().all(|p| *p == Rgba([255, 255, 255, 0])));
}

/// At or below 5% white nothing is written.
#[test]
fn test_below_threshold_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("sprite.png");
    let mut img = RgbaImage::from_pixel(20, 10, Rgba([10, 60, 10, 255]));
    for x in 0..10 {
        img.put_pixel(x, 0, Rgba([250, 250, 250, 255]));
    }
    save_png(&img, &input).unwrap();

    let out = dir.path().join("explicit.png");
    let report = clean_transparency(&input, Some(&out)).unwrap();
    assert_eq!(report.stats.white_count, 10);
    assert!(!report.background_detected);
    assert!(report.output.is_none());
    assert!(!out.exists());
    assert!(!dir.path().join("sprite_clean.png").exists());
}

/// Matching pixels only lose alpha; everything else is copied byte for byte.
#[test]
fn test_clean_preserves_non_background_pixels() {
    let img = RgbaImage::from_fn(16, 16, |x, y| {
        let v = ((x * 16 + y) * 7 % 256) as u8;
        Rgba([v, v.wrapping_mul(3), v.wrapping_add(90), (x * 16) as u8])
    });
    let cleaned = clean_image(&img);

    for (src, out) in img.pixels().zip(cleaned.pixels()) {
        let background = src.0[3] > 0 && (is_white_like(src) || is_gray_like(src));
        if background {
            assert_eq!(&out.0[..3], &src.0[..3]);
            assert_eq!(out.0[3], 0);
        } else {
            assert_eq!(out, src);
        }
    }
}

/// A custom output path wins over the default.
#[test]
fn test_explicit_output_path() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("walk.png");
    save_png(&RgbaImage::from_pixel(4, 4, Rgba([150, 150, 150, 255])), &input).unwrap();
    // Gray alone never triggers the background check
    let report = clean_transparency(&input, None).unwrap();
    assert_eq!(report.stats.gray_count, 16);
    assert!(!report.background_detected);

    save_png(&RgbaImage::from_pixel(4, 4, Rgba([230, 230, 230, 255])), &input).unwrap();
    let out = dir.path().join("nested/walk_fixed.png");
    let report = clean_transparency(&input, Some(&out)).unwrap();
    assert_eq!(report.output.map(|o| o.path), Some(out.clone()));
    assert!(out.exists());
}

/// The alpha distribution counts every pixel once.
#[test]
fn test_alpha_histogram_sums_to_total() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("mixed.png");
    let img = RgbaImage::from_fn(8, 8, |x, _| Rgba([0, 0, 0, (x * 32) as u8]));
    save_png(&img, &input).unwrap();

    let report = clean_transparency(&input, None).unwrap();
    let sum: u64 = report.stats.alpha_histogram.values().sum();
    assert_eq!(sum, 64);
    assert_eq!(report.stats.alpha_histogram.len(), 8);
    assert_eq!(report.stats.transparent_count, 8);
    assert_eq!(report.original_color_type, "Rgba8");
    assert!(!report.converted);
}

//! Pipeline runner integration tests.

use std::path::{Path, PathBuf};

use image::{Rgba, RgbaImage};
use pixelforge_cli::commands::run::execute_pipeline;
use pixelforge_spec::SpecError;
use pretty_assertions::assert_eq;
use tempfile::TempDir;

/// 64x64 sheet whose 2x2 cells are each filled with a distinct color.
fn write_sheet(path: &Path) {
    let colors = [
        Rgba([255, 0, 0, 255]),
        Rgba([0, 255, 0, 255]),
        Rgba([0, 0, 255, 255]),
        Rgba([255, 255, 0, 255]),
    ];
    let sheet = RgbaImage::from_fn(64, 64, |x, y| colors[((y / 32) * 2 + x / 32) as usize]);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    sheet.save(path).unwrap();
}

fn write_config(dir: &TempDir, json: &str) -> PathBuf {
    let path = dir.path().join("pipeline.json");
    std::fs::write(&path, json).unwrap();
    path
}

const SPLIT_AND_REPLICATE: &str = r#"{
    "version": 1,
    "directories": ["assets/sprites/enemies", "assets/tiles/danger"],
    "jobs": [
        {
            "kind": "split",
            "input": "assets/sheet.png",
            "output_dir": "assets/sprites/enemies",
            "grid": {"cols": 2, "rows": 2},
            "names": ["red", "skip", "blue", "yellow"]
        },
        {
            "kind": "replicate",
            "sources": ["assets/sprites/enemies/red.png", "assets/sprites/enemies/missing.png"],
            "output_dir": "assets/tiles/danger",
            "count": 4
        }
    ]
}"#;

#[test]
fn test_run_executes_jobs_in_order() {
    let tmp = tempfile::tempdir().unwrap();
    write_sheet(&tmp.path().join("assets/sheet.png"));
    let config = write_config(&tmp, SPLIT_AND_REPLICATE);

    let summary = execute_pipeline(&config, false).unwrap();
    assert!(!summary.dry_run);
    assert_eq!(summary.directories_created, 2);
    let kinds: Vec<_> = summary.jobs.iter().map(|j| j.kind).collect();
    assert_eq!(kinds, vec!["split", "replicate"]);

    let enemies = tmp.path().join("assets/sprites/enemies");
    assert!(enemies.join("red.png").exists());
    assert!(!enemies.join("green.png").exists());
    assert!(enemies.join("blue.png").exists());
    assert!(enemies.join("yellow.png").exists());

    let danger = tmp.path().join("assets/tiles/danger");
    for i in 0..4 {
        assert!(danger.join(format!("danger_tile_{:02}.png", i)).exists());
    }
    assert!(!danger.join("danger_tile_04.png").exists());
}

#[test]
fn test_dry_run_writes_nothing() {
    let tmp = tempfile::tempdir().unwrap();
    write_sheet(&tmp.path().join("assets/sheet.png"));
    let config = write_config(&tmp, SPLIT_AND_REPLICATE);

    let summary = execute_pipeline(&config, true).unwrap();
    assert!(summary.dry_run);
    assert_eq!(summary.jobs.len(), 2);
    assert_eq!(summary.directories_created, 0);
    assert!(!tmp.path().join("assets/sprites").exists());
    assert!(!tmp.path().join("assets/tiles").exists());
}

#[test]
fn test_failing_job_aborts_and_keeps_earlier_outputs() {
    let tmp = tempfile::tempdir().unwrap();
    write_sheet(&tmp.path().join("assets/sheet.png"));
    let config = write_config(
        &tmp,
        r#"{
            "version": 1,
            "jobs": [
                {"kind": "convert", "input": "assets/sheet.png", "output": "out/sheet.png"},
                {"kind": "split", "input": "assets/nope.jpg", "output_dir": "out/cells",
                 "grid": {"cols": 1, "rows": 1}, "names": ["only"]},
                {"kind": "generate", "out_root": "out/pack"}
            ]
        }"#,
    );

    let err = execute_pipeline(&config, false).unwrap_err();
    let message = format!("{:#}", err);
    assert!(message.contains("jobs[1] (split) failed"), "{}", message);

    assert!(tmp.path().join("out/sheet.png").exists());
    assert!(!tmp.path().join("out/pack").exists());
}

#[test]
fn test_root_is_relative_to_config() {
    let tmp = tempfile::tempdir().unwrap();
    write_sheet(&tmp.path().join("project/assets/sheet.png"));
    std::fs::create_dir_all(tmp.path().join("project/tools")).unwrap();
    let config = tmp.path().join("project/tools/pipeline.json");
    std::fs::write(
        &config,
        r#"{
            "version": 1,
            "root": "..",
            "jobs": [
                {"kind": "inspect", "input": "assets/sheet.png",
                 "grid": {"cols": 2, "rows": 2}, "frame_count": 3},
                {"kind": "clean", "input": "assets/sheet.png"}
            ]
        }"#,
    )
    .unwrap();

    let summary = execute_pipeline(&config, false).unwrap();
    assert_eq!(summary.jobs.len(), 2);
    assert_eq!(summary.root, tmp.path().join("project/tools/.."));
    // Saturated colors are neither white nor gray, so nothing is cleaned.
    assert!(!tmp.path().join("project/assets/sheet_clean.png").exists());
}

#[test]
fn test_invalid_config_is_not_run() {
    let tmp = tempfile::tempdir().unwrap();
    let config = write_config(
        &tmp,
        r#"{
            "version": 2,
            "directories": ["made_anyway"],
            "jobs": [{"kind": "generate"}]
        }"#,
    );

    let err = execute_pipeline(&config, false).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<SpecError>(),
        Some(SpecError::ValidationFailed(1))
    ));
    assert!(!tmp.path().join("made_anyway").exists());
}

#[test]
fn test_unknown_fields_are_rejected() {
    let tmp = tempfile::tempdir().unwrap();
    let config = write_config(
        &tmp,
        r#"{"version": 1, "jobs": [{"kind": "split", "input": "a.png", "output_dir": "o",
            "grid": {"cols": 1, "rows": 1}, "names": ["a"], "overlap": 2}]}"#,
    );

    let err = execute_pipeline(&config, false).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<SpecError>(),
        Some(SpecError::JsonParse(_))
    ));
}

#[test]
fn test_alias_job_copies_present_files() {
    let tmp = tempfile::tempdir().unwrap();
    write_sheet(&tmp.path().join("assets/sheet.png"));
    let config = write_config(
        &tmp,
        r#"{
            "version": 1,
            "directories": ["assets/items", "assets/drugs"],
            "jobs": [
                {"kind": "split", "input": "assets/sheet.png", "output_dir": "assets/items",
                 "grid": {"cols": 2, "rows": 2}, "names": ["crystal_pink", "gem_rainbow"]},
                {"kind": "alias", "source_dir": "assets/items", "dest_dir": "assets/drugs",
                 "mapping": {"crystal_pink.png": "stim_pack.png",
                             "orb_glow_blue.png": "focus_serum.png"}}
            ]
        }"#,
    );

    execute_pipeline(&config, false).unwrap();
    let drugs = tmp.path().join("assets/drugs");
    assert!(drugs.join("stim_pack.png").exists());
    assert!(!drugs.join("focus_serum.png").exists());
}

#[test]
fn test_demo_pipeline_plans_every_job() {
    let config = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../demos/roboclaust_pipeline.json");

    let summary = execute_pipeline(&config, true).unwrap();
    assert_eq!(summary.jobs.len(), 11);
    assert_eq!(summary.jobs[0].kind, "generate");
    assert_eq!(summary.jobs[10].kind, "replicate");
    assert_eq!(summary.jobs[8].kind, "alias");
}

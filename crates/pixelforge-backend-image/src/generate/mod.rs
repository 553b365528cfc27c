//! Procedural asset pack generator.
//!
//! Draws the full set of static sprites, tiles and items plus the animated
//! strips, and writes them under an output root:
//!
//! ```text
//! <out_root>/sprites/   static PNGs and roboclaust_preview.png
//! <out_root>/anim/      horizontal frame strips
//! ```
//!
//! Output is deterministic. Re-running overwrites every file with the same
//! bytes.

pub mod anim;
pub mod preview;
pub mod sprites;

use std::path::Path;

use image::RgbaImage;
use serde::Serialize;
use thiserror::Error;

use crate::png::{save_png, PngError};
use anim::ExplosionColors;
use preview::PreviewSection;
use sprites::{DroneKind, WallOrientation};

/// Subdirectory for static sprites.
pub const SPRITES_DIR: &str = "sprites";
/// Subdirectory for animated sheets.
pub const ANIM_DIR: &str = "anim";
/// File name of the preview atlas.
pub const PREVIEW_FILE: &str = "roboclaust_preview.png";

/// Errors from asset generation.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("PNG error: {0}")]
    Png(#[from] PngError),
}

/// One written asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedAsset {
    /// Path relative to the output root, `/`-separated.
    pub rel_path: String,
    pub width: u32,
    pub height: u32,
    /// 1 for static sprites.
    pub frames: u32,
    pub hash: String,
}

/// Everything written by [`generate_asset_pack`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct GenerationReport {
    pub assets: Vec<GeneratedAsset>,
}

impl GenerationReport {
    pub fn static_count(&self) -> usize {
        self.assets.iter().filter(|a| a.frames == 1).count()
    }

    pub fn animated_count(&self) -> usize {
        self.assets.iter().filter(|a| a.frames > 1).count()
    }

    pub fn find(&self, rel_path: &str) -> Option<&GeneratedAsset> {
        self.assets.iter().find(|a| a.rel_path == rel_path)
    }
}

struct PackWriter<'a> {
    out_root: &'a Path,
    report: GenerationReport,
}

impl PackWriter<'_> {
    fn write(
        &mut self,
        dir: &str,
        name: &str,
        image: &RgbaImage,
        frames: u32,
    ) -> Result<(), GenerateError> {
        let rel_path = format!("{dir}/{name}");
        let saved = save_png(image, &self.out_root.join(dir).join(name))?;
        self.report.assets.push(GeneratedAsset {
            rel_path,
            width: image.width(),
            height: image.height(),
            frames,
            hash: saved.hash,
        });
        Ok(())
    }

    fn sprite(&mut self, name: &str, image: &RgbaImage) -> Result<(), GenerateError> {
        self.write(SPRITES_DIR, name, image, 1)
    }

    fn sheet(&mut self, name: &str, image: &RgbaImage, frames: u32) -> Result<(), GenerateError> {
        self.write(ANIM_DIR, name, image, frames)
    }
}

/// Draw and save the full asset pack under `out_root`.
pub fn generate_asset_pack(out_root: &Path) -> Result<GenerationReport, GenerateError> {
    let mut w = PackWriter {
        out_root,
        report: GenerationReport::default(),
    };

    let player = sprites::player_hacker();
    w.sprite("player_hacker_64.png", &player)?;

    let drones: Vec<(DroneKind, RgbaImage)> = DroneKind::ALL
        .iter()
        .map(|&kind| (kind, sprites::enemy_drone(kind)))
        .collect();
    for (kind, image) in &drones {
        w.sprite(&format!("enemy_drone_{}_40.png", kind.as_str()), image)?;
    }

    let boss = sprites::boss_mech();
    w.sprite("boss_mech_128.png", &boss)?;

    let tiles = [
        ("tile_scrapyard_64.png", sprites::tile_scrapyard()),
        ("tile_factory_64.png", sprites::tile_factory()),
        ("tile_control_center_64.png", sprites::tile_control_center()),
        ("tile_server_room_64.png", sprites::tile_server_room()),
        (
            "tile_wall_warning_h_64.png",
            sprites::tile_wall_warning(WallOrientation::Horizontal),
        ),
        (
            "tile_wall_warning_v_64.png",
            sprites::tile_wall_warning(WallOrientation::Vertical),
        ),
    ];
    for (name, image) in &tiles {
        w.sprite(name, image)?;
    }

    let items = [
        ("item_health_32.png", sprites::item_health()),
        ("item_scrap_32.png", sprites::item_scrap()),
        ("item_weapon_upgrade_32.png", sprites::item_weapon_upgrade()),
    ];
    for (name, image) in &items {
        w.sprite(name, image)?;
    }

    let sections = [
        PreviewSection {
            title: "Player 64x64",
            sprites: vec![&player],
        },
        PreviewSection {
            title: "Enemies 40x40",
            sprites: drones.iter().map(|(_, im)| im).collect(),
        },
        PreviewSection {
            title: "Boss 128x128",
            sprites: vec![&boss],
        },
        PreviewSection {
            title: "Tiles 64x64",
            sprites: tiles.iter().map(|(_, im)| im).collect(),
        },
        PreviewSection {
            title: "Items 32x32",
            sprites: items.iter().map(|(_, im)| im).collect(),
        },
    ];
    w.sprite(PREVIEW_FILE, &preview::build_preview(&sections))?;

    w.sheet("player_walk_64x64_8f.png", &anim::player_walk_sheet(), anim::PLAYER_WALK_FRAMES)?;
    for kind in DroneKind::ALL {
        w.sheet(
            &format!("drone_{}_40x40_6f.png", kind.as_str()),
            &anim::drone_sheet(kind),
            anim::DRONE_FRAMES,
        )?;
    }

    let explosions: [(&str, ExplosionColors); 2] = [
        ("explosion_generic_64x64_12f.png", anim::GENERIC_EXPLOSION),
        ("explosion_kamikaze_64x64_12f.png", anim::KAMIKAZE_EXPLOSION),
    ];
    for (name, colors) in explosions {
        w.sheet(name, &anim::explosion_sheet(colors), anim::EXPLOSION_FRAMES)?;
    }

    w.sheet(
        "boss_core_pulse_128x128_8f.png",
        &anim::boss_core_pulse_sheet(),
        anim::BOSS_PULSE_FRAMES,
    )?;
    w.sheet(
        "boss_muzzle_flash_overlay_64x64_6f.png",
        &anim::boss_muzzle_flash_sheet(),
        anim::MUZZLE_FLASH_FRAMES,
    )?;
    w.sheet(
        "player_hacker_walk_32x32_4f.png",
        &anim::hacker_walk_sheet(),
        anim::HACKER_WALK_FRAMES,
    )?;

    Ok(w.report)
}

//! Animated sheets of the asset pack.
//!
//! Every sheet is a horizontal strip built with [`make_strip`]. Per-frame
//! offsets are `amplitude * sin(2π · phase)` truncated toward zero, so small
//! amplitudes can stay flat for the whole cycle.

use std::f64::consts::TAU;

use image::RgbaImage;

use crate::color::palette::{BLACK, PURPLE, RED, WHITE, YELLOW};
use crate::color::Color;
use crate::compose::{composite, make_strip};
use crate::draw::{transparent, Canvas, Paint};

use super::sprites::{
    draw_boss_hull, draw_fast_hull, draw_kamikaze_hull, draw_player_body, draw_player_feet,
    draw_sniper_hull, DroneKind,
};

/// Truncated sinusoidal offset for `phase` in `[0, 1)`.
pub fn wave(amplitude: f64, phase: f64) -> i32 {
    (amplitude * (phase * TAU).sin()) as i32
}

pub const PLAYER_WALK_FRAMES: u32 = 8;
pub const DRONE_FRAMES: u32 = 6;
pub const EXPLOSION_FRAMES: u32 = 12;
pub const BOSS_PULSE_FRAMES: u32 = 8;
pub const MUZZLE_FLASH_FRAMES: u32 = 6;
pub const HACKER_WALK_FRAMES: u32 = 4;

/// One 64x64 frame of the player walk cycle.
pub fn player_walk_frame(phase: f64) -> RgbaImage {
    let mut im = transparent(64, 64);
    let mut c = Canvas::new(&mut im);
    draw_player_body(&mut c, wave(2.0, phase));
    draw_player_feet(&mut c, wave(4.0, phase));
    im
}

pub fn player_walk_sheet() -> RgbaImage {
    make_strip(PLAYER_WALK_FRAMES, 64, 64, |_, phase| player_walk_frame(phase))
}

/// Drone body without rotors. Differs from the static sprite for the
/// chassis-based kinds.
pub fn drone_body(kind: DroneKind) -> RgbaImage {
    let mut im = transparent(40, 40);
    let mut c = Canvas::new(&mut im);
    match kind {
        DroneKind::Standard => {
            let red = Paint::filled(RED, BLACK);
            c.rect(10, 8, 30, 32, red);
            c.ellipse(6, 6, 18, 18, red);
            c.ellipse(22, 6, 34, 18, red);
            c.ellipse(6, 22, 18, 34, red);
            c.ellipse(22, 22, 34, 34, red);
            c.ellipse(18, 18, 22, 22, Paint::filled(BLACK, WHITE));
        }
        DroneKind::Fast => draw_fast_hull(&mut c),
        DroneKind::Heavy => {
            c.rect(10, 8, 30, 32, Paint::filled(Color::rgb(100, 40, 30), BLACK));
            c.rect(8, 12, 14, 28, Paint::fill(BLACK));
            c.rect(26, 12, 32, 28, Paint::fill(BLACK));
            c.ellipse(18, 18, 22, 22, Paint::filled(BLACK, YELLOW));
        }
        DroneKind::Kamikaze => draw_kamikaze_hull(&mut c),
        DroneKind::Sniper => draw_sniper_hull(&mut c),
    }
    im
}

const ROTOR_COLOR: Color = Color::rgba(0, 0, 0, 200);
const ROTOR_HUB: Color = Color::rgba(30, 30, 30, 220);

/// Two perpendicular blades from the center at `angle_deg`, plus the hub.
pub fn draw_rotor(im: &mut RgbaImage, angle_deg: f64, radius: f64) {
    let cx = (im.width() / 2) as i32;
    let cy = (im.height() / 2) as i32;
    let mut c = Canvas::new(im);
    for extra in [0.0, 90.0] {
        let a = (angle_deg + extra).to_radians();
        let x = cx + (a.cos() * radius) as i32;
        let y = cy + (a.sin() * radius) as i32;
        c.line(cx, cy, x, y, ROTOR_COLOR, 2);
    }
    c.ellipse(cx - 3, cy - 3, cx + 3, cy + 3, Paint::fill(ROTOR_HUB));
}

/// Frame `index` of a drone hover cycle.
pub fn drone_frame(kind: DroneKind, index: u32, frames: u32) -> RgbaImage {
    let phase = index as f64 / frames as f64;
    let mut frame = transparent(40, 40);
    composite(&mut frame, &drone_body(kind), 0, wave(1.0, phase));

    let angle = (index as f64 * (360.0 / frames as f64)) % 360.0;
    let radius = if kind == DroneKind::Fast { 10.0 } else { 14.0 };
    draw_rotor(&mut frame, angle, radius);
    frame
}

pub fn drone_sheet(kind: DroneKind) -> RgbaImage {
    make_strip(DRONE_FRAMES, 40, 40, |i, _| drone_frame(kind, i, DRONE_FRAMES))
}

/// Fill and ring colors of an explosion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExplosionColors {
    pub inner: Color,
    pub outer: Color,
}

pub const GENERIC_EXPLOSION: ExplosionColors = ExplosionColors {
    inner: Color::rgb(255, 180, 40),
    outer: Color::rgb(255, 240, 120),
};

pub const KAMIKAZE_EXPLOSION: ExplosionColors = ExplosionColors {
    inner: Color::rgb(255, 170, 0),
    outer: Color::rgb(255, 220, 0),
};

const DEBRIS_COUNT: u32 = 10;

/// Explosion frame at progress `t` in `[0, 1]`.
pub fn explosion_frame(colors: ExplosionColors, t: f64, size: u32) -> RgbaImage {
    let mut im = transparent(size, size);
    let mut c = Canvas::new(&mut im);
    let center = (size / 2) as i32;

    let r = (4.0 + t * 26.0) as i32;
    c.ellipse(center - r, center - r, center + r, center + r, Paint::stroke(colors.outer).width(2));

    let core = (10.0 - t * 10.0).max(0.0) as i32;
    if core > 0 {
        c.ellipse(
            center - core,
            center - core,
            center + core,
            center + core,
            Paint::filled(colors.inner, Color::rgba(0, 0, 0, 120)),
        );
    }

    for k in 0..DEBRIS_COUNT {
        let angle = TAU * (k as f64 / DEBRIS_COUNT as f64) + t * 3.0;
        let dist = (8.0 + t * 24.0 + (k % 3) as f64) as i32;
        let x = center + (angle.cos() * dist as f64) as i32;
        let y = center + (angle.sin() * dist as f64) as i32;
        c.rect(x - 1, y - 1, x + 1, y + 1, Paint::fill(colors.outer));
    }
    im
}

/// Progress of frame `index`, reaching 1.0 on the last frame.
fn progress(index: u32, frames: u32) -> f64 {
    if frames <= 1 {
        0.0
    } else {
        index as f64 / (frames - 1) as f64
    }
}

pub fn explosion_sheet(colors: ExplosionColors) -> RgbaImage {
    make_strip(EXPLOSION_FRAMES, 64, 64, |i, _| {
        explosion_frame(colors, progress(i, EXPLOSION_FRAMES), 64)
    })
}

/// Boss with its core and glow at `phase`.
pub fn boss_pulse_frame(phase: f64) -> RgbaImage {
    let mut base = transparent(128, 128);
    {
        let mut c = Canvas::new(&mut base);
        draw_boss_hull(&mut c);
        let r = 6 + wave(3.0, phase);
        c.ellipse(64 - r, 62 - r, 64 + r, 62 + r, Paint::filled(BLACK, WHITE));
    }

    let mut glow = transparent(128, 128);
    let rg = 12 + wave(6.0, phase);
    Canvas::new(&mut glow).ellipse(
        64 - rg,
        62 - rg,
        64 + rg,
        62 + rg,
        Paint::fill(Color::rgba(255, 40, 40, 80)),
    );
    composite(&mut base, &glow, 0, 0);
    base
}

pub fn boss_core_pulse_sheet() -> RgbaImage {
    make_strip(BOSS_PULSE_FRAMES, 128, 128, |_, phase| boss_pulse_frame(phase))
}

/// Muzzle flash wedge at progress `t`.
pub fn muzzle_flash_frame(t: f64) -> RgbaImage {
    let mut im = transparent(64, 64);
    let mut c = Canvas::new(&mut im);
    let length = (8.0 + t * 40.0) as i32;
    let half = (4.0 + t * 10.0) as i32;
    c.polygon(
        &[(6, 32 - half), (6, 32 + half), (6 + length, 32)],
        Paint::fill(Color::rgba(255, 230, 160, 220)),
    );
    c.polygon(
        &[(6, 32 - half / 2), (6, 32 + half / 2), (6 + length / 2, 32)],
        Paint::fill(Color::rgba(255, 200, 60, 240)),
    );
    im
}

pub fn boss_muzzle_flash_sheet() -> RgbaImage {
    make_strip(MUZZLE_FLASH_FRAMES, 64, 64, |i, _| {
        muzzle_flash_frame(progress(i, MUZZLE_FLASH_FRAMES))
    })
}

/// Half-open pixel block: rows `y0..y1`, columns `x0..x1`.
type Block = (i32, i32, i32, i32);

const HEAD: Block = (8, 16, 12, 20);
const TORSO: Block = (16, 25, 14, 18);

// Arms then legs for stand, left step, legs together, right step.
const HACKER_LIMBS: [[Block; 4]; 4] = [
    [(18, 23, 12, 14), (18, 23, 18, 20), (24, 31, 14, 16), (24, 31, 16, 18)],
    [(18, 23, 11, 13), (18, 23, 19, 21), (24, 31, 13, 15), (24, 31, 16, 18)],
    [(18, 23, 12, 14), (18, 23, 18, 20), (24, 31, 15, 17), (24, 31, 15, 17)],
    [(18, 23, 11, 13), (18, 23, 19, 21), (24, 31, 14, 16), (24, 31, 17, 19)],
];

/// One 32x32 frame of the compact purple hacker walk.
pub fn hacker_walk_frame(index: u32) -> RgbaImage {
    let mut im = transparent(32, 32);
    let mut c = Canvas::new(&mut im);
    let limbs = &HACKER_LIMBS[(index % HACKER_WALK_FRAMES) as usize];
    for &(y0, y1, x0, x1) in [HEAD, TORSO].iter().chain(limbs.iter()) {
        c.rect(x0, y0, x1 - 1, y1 - 1, Paint::fill(PURPLE));
    }
    im
}

pub fn hacker_walk_sheet() -> RgbaImage {
    make_strip(HACKER_WALK_FRAMES, 32, 32, |i, _| hacker_walk_frame(i))
}

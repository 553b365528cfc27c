//! Static sprites of the asset pack.

use image::RgbaImage;

use crate::color::palette::{
    BLACK, CYAN, DARK_GRAY, GRAY, NEON_BLUE, ORANGE, RED, WHITE, YELLOW,
};
use crate::color::Color;
use crate::draw::{new_image, transparent, Canvas, Paint};

/// Enemy drone variants, in pack order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DroneKind {
    Standard,
    Fast,
    Heavy,
    Kamikaze,
    Sniper,
}

impl DroneKind {
    pub const ALL: [DroneKind; 5] = [
        DroneKind::Standard,
        DroneKind::Fast,
        DroneKind::Heavy,
        DroneKind::Kamikaze,
        DroneKind::Sniper,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DroneKind::Standard => "standard",
            DroneKind::Fast => "fast",
            DroneKind::Heavy => "heavy",
            DroneKind::Kamikaze => "kamikaze",
            DroneKind::Sniper => "sniper",
        }
    }
}

/// Stripe direction of a warning wall tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WallOrientation {
    Horizontal,
    Vertical,
}

/// Player body with a vertical offset, shared by the static sprite and the walk cycle.
pub(crate) fn draw_player_body(c: &mut Canvas<'_>, bob: i32) {
    c.rect(10, 8 + bob, 54, 56 + bob, Paint::filled(DARK_GRAY, BLACK));
    c.ellipse(22, 4 + bob, 42, 20 + bob, Paint::filled(BLACK, Color::rgb(10, 10, 10)));
    c.rect(6, 34 + bob, 20, 44 + bob, Paint::filled(Color::rgb(20, 30, 35), BLACK));
    c.rect(8, 36 + bob, 18, 42 + bob, Paint::stroke(CYAN));
    c.rect(8, 24 + bob, 20, 48 + bob, Paint::filled(GRAY, BLACK));
    c.rect(44, 24 + bob, 56, 48 + bob, Paint::filled(GRAY, BLACK));
    c.rect(
        26,
        28 + bob,
        38,
        44 + bob,
        Paint::filled(Color::rgb(30, 30, 36), Color::rgb(15, 15, 18)),
    );
    for x in (12..53).step_by(3) {
        c.point(x, 32 + bob, CYAN);
    }
    for y in (16..54).step_by(3) {
        c.point(12, y + bob, CYAN);
        c.point(52, y + bob, CYAN);
    }
}

/// Feet, offset in opposite directions by `swing`.
pub(crate) fn draw_player_feet(c: &mut Canvas<'_>, swing: i32) {
    c.rect(20 + swing, 52, 28 + swing, 58, Paint::fill(BLACK));
    c.rect(36 - swing, 52, 44 - swing, 58, Paint::fill(BLACK));
}

/// 64x64 hacker.
pub fn player_hacker() -> RgbaImage {
    let mut im = transparent(64, 64);
    let mut c = Canvas::new(&mut im);
    draw_player_body(&mut c, 0);
    draw_player_feet(&mut c, 0);
    im
}

#[derive(Default)]
struct Chassis {
    accent: Option<Color>,
    heavy: bool,
}

fn chassis_base(color: Color, style: Chassis) -> RgbaImage {
    let (w, h) = (40, 40);
    let mut im = transparent(w as u32, h as u32);
    let mut c = Canvas::new(&mut im);
    let body = Paint::filled(color, BLACK);

    c.rect(10, 8, w - 10, h - 8, body);
    c.ellipse(6, 6, 18, 18, body);
    c.ellipse(w - 18, 6, w - 6, 18, body);
    c.ellipse(6, h - 18, 18, h - 6, body);
    c.ellipse(w - 18, h - 18, w - 6, h - 6, body);
    c.ellipse(w / 2 - 4, h / 2 - 4, w / 2 + 4, h / 2 + 4, Paint::filled(BLACK, WHITE));

    if let Some(accent) = style.accent {
        c.rect(w / 2 - 8, 8, w / 2 + 8, 10, Paint::fill(accent));
        for x in (10..w - 10).step_by(6) {
            c.point(x, h - 10, accent);
        }
    }
    if style.heavy {
        c.rect(8, 12, 14, h - 12, Paint::fill(BLACK));
        c.rect(w - 14, 12, w - 8, h - 12, Paint::fill(BLACK));
    }
    im
}

/// 40x40 static drone sprite.
pub fn enemy_drone(kind: DroneKind) -> RgbaImage {
    match kind {
        DroneKind::Standard => chassis_base(
            RED,
            Chassis {
                accent: Some(WHITE),
                ..Default::default()
            },
        ),
        DroneKind::Fast => {
            let mut im = transparent(40, 40);
            let mut c = Canvas::new(&mut im);
            draw_fast_hull(&mut c);
            im
        }
        DroneKind::Heavy => {
            let mut im = chassis_base(
                Color::rgb(100, 40, 30),
                Chassis {
                    accent: Some(Color::rgb(200, 120, 80)),
                    heavy: true,
                },
            );
            Canvas::new(&mut im).point(16, 14, YELLOW);
            im
        }
        DroneKind::Kamikaze => {
            let mut im = transparent(40, 40);
            let mut c = Canvas::new(&mut im);
            draw_kamikaze_hull(&mut c);
            im
        }
        DroneKind::Sniper => {
            let mut im = transparent(40, 40);
            let mut c = Canvas::new(&mut im);
            draw_sniper_hull(&mut c);
            im
        }
    }
}

pub(crate) fn draw_fast_hull(c: &mut Canvas<'_>) {
    c.polygon(&[(20, 6), (30, 14), (20, 22), (10, 14)], Paint::filled(NEON_BLUE, BLACK));
    c.polygon(&[(20, 4), (32, 14), (20, 10)], Paint::filled(Color::rgb(0, 120, 150), BLACK));
    c.ellipse(18, 12, 22, 16, Paint::filled(BLACK, WHITE));
}

pub(crate) fn draw_kamikaze_hull(c: &mut Canvas<'_>) {
    c.rect(10, 10, 30, 30, Paint::filled(ORANGE, BLACK));
    c.ellipse(16, 16, 24, 24, Paint::filled(BLACK, YELLOW));
    c.line(24, 16, 28, 10, YELLOW, 1);
}

pub(crate) fn draw_sniper_hull(c: &mut Canvas<'_>) {
    c.rect(8, 8, 32, 32, Paint::filled(Color::rgb(40, 120, 60), BLACK));
    c.rect(20, 6, 22, 8, Paint::fill(BLACK));
    c.rect(21, 4, 27, 6, Paint::fill(BLACK));
    c.ellipse(14, 14, 26, 26, Paint::filled(BLACK, WHITE));
}

/// Boss hull without the core, shared with the pulse animation.
pub(crate) fn draw_boss_hull(c: &mut Canvas<'_>) {
    c.rect(20, 24, 108, 100, Paint::filled(Color::rgb(120, 0, 0), BLACK));
    c.rect(48, 8, 80, 28, Paint::filled(Color::rgb(60, 0, 0), BLACK));
    c.rect(10, 44, 24, 88, Paint::filled(Color::rgb(50, 50, 55), BLACK));
    c.rect(104, 44, 118, 88, Paint::filled(Color::rgb(50, 50, 55), BLACK));
    c.rect(36, 96, 56, 120, Paint::filled(BLACK, BLACK));
    c.rect(72, 96, 92, 120, Paint::filled(BLACK, BLACK));
    for x in (24..104).step_by(4) {
        c.point(x, 62, RED);
    }
}

/// 128x128 boss mech.
pub fn boss_mech() -> RgbaImage {
    let mut im = transparent(128, 128);
    let mut c = Canvas::new(&mut im);
    draw_boss_hull(&mut c);
    c.ellipse(58, 56, 70, 68, Paint::filled(BLACK, WHITE));
    im
}

/// Rusty metal plate with a cross seam.
pub fn tile_scrapyard() -> RgbaImage {
    let mut t = new_image(64, 64, Color::rgb(70, 70, 78));
    let mut c = Canvas::new(&mut t);
    c.line(0, 32, 64, 32, DARK_GRAY, 1);
    c.line(32, 0, 32, 64, DARK_GRAY, 1);
    c.noise(Color::rgb(140, 60, 30), 0.02, 17);
    c.rect(6, 50, 16, 60, Paint::fill(Color::rgb(110, 50, 25)));
    t
}

/// Dark floor with an 8px grid.
pub fn tile_factory() -> RgbaImage {
    let mut t = new_image(64, 64, Color::rgb(36, 36, 42));
    let mut c = Canvas::new(&mut t);
    for x in (0..64).step_by(8) {
        c.line(x, 0, x, 64, Color::rgb(20, 20, 24), 1);
    }
    for y in (0..64).step_by(8) {
        c.line(0, y, 64, y, Color::rgb(24, 24, 28), 1);
    }
    c.noise(Color::rgb(60, 60, 66), 0.02, 3);
    t
}

/// Circuit grid with node studs.
pub fn tile_control_center() -> RgbaImage {
    let mut t = new_image(64, 64, Color::rgb(20, 24, 30));
    let mut c = Canvas::new(&mut t);
    for x in (6..60).step_by(10) {
        c.line(x, 6, x, 58, CYAN, 1);
    }
    for y in (10..60).step_by(10) {
        c.line(6, y, 58, y, CYAN, 1);
    }
    for x in (8..60).step_by(10) {
        for y in (8..60).step_by(10) {
            c.rect(x - 1, y - 1, x + 1, y + 1, Paint::fill(NEON_BLUE));
        }
    }
    t
}

/// Four rack columns with blinking slots.
pub fn tile_server_room() -> RgbaImage {
    let mut t = new_image(64, 64, Color::rgb(10, 16, 24));
    let mut c = Canvas::new(&mut t);
    for x in (0..64).step_by(16) {
        c.rect(x + 2, 6, x + 14, 58, Paint::filled(Color::rgb(14, 22, 34), Color::rgb(6, 10, 16)));
        for y in (10..56).step_by(8) {
            c.line(x + 4, y, x + 12, y, NEON_BLUE, 1);
        }
    }
    t
}

/// Red warning stripes.
pub fn tile_wall_warning(orientation: WallOrientation) -> RgbaImage {
    let mut t = new_image(64, 64, Color::rgb(50, 8, 8));
    let mut c = Canvas::new(&mut t);
    c.rect(0, 0, 63, 63, Paint::stroke(BLACK));
    let stripe = Paint::fill(Color::rgb(200, 40, 40));
    for p in (8..64).step_by(12) {
        match orientation {
            WallOrientation::Horizontal => {
                c.rect(0, p, 63, p + 6, stripe);
                c.line(0, p + 6, 63, p + 6, BLACK, 1);
            }
            WallOrientation::Vertical => {
                c.rect(p, 0, p + 6, 63, stripe);
                c.line(p + 6, 0, p + 6, 63, BLACK, 1);
            }
        }
    }
    t
}

pub fn item_health() -> RgbaImage {
    let mut im = transparent(32, 32);
    let mut c = Canvas::new(&mut im);
    c.rect(4, 4, 28, 28, Paint::filled(Color::rgb(10, 30, 10), BLACK));
    c.rect(14, 8, 18, 24, Paint::fill(WHITE));
    c.rect(8, 14, 24, 18, Paint::fill(WHITE));
    im
}

pub fn item_scrap() -> RgbaImage {
    let mut im = transparent(32, 32);
    let mut c = Canvas::new(&mut im);
    c.rect(4, 6, 28, 26, Paint::filled(Color::rgb(180, 150, 40), BLACK));
    c.polygon(
        &[(6, 24), (10, 10), (16, 12), (20, 6), (26, 14), (24, 24)],
        Paint::filled(Color::rgb(230, 200, 80), BLACK),
    );
    im
}

pub fn item_weapon_upgrade() -> RgbaImage {
    let mut im = transparent(32, 32);
    let mut c = Canvas::new(&mut im);
    c.rect(4, 4, 28, 28, Paint::filled(Color::rgb(180, 80, 20), BLACK));
    c.polygon(&[(16, 6), (22, 16), (10, 16)], Paint::filled(YELLOW, BLACK));
    c.rect(12, 18, 20, 22, Paint::fill(BLACK));
    c.rect(18, 16, 24, 18, Paint::fill(BLACK));
    im
}

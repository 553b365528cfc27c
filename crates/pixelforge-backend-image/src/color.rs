//! 8-bit RGBA color and the fixed sprite palette.

use image::Rgba;
use serde::{Deserialize, Serialize};

/// RGBA color with 8-bit components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Fully transparent black.
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);

    /// Create an opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Create a color with alpha.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Same color with a different alpha.
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Convert to an `image` pixel.
    #[inline]
    pub fn to_pixel(self) -> Rgba<u8> {
        Rgba([self.r, self.g, self.b, self.a])
    }

    /// Convert from an `image` pixel.
    #[inline]
    pub fn from_pixel(pixel: &Rgba<u8>) -> Self {
        let [r, g, b, a] = pixel.0;
        Self { r, g, b, a }
    }

    /// Porter-Duff "over": composite `self` on top of `dst`.
    pub fn over(self, dst: Color) -> Color {
        match self.a {
            255 => return self,
            0 => return dst,
            _ => {}
        }

        let src_a = self.a as f64 / 255.0;
        let dst_a = dst.a as f64 / 255.0;
        let out_a = src_a + dst_a * (1.0 - src_a);

        if out_a < 0.0001 {
            return Color::TRANSPARENT;
        }

        let channel = |s: u8, d: u8| -> u8 {
            let s = s as f64 / 255.0;
            let d = d as f64 / 255.0;
            let v = (s * src_a + d * dst_a * (1.0 - src_a)) / out_a;
            (v.clamp(0.0, 1.0) * 255.0).round() as u8
        };

        Color {
            r: channel(self.r, dst.r),
            g: channel(self.g, dst.g),
            b: channel(self.b, dst.b),
            a: (out_a.clamp(0.0, 1.0) * 255.0).round() as u8,
        }
    }
}

impl From<Rgba<u8>> for Color {
    fn from(pixel: Rgba<u8>) -> Self {
        Color::from_pixel(&pixel)
    }
}

impl From<Color> for Rgba<u8> {
    fn from(color: Color) -> Self {
        color.to_pixel()
    }
}

/// Fixed palette used by the procedural asset pack.
pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const GRAY: Color = Color::rgb(80, 80, 88);
    pub const DARK_GRAY: Color = Color::rgb(40, 40, 48);
    pub const CYAN: Color = Color::rgb(0, 220, 220);
    pub const NEON_BLUE: Color = Color::rgb(0, 170, 255);
    pub const RED: Color = Color::rgb(220, 40, 40);
    pub const DARK_RED: Color = Color::rgb(140, 10, 10);
    pub const BROWN: Color = Color::rgb(120, 70, 50);
    pub const ORANGE: Color = Color::rgb(255, 140, 0);
    pub const YELLOW: Color = Color::rgb(255, 220, 0);
    pub const GREEN: Color = Color::rgb(80, 200, 120);
    pub const PURPLE: Color = Color::rgb(138, 43, 226);
}

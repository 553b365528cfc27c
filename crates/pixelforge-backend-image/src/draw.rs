//! Pixel-art drawing primitives.
//!
//! All shapes take inclusive integer bounds and write pixels directly
//! (no blending). Anything outside the image is clipped. Use
//! [`crate::compose::composite`] when layers need alpha blending.

use image::RgbaImage;

use crate::color::Color;
use crate::rng::DeterministicRng;

/// Create an image filled with a single color.
pub fn new_image(width: u32, height: u32, color: Color) -> RgbaImage {
    RgbaImage::from_pixel(width, height, color.to_pixel())
}

/// Create a fully transparent image.
pub fn transparent(width: u32, height: u32) -> RgbaImage {
    new_image(width, height, Color::TRANSPARENT)
}

/// Fill and outline settings for a shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paint {
    pub fill: Option<Color>,
    pub outline: Option<Color>,
    /// Outline thickness in pixels.
    pub width: u32,
}

impl Paint {
    /// Fill only.
    pub const fn fill(color: Color) -> Self {
        Self {
            fill: Some(color),
            outline: None,
            width: 1,
        }
    }

    /// Outline only.
    pub const fn stroke(color: Color) -> Self {
        Self {
            fill: None,
            outline: Some(color),
            width: 1,
        }
    }

    /// Fill with an outline on top.
    pub const fn filled(fill: Color, outline: Color) -> Self {
        Self {
            fill: Some(fill),
            outline: Some(outline),
            width: 1,
        }
    }

    /// Set the outline thickness.
    pub const fn width(self, width: u32) -> Self {
        Self { width, ..self }
    }
}

/// Drawing surface over an RGBA image.
pub struct Canvas<'a> {
    image: &'a mut RgbaImage,
}

impl<'a> Canvas<'a> {
    pub fn new(image: &'a mut RgbaImage) -> Self {
        Self { image }
    }

    pub fn width(&self) -> i32 {
        self.image.width() as i32
    }

    pub fn height(&self) -> i32 {
        self.image.height() as i32
    }

    /// Set one pixel, ignoring coordinates outside the image.
    #[inline]
    pub fn point(&mut self, x: i32, y: i32, color: Color) {
        if x >= 0 && y >= 0 && x < self.width() && y < self.height() {
            self.image.put_pixel(x as u32, y as u32, color.to_pixel());
        }
    }

    /// Axis-aligned rectangle with inclusive corners.
    pub fn rect(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, paint: Paint) {
        let (x0, x1) = (x0.min(x1), x0.max(x1));
        let (y0, y1) = (y0.min(y1), y0.max(y1));
        let w = paint.width.max(1) as i32;

        for y in y0..=y1 {
            for x in x0..=x1 {
                let on_border = x < x0 + w || x > x1 - w || y < y0 + w || y > y1 - w;
                match (paint.outline, paint.fill) {
                    (Some(outline), _) if on_border => self.point(x, y, outline),
                    (_, Some(fill)) => self.point(x, y, fill),
                    _ => {}
                }
            }
        }
    }

    /// Ellipse inscribed in the inclusive bounding box.
    pub fn ellipse(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, paint: Paint) {
        let (x0, x1) = (x0.min(x1), x0.max(x1));
        let (y0, y1) = (y0.min(y1), y0.max(y1));

        let cx = (x0 + x1 + 1) as f64 / 2.0;
        let cy = (y0 + y1 + 1) as f64 / 2.0;
        let rx = (x1 - x0 + 1) as f64 / 2.0;
        let ry = (y1 - y0 + 1) as f64 / 2.0;
        let w = paint.width.max(1) as f64;

        let inside = |px: f64, py: f64, rx: f64, ry: f64| -> bool {
            if rx <= 0.0 || ry <= 0.0 {
                return false;
            }
            let dx = (px - cx) / rx;
            let dy = (py - cy) / ry;
            dx * dx + dy * dy <= 1.0
        };

        for y in y0..=y1 {
            for x in x0..=x1 {
                let px = x as f64 + 0.5;
                let py = y as f64 + 0.5;
                if !inside(px, py, rx, ry) {
                    continue;
                }
                let in_core = inside(px, py, rx - w, ry - w);
                match (paint.outline, paint.fill) {
                    (Some(outline), _) if !in_core => self.point(x, y, outline),
                    (_, Some(fill)) => self.point(x, y, fill),
                    _ => {}
                }
            }
        }
    }

    /// Closed polygon. Filled with an even-odd scanline rule at pixel
    /// centers; edges are stroked with the outline (or fill) color.
    pub fn polygon(&mut self, points: &[(i32, i32)], paint: Paint) {
        if points.is_empty() {
            return;
        }

        if let Some(fill) = paint.fill {
            let min_y = points.iter().map(|p| p.1).min().unwrap_or(0);
            let max_y = points.iter().map(|p| p.1).max().unwrap_or(0);

            let mut crossings: Vec<f64> = Vec::with_capacity(points.len());
            for y in min_y..=max_y {
                let scan = y as f64 + 0.5;
                crossings.clear();

                for i in 0..points.len() {
                    let (xa, ya) = points[i];
                    let (xb, yb) = points[(i + 1) % points.len()];
                    let (xa, ya) = (xa as f64 + 0.5, ya as f64 + 0.5);
                    let (xb, yb) = (xb as f64 + 0.5, yb as f64 + 0.5);
                    if (ya <= scan && scan < yb) || (yb <= scan && scan < ya) {
                        crossings.push(xa + (scan - ya) * (xb - xa) / (yb - ya));
                    }
                }

                crossings.sort_by(|a, b| a.total_cmp(b));
                for pair in crossings.chunks_exact(2) {
                    let start = (pair[0] - 0.5).ceil() as i32;
                    let end = (pair[1] - 0.5).floor() as i32;
                    for x in start..=end {
                        self.point(x, y, fill);
                    }
                }
            }
        }

        if let Some(edge) = paint.outline.or(paint.fill) {
            for i in 0..points.len() {
                let (xa, ya) = points[i];
                let (xb, yb) = points[(i + 1) % points.len()];
                self.line(xa, ya, xb, yb, edge, 1);
            }
        }
    }

    /// Bresenham line, thickened with a square brush when `width > 1`.
    pub fn line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Color, width: u32) {
        let width = width.max(1) as i32;
        let lo = -((width - 1) / 2);
        let hi = width / 2;

        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;
        let (mut x, mut y) = (x0, y0);

        loop {
            for oy in lo..=hi {
                for ox in lo..=hi {
                    self.point(x + ox, y + oy, color);
                }
            }
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    /// Scatter `floor(w * h * density)` single pixels from a seeded RNG.
    pub fn noise(&mut self, color: Color, density: f64, seed: u32) {
        let (w, h) = (self.image.width(), self.image.height());
        if w == 0 || h == 0 {
            return;
        }
        let count = ((w * h) as f64 * density).floor() as u32;
        let mut rng = DeterministicRng::new(seed);
        for _ in 0..count {
            let x = rng.below(w) as i32;
            let y = rng.below(h) as i32;
            self.point(x, y, color);
        }
    }
}

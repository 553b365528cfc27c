//! Layer compositing and horizontal frame strips.

use image::RgbaImage;

use crate::color::Color;
use crate::draw::{new_image, transparent};

/// Alpha-composite `src` over `dst` with its top-left corner at `(x, y)`.
///
/// Offsets may be negative; pixels falling outside `dst` are dropped.
pub fn composite(dst: &mut RgbaImage, src: &RgbaImage, x: i32, y: i32) {
    for (sx, sy, pixel) in src.enumerate_pixels() {
        let dx = x + sx as i32;
        let dy = y + sy as i32;
        if dx < 0 || dy < 0 || dx >= dst.width() as i32 || dy >= dst.height() as i32 {
            continue;
        }
        let under = Color::from_pixel(dst.get_pixel(dx as u32, dy as u32));
        let out = Color::from_pixel(pixel).over(under);
        dst.put_pixel(dx as u32, dy as u32, out.to_pixel());
    }
}

/// Compose a horizontal strip of `frames` frames of `width`x`height`.
///
/// `draw_frame` receives the frame index and its phase `index / frames`
/// and must return a `width`x`height` image; frame `i` lands at
/// `x = i * width`.
pub fn make_strip<F>(frames: u32, width: u32, height: u32, mut draw_frame: F) -> RgbaImage
where
    F: FnMut(u32, f64) -> RgbaImage,
{
    let mut sheet = transparent(width * frames, height);
    for i in 0..frames {
        let frame = draw_frame(i, i as f64 / frames as f64);
        composite(&mut sheet, &frame, (i * width) as i32, 0);
    }
    sheet
}

/// Crop frame `index` back out of a horizontal strip.
pub fn strip_frame(sheet: &RgbaImage, index: u32, width: u32) -> RgbaImage {
    image::imageops::crop_imm(sheet, index * width, 0, width, sheet.height()).to_image()
}

/// Center `image` on a solid background of the given size, clipping
/// anything larger than the pad.
pub fn pad_center(image: &RgbaImage, width: u32, height: u32, background: Color) -> RgbaImage {
    let mut pad = new_image(width, height, background);
    let x = (width as i32 - image.width() as i32).div_euclid(2);
    let y = (height as i32 - image.height() as i32).div_euclid(2);
    composite(&mut pad, image, x, y);
    pad
}

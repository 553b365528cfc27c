//! Contact sheet of the static sprites.

use image::RgbaImage;

use crate::color::palette::WHITE;
use crate::color::Color;
use crate::compose::{composite, pad_center};
use crate::draw::new_image;
use crate::font::draw_text;

/// Thumbnails per row.
pub const PREVIEW_COLUMNS: u32 = 8;
/// Side of a thumbnail pad.
pub const THUMB_SIZE: u32 = 72;
/// Height of a section banner.
pub const BANNER_HEIGHT: u32 = 16;

const PAD_BACKGROUND: Color = Color::rgb(15, 18, 22);
const ROW_BACKGROUND: Color = Color::rgb(12, 14, 18);
const ATLAS_BACKGROUND: Color = Color::rgb(8, 10, 12);
const BANNER_BACKGROUND: Color = Color::rgba(0, 0, 0, 220);

/// A titled group of sprites.
pub struct PreviewSection<'a> {
    pub title: &'a str,
    pub sprites: Vec<&'a RgbaImage>,
}

/// Stack a banner and a thumbnail row per section.
///
/// Sprite `i` of a section is centered on its pad at `x = i * 72`. Sprites
/// larger than a pad are clipped, as are sprites past the last column.
pub fn build_preview(sections: &[PreviewSection<'_>]) -> RgbaImage {
    let width = PREVIEW_COLUMNS * THUMB_SIZE;
    let height = sections.len() as u32 * (BANNER_HEIGHT + THUMB_SIZE);
    let mut atlas = new_image(width, height, ATLAS_BACKGROUND);

    let mut y = 0;
    for section in sections {
        let mut banner = new_image(width, BANNER_HEIGHT, BANNER_BACKGROUND);
        draw_text(&mut banner, 4, 2, section.title, WHITE);
        composite(&mut atlas, &banner, 0, y);
        y += BANNER_HEIGHT as i32;

        let mut row = new_image(width, THUMB_SIZE, ROW_BACKGROUND);
        for (i, sprite) in section.sprites.iter().enumerate() {
            let thumb = pad_center(sprite, THUMB_SIZE, THUMB_SIZE, PAD_BACKGROUND);
            composite(&mut row, &thumb, (i as u32 * THUMB_SIZE) as i32, 0);
        }
        composite(&mut atlas, &row, 0, y);
        y += THUMB_SIZE as i32;
    }

    atlas
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::transparent;

    #[test]
    fn test_layout() {
        let small = new_image(32, 32, Color::rgb(200, 0, 0));
        let big = transparent(128, 128);
        let sections = [
            PreviewSection {
                title: "Items 32x32",
                sprites: vec![&small, &small],
            },
            PreviewSection {
                title: "Boss",
                sprites: vec![&big],
            },
        ];
        let atlas = build_preview(&sections);
        assert_eq!(atlas.dimensions(), (576, 2 * (16 + 72)));

        // Second thumbnail sits in the second pad
        let second = Color::from_pixel(atlas.get_pixel(72 + 36, 16 + 36));
        assert_eq!(second, Color::rgb(200, 0, 0));
        // Pad border around the small sprite
        assert_eq!(Color::from_pixel(atlas.get_pixel(72 + 2, 16 + 2)), PAD_BACKGROUND);
        // Third column is bare row background
        assert_eq!(Color::from_pixel(atlas.get_pixel(144 + 36, 16 + 36)), ROW_BACKGROUND);
    }

    #[test]
    fn test_banner_blends_over_atlas() {
        let atlas = build_preview(&[PreviewSection {
            title: "",
            sprites: vec![],
        }]);
        let banner = Color::from_pixel(atlas.get_pixel(300, 8));
        assert_eq!(banner, BANNER_BACKGROUND.over(ATLAS_BACKGROUND));
        assert_eq!(banner.a, 255);
    }
}

//! Built-in 5x7 bitmap font for labels on preview atlases.
//!
//! Letters render in upper case, except `x` which keeps a small glyph so
//! sizes like "64x64" stay readable. Unknown characters advance as blanks.

use image::RgbaImage;

use crate::color::Color;
use crate::draw::Canvas;

/// Glyph width in pixels.
pub const GLYPH_WIDTH: u32 = 5;
/// Glyph height in pixels.
pub const GLYPH_HEIGHT: u32 = 7;
/// Horizontal advance per character.
pub const ADVANCE: u32 = GLYPH_WIDTH + 1;

// One byte per row, bit 4 is the leftmost column.
type Glyph = [u8; 7];

const LETTERS: [Glyph; 26] = [
    [0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001], // A
    [0b11110, 0b10001, 0b10001, 0b11110, 0b10001, 0b10001, 0b11110], // B
    [0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110], // C
    [0b11110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b11110], // D
    [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111], // E
    [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000], // F
    [0b01110, 0b10001, 0b10000, 0b10111, 0b10001, 0b10001, 0b01111], // G
    [0b10001, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001], // H
    [0b01110, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110], // I
    [0b00111, 0b00010, 0b00010, 0b00010, 0b00010, 0b10010, 0b01100], // J
    [0b10001, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010, 0b10001], // K
    [0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11111], // L
    [0b10001, 0b11011, 0b10101, 0b10101, 0b10001, 0b10001, 0b10001], // M
    [0b10001, 0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001], // N
    [0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110], // O
    [0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000], // P
    [0b01110, 0b10001, 0b10001, 0b10001, 0b10101, 0b10010, 0b01101], // Q
    [0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001], // R
    [0b01111, 0b10000, 0b10000, 0b01110, 0b00001, 0b00001, 0b11110], // S
    [0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100], // T
    [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110], // U
    [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100], // V
    [0b10001, 0b10001, 0b10001, 0b10101, 0b10101, 0b10101, 0b01010], // W
    [0b10001, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001, 0b10001], // X
    [0b10001, 0b10001, 0b01010, 0b00100, 0b00100, 0b00100, 0b00100], // Y
    [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b11111], // Z
];

const DIGITS: [Glyph; 10] = [
    [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110], // 0
    [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110], // 1
    [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111], // 2
    [0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110], // 3
    [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010], // 4
    [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110], // 5
    [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110], // 6
    [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000], // 7
    [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110], // 8
    [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100], // 9
];

const SMALL_X: Glyph = [0b00000, 0b00000, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001];

fn glyph(c: char) -> Option<&'static Glyph> {
    match c {
        'x' => Some(&SMALL_X),
        'a'..='z' => LETTERS.get((c as u8 - b'a') as usize),
        'A'..='Z' => LETTERS.get((c as u8 - b'A') as usize),
        '0'..='9' => DIGITS.get((c as u8 - b'0') as usize),
        _ => None,
    }
}

/// Pixel width of `text` when drawn.
pub fn text_width(text: &str) -> u32 {
    let n = text.chars().count() as u32;
    if n == 0 {
        0
    } else {
        n * ADVANCE - 1
    }
}

/// Draw `text` with its top-left corner at `(x, y)`.
pub fn draw_text(image: &mut RgbaImage, x: i32, y: i32, text: &str, color: Color) {
    let mut canvas = Canvas::new(image);
    let mut pen = x;
    for c in text.chars() {
        if let Some(rows) = glyph(c) {
            for (row, bits) in rows.iter().enumerate() {
                for col in 0..GLYPH_WIDTH {
                    if bits & (1 << (GLYPH_WIDTH - 1 - col)) != 0 {
                        canvas.point(pen + col as i32, y + row as i32, color);
                    }
                }
            }
        }
        pen += ADVANCE as i32;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::palette::WHITE;
    use crate::draw::transparent;

    #[test]
    fn test_text_width() {
        assert_eq!(text_width(""), 0);
        assert_eq!(text_width("A"), 5);
        assert_eq!(text_width("Boss 128x128"), 12 * 6 - 1);
    }

    #[test]
    fn test_draw_letter_t() {
        let mut img = transparent(6, 8);
        draw_text(&mut img, 0, 0, "T", WHITE);
        for x in 0..5 {
            assert_eq!(Color::from_pixel(img.get_pixel(x, 0)), WHITE);
        }
        assert_eq!(Color::from_pixel(img.get_pixel(2, 6)), WHITE);
        assert_eq!(Color::from_pixel(img.get_pixel(0, 6)), Color::TRANSPARENT);
    }

    #[test]
    fn test_case_insensitive_except_x() {
        let mut lower = transparent(6, 8);
        let mut upper = transparent(6, 8);
        draw_text(&mut lower, 0, 0, "p", WHITE);
        draw_text(&mut upper, 0, 0, "P", WHITE);
        assert_eq!(lower, upper);

        let mut small = transparent(6, 8);
        let mut big = transparent(6, 8);
        draw_text(&mut small, 0, 0, "x", WHITE);
        draw_text(&mut big, 0, 0, "X", WHITE);
        assert_ne!(small, big);
    }

    #[test]
    fn test_unknown_chars_are_blank() {
        let mut img = transparent(12, 8);
        draw_text(&mut img, 0, 0, "#?", WHITE);
        assert!(img.pixels().all(|p| p.0[3] == 0));
    }
}

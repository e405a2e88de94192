use image::{Rgba, RgbaImage};

use super::glyphs::{GLYPH_HEIGHT, GLYPH_WIDTH, is_set};

const BACKGROUND: Rgba<u8> = Rgba([240, 240, 240, 255]);
const INK: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// Square placeholder with `number` drawn in the middle.
pub fn render_placeholder(number: usize, side: u32) -> RgbaImage {
    let mut image = RgbaImage::from_pixel(side, side, BACKGROUND);
    let text = number.to_string();
    let digits = text.chars().count() as u32;

    let scale = (side / 32).max(1);
    let advance = (GLYPH_WIDTH + 1) * scale;
    let text_width = digits * advance - scale;
    let text_height = GLYPH_HEIGHT * scale;
    let left = side.saturating_sub(text_width) / 2;
    let top = side.saturating_sub(text_height) / 2;

    for (slot, digit) in text.chars().enumerate() {
        let origin = left + slot as u32 * advance;
        for gy in 0..GLYPH_HEIGHT {
            for gx in 0..GLYPH_WIDTH {
                if !is_set(digit, gx, gy) {
                    continue;
                }
                for dy in 0..scale {
                    for dx in 0..scale {
                        let x = origin + gx * scale + dx;
                        let y = top + gy * scale + dy;
                        if x < side && y < side {
                            image.put_pixel(x, y, INK);
                        }
                    }
                }
            }
        }
    }
    image
}

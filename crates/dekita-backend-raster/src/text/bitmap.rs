//! Built-in 5x7 bitmap font.
//!
//! Used when no TrueType face can be loaded. Covers printable ASCII plus a
//! check mark; every other character renders as an outlined box. Glyphs are
//! scaled by an integer factor chosen from the requested pixel size.

use crate::canvas::Canvas;
use crate::color::Color;

/// Glyph cell width in font units.
pub const GLYPH_WIDTH: u32 = 5;

/// Glyph cell height in font units.
pub const GLYPH_HEIGHT: u32 = 7;

/// Horizontal advance per glyph in font units (one unit of spacing).
pub const GLYPH_ADVANCE: u32 = GLYPH_WIDTH + 1;

/// Nominal em height in font units used to pick the scale.
const EM_UNITS: f32 = 9.0;

/// Integer pixel scale for a requested font size.
pub fn scale_for(size: f32) -> u32 {
    let scale = (size / EM_UNITS).round();
    if scale.is_finite() && scale >= 1.0 {
        scale as u32
    } else {
        1
    }
}

/// Rows of the glyph for `ch`, top to bottom; bit 4 is the leftmost column.
pub fn glyph_rows(ch: char) -> [u8; 7] {
    match ch {
        ' '..='~' => GLYPHS_5X7[ch as usize - 32],
        '\u{2713}' => CHECK_MARK,
        _ => MISSING,
    }
}

/// `(width, height)` of `text` at `size` in pixels.
pub fn measure(text: &str, size: f32) -> (u32, u32) {
    let scale = scale_for(size);
    let count = text.chars().count() as u32;
    let width = if count == 0 {
        0
    } else {
        count
            .saturating_mul(GLYPH_ADVANCE)
            .saturating_sub(1)
            .saturating_mul(scale)
    };
    (width, GLYPH_HEIGHT.saturating_mul(scale))
}

/// Draw `text` with its top-left corner at `(x, y)`.
pub fn draw(canvas: &mut Canvas, x: i64, y: i64, text: &str, size: f32, color: Color) {
    let scale = scale_for(size) as i64;
    let mut pen_x = x;
    for ch in text.chars() {
        for (row, bits) in glyph_rows(ch).iter().enumerate() {
            for col in 0..GLYPH_WIDTH {
                if bits & (0x10 >> col) == 0 {
                    continue;
                }
                let px = pen_x + col as i64 * scale;
                let py = y + row as i64 * scale;
                canvas.fill_span(px, py, px + scale, py + scale, color);
            }
        }
        pen_x += GLYPH_ADVANCE as i64 * scale;
    }
}

const CHECK_MARK: [u8; 7] = [0x00, 0x01, 0x02, 0x14, 0x08, 0x00, 0x00];

const MISSING: [u8; 7] = [0x1F, 0x11, 0x11, 0x11, 0x11, 0x11, 0x1F];

/// 5x7 patterns for ' ' (32) through '~' (126).
#[rustfmt::skip]
const GLYPHS_5X7: [[u8; 7]; 95] = [
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // ' '
    [0x04, 0x04, 0x04, 0x04, 0x00, 0x04, 0x00], // !
    [0x0A, 0x0A, 0x00, 0x00, 0x00, 0x00, 0x00], // "
    [0x0A, 0x1F, 0x0A, 0x1F, 0x0A, 0x00, 0x00], // #
    [0x04, 0x0E, 0x14, 0x0E, 0x05, 0x0E, 0x04], // $
    [0x19, 0x1A, 0x04, 0x0B, 0x13, 0x00, 0x00], // %
    [0x0C, 0x12, 0x0C, 0x12, 0x13, 0x0D, 0x00], // &
    [0x04, 0x04, 0x00, 0x00, 0x00, 0x00, 0x00], // '
    [0x04, 0x08, 0x08, 0x08, 0x08, 0x04, 0x00], // (
    [0x04, 0x02, 0x02, 0x02, 0x02, 0x04, 0x00], // )
    [0x00, 0x15, 0x0E, 0x15, 0x00, 0x00, 0x00], // *
    [0x00, 0x04, 0x04, 0x1F, 0x04, 0x04, 0x00], // +
    [0x00, 0x00, 0x00, 0x00, 0x04, 0x04, 0x08], // ,
    [0x00, 0x00, 0x00, 0x1F, 0x00, 0x00, 0x00], // -
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x04, 0x00], // .
    [0x01, 0x02, 0x04, 0x08, 0x10, 0x00, 0x00], // /
    [0x0E, 0x11, 0x13, 0x15, 0x19, 0x11, 0x0E], // 0
    [0x04, 0x0C, 0x04, 0x04, 0x04, 0x04, 0x0E], // 1
    [0x0E, 0x11, 0x01, 0x02, 0x04, 0x08, 0x1F], // 2
    [0x1F, 0x02, 0x04, 0x02, 0x01, 0x11, 0x0E], // 3
    [0x02, 0x06, 0x0A, 0x12, 0x1F, 0x02, 0x02], // 4
    [0x1F, 0x10, 0x1E, 0x01, 0x01, 0x11, 0x0E], // 5
    [0x06, 0x08, 0x10, 0x1E, 0x11, 0x11, 0x0E], // 6
    [0x1F, 0x01, 0x02, 0x04, 0x08, 0x08, 0x08], // 7
    [0x0E, 0x11, 0x11, 0x0E, 0x11, 0x11, 0x0E], // 8
    [0x0E, 0x11, 0x11, 0x0F, 0x01, 0x02, 0x0C], // 9
    [0x00, 0x04, 0x00, 0x00, 0x04, 0x00, 0x00], // :
    [0x00, 0x04, 0x00, 0x00, 0x04, 0x04, 0x08], // ;
    [0x02, 0x04, 0x08, 0x10, 0x08, 0x04, 0x02], // <
    [0x00, 0x00, 0x1F, 0x00, 0x1F, 0x00, 0x00], // =
    [0x08, 0x04, 0x02, 0x01, 0x02, 0x04, 0x08], // >
    [0x0E, 0x11, 0x01, 0x02, 0x04, 0x00, 0x04], // ?
    [0x0E, 0x11, 0x17, 0x15, 0x17, 0x10, 0x0E], // @
    [0x0E, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11], // A
    [0x1E, 0x11, 0x11, 0x1E, 0x11, 0x11, 0x1E], // B
    [0x0E, 0x11, 0x10, 0x10, 0x10, 0x11, 0x0E], // C
    [0x1E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x1E], // D
    [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x1F], // E
    [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x10], // F
    [0x0E, 0x11, 0x10, 0x17, 0x11, 0x11, 0x0F], // G
    [0x11, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11], // H
    [0x0E, 0x04, 0x04, 0x04, 0x04, 0x04, 0x0E], // I
    [0x07, 0x02, 0x02, 0x02, 0x02, 0x12, 0x0C], // J
    [0x11, 0x12, 0x14, 0x18, 0x14, 0x12, 0x11], // K
    [0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x1F], // L
    [0x11, 0x1B, 0x15, 0x11, 0x11, 0x11, 0x11], // M
    [0x11, 0x19, 0x15, 0x13, 0x11, 0x11, 0x11], // N
    [0x0E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E], // O
    [0x1E, 0x11, 0x11, 0x1E, 0x10, 0x10, 0x10], // P
    [0x0E, 0x11, 0x11, 0x11, 0x15, 0x12, 0x0D], // Q
    [0x1E, 0x11, 0x11, 0x1E, 0x14, 0x12, 0x11], // R
    [0x0F, 0x10, 0x10, 0x0E, 0x01, 0x01, 0x1E], // S
    [0x1F, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04], // T
    [0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E], // U
    [0x11, 0x11, 0x11, 0x11, 0x11, 0x0A, 0x04], // V
    [0x11, 0x11, 0x11, 0x15, 0x15, 0x1B, 0x11], // W
    [0x11, 0x11, 0x0A, 0x04, 0x0A, 0x11, 0x11], // X
    [0x11, 0x11, 0x0A, 0x04, 0x04, 0x04, 0x04], // Y
    [0x1F, 0x01, 0x02, 0x04, 0x08, 0x10, 0x1F], // Z
    [0x0E, 0x08, 0x08, 0x08, 0x08, 0x08, 0x0E], // [
    [0x10, 0x08, 0x04, 0x02, 0x01, 0x00, 0x00], // \
    [0x0E, 0x02, 0x02, 0x02, 0x02, 0x02, 0x0E], // ]
    [0x04, 0x0A, 0x11, 0x00, 0x00, 0x00, 0x00], // ^
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x1F], // _
    [0x08, 0x04, 0x00, 0x00, 0x00, 0x00, 0x00], // `
    [0x00, 0x00, 0x0E, 0x01, 0x0F, 0x11, 0x0F], // a
    [0x10, 0x10, 0x16, 0x19, 0x11, 0x11, 0x1E], // b
    [0x00, 0x00, 0x0E, 0x10, 0x10, 0x11, 0x0E], // c
    [0x01, 0x01, 0x0D, 0x13, 0x11, 0x11, 0x0F], // d
    [0x00, 0x00, 0x0E, 0x11, 0x1F, 0x10, 0x0E], // e
    [0x06, 0x09, 0x08, 0x1C, 0x08, 0x08, 0x08], // f
    [0x00, 0x0F, 0x11, 0x11, 0x0F, 0x01, 0x0E], // g
    [0x10, 0x10, 0x16, 0x19, 0x11, 0x11, 0x11], // h
    [0x04, 0x00, 0x0C, 0x04, 0x04, 0x04, 0x0E], // i
    [0x02, 0x00, 0x06, 0x02, 0x02, 0x12, 0x0C], // j
    [0x10, 0x10, 0x12, 0x14, 0x18, 0x14, 0x12], // k
    [0x0C, 0x04, 0x04, 0x04, 0x04, 0x04, 0x0E], // l
    [0x00, 0x00, 0x1A, 0x15, 0x15, 0x11, 0x11], // m
    [0x00, 0x00, 0x16, 0x19, 0x11, 0x11, 0x11], // n
    [0x00, 0x00, 0x0E, 0x11, 0x11, 0x11, 0x0E], // o
    [0x00, 0x00, 0x1E, 0x11, 0x1E, 0x10, 0x10], // p
    [0x00, 0x00, 0x0D, 0x13, 0x0F, 0x01, 0x01], // q
    [0x00, 0x00, 0x16, 0x19, 0x10, 0x10, 0x10], // r
    [0x00, 0x00, 0x0E, 0x10, 0x0E, 0x01, 0x1E], // s
    [0x08, 0x08, 0x1C, 0x08, 0x08, 0x09, 0x06], // t
    [0x00, 0x00, 0x11, 0x11, 0x11, 0x13, 0x0D], // u
    [0x00, 0x00, 0x11, 0x11, 0x11, 0x0A, 0x04], // v
    [0x00, 0x00, 0x11, 0x11, 0x15, 0x15, 0x0A], // w
    [0x00, 0x00, 0x11, 0x0A, 0x04, 0x0A, 0x11], // x
    [0x00, 0x00, 0x11, 0x11, 0x0F, 0x01, 0x0E], // y
    [0x00, 0x00, 0x1F, 0x02, 0x04, 0x08, 0x1F], // z
    [0x02, 0x04, 0x04, 0x08, 0x04, 0x04, 0x02], // {
    [0x04, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04], // |
    [0x08, 0x04, 0x04, 0x02, 0x04, 0x04, 0x08], // }
    [0x00, 0x00, 0x08, 0x15, 0x02, 0x00, 0x00], // ~
];

#[cfg(test)]
mod tests {
    use super::*;

    fn lit(canvas: &Canvas) -> usize {
        canvas
            .to_rgb8()
            .chunks_exact(3)
            .filter(|p| *p == [255, 255, 255])
            .count()
    }

    #[test]
    fn test_scale_for() {
        assert_eq!(scale_for(1.0), 1);
        assert_eq!(scale_for(18.0), 2);
        assert_eq!(scale_for(36.0), 4);
        assert_eq!(scale_for(80.0), 9);
        assert_eq!(scale_for(f32::NAN), 1);
    }

    #[test]
    fn test_measure() {
        assert_eq!(measure("", 9.0), (0, 7));
        assert_eq!(measure("A", 9.0), (5, 7));
        assert_eq!(measure("AB", 18.0), (22, 14));
    }

    #[test]
    fn test_measure_huge_size_saturates() {
        assert_eq!(scale_for(1e12), u32::MAX);
        assert_eq!(measure("10月", 1e12), (u32::MAX, u32::MAX));
    }

    #[test]
    fn test_unknown_characters_render_box() {
        assert_eq!(glyph_rows('月'), MISSING);
        assert_eq!(glyph_rows('\u{2713}'), CHECK_MARK);
        assert_eq!(glyph_rows('A')[3], 0x1F);
    }

    #[test]
    fn test_draw_scales_pixels() {
        let mut canvas = Canvas::new(20, 20, Color::black()).unwrap();
        draw(&mut canvas, 1, 1, "|", 18.0, Color::white());
        // 7 lit rows of one column, each a 2x2 block.
        assert_eq!(lit(&canvas), 7 * 4);
        assert_eq!(canvas.get_rgb8(5, 1), Some([255, 255, 255]));
        assert_eq!(canvas.get_rgb8(6, 14), Some([255, 255, 255]));
        assert_eq!(canvas.get_rgb8(7, 1), Some([0, 0, 0]));
    }

    #[test]
    fn test_draw_clips() {
        let mut canvas = Canvas::new(4, 4, Color::black()).unwrap();
        draw(&mut canvas, -3, -3, "MMM", 9.0, Color::white());
        assert!(lit(&canvas) > 0);
    }
}

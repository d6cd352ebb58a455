//! Vertical gradient fill.

use crate::canvas::Canvas;
use crate::color::Color;

/// A top-to-bottom gradient between two 8-bit colors.
///
/// Row `y` of an `h`-row canvas gets `start + (end - start) * y / h` per
/// channel, truncated toward zero. The bottom row therefore approaches but
/// does not reach `end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerticalGradient {
    start: [u8; 3],
    end: [u8; 3],
}

impl VerticalGradient {
    /// Create a gradient from the top color to the bottom color.
    pub fn new(start: [u8; 3], end: [u8; 3]) -> Self {
        Self { start, end }
    }

    /// Color of row `y` in a canvas of `height` rows.
    pub fn row_color(&self, y: u32, height: u32) -> [u8; 3] {
        let progress = y as f64 / height.max(1) as f64;
        let mut out = [0u8; 3];
        for (c, (&s, &e)) in out.iter_mut().zip(self.start.iter().zip(&self.end)) {
            *c = interpolate_channel(s, e, progress);
        }
        out
    }

    /// Paint the gradient over the whole canvas.
    ///
    /// Each row is painted as a two-row band starting at that row, so every
    /// row except the last is overwritten by its successor's band and ends up
    /// with its own color.
    pub fn paint(&self, canvas: &mut Canvas) {
        let height = canvas.height();
        for y in 0..height {
            let color = Color::from_rgb8(self.row_color(y, height));
            canvas.fill_horizontal_band(y as i64, 2, color);
        }
    }
}

/// Interpolate one channel and truncate toward zero.
pub fn interpolate_channel(start: u8, end: u8, progress: f64) -> u8 {
    let value = start as f64 + (end as f64 - start as f64) * progress;
    value.clamp(0.0, 255.0) as u8
}

/// Fill `canvas` with a vertical gradient from `start` to `end`.
pub fn gradient(canvas: &mut Canvas, start: [u8; 3], end: [u8; 3]) {
    VerticalGradient::new(start, end).paint(canvas);
}

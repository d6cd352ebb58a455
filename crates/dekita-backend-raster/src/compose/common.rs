//! Drawing helpers shared by the composers.

use crate::canvas::Canvas;
use crate::color::Color;
use crate::geometry::Bounds;
use crate::shapes::{draw_circle, draw_line, draw_rectangle, draw_rounded_rectangle, ShapeStyle};
use crate::text::{draw_text, measure_ink_width, Font};

/// A header band across the top of a card.
///
/// With a corner radius, the band is a rounded rectangle whose lower part,
/// from `square_from` down, is repainted square so only the top corners stay
/// rounded.
pub(super) struct HeaderBand {
    pub bounds: Bounds,
    pub corner_radius: f64,
    pub square_from: f64,
    pub color: Color,
}

impl HeaderBand {
    pub fn draw(&self, canvas: &mut Canvas) {
        let style = ShapeStyle::filled(self.color);
        if self.corner_radius <= 0.0 {
            draw_rectangle(canvas, self.bounds, &style);
            return;
        }
        draw_rounded_rectangle(canvas, self.bounds, self.corner_radius, &style);
        let lower = Bounds::new(self.bounds.x0, self.square_from, self.bounds.x1, self.bounds.y1);
        draw_rectangle(canvas, lower, &style);
    }
}

/// Left edge that centres `text_width` within `span` starting at `left`.
///
/// Uses floor division, so an odd remainder puts the extra pixel on the right.
pub(super) fn centered_x(left: i32, span: i32, text_width: u32) -> i32 {
    let x = left as i64 + (span as i64 - text_width as i64).div_euclid(2);
    x.clamp(i32::MIN as i64, i32::MAX as i64) as i32
}

/// Draw `text` horizontally centred in `[left, left + span]` with its top at `y`.
///
/// Centring uses the inked width, so side bearings do not shift the label.
pub(super) fn draw_centered_text(
    canvas: &mut Canvas,
    left: i32,
    span: i32,
    y: i32,
    text: &str,
    color: Color,
    font: &Font,
) {
    let width = measure_ink_width(text, font);
    draw_text(canvas, (centered_x(left, span, width), y), text, color, font);
}

/// A horizontal row of equally spaced circles.
pub(super) struct DotRow {
    pub first_center: (f64, f64),
    pub spacing: f64,
    pub radius: f64,
}

impl DotRow {
    /// Centre of the `i`-th dot.
    pub fn center(&self, i: usize) -> (f64, f64) {
        (
            self.first_center.0 + i as f64 * self.spacing,
            self.first_center.1,
        )
    }

    /// Draw one dot per style, left to right.
    pub fn draw<'a, I>(&self, canvas: &mut Canvas, styles: I)
    where
        I: IntoIterator<Item = &'a ShapeStyle>,
    {
        for (i, style) in styles.into_iter().enumerate() {
            draw_circle(canvas, self.center(i), self.radius, style);
        }
    }
}

/// Inner grid lines of a `rows x cols` table.
///
/// Lines run between cells only; the outer border is left to the caller.
pub(super) struct GridLines {
    pub left: i64,
    pub top: i64,
    pub right: i64,
    pub bottom: i64,
    pub cell_width: i64,
    pub cell_height: i64,
    pub rows: u32,
    pub cols: u32,
}

impl GridLines {
    pub fn draw(&self, canvas: &mut Canvas, color: Color, width: u32) {
        for i in 1..self.rows as i64 {
            let y = (self.top + i * self.cell_height) as f64;
            draw_line(canvas, (self.left as f64, y), (self.right as f64, y), color, width);
        }
        for i in 1..self.cols as i64 {
            let x = (self.left + i * self.cell_width) as f64;
            draw_line(canvas, (x, self.top as f64), (x, self.bottom as f64), color, width);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_x_floors() {
        assert_eq!(centered_x(50, 280, 40), 170);
        assert_eq!(centered_x(50, 280, 41), 169);
        assert_eq!(centered_x(0, 10, 13), -2);
        assert_eq!(centered_x(50, 280, u32::MAX), -2_147_483_458);
        assert_eq!(centered_x(i32::MAX, i32::MAX, 0), i32::MAX);
    }

    #[test]
    fn test_header_band_keeps_bottom_corners_square() {
        let mut canvas = Canvas::new(60, 40, Color::white()).unwrap();
        HeaderBand {
            bounds: Bounds::from_corners([0, 0, 59, 30]),
            corner_radius: 10.0,
            square_from: 20.0,
            color: Color::black(),
        }
        .draw(&mut canvas);
        assert_eq!(canvas.get_rgb8(0, 0), Some([255, 255, 255]));
        assert_eq!(canvas.get_rgb8(0, 30), Some([0, 0, 0]));
        assert_eq!(canvas.get_rgb8(59, 30), Some([0, 0, 0]));
        assert_eq!(canvas.get_rgb8(0, 31), Some([255, 255, 255]));
    }

    #[test]
    fn test_dot_row_centres() {
        let row = DotRow {
            first_center: (78.0, 177.0),
            spacing: 6.0,
            radius: 2.5,
        };
        assert_eq!(row.center(2), (90.0, 177.0));
    }

    #[test]
    fn test_grid_lines_skip_border() {
        let mut canvas = Canvas::new(31, 31, Color::white()).unwrap();
        GridLines {
            left: 0,
            top: 0,
            right: 30,
            bottom: 30,
            cell_width: 10,
            cell_height: 15,
            rows: 2,
            cols: 3,
        }
        .draw(&mut canvas, Color::black(), 1);
        assert_eq!(canvas.get_rgb8(5, 15), Some([0, 0, 0]));
        assert_eq!(canvas.get_rgb8(10, 3), Some([0, 0, 0]));
        assert_eq!(canvas.get_rgb8(20, 3), Some([0, 0, 0]));
        assert_eq!(canvas.get_rgb8(30, 3), Some([255, 255, 255]));
        assert_eq!(canvas.get_rgb8(5, 0), Some([255, 255, 255]));
    }
}

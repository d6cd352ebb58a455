//! Filled and outlined shape primitives.
//!
//! Shapes are rasterized without antialiasing: a pixel is painted when its
//! centre falls inside the shape. Outlines grow inward from the shape edge,
//! so an outline never paints outside the bounds. Everything clips at the
//! canvas edges.

use crate::canvas::Canvas;
use crate::color::Color;
use crate::geometry::Bounds;

/// Fill and outline of a shape.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ShapeStyle {
    pub fill: Option<Color>,
    pub outline: Option<Color>,
    pub outline_width: u32,
}

impl ShapeStyle {
    /// A filled shape without outline.
    pub fn filled(fill: Color) -> Self {
        Self {
            fill: Some(fill),
            outline: None,
            outline_width: 0,
        }
    }

    /// An outline-only shape.
    pub fn outlined(outline: Color, width: u32) -> Self {
        Self {
            fill: None,
            outline: Some(outline),
            outline_width: width,
        }
    }

    /// Add an outline.
    pub fn with_outline(mut self, outline: Color, width: u32) -> Self {
        self.outline = Some(outline);
        self.outline_width = width;
        self
    }

    fn outline_inset(&self) -> Option<(Color, f64)> {
        match self.outline {
            Some(color) if self.outline_width > 0 => Some((color, self.outline_width as f64)),
            _ => None,
        }
    }
}

/// Paint every pixel whose centre satisfies `inside(x, y, 0.0)`.
///
/// `inside(x, y, inset)` must answer for the shape shrunk by `inset`; pixels
/// inside the full shape but not the shrunk one take the outline color.
fn paint_region<F>(canvas: &mut Canvas, bounds: &Bounds, style: &ShapeStyle, inside: F)
where
    F: Fn(f64, f64, f64) -> bool,
{
    if !bounds.is_valid() || (style.fill.is_none() && style.outline_inset().is_none()) {
        return;
    }

    let (x_start, y_start, x_end, y_end) = bounds.pixel_span();
    let x_start = x_start.max(0);
    let y_start = y_start.max(0);
    let x_end = x_end.min(canvas.width() as i64);
    let y_end = y_end.min(canvas.height() as i64);

    let outline = style.outline_inset();
    for py in y_start..y_end {
        let cy = py as f64 + 0.5;
        for px in x_start..x_end {
            let cx = px as f64 + 0.5;
            if !inside(cx, cy, 0.0) {
                continue;
            }
            let color = match outline {
                Some((color, width)) if !inside(cx, cy, width) => Some(color),
                _ => style.fill,
            };
            if let Some(color) = color {
                canvas.blend(px, py, color, 1.0);
            }
        }
    }
}

/// Draw an axis-aligned rectangle.
pub fn draw_rectangle(canvas: &mut Canvas, bounds: Bounds, style: &ShapeStyle) {
    let (left, top, right, bottom) = bounds.area();
    paint_region(canvas, &bounds, style, |x, y, inset| {
        x >= left + inset && x < right - inset && y >= top + inset && y < bottom - inset
    });
}

/// Draw a rectangle with circular corners of `radius`.
///
/// The radius is clamped to half the shorter side.
pub fn draw_rounded_rectangle(canvas: &mut Canvas, bounds: Bounds, radius: f64, style: &ShapeStyle) {
    let (left, top, right, bottom) = bounds.area();
    let radius = radius.max(0.0).min((right - left).min(bottom - top) / 2.0);
    paint_region(canvas, &bounds, style, |x, y, inset| {
        inside_rounded(x, y, left + inset, top + inset, right - inset, bottom - inset, radius - inset)
    });
}

fn inside_rounded(x: f64, y: f64, left: f64, top: f64, right: f64, bottom: f64, radius: f64) -> bool {
    if !(x >= left && x < right && y >= top && y < bottom) {
        return false;
    }
    if radius <= 0.0 {
        return true;
    }
    // Nearest point on the inner rectangle whose corners are the arc centres.
    let qx = x.clamp(left + radius, right - radius);
    let qy = y.clamp(top + radius, bottom - radius);
    let (dx, dy) = (x - qx, y - qy);
    dx * dx + dy * dy <= radius * radius
}

/// Draw an ellipse inscribed in `bounds`.
pub fn draw_ellipse(canvas: &mut Canvas, bounds: Bounds, style: &ShapeStyle) {
    let (left, top, right, bottom) = bounds.area();
    let (cx, cy) = ((left + right) / 2.0, (top + bottom) / 2.0);
    let (rx, ry) = ((right - left) / 2.0, (bottom - top) / 2.0);
    paint_region(canvas, &bounds, style, |x, y, inset| {
        let (a, b) = (rx - inset, ry - inset);
        if a <= 0.0 || b <= 0.0 {
            return false;
        }
        let (nx, ny) = ((x - cx) / a, (y - cy) / b);
        nx * nx + ny * ny <= 1.0
    });
}

/// Draw a circle centred on pixel `center`.
pub fn draw_circle(canvas: &mut Canvas, center: (f64, f64), radius: f64, style: &ShapeStyle) {
    draw_ellipse(canvas, Bounds::circle(center.0, center.1, radius), style);
}

/// Draw a straight line between two pixels with flat ends.
///
/// A pixel is painted when its centre lies within `width / 2` of the segment
/// and projects onto it. A zero-length line paints a `width`-sized square.
pub fn draw_line(canvas: &mut Canvas, from: (f64, f64), to: (f64, f64), color: Color, width: u32) {
    if width == 0 {
        return;
    }
    let half = width as f64 / 2.0;
    let (ax, ay) = (from.0 + 0.5, from.1 + 0.5);
    let (bx, by) = (to.0 + 0.5, to.1 + 0.5);
    let (dx, dy) = (bx - ax, by - ay);
    let len_sq = dx * dx + dy * dy;

    let x_start = ((ax.min(bx) - half).floor() as i64).max(0);
    let y_start = ((ay.min(by) - half).floor() as i64).max(0);
    let x_end = ((ax.max(bx) + half).ceil() as i64).min(canvas.width() as i64);
    let y_end = ((ay.max(by) + half).ceil() as i64).min(canvas.height() as i64);

    for py in y_start..y_end {
        let cy = py as f64 + 0.5;
        for px in x_start..x_end {
            let cx = px as f64 + 0.5;
            let on_line = if len_sq == 0.0 {
                (cx - ax).abs() <= half && (cy - ay).abs() <= half
            } else {
                let t = ((cx - ax) * dx + (cy - ay) * dy) / len_sq;
                let cross = (cx - ax) * dy - (cy - ay) * dx;
                (0.0..=1.0).contains(&t) && cross * cross <= half * half * len_sq
            };
            if on_line {
                canvas.blend(px, py, color, 1.0);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Color = Color::rgb(1.0, 0.0, 0.0);
    const BLUE: Color = Color::rgb(0.0, 0.0, 1.0);

    fn count(canvas: &Canvas, rgb: [u8; 3]) -> usize {
        canvas.to_rgb8().chunks_exact(3).filter(|p| *p == rgb).count()
    }

    #[test]
    fn test_rectangle_fill_is_inclusive() {
        let mut canvas = Canvas::new(10, 10, Color::black()).unwrap();
        draw_rectangle(&mut canvas, Bounds::from_corners([2, 3, 5, 4]), &ShapeStyle::filled(RED));
        assert_eq!(count(&canvas, [255, 0, 0]), 4 * 2);
        assert_eq!(canvas.get_rgb8(5, 4), Some([255, 0, 0]));
        assert_eq!(canvas.get_rgb8(6, 4), Some([0, 0, 0]));
    }

    #[test]
    fn test_rectangle_outline_grows_inward() {
        let mut canvas = Canvas::new(12, 12, Color::black()).unwrap();
        let style = ShapeStyle::filled(RED).with_outline(BLUE, 2);
        draw_rectangle(&mut canvas, Bounds::from_corners([1, 1, 10, 10]), &style);
        assert_eq!(canvas.get_rgb8(1, 1), Some([0, 0, 255]));
        assert_eq!(canvas.get_rgb8(2, 5), Some([0, 0, 255]));
        assert_eq!(canvas.get_rgb8(3, 5), Some([255, 0, 0]));
        assert_eq!(canvas.get_rgb8(0, 5), Some([0, 0, 0]));
        assert_eq!(count(&canvas, [0, 0, 255]), 100 - 36);
    }

    #[test]
    fn test_rectangle_clips_at_edges() {
        let mut canvas = Canvas::new(4, 4, Color::black()).unwrap();
        draw_rectangle(&mut canvas, Bounds::from_corners([-10, -10, 1, 100]), &ShapeStyle::filled(RED));
        assert_eq!(count(&canvas, [255, 0, 0]), 8);
    }

    #[test]
    fn test_inverted_bounds_draw_nothing() {
        let mut canvas = Canvas::new(4, 4, Color::black()).unwrap();
        draw_rectangle(&mut canvas, Bounds::from_corners([3, 0, 1, 3]), &ShapeStyle::filled(RED));
        assert_eq!(count(&canvas, [255, 0, 0]), 0);
    }

    #[test]
    fn test_rounded_rectangle_cuts_corners() {
        let mut canvas = Canvas::new(40, 40, Color::black()).unwrap();
        draw_rounded_rectangle(
            &mut canvas,
            Bounds::from_corners([0, 0, 39, 39]),
            10.0,
            &ShapeStyle::filled(RED),
        );
        assert_eq!(canvas.get_rgb8(0, 0), Some([0, 0, 0]));
        assert_eq!(canvas.get_rgb8(39, 39), Some([0, 0, 0]));
        assert_eq!(canvas.get_rgb8(20, 0), Some([255, 0, 0]));
        assert_eq!(canvas.get_rgb8(0, 20), Some([255, 0, 0]));
        assert_eq!(canvas.get_rgb8(20, 20), Some([255, 0, 0]));
    }

    #[test]
    fn test_rounded_rectangle_zero_radius_is_rectangle() {
        let bounds = Bounds::from_corners([1, 1, 6, 4]);
        let style = ShapeStyle::filled(RED).with_outline(BLUE, 1);
        let mut a = Canvas::new(8, 8, Color::black()).unwrap();
        let mut b = Canvas::new(8, 8, Color::black()).unwrap();
        draw_rectangle(&mut a, bounds, &style);
        draw_rounded_rectangle(&mut b, bounds, 0.0, &style);
        assert_eq!(a, b);
    }

    #[test]
    fn test_circle_is_symmetric_around_centre_pixel() {
        let mut canvas = Canvas::new(21, 21, Color::black()).unwrap();
        draw_circle(&mut canvas, (10.0, 10.0), 5.0, &ShapeStyle::filled(RED));
        for (dx, dy) in [(5, 0), (-5, 0), (0, 5), (0, -5)] {
            assert_eq!(canvas.get_rgb8(10 + dx, 10 + dy), Some([255, 0, 0]));
        }
        for (dx, dy) in [(6, 0), (-6, 0), (0, 6), (0, -6), (5, 5)] {
            assert_eq!(canvas.get_rgb8(10 + dx, 10 + dy), Some([0, 0, 0]));
        }
    }

    #[test]
    fn test_ellipse_outline_ring() {
        let mut canvas = Canvas::new(30, 30, Color::black()).unwrap();
        let style = ShapeStyle::filled(RED).with_outline(BLUE, 3);
        draw_circle(&mut canvas, (15.0, 15.0), 10.0, &style);
        assert_eq!(canvas.get_rgb8(15, 15), Some([255, 0, 0]));
        assert_eq!(canvas.get_rgb8(25, 15), Some([0, 0, 255]));
        assert_eq!(canvas.get_rgb8(5, 15), Some([0, 0, 255]));
        assert_eq!(canvas.get_rgb8(15, 23), Some([0, 0, 255]));
        assert_eq!(canvas.get_rgb8(15, 22), Some([255, 0, 0]));
    }

    #[test]
    fn test_outline_only_leaves_interior() {
        let mut canvas = Canvas::new(10, 10, Color::black()).unwrap();
        draw_rectangle(&mut canvas, Bounds::from_corners([0, 0, 9, 9]), &ShapeStyle::outlined(BLUE, 1));
        assert_eq!(canvas.get_rgb8(5, 5), Some([0, 0, 0]));
        assert_eq!(count(&canvas, [0, 0, 255]), 36);
    }

    #[test]
    fn test_horizontal_line_width() {
        let mut canvas = Canvas::new(20, 20, Color::black()).unwrap();
        draw_line(&mut canvas, (2.0, 10.0), (17.0, 10.0), RED, 3);
        assert_eq!(count(&canvas, [255, 0, 0]), 16 * 3);
        assert_eq!(canvas.get_rgb8(2, 9), Some([255, 0, 0]));
        assert_eq!(canvas.get_rgb8(17, 11), Some([255, 0, 0]));
        assert_eq!(canvas.get_rgb8(1, 10), Some([0, 0, 0]));
        assert_eq!(canvas.get_rgb8(10, 12), Some([0, 0, 0]));
    }

    #[test]
    fn test_vertical_line_clips() {
        let mut canvas = Canvas::new(5, 5, Color::black()).unwrap();
        draw_line(&mut canvas, (2.0, -10.0), (2.0, 10.0), RED, 1);
        assert_eq!(count(&canvas, [255, 0, 0]), 5);
    }

    #[test]
    fn test_zero_length_line() {
        let mut canvas = Canvas::new(5, 5, Color::black()).unwrap();
        draw_line(&mut canvas, (2.0, 2.0), (2.0, 2.0), RED, 1);
        assert_eq!(count(&canvas, [255, 0, 0]), 1);
    }
}

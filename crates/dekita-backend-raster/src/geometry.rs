//! Shape bounds.
//!
//! Bounds follow the inclusive pixel convention: `[x0, y0, x1, y1]` covers
//! pixel columns `x0..=x1` and rows `y0..=y1`. In continuous space that is
//! the area `[x0, x1 + 1) x [y0, y1 + 1)`, with pixel `(px, py)` sampled at
//! its centre `(px + 0.5, py + 0.5)`.

/// Inclusive rectangle `[x0, y0, x1, y1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

impl Bounds {
    /// Create bounds from corner coordinates.
    pub const fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Create bounds from integer corners.
    pub fn from_corners(corners: [i32; 4]) -> Self {
        let [x0, y0, x1, y1] = corners.map(f64::from);
        Self { x0, y0, x1, y1 }
    }

    /// Square bounds of a circle centred on pixel `(cx, cy)`.
    pub fn circle(cx: f64, cy: f64, radius: f64) -> Self {
        Self::new(cx - radius, cy - radius, cx + radius, cy + radius)
    }

    /// Whether `x1 >= x0` and `y1 >= y0`.
    pub fn is_valid(&self) -> bool {
        self.x1 >= self.x0 && self.y1 >= self.y0
    }

    /// Span in x, `x1 - x0`.
    pub fn width(&self) -> f64 {
        self.x1 - self.x0
    }

    /// Span in y, `y1 - y0`.
    pub fn height(&self) -> f64 {
        self.y1 - self.y0
    }

    /// Whether pixel `(x, y)` is covered.
    pub fn contains(&self, x: i64, y: i64) -> bool {
        let (x, y) = (x as f64, y as f64);
        x >= self.x0 && x <= self.x1 && y >= self.y0 && y <= self.y1
    }

    /// Whether `self` lies completely inside `outer`.
    pub fn within(&self, outer: &Bounds) -> bool {
        self.x0 >= outer.x0 && self.y0 >= outer.y0 && self.x1 <= outer.x1 && self.y1 <= outer.y1
    }

    /// Shrink every side by `amount`.
    pub fn inset(&self, amount: f64) -> Self {
        Self::new(
            self.x0 + amount,
            self.y0 + amount,
            self.x1 - amount,
            self.y1 - amount,
        )
    }

    /// Continuous-space edges `(left, top, right, bottom)`.
    pub(crate) fn area(&self) -> (f64, f64, f64, f64) {
        (self.x0, self.y0, self.x1 + 1.0, self.y1 + 1.0)
    }

    /// Half-open pixel ranges `(x_start, y_start, x_end, y_end)` whose
    /// centres fall inside the area.
    pub(crate) fn pixel_span(&self) -> (i64, i64, i64, i64) {
        let (left, top, right, bottom) = self.area();
        (
            first_pixel(left),
            first_pixel(top),
            first_pixel(right),
            first_pixel(bottom),
        )
    }
}

/// First pixel whose centre is at or past `edge`.
pub(crate) fn first_pixel(edge: f64) -> i64 {
    (edge - 0.5).ceil() as i64
}

impl From<[i32; 4]> for Bounds {
    fn from(corners: [i32; 4]) -> Self {
        Self::from_corners(corners)
    }
}

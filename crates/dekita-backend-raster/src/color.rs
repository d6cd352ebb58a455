//! Color utilities for raster drawing.

use dekita_spec::HexColor;

/// RGBA color with f64 components (0.0 to 1.0 range).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Color {
    /// Create a new color with alpha = 1.0.
    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create a new color with alpha.
    pub const fn rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Create black.
    pub const fn black() -> Self {
        Self::rgb(0.0, 0.0, 0.0)
    }

    /// Create white.
    pub const fn white() -> Self {
        Self::rgb(1.0, 1.0, 1.0)
    }

    /// Linearly interpolate between two colors.
    pub fn lerp(&self, other: &Color, t: f64) -> Color {
        let t = t.clamp(0.0, 1.0);
        Color {
            r: self.r + (other.r - self.r) * t,
            g: self.g + (other.g - self.g) * t,
            b: self.b + (other.b - self.b) * t,
            a: self.a + (other.a - self.a) * t,
        }
    }

    /// Clamp all components to [0.0, 1.0].
    pub fn clamp(&self) -> Color {
        Color {
            r: self.r.clamp(0.0, 1.0),
            g: self.g.clamp(0.0, 1.0),
            b: self.b.clamp(0.0, 1.0),
            a: self.a.clamp(0.0, 1.0),
        }
    }

    /// Composite this color over `dst` with an extra coverage factor.
    ///
    /// The result keeps the destination's alpha channel raised by the
    /// source contribution (source-over).
    pub fn over(&self, dst: &Color, coverage: f64) -> Color {
        let alpha = (self.a * coverage).clamp(0.0, 1.0);
        let mut out = dst.lerp(self, alpha);
        out.a = alpha + dst.a * (1.0 - alpha);
        out
    }

    /// Convert to 8-bit RGBA.
    pub fn to_rgba8(&self) -> [u8; 4] {
        let c = self.clamp();
        [
            (c.r * 255.0).round() as u8,
            (c.g * 255.0).round() as u8,
            (c.b * 255.0).round() as u8,
            (c.a * 255.0).round() as u8,
        ]
    }

    /// Convert to 8-bit RGB.
    pub fn to_rgb8(&self) -> [u8; 3] {
        let [r, g, b, _] = self.to_rgba8();
        [r, g, b]
    }

    /// Create from 8-bit RGBA.
    pub fn from_rgba8(rgba: [u8; 4]) -> Self {
        Self {
            r: rgba[0] as f64 / 255.0,
            g: rgba[1] as f64 / 255.0,
            b: rgba[2] as f64 / 255.0,
            a: rgba[3] as f64 / 255.0,
        }
    }

    /// Create from 8-bit RGB.
    pub fn from_rgb8(rgb: [u8; 3]) -> Self {
        Self::from_rgba8([rgb[0], rgb[1], rgb[2], 255])
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::black()
    }
}

impl From<HexColor> for Color {
    fn from(hex: HexColor) -> Self {
        Self::from_rgb8(hex.channels())
    }
}

impl From<&HexColor> for Color {
    fn from(hex: &HexColor) -> Self {
        Self::from(*hex)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp() {
        let black = Color::black();
        let white = Color::white();

        let mid = black.lerp(&white, 0.5);
        assert!((mid.r - 0.5).abs() < 1e-10);
        assert!((mid.g - 0.5).abs() < 1e-10);
        assert!((mid.b - 0.5).abs() < 1e-10);
    }

    #[test]
    fn test_rgb8_is_exact_for_8bit_inputs() {
        for v in 0..=255u8 {
            assert_eq!(Color::from_rgb8([v, 255 - v, v / 2]).to_rgb8(), [v, 255 - v, v / 2]);
        }
    }

    #[test]
    fn test_from_hex() {
        let c = Color::from(HexColor::from_u32(0xFF5252));
        assert_eq!(c.to_rgba8(), [255, 82, 82, 255]);
    }

    #[test]
    fn test_over_opaque_replaces() {
        let dst = Color::white();
        let src = Color::rgb(0.2, 0.4, 0.6);
        assert_eq!(src.over(&dst, 1.0).to_rgba8(), src.to_rgba8());
    }

    #[test]
    fn test_over_zero_coverage_keeps_destination() {
        let dst = Color::rgb(0.1, 0.2, 0.3);
        let out = Color::white().over(&dst, 0.0);
        assert_eq!(out.to_rgba8(), dst.to_rgba8());
    }

    #[test]
    fn test_over_half_coverage_mixes() {
        let out = Color::white().over(&Color::black(), 0.5);
        assert_eq!(out.to_rgb8(), [128, 128, 128]);
        assert_eq!(out.to_rgba8()[3], 255);
    }
}

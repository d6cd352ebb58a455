//! RGBA8 pixel canvas.
//!
//! Coordinates are signed so that shapes may extend past any edge; writes
//! outside the canvas are dropped.

use thiserror::Error;

use crate::color::Color;

/// Largest pixel count a canvas will allocate (256 Mpx, 1 GiB of RGBA8).
pub const MAX_CANVAS_PIXELS: u64 = 1 << 28;

/// Errors from canvas construction.
#[derive(Debug, Error)]
pub enum CanvasError {
    /// The pixel buffer could not be obtained.
    #[error("cannot allocate {width}x{height} canvas: {reason}")]
    Allocation {
        width: u32,
        height: u32,
        reason: String,
    },

    /// Raw pixel data does not match the requested dimensions.
    #[error("pixel buffer has {actual} bytes, expected {expected}")]
    BufferSize { expected: usize, actual: usize },
}

/// A 2D RGBA8 raster image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: u32,
    height: u32,
    data: Vec<[u8; 4]>,
}

impl Canvas {
    /// Create a canvas filled with a color.
    pub fn new(width: u32, height: u32, fill: Color) -> Result<Self, CanvasError> {
        let alloc_error = |reason: &str| CanvasError::Allocation {
            width,
            height,
            reason: reason.to_string(),
        };

        if width == 0 || height == 0 {
            return Err(alloc_error("dimensions must be positive"));
        }
        let pixels = width as u64 * height as u64;
        if pixels > MAX_CANVAS_PIXELS {
            return Err(alloc_error("pixel count exceeds limit"));
        }

        let len = pixels as usize;
        let mut data = Vec::new();
        data.try_reserve_exact(len)
            .map_err(|e| alloc_error(&e.to_string()))?;
        data.resize(len, fill.to_rgba8());

        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Create an opaque canvas from packed RGB8 bytes.
    pub fn from_rgb8(width: u32, height: u32, rgb: &[u8]) -> Result<Self, CanvasError> {
        let mut canvas = Self::new(width, height, Color::black())?;
        let expected = canvas.data.len() * 3;
        if rgb.len() != expected {
            return Err(CanvasError::BufferSize {
                expected,
                actual: rgb.len(),
            });
        }
        for (pixel, chunk) in canvas.data.iter_mut().zip(rgb.chunks_exact(3)) {
            *pixel = [chunk[0], chunk[1], chunk[2], 255];
        }
        Ok(canvas)
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// `(width, height)` in pixels.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    #[inline]
    fn index(&self, x: i64, y: i64) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    /// Whether `(x, y)` lies on the canvas.
    pub fn contains(&self, x: i64, y: i64) -> bool {
        self.index(x, y).is_some()
    }

    /// RGBA8 value at `(x, y)`, or `None` off-canvas.
    #[inline]
    pub fn get_rgba8(&self, x: i64, y: i64) -> Option<[u8; 4]> {
        self.index(x, y).map(|i| self.data[i])
    }

    /// RGB8 value at `(x, y)`, or `None` off-canvas.
    #[inline]
    pub fn get_rgb8(&self, x: i64, y: i64) -> Option<[u8; 3]> {
        self.get_rgba8(x, y).map(|[r, g, b, _]| [r, g, b])
    }

    /// Color at `(x, y)`, or `None` off-canvas.
    pub fn get(&self, x: i64, y: i64) -> Option<Color> {
        self.get_rgba8(x, y).map(Color::from_rgba8)
    }

    /// Overwrite the pixel at `(x, y)`. Off-canvas writes are dropped.
    #[inline]
    pub fn set(&mut self, x: i64, y: i64, color: Color) {
        if let Some(i) = self.index(x, y) {
            self.data[i] = color.to_rgba8();
        }
    }

    /// Composite `color` over the pixel at `(x, y)` with the given coverage.
    #[inline]
    pub fn blend(&mut self, x: i64, y: i64, color: Color, coverage: f64) {
        let Some(i) = self.index(x, y) else {
            return;
        };
        if coverage >= 1.0 && color.a >= 1.0 {
            self.data[i] = color.to_rgba8();
        } else if coverage > 0.0 {
            let dst = Color::from_rgba8(self.data[i]);
            self.data[i] = color.over(&dst, coverage).to_rgba8();
        }
    }

    /// Fill the half-open pixel span `[x0, x1) x [y0, y1)`, clipped to the canvas.
    pub fn fill_span(&mut self, x0: i64, y0: i64, x1: i64, y1: i64, color: Color) {
        let x0 = x0.clamp(0, self.width as i64);
        let x1 = x1.clamp(0, self.width as i64);
        let y0 = y0.clamp(0, self.height as i64);
        let y1 = y1.clamp(0, self.height as i64);
        if x0 >= x1 || y0 >= y1 {
            return;
        }
        let opaque = color.a >= 1.0;
        let rgba = color.to_rgba8();
        for y in y0..y1 {
            let row = y as usize * self.width as usize;
            for x in x0..x1 {
                let i = row + x as usize;
                if opaque {
                    self.data[i] = rgba;
                } else {
                    let dst = Color::from_rgba8(self.data[i]);
                    self.data[i] = color.over(&dst, 1.0).to_rgba8();
                }
            }
        }
    }

    /// Paint full-width rows `y ..= y + band_height - 1` with one color.
    ///
    /// Rows outside the canvas are skipped; `band_height == 0` draws nothing.
    pub fn fill_horizontal_band(&mut self, y: i64, band_height: u32, color: Color) {
        self.fill_span(
            0,
            y,
            self.width as i64,
            y + band_height as i64,
            color,
        );
    }

    /// Convert to 8-bit RGBA bytes.
    pub fn to_rgba8(&self) -> Vec<u8> {
        self.data.iter().flatten().copied().collect()
    }

    /// Convert to 8-bit RGB bytes, dropping alpha.
    pub fn to_rgb8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.data.len() * 3);
        for [r, g, b, _] in &self.data {
            bytes.extend_from_slice(&[*r, *g, *b]);
        }
        bytes
    }
}

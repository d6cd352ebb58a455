//! Dekita Raster Backend
//!
//! This crate draws the Dekita Calendar store assets. It provides a small
//! software rasterizer (canvas, shapes, gradient, text) and two composers
//! built on it: the 1024x500 feature graphic and the 1024x1024 app icon.
//!
//! # Features
//!
//! - **Canvas**: RGBA8 pixel buffer; all drawing clips silently at the edges
//! - **Shapes**: rectangles, rounded rectangles, ellipses, thick lines
//! - **Gradient**: per-scanline vertical interpolation with 8-bit truncation
//! - **Text**: TrueType via `rusttype`, with a built-in bitmap font fallback
//!   and offset-pass emphasis for simulated bold
//! - **Deterministic PNG**: fixed encoder settings and BLAKE3 hashes
//!
//! # Example
//!
//! ```no_run
//! use dekita_backend_raster::compose::generate_icon;
//! use dekita_spec::IconParams;
//! use std::path::Path;
//!
//! let result = generate_icon(&IconParams::default(), Path::new("assets/icon.png")).unwrap();
//! assert_eq!((result.width, result.height), (1024, 1024));
//! ```

pub mod canvas;
pub mod color;
pub mod compose;
pub mod geometry;
pub mod gradient;
pub mod png;
pub mod shapes;
pub mod text;

// Re-export main types for convenience
pub use canvas::{Canvas, CanvasError};
pub use color::Color;
pub use compose::{
    compose_feature_graphic, compose_icon, generate_feature_graphic, generate_icon, AssetResult,
    ComposeError,
};
pub use geometry::Bounds;
pub use gradient::VerticalGradient;
pub use crate::png::{PngConfig, PngError};
pub use shapes::ShapeStyle;
pub use text::{
    draw_emphasized_text, draw_text, load_font, measure_ink_width, measure_text, try_load_font, Font,
    FontFace, FontLoadError, TextTarget,
};

//! Text measurement and rendering.
//!
//! Text is drawn with its top-left corner at the given position: the top of
//! the line box (the font ascent) sits on `y`. TrueType faces are rendered
//! with `rusttype` and composited with coverage; the built-in bitmap face is
//! used when no font file is configured or the configured one cannot be read.

pub mod bitmap;

use std::fmt;
use std::path::{Path, PathBuf};

use dekita_spec::FontSource;
use rusttype::{point, Scale};
use thiserror::Error;

use crate::canvas::Canvas;
use crate::color::Color;

/// Errors from loading a font face.
#[derive(Debug, Error)]
pub enum FontLoadError {
    /// The font file could not be read.
    #[error("failed to read font '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file was read but is not a usable TrueType/OpenType font.
    #[error("'{path}' is not a usable TrueType/OpenType font")]
    Parse { path: PathBuf },
}

/// A loaded font face, independent of size.
#[derive(Clone)]
pub enum FontFace {
    /// Scalable TrueType/OpenType outlines.
    Outline(rusttype::Font<'static>),
    /// The built-in 5x7 bitmap font.
    Bitmap,
}

impl fmt::Debug for FontFace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FontFace::Outline(face) => f
                .debug_struct("Outline")
                .field("glyphs", &face.glyph_count())
                .finish(),
            FontFace::Bitmap => f.write_str("Bitmap"),
        }
    }
}

impl FontFace {
    /// Load the face named by `source`.
    pub fn load(source: &FontSource) -> Result<Self, FontLoadError> {
        match source {
            FontSource::File { path } => Self::from_file(path),
            FontSource::SystemDefault => Ok(FontFace::Bitmap),
        }
    }

    /// Load the face named by `source`, falling back to the bitmap face.
    pub fn load_or_fallback(source: &FontSource) -> Self {
        match Self::load(source) {
            Ok(face) => face,
            Err(e) => {
                log::warn!("{}; falling back to the built-in bitmap font", e);
                FontFace::Bitmap
            }
        }
    }

    /// Read and parse a font file.
    pub fn from_file(path: &Path) -> Result<Self, FontLoadError> {
        let bytes = std::fs::read(path).map_err(|source| FontLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let face = rusttype::Font::try_from_vec(bytes).ok_or_else(|| FontLoadError::Parse {
            path: path.to_path_buf(),
        })?;
        log::debug!("loaded font '{}' ({} glyphs)", path.display(), face.glyph_count());
        Ok(FontFace::Outline(face))
    }

    /// Whether this is the built-in bitmap face.
    pub fn is_bitmap(&self) -> bool {
        matches!(self, FontFace::Bitmap)
    }

    /// This face at a pixel size.
    pub fn at_size(&self, size: f32) -> Font {
        Font {
            face: self.clone(),
            size,
        }
    }
}

/// A font face at a fixed pixel size.
#[derive(Debug, Clone)]
pub struct Font {
    face: FontFace,
    size: f32,
}

impl Font {
    /// The built-in bitmap font at `size`.
    pub fn bitmap(size: f32) -> Self {
        FontFace::Bitmap.at_size(size)
    }

    /// Pixel size.
    pub fn size(&self) -> f32 {
        self.size
    }

    /// The underlying face.
    pub fn face(&self) -> &FontFace {
        &self.face
    }

    /// Whether this font is the built-in fallback.
    pub fn is_fallback(&self) -> bool {
        self.face.is_bitmap()
    }
}

/// Load the font named by `source` at `size`, or the built-in font.
///
/// A configured file that is missing or unreadable is logged as a warning
/// and replaced by the bitmap font; this never fails.
pub fn load_font(source: &FontSource, size: f32) -> Font {
    FontFace::load_or_fallback(source).at_size(size)
}

/// Load the font named by `source` at `size` without falling back.
pub fn try_load_font(source: &FontSource, size: f32) -> Result<Font, FontLoadError> {
    Ok(FontFace::load(source)?.at_size(size))
}

/// `(width, height)` of the line box of `text` in pixels.
///
/// Width is the advance width of the whole string; height is the font's
/// ascent-to-descent extent.
pub fn measure_text(text: &str, font: &Font) -> (u32, u32) {
    match &font.face {
        FontFace::Bitmap => bitmap::measure(text, font.size),
        FontFace::Outline(face) => {
            let scale = Scale::uniform(font.size);
            let metrics = face.v_metrics(scale);
            let width = face
                .layout(text, scale, point(0.0, 0.0))
                .last()
                .map(|g| g.position().x + g.unpositioned().h_metrics().advance_width)
                .unwrap_or(0.0);
            let height = metrics.ascent - metrics.descent;
            (width.max(0.0).ceil() as u32, height.max(0.0).ceil() as u32)
        }
    }
}

/// Horizontal extent of the inked pixels of `text`.
///
/// For outline faces this is the union of the glyph pixel boxes, which drops
/// side bearings and trailing advance. The bitmap face has no bearings, so it
/// reports the same width as [`measure_text`].
pub fn measure_ink_width(text: &str, font: &Font) -> u32 {
    match &font.face {
        FontFace::Bitmap => bitmap::measure(text, font.size).0,
        FontFace::Outline(face) => {
            let scale = Scale::uniform(font.size);
            let extent = face
                .layout(text, scale, point(0.0, 0.0))
                .filter_map(|g| g.pixel_bounding_box())
                .fold(None, |acc: Option<(i32, i32)>, bb| match acc {
                    Some((min, max)) => Some((min.min(bb.min.x), max.max(bb.max.x))),
                    None => Some((bb.min.x, bb.max.x)),
                });
            extent.map_or(0, |(min, max)| (max - min).max(0) as u32)
        }
    }
}

/// Draw `text` with its top-left corner at `position`.
pub fn draw_text(canvas: &mut Canvas, position: (i32, i32), text: &str, color: Color, font: &Font) {
    let (x, y) = position;
    match &font.face {
        FontFace::Bitmap => bitmap::draw(canvas, x as i64, y as i64, text, font.size, color),
        FontFace::Outline(face) => {
            let scale = Scale::uniform(font.size);
            let ascent = face.v_metrics(scale).ascent;
            for glyph in face.layout(text, scale, point(x as f32, y as f32 + ascent)) {
                let Some(bb) = glyph.pixel_bounding_box() else {
                    continue;
                };
                glyph.draw(|gx, gy, coverage| {
                    canvas.blend(
                        bb.min.x as i64 + gx as i64,
                        bb.min.y as i64 + gy as i64,
                        color,
                        coverage as f64,
                    );
                });
            }
        }
    }
}

/// Anything text can be drawn onto.
pub trait TextTarget {
    /// Draw `text` with its top-left corner at `position`.
    fn draw_text(&mut self, position: (i32, i32), text: &str, color: Color, font: &Font);
}

impl TextTarget for Canvas {
    fn draw_text(&mut self, position: (i32, i32), text: &str, color: Color, font: &Font) {
        draw_text(self, position, text, color, font);
    }
}

/// Offsets of the emphasis passes for `radius`, excluding the centre.
///
/// Iterates `dx` in the outer loop and `dy` in the inner loop, both over
/// `-radius..=radius`. Yields `(2r + 1)^2 - 1` offsets.
pub fn emphasis_offsets(radius: u32) -> impl Iterator<Item = (i32, i32)> {
    let r = radius as i32;
    (-r..=r)
        .flat_map(move |dx| (-r..=r).map(move |dy| (dx, dy)))
        .filter(|&offset| offset != (0, 0))
}

/// Simulate bold by drawing `text` at every offset within `radius`, then
/// once more at the exact position.
pub fn draw_emphasized_text<T: TextTarget + ?Sized>(
    target: &mut T,
    position: (i32, i32),
    text: &str,
    color: Color,
    font: &Font,
    radius: u32,
) {
    let (x, y) = position;
    for (dx, dy) in emphasis_offsets(radius) {
        target.draw_text((x.saturating_add(dx), y.saturating_add(dy)), text, color, font);
    }
    target.draw_text(position, text, color, font);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[derive(Default)]
    struct Recorder {
        calls: Vec<(i32, i32)>,
    }

    impl TextTarget for Recorder {
        fn draw_text(&mut self, position: (i32, i32), _: &str, _: Color, _: &Font) {
            self.calls.push(position);
        }
    }

    #[test]
    fn test_emphasis_draw_counts() {
        let font = Font::bitmap(12.0);
        for (radius, expected) in [(0, 1), (1, 9), (2, 25)] {
            let mut recorder = Recorder::default();
            draw_emphasized_text(&mut recorder, (10, 20), "x", Color::white(), &font, radius);
            assert_eq!(recorder.calls.len(), expected);
            assert_eq!(recorder.calls.last(), Some(&(10, 20)));
        }
    }

    #[test]
    fn test_emphasis_offset_order() {
        let offsets: Vec<_> = emphasis_offsets(1).collect();
        assert_eq!(
            offsets,
            vec![(-1, -1), (-1, 0), (-1, 1), (0, -1), (0, 1), (1, -1), (1, 0), (1, 1)]
        );
    }

    #[test]
    fn test_system_default_is_bitmap() {
        let font = try_load_font(&FontSource::SystemDefault, 24.0).unwrap();
        assert!(font.is_fallback());
        assert_eq!(font.size(), 24.0);
    }

    #[test]
    fn test_missing_font_file() {
        let source = FontSource::file("/nonexistent/dir/font.ttf");
        assert!(matches!(
            try_load_font(&source, 24.0),
            Err(FontLoadError::Io { .. })
        ));
        assert!(load_font(&source, 24.0).is_fallback());
    }

    #[test]
    fn test_garbage_font_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"definitely not a font").unwrap();
        let source = FontSource::file(file.path());
        let err = try_load_font(&source, 24.0).unwrap_err();
        assert!(matches!(err, FontLoadError::Parse { .. }));
        assert!(err.to_string().contains("not a usable"));
        assert!(load_font(&source, 24.0).is_fallback());
    }

    #[test]
    fn test_measure_and_draw_bitmap() {
        let font = Font::bitmap(9.0);
        assert_eq!(measure_text("Oct", &font), (17, 7));

        let mut canvas = Canvas::new(30, 10, Color::black()).unwrap();
        draw_text(&mut canvas, (0, 0), "Oct", Color::white(), &font);
        assert_eq!(canvas.get_rgb8(1, 0), Some([255, 255, 255]));
        assert_eq!(canvas.get_rgb8(0, 9), Some([0, 0, 0]));
    }

    #[test]
    fn test_bitmap_extremes_do_not_overflow() {
        let font = Font::bitmap(1e12);
        assert_eq!(measure_text("10月", &font), (u32::MAX, u32::MAX));

        let mut canvas = Canvas::new(8, 8, Color::black()).unwrap();
        // the top-left block of 'M' covers the whole canvas
        draw_text(&mut canvas, (0, 0), "M", Color::white(), &font);
        let small = Font::bitmap(9.0);
        draw_emphasized_text(&mut canvas, (i32::MAX, i32::MIN), "M", Color::black(), &small, 1);
        assert_eq!(canvas.get_rgb8(7, 7), Some([255, 255, 255]));
    }

    #[test]
    fn test_emphasis_thickens_strokes() {
        let font = Font::bitmap(9.0);
        let mut plain = Canvas::new(20, 20, Color::black()).unwrap();
        let mut bold = plain.clone();
        draw_text(&mut plain, (5, 5), "I", Color::white(), &font);
        draw_emphasized_text(&mut bold, (5, 5), "I", Color::white(), &font, 1);
        let lit = |c: &Canvas| c.to_rgb8().iter().filter(|&&b| b == 255).count();
        assert!(lit(&bold) > lit(&plain));
    }
}

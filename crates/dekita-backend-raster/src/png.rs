//! Deterministic PNG writer.
//!
//! Uses fixed compression settings so the same canvas always encodes to
//! byte-identical PNG data. No timestamps or text chunks are written.

use std::io::{BufRead, Seek, Write};
use std::path::Path;

use png::{BitDepth, ColorType, Compression, Encoder, FilterType, Transformations};
use thiserror::Error;

use crate::canvas::{Canvas, CanvasError};

/// Errors from PNG operations.
#[derive(Debug, Error)]
pub enum PngError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PNG encoding error: {0}")]
    Encoding(#[from] png::EncodingError),

    #[error("PNG decoding error: {0}")]
    Decoding(#[from] png::DecodingError),

    #[error("Invalid dimensions: {0}")]
    InvalidDimensions(String),
}

impl From<CanvasError> for PngError {
    fn from(e: CanvasError) -> Self {
        PngError::InvalidDimensions(e.to_string())
    }
}

/// PNG export configuration for deterministic output.
#[derive(Debug, Clone)]
pub struct PngConfig {
    /// Compression level. Use a fixed value for determinism.
    pub compression: Compression,
    /// Filter type. Use a fixed value for determinism.
    pub filter: FilterType,
}

impl Default for PngConfig {
    fn default() -> Self {
        Self {
            compression: Compression::Default,
            filter: FilterType::NoFilter,
        }
    }
}


/// Write a canvas as an 8-bit RGB PNG to any writer.
pub fn write_rgb_to_writer<W: Write>(
    canvas: &Canvas,
    writer: W,
    config: &PngConfig,
) -> Result<(), PngError> {
    let (width, height) = canvas.dimensions();
    let mut encoder = Encoder::new(writer, width, height);
    encoder.set_color(ColorType::Rgb);
    encoder.set_depth(BitDepth::Eight);
    encoder.set_compression(config.compression);
    encoder.set_filter(config.filter);

    let mut png_writer = encoder.write_header()?;

    let data = canvas.to_rgb8();
    png_writer.write_image_data(&data)?;

    Ok(())
}

/// Compute the BLAKE3 hash of PNG data.
pub fn hash_png(data: &[u8]) -> String {
    blake3::hash(data).to_hex().to_string()
}

/// Write RGB to a Vec<u8> and return the hash.
pub fn write_rgb_to_vec_with_hash(
    canvas: &Canvas,
    config: &PngConfig,
) -> Result<(Vec<u8>, String), PngError> {
    let mut data = Vec::new();
    write_rgb_to_writer(canvas, &mut data, config)?;
    let hash = hash_png(&data);
    Ok((data, hash))
}

/// Encode `canvas` and write it to `path`, creating parent directories.
///
/// Returns the encoded bytes and their hash. Existing files are replaced.
pub fn save(canvas: &Canvas, path: &Path) -> Result<(Vec<u8>, String), PngError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let (data, hash) = write_rgb_to_vec_with_hash(canvas, &PngConfig::default())?;
    std::fs::write(path, &data)?;
    log::info!(
        "wrote {} ({}x{}, {} bytes)",
        path.display(),
        canvas.width(),
        canvas.height(),
        data.len()
    );
    Ok((data, hash))
}

/// Decode a PNG from any reader into an opaque canvas.
///
/// Palette, grayscale and 16-bit images are expanded to 8-bit RGB; alpha is
/// dropped.
pub fn decode_rgb<R: BufRead + Seek>(reader: R) -> Result<Canvas, PngError> {
    let mut decoder = png::Decoder::new(reader);
    decoder.set_transformations(Transformations::EXPAND | Transformations::STRIP_16);
    let mut reader = decoder.read_info()?;
    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf)?;
    let bytes = &buf[..info.buffer_size()];

    let rgb: Vec<u8> = match info.color_type {
        ColorType::Rgb => bytes.to_vec(),
        ColorType::Rgba => bytes
            .chunks_exact(4)
            .flat_map(|p| [p[0], p[1], p[2]])
            .collect(),
        ColorType::Grayscale => bytes.iter().flat_map(|&v| [v, v, v]).collect(),
        ColorType::GrayscaleAlpha => bytes
            .chunks_exact(2)
            .flat_map(|p| [p[0], p[0], p[0]])
            .collect(),
        ColorType::Indexed => {
            return Err(PngError::InvalidDimensions(
                "indexed color was not expanded".into(),
            ))
        }
    };

    Ok(Canvas::from_rgb8(info.width, info.height, &rgb)?)
}

/// Read a PNG file into an opaque canvas.
pub fn read_rgb(path: &Path) -> Result<Canvas, PngError> {
    let file = std::fs::File::open(path)?;
    decode_rgb(std::io::BufReader::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;

    fn ramp() -> Canvas {
        let mut canvas = Canvas::new(64, 64, Color::black()).unwrap();
        for y in 0..64 {
            for x in 0..64 {
                let r = x as f64 / 63.0;
                let g = y as f64 / 63.0;
                canvas.set(x, y, Color::rgb(r, g, 0.5));
            }
        }
        canvas
    }

    #[test]
    fn test_rgb_deterministic() {
        let canvas = ramp();
        let config = PngConfig::default();

        let (data1, hash1) = write_rgb_to_vec_with_hash(&canvas, &config).unwrap();
        let (data2, hash2) = write_rgb_to_vec_with_hash(&canvas, &config).unwrap();

        assert_eq!(data1, data2, "PNG data should be identical");
        assert_eq!(hash1, hash2, "PNG hashes should be identical");
        assert_eq!(hash1.len(), 64);
    }

    #[test]
    fn test_decode_restores_pixels() {
        let canvas = ramp();
        let (data, _) = write_rgb_to_vec_with_hash(&canvas, &PngConfig::default()).unwrap();
        let decoded = decode_rgb(std::io::Cursor::new(data)).unwrap();
        assert_eq!(decoded, canvas);
    }

    #[test]
    fn test_save_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("deeper").join("out.png");
        let (data, hash) = save(&ramp(), &path).unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), data);
        assert_eq!(hash_png(&data), hash);
        assert_eq!(read_rgb(&path).unwrap().dimensions(), (64, 64));
    }

    #[test]
    fn test_save_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.png");
        std::fs::write(&path, b"stale").unwrap();
        save(&ramp(), &path).unwrap();
        assert!(read_rgb(&path).is_ok());
    }

    #[test]
    fn test_decode_garbage_fails() {
        let result = decode_rgb(std::io::Cursor::new(b"not a png".to_vec()));
        assert!(matches!(result, Err(PngError::Decoding(_))));
    }
}

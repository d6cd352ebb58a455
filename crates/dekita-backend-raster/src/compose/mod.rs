//! Store asset composers.
//!
//! `compose_*` functions draw an asset into a fresh canvas without touching
//! the filesystem (except for loading the configured font). `generate_*`
//! functions compose, encode and write the PNG.

mod common;
mod feature_graphic;
mod icon;


use std::path::{Path, PathBuf};

use dekita_spec::{BackendError, ValidationResult};
use thiserror::Error;

use crate::canvas::{Canvas, CanvasError};
use crate::png::{self, PngError};

pub use feature_graphic::{compose_feature_graphic, generate_feature_graphic};
pub use icon::{compose_icon, generate_icon};

/// Errors from asset composition.
#[derive(Debug, Error)]
pub enum ComposeError {
    #[error("canvas error: {0}")]
    Canvas(#[from] CanvasError),

    #[error("PNG error: {0}")]
    Png(#[from] PngError),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

impl BackendError for ComposeError {
    fn code(&self) -> &'static str {
        match self {
            ComposeError::Canvas(_) => "RASTER_001",
            ComposeError::Png(_) => "RASTER_002",
            ComposeError::InvalidParameter(_) => "RASTER_003",
        }
    }

    fn category(&self) -> &'static str {
        "raster"
    }
}

/// Result of generating one asset.
#[derive(Debug)]
pub struct AssetResult {
    /// PNG-encoded image data, as written to `path`.
    pub png_data: Vec<u8>,
    /// BLAKE3 hash of the PNG data.
    pub hash: String,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Where the PNG was written.
    pub path: PathBuf,
}

/// Turn validation errors into `InvalidParameter` and log warnings.
fn ensure_valid(asset: &str, result: ValidationResult) -> Result<(), ComposeError> {
    for warning in &result.warnings {
        log::warn!("{}: {}", asset, warning);
    }
    if result.is_ok() {
        return Ok(());
    }
    let messages: Vec<String> = result.errors.iter().map(|e| e.to_string()).collect();
    Err(ComposeError::InvalidParameter(messages.join("; ")))
}

/// Encode and write a composed canvas.
fn write_asset(canvas: &Canvas, out_path: &Path) -> Result<AssetResult, ComposeError> {
    let (png_data, hash) = png::save(canvas, out_path)?;
    Ok(AssetResult {
        png_data,
        hash,
        width: canvas.width(),
        height: canvas.height(),
        path: out_path.to_path_buf(),
    })
}

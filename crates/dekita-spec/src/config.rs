//! Top-level config document.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::SpecError;
use crate::font::FontSource;
use crate::params::{FeatureGraphicParams, IconParams};

/// Config for a full asset run.
///
/// Every section is optional in JSON; missing sections take the defaults of
/// the shipped artwork.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
pub struct AssetConfig {
    /// Directory that replaces the directory part of every output path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub out_dir: Option<PathBuf>,

    pub feature_graphic: FeatureGraphicParams,

    pub icon: IconParams,
}

impl AssetConfig {
    /// Parses a config from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, SpecError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a config file.
    pub fn from_file(path: &Path) -> Result<Self, SpecError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Serializes to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, SpecError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Sets the feature graphic font.
    pub fn with_font(mut self, font: FontSource) -> Self {
        self.feature_graphic.font = font;
        self
    }

    /// Sets the output directory.
    pub fn with_out_dir(mut self, out_dir: impl Into<PathBuf>) -> Self {
        self.out_dir = Some(out_dir.into());
        self
    }

    /// Resolved feature graphic output path.
    pub fn feature_graphic_output(&self) -> PathBuf {
        self.resolve_output(&self.feature_graphic.output)
    }

    /// Resolved icon output path.
    pub fn icon_output(&self) -> PathBuf {
        self.resolve_output(&self.icon.output)
    }

    fn resolve_output(&self, output: &Path) -> PathBuf {
        match (&self.out_dir, output.file_name()) {
            (Some(dir), Some(name)) => dir.join(name),
            _ => output.to_path_buf(),
        }
    }
}

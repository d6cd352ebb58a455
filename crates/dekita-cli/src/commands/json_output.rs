//! JSON output types for machine-readable CLI output.
//!
//! These types back the `--json` flag on the generation and `validate`
//! commands.

use dekita_backend_raster::AssetResult;
use dekita_spec::{ValidationError, ValidationWarning};
use serde::{Deserialize, Serialize};

/// Error codes for CLI operations.
///
/// Format: CLI_XXX for CLI-level errors; validation codes (E001...) and
/// backend codes (RASTER_XXX) pass through unchanged.
pub mod error_codes {
    /// Config file could not be read or parsed
    pub const CONFIG_LOAD: &str = "CLI_001";
}

/// A structured error in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonError {
    /// Stable error code (e.g., "CLI_001", "E001", "RASTER_002")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Config path to the problematic field (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl JsonError {
    /// Creates a new error with code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            path: None,
        }
    }

    /// Sets the config path for this error.
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }
}

impl From<&ValidationError> for JsonError {
    fn from(error: &ValidationError) -> Self {
        Self {
            code: error.code.code().to_string(),
            message: error.message.clone(),
            path: error.path.clone(),
        }
    }
}

/// A structured warning in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonWarning {
    /// Stable warning code (e.g., "W001")
    pub code: String,
    /// Human-readable warning message
    pub message: String,
    /// Config path to the problematic field (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl From<&ValidationWarning> for JsonWarning {
    fn from(warning: &ValidationWarning) -> Self {
        Self {
            code: warning.code.code().to_string(),
            message: warning.message.clone(),
            path: warning.path.clone(),
        }
    }
}

/// One written PNG.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GeneratedFile {
    /// Asset kind ("feature_graphic" or "icon")
    pub asset: String,
    /// Output path as written
    pub path: String,
    pub width: u32,
    pub height: u32,
    /// BLAKE3 hash of the PNG bytes
    pub hash: String,
    pub size_bytes: usize,
}

impl GeneratedFile {
    pub fn from_result(asset: &str, result: &AssetResult) -> Self {
        Self {
            asset: asset.to_string(),
            path: result.path.display().to_string(),
            width: result.width,
            height: result.height,
            hash: result.hash.clone(),
            size_bytes: result.png_data.len(),
        }
    }
}

/// JSON output for the generation commands.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateOutput {
    /// Whether every asset was written
    pub success: bool,
    pub errors: Vec<JsonError>,
    pub warnings: Vec<JsonWarning>,
    /// Files written before any failure
    pub files: Vec<GeneratedFile>,
}

/// JSON output for the `validate` command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidateOutput {
    /// Whether validation succeeded (no errors)
    pub success: bool,
    pub errors: Vec<JsonError>,
    pub warnings: Vec<JsonWarning>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use dekita_spec::{ErrorCode, WarningCode};

    #[test]
    fn test_json_error_serialization() {
        let error = JsonError::new("CLI_001", "cannot read").with_path("icon.size");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"CLI_001\""));
        assert!(json.contains("\"path\":\"icon.size\""));

        let bare = serde_json::to_string(&JsonError::new("CLI_002", "x")).unwrap();
        assert!(!bare.contains("path"));
    }

    #[test]
    fn test_validation_conversions() {
        let error = ValidationError::with_path(ErrorCode::ZeroDimension, "zero", "icon.size");
        let json = JsonError::from(&error);
        assert_eq!(json.code, "E001");
        assert_eq!(json.path.as_deref(), Some("icon.size"));

        let warning = ValidationWarning::with_path(WarningCode::MarkerOutsideGrid, "past", "icon.markers.cells[4]");
        assert_eq!(JsonWarning::from(&warning).code, "W001");
    }
}

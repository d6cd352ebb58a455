//! Error types for parameter validation and processing.

use thiserror::Error;

/// Error codes for parameter validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// E001: Canvas width or height is zero
    ZeroDimension,
    /// E002: Calendar card extends outside the canvas
    CardOutOfBounds,
    /// E003: Output path does not end in `.png`
    OutputNotPng,
    /// E004: Font size is not positive or exceeds the maximum
    InvalidFontSize,
    /// E005: Icon margin leaves no room for the calendar
    MarginTooLarge,
    /// E006: A text line is empty
    EmptyText,
}

impl ErrorCode {
    /// Returns the error code string (e.g., "E001").
    pub fn code(&self) -> &'static str {
        match self {
            ErrorCode::ZeroDimension => "E001",
            ErrorCode::CardOutOfBounds => "E002",
            ErrorCode::OutputNotPng => "E003",
            ErrorCode::InvalidFontSize => "E004",
            ErrorCode::MarginTooLarge => "E005",
            ErrorCode::EmptyText => "E006",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Warning codes for parameter validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WarningCode {
    /// W001: A date marker lies past the last grid row or column
    MarkerOutsideGrid,
}

impl WarningCode {
    /// Returns the warning code string (e.g., "W001").
    pub fn code(&self) -> &'static str {
        match self {
            WarningCode::MarkerOutsideGrid => "W001",
        }
    }
}

impl std::fmt::Display for WarningCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A validation error with code, message, and optional JSON path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The error code.
    pub code: ErrorCode,
    /// Human-readable error message.
    pub message: String,
    /// JSON path to the problematic field (e.g., "feature_graphic.width").
    pub path: Option<String>,
}

impl ValidationError {
    /// Creates a new validation error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            path: None,
        }
    }

    /// Creates a new validation error with a JSON path.
    pub fn with_path(code: ErrorCode, message: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            path: Some(path.into()),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(ref path) = self.path {
            write!(f, "{}: {} (at {})", self.code, self.message, path)
        } else {
            write!(f, "{}: {}", self.code, self.message)
        }
    }
}

impl std::error::Error for ValidationError {}

/// A validation warning with code, message, and optional JSON path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationWarning {
    /// The warning code.
    pub code: WarningCode,
    /// Human-readable warning message.
    pub message: String,
    /// JSON path to the problematic field.
    pub path: Option<String>,
}

impl ValidationWarning {
    /// Creates a new validation warning with a JSON path.
    pub fn with_path(
        code: WarningCode,
        message: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        Self {
            code,
            message: message.into(),
            path: Some(path.into()),
        }
    }
}

impl std::fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(ref path) = self.path {
            write!(f, "{}: {} (at {})", self.code, self.message, path)
        } else {
            write!(f, "{}: {}", self.code, self.message)
        }
    }
}

/// Top-level error type for config operations.
#[derive(Debug, Error)]
pub enum SpecError {
    /// JSON parsing error.
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result of parameter validation.
#[derive(Debug, Clone)]
pub struct ValidationResult {
    /// Whether validation passed (no errors).
    pub ok: bool,
    /// List of validation errors.
    pub errors: Vec<ValidationError>,
    /// List of validation warnings.
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    /// Creates a successful validation result.
    pub fn success() -> Self {
        Self {
            ok: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Adds an error to the result.
    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
        self.ok = false;
    }

    /// Adds a warning to the result.
    pub fn add_warning(&mut self, warning: ValidationWarning) {
        self.warnings.push(warning);
    }

    /// Folds another result into this one.
    pub fn merge(&mut self, other: ValidationResult) {
        self.ok &= other.ok;
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
    }

    /// Returns true if there are no errors.
    pub fn is_ok(&self) -> bool {
        self.ok
    }

    /// Converts to a Result, returning Err if there are errors.
    pub fn into_result(self) -> Result<Vec<ValidationWarning>, Vec<ValidationError>> {
        if self.ok {
            Ok(self.warnings)
        } else {
            Err(self.errors)
        }
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::success()
    }
}

/// Common trait for backend errors.
///
/// Gives every backend error a stable code and a category so the CLI can
/// report failures uniformly.
pub trait BackendError: std::error::Error {
    /// Stable error code, e.g. "RASTER_002".
    fn code(&self) -> &'static str;

    /// Human-readable message.
    fn message(&self) -> String {
        self.to_string()
    }

    /// Error category, e.g. "raster".
    fn category(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_with_path() {
        let err = ValidationError::with_path(ErrorCode::ZeroDimension, "width is 0", "icon.size");
        assert_eq!(err.to_string(), "E001: width is 0 (at icon.size)");
    }

    #[test]
    fn test_merge_propagates_failure() {
        let mut a = ValidationResult::success();
        let mut b = ValidationResult::success();
        b.add_error(ValidationError::new(ErrorCode::EmptyText, "empty"));
        a.merge(b);
        assert!(!a.is_ok());
        assert_eq!(a.errors.len(), 1);
        assert!(a.into_result().is_err());
    }
}

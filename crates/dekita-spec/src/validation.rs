//! Parameter validation.
//!
//! Validation never rejects layouts that merely draw past the canvas edge:
//! drawing clips. It only rejects parameters that cannot produce an image
//! (zero dimensions, zero font sizes) or that break the card-in-canvas
//! layout guarantee.

use std::path::Path;

use crate::config::AssetConfig;
use crate::error::{ErrorCode, ValidationError, ValidationResult, ValidationWarning, WarningCode};
use crate::params::{FeatureGraphicParams, IconParams};

/// Largest accepted font size in pixels.
pub const MAX_FONT_SIZE: f32 = 1024.0;

/// Validates a whole config, prefixing field paths with the section name.
pub fn validate_config(config: &AssetConfig) -> ValidationResult {
    let mut result = ValidationResult::default();
    result.merge(prefixed(
        validate_feature_graphic(&config.feature_graphic),
        "feature_graphic",
    ));
    result.merge(prefixed(validate_icon(&config.icon), "icon"));
    result
}

/// Validates feature graphic parameters.
pub fn validate_feature_graphic(params: &FeatureGraphicParams) -> ValidationResult {
    let mut result = ValidationResult::default();

    validate_dimension(params.width, "width", &mut result);
    validate_dimension(params.height, "height", &mut result);
    validate_output(&params.output, &mut result);

    let [x0, y0, x1, y1] = params.calendar.bounds();
    if x0 < 0 || y0 < 0 || x1 as i64 >= params.width as i64 || y1 as i64 >= params.height as i64 {
        result.add_error(ValidationError::with_path(
            ErrorCode::CardOutOfBounds,
            format!(
                "calendar card [{}, {}, {}, {}] must lie inside the {}x{} canvas",
                x0, y0, x1, y1, params.width, params.height
            ),
            "calendar",
        ));
    }

    for (name, size) in [
        ("calendar.month_font_size", params.calendar.month_font_size),
        ("calendar.small_font_size", params.calendar.small_font_size),
    ] {
        validate_font_size(size, name, &mut result);
    }

    for (i, line) in params.lines.iter().enumerate() {
        validate_font_size(line.font_size, &format!("lines[{}].font_size", i), &mut result);
        if line.text.trim().is_empty() {
            result.add_error(ValidationError::with_path(
                ErrorCode::EmptyText,
                "text line must not be empty",
                format!("lines[{}].text", i),
            ));
        }
    }

    result
}

/// Validates icon parameters.
pub fn validate_icon(params: &IconParams) -> ValidationResult {
    let mut result = ValidationResult::default();

    validate_dimension(params.size, "size", &mut result);
    validate_output(&params.output, &mut result);

    if params.size > 0 && params.grid_start_y() >= params.calendar_far_edge() {
        result.add_error(ValidationError::with_path(
            ErrorCode::MarginTooLarge,
            format!(
                "margin {} and grid offset {} leave no room for the grid in a {}px icon",
                params.margin, params.grid.offset_y, params.size
            ),
            "margin",
        ));
    }

    for (i, [row, col]) in params.markers.cells.iter().enumerate() {
        if *row >= params.grid.rows || *col >= params.grid.cols {
            result.add_warning(ValidationWarning::with_path(
                WarningCode::MarkerOutsideGrid,
                format!(
                    "marker at row {}, col {} lies past the {}x{} grid",
                    row, col, params.grid.rows, params.grid.cols
                ),
                format!("markers.cells[{}]", i),
            ));
        }
    }

    result
}

fn validate_dimension(value: u32, path: &str, result: &mut ValidationResult) {
    if value == 0 {
        result.add_error(ValidationError::with_path(
            ErrorCode::ZeroDimension,
            "canvas dimension must be positive",
            path,
        ));
    }
}

fn validate_output(output: &Path, result: &mut ValidationResult) {
    let is_png = output
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("png"))
        .unwrap_or(false);
    if !is_png {
        result.add_error(ValidationError::with_path(
            ErrorCode::OutputNotPng,
            format!("output '{}' must have a .png extension", output.display()),
            "output",
        ));
    }
}

fn validate_font_size(size: f32, path: &str, result: &mut ValidationResult) {
    if !(size > 0.0 && size <= MAX_FONT_SIZE) {
        result.add_error(ValidationError::with_path(
            ErrorCode::InvalidFontSize,
            format!("font size must be in (0, {}], got {}", MAX_FONT_SIZE, size),
            path,
        ));
    }
}

fn prefixed(mut result: ValidationResult, prefix: &str) -> ValidationResult {
    for error in &mut result.errors {
        error.path = Some(match error.path.take() {
            Some(path) => format!("{}.{}", prefix, path),
            None => prefix.to_string(),
        });
    }
    for warning in &mut result.warnings {
        warning.path = Some(match warning.path.take() {
            Some(path) => format!("{}.{}", prefix, path),
            None => prefix.to_string(),
        });
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::TextLine;
    use pretty_assertions::assert_eq;

    fn codes(result: &ValidationResult) -> Vec<&'static str> {
        result.errors.iter().map(|e| e.code.code()).collect()
    }

    #[test]
    fn test_defaults_are_valid() {
        let result = validate_feature_graphic(&FeatureGraphicParams::default());
        assert!(result.is_ok(), "{:?}", result.errors);
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_default_icon_warns_about_marker_past_grid() {
        let result = validate_icon(&IconParams::default());
        assert!(result.is_ok());
        assert_eq!(result.warnings.len(), 1);
        assert_eq!(result.warnings[0].code, WarningCode::MarkerOutsideGrid);
        assert_eq!(result.warnings[0].path.as_deref(), Some("markers.cells[4]"));
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        let params = FeatureGraphicParams::default().with_dimensions(0, 500);
        let result = validate_feature_graphic(&params);
        assert!(codes(&result).contains(&"E001"));

        let icon = IconParams::default().with_size(0);
        assert!(codes(&validate_icon(&icon)).contains(&"E001"));
    }

    #[test]
    fn test_card_outside_canvas_rejected() {
        let params = FeatureGraphicParams::default().with_dimensions(300, 500);
        assert_eq!(codes(&validate_feature_graphic(&params)), vec!["E002"]);
    }

    #[test]
    fn test_non_png_output_rejected() {
        let params = FeatureGraphicParams::default().with_output("banner.jpg");
        assert_eq!(codes(&validate_feature_graphic(&params)), vec!["E003"]);

        let params = FeatureGraphicParams::default().with_output("banner.PNG");
        assert!(validate_feature_graphic(&params).is_ok());
    }

    #[test]
    fn test_bad_text_lines_rejected() {
        let mut params = FeatureGraphicParams::default();
        params.lines.push(TextLine::new("  ", 400, 0.0, 1));
        assert_eq!(codes(&validate_feature_graphic(&params)), vec!["E004", "E006"]);
    }

    #[test]
    fn test_font_size_upper_bound() {
        let mut params = FeatureGraphicParams::default();
        params.calendar.month_font_size = 1e12;
        params.calendar.small_font_size = f32::INFINITY;
        assert_eq!(codes(&validate_feature_graphic(&params)), vec!["E004", "E004"]);

        params.calendar.month_font_size = MAX_FONT_SIZE;
        params.calendar.small_font_size = 18.0;
        assert!(validate_feature_graphic(&params).is_ok());
    }

    #[test]
    fn test_card_offset_near_i32_max_is_out_of_bounds() {
        let mut params = FeatureGraphicParams::default();
        params.calendar.x = i32::MAX - 10;
        let result = validate_feature_graphic(&params);
        assert_eq!(codes(&result), vec!["E002"]);

        params.calendar.x = 50;
        params.calendar.height = i32::MAX;
        assert_eq!(codes(&validate_feature_graphic(&params)), vec!["E002"]);
    }

    #[test]
    fn test_huge_canvas_width_does_not_wrap() {
        let params = FeatureGraphicParams::default().with_dimensions(u32::MAX, 500);
        assert!(validate_feature_graphic(&params).is_ok());
    }

    #[test]
    fn test_margin_too_large_rejected() {
        let mut icon = IconParams::default();
        icon.margin = 400;
        assert!(codes(&validate_icon(&icon)).contains(&"E005"));
    }

    #[test]
    fn test_config_paths_are_prefixed() {
        let mut config = AssetConfig::default();
        config.icon.size = 0;
        let result = validate_config(&config);
        assert!(!result.is_ok());
        assert_eq!(result.errors[0].path.as_deref(), Some("icon.size"));
        assert_eq!(
            result.warnings[0].path.as_deref(),
            Some("icon.markers.cells[4]")
        );
    }
}

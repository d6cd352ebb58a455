//! Feature graphic command implementation

use std::process::ExitCode;

use anyhow::Result;
use dekita_spec::FontSource;

use super::generate::{run_jobs, AssetJob};
use crate::input::load_config;

/// Run the feature-graphic command
///
/// # Arguments
/// * `out` - Output PNG path, overriding the config
/// * `font` - Font file, overriding the config
/// * `config_path` - Optional JSON config file
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 on success, 1 on failure
pub fn run(
    out: Option<&str>,
    font: Option<&str>,
    config_path: Option<&str>,
    json_output: bool,
) -> Result<ExitCode> {
    let mut config = load_config(config_path)?;
    if let Some(font) = font {
        config = config.with_font(FontSource::file(font));
    }

    let job = match out {
        Some(out) => AssetJob::FeatureGraphic(config.feature_graphic.with_output(out)),
        None => AssetJob::feature_graphic(&config),
    };

    run_jobs(&[job], json_output)
}

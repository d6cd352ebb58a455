//! All command implementation
//!
//! Generates the feature graphic, then the icon. The first failure stops the run.

use std::process::ExitCode;

use anyhow::Result;
use dekita_spec::FontSource;

use super::generate::{run_jobs, AssetJob};
use crate::input::load_config;

/// Run the all command
///
/// # Arguments
/// * `out_dir` - Directory for both PNGs, overriding the config
/// * `font` - Feature graphic font file, overriding the config
/// * `config_path` - Optional JSON config file
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 if both assets were written, 1 otherwise
pub fn run(
    out_dir: Option<&str>,
    font: Option<&str>,
    config_path: Option<&str>,
    json_output: bool,
) -> Result<ExitCode> {
    let mut config = load_config(config_path)?;
    if let Some(dir) = out_dir {
        config = config.with_out_dir(dir);
    }
    if let Some(font) = font {
        config = config.with_font(FontSource::file(font));
    }

    let jobs = [AssetJob::feature_graphic(&config), AssetJob::icon(&config)];
    run_jobs(&jobs, json_output)
}

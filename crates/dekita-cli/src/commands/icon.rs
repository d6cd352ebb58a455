//! Icon command implementation

use std::process::ExitCode;

use anyhow::Result;

use super::generate::{run_jobs, AssetJob};
use crate::input::load_config;

/// Run the icon command
///
/// # Arguments
/// * `out` - Output PNG path, overriding the config
/// * `config_path` - Optional JSON config file
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 on success, 1 on failure
pub fn run(out: Option<&str>, config_path: Option<&str>, json_output: bool) -> Result<ExitCode> {
    let config = load_config(config_path)?;

    let job = match out {
        Some(out) => AssetJob::Icon(config.icon.with_output(out)),
        None => AssetJob::icon(&config),
    };

    run_jobs(&[job], json_output)
}

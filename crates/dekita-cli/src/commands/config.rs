//! Config command implementation
//!
//! Emits the default config document, which reproduces the shipped artwork.

use std::process::ExitCode;

use anyhow::{Context, Result};
use colored::Colorize;
use dekita_spec::AssetConfig;

/// Run the config command
///
/// # Arguments
/// * `output` - File to write; stdout when `None`
pub fn run(output: Option<&str>) -> Result<ExitCode> {
    let json = AssetConfig::default()
        .to_json_pretty()
        .context("Failed to serialize default config")?;

    match output {
        Some(path) => {
            std::fs::write(path, format!("{}\n", json))
                .with_context(|| format!("Failed to write config file: {}", path))?;
            println!("{} {}", "Wrote:".green().bold(), path);
        }
        None => println!("{}", json),
    }

    Ok(ExitCode::SUCCESS)
}

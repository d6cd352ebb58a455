//! Validate command implementation
//!
//! Checks a config file without drawing anything.

use std::process::ExitCode;
use std::time::Instant;

use anyhow::Result;
use colored::Colorize;
use dekita_spec::validation::validate_config;

use super::json_output::{error_codes, JsonError, JsonWarning, ValidateOutput};
use super::reporting::{print_json, print_validation};
use crate::input::load_config;

/// Run the validate command
///
/// # Arguments
/// * `config_path` - Path to the JSON config file
/// * `json_output` - Whether to output machine-readable JSON diagnostics
///
/// # Returns
/// Exit code: 0 if valid, 1 if invalid
pub fn run(config_path: &str, json_output: bool) -> Result<ExitCode> {
    if json_output {
        run_json(config_path)
    } else {
        run_human(config_path)
    }
}

fn run_human(config_path: &str) -> Result<ExitCode> {
    let start = Instant::now();
    println!("{} {}", "Validating:".cyan().bold(), config_path);

    let config = load_config(Some(config_path))?;
    let result = validate_config(&config);
    print_validation(&result);

    let elapsed = start.elapsed().as_millis();
    if result.is_ok() {
        println!(
            "\n{} {} warning(s) ({}ms)",
            "SUCCESS".green().bold(),
            result.warnings.len(),
            elapsed
        );
        Ok(ExitCode::SUCCESS)
    } else {
        println!(
            "\n{} {} error(s), {} warning(s) ({}ms)",
            "FAILED".red().bold(),
            result.errors.len(),
            result.warnings.len(),
            elapsed
        );
        Ok(ExitCode::from(1))
    }
}

fn run_json(config_path: &str) -> Result<ExitCode> {
    let output = match load_config(Some(config_path)) {
        Ok(config) => {
            let result = validate_config(&config);
            ValidateOutput {
                success: result.is_ok(),
                errors: result.errors.iter().map(JsonError::from).collect(),
                warnings: result.warnings.iter().map(JsonWarning::from).collect(),
            }
        }
        Err(e) => ValidateOutput {
            success: false,
            errors: vec![JsonError::new(error_codes::CONFIG_LOAD, format!("{:#}", e))
                .with_path(config_path)],
            warnings: Vec::new(),
        },
    };

    print_json(&output)?;
    Ok(if output.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    })
}

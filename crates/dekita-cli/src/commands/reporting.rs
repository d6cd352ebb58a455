//! Shared console and JSON reporting helpers.

use anyhow::{Context, Result};
use colored::Colorize;
use dekita_spec::ValidationResult;
use serde::Serialize;

/// Print a value as pretty JSON on stdout.
pub(crate) fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize JSON output")?;
    println!("{}", json);
    Ok(())
}

/// First 16 hex digits of a hash, for display.
pub(crate) fn short_hash(hash: &str) -> &str {
    &hash[..hash.len().min(16)]
}

/// Print validation errors and warnings with colored markers.
pub(crate) fn print_validation(result: &ValidationResult) {
    for error in &result.errors {
        println!("  {} {}", "x".red(), error);
    }
    for warning in &result.warnings {
        println!("  {} {}", "!".yellow(), warning);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_hash() {
        assert_eq!(short_hash("0123456789abcdef0123"), "0123456789abcdef");
        assert_eq!(short_hash("abc"), "abc");
    }
}

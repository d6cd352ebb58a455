//! Shared asset generation runner.
//!
//! The `feature-graphic`, `icon` and `all` commands build a list of jobs from
//! the config and command-line overrides and hand it to [`run_jobs`].

use std::path::Path;
use std::process::ExitCode;
use std::time::Instant;

use anyhow::Result;
use colored::Colorize;
use dekita_backend_raster::compose::{generate_feature_graphic, generate_icon};
use dekita_backend_raster::{AssetResult, ComposeError};
use dekita_spec::validation::{validate_feature_graphic, validate_icon};
use dekita_spec::{AssetConfig, BackendError, FeatureGraphicParams, IconParams, ValidationResult};

use super::json_output::{GenerateOutput, GeneratedFile, JsonError, JsonWarning};
use super::reporting::{print_json, print_validation, short_hash};

/// One asset to generate, with its output path already resolved.
#[derive(Debug, Clone)]
pub enum AssetJob {
    FeatureGraphic(FeatureGraphicParams),
    Icon(IconParams),
}

impl AssetJob {
    /// Feature graphic job from a config, writing to the resolved output.
    pub fn feature_graphic(config: &AssetConfig) -> Self {
        let params = config
            .feature_graphic
            .clone()
            .with_output(config.feature_graphic_output());
        AssetJob::FeatureGraphic(params)
    }

    /// Icon job from a config, writing to the resolved output.
    pub fn icon(config: &AssetConfig) -> Self {
        let params = config.icon.clone().with_output(config.icon_output());
        AssetJob::Icon(params)
    }

    /// Stable asset name used in output.
    pub fn name(&self) -> &'static str {
        match self {
            AssetJob::FeatureGraphic(_) => "feature_graphic",
            AssetJob::Icon(_) => "icon",
        }
    }

    /// Where the PNG will be written.
    pub fn output(&self) -> &Path {
        match self {
            AssetJob::FeatureGraphic(params) => &params.output,
            AssetJob::Icon(params) => &params.output,
        }
    }

    fn validate(&self) -> ValidationResult {
        match self {
            AssetJob::FeatureGraphic(params) => validate_feature_graphic(params),
            AssetJob::Icon(params) => validate_icon(params),
        }
    }

    fn generate(&self) -> Result<AssetResult, ComposeError> {
        match self {
            AssetJob::FeatureGraphic(params) => generate_feature_graphic(params, &params.output),
            AssetJob::Icon(params) => generate_icon(params, &params.output),
        }
    }
}

/// Generate every job in order, stopping at the first failure.
///
/// # Returns
/// Exit code: 0 if every asset was written, 1 otherwise
pub fn run_jobs(jobs: &[AssetJob], json_output: bool) -> Result<ExitCode> {
    if json_output {
        run_json(jobs)
    } else {
        run_human(jobs)
    }
}

fn run_human(jobs: &[AssetJob]) -> Result<ExitCode> {
    let start = Instant::now();

    for job in jobs {
        println!(
            "{} {} -> {}",
            "Generating:".cyan().bold(),
            job.name(),
            job.output().display()
        );

        let validation = job.validate();
        if !validation.is_ok() {
            print_validation(&validation);
            anyhow::bail!(
                "invalid {} parameters ({} error(s))",
                job.name(),
                validation.errors.len()
            );
        }

        let result = job.generate().map_err(|e| {
            anyhow::anyhow!("failed to generate {} [{}]: {}", job.name(), e.code(), e)
        })?;
        println!(
            "  {} {} ({}x{}, {})",
            "✓".green(),
            result.path.display(),
            result.width,
            result.height,
            short_hash(&result.hash).dimmed()
        );
    }

    println!(
        "\n{} Generated {} asset(s) ({}ms)",
        "SUCCESS".green().bold(),
        jobs.len(),
        start.elapsed().as_millis()
    );
    Ok(ExitCode::SUCCESS)
}

fn run_json(jobs: &[AssetJob]) -> Result<ExitCode> {
    let mut output = GenerateOutput {
        success: true,
        errors: Vec::new(),
        warnings: Vec::new(),
        files: Vec::new(),
    };

    for job in jobs {
        let validation = job.validate();
        output
            .warnings
            .extend(validation.warnings.iter().map(JsonWarning::from));
        if !validation.is_ok() {
            output
                .errors
                .extend(validation.errors.iter().map(JsonError::from));
            output.success = false;
            break;
        }

        match job.generate() {
            Ok(result) => output
                .files
                .push(GeneratedFile::from_result(job.name(), &result)),
            Err(e) => {
                output.errors.push(JsonError::new(e.code(), e.to_string()));
                output.success = false;
                break;
            }
        }
    }

    print_json(&output)?;
    Ok(if output.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_jobs_use_resolved_outputs() {
        let config = AssetConfig::default().with_out_dir("build");
        let fg = AssetJob::feature_graphic(&config);
        let icon = AssetJob::icon(&config);
        assert_eq!(fg.name(), "feature_graphic");
        assert_eq!(fg.output(), PathBuf::from("build").join("feature_graphic.png"));
        assert_eq!(icon.output(), PathBuf::from("build").join("icon.png"));
    }

    #[test]
    fn test_run_jobs_writes_files() {
        let dir = tempfile::tempdir().unwrap();
        let config = AssetConfig::default().with_out_dir(dir.path());
        let jobs = [AssetJob::icon(&config)];
        let code = run_jobs(&jobs, true).unwrap();
        assert_eq!(code, ExitCode::SUCCESS);
        assert!(dir.path().join("icon.png").exists());
    }

    #[test]
    fn test_invalid_params_fail_human_mode() {
        let mut config = AssetConfig::default();
        config.icon.size = 0;
        let err = run_jobs(&[AssetJob::icon(&config)], false).unwrap_err();
        assert!(err.to_string().contains("invalid icon parameters"));
    }
}

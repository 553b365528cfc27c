//! Validate command implementation
//!
//! Loads a pipeline config and reports coded validation errors and warnings.

use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use colored::Colorize;
use pixelforge_spec::{validate_pipeline, PipelineConfig, ValidationResult};
use serde::Serialize;

use super::json_output::{error_codes, JsonError, JsonOutput, JsonWarning};
use super::reporting;

/// One job as listed in the validate result.
#[derive(Debug, Clone, Serialize)]
pub struct PlannedJob {
    pub index: usize,
    pub kind: &'static str,
    pub description: String,
}

/// JSON result of a successful validation.
#[derive(Debug, Clone, Serialize)]
pub struct ValidateResult {
    /// `root` as written in the config
    pub root: String,
    pub directories: usize,
    pub jobs: Vec<PlannedJob>,
}

impl ValidateResult {
    fn from_config(config: &PipelineConfig) -> Self {
        Self {
            root: config.root.clone(),
            directories: config.directories.len(),
            jobs: plan(config),
        }
    }
}

/// Jobs in execution order.
pub(crate) fn plan(config: &PipelineConfig) -> Vec<PlannedJob> {
    config
        .jobs
        .iter()
        .enumerate()
        .map(|(index, job)| PlannedJob {
            index,
            kind: job.kind(),
            description: job.describe(),
        })
        .collect()
}

/// Run the validate command
///
/// # Arguments
/// * `config_path` - Path to the pipeline config
/// * `json_output` - Whether to output machine-readable JSON diagnostics
///
/// # Returns
/// Exit code: 0 if valid, 1 if invalid
pub fn run(config_path: &str, json_output: bool) -> Result<ExitCode> {
    if json_output {
        run_json(Path::new(config_path))
    } else {
        run_human(Path::new(config_path))
    }
}

fn run_human(config_path: &Path) -> Result<ExitCode> {
    reporting::print_header("Validating:", config_path.display());

    let config = PipelineConfig::load(config_path)
        .with_context(|| format!("failed to load config {}", config_path.display()))?;
    let result = validate_pipeline(&config);
    print_validation_results(&result);

    if result.is_ok() {
        println!(
            "\n{} Config is valid ({} job(s))",
            "SUCCESS".green().bold(),
            config.jobs.len()
        );
        Ok(ExitCode::SUCCESS)
    } else {
        println!(
            "\n{} Config has {} error(s)",
            "FAILED".red().bold(),
            result.errors.len()
        );
        Ok(ExitCode::from(1))
    }
}

fn run_json(config_path: &Path) -> Result<ExitCode> {
    let config = match PipelineConfig::load(config_path) {
        Ok(config) => config,
        Err(e) => {
            let error = JsonError::new(error_codes::CONFIG_LOAD, e.to_string())
                .with_file(config_path.display().to_string());
            reporting::emit_json(&JsonOutput::<()>::failure("validate", vec![error]))?;
            return Ok(ExitCode::from(1));
        }
    };

    let result = validate_pipeline(&config);
    let warnings: Vec<JsonWarning> = result.warnings.iter().map(JsonWarning::from).collect();

    if result.is_ok() {
        let output =
            JsonOutput::success("validate", ValidateResult::from_config(&config), warnings);
        reporting::emit_json(&output)?;
        Ok(ExitCode::SUCCESS)
    } else {
        let errors = result.errors.iter().map(JsonError::from).collect();
        let mut output = JsonOutput::<ValidateResult>::failure("validate", errors);
        output.warnings = warnings;
        reporting::emit_json(&output)?;
        Ok(ExitCode::from(1))
    }
}

/// Print validation results to the console
pub(crate) fn print_validation_results(result: &ValidationResult) {
    if !result.errors.is_empty() {
        println!("\n{}", "Errors:".red().bold());
        for error in &result.errors {
            let path_info = error
                .path
                .as_ref()
                .map(|p| format!(" at {}", p))
                .unwrap_or_default();
            println!(
                "  {} [{}]{}: {}",
                "x".red(),
                error.code.to_string().red(),
                path_info.dimmed(),
                error.message
            );
        }
    }

    if !result.warnings.is_empty() {
        println!("\n{}", "Warnings:".yellow().bold());
        for warning in &result.warnings {
            let path_info = warning
                .path
                .as_ref()
                .map(|p| format!(" at {}", p))
                .unwrap_or_default();
            println!(
                "  {} [{}]{}: {}",
                "!".yellow(),
                warning.code.to_string().yellow(),
                path_info.dimmed(),
                warning.message
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pixelforge_spec::{Grid, Job, SplitJob};

    fn write_config(dir: &tempfile::TempDir, config: &PipelineConfig) -> std::path::PathBuf {
        let path = dir.path().join("pipeline.json");
        std::fs::write(&path, config.to_json_pretty().unwrap()).unwrap();
        path
    }

    fn split_job(names: &[&str]) -> Job {
        Job::Split(SplitJob {
            input: "sheet.png".into(),
            output_dir: "out".into(),
            grid: Grid::new(2, 1),
            names: names.iter().map(|s| s.to_string()).collect(),
        })
    }

    #[test]
    fn validate_accepts_valid_config() {
        let tmp = tempfile::tempdir().unwrap();
        let config = PipelineConfig::builder().job(split_job(&["a", "b"])).build();
        let path = write_config(&tmp, &config);

        let code = run(path.to_str().unwrap(), false).unwrap();
        assert_eq!(code, ExitCode::SUCCESS);
    }

    #[test]
    fn validate_rejects_too_many_names() {
        let tmp = tempfile::tempdir().unwrap();
        let config = PipelineConfig::builder()
            .job(split_job(&["a", "b", "c"]))
            .build();
        let path = write_config(&tmp, &config);

        let code = run(path.to_str().unwrap(), true).unwrap();
        assert_eq!(code, ExitCode::from(1));
    }

    #[test]
    fn validate_json_reports_load_failure() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("missing.json");

        let code = run(path.to_str().unwrap(), true).unwrap();
        assert_eq!(code, ExitCode::from(1));
    }

    #[test]
    fn validate_human_propagates_load_failure() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("broken.json");
        std::fs::write(&path, "{\"version\": 1, \"jobs\": [").unwrap();

        assert!(run(path.to_str().unwrap(), false).is_err());
    }

    #[test]
    fn plan_lists_jobs_in_order() {
        let config = PipelineConfig::builder()
            .job(Job::Generate(Default::default()))
            .job(split_job(&["a"]))
            .build();
        let jobs = plan(&config);
        assert_eq!(jobs.len(), 2);
        assert_eq!(jobs[0].kind, "generate");
        assert_eq!(jobs[1].index, 1);
        assert_eq!(jobs[1].description, "sheet.png (2x1) -> out");
    }
}

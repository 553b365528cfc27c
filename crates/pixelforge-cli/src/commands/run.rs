//! Run command implementation
//!
//! Executes a pipeline config: creates the listed directories, then runs
//! every job in order. The first failing job aborts the run.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use colored::Colorize;
use pixelforge_spec::{validate_pipeline, Job, PipelineConfig, SpecError};

use super::validate::{self, PlannedJob};
use super::{clean, convert, generate, inspect, replicate, reporting, split};

/// What a pipeline run did.
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Resolved root directory
    pub root: PathBuf,
    /// Directories created (zero on a dry run)
    pub directories_created: usize,
    /// Jobs that completed, or would run on a dry run
    pub jobs: Vec<PlannedJob>,
    pub dry_run: bool,
}

/// Run the run command
///
/// # Arguments
/// * `config_path` - Path to the pipeline config
/// * `dry_run` - Validate and print the plan without touching the filesystem
///
/// # Returns
/// Exit code: 0 if every job succeeded, 1 otherwise
pub fn run(config_path: &str, dry_run: bool) -> Result<ExitCode> {
    let summary = execute_pipeline(Path::new(config_path), dry_run)?;

    if summary.dry_run {
        println!(
            "\n{} {} job(s) planned, nothing written",
            "Dry run:".cyan().bold(),
            summary.jobs.len()
        );
    } else {
        println!(
            "\n{} {} job(s) completed under {}",
            "SUCCESS".green().bold(),
            summary.jobs.len(),
            summary.root.display()
        );
    }
    Ok(ExitCode::SUCCESS)
}

/// Load, validate and execute a pipeline config.
///
/// Job paths are resolved against the config's `root`, which is itself
/// relative to the directory holding the config file.
pub fn execute_pipeline(config_path: &Path, dry_run: bool) -> Result<RunSummary> {
    reporting::print_header("Pipeline:", config_path.display());

    let config = PipelineConfig::load(config_path)
        .with_context(|| format!("failed to load config {}", config_path.display()))?;

    let result = validate_pipeline(&config);
    validate::print_validation_results(&result);
    if !result.is_ok() {
        return Err(SpecError::ValidationFailed(result.errors.len()))
            .with_context(|| format!("refusing to run {}", config_path.display()));
    }

    let root = config.resolve_root(config_path);
    println!("{} {}", "Root:".dimmed(), root.display());

    let planned = validate::plan(&config);
    if dry_run {
        for dir in &config.directories {
            println!("  {} mkdir {}", "-".dimmed(), dir);
        }
        for job in &planned {
            println!(
                "  {} jobs[{}] {} {}",
                "-".dimmed(),
                job.index,
                job.kind.cyan(),
                job.description
            );
        }
        return Ok(RunSummary {
            root,
            directories_created: 0,
            jobs: planned,
            dry_run: true,
        });
    }

    for dir in &config.directories {
        let path = root.join(dir);
        std::fs::create_dir_all(&path)
            .with_context(|| format!("failed to create directory {}", path.display()))?;
    }

    let mut completed = Vec::with_capacity(planned.len());
    for (job, entry) in config.jobs.iter().zip(planned) {
        println!(
            "\n{} jobs[{}] {} {}",
            "==>".cyan().bold(),
            entry.index,
            entry.kind.cyan().bold(),
            entry.description.dimmed()
        );
        run_job(job, &root)
            .with_context(|| format!("jobs[{}] ({}) failed", entry.index, entry.kind))?;
        completed.push(entry);
    }

    Ok(RunSummary {
        root,
        directories_created: config.directories.len(),
        jobs: completed,
        dry_run: false,
    })
}

fn run_job(job: &Job, root: &Path) -> Result<()> {
    match job {
        Job::Generate(j) => {
            let report = generate::execute(&root.join(&j.out_root))?;
            generate::print_report(&report);
        }
        Job::Convert(j) => {
            let report = convert::execute(&root.join(&j.input), &root.join(&j.output))?;
            convert::print_report(&report);
        }
        Job::Split(j) => {
            let report = split::execute(
                &root.join(&j.input),
                &root.join(&j.output_dir),
                j.grid,
                &j.names,
            )?;
            split::print_report(&report);
        }
        Job::Alias(j) => {
            let report = convert::execute_aliases(
                &root.join(&j.source_dir),
                &root.join(&j.dest_dir),
                &j.mapping,
            )?;
            convert::print_alias_report(&report);
        }
        Job::Clean(j) => {
            let output = j.output.as_ref().map(|o| root.join(o));
            let report = clean::execute(&root.join(&j.input), output.as_deref())?;
            clean::print_report(&report);
        }
        Job::Inspect(j) => {
            let report = inspect::execute(&root.join(&j.input), j.grid, j.frame_count)?;
            inspect::print_report(&report);
        }
        Job::Replicate(j) => {
            let sources: Vec<PathBuf> = j.sources.iter().map(|s| root.join(s)).collect();
            let output_dir = root.join(&j.output_dir);
            let report = replicate::execute(&sources, &output_dir, j.count, &j.prefix)?;
            replicate::print_report(&report);
        }
    }
    Ok(())
}

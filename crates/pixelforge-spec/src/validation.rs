//! Pipeline config validation.

mod path_safety;

use std::collections::HashSet;

pub use path_safety::{is_safe_file_name, is_safe_relative_path};

use crate::error::{ErrorCode, ValidationError, ValidationResult, ValidationWarning, WarningCode};
use crate::job::{
    AliasJob, CleanJob, ConvertJob, GenerateJob, InspectJob, Job, ReplicateJob, SplitJob,
    SKIP_SENTINEL,
};
use crate::pipeline::{PipelineConfig, PIPELINE_VERSION};

/// Validates a pipeline config.
///
/// Grid divisibility is not checked here: image dimensions are only known
/// once the sheet is loaded; remainder pixels are dropped and reported.
///
/// # Example
/// ```
/// use pixelforge_spec::{Job, PipelineConfig, ReplicateJob};
/// use pixelforge_spec::validation::validate_pipeline;
///
/// let config = PipelineConfig::builder()
///     .job(Job::Replicate(ReplicateJob {
///         sources: vec!["assets/sprites/tile_factory_64.png".into()],
///         output_dir: "assets/tiles/danger".into(),
///         count: 0,
///         prefix: "danger_tile".into(),
///     }))
///     .build();
///
/// let result = validate_pipeline(&config);
/// assert!(!result.is_ok());
/// ```
pub fn validate_pipeline(config: &PipelineConfig) -> ValidationResult {
    let mut result = ValidationResult::default();

    if config.version != PIPELINE_VERSION {
        result.add_error(ValidationError::with_path(
            ErrorCode::UnsupportedVersion,
            format!(
                "version must be {}, got {}",
                PIPELINE_VERSION, config.version
            ),
            "version",
        ));
    }

    for (index, dir) in config.directories.iter().enumerate() {
        check_relative_path(dir, &format!("directories[{}]", index), &mut result);
    }

    if config.jobs.is_empty() {
        result.add_warning(ValidationWarning::with_path(
            WarningCode::NoJobs,
            "pipeline has no jobs",
            "jobs",
        ));
    }

    for (index, job) in config.jobs.iter().enumerate() {
        validate_job(job, &format!("jobs[{}]", index), &mut result);
    }

    result
}

/// Validates a single job. `prefix` is the JSON path of the job.
pub fn validate_job(job: &Job, prefix: &str, result: &mut ValidationResult) {
    match job {
        Job::Generate(j) => validate_generate(j, prefix, result),
        Job::Convert(j) => validate_convert(j, prefix, result),
        Job::Split(j) => validate_split(j, prefix, result),
        Job::Alias(j) => validate_alias(j, prefix, result),
        Job::Clean(j) => validate_clean(j, prefix, result),
        Job::Inspect(j) => validate_inspect(j, prefix, result),
        Job::Replicate(j) => validate_replicate(j, prefix, result),
    }
}

fn validate_generate(job: &GenerateJob, prefix: &str, result: &mut ValidationResult) {
    check_relative_path(&job.out_root, &format!("{}.out_root", prefix), result);
}

fn validate_convert(job: &ConvertJob, prefix: &str, result: &mut ValidationResult) {
    check_input_path(&job.input, &format!("{}.input", prefix), result);
    check_relative_path(&job.output, &format!("{}.output", prefix), result);
}

fn validate_split(job: &SplitJob, prefix: &str, result: &mut ValidationResult) {
    check_input_path(&job.input, &format!("{}.input", prefix), result);
    check_relative_path(&job.output_dir, &format!("{}.output_dir", prefix), result);

    if job.grid.cols == 0 || job.grid.rows == 0 {
        result.add_error(ValidationError::with_path(
            ErrorCode::InvalidGrid,
            format!("grid dimensions must be at least 1, got {}", job.grid),
            format!("{}.grid", prefix),
        ));
        return;
    }

    let cells = job.grid.cell_count();
    let names = job.names.len() as u64;
    if names > cells {
        result.add_error(ValidationError::with_path(
            ErrorCode::TooManyNames,
            format!(
                "{} names given for a {} grid with {} cells",
                names, job.grid, cells
            ),
            format!("{}.names", prefix),
        ));
    } else if names < cells {
        result.add_warning(ValidationWarning::with_path(
            WarningCode::TrailingCellsDropped,
            format!(
                "only {} of {} cells are named; the remaining cells are not emitted",
                names, cells
            ),
            format!("{}.names", prefix),
        ));
    }

    let mut seen = HashSet::new();
    for (index, name) in job.names.iter().enumerate() {
        let path = format!("{}.names[{}]", prefix, index);
        if name == SKIP_SENTINEL {
            continue;
        }
        check_file_name(name, &path, result);
        if !seen.insert(name.as_str()) {
            result.add_error(ValidationError::with_path(
                ErrorCode::DuplicateName,
                format!("cell name '{}' is used more than once", name),
                path,
            ));
        }
    }

    if job.emitted_count() == 0 {
        result.add_warning(ValidationWarning::with_path(
            WarningCode::EmptyJob,
            "split job emits no cells",
            format!("{}.names", prefix),
        ));
    }
}

fn validate_alias(job: &AliasJob, prefix: &str, result: &mut ValidationResult) {
    check_input_path(&job.source_dir, &format!("{}.source_dir", prefix), result);
    check_relative_path(&job.dest_dir, &format!("{}.dest_dir", prefix), result);

    let mut seen = HashSet::new();
    for (source, dest) in &job.mapping {
        let path = format!("{}.mapping.{}", prefix, source);
        check_file_name(source, &path, result);
        check_file_name(dest, &path, result);
        if !seen.insert(dest.as_str()) {
            result.add_error(ValidationError::with_path(
                ErrorCode::DuplicateName,
                format!("destination '{}' is used more than once", dest),
                path,
            ));
        }
    }

    if job.mapping.is_empty() {
        result.add_warning(ValidationWarning::with_path(
            WarningCode::EmptyJob,
            "alias job has an empty mapping",
            format!("{}.mapping", prefix),
        ));
    }
}

fn validate_clean(job: &CleanJob, prefix: &str, result: &mut ValidationResult) {
    check_input_path(&job.input, &format!("{}.input", prefix), result);
    if let Some(ref output) = job.output {
        check_relative_path(output, &format!("{}.output", prefix), result);
    }
}

fn validate_inspect(job: &InspectJob, prefix: &str, result: &mut ValidationResult) {
    check_input_path(&job.input, &format!("{}.input", prefix), result);

    if job.grid.cols == 0 || job.grid.rows == 0 {
        result.add_error(ValidationError::with_path(
            ErrorCode::InvalidGrid,
            format!("grid dimensions must be at least 1, got {}", job.grid),
            format!("{}.grid", prefix),
        ));
    } else if job.frame_count as u64 > job.grid.cell_count() {
        result.add_error(ValidationError::with_path(
            ErrorCode::FrameCountExceedsGrid,
            format!(
                "frame_count {} exceeds the {} cells of a {} grid",
                job.frame_count,
                job.grid.cell_count(),
                job.grid
            ),
            format!("{}.frame_count", prefix),
        ));
    }
}

fn validate_replicate(job: &ReplicateJob, prefix: &str, result: &mut ValidationResult) {
    check_relative_path(&job.output_dir, &format!("{}.output_dir", prefix), result);
    check_file_name(&job.prefix, &format!("{}.prefix", prefix), result);

    if job.count == 0 {
        result.add_error(ValidationError::with_path(
            ErrorCode::InvalidCount,
            "count must be at least 1",
            format!("{}.count", prefix),
        ));
    }

    for (index, source) in job.sources.iter().enumerate() {
        check_input_path(source, &format!("{}.sources[{}]", prefix, index), result);
    }

    if job.sources.is_empty() {
        result.add_warning(ValidationWarning::with_path(
            WarningCode::EmptyJob,
            "replicate job has no sources",
            format!("{}.sources", prefix),
        ));
    }
}

fn check_input_path(path: &str, field: &str, result: &mut ValidationResult) {
    if path.is_empty() {
        result.add_error(ValidationError::with_path(
            ErrorCode::UnsafePath,
            "input path cannot be empty",
            field,
        ));
    }
}

fn check_relative_path(path: &str, field: &str, result: &mut ValidationResult) {
    for message in path_safety::relative_path_errors(path) {
        result.add_error(ValidationError::with_path(
            ErrorCode::UnsafePath,
            message,
            field,
        ));
    }
}

fn check_file_name(name: &str, field: &str, result: &mut ValidationResult) {
    for message in path_safety::file_name_errors(name) {
        result.add_error(ValidationError::with_path(
            ErrorCode::UnsafeFileName,
            message,
            field,
        ));
    }
}

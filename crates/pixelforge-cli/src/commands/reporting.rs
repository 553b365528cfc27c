//! Shared console and JSON reporting helpers.

use std::path::Path;
use std::process::ExitCode;

use anyhow::Result;
use colored::Colorize;
use pixelforge_backend_image::{
    CleanError, ConvertError, GenerateError, LoadError, PngError, ReplicateError, SavedFile,
    SplitError,
};
use serde::Serialize;

use super::json_output::{error_codes, JsonError, JsonOutput, JsonWarning};

/// First 16 hex digits of a content hash.
pub(crate) fn short_hash(hash: &str) -> &str {
    hash.get(..16).unwrap_or(hash)
}

/// `  ok <path> (<hash>)`
pub(crate) fn print_saved(saved: &SavedFile) {
    println!(
        "  {} {} {}",
        "ok".green(),
        saved.path.display(),
        format!("({})", short_hash(&saved.hash)).dimmed()
    );
}

/// `  !! <message>` in yellow.
pub(crate) fn print_warning(message: impl std::fmt::Display) {
    println!("  {} {}", "!!".yellow(), message.to_string().yellow());
}

pub(crate) fn print_header(label: &str, subject: impl std::fmt::Display) {
    println!("{} {}", label.cyan().bold(), subject);
}

/// Print a JSON envelope to stdout.
pub(crate) fn emit_json<T: Serialize>(output: &JsonOutput<T>) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(output)?);
    Ok(())
}

/// Print a success envelope and exit 0, or a failure envelope and exit 1.
pub(crate) fn finish_json<T: Serialize>(
    command: &'static str,
    outcome: Result<(T, Vec<JsonWarning>)>,
    file: Option<&Path>,
) -> Result<ExitCode> {
    match outcome {
        Ok((result, warnings)) => {
            emit_json(&JsonOutput::success(command, result, warnings))?;
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            let mut error = JsonError::new(error_code(&e), format!("{e:#}"));
            if let Some(file) = file {
                error = error.with_file(file.display().to_string());
            }
            emit_json(&JsonOutput::<()>::failure(command, vec![error]))?;
            Ok(ExitCode::from(1))
        }
    }
}

fn load_code(e: &LoadError) -> &'static str {
    match e {
        LoadError::NotFound(_) => error_codes::FILE_NOT_FOUND,
        LoadError::Decode { .. } | LoadError::Io { .. } => error_codes::DECODE,
    }
}

/// Stable error code for a backend failure anywhere in the chain.
pub(crate) fn error_code(err: &anyhow::Error) -> &'static str {
    for cause in err.chain() {
        if let Some(e) = cause.downcast_ref::<LoadError>() {
            return load_code(e);
        }
        if cause.downcast_ref::<PngError>().is_some() {
            return error_codes::WRITE;
        }
        if let Some(e) = cause.downcast_ref::<SplitError>() {
            return match e {
                SplitError::Load(l) => load_code(l),
                SplitError::InvalidGrid(_)
                | SplitError::GridTooLarge { .. }
                | SplitError::TooManyNames { .. }
                | SplitError::InvalidName { .. }
                | SplitError::DuplicateName(_) => error_codes::INVALID_ARGS,
                SplitError::CreateDir { .. } | SplitError::Png(_) => error_codes::WRITE,
            };
        }
        if let Some(e) = cause.downcast_ref::<CleanError>() {
            return match e {
                CleanError::Load(l) => load_code(l),
                CleanError::Png(_) => error_codes::WRITE,
            };
        }
        if let Some(e) = cause.downcast_ref::<ReplicateError>() {
            return match e {
                ReplicateError::Load(l) => load_code(l),
                ReplicateError::InvalidPrefix(_) => error_codes::INVALID_ARGS,
                ReplicateError::CreateDir { .. } | ReplicateError::Png(_) => error_codes::WRITE,
            };
        }
        if let Some(e) = cause.downcast_ref::<ConvertError>() {
            return match e {
                ConvertError::Load(l) => load_code(l),
                ConvertError::InvalidName(_) => error_codes::INVALID_ARGS,
                ConvertError::Png(_) => error_codes::WRITE,
            };
        }
        if cause.downcast_ref::<GenerateError>().is_some() {
            return error_codes::WRITE;
        }
    }
    error_codes::OPERATION_FAILED
}

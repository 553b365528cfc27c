//! JSON output types for machine-readable CLI output.
//!
//! Every command that accepts `--json` prints exactly one [`JsonOutput`]
//! document to stdout and no colored text.

use serde::{Deserialize, Serialize};

use pixelforge_spec::{ValidationError, ValidationWarning};

/// Error codes for CLI operations.
///
/// These codes are stable and can be used for programmatic error handling.
/// Validation failures pass through their own `E1xx` codes.
pub mod error_codes {
    /// Input file does not exist
    pub const FILE_NOT_FOUND: &str = "CLI_001";
    /// Input file could not be decoded as an image
    pub const DECODE: &str = "CLI_002";
    /// Output could not be written
    pub const WRITE: &str = "CLI_003";
    /// Config file could not be read or parsed
    pub const CONFIG_LOAD: &str = "CLI_004";
    /// Invalid command arguments
    pub const INVALID_ARGS: &str = "CLI_005";
    /// Operation failed for another reason
    pub const OPERATION_FAILED: &str = "CLI_006";
}

/// Warning codes for CLI operations.
pub mod warning_codes {
    /// Grid did not divide the image evenly
    pub const GRID_REMAINDER: &str = "CLI_W001";
    /// A source file was missing and skipped
    pub const MISSING_SOURCE: &str = "CLI_W002";
    /// No background was detected, nothing written
    pub const NOTHING_CLEANED: &str = "CLI_W003";
}

/// A structured error in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonError {
    /// Stable error code (e.g., "CLI_001", "E102")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// JSON path to the problematic field (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// File the error refers to (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

impl JsonError {
    /// Creates a new error with code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            path: None,
            file: None,
        }
    }

    /// Sets the file path for this error.
    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }
}

impl From<&ValidationError> for JsonError {
    fn from(e: &ValidationError) -> Self {
        Self {
            code: e.code.to_string(),
            message: e.message.clone(),
            path: e.path.clone(),
            file: None,
        }
    }
}

/// A structured warning in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonWarning {
    /// Stable warning code (e.g., "CLI_W001", "W101")
    pub code: String,
    /// Human-readable warning message
    pub message: String,
    /// JSON path to the problematic field (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl JsonWarning {
    /// Creates a new warning with code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            path: None,
        }
    }
}

impl From<&ValidationWarning> for JsonWarning {
    fn from(w: &ValidationWarning) -> Self {
        Self {
            code: w.code.to_string(),
            message: w.message.clone(),
            path: w.path.clone(),
        }
    }
}

/// Envelope printed by every `--json` command.
#[derive(Debug, Clone, Serialize)]
pub struct JsonOutput<T: Serialize> {
    /// Whether the command succeeded
    pub success: bool,
    /// Command name, e.g. "split"
    pub command: &'static str,
    pub errors: Vec<JsonError>,
    pub warnings: Vec<JsonWarning>,
    /// The command's report (on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<T>,
}

impl<T: Serialize> JsonOutput<T> {
    pub fn success(command: &'static str, result: T, warnings: Vec<JsonWarning>) -> Self {
        Self {
            success: true,
            command,
            errors: Vec::new(),
            warnings,
            result: Some(result),
        }
    }

    pub fn failure(command: &'static str, errors: Vec<JsonError>) -> Self {
        Self {
            success: false,
            command,
            errors,
            warnings: Vec::new(),
            result: None,
        }
    }
}

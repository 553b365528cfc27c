//! Top-level pipeline config, builder, and file loading.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::SpecError;
use crate::job::Job;

/// Current pipeline config version.
pub const PIPELINE_VERSION: u32 = 1;

/// A pipeline config: directories to create, then jobs to run in order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PipelineConfig {
    /// Config format version. Must be [`PIPELINE_VERSION`].
    pub version: u32,

    /// Base directory for every job path, relative to the config file.
    #[serde(default = "default_root")]
    pub root: String,

    /// Directories created before any job runs.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub directories: Vec<String>,

    /// Jobs, executed sequentially.
    #[serde(default)]
    pub jobs: Vec<Job>,
}

fn default_root() -> String {
    ".".to_string()
}

impl PipelineConfig {
    /// Creates a new builder.
    pub fn builder() -> PipelineBuilder {
        PipelineBuilder::default()
    }

    /// Parses a config from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, SpecError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a config file.
    pub fn load(path: &Path) -> Result<Self, SpecError> {
        let content = std::fs::read_to_string(path).map_err(|source| SpecError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content)
    }

    /// Serializes the config to pretty JSON.
    pub fn to_json_pretty(&self) -> Result<String, SpecError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Resolves `root` against the directory containing the config file.
    pub fn resolve_root(&self, config_path: &Path) -> PathBuf {
        let base = config_path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        base.join(&self.root)
    }
}

/// Builder for [`PipelineConfig`].
#[derive(Debug, Clone)]
pub struct PipelineBuilder {
    config: PipelineConfig,
}

impl Default for PipelineBuilder {
    fn default() -> Self {
        Self {
            config: PipelineConfig {
                version: PIPELINE_VERSION,
                root: default_root(),
                directories: Vec::new(),
                jobs: Vec::new(),
            },
        }
    }
}

impl PipelineBuilder {
    /// Sets the root directory.
    pub fn root(mut self, root: impl Into<String>) -> Self {
        self.config.root = root.into();
        self
    }

    /// Adds a directory to create up front.
    pub fn directory(mut self, dir: impl Into<String>) -> Self {
        self.config.directories.push(dir.into());
        self
    }

    /// Appends a job.
    pub fn job(mut self, job: Job) -> Self {
        self.config.jobs.push(job);
        self
    }

    /// Finishes the config.
    pub fn build(self) -> PipelineConfig {
        self.config
    }
}

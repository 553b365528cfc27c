//! pixelforge Pipeline Config Library
//!
//! This crate provides the types, loading, and validation for pixelforge
//! pipeline configs. A pipeline config is a JSON document listing the
//! directories to create up front and the asset jobs to run in order.
//!
//! # Example
//!
//! ```
//! use pixelforge_spec::{Grid, Job, PipelineConfig, SplitJob};
//! use pixelforge_spec::validation::validate_pipeline;
//!
//! let config = PipelineConfig::builder()
//!     .directory("assets/sprites/enemies")
//!     .job(Job::Split(SplitJob {
//!         input: "assets/dronen-1.jpg".into(),
//!         output_dir: "assets/sprites/enemies".into(),
//!         grid: Grid::new(2, 3),
//!         names: vec!["standard_drone".into(), "fast_drone".into()],
//!     }))
//!     .build();
//!
//! let result = validate_pipeline(&config);
//! assert!(result.is_ok());
//! ```
//!
//! # Modules
//!
//! - [`error`]: Error and warning types for validation and loading
//! - [`job`]: Job types for every asset operation
//! - [`pipeline`]: The top-level config, its builder, and file loading
//! - [`validation`]: Config validation and path safety checks

pub mod error;
pub mod job;
pub mod pipeline;
pub mod validation;

pub use error::{
    ErrorCode, SpecError, ValidationError, ValidationResult, ValidationWarning, WarningCode,
};
pub use job::{
    AliasJob, CleanJob, ConvertJob, GenerateJob, Grid, InspectJob, Job, ReplicateJob, SplitJob,
    DEFAULT_INSPECT_FRAME_COUNT, DEFAULT_INSPECT_GRID, DEFAULT_REPLICA_COUNT,
    DEFAULT_REPLICA_PREFIX, SKIP_SENTINEL,
};
pub use pipeline::{PipelineBuilder, PipelineConfig, PIPELINE_VERSION};
pub use validation::{is_safe_file_name, is_safe_relative_path, validate_pipeline};

//! CLI command implementations

pub mod chat;
pub mod clean;
pub mod convert;
pub mod generate;
pub mod inspect;
pub mod json_output;
pub mod replicate;
pub mod run;
pub mod split;
pub mod validate;

mod reporting;

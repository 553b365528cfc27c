//! pixelforge CLI library.
//!
//! This crate provides the command implementations behind the `pixelforge`
//! binary: the per-operation asset commands, the pipeline runner, and the
//! interactive chat relay.

pub mod chat;
pub mod commands;

//! skein CLI - check, print and scaffold bundle configurations.
//!
//! This crate provides the command-line interface over `skein-config`: it
//! loads a configuration (file plus `SKEIN_*` environment overrides),
//! validates it before any bundler runs, and re-serializes it.
//!
//! # Architecture
//!
//! - [`cli`] - clap argument definitions
//! - [`commands`] - `check`, `print`, `init` and `schema`
//! - [`error`] - CLI error types and miette conversion
//! - [`logger`] - Structured logging with tracing
//! - [`ui`] - Status lines on stderr

// Public modules
pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod ui;

// Re-export commonly used types
pub use error::{CliError, Result, ResultExt};

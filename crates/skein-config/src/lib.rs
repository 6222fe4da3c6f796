//! Bundle configuration for a JavaScript module bundler.
//!
//! A [`BundleConfig`] names an entry module, an [`OutputOptions`] descriptor
//! (destination file, [`ModuleFormat`], exported name, [`SourceMapPolicy`])
//! and an ordered list of [`PluginSpec`]s. The record is data only: the
//! bundler and its plugins live elsewhere.

pub mod bundle;
pub mod config;
pub mod discovery;
pub mod error;
pub mod loader;
pub mod validation;

// Re-export main types
pub use bundle::*;
pub use config::*;
pub use error::*;

// Re-export discovery, loading and validation
pub use discovery::{ConfigDiscovery, ConfigSource, load_file, load_value};
pub use loader::{ConfigLoader, DEFAULT_ENV_PREFIX};
pub use validation::{
    ConfigValidator, FsValidator, SchemaValidator, validate_fs, validate_global_name,
    validate_schema,
};

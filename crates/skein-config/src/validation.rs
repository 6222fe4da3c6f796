//! Pluggable config validation strategies
//!
//! Separates filesystem validation (for CLI use) from schema validation (for library use).

use std::collections::HashSet;
use std::path::Path;

use tracing::warn;

use crate::bundle::ModuleFormat;
use crate::config::BundleConfig;
use crate::error::{ConfigError, Result};

/// Trait for pluggable config validation strategies
pub trait ConfigValidator {
    /// Validate a bundle configuration
    fn validate(&self, config: &BundleConfig) -> Result<()>;
}

/// Schema-only validation (no filesystem checks)
///
/// Use this when the entry module does not exist yet, e.g. before the build
/// step that produces it.
///
/// # Example
///
/// ```
/// use skein_config::{BundleConfig, ConfigValidator, SchemaValidator};
///
/// let config = BundleConfig::reference();
/// SchemaValidator.validate(&config).unwrap();
/// ```
pub struct SchemaValidator;

impl ConfigValidator for SchemaValidator {
    fn validate(&self, config: &BundleConfig) -> Result<()> {
        if config.input.as_os_str().is_empty() {
            return Err(ConfigError::MissingField {
                field: "input".to_string(),
                hint: "Set 'input' to the module to bundle".to_string(),
            });
        }

        if config.output.file.as_os_str().is_empty() {
            return Err(ConfigError::MissingField {
                field: "output.file".to_string(),
                hint: "Set 'output.file' to the destination of the bundle".to_string(),
            });
        }

        validate_name(config)?;

        for external in &config.external {
            if external.trim().is_empty() {
                return Err(ConfigError::SchemaValidation {
                    message: "external module ids cannot be empty".to_string(),
                    hint: Some("Remove empty strings from the 'external' array".to_string()),
                });
            }
        }

        let format = config.output.format;
        for (id, global) in &config.output.globals {
            if id.trim().is_empty() || global.trim().is_empty() {
                return Err(ConfigError::SchemaValidation {
                    message: "output.globals entries need a module id and a global name"
                        .to_string(),
                    hint: Some("Remove empty keys or values from 'output.globals'".to_string()),
                });
            }
        }
        if !config.output.globals.is_empty() && !format.uses_globals() {
            warn!(%format, "output.globals is only used by iife and umd output; ignoring");
        }

        if config.output.amd.is_some() && !format.uses_amd_options() {
            return Err(ConfigError::InvalidValue {
                field: "output.amd".to_string(),
                hint: Some(format!(
                    "'amd' options apply to amd and umd output, not {format}"
                )),
            });
        }

        validate_plugins(config)
    }
}

fn validate_name(config: &BundleConfig) -> Result<()> {
    let format = config.output.format;
    let name = config.output.name.as_deref();

    match name {
        None if format.requires_name() => Err(ConfigError::MissingField {
            field: "output.name".to_string(),
            hint: format!("{format} output exposes the bundle under a name; set 'output.name'"),
        }),
        None => Ok(()),
        Some(name) if name.trim().is_empty() => Err(ConfigError::InvalidValue {
            field: "output.name".to_string(),
            hint: Some("name cannot be blank".to_string()),
        }),
        Some(name) if format.name_is_global() => validate_global_name(name),
        Some(name) if format == ModuleFormat::Amd => {
            if name.chars().any(char::is_whitespace) {
                return Err(ConfigError::InvalidValue {
                    field: "output.name".to_string(),
                    hint: Some(format!("AMD module id cannot contain whitespace: '{name}'")),
                });
            }
            Ok(())
        }
        Some(name) => {
            if format.ignores_name() {
                warn!(%format, output_name = name, "output.name has no effect for this format");
            }
            Ok(())
        }
    }
}

/// Validate a global variable name, optionally namespaced (`a.b.c`).
pub fn validate_global_name(name: &str) -> Result<()> {
    for segment in name.split('.') {
        let mut chars = segment.chars();
        let Some(first) = chars.next() else {
            return Err(ConfigError::InvalidValue {
                field: "output.name".to_string(),
                hint: Some(format!("empty segment in namespaced global '{name}'")),
            });
        };

        if !first.is_alphabetic() && first != '_' && first != '$' {
            return Err(ConfigError::InvalidValue {
                field: "output.name".to_string(),
                hint: Some(format!(
                    "global must start with letter, underscore, or dollar sign (got '{first}')"
                )),
            });
        }

        if let Some(c) = chars.find(|c| !c.is_alphanumeric() && *c != '_' && *c != '$') {
            return Err(ConfigError::InvalidValue {
                field: "output.name".to_string(),
                hint: Some(format!("invalid character '{c}' in global '{name}'")),
            });
        }
    }

    Ok(())
}

fn validate_plugins(config: &BundleConfig) -> Result<()> {
    let mut seen = HashSet::new();

    for (index, plugin) in config.plugins.iter().enumerate() {
        if plugin.name.trim().is_empty() {
            return Err(ConfigError::SchemaValidation {
                message: format!("plugin at position {index} has an empty name"),
                hint: Some("Give every plugin a name, e.g. \"commonjs\"".to_string()),
            });
        }

        plugin.commonjs_options()?;
        plugin.node_resolve_options()?;

        if !seen.insert(plugin.name.as_str()) {
            warn!(plugin = %plugin.name, index, "plugin listed more than once");
        }
    }

    Ok(())
}

/// Filesystem validator (for CLI use)
///
/// Runs schema validation, then checks that the entry module exists on disk.
///
/// # Example
///
/// ```no_run
/// use skein_config::{BundleConfig, ConfigValidator, FsValidator};
///
/// let config = BundleConfig::reference();
/// FsValidator::new(".").validate(&config).unwrap();
/// ```
pub struct FsValidator {
    root: std::path::PathBuf,
}

impl FsValidator {
    /// Create a new filesystem validator with a root directory
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }
}

impl ConfigValidator for FsValidator {
    fn validate(&self, config: &BundleConfig) -> Result<()> {
        // First run schema validation
        SchemaValidator.validate(config)?;

        let path = self.root.join(&config.input);
        if !path.is_file() {
            return Err(ConfigError::EntryNotFound { path });
        }

        Ok(())
    }
}

/// Convenience function for schema-only validation
pub fn validate_schema(config: &BundleConfig) -> Result<()> {
    SchemaValidator.validate(config)
}

/// Convenience function for filesystem validation
pub fn validate_fs(config: &BundleConfig, root: impl AsRef<Path>) -> Result<()> {
    FsValidator::new(root).validate(config)
}

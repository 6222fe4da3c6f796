//! File-based config discovery for CLI use
//!
//! Handles finding and loading skein configuration files from the filesystem.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::debug;

use crate::config::{BundleConfig, parse_json, parse_toml};
use crate::error::{ConfigError, Result};

pub const TOML_CONFIG: &str = "skein.toml";
pub const JSON_CONFIG: &str = "skein.config.json";
pub const PACKAGE_JSON: &str = "package.json";
pub const PACKAGE_FIELD: &str = "skein";

/// Kind of configuration source, decided by file name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSource {
    Toml,
    Json,
    PackageJson,
}

impl ConfigSource {
    /// Classify a path; `None` for file types that cannot hold a config.
    pub fn of(path: &Path) -> Option<Self> {
        if path.file_name() == Some(std::ffi::OsStr::new(PACKAGE_JSON)) {
            return Some(Self::PackageJson);
        }

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Some(Self::Toml),
            Some("json") => Some(Self::Json),
            _ => None,
        }
    }
}

/// File-based configuration discovery
///
/// Searches for skein configuration files in conventional locations and loads them.
/// Library users should construct a `BundleConfig` directly or use
/// `BundleConfig::from_value()`.
///
/// # Example
///
/// ```no_run
/// use skein_config::ConfigDiscovery;
///
/// let discovery = ConfigDiscovery::new(".");
/// let config = discovery.load().unwrap();
/// ```
pub struct ConfigDiscovery {
    root: PathBuf,
}

impl ConfigDiscovery {
    /// Create a new config discovery with a root directory
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Find a config file in the root directory
    ///
    /// Searches in this order:
    /// 1. skein.toml
    /// 2. skein.config.json
    /// 3. package.json (skein field)
    pub fn find(&self) -> Option<PathBuf> {
        for name in [TOML_CONFIG, JSON_CONFIG] {
            let path = self.root.join(name);
            if path.is_file() {
                return Some(path);
            }
        }

        let pkg_path = self.root.join(PACKAGE_JSON);
        let content = fs::read_to_string(&pkg_path).ok()?;
        let parsed = serde_json::from_str::<Value>(&content).ok()?;
        match parsed.get(PACKAGE_FIELD) {
            Some(field) if !field.is_null() => Some(pkg_path),
            _ => None,
        }
    }

    /// Load config from discovered file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` if no config file is found.
    pub fn load(&self) -> Result<BundleConfig> {
        let path = self.find().ok_or(ConfigError::NotFound)?;
        load_file(&path)
    }
}

/// Load config from a specific file path, dispatching on its name
pub fn load_file(path: &Path) -> Result<BundleConfig> {
    BundleConfig::from_value(load_value(path)?)
}

/// Read a config file into an untyped value, keeping the file's key order.
///
/// For `package.json` the value is the `skein` field.
pub fn load_value(path: &Path) -> Result<Value> {
    let source = ConfigSource::of(path).ok_or_else(|| {
        ConfigError::UnsupportedFormat(format!("configuration file '{}'", path.display()))
    })?;

    if !path.is_file() {
        return Err(ConfigError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    debug!(path = %path.display(), ?source, "loading config");
    let content = fs::read_to_string(path)?;

    match source {
        ConfigSource::Toml => parse_toml(&content),
        ConfigSource::Json => parse_json(&content),
        ConfigSource::PackageJson => package_field(&content),
    }
}

fn package_field(content: &str) -> Result<Value> {
    let mut parsed: Value = serde_json::from_str(content).map_err(|e| ConfigError::Parse {
        source_kind: "package.json",
        message: e.to_string(),
    })?;

    let field = parsed
        .get_mut(PACKAGE_FIELD)
        .map(Value::take)
        .ok_or_else(|| ConfigError::MissingField {
            field: PACKAGE_FIELD.to_string(),
            hint: "Add a 'skein' field to your package.json".to_string(),
        })?;

    if field.is_null() {
        return Err(ConfigError::InvalidValue {
            field: PACKAGE_FIELD.to_string(),
            hint: Some("The 'skein' field cannot be null".to_string()),
        });
    }

    Ok(field)
}

//! Layered loading: config file, then environment overrides.
//!
//! Priority: environment > file. Nested keys use `__` in variable names, so
//! `SKEIN_OUTPUT__SOURCEMAP=inline` sets `output.sourcemap`. Environment
//! values are taken verbatim as strings: `SKEIN_OUTPUT__NAME=2024` names the
//! module `"2024"`. The file keeps its key order, so `output.globals` and
//! plugin options come back in the order they were written.

use std::path::PathBuf;

use figment::{
    Figment,
    providers::{Env, Serialized},
};
use serde_json::{Map, Value};
use tracing::debug;

use crate::config::BundleConfig;
use crate::discovery::{ConfigDiscovery, load_value};
use crate::error::{ConfigError, Result};

pub const DEFAULT_ENV_PREFIX: &str = "SKEIN_";

/// Loads one config file and layers environment overrides on top.
///
/// # Example
///
/// ```no_run
/// use skein_config::ConfigLoader;
///
/// let config = ConfigLoader::new()
///     .file("skein.toml")
///     .load()
///     .unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    root: PathBuf,
    file: Option<PathBuf>,
    env_prefix: Option<String>,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self {
            root: PathBuf::from("."),
            file: None,
            env_prefix: Some(DEFAULT_ENV_PREFIX.to_string()),
        }
    }

    /// Directory searched when no explicit file is given
    pub fn root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = root.into();
        self
    }

    /// Explicit config file; skips discovery
    pub fn file(mut self, path: impl Into<PathBuf>) -> Self {
        self.file = Some(path.into());
        self
    }

    pub fn env_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.env_prefix = Some(prefix.into());
        self
    }

    /// Ignore environment overrides
    pub fn without_env(mut self) -> Self {
        self.env_prefix = None;
        self
    }

    /// The config file that will be read.
    pub fn resolve_file(&self) -> Result<PathBuf> {
        match &self.file {
            Some(path) => Ok(path.clone()),
            None => ConfigDiscovery::new(&self.root)
                .find()
                .ok_or(ConfigError::NotFound),
        }
    }

    /// The file contents with environment overrides applied, before typing.
    pub fn value(&self) -> Result<Value> {
        let path = self.resolve_file()?;
        let mut value = load_value(&path)?;
        debug!(path = %path.display(), "merged config file");

        if let Some(prefix) = &self.env_prefix {
            let env = Env::prefixed(prefix).split("__");
            for (key, raw) in env.iter() {
                debug!(key = %key, "environment override");
                apply_override(&mut value, key.as_str(), raw);
            }
        }

        Ok(value)
    }

    pub fn load(&self) -> Result<BundleConfig> {
        extract(self.value()?)
    }
}

/// Set a dotted key to a string, creating intermediate tables as needed.
fn apply_override(value: &mut Value, key: &str, raw: String) {
    let segments: Vec<&str> = key.split('.').collect();
    let Some((leaf, parents)) = segments.split_last() else {
        return;
    };
    if segments.iter().any(|segment| segment.is_empty()) {
        return;
    }

    let mut node = value;
    for segment in parents {
        let Some(table) = table_of(node) else {
            return;
        };
        node = table
            .entry(segment.to_string())
            .or_insert_with(|| Value::Object(Map::new()));
    }
    if let Some(table) = table_of(node) {
        table.insert(leaf.to_string(), Value::String(raw));
    }
}

/// The object behind `node`, replacing a scalar with an empty table.
fn table_of(node: &mut Value) -> Option<&mut Map<String, Value>> {
    if !node.is_object() {
        *node = Value::Object(Map::new());
    }
    node.as_object_mut()
}

fn extract(value: Value) -> Result<BundleConfig> {
    serde_json::from_value(value.clone()).map_err(|err| {
        // figment reports the key path of a type error; serde_json does not
        match Figment::from(Serialized::defaults(&value)).extract::<BundleConfig>() {
            Err(located) => figment_error(located),
            Ok(_) => ConfigError::InvalidValue {
                field: "config".to_string(),
                hint: Some(err.to_string()),
            },
        }
    })
}

fn figment_error(err: figment::Error) -> ConfigError {
    let field = if err.path.is_empty() {
        "config".to_string()
    } else {
        err.path.join(".")
    };

    ConfigError::InvalidValue {
        field,
        hint: Some(err.to_string()),
    }
}

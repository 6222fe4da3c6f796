//! The top-level bundle configuration record.
//!
//! A `BundleConfig` is built once, handed to the bundler and dropped. For file
//! discovery see the `discovery` module; for layered loading see `loader`.

use std::path::PathBuf;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::bundle::{ModuleFormat, OutputOptions, PluginSpec, SourceMapPolicy};
use crate::error::{ConfigError, Result as ConfigResult};
use crate::validation::{ConfigValidator, SchemaValidator};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct BundleConfig {
    /// Entry module to bundle
    pub input: PathBuf,

    /// Output descriptor
    pub output: OutputOptions,

    /// Plugins in application order; each sees what the previous one produced
    #[serde(default)]
    pub plugins: Vec<PluginSpec>,

    /// Module ids left out of the bundle
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub external: Vec<String>,
}

impl BundleConfig {
    /// Configuration with an empty plugin list.
    ///
    /// # Example
    ///
    /// ```
    /// use skein_config::{BundleConfig, ModuleFormat, OutputOptions, PluginSpec};
    ///
    /// let config = BundleConfig::new(
    ///     "dist/Delta.js",
    ///     OutputOptions::new("delta-rollup.js", ModuleFormat::Amd).with_name("quill-delta"),
    /// )
    /// .with_plugin(PluginSpec::commonjs())
    /// .with_plugin(PluginSpec::node_resolve());
    ///
    /// assert_eq!(config.plugin_names(), vec!["commonjs", "node-resolve"]);
    /// ```
    pub fn new(input: impl Into<PathBuf>, output: OutputOptions) -> Self {
        Self {
            input: input.into(),
            output,
            plugins: Vec::new(),
            external: Vec::new(),
        }
    }

    /// The configuration the project ships: an AMD bundle of `dist/Delta.js`
    /// with inline source maps, CommonJS interop then Node resolution.
    pub fn reference() -> Self {
        Self::new(
            "dist/Delta.js",
            OutputOptions::new("delta-rollup.js", ModuleFormat::Amd)
                .with_name("quill-delta")
                .with_sourcemap(SourceMapPolicy::Inline),
        )
        .with_plugins([PluginSpec::commonjs(), PluginSpec::node_resolve()])
    }

    /// Append a plugin after the ones already configured
    pub fn with_plugin(mut self, plugin: PluginSpec) -> Self {
        self.plugins.push(plugin);
        self
    }

    pub fn with_plugins(mut self, plugins: impl IntoIterator<Item = PluginSpec>) -> Self {
        self.plugins.extend(plugins);
        self
    }

    pub fn with_external(mut self, id: impl Into<String>) -> Self {
        self.external.push(id.into());
        self
    }

    /// Plugin names in the order the bundler applies them.
    pub fn plugin_names(&self) -> Vec<&str> {
        self.plugins.iter().map(|p| p.name.as_str()).collect()
    }

    /// Position of the first plugin with this name.
    pub fn plugin_position(&self, name: &str) -> Option<usize> {
        self.plugins.iter().position(|p| p.name == name)
    }

    /// Schema validation; no filesystem access.
    pub fn validate(&self) -> ConfigResult<()> {
        SchemaValidator.validate(self)
    }
}

impl BundleConfig {
    /// Create from serde_json::Value (for programmatic config)
    ///
    /// # Example
    ///
    /// ```
    /// use skein_config::{BundleConfig, ModuleFormat};
    /// use serde_json::json;
    ///
    /// let value = json!({
    ///     "input": "dist/Delta.js",
    ///     "output": { "file": "delta-rollup.js", "format": "amd", "name": "quill-delta" },
    ///     "plugins": ["commonjs", "nodeResolve"]
    /// });
    ///
    /// let config = BundleConfig::from_value(value).unwrap();
    /// assert_eq!(config.output.format, ModuleFormat::Amd);
    /// ```
    pub fn from_value(value: Value) -> ConfigResult<Self> {
        serde_json::from_value(value).map_err(|e| ConfigError::InvalidValue {
            field: "config".to_string(),
            hint: Some(e.to_string()),
        })
    }

    /// Convert to serde_json::Value
    pub fn to_value(&self) -> ConfigResult<Value> {
        serde_json::to_value(self).map_err(|e| ConfigError::InvalidValue {
            field: "config".to_string(),
            hint: Some(e.to_string()),
        })
    }

    pub fn from_json_str(content: &str) -> ConfigResult<Self> {
        Self::from_value(parse_json(content)?)
    }

    pub fn to_json_string(&self) -> ConfigResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| ConfigError::InvalidValue {
            field: "config".to_string(),
            hint: Some(e.to_string()),
        })
    }

    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        Self::from_value(parse_toml(content)?)
    }

    pub fn to_toml_string(&self) -> ConfigResult<String> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::InvalidValue {
            field: "config".to_string(),
            hint: Some(format!("cannot be expressed as TOML: {e}")),
        })
    }
}

/// Parse TOML straight into a JSON value so tables keep their file order.
pub(crate) fn parse_toml(content: &str) -> ConfigResult<Value> {
    toml::from_str(content).map_err(|e| ConfigError::Parse {
        source_kind: "TOML",
        message: e.to_string(),
    })
}

pub(crate) fn parse_json(content: &str) -> ConfigResult<Value> {
    serde_json::from_str(content).map_err(|e| ConfigError::Parse {
        source_kind: "JSON",
        message: e.to_string(),
    })
}

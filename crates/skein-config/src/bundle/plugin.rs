use std::borrow::Cow;
use std::path::PathBuf;

use schemars::{JsonSchema, Schema, SchemaGenerator, json_schema};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ConfigError, Result};

pub const COMMONJS: &str = "commonjs";
pub const NODE_RESOLVE: &str = "node-resolve";

/// A plugin invocation in the bundling pass.
///
/// Plugins are referenced by name with their options; nothing here executes
/// them. Serialized as a bare string when `options` is null, otherwise as
/// `{ name, options }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawPlugin", into = "RawPlugin")]
pub struct PluginSpec {
    /// Canonical plugin name
    pub name: String,

    /// Plugin-specific configuration forwarded to the plugin factory
    pub options: Value,
}

impl PluginSpec {
    /// Plugin invocation with default options.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: canonical_name(name.into()),
            options: Value::Null,
        }
    }

    pub fn with_options(name: impl Into<String>, options: Value) -> Self {
        Self {
            name: canonical_name(name.into()),
            options,
        }
    }

    /// CommonJS interop: converts CommonJS modules into ES modules.
    pub fn commonjs() -> Self {
        Self::new(COMMONJS)
    }

    /// Node module resolution: resolves bare specifiers to package entry points.
    pub fn node_resolve() -> Self {
        Self::new(NODE_RESOLVE)
    }

    pub fn is_commonjs(&self) -> bool {
        self.name == COMMONJS
    }

    pub fn is_node_resolve(&self) -> bool {
        self.name == NODE_RESOLVE
    }

    /// Whether this plugin is one of the collaborators with a typed option view.
    pub fn is_well_known(&self) -> bool {
        self.is_commonjs() || self.is_node_resolve()
    }

    /// Decode the options into a typed view; null options decode to `T::default()`.
    pub fn decode_options<T>(&self) -> Result<T>
    where
        T: DeserializeOwned + Default,
    {
        if self.options.is_null() {
            return Ok(T::default());
        }

        serde_json::from_value(self.options.clone()).map_err(|e| ConfigError::InvalidValue {
            field: format!("plugins.{}.options", self.name),
            hint: Some(e.to_string()),
        })
    }

    /// Typed options of a `commonjs` plugin, `None` for any other plugin.
    pub fn commonjs_options(&self) -> Result<Option<CommonJsOptions>> {
        if !self.is_commonjs() {
            return Ok(None);
        }
        self.decode_options().map(Some)
    }

    /// Typed options of a `node-resolve` plugin, `None` for any other plugin.
    pub fn node_resolve_options(&self) -> Result<Option<NodeResolveOptions>> {
        if !self.is_node_resolve() {
            return Ok(None);
        }
        self.decode_options().map(Some)
    }
}

impl TryFrom<CommonJsOptions> for PluginSpec {
    type Error = ConfigError;

    fn try_from(options: CommonJsOptions) -> Result<Self> {
        Ok(Self::with_options(COMMONJS, options_value(COMMONJS, &options)?))
    }
}

impl TryFrom<NodeResolveOptions> for PluginSpec {
    type Error = ConfigError;

    fn try_from(options: NodeResolveOptions) -> Result<Self> {
        Ok(Self::with_options(
            NODE_RESOLVE,
            options_value(NODE_RESOLVE, &options)?,
        ))
    }
}

fn options_value<T: Serialize>(name: &str, options: &T) -> Result<Value> {
    serde_json::to_value(options).map_err(|e| ConfigError::InvalidValue {
        field: format!("plugins.{name}.options"),
        hint: Some(e.to_string()),
    })
}

fn canonical_name(name: String) -> String {
    match name.as_str() {
        "nodeResolve" | "node_resolve" | "@rollup/plugin-node-resolve" => NODE_RESOLVE.to_string(),
        "commonJs" | "commonJS" | "@rollup/plugin-commonjs" => COMMONJS.to_string(),
        _ => name,
    }
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum RawPlugin {
    Bare(String),
    Configured {
        name: String,
        #[serde(default, skip_serializing_if = "Value::is_null")]
        options: Value,
    },
}

impl From<RawPlugin> for PluginSpec {
    fn from(raw: RawPlugin) -> Self {
        match raw {
            RawPlugin::Bare(name) => Self::new(name),
            RawPlugin::Configured { name, options } => Self::with_options(name, options),
        }
    }
}

impl From<PluginSpec> for RawPlugin {
    fn from(plugin: PluginSpec) -> Self {
        if plugin.options.is_null() {
            RawPlugin::Bare(plugin.name)
        } else {
            RawPlugin::Configured {
                name: plugin.name,
                options: plugin.options,
            }
        }
    }
}

impl JsonSchema for PluginSpec {
    fn schema_name() -> Cow<'static, str> {
        "PluginSpec".into()
    }

    fn json_schema(_generator: &mut SchemaGenerator) -> Schema {
        json_schema!({
            "description": "Plugin name, or a name with plugin-specific options",
            "anyOf": [
                { "type": "string", "minLength": 1 },
                {
                    "type": "object",
                    "required": ["name"],
                    "properties": {
                        "name": { "type": "string", "minLength": 1 },
                        "options": {}
                    }
                }
            ]
        })
    }
}

/// Options understood by the CommonJS interop plugin
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct CommonJsOptions {
    /// Glob patterns of modules to convert (empty: all)
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub include: Vec<String>,

    /// Glob patterns of modules to leave untouched
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub exclude: Vec<String>,

    /// Extensions treated as CommonJS sources
    pub extensions: Vec<String>,

    /// Leave references to `global` untouched
    pub ignore_global: bool,

    /// Convert modules that mix `require` with `import`/`export`
    pub transform_mixed_es_modules: bool,

    /// Emit source maps for converted modules
    pub sourcemap: bool,
}

impl Default for CommonJsOptions {
    fn default() -> Self {
        Self {
            include: Vec::new(),
            exclude: Vec::new(),
            extensions: vec![".js".to_string()],
            ignore_global: false,
            transform_mixed_es_modules: false,
            sourcemap: true,
        }
    }
}

/// Options understood by the Node module-resolution plugin
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct NodeResolveOptions {
    /// Extensions tried, in order, when a specifier has none
    pub extensions: Vec<String>,

    /// package.json fields consulted, in order, for the entry point
    pub main_fields: Vec<String>,

    /// Prefer the `browser` field and browser export conditions
    pub browser: bool,

    /// Prefer Node built-ins over same-named packages
    pub prefer_builtins: bool,

    /// Extra conditions for package `exports` maps
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub export_conditions: Vec<String>,

    /// Directory resolution starts from
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root_dir: Option<PathBuf>,
}

impl Default for NodeResolveOptions {
    fn default() -> Self {
        Self {
            extensions: [".mjs", ".js", ".json", ".node"]
                .into_iter()
                .map(String::from)
                .collect(),
            main_fields: vec!["module".to_string(), "main".to_string()],
            browser: false,
            prefer_builtins: true,
            export_conditions: Vec::new(),
            root_dir: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn bare_plugin_serializes_as_string() {
        let value = serde_json::to_value(PluginSpec::commonjs()).unwrap();
        assert_eq!(value, json!("commonjs"));
    }

    #[test]
    fn configured_plugin_serializes_as_object() {
        let plugin = PluginSpec::with_options("node-resolve", json!({ "browser": true }));
        let value = serde_json::to_value(&plugin).unwrap();
        assert_eq!(
            value,
            json!({ "name": "node-resolve", "options": { "browser": true } })
        );
    }

    #[test]
    fn camel_case_name_is_canonicalized() {
        let plugin: PluginSpec = serde_json::from_value(json!("nodeResolve")).unwrap();
        assert_eq!(plugin, PluginSpec::node_resolve());

        let plugin: PluginSpec =
            serde_json::from_value(json!({ "name": "@rollup/plugin-commonjs" })).unwrap();
        assert!(plugin.is_commonjs());
        assert!(plugin.options.is_null());
    }

    #[test]
    fn unknown_plugins_keep_their_name() {
        let plugin: PluginSpec = serde_json::from_value(json!("terser")).unwrap();
        assert_eq!(plugin.name, "terser");
        assert!(!plugin.is_well_known());
        assert_eq!(plugin.commonjs_options().unwrap(), None);
    }

    #[test]
    fn null_options_decode_to_defaults() {
        let options = PluginSpec::node_resolve()
            .node_resolve_options()
            .unwrap()
            .unwrap();
        assert_eq!(options, NodeResolveOptions::default());
        assert_eq!(options.main_fields, vec!["module", "main"]);
    }

    #[test]
    fn partial_options_keep_remaining_defaults() {
        let plugin = PluginSpec::with_options("commonjs", json!({ "ignoreGlobal": true }));
        let options = plugin.commonjs_options().unwrap().unwrap();
        assert!(options.ignore_global);
        assert_eq!(options.extensions, vec![".js"]);
    }

    #[test]
    fn unknown_option_key_is_rejected() {
        let plugin = PluginSpec::with_options("commonjs", json!({ "requireReturnDefault": 1 }));
        let err = plugin.commonjs_options().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
    }

    #[test]
    fn typed_options_convert_into_plugin() {
        let plugin = PluginSpec::try_from(NodeResolveOptions {
            browser: true,
            ..Default::default()
        })
        .unwrap();
        assert!(plugin.is_node_resolve());
        assert_eq!(plugin.options["browser"], json!(true));
    }

    #[test]
    fn typed_options_decode_back_unchanged() {
        let options = CommonJsOptions {
            ignore_global: true,
            exclude: vec!["node_modules/fast-diff/**".to_string()],
            ..Default::default()
        };
        let plugin = PluginSpec::try_from(options.clone()).unwrap();
        assert!(!plugin.options.is_null());
        assert_eq!(plugin.commonjs_options().unwrap(), Some(options));
    }
}

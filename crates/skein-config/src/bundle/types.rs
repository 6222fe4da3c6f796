use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use schemars::{JsonSchema, Schema, SchemaGenerator, json_schema};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ConfigError;

/// Module format of the emitted bundle
///
/// Serialized in canonical lowercase. Parsing goes through [`FromStr`], so
/// aliases (`commonjs`, `esm`, `module`, `systemjs`) and any letter case are
/// accepted from files and environment overrides alike.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ModuleFormat {
    /// Asynchronous module definition (`define(id, deps, factory)`)
    Amd,
    /// CommonJS (`require` / `module.exports`)
    Cjs,
    /// ES module (default)
    #[default]
    Es,
    /// Immediately invoked function expression assigning a global
    Iife,
    /// SystemJS register format
    System,
    /// Universal module definition (AMD, CommonJS and global in one)
    Umd,
}

impl ModuleFormat {
    pub const ALL: [ModuleFormat; 6] = [
        Self::Amd,
        Self::Cjs,
        Self::Es,
        Self::Iife,
        Self::System,
        Self::Umd,
    ];

    /// Formats that expose the bundle under a single module or global name.
    #[inline]
    pub fn requires_name(self) -> bool {
        matches!(self, Self::Amd | Self::Iife | Self::Umd)
    }

    /// Formats where `output.name` is accepted but has no effect.
    #[inline]
    pub fn ignores_name(self) -> bool {
        matches!(self, Self::Es | Self::Cjs)
    }

    /// Formats whose name is a global variable and must be a JS identifier path.
    #[inline]
    pub fn name_is_global(self) -> bool {
        matches!(self, Self::Iife | Self::Umd)
    }

    /// Formats that read `output.globals` for external imports.
    #[inline]
    pub fn uses_globals(self) -> bool {
        matches!(self, Self::Iife | Self::Umd)
    }

    /// Formats that emit a `define` call.
    #[inline]
    pub fn uses_amd_options(self) -> bool {
        matches!(self, Self::Amd | Self::Umd)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Amd => "amd",
            Self::Cjs => "cjs",
            Self::Es => "es",
            Self::Iife => "iife",
            Self::System => "system",
            Self::Umd => "umd",
        }
    }
}

impl fmt::Display for ModuleFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModuleFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "amd" => Ok(Self::Amd),
            "cjs" | "commonjs" => Ok(Self::Cjs),
            "es" | "esm" | "module" => Ok(Self::Es),
            "iife" => Ok(Self::Iife),
            "system" | "systemjs" => Ok(Self::System),
            "umd" => Ok(Self::Umd),
            _ => Err(ConfigError::UnsupportedFormat(format!("output format '{s}'"))),
        }
    }
}

impl<'de> Deserialize<'de> for ModuleFormat {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        tag.parse().map_err(serde::de::Error::custom)
    }
}

/// Source map policy for the emitted bundle.
///
/// Serialized the way bundler configs spell it: `false`, `true`, `"inline"`
/// or `"hidden"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SourceMapPolicy {
    /// No source map
    #[default]
    None,
    /// External `.map` file referenced from the bundle
    External,
    /// Base64 data URL appended to the bundle
    Inline,
    /// External `.map` file without a reference comment
    Hidden,
}

impl SourceMapPolicy {
    #[inline]
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Whether a separate `.map` file is written next to the bundle.
    #[inline]
    pub fn writes_map_file(&self) -> bool {
        matches!(self, Self::External | Self::Hidden)
    }
}

impl fmt::Display for SourceMapPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("none"),
            Self::External => f.write_str("external"),
            Self::Inline => f.write_str("inline"),
            Self::Hidden => f.write_str("hidden"),
        }
    }
}

impl FromStr for SourceMapPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "false" | "none" => Ok(Self::None),
            "true" | "external" | "file" => Ok(Self::External),
            "inline" => Ok(Self::Inline),
            "hidden" => Ok(Self::Hidden),
            _ => Err(ConfigError::InvalidValue {
                field: "output.sourcemap".to_string(),
                hint: Some(format!(
                    "expected true, false, \"inline\" or \"hidden\" (got '{s}')"
                )),
            }),
        }
    }
}

impl Serialize for SourceMapPolicy {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::None => serializer.serialize_bool(false),
            Self::External => serializer.serialize_bool(true),
            Self::Inline => serializer.serialize_str("inline"),
            Self::Hidden => serializer.serialize_str("hidden"),
        }
    }
}

impl<'de> Deserialize<'de> for SourceMapPolicy {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Flag(bool),
            Mode(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Flag(true) => Ok(Self::External),
            Raw::Flag(false) => Ok(Self::None),
            Raw::Mode(mode) => mode.parse().map_err(serde::de::Error::custom),
        }
    }
}

impl JsonSchema for SourceMapPolicy {
    fn schema_name() -> Cow<'static, str> {
        "SourceMapPolicy".into()
    }

    fn json_schema(_generator: &mut SchemaGenerator) -> Schema {
        json_schema!({
            "description": "false/absent: none, true: external .map file, \"inline\": data URL, \"hidden\": .map without reference",
            "anyOf": [
                { "type": "boolean" },
                { "type": "string", "enum": ["inline", "hidden", "external", "none"] }
            ]
        })
    }
}

/// Export mode for formats that expose a single value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ExportsMode {
    /// Pick `default` or `named` from the entry module's exports
    #[default]
    Auto,
    /// Expose the default export as the module value
    Default,
    /// Expose all exports on a namespace object
    Named,
    /// Entry module has no exports
    None,
}

/// Options specific to the `define` call of AMD and UMD output
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct AmdOptions {
    /// Module id passed as the first argument to `define`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Function name to use instead of `define`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub define: Option<String>,
}

//! Output descriptor and plugin types of a bundle configuration.

mod plugin;
mod types;

use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub use plugin::{COMMONJS, CommonJsOptions, NODE_RESOLVE, NodeResolveOptions, PluginSpec};
pub use types::{AmdOptions, ExportsMode, ModuleFormat, SourceMapPolicy};

/// Where and how the bundle is written
///
/// Unknown keys are rejected so a misspelled option (`sourceMap`) cannot
/// silently fall back to its default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct OutputOptions {
    /// Destination file for the bundled output
    pub file: PathBuf,

    /// Module format of the output
    #[serde(default)]
    pub format: ModuleFormat,

    /// Module name (AMD) or global variable name (IIFE/UMD)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Source map policy
    #[serde(default, skip_serializing_if = "SourceMapPolicy::is_none")]
    pub sourcemap: SourceMapPolicy,

    /// External module id → global variable name, for IIFE/UMD output
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub globals: IndexMap<String, String>,

    /// Text prepended to the bundle
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub banner: Option<String>,

    /// Text appended to the bundle
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub footer: Option<String>,

    /// Export mode of the entry module
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exports: Option<ExportsMode>,

    /// `define` call options for AMD/UMD output
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amd: Option<AmdOptions>,
}

impl OutputOptions {
    /// Output descriptor with no name and no source map.
    ///
    /// # Example
    ///
    /// ```
    /// use skein_config::{ModuleFormat, OutputOptions, SourceMapPolicy};
    ///
    /// let output = OutputOptions::new("delta-rollup.js", ModuleFormat::Amd)
    ///     .with_name("quill-delta")
    ///     .with_sourcemap(SourceMapPolicy::Inline);
    ///
    /// assert_eq!(output.name.as_deref(), Some("quill-delta"));
    /// ```
    pub fn new(file: impl Into<PathBuf>, format: ModuleFormat) -> Self {
        Self {
            file: file.into(),
            format,
            name: None,
            sourcemap: SourceMapPolicy::None,
            globals: IndexMap::new(),
            banner: None,
            footer: None,
            exports: None,
            amd: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_sourcemap(mut self, sourcemap: SourceMapPolicy) -> Self {
        self.sourcemap = sourcemap;
        self
    }

    /// Map an external module id to the global it is read from
    pub fn with_global(mut self, id: impl Into<String>, global: impl Into<String>) -> Self {
        self.globals.insert(id.into(), global.into());
        self
    }

    pub fn with_banner(mut self, banner: impl Into<String>) -> Self {
        self.banner = Some(banner.into());
        self
    }

    pub fn with_footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = Some(footer.into());
        self
    }

    pub fn with_exports(mut self, exports: ExportsMode) -> Self {
        self.exports = Some(exports);
        self
    }

    pub fn with_amd(mut self, amd: AmdOptions) -> Self {
        self.amd = Some(amd);
        self
    }

    /// Path of the external source map, when the policy writes one.
    pub fn sourcemap_file(&self) -> Option<PathBuf> {
        if !self.sourcemap.writes_map_file() {
            return None;
        }
        let mut name = self.file.clone().into_os_string();
        name.push(".map");
        Some(PathBuf::from(name))
    }
}

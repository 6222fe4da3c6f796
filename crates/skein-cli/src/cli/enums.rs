use clap::ValueEnum;
use skein_config::{ModuleFormat, SourceMapPolicy};

/// Module format of the bundle
#[derive(Copy, Clone, PartialEq, Eq, Debug, ValueEnum)]
pub enum Format {
    /// Asynchronous module definition; requires --name
    #[value(name = "amd")]
    Amd,

    /// CommonJS (require/module.exports)
    #[value(name = "cjs", alias = "commonjs")]
    Cjs,

    /// ES module (import/export syntax)
    #[value(name = "es", alias = "esm")]
    Es,

    /// Immediately Invoked Function Expression; requires --name
    #[value(name = "iife")]
    Iife,

    /// SystemJS register format
    #[value(name = "system")]
    System,

    /// Universal module definition; requires --name
    #[value(name = "umd")]
    Umd,
}

impl From<Format> for ModuleFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Amd => ModuleFormat::Amd,
            Format::Cjs => ModuleFormat::Cjs,
            Format::Es => ModuleFormat::Es,
            Format::Iife => ModuleFormat::Iife,
            Format::System => ModuleFormat::System,
            Format::Umd => ModuleFormat::Umd,
        }
    }
}

/// Source map generation mode
#[derive(Copy, Clone, PartialEq, Eq, Debug, ValueEnum)]
pub enum SourceMapMode {
    /// No source map
    #[value(name = "none", alias = "false")]
    None,

    /// External .map file referenced from the bundle
    #[value(name = "external", alias = "true")]
    External,

    /// Source map embedded in the bundle as a data URL
    #[value(name = "inline")]
    Inline,

    /// External .map file without a sourceMappingURL comment
    #[value(name = "hidden")]
    Hidden,
}

impl From<SourceMapMode> for SourceMapPolicy {
    fn from(mode: SourceMapMode) -> Self {
        match mode {
            SourceMapMode::None => SourceMapPolicy::None,
            SourceMapMode::External => SourceMapPolicy::External,
            SourceMapMode::Inline => SourceMapPolicy::Inline,
            SourceMapMode::Hidden => SourceMapPolicy::Hidden,
        }
    }
}

/// Serialization syntax for printed or written configurations
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default, ValueEnum)]
pub enum Syntax {
    /// TOML (skein.toml)
    #[default]
    #[value(name = "toml")]
    Toml,

    /// JSON (skein.config.json)
    #[value(name = "json")]
    Json,
}

impl Syntax {
    /// File name `init` writes for this syntax
    pub fn file_name(self) -> &'static str {
        match self {
            Syntax::Toml => skein_config::discovery::TOML_CONFIG,
            Syntax::Json => skein_config::discovery::JSON_CONFIG,
        }
    }
}

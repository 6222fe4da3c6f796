use clap::{Args, Subcommand};
use std::path::PathBuf;

use skein_config::ConfigLoader;

use crate::cli::enums::*;

/// Available skein subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate a configuration
    ///
    /// Loads the configuration (file plus SKEIN_* environment overrides),
    /// checks format/name consistency and plugin options, and verifies that
    /// the entry module exists.
    Check(CheckArgs),

    /// Print the resolved configuration
    ///
    /// Re-serializes the configuration after environment overrides, in TOML
    /// or JSON.
    Print(PrintArgs),

    /// Write a new configuration file
    ///
    /// Without flags this writes the project's reference configuration: an
    /// AMD bundle of dist/Delta.js with inline source maps, CommonJS interop
    /// then Node resolution.
    Init(InitArgs),

    /// Print the JSON Schema of the configuration
    Schema(SchemaArgs),
}

/// Arguments shared by commands that load a configuration
#[derive(Args, Debug, Clone)]
pub struct LoadArgs {
    /// Path to the configuration file
    ///
    /// If not provided, searches for skein.toml, skein.config.json, then a
    /// 'skein' field in package.json.
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Project root used for discovery and the entry check
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub root: PathBuf,

    /// Ignore SKEIN_* environment overrides
    #[arg(long)]
    pub no_env: bool,
}

impl LoadArgs {
    /// Loader honoring `--config`, `--root` and `--no-env`.
    pub fn loader(&self) -> ConfigLoader {
        let mut loader = ConfigLoader::new().root(&self.root);
        if let Some(path) = &self.config {
            loader = loader.file(path);
        }
        if self.no_env {
            loader = loader.without_env();
        }
        loader
    }
}

/// Arguments for the check command
#[derive(Args, Debug)]
pub struct CheckArgs {
    #[command(flatten)]
    pub load: LoadArgs,

    /// Skip filesystem checks (entry module existence)
    ///
    /// Useful when the entry is produced by an earlier build step that has
    /// not run yet.
    #[arg(long)]
    pub schema_only: bool,
}

/// Arguments for the print command
#[derive(Args, Debug)]
pub struct PrintArgs {
    #[command(flatten)]
    pub load: LoadArgs,

    /// Output syntax
    #[arg(long = "as", value_enum, default_value = "toml", value_name = "SYNTAX")]
    pub syntax: Syntax,
}

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Entry module to bundle
    #[arg(short, long, default_value = "dist/Delta.js", value_name = "PATH")]
    pub input: PathBuf,

    /// Destination file for the bundle
    #[arg(short = 'o', long, default_value = "delta-rollup.js", value_name = "FILE")]
    pub file: PathBuf,

    /// Module format of the bundle
    #[arg(short, long, value_enum, default_value = "amd")]
    pub format: Format,

    /// Module name (AMD) or global variable name (IIFE/UMD)
    #[arg(short, long, default_value = "quill-delta", value_name = "NAME")]
    pub name: Option<String>,

    /// Do not set a module name
    #[arg(long, conflicts_with = "name")]
    pub no_name: bool,

    /// Source map policy
    #[arg(short, long, value_enum, default_value = "inline")]
    pub sourcemap: SourceMapMode,

    /// Plugins in application order (repeatable)
    ///
    /// Defaults to commonjs then node-resolve.
    #[arg(
        short,
        long = "plugin",
        value_name = "NAME",
        default_values_t = [String::from("commonjs"), String::from("node-resolve")]
    )]
    pub plugins: Vec<String>,

    /// Write no plugins
    #[arg(long, conflicts_with = "plugins")]
    pub no_plugins: bool,

    /// Module ids left out of the bundle (repeatable)
    #[arg(short, long, value_name = "ID")]
    pub external: Vec<String>,

    /// File syntax; decides between skein.toml and skein.config.json
    #[arg(long = "as", value_enum, default_value = "toml", value_name = "SYNTAX")]
    pub syntax: Syntax,

    /// Directory to write the configuration into
    #[arg(long, default_value = ".", value_name = "DIR")]
    pub dir: PathBuf,

    /// Overwrite an existing configuration file
    #[arg(long)]
    pub force: bool,
}

/// Arguments for the schema command
#[derive(Args, Debug)]
pub struct SchemaArgs {
    /// Write the schema to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

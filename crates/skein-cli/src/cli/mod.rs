//! Command-line interface definition for skein.
//!
//! # Command Structure
//!
//! - `skein check` - Load and validate a configuration
//! - `skein print` - Print the resolved configuration
//! - `skein init` - Write a configuration file from flags
//! - `skein schema` - Print the JSON Schema of the configuration

mod commands;
pub mod enums;

use clap::Parser;

pub use commands::{CheckArgs, Command, InitArgs, LoadArgs, PrintArgs, SchemaArgs};
pub use enums::*;

/// skein - bundle configuration checker
#[derive(Parser, Debug)]
#[command(
    name = "skein",
    version,
    about = "Check, print and scaffold bundle configurations",
    long_about = "skein loads a bundler configuration (entry module, output descriptor and\n\
                  plugin sequence), applies SKEIN_* environment overrides, and validates it\n\
                  before any bundler runs. Invalid configurations exit with a non-zero status."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

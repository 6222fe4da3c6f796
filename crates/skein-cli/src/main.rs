//! skein CLI - check, print and scaffold bundle configurations.
//!
//! This is the main entry point for the skein CLI. It handles command-line
//! argument parsing, logging initialization, and command dispatch.

use clap::Parser;
use miette::Result;
use skein_cli::{cli, commands, error, logger, ui};

fn main() -> Result<()> {
    // Parse command-line arguments
    let args = cli::Cli::parse();

    // Initialize logging and colors based on global flags
    logger::init_logger(args.verbose, args.quiet, args.no_color);
    ui::init_colors(args.no_color);

    // Execute the appropriate command
    let result = match args.command {
        cli::Command::Check(check_args) => commands::check_execute(check_args),
        cli::Command::Print(print_args) => commands::print_execute(print_args),
        cli::Command::Init(init_args) => commands::init_execute(init_args),
        cli::Command::Schema(schema_args) => commands::schema_execute(schema_args),
    };

    // Convert CLI errors to miette diagnostics; a returned Err exits non-zero
    result.map_err(error::cli_error_to_miette)
}

//! Miette diagnostic conversion for CLI errors.

use crate::error::{CliError, ConfigError};
use miette::Report;

/// Convert CliError to miette Report
pub fn cli_error_to_miette(err: CliError) -> Report {
    match err {
        CliError::Config(e) => config_error_to_miette(e),
        _ => miette::miette!("{}", err),
    }
}

/// Convert ConfigError to miette Report, carrying its hint as help text
pub fn config_error_to_miette(err: ConfigError) -> Report {
    match err.hint().map(str::to_owned) {
        Some(hint) => miette::miette!(help = hint, "Configuration error: {}", err),
        None => miette::miette!("Configuration error: {}", err),
    }
}

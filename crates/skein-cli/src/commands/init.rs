//! Init command implementation.
//!
//! Writes a configuration file built from command-line flags. The defaults
//! reproduce the reference project configuration.

use crate::cli::{InitArgs, Syntax};
use crate::commands::print::render;
use crate::error::{CliError, Result, ResultExt};
use crate::ui;
use skein_config::{BundleConfig, OutputOptions, PluginSpec};
use std::fs;
use tracing::debug;

/// Execute the init command.
///
/// # Errors
///
/// Returns an error if the flags describe an invalid configuration or the
/// target file exists and `--force` was not given.
pub fn execute(args: InitArgs) -> Result<()> {
    let config = build_config(&args);
    config.validate()?;

    let path = args.dir.join(args.syntax.file_name());
    if path.exists() && !args.force {
        return Err(CliError::AlreadyExists(path));
    }

    let contents = render(&config, args.syntax)?;
    fs::create_dir_all(&args.dir).with_path(&args.dir)?;
    fs::write(&path, contents).with_path(&path)?;
    debug!(path = %path.display(), "wrote configuration");

    ui::success(&format!("Created {}", path.display()));
    if args.syntax == Syntax::Toml {
        ui::info("Run 'skein check' once the entry module has been built");
    }
    Ok(())
}

/// Assemble the configuration described by the flags.
pub fn build_config(args: &InitArgs) -> BundleConfig {
    let mut output = OutputOptions::new(&args.file, args.format.into())
        .with_sourcemap(args.sourcemap.into());
    if let Some(name) = args.name.as_ref().filter(|_| !args.no_name) {
        output = output.with_name(name);
    }

    let plugins = if args.no_plugins {
        Vec::new()
    } else {
        args.plugins.iter().map(PluginSpec::new).collect()
    };

    args.external.iter().fold(
        BundleConfig::new(&args.input, output).with_plugins(plugins),
        |config, id| config.with_external(id),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Command};
    use clap::Parser;
    use skein_config::{ConfigError, ModuleFormat, load_file};
    use tempfile::TempDir;

    fn init_args(extra: &[&str]) -> InitArgs {
        let argv = ["skein", "init"].into_iter().chain(extra.iter().copied());
        match Cli::parse_from(argv).command {
            Command::Init(args) => args,
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_defaults_build_reference_config() {
        assert_eq!(build_config(&init_args(&[])), BundleConfig::reference());
    }

    #[test]
    fn test_no_plugins_and_externals() {
        let config = build_config(&init_args(&["--no-plugins", "-e", "lodash", "-e", "fast-diff"]));
        assert!(config.plugins.is_empty());
        assert_eq!(config.external, vec!["lodash", "fast-diff"]);
    }

    #[test]
    fn test_plugin_aliases_are_canonical() {
        let config = build_config(&init_args(&["-p", "nodeResolve", "-p", "commonjs"]));
        assert_eq!(config.plugin_names(), vec!["node-resolve", "commonjs"]);
    }

    #[test]
    fn test_writes_loadable_toml() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().to_str().unwrap();
        execute(init_args(&["--dir", dir])).unwrap();

        let config = load_file(&temp.path().join("skein.toml")).unwrap();
        assert_eq!(config, BundleConfig::reference());
    }

    #[test]
    fn test_writes_json_into_new_directory() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("pkg");
        let dir = nested.to_str().unwrap();
        execute(init_args(&["--dir", dir, "--as", "json", "-f", "es", "--no-name"])).unwrap();

        let config = load_file(&nested.join("skein.config.json")).unwrap();
        assert_eq!(config.output.format, ModuleFormat::Es);
        assert_eq!(config.output.name, None);
    }

    #[test]
    fn test_refuses_to_overwrite() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().to_str().unwrap();
        execute(init_args(&["--dir", dir])).unwrap();

        let err = execute(init_args(&["--dir", dir])).unwrap_err();
        assert!(matches!(err, CliError::AlreadyExists(_)));
        assert!(execute(init_args(&["--dir", dir, "--force"])).is_ok());
    }

    #[test]
    fn test_invalid_flags_write_nothing() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().to_str().unwrap();
        let err = execute(init_args(&["--dir", dir, "--no-name"])).unwrap_err();

        assert!(matches!(err, CliError::Config(ConfigError::MissingField { .. })));
        assert!(!temp.path().join("skein.toml").exists());
    }
}

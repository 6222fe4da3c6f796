//! Check command implementation.
//!
//! Loads the configuration and validates it without running a bundler.

use crate::cli::CheckArgs;
use crate::error::Result;
use crate::ui;
use skein_config::{BundleConfig, ConfigValidator, FsValidator, SchemaValidator};
use tracing::{debug, info};

/// Execute the check command.
///
/// # Validation Steps
///
/// 1. Locate and load the configuration (file plus environment overrides)
/// 2. Validate format/name consistency, globals and plugin options
/// 3. Check the entry module exists under `--root` (unless `--schema-only`)
///
/// # Errors
///
/// Returns the first configuration error found.
pub fn execute(args: CheckArgs) -> Result<()> {
    let loader = args.load.loader();
    let path = loader.resolve_file()?;
    ui::info(&format!("Checking {}...", path.display()));

    let config = loader.load()?;
    debug!(?config, "resolved configuration");

    validate(&config, &args)?;
    report(&config);

    ui::success("Configuration is valid");
    Ok(())
}

fn validate(config: &BundleConfig, args: &CheckArgs) -> Result<()> {
    if args.schema_only {
        SchemaValidator.validate(config)?;
        ui::warning(&format!(
            "Skipped the entry check for {}",
            config.input.display()
        ));
    } else {
        FsValidator::new(&args.load.root).validate(config)?;
    }
    Ok(())
}

fn report(config: &BundleConfig) {
    let output = &config.output;
    info!(
        input = %config.input.display(),
        file = %output.file.display(),
        format = %output.format,
        sourcemap = %output.sourcemap,
        "bundle"
    );

    if config.plugins.is_empty() {
        ui::info("No plugins configured");
    } else {
        ui::info(&format!("Plugins: {}", config.plugin_names().join(" -> ")));
    }

    if let Some(map) = output.sourcemap_file() {
        ui::info(&format!("Source map: {}", map.display()));
    }
}

//! Schema command implementation.

use crate::cli::SchemaArgs;
use crate::error::{Result, ResultExt};
use crate::ui;
use skein_config::BundleConfig;

/// Execute the schema command.
///
/// Prints the JSON Schema of [`BundleConfig`], for editor completion of
/// `skein.config.json`.
pub fn execute(args: SchemaArgs) -> Result<()> {
    let rendered = render()?;

    match args.output {
        Some(path) => {
            std::fs::write(&path, rendered).with_path(&path)?;
            ui::success(&format!("Wrote schema to {}", path.display()));
        }
        None => println!("{rendered}"),
    }
    Ok(())
}

fn render() -> Result<String> {
    let schema = schemars::schema_for!(BundleConfig);
    Ok(serde_json::to_string_pretty(&schema)?)
}

//! Print command implementation.

use crate::cli::{PrintArgs, Syntax};
use crate::error::Result;
use skein_config::BundleConfig;

/// Execute the print command.
///
/// Writes the resolved configuration (after environment overrides) to
/// stdout. The configuration is not validated; use `skein check` for that.
pub fn execute(args: PrintArgs) -> Result<()> {
    let config = args.load.loader().load()?;
    let rendered = render(&config, args.syntax)?;
    print!("{rendered}");
    Ok(())
}

pub(crate) fn render(config: &BundleConfig, syntax: Syntax) -> Result<String> {
    let mut rendered = match syntax {
        Syntax::Toml => config.to_toml_string()?,
        Syntax::Json => config.to_json_string()?,
    };
    if !rendered.ends_with('\n') {
        rendered.push('\n');
    }
    Ok(rendered)
}

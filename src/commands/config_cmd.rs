//! Implementation of the `promptcraft config` command.
//!
//! Without flags, prints the effective configuration as YAML. With `--init`,
//! writes a default `.promptcraft.yaml` to the current directory.

use crate::cli::ConfigArgs;
use crate::config::{Config, DEFAULT_CONFIG_FILE};
use crate::error::{PromptcraftError, Result};
use std::path::Path;

const CONFIG_HEADER: &str = "# promptcraft configuration\n\
# Command-line flags override these values.\n\
# Tones: enthusiastic, balanced, reserved\n\
# Specificity: detailed, balanced, concise\n";

/// Write a default config file to `path`.
///
/// Refuses to overwrite an existing file unless `force` is set.
fn init_config_at(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(PromptcraftError::UserError(format!(
            "config file '{}' already exists.\n\n\
             To overwrite it with defaults, run:\n  promptcraft config --init --force",
            path.display()
        )));
    }

    let yaml = Config::default().to_yaml()?;
    std::fs::write(path, format!("{}{}", CONFIG_HEADER, yaml)).map_err(|e| {
        PromptcraftError::IoError(format!(
            "failed to write config file '{}': {}",
            path.display(),
            e
        ))
    })
}

/// Render the effective configuration with a comment naming its source.
fn describe_config(config_path: Option<&Path>) -> Result<String> {
    let loaded = Config::resolve(config_path)?;
    let source = match &loaded.source {
        Some(path) => format!("# source: {}\n", path.display()),
        None => format!("# source: defaults (no {} found)\n", DEFAULT_CONFIG_FILE),
    };
    Ok(format!("{}{}", source, loaded.config.to_yaml()?))
}

/// Execute the `promptcraft config` command.
pub fn cmd_config(args: ConfigArgs, config_path: Option<&Path>) -> Result<()> {
    if args.init {
        let path = config_path.unwrap_or(Path::new(DEFAULT_CONFIG_FILE));
        init_config_at(path, args.force)?;
        println!("Wrote default configuration to {}", path.display());
        return Ok(());
    }

    print!("{}", describe_config(config_path)?);
    Ok(())
}

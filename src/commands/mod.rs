//! Command implementations for promptcraft.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations.

mod compose;
mod config_cmd;
mod templates;

pub use compose::SUCCESS_MESSAGE;

use crate::cli::{Cli, Command};
use crate::error::Result;

/// Dispatch a parsed command line to its implementation.
pub fn dispatch(cli: Cli) -> Result<()> {
    let config_path = cli.config.as_deref();
    match cli.command {
        Command::Compose(args) => compose::cmd_compose(args, config_path),
        Command::Templates(args) => templates::cmd_templates(args),
        Command::Config(args) => config_cmd::cmd_config(args, config_path),
    }
}

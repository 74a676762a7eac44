//! CLI argument parsing for promptcraft.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Promptcraft: expand a raw prompt into a structured, multi-section LLM prompt.
///
/// The composed prompt combines a tone (enthusiastic, balanced, reserved),
/// a specificity level (detailed, balanced, concise), and an optional expert
/// persona with fixed response requirements and quality checks.
#[derive(Parser, Debug)]
#[command(name = "promptcraft")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to a config file (default: ./.promptcraft.yaml if present).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Available commands for promptcraft.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compose a structured prompt.
    ///
    /// Reads the raw prompt from the argument, --file, or stdin and writes
    /// the composed prompt to stdout (or --output).
    Compose(ComposeArgs),

    /// List the tone and specificity templates.
    Templates(TemplatesArgs),

    /// Show the effective configuration, or write a default config file.
    Config(ConfigArgs),
}

/// Arguments for the `compose` command.
#[derive(Parser, Debug, Default)]
pub struct ComposeArgs {
    /// Raw prompt text. Used verbatim.
    #[arg(conflicts_with = "file")]
    pub prompt: Option<String>,

    /// Read the raw prompt from a file ("-" for stdin).
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Tone (enthusiastic, balanced, reserved). Unknown values use balanced.
    #[arg(short, long)]
    pub tone: Option<String>,

    /// Specificity (detailed, balanced, concise). Unknown values use balanced.
    #[arg(short, long)]
    pub specificity: Option<String>,

    /// Frame the response as coming from a subject matter expert.
    #[arg(long, conflicts_with = "no_expert")]
    pub expert: bool,

    /// Disable expert mode even if the config enables it.
    #[arg(long)]
    pub no_expert: bool,

    /// Output format (text, json).
    #[arg(long)]
    pub format: Option<String>,

    /// Write the composed prompt to a file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Suppress the success notice and unknown-tag warnings on stderr.
    #[arg(short, long)]
    pub quiet: bool,
}

/// Arguments for the `templates` command.
#[derive(Parser, Debug, Default)]
pub struct TemplatesArgs {
    /// Output format (text, json).
    #[arg(long)]
    pub format: Option<String>,
}

/// Arguments for the `config` command.
#[derive(Parser, Debug, Default)]
pub struct ConfigArgs {
    /// Write a default .promptcraft.yaml to the current directory.
    #[arg(long)]
    pub init: bool,

    /// Overwrite an existing config file (use with --init).
    #[arg(long, requires = "init")]
    pub force: bool,
}

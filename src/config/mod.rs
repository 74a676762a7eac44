//! Configuration model for promptcraft.
//!
//! This module defines the Config struct that represents `.promptcraft.yaml`.
//! It supports forward-compatible YAML parsing (unknown fields are preserved),
//! sensible defaults for every field, and validation of config values.

mod model;
mod operations;
pub mod types;


// Re-export public API
pub use model::Config;
pub use operations::{DEFAULT_CONFIG_FILE, LoadedConfig};
pub use types::OutputFormat;

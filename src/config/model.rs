//! Config struct definition and default implementation.

use super::types::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Configuration for promptcraft.
///
/// This struct represents the contents of `.promptcraft.yaml`. Command-line
/// flags override every value here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // =========================================================================
    // Composition defaults
    // =========================================================================
    /// Tone tag used when `--tone` is not given. Unknown tags fall back to
    /// `balanced` at composition time, same as on the command line.
    #[serde(default = "default_tone")]
    pub default_tone: String,

    /// Specificity tag used when `--specificity` is not given.
    #[serde(default = "default_specificity")]
    pub default_specificity: String,

    /// Whether expert mode is on unless `--no-expert` is given.
    #[serde(default)]
    pub expert_mode: bool,

    // =========================================================================
    // Output settings
    // =========================================================================
    /// Output format used when `--format` is not given.
    #[serde(default)]
    pub output_format: OutputFormat,

    /// Print the success notice to stderr after each composition.
    #[serde(default = "default_true")]
    pub show_success: bool,

    /// Warn on stderr when a tone or specificity tag falls back to `balanced`.
    #[serde(default = "default_true")]
    pub warn_unknown_tags: bool,

    // =========================================================================
    // Event log
    // =========================================================================
    /// NDJSON file that receives one `compose` event per composition.
    /// Relative paths are resolved against the working directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_log: Option<PathBuf>,

    /// Unknown fields preserved for forward compatibility.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_yaml::Value>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_tone: default_tone(),
            default_specificity: default_specificity(),
            expert_mode: false,
            output_format: OutputFormat::default(),
            show_success: default_true(),
            warn_unknown_tags: default_true(),
            event_log: None,
            extra: BTreeMap::new(),
        }
    }
}

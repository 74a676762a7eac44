//! Configuration types and defaults for promptcraft.

use serde::{Deserialize, Serialize};

/// How the composed prompt is written out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// The rendered document, exactly as it would be sent to a model (default).
    #[default]
    Text,
    /// A JSON object with the resolved templates, sections, and rendered text.
    Json,
}

impl OutputFormat {
    /// Parse an output format from a string.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "text" => Some(Self::Text),
            "json" => Some(Self::Json),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
        }
    }
}

// Default value functions for serde
pub(crate) fn default_tone() -> String {
    "balanced".to_string()
}
pub(crate) fn default_specificity() -> String {
    "balanced".to_string()
}
pub(crate) fn default_true() -> bool {
    true
}

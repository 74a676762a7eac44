//! Tone catalog: the emotional register imposed on the model's response.

use serde::Serialize;

/// Tone category selected by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ToneCategory {
    /// Energetic and engaging.
    Enthusiastic,
    /// Professional and approachable (fallback for unknown tags).
    #[default]
    Balanced,
    /// Precise and analytical.
    Reserved,
}

impl ToneCategory {
    /// Every category, in display order.
    pub const ALL: [ToneCategory; 3] = [
        ToneCategory::Enthusiastic,
        ToneCategory::Balanced,
        ToneCategory::Reserved,
    ];

    /// Parse a tone tag, returning `None` for anything outside the enumerated set.
    ///
    /// Matching is exact: `"Enthusiastic"` is not a recognized tag.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "enthusiastic" => Some(Self::Enthusiastic),
            "balanced" => Some(Self::Balanced),
            "reserved" => Some(Self::Reserved),
            _ => None,
        }
    }

    /// Parse a tone tag, falling back to [`ToneCategory::Balanced`].
    pub fn from_tag(tag: &str) -> Self {
        Self::from_str(tag).unwrap_or_default()
    }

    /// The tag accepted by [`ToneCategory::from_str`].
    pub fn as_str(&self) -> &'static str {
        match self {
            ToneCategory::Enthusiastic => "enthusiastic",
            ToneCategory::Balanced => "balanced",
            ToneCategory::Reserved => "reserved",
        }
    }

    /// Human-readable option label.
    pub fn label(&self) -> &'static str {
        match self {
            ToneCategory::Enthusiastic => "Enthusiastic",
            ToneCategory::Balanced => "Balanced",
            ToneCategory::Reserved => "Reserved",
        }
    }

    /// One-line description shown next to the option.
    pub fn description(&self) -> &'static str {
        match self {
            ToneCategory::Enthusiastic => "Energetic and engaging communication style",
            ToneCategory::Balanced => "Professional and approachable tone",
            ToneCategory::Reserved => "Precise and analytical approach",
        }
    }

    /// The template for this category.
    pub fn template(self) -> &'static ToneTemplate {
        lookup_tone(self)
    }
}

impl std::fmt::Display for ToneCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Role prefix and style guidance for one tone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ToneTemplate {
    /// Opening line of the "Capacity and Role" section.
    pub prefix: &'static str,
    /// Body of the `Style:` line in "Communication Parameters".
    pub style: &'static str,
}

static ENTHUSIASTIC: ToneTemplate = ToneTemplate {
    prefix: "You are an enthusiastic and energetic communicator who excels at conveying information with passion and excitement.",
    style: "Express ideas with dynamic language, strategic use of emphasis, and engaging tone. Use positive reinforcement and encouraging language.",
};

static BALANCED: ToneTemplate = ToneTemplate {
    prefix: "You are a balanced and approachable communicator who maintains a warm, professional tone.",
    style: "Balance professionalism with warmth, using clear and engaging language while maintaining composure.",
};

static RESERVED: ToneTemplate = ToneTemplate {
    prefix: "You are a precise and methodical communicator who values clarity and objectivity.",
    style: "Maintain a measured, analytical tone. Prioritize accuracy and clarity over emotional engagement.",
};

/// Look up the template for a tone category.
pub fn lookup_tone(category: ToneCategory) -> &'static ToneTemplate {
    match category {
        ToneCategory::Enthusiastic => &ENTHUSIASTIC,
        ToneCategory::Balanced => &BALANCED,
        ToneCategory::Reserved => &RESERVED,
    }
}

/// Look up the template for a raw tone tag, falling back to `balanced`.
pub fn resolve_tone(tag: &str) -> &'static ToneTemplate {
    lookup_tone(ToneCategory::from_tag(tag))
}

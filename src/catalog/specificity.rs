//! Specificity catalog: how much structure and elaboration the response should carry.

use serde::Serialize;

/// Specificity category selected by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SpecificityCategory {
    /// Comprehensive explanations with examples.
    Detailed,
    /// Clear explanations with moderate detail (fallback for unknown tags).
    #[default]
    Balanced,
    /// Brief and focused responses.
    Concise,
}

impl SpecificityCategory {
    /// Every category, in display order.
    pub const ALL: [SpecificityCategory; 3] = [
        SpecificityCategory::Detailed,
        SpecificityCategory::Balanced,
        SpecificityCategory::Concise,
    ];

    /// Parse a specificity tag, returning `None` for anything outside the enumerated set.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "detailed" => Some(Self::Detailed),
            "balanced" => Some(Self::Balanced),
            "concise" => Some(Self::Concise),
            _ => None,
        }
    }

    /// Parse a specificity tag, falling back to [`SpecificityCategory::Balanced`].
    pub fn from_tag(tag: &str) -> Self {
        Self::from_str(tag).unwrap_or_default()
    }

    /// The tag accepted by [`SpecificityCategory::from_str`].
    pub fn as_str(&self) -> &'static str {
        match self {
            SpecificityCategory::Detailed => "detailed",
            SpecificityCategory::Balanced => "balanced",
            SpecificityCategory::Concise => "concise",
        }
    }

    /// Human-readable option label.
    pub fn label(&self) -> &'static str {
        match self {
            SpecificityCategory::Detailed => "Detailed",
            SpecificityCategory::Balanced => "Balanced",
            SpecificityCategory::Concise => "Concise",
        }
    }

    /// One-line description shown next to the option.
    pub fn description(&self) -> &'static str {
        match self {
            SpecificityCategory::Detailed => "Comprehensive explanations with examples",
            SpecificityCategory::Balanced => "Clear explanations with moderate detail",
            SpecificityCategory::Concise => "Brief and focused responses",
        }
    }

    /// The template for this category.
    pub fn template(self) -> &'static SpecificityTemplate {
        lookup_specificity(self)
    }
}

impl std::fmt::Display for SpecificityCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Instruction, format and evaluation text for one specificity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SpecificityTemplate {
    /// Body of the `Approach:` line.
    pub instruction: &'static str,
    /// Body of the `Format:` line.
    pub format: &'static str,
    /// Self-check criterion for this level. Not part of the composed text.
    pub evaluation_criterion: &'static str,
}

static DETAILED: SpecificityTemplate = SpecificityTemplate {
    instruction: "Break down complex topics into detailed, well-structured explanations.",
    format: "Use a hierarchical structure with main points and sub-points. Include specific examples, data points, or case studies where relevant.",
    evaluation_criterion: "Ensure each point is thoroughly explained with supporting details and practical applications.",
};

static BALANCED: SpecificityTemplate = SpecificityTemplate {
    instruction: "Provide clear, focused explanations that balance detail with accessibility.",
    format: "Present information in digestible sections with clear topic sentences and supporting details.",
    evaluation_criterion: "Verify that explanations are neither too sparse nor overly detailed.",
};

static CONCISE: SpecificityTemplate = SpecificityTemplate {
    instruction: "Deliver concise, direct responses that capture essential information.",
    format: "Use bullet points or short paragraphs. Prioritize key takeaways.",
    evaluation_criterion: "Confirm that all essential information is included without unnecessary elaboration.",
};

/// Look up the template for a specificity category.
pub fn lookup_specificity(category: SpecificityCategory) -> &'static SpecificityTemplate {
    match category {
        SpecificityCategory::Detailed => &DETAILED,
        SpecificityCategory::Balanced => &BALANCED,
        SpecificityCategory::Concise => &CONCISE,
    }
}

/// Look up the template for a raw specificity tag, falling back to `balanced`.
pub fn resolve_specificity(tag: &str) -> &'static SpecificityTemplate {
    lookup_specificity(SpecificityCategory::from_tag(tag))
}

//! Section kinds and the fixed boilerplate text of a composed prompt.

use serde::Serialize;

/// The labeled sections of a composed prompt, in emission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    TaskContext,
    CapacityAndRole,
    CommunicationParameters,
    PrimaryQuery,
    ResponseRequirements,
    OutputFormat,
    QualityControl,
}

impl SectionKind {
    /// All sections in the order they appear in the document.
    pub const ORDER: [SectionKind; 7] = [
        SectionKind::TaskContext,
        SectionKind::CapacityAndRole,
        SectionKind::CommunicationParameters,
        SectionKind::PrimaryQuery,
        SectionKind::ResponseRequirements,
        SectionKind::OutputFormat,
        SectionKind::QualityControl,
    ];

    /// The heading text, without brackets.
    pub fn heading(&self) -> &'static str {
        match self {
            SectionKind::TaskContext => "Task Context",
            SectionKind::CapacityAndRole => "Capacity and Role",
            SectionKind::CommunicationParameters => "Communication Parameters",
            SectionKind::PrimaryQuery => "Primary Query",
            SectionKind::ResponseRequirements => "Response Requirements",
            SectionKind::OutputFormat => "Output Format",
            SectionKind::QualityControl => "Quality Control",
        }
    }

    /// The heading line as it appears in rendered output, e.g. `[Task Context]`.
    pub fn header_line(&self) -> String {
        format!("[{}]", self.heading())
    }
}

impl std::fmt::Display for SectionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.heading())
    }
}

pub(crate) const TASK_CONTEXT: &str =
    "You are an AI assistant tasked with providing a helpful, well-structured response.";

/// Appended to "Capacity and Role" in expert mode. One line, two sentences.
pub const EXPERT_PERSONA: &str = "You are a subject matter expert with extensive knowledge and practical experience in this field. Your expertise allows you to provide authoritative insights and nuanced explanations.";

pub(crate) const RESPONSE_REQUIREMENTS: &[&str] = &[
    "1. Quality Standards:",
    "   - Ensure factual accuracy and logical coherence",
    "   - Maintain specified tone and style consistently",
    "   - Follow format guidelines precisely",
    "2. Content Structure:",
    "   - Begin with a clear thesis or main point",
    "   - Support claims with evidence or reasoning",
    "   - Conclude with actionable insights or key takeaways",
];

pub(crate) const OUTPUT_FORMAT: &[&str] = &[
    "Structure your response as follows:",
    "1. Brief overview/summary",
    "2. Main explanation/analysis",
    "3. Supporting details/examples",
    "4. Conclusion/practical implications",
];

pub(crate) const QUALITY_CONTROL: &[&str] = &[
    "Before providing your response, verify that it:",
    "- Directly addresses the primary query",
    "- Maintains consistent tone and expertise level",
    "- Follows the specified format and structure",
    "- Provides appropriate level of detail",
];

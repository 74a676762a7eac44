//! Prompt composition.
//!
//! [`compose`] turns a [`CompositionRequest`] into a [`ComposedPrompt`]: seven
//! labeled sections in fixed order, each rendered as a bracketed heading line
//! followed by its body, with one blank line between sections.
//!
//! ```text
//! [Task Context]
//! You are an AI assistant tasked with providing a helpful, well-structured response.
//!
//! [Capacity and Role]
//! {tone prefix}
//! {expert persona, only in expert mode}
//!
//! [Communication Parameters]
//! Style: {tone style}
//! Format: {specificity format}
//! Approach: {specificity instruction}
//!
//! [Primary Query]
//! {raw prompt, verbatim}
//! ...
//! ```
//!
//! Composition is pure. Identical requests always render byte-identical text,
//! and no input (unknown tags, empty prompt) is an error.

mod sections;


pub use sections::{EXPERT_PERSONA, SectionKind};

use crate::catalog::{
    SpecificityCategory, SpecificityTemplate, ToneCategory, ToneTemplate, lookup_specificity,
    lookup_tone,
};
use serde::Serialize;
use std::fmt;

/// Inputs for a single composition.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompositionRequest {
    /// The user's prompt, used verbatim as the "Primary Query" body.
    pub raw_prompt: String,
    pub tone: ToneCategory,
    pub specificity: SpecificityCategory,
    /// Adds the expert persona to "Capacity and Role".
    pub expert_mode: bool,
}

impl CompositionRequest {
    /// Create a request with balanced tone and specificity and expert mode off.
    pub fn new(raw_prompt: impl Into<String>) -> Self {
        Self {
            raw_prompt: raw_prompt.into(),
            ..Self::default()
        }
    }

    /// Create a request from raw tag strings; unknown tags become `balanced`.
    pub fn from_tags(
        raw_prompt: impl Into<String>,
        tone: &str,
        specificity: &str,
        expert_mode: bool,
    ) -> Self {
        Self {
            raw_prompt: raw_prompt.into(),
            tone: ToneCategory::from_tag(tone),
            specificity: SpecificityCategory::from_tag(specificity),
            expert_mode,
        }
    }

    pub fn with_tone(mut self, tone: ToneCategory) -> Self {
        self.tone = tone;
        self
    }

    pub fn with_specificity(mut self, specificity: SpecificityCategory) -> Self {
        self.specificity = specificity;
        self
    }

    pub fn with_expert_mode(mut self, expert_mode: bool) -> Self {
        self.expert_mode = expert_mode;
        self
    }
}

/// One labeled section of a composed prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub kind: SectionKind,
    pub heading: &'static str,
    /// Body text without a trailing newline. May be empty.
    pub body: String,
}

impl Section {
    fn new(kind: SectionKind, body: impl Into<String>) -> Self {
        Self {
            kind,
            heading: kind.heading(),
            body: body.into(),
        }
    }

    fn from_lines(kind: SectionKind, lines: &[&str]) -> Self {
        Self::new(kind, lines.join("\n"))
    }
}

/// The result of a composition: resolved categories plus ordered sections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComposedPrompt {
    pub tone: ToneCategory,
    pub specificity: SpecificityCategory,
    pub expert_mode: bool,
    pub sections: Vec<Section>,
}

impl ComposedPrompt {
    /// Get a section by kind.
    pub fn section(&self, kind: SectionKind) -> Option<&Section> {
        self.sections.iter().find(|s| s.kind == kind)
    }

    pub fn tone_template(&self) -> &'static ToneTemplate {
        lookup_tone(self.tone)
    }

    pub fn specificity_template(&self) -> &'static SpecificityTemplate {
        lookup_specificity(self.specificity)
    }

    /// Render the document as a single string.
    ///
    /// Every section ends with a newline and sections are separated by one
    /// blank line, so the text ends with exactly one `\n`.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ComposedPrompt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, section) in self.sections.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            writeln!(f, "[{}]", section.heading)?;
            writeln!(f, "{}", section.body)?;
        }
        Ok(())
    }
}

/// Compose a structured prompt from a request.
pub fn compose(request: &CompositionRequest) -> ComposedPrompt {
    let tone = lookup_tone(request.tone);
    let specificity = lookup_specificity(request.specificity);

    let mut role = tone.prefix.to_string();
    if request.expert_mode {
        role.push('\n');
        role.push_str(EXPERT_PERSONA);
    }

    let parameters = format!(
        "Style: {}\nFormat: {}\nApproach: {}",
        tone.style, specificity.format, specificity.instruction
    );

    let sections = vec![
        Section::new(SectionKind::TaskContext, sections::TASK_CONTEXT),
        Section::new(SectionKind::CapacityAndRole, role),
        Section::new(SectionKind::CommunicationParameters, parameters),
        Section::new(SectionKind::PrimaryQuery, request.raw_prompt.as_str()),
        Section::from_lines(
            SectionKind::ResponseRequirements,
            sections::RESPONSE_REQUIREMENTS,
        ),
        Section::from_lines(SectionKind::OutputFormat, sections::OUTPUT_FORMAT),
        Section::from_lines(SectionKind::QualityControl, sections::QUALITY_CONTROL),
    ];

    ComposedPrompt {
        tone: request.tone,
        specificity: request.specificity,
        expert_mode: request.expert_mode,
        sections,
    }
}

/// Compose from raw tag strings and return the rendered text.
///
/// ```
/// let text = promptcraft::composer::compose_text("Explain photosynthesis", "enthusiastic", "concise", false);
/// assert!(text.contains("[Primary Query]\nExplain photosynthesis\n"));
/// ```
pub fn compose_text(raw_prompt: &str, tone: &str, specificity: &str, expert_mode: bool) -> String {
    let request = CompositionRequest::from_tags(raw_prompt, tone, specificity, expert_mode);
    compose(&request).render()
}

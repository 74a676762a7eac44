//! Promptcraft: deterministic prompt composition.
//!
//! Expands a raw prompt into a structured, multi-section prompt for a language
//! model, driven by a tone, a specificity level, and an optional expert persona.
//!
//! ```
//! use promptcraft::catalog::{SpecificityCategory, ToneCategory};
//! use promptcraft::composer::{CompositionRequest, compose};
//!
//! let request = CompositionRequest::new("Explain photosynthesis")
//!     .with_tone(ToneCategory::Enthusiastic)
//!     .with_specificity(SpecificityCategory::Concise);
//! let text = compose(&request).render();
//! assert!(text.starts_with("[Task Context]\n"));
//! ```

pub mod catalog;
pub mod cli;
pub mod commands;
pub mod composer;
pub mod config;
pub mod error;
pub mod events;
pub mod exit_codes;
pub mod input;

#[cfg(test)]
mod test_support;

pub use composer::{ComposedPrompt, CompositionRequest, compose, compose_text};

//! Static style catalogs for prompt composition.
//!
//! Two read-only tables drive the composer:
//!
//! - **Tone**: maps a [`ToneCategory`] to a [`ToneTemplate`] (role prefix and
//!   style guidance)
//! - **Specificity**: maps a [`SpecificityCategory`] to a
//!   [`SpecificityTemplate`] (instruction, format, evaluation criterion)
//!
//! # Fallback
//!
//! Both lookups are total. Tags outside the enumerated set resolve to the
//! `balanced` entry of their catalog:
//!
//! ```
//! use promptcraft::catalog::{ToneCategory, resolve_tone, lookup_tone};
//!
//! assert_eq!(ToneCategory::from_tag("neutral"), ToneCategory::Balanced);
//! assert_eq!(resolve_tone("neutral"), lookup_tone(ToneCategory::Balanced));
//! ```

mod specificity;
mod tone;

pub use specificity::{
    SpecificityCategory, SpecificityTemplate, lookup_specificity, resolve_specificity,
};
pub use tone::{ToneCategory, ToneTemplate, lookup_tone, resolve_tone};

/// Display label for the expert-mode toggle.
pub const EXPERT_MODE_LABEL: &str = "Expert mode";

/// One-line description of what expert mode does.
pub const EXPERT_MODE_DESCRIPTION: &str =
    "Enable to get responses from an expert perspective with domain-specific knowledge";

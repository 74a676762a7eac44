//! Implementation of the `promptcraft templates` command.
//!
//! Lists every tone and specificity option with its label, description,
//! and template text.

use crate::catalog::{
    EXPERT_MODE_DESCRIPTION, EXPERT_MODE_LABEL, SpecificityCategory, SpecificityTemplate,
    ToneCategory, ToneTemplate,
};
use crate::cli::TemplatesArgs;
use crate::config::OutputFormat;
use crate::error::{PromptcraftError, Result};
use serde::Serialize;

#[derive(Serialize)]
struct CatalogEntry<T: 'static> {
    tag: &'static str,
    label: &'static str,
    description: &'static str,
    template: &'static T,
}

#[derive(Serialize)]
struct CatalogListing {
    tone: Vec<CatalogEntry<ToneTemplate>>,
    specificity: Vec<CatalogEntry<SpecificityTemplate>>,
    expert_mode: &'static str,
    fallback: &'static str,
}

fn listing() -> CatalogListing {
    CatalogListing {
        tone: ToneCategory::ALL
            .iter()
            .map(|c| CatalogEntry {
                tag: c.as_str(),
                label: c.label(),
                description: c.description(),
                template: c.template(),
            })
            .collect(),
        specificity: SpecificityCategory::ALL
            .iter()
            .map(|c| CatalogEntry {
                tag: c.as_str(),
                label: c.label(),
                description: c.description(),
                template: c.template(),
            })
            .collect(),
        expert_mode: EXPERT_MODE_DESCRIPTION,
        fallback: "balanced",
    }
}

fn render_text() -> String {
    let mut out = String::new();

    out.push_str("Tone:\n");
    for category in ToneCategory::ALL {
        let template = category.template();
        out.push_str(&format!(
            "\n  {:<13} {} - {}\n",
            category.as_str(),
            category.label(),
            category.description()
        ));
        out.push_str(&format!("    Prefix:      {}\n", template.prefix));
        out.push_str(&format!("    Style:       {}\n", template.style));
    }

    out.push_str("\nSpecificity:\n");
    for category in SpecificityCategory::ALL {
        let template = category.template();
        out.push_str(&format!(
            "\n  {:<13} {} - {}\n",
            category.as_str(),
            category.label(),
            category.description()
        ));
        out.push_str(&format!("    Approach:    {}\n", template.instruction));
        out.push_str(&format!("    Format:      {}\n", template.format));
        out.push_str(&format!(
            "    Evaluation:  {}\n",
            template.evaluation_criterion
        ));
    }

    out.push_str(&format!(
        "\n{} (--expert): {}\n",
        EXPERT_MODE_LABEL, EXPERT_MODE_DESCRIPTION
    ));
    out.push_str("Unknown tone or specificity values use 'balanced'.\n");
    out
}

fn render(format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text()),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(&listing()).map_err(|e| {
                PromptcraftError::IoError(format!("failed to serialize templates: {}", e))
            })?;
            json.push('\n');
            Ok(json)
        }
    }
}

/// Execute the `promptcraft templates` command.
pub fn cmd_templates(args: TemplatesArgs) -> Result<()> {
    let format = match args.format.as_deref() {
        Some(value) => OutputFormat::from_str(value).ok_or_else(|| {
            PromptcraftError::UserError(format!(
                "invalid --format '{}' (expected 'text' or 'json')",
                value
            ))
        })?,
        None => OutputFormat::Text,
    };

    print!("{}", render(format)?);
    Ok(())
}

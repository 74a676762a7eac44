//! Implementation of the `promptcraft compose` command.
//!
//! Resolves settings (flags over config), reads the raw prompt, composes it,
//! writes the result, then emits the success notice and the `compose` event.

use crate::catalog::{SpecificityCategory, SpecificityTemplate, ToneCategory, ToneTemplate};
use crate::cli::ComposeArgs;
use crate::composer::{ComposedPrompt, CompositionRequest, Section, compose};
use crate::config::{Config, OutputFormat};
use crate::error::{PromptcraftError, Result};
use crate::events::{Event, append_event};
use crate::input::PromptSource;
use serde::Serialize;
use std::io::{self, IsTerminal, Write};
use std::path::Path;

/// Notice printed to stderr once per successful composition.
pub const SUCCESS_MESSAGE: &str = "Prompt enhanced successfully!";

/// Settings for one composition after merging flags over config.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ComposeSettings {
    tone_tag: String,
    specificity_tag: String,
    expert_mode: bool,
    format: OutputFormat,
}

impl ComposeSettings {
    fn resolve(args: &ComposeArgs, config: &Config) -> Result<Self> {
        let format = match &args.format {
            Some(value) => OutputFormat::from_str(value).ok_or_else(|| {
                PromptcraftError::UserError(format!(
                    "invalid --format '{}' (expected 'text' or 'json')",
                    value
                ))
            })?,
            None => config.output_format,
        };

        let expert_mode = if args.expert {
            true
        } else if args.no_expert {
            false
        } else {
            config.expert_mode
        };

        Ok(Self {
            tone_tag: args
                .tone
                .clone()
                .unwrap_or_else(|| config.default_tone.clone()),
            specificity_tag: args
                .specificity
                .clone()
                .unwrap_or_else(|| config.default_specificity.clone()),
            expert_mode,
            format,
        })
    }

    fn request(&self, raw_prompt: String) -> CompositionRequest {
        CompositionRequest::from_tags(
            raw_prompt,
            &self.tone_tag,
            &self.specificity_tag,
            self.expert_mode,
        )
    }

    /// Warnings for tags that will fall back to `balanced`.
    fn fallback_warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        if ToneCategory::from_str(&self.tone_tag).is_none() {
            warnings.push(format!(
                "unknown tone '{}', using 'balanced'",
                self.tone_tag
            ));
        }
        if SpecificityCategory::from_str(&self.specificity_tag).is_none() {
            warnings.push(format!(
                "unknown specificity '{}', using 'balanced'",
                self.specificity_tag
            ));
        }
        warnings
    }
}

/// JSON shape of `compose --format json`.
#[derive(Serialize)]
struct ComposeReport<'a> {
    tone: ToneCategory,
    tone_template: &'static ToneTemplate,
    specificity: SpecificityCategory,
    specificity_template: &'static SpecificityTemplate,
    expert_mode: bool,
    sections: &'a [Section],
    text: &'a str,
}

fn format_output(
    composed: &ComposedPrompt,
    rendered: &str,
    format: OutputFormat,
) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(rendered.to_string()),
        OutputFormat::Json => {
            let report = ComposeReport {
                tone: composed.tone,
                tone_template: composed.tone_template(),
                specificity: composed.specificity,
                specificity_template: composed.specificity_template(),
                expert_mode: composed.expert_mode,
                sections: &composed.sections,
                text: rendered,
            };
            let mut json = serde_json::to_string_pretty(&report).map_err(|e| {
                PromptcraftError::IoError(format!("failed to serialize composed prompt: {}", e))
            })?;
            json.push('\n');
            Ok(json)
        }
    }
}

fn write_output(output: &str, path: Option<&Path>) -> Result<()> {
    match path {
        Some(path) => std::fs::write(path, output).map_err(|e| {
            PromptcraftError::IoError(format!(
                "failed to write output file '{}': {}",
                path.display(),
                e
            ))
        }),
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(output.as_bytes())
                .and_then(|()| stdout.flush())
                .map_err(|e| PromptcraftError::IoError(format!("failed to write to stdout: {}", e)))
        }
    }
}

/// Stderr lines for tags that fell back to `balanced`.
///
/// Empty when `warn_unknown_tags` is off or `--quiet` is given.
fn warning_lines(config: &Config, settings: &ComposeSettings, quiet: bool) -> Vec<String> {
    if !config.warn_unknown_tags || quiet {
        return Vec::new();
    }
    settings
        .fallback_warnings()
        .into_iter()
        .map(|warning| format!("Warning: {}", warning))
        .collect()
}

/// The success notice, unless `show_success` is off or `--quiet` is given.
fn success_notice(config: &Config, quiet: bool) -> Option<&'static str> {
    (config.show_success && !quiet).then_some(SUCCESS_MESSAGE)
}

/// Append the `compose` event when an event log is configured.
///
/// Logging is best-effort: the prompt has already been written, so a failure
/// comes back as a warning line for stderr instead of an error. `--quiet` does
/// not suppress it.
fn record_event(config: &Config, composed: &ComposedPrompt, rendered: &str) -> Option<String> {
    let log_path = config.event_log.as_ref()?;
    let event = Event::composed(composed, rendered.chars().count());
    append_event(log_path, &event)
        .err()
        .map(|e| format!("Warning: failed to log compose event: {}", e))
}

/// Execute the `promptcraft compose` command.
pub fn cmd_compose(args: ComposeArgs, config_path: Option<&Path>) -> Result<()> {
    let config = Config::resolve(config_path)?.config;
    let settings = ComposeSettings::resolve(&args, &config)?;

    let source = PromptSource::from_args(args.prompt, args.file);
    if source == PromptSource::Stdin && io::stdin().is_terminal() {
        return Err(PromptcraftError::UserError(
            "no prompt given.\n\n\
             Pass the prompt as an argument, use --file <path>, or pipe it on stdin:\n  \
             echo \"Explain photosynthesis\" | promptcraft compose"
                .to_string(),
        ));
    }
    let raw_prompt = source.read(&mut io::stdin().lock())?;

    for line in warning_lines(&config, &settings, args.quiet) {
        eprintln!("{}", line);
    }

    let composed = compose(&settings.request(raw_prompt));
    let rendered = composed.render();

    let output = format_output(&composed, &rendered, settings.format)?;
    write_output(&output, args.output.as_deref())?;

    if let Some(notice) = success_notice(&config, args.quiet) {
        eprintln!("{}", notice);
    }
    if let Some(warning) = record_event(&config, &composed, &rendered) {
        eprintln!("{}", warning);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::composer::compose_text;
    use crate::exit_codes;
    use crate::test_support::{create_config_dir, read_ndjson};
    use tempfile::TempDir;

    fn args(prompt: &str) -> ComposeArgs {
        ComposeArgs {
            prompt: Some(prompt.to_string()),
            quiet: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_settings_default_from_config() {
        let settings = ComposeSettings::resolve(&args("x"), &Config::default()).unwrap();

        assert_eq!(settings.tone_tag, "balanced");
        assert_eq!(settings.specificity_tag, "balanced");
        assert!(!settings.expert_mode);
        assert_eq!(settings.format, OutputFormat::Text);
    }

    #[test]
    fn test_flags_override_config() {
        let config = Config {
            default_tone: "reserved".to_string(),
            expert_mode: true,
            output_format: OutputFormat::Json,
            ..Config::default()
        };
        let args = ComposeArgs {
            tone: Some("enthusiastic".to_string()),
            no_expert: true,
            format: Some("text".to_string()),
            ..args("x")
        };

        let settings = ComposeSettings::resolve(&args, &config).unwrap();
        assert_eq!(settings.tone_tag, "enthusiastic");
        assert!(!settings.expert_mode);
        assert_eq!(settings.format, OutputFormat::Text);
    }

    #[test]
    fn test_config_expert_mode_applies_without_flags() {
        let config = Config {
            expert_mode: true,
            ..Config::default()
        };
        let settings = ComposeSettings::resolve(&args("x"), &config).unwrap();
        assert!(settings.expert_mode);
    }

    #[test]
    fn test_invalid_format_is_user_error() {
        let args = ComposeArgs {
            format: Some("html".to_string()),
            ..args("x")
        };
        let err = ComposeSettings::resolve(&args, &Config::default()).unwrap_err();
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
        assert!(err.to_string().contains("--format"));
    }

    #[test]
    fn test_fallback_warnings() {
        let args = ComposeArgs {
            tone: Some("neutral".to_string()),
            specificity: Some("concise".to_string()),
            ..args("x")
        };
        let settings = ComposeSettings::resolve(&args, &Config::default()).unwrap();
        let warnings = settings.fallback_warnings();

        assert_eq!(warnings, vec!["unknown tone 'neutral', using 'balanced'"]);
    }

    #[test]
    fn test_warning_lines_respect_config_and_quiet() {
        let args = ComposeArgs {
            tone: Some("neutral".to_string()),
            ..args("x")
        };
        let config = Config::default();
        let silenced = Config {
            warn_unknown_tags: false,
            ..Config::default()
        };
        let settings = ComposeSettings::resolve(&args, &config).unwrap();

        assert_eq!(
            warning_lines(&config, &settings, false),
            vec!["Warning: unknown tone 'neutral', using 'balanced'"]
        );
        assert!(warning_lines(&config, &settings, true).is_empty());
        assert!(warning_lines(&silenced, &settings, false).is_empty());
        assert!(warning_lines(&silenced, &settings, true).is_empty());
    }

    #[test]
    fn test_known_tags_produce_no_warning_lines() {
        let config = Config::default();
        let settings = ComposeSettings::resolve(&args("x"), &config).unwrap();
        assert!(warning_lines(&config, &settings, false).is_empty());
    }

    #[test]
    fn test_success_notice_respects_config_and_quiet() {
        let shown = Config::default();
        let hidden = Config {
            show_success: false,
            ..Config::default()
        };

        assert_eq!(success_notice(&shown, false), Some(SUCCESS_MESSAGE));
        assert_eq!(success_notice(&shown, true), None);
        assert_eq!(success_notice(&hidden, false), None);
        assert_eq!(success_notice(&hidden, true), None);
    }

    #[test]
    fn test_record_event_without_log_is_silent() {
        let composed = compose(&CompositionRequest::new("q"));
        assert_eq!(record_event(&Config::default(), &composed, "text"), None);
    }

    #[test]
    fn test_record_event_failure_becomes_warning() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config {
            event_log: Some(temp_dir.path().to_path_buf()),
            ..Config::default()
        };
        let composed = compose(&CompositionRequest::new("q"));

        let warning = record_event(&config, &composed, "text").unwrap();
        assert!(warning.starts_with("Warning: failed to log compose event:"));
    }

    #[test]
    fn test_json_output_contains_templates_and_text() {
        let request = CompositionRequest::from_tags("q", "reserved", "detailed", true);
        let composed = compose(&request);
        let rendered = composed.render();
        let output = format_output(&composed, &rendered, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["tone"], "reserved");
        assert_eq!(value["specificity"], "detailed");
        assert_eq!(value["expert_mode"], true);
        let expected = serde_json::to_value(SpecificityCategory::Detailed.template()).unwrap();
        assert_eq!(value["specificity_template"], expected);
        assert_eq!(value["sections"].as_array().unwrap().len(), 7);
        assert_eq!(value["text"], rendered.as_str());
    }

    #[test]
    fn test_cmd_compose_writes_output_and_event() {
        let temp_dir = TempDir::new().unwrap();
        let log_path = temp_dir.path().join("events.ndjson");
        let out_path = temp_dir.path().join("prompt.txt");
        let (_config_dir, config_path) = create_config_dir(
            "promptcraft.yaml",
            &format!("event_log: {}\n", log_path.display()),
        );

        let args = ComposeArgs {
            tone: Some("enthusiastic".to_string()),
            specificity: Some("concise".to_string()),
            output: Some(out_path.clone()),
            ..args("Explain photosynthesis")
        };
        cmd_compose(args, Some(&config_path)).unwrap();

        let written = std::fs::read_to_string(&out_path).unwrap();
        assert_eq!(
            written,
            compose_text("Explain photosynthesis", "enthusiastic", "concise", false)
        );

        let events = read_ndjson(&log_path);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0]["action"], "compose");
        assert_eq!(events[0]["details"]["tone"], "enthusiastic");
        assert_eq!(events[0]["details"]["specificity"], "concise");
        assert_eq!(events[0]["details"]["prompt_chars"], 22);
        let output_chars = written.chars().count();
        assert_eq!(events[0]["details"]["output_chars"], output_chars);
    }

    #[test]
    fn test_cmd_compose_reads_prompt_file() {
        let temp_dir = TempDir::new().unwrap();
        let prompt_path = temp_dir.path().join("raw.txt");
        let out_path = temp_dir.path().join("prompt.txt");
        std::fs::write(&prompt_path, "  padded prompt\n").unwrap();
        let (_config_dir, config_path) = create_config_dir("promptcraft.yaml", "");

        let args = ComposeArgs {
            file: Some(prompt_path),
            output: Some(out_path.clone()),
            quiet: true,
            ..Default::default()
        };
        cmd_compose(args, Some(&config_path)).unwrap();

        let written = std::fs::read_to_string(&out_path).unwrap();
        let expected = "[Primary Query]\n  padded prompt\n\n\n[Response Requirements]";
        assert!(written.contains(expected));
    }

    #[test]
    fn test_cmd_compose_one_event_per_composition() {
        let temp_dir = TempDir::new().unwrap();
        let log_path = temp_dir.path().join("events.ndjson");
        let (_config_dir, config_path) = create_config_dir(
            "promptcraft.yaml",
            &format!("event_log: {}\nshow_success: false\n", log_path.display()),
        );

        for prompt in ["one", "two", "three"] {
            let args = ComposeArgs {
                output: Some(temp_dir.path().join(format!("{}.txt", prompt))),
                ..args(prompt)
            };
            cmd_compose(args, Some(&config_path)).unwrap();
        }

        assert_eq!(read_ndjson(&log_path).len(), 3);
    }

    #[test]
    fn test_cmd_compose_output_dir_missing_is_io_error() {
        let (_config_dir, config_path) = create_config_dir("promptcraft.yaml", "");
        let args = ComposeArgs {
            output: Some("/nonexistent/dir/prompt.txt".into()),
            ..args("x")
        };

        let err = cmd_compose(args, Some(&config_path)).unwrap_err();
        assert_eq!(err.exit_code(), exit_codes::IO_FAILURE);
    }

    #[test]
    fn test_cmd_compose_succeeds_when_event_log_fails() {
        let temp_dir = TempDir::new().unwrap();
        let out_path = temp_dir.path().join("prompt.txt");
        let (_config_dir, config_path) = create_config_dir(
            "promptcraft.yaml",
            &format!("event_log: {}\n", temp_dir.path().display()),
        );

        let args = ComposeArgs {
            output: Some(out_path.clone()),
            quiet: false,
            ..args("Explain photosynthesis")
        };
        assert!(cmd_compose(args, Some(&config_path)).is_ok());

        let written = std::fs::read_to_string(&out_path).unwrap();
        assert_eq!(
            written,
            compose_text("Explain photosynthesis", "balanced", "balanced", false)
        );
        assert!(temp_dir.path().is_dir());
    }
}

//! Event logging for promptcraft.
//!
//! Each successful composition can be recorded as one line in an append-only
//! NDJSON file (one JSON object per line). The log is enabled by setting
//! `event_log` in `.promptcraft.yaml`.
//!
//! # Event Format
//!
//! Each event is a JSON object with the following fields:
//! - `ts`: RFC3339 timestamp
//! - `action`: The action performed (currently always `compose`)
//! - `actor`: The owner string (e.g., `user@HOST`)
//! - `details`: Freeform object with action-specific details
//!
//! ```no_run
//! use promptcraft::events::{Event, EventAction, append_event};
//! use serde_json::json;
//! use std::path::Path;
//!
//! let event = Event::new(EventAction::Compose)
//!     .with_details(json!({"tone": "balanced"}));
//! append_event(Path::new("events.ndjson"), &event)?;
//! # Ok::<(), promptcraft::error::PromptcraftError>(())
//! ```

use crate::composer::{ComposedPrompt, SectionKind};
use crate::error::{PromptcraftError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

/// Actions that can be logged as events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventAction {
    /// A prompt was composed successfully.
    Compose,
}

impl std::fmt::Display for EventAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventAction::Compose => write!(f, "compose"),
        }
    }
}

/// An event record for the audit log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    /// RFC3339 timestamp when the event occurred.
    pub ts: DateTime<Utc>,

    /// The action that was performed.
    pub action: EventAction,

    /// The actor who performed the action (e.g., `user@HOST`).
    pub actor: String,

    /// Freeform details object with action-specific information.
    pub details: Value,
}

impl Event {
    /// Create a new event with the given action.
    ///
    /// The timestamp is set to the current time, and the actor is
    /// determined from the environment (USER@HOSTNAME).
    pub fn new(action: EventAction) -> Self {
        Self {
            ts: Utc::now(),
            action,
            actor: get_actor_string(),
            details: Value::Object(serde_json::Map::new()),
        }
    }

    /// Build the `compose` event for a finished composition.
    ///
    /// Records the resolved categories and sizes, never the prompt text itself.
    pub fn composed(composed: &ComposedPrompt, rendered_chars: usize) -> Self {
        let raw_chars = composed
            .section(SectionKind::PrimaryQuery)
            .map(|s| s.body.chars().count())
            .unwrap_or(0);

        Self::new(EventAction::Compose).with_details(json!({
            "tone": composed.tone,
            "specificity": composed.specificity,
            "expert_mode": composed.expert_mode,
            "prompt_chars": raw_chars,
            "output_chars": rendered_chars,
        }))
    }

    /// Set the details object for this event.
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = details;
        self
    }

    /// Serialize the event to a single-line JSON string.
    pub fn to_ndjson_line(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| {
            PromptcraftError::IoError(format!("failed to serialize event to JSON: {}", e))
        })
    }
}

/// Get the actor string for event metadata.
fn get_actor_string() -> String {
    let user = std::env::var("USER")
        .or_else(|_| std::env::var("USERNAME"))
        .unwrap_or_else(|_| "unknown".to_string());

    let host = hostname::get()
        .map(|h| h.to_string_lossy().to_string())
        .unwrap_or_else(|_| "unknown".to_string());

    format!("{}@{}", user, host)
}

/// Append an event to the log at `path`.
///
/// The file and its parent directory are created if missing. Each append
/// writes exactly one line with a trailing newline.
pub fn append_event(path: &Path, event: &Event) -> Result<()> {
    let json_line = event.to_ndjson_line()?;

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent).map_err(|e| {
            PromptcraftError::IoError(format!(
                "failed to create event log directory '{}': {}",
                parent.display(),
                e
            ))
        })?;
    }

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| {
            PromptcraftError::IoError(format!(
                "failed to open event log '{}': {}",
                path.display(),
                e
            ))
        })?;

    writeln!(file, "{}", json_line).map_err(|e| {
        PromptcraftError::IoError(format!(
            "failed to write event to '{}': {}",
            path.display(),
            e
        ))
    })?;

    Ok(())
}

/// Read all events from the log at `path`.
///
/// A missing file yields an empty list.
pub fn read_events(path: &Path) -> Result<Vec<Event>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let content = fs::read_to_string(path).map_err(|e| {
        PromptcraftError::IoError(format!(
            "failed to read event log '{}': {}",
            path.display(),
            e
        ))
    })?;

    content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .enumerate()
        .map(|(i, line)| {
            serde_json::from_str(line).map_err(|e| {
                PromptcraftError::IoError(format!(
                    "malformed event on line {} of '{}': {}",
                    i + 1,
                    path.display(),
                    e
                ))
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::composer::{CompositionRequest, compose};
    use crate::test_support::read_ndjson;
    use tempfile::TempDir;

    #[test]
    fn test_event_creation() {
        let event = Event::new(EventAction::Compose);

        assert_eq!(event.action, EventAction::Compose);
        assert!(!event.actor.is_empty());
        assert!(event.actor.contains('@'));
        // Timestamp should be recent (within last minute)
        let age = Utc::now().signed_duration_since(event.ts);
        assert!(age.num_minutes() < 1);
    }

    #[test]
    fn test_composed_event_details() {
        let composed = compose(&CompositionRequest::from_tags(
            "héllo",
            "enthusiastic",
            "unknown",
            true,
        ));
        let event = Event::composed(&composed, 1234);

        assert_eq!(event.action, EventAction::Compose);
        assert_eq!(event.details["tone"], "enthusiastic");
        assert_eq!(event.details["specificity"], "balanced");
        assert_eq!(event.details["expert_mode"], true);
        assert_eq!(event.details["prompt_chars"], 5);
        assert_eq!(event.details["output_chars"], 1234);
    }

    #[test]
    fn test_event_serialization_is_single_line() {
        let details = json!({"note": "line one\nline two"});
        let event = Event::new(EventAction::Compose).with_details(details);

        let json_line = event.to_ndjson_line().unwrap();
        assert!(!json_line.contains('\n'));

        let parsed: Event = serde_json::from_str(&json_line).unwrap();
        assert_eq!(parsed.action, EventAction::Compose);
        assert_eq!(parsed.details["note"], "line one\nline two");
    }

    #[test]
    fn test_action_display() {
        assert_eq!(EventAction::Compose.to_string(), "compose");
    }

    #[test]
    fn test_append_creates_file_and_parent_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("logs/nested/events.ndjson");

        append_event(&path, &Event::new(EventAction::Compose)).unwrap();

        assert!(path.exists());
        let lines = read_ndjson(&path);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0]["action"], "compose");
    }

    #[test]
    fn test_append_multiple_events() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("events.ndjson");

        for i in 0..3 {
            let event = Event::new(EventAction::Compose).with_details(json!({"n": i}));
            append_event(&path, &event).unwrap();
        }

        let events = read_events(&path).unwrap();
        assert_eq!(events.len(), 3);
        assert_eq!(events[0].details["n"], 0);
        assert_eq!(events[2].details["n"], 2);
    }

    #[test]
    fn test_read_events_missing_file_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let events = read_events(&temp_dir.path().join("missing.ndjson")).unwrap();
        assert!(events.is_empty());
    }

    #[test]
    fn test_read_events_reports_malformed_line() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("events.ndjson");
        std::fs::write(&path, "not json\n").unwrap();

        let result = read_events(&path);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("line 1"));
    }
}

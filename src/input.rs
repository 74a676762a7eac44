//! Prompt input sources.
//!
//! The raw prompt is taken verbatim from one of three places: an inline
//! argument, a file, or standard input. No trimming or normalization is
//! applied; a trailing newline in a file is part of the prompt.

use crate::error::{PromptcraftError, Result};
use std::io::Read;
use std::path::PathBuf;

/// Where the raw prompt comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptSource {
    /// Prompt text given directly on the command line.
    Inline(String),
    /// Prompt read from a file.
    File(PathBuf),
    /// Prompt read from standard input.
    Stdin,
}

impl PromptSource {
    /// Choose a source from CLI arguments.
    ///
    /// Precedence: inline text, then `--file` (where `-` means stdin), then stdin.
    pub fn from_args(inline: Option<String>, file: Option<PathBuf>) -> Self {
        match (inline, file) {
            (Some(text), _) => PromptSource::Inline(text),
            (None, Some(path)) if path.as_os_str() == "-" => PromptSource::Stdin,
            (None, Some(path)) => PromptSource::File(path),
            (None, None) => PromptSource::Stdin,
        }
    }

    /// Read the prompt text. `stdin` is only consumed for [`PromptSource::Stdin`].
    pub fn read<R: Read>(self, stdin: &mut R) -> Result<String> {
        match self {
            PromptSource::Inline(text) => Ok(text),
            PromptSource::File(path) => std::fs::read_to_string(&path).map_err(|e| {
                PromptcraftError::UserError(format!(
                    "failed to read prompt file '{}': {}",
                    path.display(),
                    e
                ))
            }),
            PromptSource::Stdin => {
                let mut text = String::new();
                stdin.read_to_string(&mut text).map_err(|e| {
                    PromptcraftError::UserError(format!("failed to read prompt from stdin: {}", e))
                })?;
                Ok(text)
            }
        }
    }
}

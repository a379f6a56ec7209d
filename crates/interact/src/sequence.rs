//! Rolling-buffer key-sequence detection.
//!
//! The host feeds every key press into a [`CodeWatcher`]; the watcher keeps
//! only the most recent characters and reports when the armed phrase
//! appears anywhere in that window. Used to unlock the hidden arcade field.

use drift_engine_core::error::FieldError;

/// Characters of key input retained for matching.
const BUFFER_CAP: usize = 10;

/// Phrase that unlocks the hidden field.
const DEFAULT_PHRASE: &str = "3dvision";

/// Detects a phrase typed anywhere, without a dedicated input focus.
///
/// Keys are lowercased and appended to a rolling buffer capped at
/// [`BUFFER_CAP`] characters; a successful match clears the buffer so the
/// phrase must be retyped to trigger again.
#[derive(Debug, Clone)]
pub struct CodeWatcher {
    phrase: String,
    buffer: String,
}

impl CodeWatcher {
    /// Creates a watcher armed with `phrase` (matched case-insensitively).
    ///
    /// Returns `FieldError::InvalidConfiguration` if the phrase is empty
    /// or longer than the rolling buffer (it could never match).
    pub fn new(phrase: &str) -> Result<Self, FieldError> {
        if phrase.is_empty() {
            return Err(FieldError::InvalidConfiguration(
                "watch phrase must not be empty".to_string(),
            ));
        }
        if phrase.chars().count() > BUFFER_CAP {
            return Err(FieldError::InvalidConfiguration(format!(
                "watch phrase longer than the {BUFFER_CAP}-character buffer"
            )));
        }
        Ok(Self {
            phrase: phrase.to_lowercase(),
            buffer: String::new(),
        })
    }

    /// The armed phrase, lowercased.
    pub fn phrase(&self) -> &str {
        &self.phrase
    }

    /// Feeds one key press; returns true when the phrase completes.
    ///
    /// `key` is the host's key name: single characters for printable keys,
    /// names like "Escape" for the rest. All of it is lowercased into the
    /// buffer, so special keys break up a partially typed phrase.
    pub fn push(&mut self, key: &str) -> bool {
        self.buffer.push_str(&key.to_lowercase());

        let len = self.buffer.chars().count();
        if len > BUFFER_CAP {
            let drop = len - BUFFER_CAP;
            let keep_from = self
                .buffer
                .char_indices()
                .nth(drop)
                .map(|(i, _)| i)
                .unwrap_or(self.buffer.len());
            self.buffer.drain(..keep_from);
        }

        if self.buffer.contains(&self.phrase) {
            self.buffer.clear();
            return true;
        }
        false
    }
}

impl Default for CodeWatcher {
    fn default() -> Self {
        Self::new(DEFAULT_PHRASE).expect("default phrase fits the buffer")
    }
}

//! Validated user input for a single echo request.

use serde::{Deserialize, Serialize};

/// Notification text shown when the user submits blank input.
pub const BLANK_INPUT_NOTICE: &str = "Please enter some text to echo";

/// Error raised when input fails validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    /// Input was empty or whitespace-only.
    #[error("{BLANK_INPUT_NOTICE}")]
    BlankInput,
}

/// Text captured from the input field at the moment of submission.
///
/// Trimmed of surrounding whitespace on construction and guaranteed
/// non-blank. Request-scoped: built when the user submits, dropped
/// after dispatch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Submission(String);

impl Submission {
    /// Parse raw field contents into a submission.
    ///
    /// The sole validation rule: after trimming, the text must be
    /// non-empty.
    pub fn parse(raw: &str) -> Result<Self, SubmitError> {
        let text = raw.trim();
        if text.is_empty() {
            return Err(SubmitError::BlankInput);
        }
        Ok(Self(text.to_string()))
    }

    /// The trimmed text, used verbatim as the request body.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Submission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

//! Display state for the output area and its renderer.

use serde::{Deserialize, Serialize};

/// Label preceding a rendered server response.
pub const RESPONSE_LABEL: &str = "Server Response:";

/// Label preceding a rendered failure.
pub const ERROR_LABEL: &str = "Error:";

/// Indicator shown while a request is in flight.
pub const PENDING_TEXT: &str = "Sending to server...";

/// Visual state of the output area during one interaction cycle.
///
/// Owned by the UI surface; mutated only by the submit flow. Exactly one
/// terminal state (`Success` or `Error`) follows each applied
/// submission, always preceded by `Loading`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayState {
    /// Output area is not shown.
    #[default]
    Hidden,
    /// A request is in flight.
    Loading,
    /// The endpoint responded; carries the full response body.
    Success(String),
    /// The transport failed; carries the failure's string representation.
    Error(String),
}

impl DisplayState {
    /// Whether the output area should be shown.
    pub fn is_visible(&self) -> bool {
        !matches!(self, DisplayState::Hidden)
    }

    /// Whether this is a terminal state for a submission.
    pub fn is_terminal(&self) -> bool {
        matches!(self, DisplayState::Success(_) | DisplayState::Error(_))
    }

    /// Get a simple status string for logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            DisplayState::Hidden => "hidden",
            DisplayState::Loading => "loading",
            DisplayState::Success(_) => "success",
            DisplayState::Error(_) => "error",
        }
    }
}

/// Render a display state to output-area markup.
///
/// Response content is inserted as-is; the only transformation is the
/// newline-to-`<br>` substitution on the success path.
pub fn render_display(state: &DisplayState) -> String {
    match state {
        DisplayState::Hidden => String::new(),
        DisplayState::Loading => PENDING_TEXT.to_string(),
        DisplayState::Success(body) => {
            format!(
                "<strong>{RESPONSE_LABEL}</strong><br>{}",
                body.replace('\n', "<br>")
            )
        }
        DisplayState::Error(message) => format!("<strong>{ERROR_LABEL}</strong> {message}"),
    }
}

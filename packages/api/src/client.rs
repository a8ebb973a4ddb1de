//! Submit flow driving the display state machine.

use std::time::Duration;

use echo_core::{DisplayState, Submission, SubmitError, TokenIssuer};

use crate::config::EchoConfig;
use crate::transport::{EchoTransport, HttpTransport, with_deadline};

/// Drives one echo interaction: validate the input, dispatch the
/// request, and apply the outcome to the display state.
///
/// State machine per submission:
/// `Loading -> Success(body)` when the endpoint responds, or
/// `Loading -> Error(message)` when the transport fails. Blank input is
/// rejected before any state change. Each submission carries a request
/// token; a completion whose token has been superseded is discarded, so
/// overlapping submissions resolve to the most recently submitted one.
pub struct EchoClient<T> {
    transport: T,
    timeout: Option<Duration>,
    tokens: TokenIssuer,
}

impl EchoClient<HttpTransport> {
    /// Build a reqwest-backed client from a config.
    pub fn from_config(config: &EchoConfig) -> Self {
        Self::new(HttpTransport::new(config.endpoint.clone()), config.timeout)
    }
}

impl<T: EchoTransport> EchoClient<T> {
    pub fn new(transport: T, timeout: Option<Duration>) -> Self {
        Self {
            transport,
            timeout,
            tokens: TokenIssuer::new(),
        }
    }

    /// Submit the field contents read at call time.
    ///
    /// On blank input, returns `SubmitError::BlankInput` without calling
    /// the network or touching the display state. Otherwise `apply` sees
    /// `Loading` before the request is dispatched, then exactly one
    /// terminal state, unless a later submission superseded this one.
    /// No retry is performed; each call issues at most one request.
    pub async fn submit<F>(&self, raw_input: &str, mut apply: F) -> Result<(), SubmitError>
    where
        F: FnMut(DisplayState),
    {
        let submission = Submission::parse(raw_input)?;
        let token = self.tokens.issue();

        apply(DisplayState::Loading);
        tracing::debug!(%token, bytes = submission.as_str().len(), "dispatching echo request");

        let outcome = match self.timeout {
            Some(limit) => with_deadline(limit, self.transport.send(submission.as_str())).await,
            None => self.transport.send(submission.as_str()).await,
        };

        if !self.tokens.is_latest(token) {
            tracing::debug!(%token, "discarding superseded completion");
            return Ok(());
        }

        match outcome {
            Ok(body) => {
                tracing::debug!(%token, bytes = body.len(), "echo response received");
                apply(DisplayState::Success(body));
            }
            Err(err) => {
                tracing::warn!(%token, error = %err, "echo request failed");
                apply(DisplayState::Error(err.to_string()));
            }
        }

        Ok(())
    }
}

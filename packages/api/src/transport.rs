//! Transport seam for the echo request.

use std::future::Future;
use std::time::Duration;

/// Error raised when the transport fails to produce a response body.
#[derive(Debug, Clone, thiserror::Error)]
pub enum TransportError {
    /// No response was obtained: unreachable host, aborted connection,
    /// or a failure while reading the body.
    #[error("{0}")]
    Network(String),

    /// The configured deadline elapsed before the transport completed.
    /// Only reachable when a timeout is configured.
    #[error("request timed out after {0:?}")]
    Timeout(Duration),
}

/// A one-shot, text-in/text-out request to the echo endpoint.
pub trait EchoTransport {
    /// Send `body` and read the full response body as text.
    async fn send(&self, body: &str) -> Result<String, TransportError>;
}

/// HTTP transport backed by reqwest.
///
/// Posts the submission as `text/plain` and reads the response body in
/// full. The status code is never inspected: a non-2xx response with a
/// readable body is returned as text like any other.
pub struct HttpTransport {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpTransport {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// The URL submissions are posted to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl EchoTransport for HttpTransport {
    async fn send(&self, body: &str) -> Result<String, TransportError> {
        let response = self
            .client
            .post(&self.endpoint)
            .header(reqwest::header::CONTENT_TYPE, "text/plain")
            .body(body.to_string())
            .send()
            .await
            .map_err(|err| TransportError::Network(err.to_string()))?;

        response
            .text()
            .await
            .map_err(|err| TransportError::Network(err.to_string()))
    }
}

/// Race `request` against a deadline.
#[cfg(not(target_arch = "wasm32"))]
pub(crate) async fn with_deadline<F>(limit: Duration, request: F) -> Result<String, TransportError>
where
    F: Future<Output = Result<String, TransportError>>,
{
    match tokio::time::timeout(limit, request).await {
        Ok(outcome) => outcome,
        Err(_) => Err(TransportError::Timeout(limit)),
    }
}

/// Race `request` against a deadline.
#[cfg(target_arch = "wasm32")]
pub(crate) async fn with_deadline<F>(limit: Duration, request: F) -> Result<String, TransportError>
where
    F: Future<Output = Result<String, TransportError>>,
{
    use futures_util::future::{Either, select};

    let sleep = gloo_timers::future::sleep(limit);
    match select(std::pin::pin!(request), std::pin::pin!(sleep)).await {
        Either::Left((outcome, _)) => outcome,
        Either::Right(((), _)) => Err(TransportError::Timeout(limit)),
    }
}

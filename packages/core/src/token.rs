//! Request tokens for resolving overlapping submissions.

use std::sync::atomic::{AtomicU64, Ordering};

/// Token identifying one issued request, ordered by issue time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

impl std::fmt::Display for RequestToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Issues monotonically increasing request tokens.
///
/// A completion applies its result only while its token is still the
/// latest issued; completions carrying an older token are discarded, so
/// overlapping submissions resolve to the most recently submitted one
/// regardless of network completion order.
#[derive(Debug, Default)]
pub struct TokenIssuer {
    latest: AtomicU64,
}

impl TokenIssuer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue the next token, making it the latest.
    pub fn issue(&self) -> RequestToken {
        RequestToken(self.latest.fetch_add(1, Ordering::Relaxed) + 1)
    }

    /// Whether `token` is still the most recently issued.
    pub fn is_latest(&self, token: RequestToken) -> bool {
        self.latest.load(Ordering::Relaxed) == token.0
    }
}

//! Provider failure classification shared across the fallback chain

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Outcome classification for a single provider attempt
///
/// `Unavailable` and `Malformed` are soft failures absorbed by the
/// fallback chain; `RateLimited` and `AuthError` are hard failures
/// surfaced to the user alongside locally generated feedback.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProviderFailure {
    #[error("provider unavailable")]
    Unavailable,

    #[error("rate limit exceeded")]
    RateLimited,

    #[error("authentication failed")]
    AuthError,

    #[error("malformed response: {0}")]
    Malformed(String),
}

impl ProviderFailure {
    /// Hard failures short-circuit the chain with a diagnostic preamble
    pub fn is_hard(&self) -> bool {
        matches!(self, ProviderFailure::RateLimited | ProviderFailure::AuthError)
    }
}

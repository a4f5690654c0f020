//! Shared vocabulary for the speaking-practice coach
//!
//! Cross-cutting types, failure classification, and logging setup used by
//! the application crates.

pub mod errors;
pub mod logging;
pub mod types;

// Re-export main types
pub use errors::ProviderFailure;
pub use types::{ProviderId, SessionMode};

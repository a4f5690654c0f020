//! Coach error types

use thiserror::Error;

/// Result type for coach operations
pub type CoachResult<T> = Result<T, CoachError>;

/// Coach error types
///
/// Only the pre-session permission check and the optional practice-plan
/// path surface these to the caller; post-session analysis never fails.
#[derive(Error, Debug)]
pub enum CoachError {
    #[error("microphone permission denied")]
    PermissionDenied,

    #[error("voice transport error: {message}")]
    Transport { message: String },

    #[error("a session is already in progress")]
    SessionBusy,

    #[error("practice plan generation failed: {message}")]
    PlanGeneration { message: String },

    #[error("configuration error: {message}")]
    Config { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

//! Speaking-practice coaching core
//!
//! Drives a timed practice session against a remote voice agent and,
//! when it ends, produces written feedback through an ordered chain of
//! inference providers that always terminates in a local generator.

pub mod config;
pub mod core;
pub mod error;
pub mod services;
pub mod traits;
pub mod types;

// Re-export main types
pub use config::Settings;
pub use core::{FeedbackOrchestrator, SessionController};
pub use error::{CoachError, CoachResult};
pub use traits::*;
pub use types::*;

//! Session lifecycle and feedback-generation core

pub mod context;
pub mod fallback;
pub mod normalizer;
pub mod orchestrator;
pub mod prompt;
pub mod session;

pub use context::build_context;
pub use fallback::generate_demo;
pub use normalizer::ResponseNormalizer;
pub use orchestrator::FeedbackOrchestrator;
pub use session::SessionController;

//! Service implementations for external collaborators

pub mod catalog;
pub mod plan_generator;
pub mod providers;

#[cfg(test)]
mod tests;

pub use plan_generator::OpenAiPlanGenerator;
pub use providers::{adapters_from_settings, GeminiAdapter, HuggingFaceAdapter, OpenAiAdapter};

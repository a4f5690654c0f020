//! Trait seams for dependency injection

use async_trait::async_trait;

use crate::error::CoachResult;
use crate::types::{AnalysisRequest, AnalysisResult, ContextPayload, PracticePlan, PracticePlanRequest};
use shared::{ProviderFailure, ProviderId};

/// One adapter per external inference provider
///
/// Translates the provider-neutral request into that provider's wire call
/// and classifies the response into `Ok(text)` or a `ProviderFailure`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProviderAdapter: Send + Sync {
    /// Which provider this adapter speaks to
    fn provider(&self) -> ProviderId;

    /// False when the credential is absent; unconfigured adapters are
    /// skipped without a network call
    fn is_configured(&self) -> bool;

    /// Request free-text coaching feedback for a completed session
    async fn request_feedback(&self, request: &AnalysisRequest) -> Result<String, ProviderFailure>;
}

/// Remote real-time voice transport (external collaborator)
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VoiceTransport: Send + Sync {
    /// Ask the audio-capture collaborator for microphone access
    async fn request_permission(&self) -> CoachResult<()>;

    /// Open the connection to the remote voice agent
    async fn open(&self) -> CoachResult<()>;

    /// Send the structured agent context, once per session
    async fn send_context(&self, context: &ContextPayload) -> CoachResult<()>;

    /// Signal the remote transport to close gracefully
    async fn close(&self) -> CoachResult<()>;
}

/// Post-session feedback producer; total, never returns an error
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SessionAnalyzer: Send + Sync {
    async fn analyze(&self, request: &AnalysisRequest) -> AnalysisResult;
}

/// Structured weekly-plan generation against a single designated provider
///
/// Unlike `SessionAnalyzer`, failures propagate: this path is optional
/// and user-initiated, so the caller surfaces the error.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PlanGenerator: Send + Sync {
    async fn generate_plan(&self, request: &PracticePlanRequest) -> CoachResult<PracticePlan>;
}

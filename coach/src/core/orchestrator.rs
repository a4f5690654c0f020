//! Feedback orchestration over the provider fallback chain
//!
//! Walks a statically ordered adapter list and always terminates with
//! the local generator: `analyze` is total and never surfaces an error.

use async_trait::async_trait;
use tracing::{debug, info, warn};

use crate::core::fallback::generate_demo;
use crate::core::normalizer::ResponseNormalizer;
use crate::traits::{ProviderAdapter, SessionAnalyzer};
use crate::types::{AnalysisRequest, AnalysisResult};
use shared::{ProviderFailure, ProviderId};

/// Orchestrates the ordered fallback chain for post-session analysis
pub struct FeedbackOrchestrator {
    adapters: Vec<Box<dyn ProviderAdapter>>,
    normalizer: ResponseNormalizer,
}

impl FeedbackOrchestrator {
    /// Build an orchestrator over a fixed priority-ordered adapter list
    pub fn new(adapters: Vec<Box<dyn ProviderAdapter>>) -> Self {
        Self {
            adapters,
            normalizer: ResponseNormalizer::new(),
        }
    }

    /// Produce displayable feedback for a completed session
    ///
    /// Soft failures (unavailable, malformed, network) move on to the
    /// next adapter; hard failures (rate limit, auth) return a short
    /// diagnostic followed by locally generated feedback so the user
    /// both learns why remote analysis was skipped and still gets
    /// usable coaching.
    pub async fn analyze(&self, request: &AnalysisRequest) -> AnalysisResult {
        for adapter in &self.adapters {
            let provider = adapter.provider();

            if !adapter.is_configured() {
                debug!("skipping {provider}: no credential configured");
                continue;
            }

            info!("requesting analysis from {provider}");
            match adapter.request_feedback(request).await {
                Ok(text) => {
                    info!("analysis produced by {provider}");
                    return AnalysisResult {
                        provider: provider.to_string(),
                        body: self.normalizer.normalize(provider, &text, request),
                    };
                }
                Err(failure) if failure.is_hard() => {
                    warn!("{provider} failed hard ({failure}), falling back locally");
                    return AnalysisResult {
                        provider: ProviderId::Local.to_string(),
                        body: format!(
                            "{}\n\n{}",
                            hard_failure_notice(provider, &failure),
                            generate_demo(request)
                        ),
                    };
                }
                Err(failure) => {
                    warn!("{provider} unavailable ({failure}), trying next provider");
                }
            }
        }

        info!("no remote provider produced analysis, using local generator");
        AnalysisResult {
            provider: ProviderId::Local.to_string(),
            body: generate_demo(request),
        }
    }
}

#[async_trait]
impl SessionAnalyzer for FeedbackOrchestrator {
    async fn analyze(&self, request: &AnalysisRequest) -> AnalysisResult {
        FeedbackOrchestrator::analyze(self, request).await
    }
}

/// Short user-facing diagnostic for surfaced hard failures
fn hard_failure_notice(provider: ProviderId, failure: &ProviderFailure) -> String {
    let label = provider.label();
    match failure {
        ProviderFailure::AuthError => format!(
            "{label} API Key Issue\n\nUnable to authenticate with {label}. Please check your API key."
        ),
        ProviderFailure::RateLimited => format!(
            "{label} Rate Limit Exceeded\n\nYou've reached your {label} API usage limit."
        ),
        // is_hard() guards the other variants out of this path
        other => format!("{label} Error\n\n{other}"),
    }
}

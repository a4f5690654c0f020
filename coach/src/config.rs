//! Environment-backed configuration surface

use std::env;

/// Trivial-session guard default: skip analysis below this many seconds
/// when the transcript is empty
const DEFAULT_MIN_ANALYSIS_SECS: u64 = 10;

/// Credentials and tuning knobs supplied out-of-band
///
/// Absent credentials degrade the matching adapter to "unconfigured";
/// they never abort startup.
#[derive(Debug, Clone, Default)]
pub struct Settings {
    pub openai_api_key: Option<String>,
    pub gemini_api_key: Option<String>,
    pub huggingface_api_key: Option<String>,
    /// External voice-agent identifier for the transport layer
    pub agent_id: Option<String>,
    pub min_analysis_secs: u64,
}

impl Settings {
    /// Collect settings from the process environment
    pub fn from_env() -> Self {
        Self {
            openai_api_key: non_empty_var("OPENAI_API_KEY"),
            gemini_api_key: non_empty_var("GEMINI_API_KEY").or_else(|| non_empty_var("GOOGLE_API_KEY")),
            huggingface_api_key: non_empty_var("HUGGINGFACE_API_KEY"),
            agent_id: non_empty_var("ELEVEN_AGENT_ID"),
            min_analysis_secs: non_empty_var("COACH_MIN_ANALYSIS_SECS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_MIN_ANALYSIS_SECS),
        }
    }

    pub fn has_any_provider(&self) -> bool {
        self.openai_api_key.is_some() || self.gemini_api_key.is_some() || self.huggingface_api_key.is_some()
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

//! Coach-specific data types

use serde::{Deserialize, Serialize};
use shared::types::format_duration;
use shared::SessionMode;

/// Target duration bounds and adjustment step, in seconds
pub const DURATION_MIN_SECS: u64 = 30;
pub const DURATION_MAX_SECS: u64 = 600;
pub const DURATION_STEP_SECS: u64 = 30;
const DURATION_DEFAULT_SECS: u64 = 120;

/// Focus areas applied when the user clears every tag
pub fn default_focus_areas() -> Vec<String> {
    ["Clarity", "Structure", "Pace", "Body Language"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

/// User-editable session parameters
///
/// Mutated only through explicit edits before a session; the controller
/// snapshots it at `begin` so mid-session edits cannot leak in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    pub speaker_name: Option<String>,
    pub mode: SessionMode,
    pub topic: Option<String>,
    duration_secs: u64,
    focus_areas: Vec<String>,
}

impl SessionConfig {
    pub fn new(mode: SessionMode) -> Self {
        Self {
            speaker_name: None,
            mode,
            topic: None,
            duration_secs: DURATION_DEFAULT_SECS,
            focus_areas: default_focus_areas(),
        }
    }

    /// Adjust the target duration by whole ±30s steps, clamped to [30, 600]
    pub fn adjust_duration(&mut self, steps: i64) {
        let delta = steps.saturating_mul(DURATION_STEP_SECS as i64);
        let next = self.duration_secs as i64 + delta;
        self.duration_secs = next.clamp(DURATION_MIN_SECS as i64, DURATION_MAX_SECS as i64) as u64;
    }

    pub fn duration_secs(&self) -> u64 {
        self.duration_secs
    }

    pub fn set_duration_secs(&mut self, secs: u64) {
        self.duration_secs = secs.clamp(DURATION_MIN_SECS, DURATION_MAX_SECS);
    }

    /// Replace the focus-area tags; an empty set falls back to the defaults
    pub fn set_focus_areas(&mut self, tags: Vec<String>) {
        let tags: Vec<String> = tags.into_iter().filter(|t| !t.trim().is_empty()).collect();
        self.focus_areas = if tags.is_empty() { default_focus_areas() } else { tags };
    }

    pub fn focus_areas(&self) -> &[String] {
        &self.focus_areas
    }

    /// Topic falls back to the mode's hint when left blank
    pub fn resolved_topic(&self) -> String {
        self.topic
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .unwrap_or(self.mode.default_topic())
            .to_string()
    }

    pub fn speaker(&self) -> String {
        self.speaker_name
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .unwrap_or("Speaker")
            .to_string()
    }
}

/// Session lifecycle states, owned exclusively by the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Connecting,
    Active,
    Ending,
    Analyzing,
}

impl std::fmt::Display for SessionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SessionState::Idle => "idle",
            SessionState::Connecting => "connecting",
            SessionState::Active => "active",
            SessionState::Ending => "ending",
            SessionState::Analyzing => "analyzing",
        };
        write!(f, "{name}")
    }
}

/// Read-only snapshot handed to the feedback orchestrator at session end
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub speaker_name: String,
    pub mode: SessionMode,
    pub topic: String,
    pub duration_secs: u64,
    pub focus_areas: Vec<String>,
    pub transcript: Vec<String>,
}

impl AnalysisRequest {
    /// Transcript fragments joined in arrival order
    pub fn transcript_text(&self) -> String {
        self.transcript.join(" ")
    }

    pub fn duration_display(&self) -> String {
        format_duration(self.duration_secs)
    }

    /// Fixed-format session summary appended to every analysis body
    pub fn summary_footer(&self) -> String {
        format!(
            "Session Summary:\n- Mode: {}\n- Topic: \"{}\"\n- Duration: {}\n- Focus Areas: {}",
            self.mode.label(),
            self.topic,
            self.duration_display(),
            self.focus_areas.join(", ")
        )
    }
}

/// Displayable feedback, always produced for a completed session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Provider the body is attributed to; "local" for generated fallback
    pub provider: String,
    pub body: String,
}

/// Request for the optional practice-plan path
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PracticePlanRequest {
    pub mode: SessionMode,
    pub topic: String,
    pub focus_areas: Vec<String>,
    pub skill_level: String,
    pub daily_minutes: u32,
    pub speaker_name: Option<String>,
}

/// One day of a generated weekly practice plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanDay {
    pub day: String,
    pub focus: String,
    pub exercises: String,
    pub activities: String,
}

/// Weekly plan merged with the curated resource catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PracticePlan {
    pub days: Vec<PlanDay>,
    pub resources: ResourceCatalog,
}

/// One curated learning resource
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    pub title: String,
    pub source: String,
    pub note: String,
    pub url: String,
}

/// Mode-keyed curated resources merged into practice plans
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceCatalog {
    pub books: Vec<Resource>,
    pub videos: Vec<Resource>,
    pub courses: Vec<Resource>,
    pub articles: Vec<Resource>,
}

/// Structured context sent once to the voice agent at session start
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContextPayload {
    pub roleplay: RoleplayContext,
    pub guidance: String,
    pub rubric: String,
    pub format: String,
    pub disclaimer: String,
}

/// Session parameters embedded in the agent context
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleplayContext {
    pub persona: String,
    pub mode: String,
    pub topic: String,
    pub duration_sec: u64,
    pub focus_areas: Vec<String>,
    pub speaker_name: String,
}

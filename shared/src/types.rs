//! Core types used throughout the coaching system

use serde::{Deserialize, Serialize};
use std::fmt;

/// Inference providers available for post-session analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProviderId {
    HuggingFace,
    Gemini,
    OpenAI,
    /// Deterministic on-device generator, always available
    Local,
}

impl ProviderId {
    /// Short human-readable name used in result headers
    pub fn label(&self) -> &'static str {
        match self {
            ProviderId::HuggingFace => "Hugging Face",
            ProviderId::Gemini => "Google Gemini",
            ProviderId::OpenAI => "OpenAI",
            ProviderId::Local => "Local",
        }
    }

    /// Attribution line naming the provider and model behind a result
    pub fn attribution(&self) -> &'static str {
        match self {
            ProviderId::HuggingFace => "Hugging Face (DialoGPT)",
            ProviderId::Gemini => "Google Gemini",
            ProviderId::OpenAI => "OpenAI (gpt-3.5-turbo)",
            ProviderId::Local => "local analysis",
        }
    }
}

impl fmt::Display for ProviderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderId::HuggingFace => write!(f, "huggingface"),
            ProviderId::Gemini => write!(f, "gemini"),
            ProviderId::OpenAI => write!(f, "openai"),
            ProviderId::Local => write!(f, "local"),
        }
    }
}

impl std::str::FromStr for ProviderId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "huggingface" | "hf" => Ok(ProviderId::HuggingFace),
            "gemini" | "google" => Ok(ProviderId::Gemini),
            "openai" => Ok(ProviderId::OpenAI),
            "local" => Ok(ProviderId::Local),
            _ => Err(format!("Unknown provider: {s}")),
        }
    }
}

/// Speaking-practice modes selectable for a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionMode {
    ElevatorPitch,
    LightningTalk,
    ProductDemo,
    ProjectUpdate,
    ThesisDefense,
}

impl SessionMode {
    /// Display label matching the resource catalog keys
    pub fn label(&self) -> &'static str {
        match self {
            SessionMode::ElevatorPitch => "Elevator Pitch",
            SessionMode::LightningTalk => "Lightning Talk",
            SessionMode::ProductDemo => "Product Demo",
            SessionMode::ProjectUpdate => "Project Update",
            SessionMode::ThesisDefense => "Thesis Defense",
        }
    }

    /// Topic hint used when the user leaves the topic blank
    pub fn default_topic(&self) -> &'static str {
        match self {
            SessionMode::ElevatorPitch => "Introduce yourself and your idea in one minute",
            SessionMode::LightningTalk => "A tool or idea your audience should know about",
            SessionMode::ProductDemo => "Walk through your product's core workflow",
            SessionMode::ProjectUpdate => "This week's progress, risks, and next steps",
            SessionMode::ThesisDefense => "Summarize your research question and contribution",
        }
    }

    /// All modes in catalog order
    pub fn all() -> &'static [SessionMode] {
        &[
            SessionMode::ElevatorPitch,
            SessionMode::LightningTalk,
            SessionMode::ProductDemo,
            SessionMode::ProjectUpdate,
            SessionMode::ThesisDefense,
        ]
    }
}

impl fmt::Display for SessionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for SessionMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace([' ', '_'], "-").as_str() {
            "elevator-pitch" | "pitch" => Ok(SessionMode::ElevatorPitch),
            "lightning-talk" | "lightning" => Ok(SessionMode::LightningTalk),
            "product-demo" | "demo" => Ok(SessionMode::ProductDemo),
            "project-update" | "update" => Ok(SessionMode::ProjectUpdate),
            "thesis-defense" | "thesis" => Ok(SessionMode::ThesisDefense),
            _ => Err(format!("Unknown session mode: {s}")),
        }
    }
}

/// Format elapsed seconds as m:ss for summaries and result footers
pub fn format_duration(secs: u64) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}

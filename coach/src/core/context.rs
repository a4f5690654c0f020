//! Agent context construction
//!
//! Builds the structured payload sent once to the remote voice agent
//! when a session connects. The transport treats it as opaque JSON.

use crate::types::{ContextPayload, RoleplayContext, SessionConfig};

const PERSONA: &str = "Public Speaking Coach";

const GUIDANCE: &str = "Act as a friendly but rigorous speaking coach. Outline a 20-40 second \
warmup, then cue the user to begin. While the user is speaking, stay mostly silent. Give only a \
brief backchannel about once every 20 seconds. After the duration target, stop the user politely \
and give concise feedback with 3 bullet points and 1 actionable next step. Keep replies short.";

const RUBRIC: &str = "Prioritize clarity, structure, pacing, and filler words. If focus areas \
are provided, weight feedback toward them. Never give medical, legal, or financial guidance.";

const FORMAT: &str = "Use short paragraphs. When ending, ask if the user wants another round or \
a different mode.";

const DISCLAIMER: &str = "This is for practice and education.";

/// Materialize the agent context from a session-config snapshot
pub fn build_context(config: &SessionConfig) -> ContextPayload {
    ContextPayload {
        roleplay: RoleplayContext {
            persona: PERSONA.to_string(),
            mode: config.mode.label().to_string(),
            topic: config.resolved_topic(),
            duration_sec: config.duration_secs(),
            focus_areas: config.focus_areas().to_vec(),
            speaker_name: config.speaker(),
        },
        guidance: GUIDANCE.to_string(),
        rubric: RUBRIC.to_string(),
        format: FORMAT.to_string(),
        disclaimer: DISCLAIMER.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::SessionMode;

    #[test]
    fn test_context_carries_session_parameters() {
        let mut config = SessionConfig::new(SessionMode::LightningTalk);
        config.speaker_name = Some("Grace".into());
        config.topic = Some("Error budgets".into());
        config.set_focus_areas(vec!["Pace".into(), "Clarity".into()]);

        let payload = build_context(&config);
        assert_eq!(payload.roleplay.persona, "Public Speaking Coach");
        assert_eq!(payload.roleplay.mode, "Lightning Talk");
        assert_eq!(payload.roleplay.topic, "Error budgets");
        assert_eq!(payload.roleplay.duration_sec, config.duration_secs());
        assert_eq!(payload.roleplay.focus_areas, vec!["Pace", "Clarity"]);
        assert_eq!(payload.roleplay.speaker_name, "Grace");
    }

    #[test]
    fn test_rubric_prohibits_regulated_advice() {
        let payload = build_context(&SessionConfig::new(SessionMode::ProductDemo));
        assert!(payload.rubric.contains("medical, legal, or financial"));
        assert!(payload.guidance.contains("stay mostly silent"));
    }

    #[test]
    fn test_serializes_with_camel_case_parameters() {
        let payload = build_context(&SessionConfig::new(SessionMode::ElevatorPitch));
        let json = serde_json::to_value(&payload).unwrap();
        let roleplay = &json["roleplay"];
        assert!(roleplay.get("durationSec").is_some());
        assert!(roleplay.get("focusAreas").is_some());
        assert!(roleplay.get("speakerName").is_some());
        assert_eq!(roleplay["topic"], SessionMode::ElevatorPitch.default_topic());
    }
}

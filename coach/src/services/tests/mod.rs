//! Wire-contract tests for service implementations

mod providers;

use crate::types::AnalysisRequest;
use shared::SessionMode;

/// A representative completed-session snapshot
pub fn sample_request() -> AnalysisRequest {
    AnalysisRequest {
        speaker_name: "Ada".into(),
        mode: SessionMode::ElevatorPitch,
        topic: "Why our compiler is faster".into(),
        duration_secs: 140,
        focus_areas: vec!["Clarity".into(), "Pace".into()],
        transcript: vec!["hi everyone".into(), "our compiler".into()],
    }
}

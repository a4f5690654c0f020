//! Prompt construction for analysis and plan requests

use crate::types::{AnalysisRequest, PracticePlanRequest};

/// System prompt for post-session analysis providers
pub const ANALYSIS_SYSTEM_PROMPT: &str = "You are an expert public speaking coach who analyzes \
completed practice sessions. Provide constructive, encouraging, and specific feedback based on \
actual session data. Never provide hypothetical or generic advice - always base your analysis on \
the specific session details provided.";

/// Build the analysis prompt from a completed-session snapshot
///
/// The transcript section is included only when fragments arrived.
pub fn build_analysis_prompt(request: &AnalysisRequest) -> String {
    let mut prompt = format!(
        "You are a professional public speaking coach analyzing a completed practice session. \
This was a real speaking practice session, not a video or hypothetical scenario.\n\n\
SESSION DETAILS:\n\
- Speaking Mode: {}\n\
- Topic: \"{}\"\n\
- Duration: {} minutes {} seconds\n\
- Speaker: {}\n\
- Focus Areas: {}",
        request.mode.label(),
        request.topic,
        request.duration_secs / 60,
        request.duration_secs % 60,
        request.speaker_name,
        request.focus_areas.join(", "),
    );

    if !request.transcript.is_empty() {
        prompt.push_str(&format!("\n- Session Transcript: \"{}\"", request.transcript_text()));
    }

    prompt.push_str(&format!(
        "\n\nIMPORTANT: This was an actual speaking practice session that just completed. \
Provide specific, actionable feedback based on the session details above.\n\n\
Please provide coaching feedback in this exact format:\n\n\
STRENGTHS:\n- [List what went well in this practice session]\n\n\
IMPROVEMENTS:\n- [List specific areas to work on based on the focus areas: {}]\n\n\
NEXT STEPS:\n- [Provide actionable suggestions for the next practice session]\n\n\
SCORE: X/10\n\n\
Keep feedback encouraging, specific, and actionable. Base your analysis on the actual session \
data provided, not hypothetical scenarios.",
        request.focus_areas.join(", "),
    ));

    prompt
}

/// System prompt for the structured weekly practice plan
pub fn build_plan_prompt(request: &PracticePlanRequest) -> String {
    format!(
        "You are an expert public speaking coach. Create a comprehensive practice plan for \
someone preparing for a {}.\n\n\
Topic: {}\n\
Speaker: {}\n\
Focus Areas: {}\n\
Skill Level: {}\n\
Daily Practice Time: {} minutes\n\n\
Generate a detailed 1-week practice plan with daily exercises and activities integrated into \
each day. Each day should include specific exercises to practice along with the daily focus \
area and activities.\n\n\
Be specific, practical, and tailored to their level and focus areas.",
        request.mode.label(),
        request.topic,
        request.speaker_name.as_deref().unwrap_or("User"),
        request.focus_areas.join(", "),
        request.skill_level,
        request.daily_minutes,
    )
}

//! Deterministic local feedback generation
//!
//! Last link of the fallback chain: synthesizes coaching feedback from
//! session metadata alone. Pure and total; identical requests produce
//! byte-identical output.

use crate::types::AnalysisRequest;

/// Canned strength line per recognized focus-area tag
const STRENGTHS: &[(&str, &str)] = &[
    ("Clarity", "You maintained clear articulation throughout the session"),
    ("Structure", "Your content followed a logical flow from introduction to conclusion"),
    ("Pace", "You demonstrated good awareness of speaking rhythm"),
    ("Body Language", "Your posture and gestures supported your verbal message"),
    ("Eye Contact", "You maintained appropriate eye contact during delivery"),
];

/// Canned improvement line per recognized focus-area tag
const IMPROVEMENTS: &[(&str, &str)] = &[
    ("Clarity", "Work on enunciating key terms more distinctly"),
    ("Structure", "Consider adding clearer transitions between main points"),
    ("Pace", "Experiment with strategic pauses for emphasis"),
    ("Body Language", "Practice more purposeful hand gestures"),
    ("Eye Contact", "Try scanning different sections of your audience"),
];

const GENERIC_STRENGTH: &str = "You completed the full practice session with dedication";
const GENERIC_IMPROVEMENT: &str = "Focus on one specific skill area in your next session";

/// Session score in [7, 10] from duration and focus-area engagement
pub fn score(request: &AnalysisRequest) -> u8 {
    let mut score = 7u8;
    if request.duration_secs >= 120 {
        score += 1;
    }
    if request.duration_secs >= 60 {
        score += 1;
    }
    if request.focus_areas.len() >= 3 {
        score += 1;
    }
    score.min(10)
}

fn lookup_lines(table: &[(&str, &str)], focus_areas: &[String], generic: &str) -> Vec<String> {
    let mut lines: Vec<String> = table
        .iter()
        .filter(|(tag, _)| focus_areas.iter().any(|area| area.eq_ignore_ascii_case(tag)))
        .map(|(_, line)| line.to_string())
        .collect();
    if lines.is_empty() {
        lines.push(generic.to_string());
    }
    lines
}

fn bullet_list(lines: &[String]) -> String {
    lines.iter().map(|l| format!("- {l}")).collect::<Vec<_>>().join("\n")
}

/// Generate demo feedback from the session snapshot alone
pub fn generate_demo(request: &AnalysisRequest) -> String {
    let strengths = lookup_lines(STRENGTHS, &request.focus_areas, GENERIC_STRENGTH);
    let improvements = lookup_lines(IMPROVEMENTS, &request.focus_areas, GENERIC_IMPROVEMENT);

    // Suggest one minute beyond the (rounded-up) minutes just practiced
    let next_minutes = request.duration_secs.div_ceil(60) + 1;
    let first_focus = request
        .focus_areas
        .first()
        .map(|f| f.to_lowercase())
        .unwrap_or_else(|| "clarity".to_string());
    let next_steps = [
        format!("Practice the same topic for {next_minutes} minutes next time"),
        "Record yourself to review your delivery".to_string(),
        format!("Focus specifically on {first_focus} in your next session"),
    ];

    format!(
        "Demo Analysis\n\n\
STRENGTHS:\n{}\n\n\
IMPROVEMENTS:\n{}\n\n\
NEXT STEPS:\n{}\n\n\
SCORE: {}/10\n\n\
{}\n\n\
Great job completing your practice session! Consistent practice is the key to improvement.\n\n\
---\n\
Demo analysis mode - connect a provider API key for AI feedback",
        bullet_list(&strengths),
        bullet_list(&improvements),
        bullet_list(&next_steps),
        score(request),
        request.summary_footer(),
    )
}

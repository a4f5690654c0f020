//! Response normalization for remote provider output
//!
//! Providers return markdown-flavored free text; the UI renders plain
//! text. Strips emphasis markers, collapses excess blank lines, and
//! wraps the body in a standard envelope with the session summary and a
//! provider attribution.

use regex::Regex;

use crate::types::AnalysisRequest;
use shared::ProviderId;

/// Normalizer with pre-compiled cleanup patterns
pub struct ResponseNormalizer {
    bold: Regex,
    italic: Regex,
    code: Regex,
    underline: Regex,
    blank_lines: Regex,
}

impl ResponseNormalizer {
    pub fn new() -> Self {
        Self {
            bold: Regex::new(r"\*\*(.*?)\*\*").expect("valid regex"),
            italic: Regex::new(r"\*(.*?)\*").expect("valid regex"),
            code: Regex::new(r"`(.*?)`").expect("valid regex"),
            underline: Regex::new(r"_{1,2}(.*?)_{1,2}").expect("valid regex"),
            // Greedy \s* swallows whole runs, so one pass collapses any
            // stretch of 3+ newline-ish lines down to a single blank line
            blank_lines: Regex::new(r"\n\s*\n\s*\n").expect("valid regex"),
        }
    }

    /// Strip markup tokens and excess blank lines from raw provider text
    fn clean(&self, raw: &str) -> String {
        let text = self.bold.replace_all(raw, "$1");
        let text = self.italic.replace_all(&text, "$1");
        let text = self.code.replace_all(&text, "$1");
        let text = self.underline.replace_all(&text, "$1");
        let text = self.blank_lines.replace_all(&text, "\n\n");
        text.trim().to_string()
    }

    /// Assemble the standard envelope around cleaned provider output
    pub fn normalize(&self, provider: ProviderId, raw: &str, request: &AnalysisRequest) -> String {
        format!(
            "AI Analysis via {}\n\n{}\n\n{}\n\n---\nPowered by {}",
            provider.label(),
            self.clean(raw),
            request.summary_footer(),
            provider.attribution(),
        )
    }
}

impl Default for ResponseNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

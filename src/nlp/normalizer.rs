//! Text normalization
//!
//! Every transform consumes normalized text: lowercase, letters/spaces/
//! periods only, single-spaced, trimmed. The [`CleanedText`] newtype keeps
//! raw and cleaned strings from being confused at call sites.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

static DISALLOWED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-zA-Z\s.]").expect("valid character-class regex"));
static WHITESPACE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("valid whitespace regex"));

/// Normalized document text. Constructed only by [`normalize`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CleanedText(String);

impl CleanedText {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for CleanedText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Normalize raw document text.
///
/// Total function: any input is accepted, empty input yields empty output.
pub fn normalize(raw: &str) -> CleanedText {
    let stripped = DISALLOWED.replace_all(raw, "");
    let collapsed = WHITESPACE_RUN.replace_all(&stripped, " ");
    CleanedText(collapsed.trim().to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_and_strips() {
        let cleaned = normalize("John Smith visited Paris in 2020.");
        assert_eq!(cleaned.as_str(), "john smith visited paris in .");
    }

    #[test]
    fn test_collapses_whitespace() {
        let cleaned = normalize("  too\t\tmany\n\nspaces  ");
        assert_eq!(cleaned.as_str(), "too many spaces");
    }

    #[test]
    fn test_keeps_periods() {
        let cleaned = normalize("One. Two.");
        assert_eq!(cleaned.as_str(), "one. two.");
    }

    #[test]
    fn test_empty_input() {
        assert!(normalize("").is_empty());
        assert!(normalize("  \t\n ").is_empty());
    }

    #[test]
    fn test_idempotent() {
        let inputs = [
            "John Smith visited Paris in 2020.",
            "  Héllo,   wörld! 42 ",
            "already clean text.",
            "",
        ];
        for input in inputs {
            let once = normalize(input);
            let twice = normalize(once.as_str());
            assert_eq!(once, twice, "normalize not idempotent for {input:?}");
        }
    }

    #[test]
    fn test_output_alphabet() {
        let cleaned = normalize("A1 b2! C3? d4; é5 — f6.");
        for ch in cleaned.as_str().chars() {
            assert!(
                ch.is_ascii_lowercase() || ch == ' ' || ch == '.',
                "unexpected char {ch:?} in output"
            );
        }
        assert!(!cleaned.as_str().contains("  "));
    }
}

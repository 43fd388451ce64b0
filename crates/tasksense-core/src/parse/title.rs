//! Title cleanup.
//!
//! Strips the phrases that trigger priority or relative-date detection
//! from the original-case text, then collapses whitespace. The removal
//! list is a fixed superset of those trigger phrases; tag keywords stay
//! in the title because they usually carry meaning ("gym", "meeting").

use regex::Regex;
use std::sync::LazyLock;

/// Word-bounded, case-insensitive alternation over the removal list:
/// urgent, asap, "high priority", "low priority", today, tomorrow,
/// "next week", "next month", important, critical.
static NOISE_PHRASE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(urgent|asap|high priority|low priority|today|tomorrow|next week|next month|important|critical)\b",
    )
    .unwrap()
});

/// Produce a clean title from the original input text.
///
/// Removes every noise phrase, collapses runs of whitespace to single
/// spaces, and trims. If nothing is left, the original input is returned
/// unmodified so the caller never ends up with an empty title.
pub fn clean_title(text: &str) -> String {
    let stripped = NOISE_PHRASE_RE.replace_all(text, "");
    let collapsed = stripped.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.is_empty() {
        text.to_string()
    } else {
        collapsed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removes_priority_and_date_phrases() {
        assert_eq!(
            clean_title("Finish urgent project report tomorrow"),
            "Finish project report"
        );
        assert_eq!(
            clean_title("Review the high priority deck next week"),
            "Review the deck"
        );
    }

    #[test]
    fn removal_is_case_insensitive_but_preserves_remaining_case() {
        assert_eq!(clean_title("URGENT: Call Dana Today"), ": Call Dana");
        assert_eq!(clean_title("Urgent call Dana"), "call Dana");
    }

    #[test]
    fn phrases_inside_larger_words_survive() {
        assert_eq!(clean_title("check todays list"), "check todays list");
        assert_eq!(clean_title("criticality report"), "criticality report");
    }

    #[test]
    fn whitespace_collapses_after_removal() {
        assert_eq!(
            clean_title("Finish urgent project report tomorrow, 2 hours"),
            "Finish project report , 2 hours"
        );
    }

    #[test]
    fn all_noise_falls_back_to_original_input() {
        assert_eq!(clean_title("urgent asap"), "urgent asap");
        assert_eq!(clean_title(""), "");
    }

    #[test]
    fn plain_text_is_trimmed_and_collapsed() {
        assert_eq!(clean_title("  water   the plants  "), "water the plants");
    }
}

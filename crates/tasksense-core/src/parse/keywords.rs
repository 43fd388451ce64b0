//! Fixed keyword tables for lexical signal detection.
//!
//! All matching runs against a lowercased copy of the input, so the
//! tables only carry lowercase phrases. Priority groups are tested in
//! precedence order and the first hit wins; tag groups are tested
//! independently and every hit contributes.

use crate::task::{Priority, Tag};

/// Priority signal groups in precedence order. Urgent beats high beats
/// low; no combination logic.
pub(crate) const PRIORITY_SIGNALS: &[(Priority, &[&str])] = &[
    (Priority::Urgent, &["urgent", "asap", "critical"]),
    (Priority::High, &["high priority", "important"]),
    (Priority::Low, &["low priority", "minor"]),
];

/// Tag signal groups in fixed detection order.
pub(crate) const TAG_SIGNALS: &[(Tag, &[&str])] = &[
    (Tag::Study, &["study", "exam", "homework", "assignment"]),
    (Tag::Work, &["work", "meeting", "project", "presentation"]),
    (Tag::Personal, &["personal", "home", "family"]),
    (Tag::Health, &["health", "exercise", "gym", "workout"]),
];

/// Detect the priority tier from lowercased text.
///
/// Groups are tested in table order; the first group with any keyword
/// hit decides the tier. No signal means the default tier.
pub fn detect_priority(lower: &str) -> Priority {
    for (priority, keywords) in PRIORITY_SIGNALS {
        if keywords.iter().any(|kw| lower.contains(kw)) {
            return *priority;
        }
    }
    Priority::Medium
}

/// Detect category tags from lowercased text.
///
/// Every group is tested independently; a tag is included when any of
/// its keywords appears, regardless of other tags.
pub fn detect_tags(lower: &str) -> Vec<Tag> {
    TAG_SIGNALS
        .iter()
        .filter(|(_, keywords)| keywords.iter().any(|kw| lower.contains(kw)))
        .map(|(tag, _)| *tag)
        .collect()
}

/// Whether `text` contains `phrase` bounded by non-word characters.
///
/// Word characters are ASCII alphanumerics and underscore, so "today"
/// does not match inside "todays" or "today_list".
pub(crate) fn contains_word(text: &str, phrase: &str) -> bool {
    let bytes = text.as_bytes();
    let is_word = |b: u8| b.is_ascii_alphanumeric() || b == b'_';
    let mut start = 0;
    while let Some(pos) = text[start..].find(phrase) {
        let at = start + pos;
        let end = at + phrase.len();
        let before_ok = at == 0 || !is_word(bytes[at - 1]);
        let after_ok = end == bytes.len() || !is_word(bytes[end]);
        if before_ok && after_ok {
            return true;
        }
        start = at + 1;
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_precedence_urgent_wins() {
        assert_eq!(detect_priority("this is urgent"), Priority::Urgent);
        assert_eq!(
            detect_priority("urgent but also low priority"),
            Priority::Urgent
        );
        assert_eq!(detect_priority("important meeting"), Priority::High);
        assert_eq!(detect_priority("minor cleanup"), Priority::Low);
        assert_eq!(detect_priority("just a note"), Priority::Medium);
    }

    #[test]
    fn priority_asap_and_critical_map_to_urgent() {
        assert_eq!(detect_priority("do this asap"), Priority::Urgent);
        assert_eq!(detect_priority("critical bug"), Priority::Urgent);
    }

    #[test]
    fn tags_are_independent_and_ordered() {
        let tags = detect_tags("gym session before the exam at work");
        assert_eq!(tags, vec![Tag::Study, Tag::Work, Tag::Health]);
    }

    #[test]
    fn tags_empty_when_no_keyword_hits() {
        assert!(detect_tags("water the plants").is_empty());
    }

    #[test]
    fn workout_triggers_both_work_and_health() {
        // "workout" contains the substring "work"; both groups fire.
        let tags = detect_tags("morning workout");
        assert_eq!(tags, vec![Tag::Work, Tag::Health]);
    }

    #[test]
    fn contains_word_respects_boundaries() {
        assert!(contains_word("finish today", "today"));
        assert!(contains_word("today, finish it", "today"));
        assert!(!contains_word("check todays list", "today"));
        assert!(!contains_word("today_list", "today"));
        assert!(contains_word("due next week maybe", "next week"));
    }
}

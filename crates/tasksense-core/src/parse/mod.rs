//! Natural-language task parsing.
//!
//! Turns one free-form input string into a structured [`TaskDraft`]:
//! priority from keyword precedence, independent category tags, a due
//! date from relative phrases or absolute patterns, an effort estimate
//! from a number-plus-unit match, and a cleaned title.
//!
//! Parsing never fails. Absence of a signal yields the documented
//! default -- medium priority, no tags, no due date, no estimate, title
//! equal to the (collapsed) input.

pub mod dates;
pub mod keywords;
pub mod title;

use chrono::{DateTime, Utc};
use regex::Regex;
use std::sync::LazyLock;

use crate::task::{TaskDraft, TaskStatus};

/// `<number> hour|hr|minute|min` with an optional plural "s".
static DURATION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)\s*(hour|hr|minute|min)s?").unwrap());

/// Parse free-form text into a task draft.
///
/// `now` anchors all relative date resolution; it is captured once by
/// the caller so every derived timestamp is internally consistent.
///
/// The extractions are independent of each other: "urgent ... tomorrow"
/// yields urgent priority and a tomorrow due date, and a duration can
/// coexist with any of them.
pub fn parse_task(text: &str, now: DateTime<Utc>) -> TaskDraft {
    let lower = text.to_lowercase();

    TaskDraft {
        title: title::clean_title(text),
        priority: keywords::detect_priority(&lower),
        tags: keywords::detect_tags(&lower),
        due_date: dates::resolve_due_date(&lower, now),
        estimated_minutes: extract_estimated_minutes(&lower),
        status: TaskStatus::Pending,
        ai_suggested: true,
    }
}

/// Extract an effort estimate in minutes from lowercased text.
///
/// Only the first match is used; hours convert at 60 minutes each.
fn extract_estimated_minutes(lower: &str) -> Option<u32> {
    let caps = DURATION_RE.captures(lower)?;
    let value: u32 = caps[1].parse().ok()?;
    match &caps[2] {
        "hour" | "hr" => Some(value.saturating_mul(60)),
        _ => Some(value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::{Priority, Tag};
    use chrono::{Duration, TimeZone};
    use proptest::prelude::*;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 10, 14, 30, 0).unwrap()
    }

    #[test]
    fn no_signals_yield_defaults() {
        let draft = parse_task("water the plants", fixed_now());
        assert_eq!(draft.title, "water the plants");
        assert_eq!(draft.priority, Priority::Medium);
        assert!(draft.tags.is_empty());
        assert!(draft.due_date.is_none());
        assert!(draft.estimated_minutes.is_none());
        assert_eq!(draft.status, TaskStatus::Pending);
        assert!(draft.ai_suggested);
    }

    #[test]
    fn urgent_beats_low_priority_when_both_present() {
        let draft = parse_task("urgent but low priority somehow", fixed_now());
        assert_eq!(draft.priority, Priority::Urgent);
    }

    #[test]
    fn full_scenario_report_tomorrow() {
        let now = fixed_now();
        let draft = parse_task("Finish urgent project report tomorrow, 2 hours", now);

        assert_eq!(draft.priority, Priority::Urgent);
        assert_eq!(draft.tags, vec![Tag::Work]);
        assert_eq!(draft.due_date, Some(now + Duration::days(1)));
        assert_eq!(draft.estimated_minutes, Some(120));
        assert_eq!(draft.title, "Finish project report , 2 hours");
    }

    #[test]
    fn duration_units_convert_to_minutes() {
        let now = fixed_now();
        assert_eq!(
            parse_task("review for 45 minutes", now).estimated_minutes,
            Some(45)
        );
        assert_eq!(parse_task("deep work 2 hrs", now).estimated_minutes, Some(120));
        assert_eq!(parse_task("quick fix 30min", now).estimated_minutes, Some(30));
        assert_eq!(parse_task("read 1 hour", now).estimated_minutes, Some(60));
    }

    #[test]
    fn only_first_duration_match_counts() {
        let draft = parse_task("study 1 hour then rest 30 minutes", fixed_now());
        assert_eq!(draft.estimated_minutes, Some(60));
    }

    #[test]
    fn date_and_priority_extraction_are_independent() {
        let now = fixed_now();
        let draft = parse_task("urgent: send slides tomorrow", now);
        assert_eq!(draft.priority, Priority::Urgent);
        assert_eq!(draft.due_date, Some(now + Duration::days(1)));
    }

    #[test]
    fn empty_input_is_harmless() {
        let draft = parse_task("", fixed_now());
        assert_eq!(draft.title, "");
        assert_eq!(draft.priority, Priority::Medium);
        assert!(draft.due_date.is_none());
    }

    #[test]
    fn absolute_date_with_tags() {
        let now = fixed_now();
        let draft = parse_task("Dentist appointment 2025-04-02, health check", now);
        assert_eq!(draft.tags, vec![Tag::Health]);
        assert_eq!(
            draft.due_date,
            Some(Utc.with_ymd_and_hms(2025, 4, 2, 0, 0, 0).unwrap())
        );
    }

    proptest! {
        #[test]
        fn parser_never_panics(text in "\\PC{0,200}") {
            let draft = parse_task(&text, fixed_now());
            // A draft always carries the fixed markers.
            prop_assert!(draft.ai_suggested);
            prop_assert_eq!(draft.status, TaskStatus::Pending);
        }

        #[test]
        fn title_never_empty_for_nonempty_input(text in "\\PC{1,80}") {
            prop_assume!(!text.trim().is_empty());
            let draft = parse_task(&text, fixed_now());
            prop_assert!(!draft.title.is_empty());
        }
    }
}

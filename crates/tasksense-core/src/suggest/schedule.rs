//! Schedule suggestion scoring.
//!
//! Builds candidate time slots from priority and tags, then keeps the
//! top three by score. Candidates are independent: the priority rule
//! always contributes one, and the study/work tags each contribute a
//! preferred-hour slot with rollover to the next day once the hour has
//! passed.

use chrono::{DateTime, Duration, Utc};

use super::ScheduleSuggestion;
use crate::task::{Priority, Tag};

/// Maximum number of suggestions returned.
const MAX_SUGGESTIONS: usize = 3;

/// Preferred start hour for study tasks.
const STUDY_HOUR: u32 = 9;

/// Preferred start hour for work tasks.
const WORK_HOUR: u32 = 10;

/// Propose up to three ranked time slots for a task.
///
/// Output is sorted by score descending; ties keep generation order
/// (priority rule first, then study, then work).
pub fn suggest_schedule(
    priority: Priority,
    tags: &[Tag],
    now: DateTime<Utc>,
) -> Vec<ScheduleSuggestion> {
    let mut suggestions = Vec::new();

    match priority {
        Priority::Urgent => suggestions.push(ScheduleSuggestion {
            time: now,
            reason: "High priority task - schedule immediately".to_string(),
            score: 100,
        }),
        Priority::High => suggestions.push(ScheduleSuggestion {
            time: now + Duration::hours(2),
            reason: "High priority - schedule within 2 hours".to_string(),
            score: 90,
        }),
        _ => suggestions.push(ScheduleSuggestion {
            time: now + Duration::days(1),
            reason: "Normal priority - schedule for tomorrow".to_string(),
            score: 70,
        }),
    }

    if tags.contains(&Tag::Study) {
        suggestions.push(ScheduleSuggestion {
            time: upcoming_hour(now, STUDY_HOUR),
            reason: "Study tasks are best done in the morning when mind is fresh".to_string(),
            score: 85,
        });
    }

    if tags.contains(&Tag::Work) {
        suggestions.push(ScheduleSuggestion {
            time: upcoming_hour(now, WORK_HOUR),
            reason: "Work tasks fit best during standard working hours".to_string(),
            score: 80,
        });
    }

    suggestions.sort_by(|a, b| b.score.cmp(&a.score));
    suggestions.truncate(MAX_SUGGESTIONS);
    suggestions
}

/// Today at `hour:00`, or the same time tomorrow if it already passed.
fn upcoming_hour(now: DateTime<Utc>, hour: u32) -> DateTime<Utc> {
    let mut slot = now
        .date_naive()
        .and_hms_opt(hour, 0, 0)
        .map(|dt| dt.and_utc())
        .unwrap_or(now);
    if slot < now {
        slot += Duration::days(1);
    }
    slot
}

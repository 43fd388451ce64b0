//! Deadline recommendation.
//!
//! Each priority tier maps to a fixed pair of deadline options. After
//! the table lookup, tasks estimated above four hours get both options
//! pushed out by two days with the complexity note appended.

use chrono::{DateTime, Duration, Utc};

use super::DeadlineSuggestion;
use crate::task::Priority;

/// Estimate assumed when the task has none.
pub const DEFAULT_ESTIMATED_MINUTES: u32 = 60;

/// Estimates above this many minutes count as complex.
const COMPLEX_THRESHOLD_MINUTES: u32 = 240;

/// Days added to both options for complex tasks.
const COMPLEX_EXTRA_DAYS: i64 = 2;

const COMPLEX_SUFFIX: &str = " (Complex task requires extra time)";

/// Propose exactly two deadline options for a task.
///
/// The earlier option comes first. `estimated_minutes` defaults to one
/// hour when absent; estimates above four hours shift both dates two
/// days later and annotate the rationale.
pub fn suggest_deadlines(
    priority: Priority,
    estimated_minutes: Option<u32>,
    now: DateTime<Utc>,
) -> Vec<DeadlineSuggestion> {
    let mut suggestions = match priority {
        Priority::Urgent => vec![
            entry(now, "Today", "Urgent priority - immediate attention required", 95),
            entry(
                now + Duration::hours(4),
                "In 4 hours",
                "Quick turnaround for urgent tasks",
                90,
            ),
        ],
        Priority::High => vec![
            entry(
                now + Duration::days(1),
                "Tomorrow",
                "High priority - schedule within 24 hours",
                90,
            ),
            entry(
                now + Duration::days(2),
                "In 2 days",
                "Allows time for preparation",
                85,
            ),
        ],
        Priority::Medium => vec![
            entry(
                now + Duration::days(3),
                "In 3 days",
                "Balanced timeframe for medium priority",
                85,
            ),
            entry(
                now + Duration::days(7),
                "Next week",
                "Comfortable timeline for planning",
                80,
            ),
        ],
        Priority::Low => vec![
            entry(
                now + Duration::days(7),
                "Next week",
                "Low priority - can be scheduled flexibly",
                75,
            ),
            entry(
                now + Duration::days(14),
                "In 2 weeks",
                "Extended timeline for low priority tasks",
                70,
            ),
        ],
    };

    let estimate = estimated_minutes.unwrap_or(DEFAULT_ESTIMATED_MINUTES);
    if estimate > COMPLEX_THRESHOLD_MINUTES {
        for suggestion in &mut suggestions {
            suggestion.reason.push_str(COMPLEX_SUFFIX);
            suggestion.date += Duration::days(COMPLEX_EXTRA_DAYS);
        }
    }

    suggestions
}

fn entry(date: DateTime<Utc>, label: &str, reason: &str, confidence: u8) -> DeadlineSuggestion {
    DeadlineSuggestion {
        date,
        label: label.to_string(),
        reason: reason.to_string(),
        confidence,
    }
}

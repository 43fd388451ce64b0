//! Smart reminder intervals.
//!
//! Each priority tier maps to a fixed set of offsets, in minutes before
//! the due date. The calculator performs no deduplication and no
//! storage; persisting and deduplicating by (task, offset) is the
//! caller's concern.

use chrono::{DateTime, Duration, Utc};

use crate::task::Priority;

/// Reminder offsets in minutes before the due date, per tier.
///
/// Unrecognized priority strings normalize to the medium tier at the
/// boundary (`Priority::parse_lenient`), so they get the medium table.
pub fn reminder_offsets(priority: Priority) -> &'static [i64] {
    match priority {
        Priority::Urgent => &[5, 15, 60],
        Priority::High => &[15, 60, 240],
        Priority::Medium => &[30, 120, 1440],
        Priority::Low => &[60, 1440],
    }
}

/// Concrete reminder instants for a due date: `due - offset` for each
/// offset in the tier's table, in table order.
pub fn reminder_times(priority: Priority, due: DateTime<Utc>) -> Vec<DateTime<Utc>> {
    reminder_offsets(priority)
        .iter()
        .map(|offset| due - Duration::minutes(*offset))
        .collect()
}

//! Task collection statistics.
//!
//! Pure aggregate counts over a task collection, computed fresh per
//! call. The completion rate is an integer percentage, truncated.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::task::{Task, TaskStatus};

/// Aggregate counters for a task collection.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct TaskStats {
    /// Total number of tasks.
    pub total: usize,
    /// Tasks with completed status.
    pub completed: usize,
    /// Tasks with pending status.
    pub pending: usize,
    /// Tasks with in-progress status.
    pub in_progress: usize,
    /// Open tasks past their due date.
    pub overdue: usize,
    /// completed / total as a truncated integer percentage; 0 when empty.
    pub completion_rate: u32,
}

impl TaskStats {
    /// Compute stats for a collection at the given instant.
    pub fn from_tasks(tasks: &[Task], now: DateTime<Utc>) -> Self {
        let mut stats = TaskStats {
            total: tasks.len(),
            ..TaskStats::default()
        };

        for task in tasks {
            match task.status {
                TaskStatus::Completed => stats.completed += 1,
                TaskStatus::Pending => stats.pending += 1,
                TaskStatus::InProgress => stats.in_progress += 1,
            }
            if task.is_overdue(now) {
                stats.overdue += 1;
            }
        }

        if stats.total > 0 {
            stats.completion_rate = (stats.completed * 100 / stats.total) as u32;
        }

        stats
    }
}

//! Productivity insight generation.
//!
//! Derives warning/suggestion/tip insights from aggregate statistics of
//! a task collection. Insights are regenerated on every call and never
//! stored; each check independently appends at most one entry, in fixed
//! check order.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::task::{Task, TaskStatus};

/// Open tasks without due dates above this count trigger a suggestion.
const MISSING_DATE_THRESHOLD: usize = 5;

/// Completion ratio above this triggers the momentum tip.
const MOMENTUM_RATIO: f64 = 0.8;

/// Severity class of an insight.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum InsightKind {
    /// Something needs attention now.
    Warning,
    /// An improvement worth considering.
    Suggestion,
    /// Positive reinforcement.
    Tip,
}

/// A derived observation about the current task set.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Insight {
    /// Severity class.
    pub kind: InsightKind,
    /// Display message.
    pub message: String,
    /// Task this insight points at, when it concerns a single task.
    pub related_task_id: Option<String>,
}

/// Generate insights for a task collection.
///
/// Checks run in fixed order: overdue warning, missing-due-date
/// suggestion, completion-rate tip. An empty collection yields no
/// insights (the ratio check is skipped entirely, so no division by
/// zero can occur).
pub fn generate_insights(tasks: &[Task], now: DateTime<Utc>) -> Vec<Insight> {
    let mut insights = Vec::new();

    let overdue = tasks.iter().filter(|t| t.is_overdue(now)).count();
    if overdue > 0 {
        insights.push(Insight {
            kind: InsightKind::Warning,
            message: format!(
                "You have {overdue} overdue task(s). Consider rescheduling or prioritizing them."
            ),
            related_task_id: None,
        });
    }

    let missing_dates = tasks
        .iter()
        .filter(|t| t.due_date.is_none() && t.status != TaskStatus::Completed)
        .count();
    if missing_dates > MISSING_DATE_THRESHOLD {
        insights.push(Insight {
            kind: InsightKind::Suggestion,
            message: format!(
                "{missing_dates} tasks don't have due dates. Adding deadlines can improve completion rates."
            ),
            related_task_id: None,
        });
    }

    let completed = tasks
        .iter()
        .filter(|t| t.status == TaskStatus::Completed)
        .count();
    if !tasks.is_empty() && completed as f64 / tasks.len() as f64 > MOMENTUM_RATIO {
        let pct = (completed as f64 / tasks.len() as f64 * 100.0) as u32;
        insights.push(Insight {
            kind: InsightKind::Tip,
            message: format!(
                "Great job! You've completed {pct}% of your tasks. Keep up the momentum!"
            ),
            related_task_id: None,
        });
    }

    insights
}

//! Task types shared across the parser, suggestion engines, and storage.
//!
//! The engine itself only reads these types; mutation and persistence
//! belong to the caller (CLI or any other host).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Task priority tier.
///
/// The derived ordering is used for severity comparisons:
/// `Low < Medium < High < Urgent`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Can be scheduled flexibly.
    Low,
    /// Default tier when no signal is present.
    Medium,
    /// Needs attention within a day or two.
    High,
    /// Immediate attention required.
    Urgent,
}

impl Priority {
    /// String form used in storage and JSON output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
            Priority::Urgent => "urgent",
        }
    }

    /// Parse a priority string, treating anything unrecognized as the
    /// default tier rather than failing.
    pub fn parse_lenient(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "low" => Priority::Low,
            "high" => Priority::High,
            "urgent" => Priority::Urgent,
            _ => Priority::Medium,
        }
    }
}

impl Default for Priority {
    fn default() -> Self {
        Priority::Medium
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category tag attached to a task.
///
/// Tags are not mutually exclusive; a task may carry any subset.
/// Detection order is fixed: study, work, personal, health.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Tag {
    Study,
    Work,
    Personal,
    Health,
}

impl Tag {
    /// All tags in fixed detection order.
    pub const ALL: [Tag; 4] = [Tag::Study, Tag::Work, Tag::Personal, Tag::Health];

    /// String form used in storage and JSON output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Tag::Study => "study",
            Tag::Work => "work",
            Tag::Personal => "personal",
            Tag::Health => "health",
        }
    }

    /// Parse a tag string; unknown tags are dropped by returning `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "study" => Some(Tag::Study),
            "work" => Some(Tag::Work),
            "personal" => Some(Tag::Personal),
            "health" => Some(Tag::Health),
            _ => None,
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Task lifecycle status.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Not started yet (initial status).
    Pending,
    /// Actively being worked on.
    InProgress,
    /// Finished (terminal status).
    Completed,
}

impl TaskStatus {
    /// String form used in storage and JSON output.
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::InProgress => "in_progress",
            TaskStatus::Completed => "completed",
        }
    }

    /// Parse a status string, treating anything unrecognized as pending.
    pub fn parse_lenient(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "completed" => TaskStatus::Completed,
            "in_progress" => TaskStatus::InProgress,
            _ => TaskStatus::Pending,
        }
    }
}

impl Default for TaskStatus {
    fn default() -> Self {
        TaskStatus::Pending
    }
}

/// A persisted task.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Optional free-form description.
    pub description: Option<String>,
    /// Lifecycle status.
    pub status: TaskStatus,
    /// Priority tier.
    pub priority: Priority,
    /// Due date, if one is known.
    pub due_date: Option<DateTime<Utc>>,
    /// Category tags.
    pub tags: Vec<Tag>,
    /// Estimated effort in minutes.
    pub estimated_minutes: Option<u32>,
    /// Whether the attributes came from the natural-language parser.
    pub ai_suggested: bool,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last-update timestamp.
    pub updated_at: DateTime<Utc>,
    /// Completion timestamp, set when status becomes completed.
    pub completed_at: Option<DateTime<Utc>>,
}

impl Task {
    /// Whether the task is past its due date and still open.
    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        match self.due_date {
            Some(due) => due < now && self.status != TaskStatus::Completed,
            None => false,
        }
    }

    /// Mark the task completed, stamping the completion time.
    pub fn complete(&mut self, now: DateTime<Utc>) {
        self.status = TaskStatus::Completed;
        self.completed_at = Some(now);
        self.updated_at = now;
    }
}

/// Structured output of the natural-language parser.
///
/// A draft is produced fresh per parse call and never mutated afterwards;
/// ownership passes entirely to the caller, which decides whether to
/// persist it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TaskDraft {
    /// Cleaned title with signal phrases removed.
    pub title: String,
    /// Detected priority (medium when no signal matched).
    pub priority: Priority,
    /// Detected category tags, in fixed detection order.
    pub tags: Vec<Tag>,
    /// Resolved due date, if any date signal matched.
    pub due_date: Option<DateTime<Utc>>,
    /// Extracted effort estimate in minutes, if any.
    pub estimated_minutes: Option<u32>,
    /// Always pending for a fresh draft.
    pub status: TaskStatus,
    /// Always true: the attributes were inferred, not typed.
    pub ai_suggested: bool,
}

impl TaskDraft {
    /// Promote the draft into a persistable task.
    pub fn into_task(self, id: String, now: DateTime<Utc>) -> Task {
        Task {
            id,
            title: self.title,
            description: None,
            status: self.status,
            priority: self.priority,
            due_date: self.due_date,
            tags: self.tags,
            estimated_minutes: self.estimated_minutes,
            ai_suggested: self.ai_suggested,
            created_at: now,
            updated_at: now,
            completed_at: None,
        }
    }
}

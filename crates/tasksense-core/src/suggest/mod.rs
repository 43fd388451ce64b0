//! Heuristic suggestion engines.
//!
//! Three pure calculators over task attributes and an injected "now":
//! ranked schedule slots, deadline options per priority tier, and
//! reminder offsets. Every output timestamp derives deterministically
//! from the inputs; scores and confidences are integers in [0, 100].

pub mod deadline;
pub mod reminder;
pub mod schedule;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A candidate time slot for working on a task.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScheduleSuggestion {
    /// Proposed start time.
    pub time: DateTime<Utc>,
    /// Human-readable rationale.
    pub reason: String,
    /// Confidence score, 0-100.
    pub score: u8,
}

/// A candidate deadline for a task.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DeadlineSuggestion {
    /// Proposed deadline.
    pub date: DateTime<Utc>,
    /// Short display label ("Tomorrow", "In 2 days", ...).
    pub label: String,
    /// Human-readable rationale.
    pub reason: String,
    /// Confidence score, 0-100.
    pub confidence: u8,
}

//! # Tasksense Core Library
//!
//! This library provides the task intelligence engine for Tasksense:
//! a deterministic, rule-based layer that turns free-form task text
//! into structured attributes and produces heuristic scheduling,
//! deadline, reminder, and productivity recommendations.
//!
//! ## Architecture
//!
//! - **Parser**: keyword and pattern extraction over one input string,
//!   producing a [`TaskDraft`] -- never fails, defaults on silence
//! - **Suggesters**: pure scorers for schedule slots, deadline options,
//!   and reminder offsets, all derived from an injected "now"
//! - **Insights/Stats**: aggregate observations over a task collection
//! - **Storage**: SQLite task/reminder persistence and TOML config for
//!   hosts that want them; the engine itself never touches a store
//!
//! Every engine function takes its clock as a parameter, so all derived
//! timestamps are reproducible in tests. No engine call performs I/O,
//! and no state is shared between calls.
//!
//! ## Key Components
//!
//! - [`parse_task`]: natural-language parsing
//! - [`suggest_schedule`], [`suggest_deadlines`], [`reminder_offsets`]:
//!   per-task recommendations
//! - [`generate_insights`], [`TaskStats`]: collection-level analytics
//! - [`TaskDb`], [`Config`]: caller-side persistence

pub mod breakdown;
pub mod email;
pub mod error;
pub mod insights;
pub mod parse;
pub mod stats;
pub mod storage;
pub mod suggest;
pub mod task;

pub use breakdown::{suggest_breakdown, BreakdownPlan, Subtask};
pub use email::{EmailMessage, Mailer};
pub use error::{ConfigError, CoreError, DatabaseError};
pub use insights::{generate_insights, Insight, InsightKind};
pub use parse::parse_task;
pub use stats::TaskStats;
pub use storage::{Config, Reminder, TaskDb};
pub use suggest::deadline::{suggest_deadlines, DEFAULT_ESTIMATED_MINUTES};
pub use suggest::reminder::{reminder_offsets, reminder_times};
pub use suggest::schedule::suggest_schedule;
pub use suggest::{DeadlineSuggestion, ScheduleSuggestion};
pub use task::{Priority, Tag, Task, TaskDraft, TaskStatus};

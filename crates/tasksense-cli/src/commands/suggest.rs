//! Suggestion commands: schedule slots, deadline options, reminder times.

use chrono::Utc;
use clap::Subcommand;
use tasksense_core::{
    reminder_times, suggest_deadlines, suggest_schedule, Config, TaskDb,
};

#[derive(Subcommand)]
pub enum SuggestAction {
    /// Ranked time slots for a task
    Schedule {
        /// Task ID
        id: String,
    },
    /// Deadline options for a task
    Deadline {
        /// Task ID
        id: String,
    },
    /// Reminder instants for a task's due date
    Reminders {
        /// Task ID
        id: String,
    },
}

pub fn run(action: SuggestAction) -> Result<(), Box<dyn std::error::Error>> {
    let db = TaskDb::open()?;
    let now = Utc::now();

    match action {
        SuggestAction::Schedule { id } => {
            let task = db.get_task(&id)?.ok_or(format!("Task not found: {id}"))?;
            let suggestions = suggest_schedule(task.priority, &task.tags, now);
            println!("{}", serde_json::to_string_pretty(&suggestions)?);
        }
        SuggestAction::Deadline { id } => {
            let task = db.get_task(&id)?.ok_or(format!("Task not found: {id}"))?;
            let config = Config::load_or_default();
            let estimate = task
                .estimated_minutes
                .or(Some(config.parser.default_estimated_minutes));
            let suggestions = suggest_deadlines(task.priority, estimate, now);
            println!("{}", serde_json::to_string_pretty(&suggestions)?);
        }
        SuggestAction::Reminders { id } => {
            let task = db.get_task(&id)?.ok_or(format!("Task not found: {id}"))?;
            let due = task
                .due_date
                .ok_or(format!("Task has no due date: {id}"))?;
            let times = reminder_times(task.priority, due);
            println!("{}", serde_json::to_string_pretty(&times)?);
        }
    }
    Ok(())
}

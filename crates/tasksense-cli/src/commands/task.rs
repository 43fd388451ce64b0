//! Task management commands for CLI.

use chrono::Utc;
use clap::Subcommand;
use tasksense_core::{parse_task, Tag, TaskDb, TaskStatus};
use uuid::Uuid;

#[derive(Subcommand)]
pub enum TaskAction {
    /// Create a task from natural-language text
    Add {
        /// Free-form description, e.g. "Finish urgent report tomorrow, 2 hours"
        text: String,
    },
    /// List tasks
    List {
        /// Filter by status: pending, in_progress, or completed
        #[arg(long)]
        status: Option<String>,
        /// Filter by tag: study, work, personal, or health
        #[arg(long)]
        tag: Option<String>,
    },
    /// Get task details
    Get {
        /// Task ID
        id: String,
    },
    /// Mark a task completed
    Complete {
        /// Task ID
        id: String,
    },
    /// Delete a task
    Delete {
        /// Task ID
        id: String,
    },
}

pub fn run(action: TaskAction) -> Result<(), Box<dyn std::error::Error>> {
    let db = TaskDb::open()?;

    match action {
        TaskAction::Add { text } => {
            let now = Utc::now();
            let draft = parse_task(&text, now);
            let task = draft.into_task(Uuid::new_v4().to_string(), now);
            db.create_task(&task)?;
            println!("Task created: {}", task.id);
            println!("{}", serde_json::to_string_pretty(&task)?);
        }
        TaskAction::List { status, tag } => {
            let status = status.map(|s| TaskStatus::parse_lenient(&s));
            let tag = tag.as_deref().and_then(Tag::parse);
            let filtered: Vec<_> = db
                .list_tasks()?
                .into_iter()
                .filter(|task| {
                    if let Some(wanted) = status {
                        if task.status != wanted {
                            return false;
                        }
                    }
                    if let Some(wanted) = tag {
                        if !task.tags.contains(&wanted) {
                            return false;
                        }
                    }
                    true
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&filtered)?);
        }
        TaskAction::Get { id } => match db.get_task(&id)? {
            Some(task) => println!("{}", serde_json::to_string_pretty(&task)?),
            None => println!("Task not found: {id}"),
        },
        TaskAction::Complete { id } => {
            let mut task = db
                .get_task(&id)?
                .ok_or(format!("Task not found: {id}"))?;
            task.complete(Utc::now());
            db.update_task(&task)?;
            println!("Task completed: {id}");
        }
        TaskAction::Delete { id } => {
            db.delete_task(&id)?;
            println!("Task deleted: {id}");
        }
    }
    Ok(())
}

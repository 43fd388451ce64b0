//! Reminder commands: persist reminder sets and preview the email.

use chrono::Utc;
use clap::Subcommand;
use tasksense_core::email::templates;
use tasksense_core::{Config, CoreError, EmailMessage, Mailer, TaskDb};

/// Dry-run delivery: prints the rendered message instead of sending it.
struct StdoutMailer;

impl Mailer for StdoutMailer {
    fn send(&self, message: &EmailMessage) -> Result<(), CoreError> {
        println!("To: {}", message.recipient);
        println!("Subject: {}", message.subject);
        println!();
        println!("{}", message.body);
        Ok(())
    }
}

#[derive(Subcommand)]
pub enum RemindAction {
    /// Compute and persist the reminder set for a task
    Schedule {
        /// Task ID
        id: String,
    },
    /// List stored reminders
    List {
        /// Only reminders for this task
        #[arg(long)]
        task_id: Option<String>,
    },
    /// Render the reminder email for a task
    Preview {
        /// Task ID
        id: String,
    },
}

pub fn run(action: RemindAction) -> Result<(), Box<dyn std::error::Error>> {
    let db = TaskDb::open()?;

    match action {
        RemindAction::Schedule { id } => {
            let task = db.get_task(&id)?.ok_or(format!("Task not found: {id}"))?;
            let due = task
                .due_date
                .ok_or(format!("Task has no due date: {id}"))?;
            let inserted = db.schedule_reminders(&task, due, Utc::now())?;
            println!("Scheduled {inserted} reminder(s) for task {id}");
        }
        RemindAction::List { task_id } => {
            let reminders = db.list_reminders(task_id.as_deref())?;
            if reminders.is_empty() {
                println!("No reminders scheduled.");
            }
            for reminder in reminders {
                println!(
                    "{}  task={}  at={}  ({} min before due){}",
                    reminder.id,
                    reminder.task_id,
                    reminder.remind_at.to_rfc3339(),
                    reminder.offset_minutes,
                    if reminder.sent { "  [sent]" } else { "" },
                );
            }
        }
        RemindAction::Preview { id } => {
            let task = db.get_task(&id)?.ok_or(format!("Task not found: {id}"))?;
            let due = task
                .due_date
                .ok_or(format!("Task has no due date: {id}"))?;
            let config = Config::load_or_default();
            let recipient = config
                .notifications
                .email
                .ok_or("No notifications.email configured; set it with `tasksense config set notifications.email you@example.com`")?;

            let (subject, body) = templates::task_reminder(&task.title, due, task.priority);
            StdoutMailer.send(&EmailMessage::new(recipient, subject, body))?;
        }
    }
    Ok(())
}

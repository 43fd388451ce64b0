//! HTML email templates.
//!
//! Pure (subject, body) rendering. Timestamps are passed in by the
//! caller so rendering stays reproducible in tests.

use chrono::{DateTime, Utc};
use indoc::formatdoc;

use crate::task::Priority;

/// Accent color for the priority badge.
fn priority_color(priority: Priority) -> &'static str {
    match priority {
        Priority::Urgent => "#ff0000",
        Priority::High => "#ff9900",
        _ => "#0099ff",
    }
}

/// Render a task reminder message.
pub fn task_reminder(
    task_title: &str,
    due_date: DateTime<Utc>,
    priority: Priority,
) -> (String, String) {
    let subject = format!("Task Reminder: {task_title}");
    let color = priority_color(priority);
    let priority_label = priority.as_str().to_uppercase();
    let due = due_date.format("%B %d, %Y %H:%M");
    let body = formatdoc! {r#"
        <html>
            <body style="font-family: Arial, sans-serif;">
                <h2>Task Reminder</h2>
                <p>You have a task coming up:</p>
                <div style="background-color: #f0f0f0; padding: 15px; border-radius: 5px;">
                    <h3>{task_title}</h3>
                    <p><strong>Due Date:</strong> {due}</p>
                    <p><strong>Priority:</strong> <span style="color: {color};">{priority_label}</span></p>
                </div>
                <p style="margin-top: 20px; color: #666;">
                    Don't forget to complete this task!
                </p>
            </body>
        </html>
    "#};
    (subject, body)
}

/// Render a task completion congratulation.
pub fn task_completed(task_title: &str, completed_at: DateTime<Utc>) -> (String, String) {
    let subject = format!("Task Completed: {task_title}");
    let completed = completed_at.format("%B %d, %Y at %I:%M %p");
    let body = formatdoc! {r#"
        <html>
            <body style="font-family: Arial, sans-serif;">
                <h2>Congratulations!</h2>
                <p>You have successfully completed a task:</p>
                <div style="background-color: #e8f5e9; padding: 15px; border-radius: 5px; border-left: 4px solid #4caf50;">
                    <h3 style="color: #4caf50;">{task_title}</h3>
                    <p>Completed on: {completed}</p>
                </div>
                <p style="margin-top: 20px; color: #666;">
                    Great job! Keep up the productivity!
                </p>
            </body>
        </html>
    "#};
    (subject, body)
}

/// Render the daily summary message.
///
/// The progress percentage guards against an empty day.
pub fn daily_summary(tasks_count: usize, completed_count: usize, date: DateTime<Utc>) -> (String, String) {
    let subject = format!("Daily Summary - {}", date.format("%B %d, %Y"));
    let progress = if tasks_count > 0 {
        completed_count * 100 / tasks_count
    } else {
        0
    };
    let body = formatdoc! {r#"
        <html>
            <body style="font-family: Arial, sans-serif;">
                <h2>Your Daily Summary</h2>
                <p>Here's your productivity report for today:</p>
                <div style="background-color: #f0f0f0; padding: 15px; border-radius: 5px;">
                    <p><strong>Total Tasks:</strong> {tasks_count}</p>
                    <p><strong>Completed:</strong> {completed_count}</p>
                    <p><strong>Progress:</strong> {progress}%</p>
                </div>
                <p style="margin-top: 20px; color: #666;">
                    Keep pushing to achieve your goals!
                </p>
            </body>
        </html>
    "#};
    (subject, body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_date() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 10, 17, 30, 0).unwrap()
    }

    #[test]
    fn reminder_carries_title_due_and_priority() {
        let (subject, body) = task_reminder("Submit taxes", fixed_date(), Priority::Urgent);
        assert_eq!(subject, "Task Reminder: Submit taxes");
        assert!(body.contains("Submit taxes"));
        assert!(body.contains("March 10, 2025 17:30"));
        assert!(body.contains("URGENT"));
        assert!(body.contains("#ff0000"));
    }

    #[test]
    fn priority_colors_follow_tier() {
        let (_, high) = task_reminder("t", fixed_date(), Priority::High);
        assert!(high.contains("#ff9900"));
        let (_, medium) = task_reminder("t", fixed_date(), Priority::Medium);
        assert!(medium.contains("#0099ff"));
        let (_, low) = task_reminder("t", fixed_date(), Priority::Low);
        assert!(low.contains("#0099ff"));
    }

    #[test]
    fn completion_message_formats_timestamp() {
        let (subject, body) = task_completed("Write blog post", fixed_date());
        assert_eq!(subject, "Task Completed: Write blog post");
        assert!(body.contains("March 10, 2025 at 05:30 PM"));
    }

    #[test]
    fn summary_progress_is_integer_percentage() {
        let (subject, body) = daily_summary(3, 2, fixed_date());
        assert_eq!(subject, "Daily Summary - March 10, 2025");
        assert!(body.contains("66%"));
    }

    #[test]
    fn summary_with_no_tasks_shows_zero_progress() {
        let (_, body) = daily_summary(0, 0, fixed_date());
        assert!(body.contains("0%"));
    }
}

//! Insight and statistics commands.

use chrono::Utc;
use tasksense_core::{generate_insights, InsightKind, TaskDb, TaskStats};

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let db = TaskDb::open()?;
    let tasks = db.list_tasks()?;
    let insights = generate_insights(&tasks, Utc::now());

    if insights.is_empty() {
        println!("No insights right now.");
        return Ok(());
    }

    for insight in insights {
        let label = match insight.kind {
            InsightKind::Warning => "warning",
            InsightKind::Suggestion => "suggestion",
            InsightKind::Tip => "tip",
        };
        println!("[{label}] {}", insight.message);
    }
    Ok(())
}

pub fn run_stats() -> Result<(), Box<dyn std::error::Error>> {
    let db = TaskDb::open()?;
    let tasks = db.list_tasks()?;
    let stats = TaskStats::from_tasks(&tasks, Utc::now());
    println!("{}", serde_json::to_string_pretty(&stats)?);
    Ok(())
}

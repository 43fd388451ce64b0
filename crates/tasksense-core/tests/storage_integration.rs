//! Integration tests for on-disk task storage.

use chrono::{Duration, Utc};
use tasksense_core::{parse_task, Priority, TaskDb};

#[test]
fn parse_persist_and_reload_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("tasksense.db");

    let now = Utc::now();
    let draft = parse_task("Prepare urgent presentation tomorrow, 3 hours", now);
    let task = draft.into_task("task-1".to_string(), now);

    {
        let db = TaskDb::open_at(&db_path).unwrap();
        db.create_task(&task).unwrap();
    }

    // Reopen: data survived the connection.
    let db = TaskDb::open_at(&db_path).unwrap();
    let loaded = db.get_task("task-1").unwrap().unwrap();
    assert_eq!(loaded.title, "Prepare presentation , 3 hours");
    assert_eq!(loaded.priority, Priority::Urgent);
    assert_eq!(loaded.estimated_minutes, Some(180));
    assert!(loaded.ai_suggested);

    let due = loaded.due_date.unwrap();
    assert_eq!(
        due.timestamp(),
        (now + Duration::days(1)).timestamp()
    );

    // Scheduling reminders twice only inserts the tier set once.
    assert_eq!(db.schedule_reminders(&loaded, due, now).unwrap(), 3);
    assert_eq!(db.schedule_reminders(&loaded, due, now).unwrap(), 0);
    assert_eq!(db.list_reminders(Some("task-1")).unwrap().len(), 3);
}

#[test]
fn listing_returns_tasks_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("tasksense.db");
    let db = TaskDb::open_at(&db_path).unwrap();

    let now = Utc::now();
    for i in 0..3 {
        let task = parse_task("walk the dog", now).into_task(format!("t{i}"), now);
        db.create_task(&task).unwrap();
    }

    assert_eq!(db.list_tasks().unwrap().len(), 3);
}

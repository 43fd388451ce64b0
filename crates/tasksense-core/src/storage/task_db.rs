//! SQLite-based storage for tasks and reminders.
//!
//! The reminders table carries a UNIQUE(task_id, offset_minutes)
//! constraint, so scheduling the same offset twice for one task is a
//! silent no-op. Deduplication deliberately lives here, in the store
//! that owns reminder lifecycle -- the suggestion engine stays free of
//! state.

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use std::time::Duration as StdDuration;
use uuid::Uuid;

use super::data_dir;
use crate::error::{DatabaseError, Result};
use crate::suggest::reminder::reminder_offsets;
use crate::task::{Priority, Tag, Task, TaskStatus};

/// Parse datetime from RFC3339 string, dropping unparseable values.
fn parse_datetime(dt_str: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(dt_str)
        .map(|dt| dt.with_timezone(&Utc))
        .ok()
}

/// Parse the stored tags JSON array, dropping unknown entries.
fn parse_tags(tags_json: &str) -> Vec<Tag> {
    let names: Vec<String> = serde_json::from_str(tags_json).unwrap_or_default();
    names.iter().filter_map(|name| Tag::parse(name)).collect()
}

fn format_tags(tags: &[Tag]) -> String {
    let names: Vec<&str> = tags.iter().map(Tag::as_str).collect();
    serde_json::to_string(&names).unwrap_or_else(|_| "[]".to_string())
}

fn row_to_task(row: &rusqlite::Row) -> Result<Task, rusqlite::Error> {
    let status: String = row.get(3)?;
    let priority: String = row.get(4)?;
    let due_date: Option<String> = row.get(5)?;
    let tags: String = row.get(6)?;
    let created_at: String = row.get(9)?;
    let updated_at: String = row.get(10)?;
    let completed_at: Option<String> = row.get(11)?;

    Ok(Task {
        id: row.get(0)?,
        title: row.get(1)?,
        description: row.get(2)?,
        status: TaskStatus::parse_lenient(&status),
        priority: Priority::parse_lenient(&priority),
        due_date: due_date.as_deref().and_then(parse_datetime),
        tags: parse_tags(&tags),
        estimated_minutes: row.get(7)?,
        ai_suggested: row.get(8)?,
        created_at: parse_datetime(&created_at).unwrap_or_else(Utc::now),
        updated_at: parse_datetime(&updated_at).unwrap_or_else(Utc::now),
        completed_at: completed_at.as_deref().and_then(parse_datetime),
    })
}

/// A persisted reminder row.
#[derive(Debug, Clone, PartialEq)]
pub struct Reminder {
    pub id: String,
    pub task_id: String,
    /// Instant the reminder should fire.
    pub remind_at: DateTime<Utc>,
    /// Minutes before the task's due date.
    pub offset_minutes: i64,
    pub sent: bool,
    pub created_at: DateTime<Utc>,
}

fn row_to_reminder(row: &rusqlite::Row) -> Result<Reminder, rusqlite::Error> {
    let remind_at: String = row.get(2)?;
    let created_at: String = row.get(5)?;
    Ok(Reminder {
        id: row.get(0)?,
        task_id: row.get(1)?,
        remind_at: parse_datetime(&remind_at).unwrap_or_else(Utc::now),
        offset_minutes: row.get(3)?,
        sent: row.get(4)?,
        created_at: parse_datetime(&created_at).unwrap_or_else(Utc::now),
    })
}

/// SQLite database for tasks and reminders.
pub struct TaskDb {
    conn: Connection,
}

impl TaskDb {
    /// Open the database at `~/.config/tasksense/tasksense.db`.
    ///
    /// Creates tables if they don't exist.
    pub fn open() -> Result<Self> {
        let path = data_dir()?.join("tasksense.db");
        Self::open_at(&path)
    }

    /// Open the database at an explicit path.
    pub fn open_at(path: &Path) -> Result<Self> {
        let conn = Connection::open(path).map_err(|source| DatabaseError::OpenFailed {
            path: path.to_path_buf(),
            source,
        })?;
        conn.busy_timeout(StdDuration::from_secs(5))
            .map_err(DatabaseError::from)?;
        let db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    /// Open an in-memory database (for tests).
    #[cfg(test)]
    pub fn open_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().map_err(DatabaseError::from)?;
        let db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    fn migrate(&self) -> Result<(), DatabaseError> {
        self.conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS tasks (
                id                 TEXT PRIMARY KEY,
                title              TEXT NOT NULL,
                description        TEXT,
                status             TEXT NOT NULL DEFAULT 'pending',
                priority           TEXT NOT NULL DEFAULT 'medium',
                due_date           TEXT,
                tags               TEXT NOT NULL DEFAULT '[]',
                estimated_minutes  INTEGER,
                ai_suggested       INTEGER NOT NULL DEFAULT 0,
                created_at         TEXT NOT NULL,
                updated_at         TEXT NOT NULL,
                completed_at       TEXT
            );
            CREATE TABLE IF NOT EXISTS reminders (
                id              TEXT PRIMARY KEY,
                task_id         TEXT NOT NULL,
                remind_at       TEXT NOT NULL,
                offset_minutes  INTEGER NOT NULL,
                sent            INTEGER NOT NULL DEFAULT 0,
                created_at      TEXT NOT NULL,
                UNIQUE(task_id, offset_minutes)
            );",
        )?;
        Ok(())
    }

    // === Tasks ===

    pub fn create_task(&self, task: &Task) -> Result<()> {
        self.conn.execute(
            "INSERT INTO tasks (id, title, description, status, priority, due_date, tags,
                                estimated_minutes, ai_suggested, created_at, updated_at, completed_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)",
            params![
                task.id,
                task.title,
                task.description,
                task.status.as_str(),
                task.priority.as_str(),
                task.due_date.map(|d| d.to_rfc3339()),
                format_tags(&task.tags),
                task.estimated_minutes,
                task.ai_suggested,
                task.created_at.to_rfc3339(),
                task.updated_at.to_rfc3339(),
                task.completed_at.map(|d| d.to_rfc3339()),
            ],
        )?;
        Ok(())
    }

    pub fn get_task(&self, id: &str) -> Result<Option<Task>> {
        let task = self
            .conn
            .query_row(
                "SELECT id, title, description, status, priority, due_date, tags,
                        estimated_minutes, ai_suggested, created_at, updated_at, completed_at
                 FROM tasks WHERE id = ?1",
                params![id],
                row_to_task,
            )
            .optional()?;
        Ok(task)
    }

    /// List all tasks, newest first.
    pub fn list_tasks(&self) -> Result<Vec<Task>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, title, description, status, priority, due_date, tags,
                    estimated_minutes, ai_suggested, created_at, updated_at, completed_at
             FROM tasks ORDER BY created_at DESC",
        )?;
        let tasks = stmt
            .query_map([], row_to_task)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(tasks)
    }

    pub fn update_task(&self, task: &Task) -> Result<()> {
        let changed = self.conn.execute(
            "UPDATE tasks SET title = ?2, description = ?3, status = ?4, priority = ?5,
                              due_date = ?6, tags = ?7, estimated_minutes = ?8,
                              ai_suggested = ?9, updated_at = ?10, completed_at = ?11
             WHERE id = ?1",
            params![
                task.id,
                task.title,
                task.description,
                task.status.as_str(),
                task.priority.as_str(),
                task.due_date.map(|d| d.to_rfc3339()),
                format_tags(&task.tags),
                task.estimated_minutes,
                task.ai_suggested,
                task.updated_at.to_rfc3339(),
                task.completed_at.map(|d| d.to_rfc3339()),
            ],
        )?;
        if changed == 0 {
            return Err(DatabaseError::NotFound(task.id.clone()).into());
        }
        Ok(())
    }

    /// Delete a task and its reminders.
    pub fn delete_task(&self, id: &str) -> Result<()> {
        self.conn
            .execute("DELETE FROM reminders WHERE task_id = ?1", params![id])?;
        let changed = self
            .conn
            .execute("DELETE FROM tasks WHERE id = ?1", params![id])?;
        if changed == 0 {
            return Err(DatabaseError::NotFound(id.to_string()).into());
        }
        Ok(())
    }

    // === Reminders ===

    /// Persist the tier's reminder set for a task with a due date.
    ///
    /// Offsets already present for the task are skipped by the unique
    /// constraint. Returns the number of newly inserted reminders.
    pub fn schedule_reminders(
        &self,
        task: &Task,
        due: DateTime<Utc>,
        now: DateTime<Utc>,
    ) -> Result<usize> {
        let mut inserted = 0;
        for offset in reminder_offsets(task.priority) {
            let remind_at = due - chrono::Duration::minutes(*offset);
            inserted += self.conn.execute(
                "INSERT OR IGNORE INTO reminders (id, task_id, remind_at, offset_minutes, sent, created_at)
                 VALUES (?1, ?2, ?3, ?4, 0, ?5)",
                params![
                    Uuid::new_v4().to_string(),
                    task.id,
                    remind_at.to_rfc3339(),
                    offset,
                    now.to_rfc3339(),
                ],
            )?;
        }
        Ok(inserted)
    }

    /// List reminders, optionally for a single task, soonest first.
    pub fn list_reminders(&self, task_id: Option<&str>) -> Result<Vec<Reminder>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, task_id, remind_at, offset_minutes, sent, created_at
             FROM reminders
             WHERE ?1 IS NULL OR task_id = ?1
             ORDER BY remind_at ASC",
        )?;
        let reminders = stmt
            .query_map(params![task_id], row_to_reminder)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(reminders)
    }
}

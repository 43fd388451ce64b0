mod config;
pub mod task_db;

pub use config::Config;
pub use task_db::{Reminder, TaskDb};

use std::path::PathBuf;

use crate::error::{ConfigError, Result};

/// Returns `~/.config/tasksense[-dev]/` based on TASKSENSE_ENV.
///
/// Set TASKSENSE_ENV=dev to use the development data directory.
pub fn data_dir() -> Result<PathBuf> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("TASKSENSE_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("tasksense-dev")
    } else {
        base_dir.join("tasksense")
    };

    std::fs::create_dir_all(&dir).map_err(|e| ConfigError::LoadFailed {
        path: dir.clone(),
        message: e.to_string(),
    })?;
    Ok(dir)
}

use crate::domain::Task;
use crate::persistence::atomic_write;
use anyhow::Result;
use std::path::Path;
use thiserror::Error;

/// Failure modes of the blob adapter
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read task file: {0}")]
    Io(#[from] std::io::Error),
    #[error("task file is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Load the full task list from the blob.
/// A missing file is treated as "no tasks yet"; a malformed blob is an error
/// for the caller to log and fall back from.
pub fn load_tasks<P: AsRef<Path>>(path: P) -> Result<Vec<Task>, StoreError> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(Vec::new());
    }

    let content = std::fs::read_to_string(path)?;
    let tasks: Vec<Task> = serde_json::from_str(&content)?;
    Ok(tasks)
}

/// Load the task list, logging and starting empty if the blob is unreadable
pub fn load_or_default<P: AsRef<Path>>(path: P) -> Vec<Task> {
    match load_tasks(&path) {
        Ok(tasks) => tasks,
        Err(e) => {
            eprintln!(
                "Failed to load {}: {} (starting with an empty list)",
                path.as_ref().display(),
                e
            );
            Vec::new()
        }
    }
}

/// Serialize the full task list and write it as one blob, atomically.
/// On failure the prior persisted blob is left untouched.
pub fn save_tasks<P: AsRef<Path>>(path: P, tasks: &[Task]) -> Result<()> {
    let json = serde_json::to_string_pretty(tasks)?;
    atomic_write(path, &json)
}

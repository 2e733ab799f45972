//! Persistent storage for the task list.
//!
//! The whole collection lives in one JSON file: an array of task objects.
//! Loading tolerates a missing or unparseable file by returning an empty
//! list; saving always rewrites the file in full. There is no caching, so
//! every caller sees whatever is on disk at call time.

use crate::error::Result;
use crate::models::Task;
use std::collections::HashSet;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Storage backend for the full task collection.
pub trait TaskStore {
    /// Read the entire collection.
    ///
    /// A missing or unparseable file yields an empty list, not an error.
    ///
    /// # Errors
    ///
    /// Returns an error for I/O failures other than the file not existing.
    fn load(&self) -> Result<Vec<Task>>;

    /// Replace the entire collection.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    fn save(&self, tasks: &[Task]) -> Result<()>;
}

/// File-backed store holding the collection as one JSON array.
#[derive(Debug, Clone)]
pub struct JsonTaskStore {
    path: PathBuf,
}

impl JsonTaskStore {
    /// Create a store at the default location (see [`crate::paths`]).
    ///
    /// # Errors
    ///
    /// Returns an error if no storage location can be determined.
    pub fn new() -> Result<Self> {
        Ok(Self { path: crate::paths::task_file()? })
    }

    /// Create a store at a specific path. Primarily for testing.
    #[must_use]
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The file this store reads and writes.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TaskStore for JsonTaskStore {
    fn load(&self) -> Result<Vec<Task>> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        // A document that does not parse as a task list reads as empty.
        // Individual records are not salvaged.
        let tasks: Vec<Task> = serde_json::from_str(&text).unwrap_or_default();
        Ok(assign_missing_ids(tasks))
    }

    fn save(&self, tasks: &[Task]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let text = serde_json::to_string_pretty(tasks)?;
        fs::write(&self.path, text)?;
        Ok(())
    }
}

/// Give unique nonzero ids to loaded tasks that lack them.
///
/// Files written before ids existed have none, and hand-edited files may
/// repeat them. Every load comes out with distinct nonzero ids; the fixed
/// ids reach disk at the next save.
fn assign_missing_ids(mut tasks: Vec<Task>) -> Vec<Task> {
    let mut next = tasks.iter().map(|t| t.id).max().unwrap_or(0).saturating_add(1);
    let mut seen = HashSet::new();
    for task in &mut tasks {
        if task.id == 0 || !seen.insert(task.id) {
            task.id = next;
            seen.insert(next);
            next += 1;
        }
    }
    tasks
}

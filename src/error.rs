//! Error types for `todo_tracker`.

/// Errors that can occur while working with the task list.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A JSON serialization error occurred.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A 1-based task number was outside the current list.
    #[error("invalid task number: {position} (list has {len} tasks)")]
    InvalidPosition {
        /// The 1-based position that was requested.
        position: usize,
        /// How many tasks the list held at the time.
        len: usize,
    },

    /// No task with the given identifier exists.
    #[error("no task with id {0}")]
    TaskNotFound(u64),

    /// The home directory could not be determined.
    #[error("cannot determine a home directory for the task file")]
    NoHomeDir,
}

/// A specialized Result type for this crate.
pub type Result<T> = std::result::Result<T, Error>;

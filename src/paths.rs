//! Path utilities for locating the task file.
//!
//! The list lives in a single JSON file, `~/.todo-tracker/todo.json` by
//! default. Setting `TODO_TRACKER_FILE` points both front ends at an
//! explicit file instead, which is how they can be aimed at a shared or
//! throwaway list.

use crate::error::{Error, Result};
use std::path::PathBuf;

/// Directory under the home directory that holds the task file.
const DATA_DIR_NAME: &str = ".todo-tracker";

/// The task file name.
pub const TASK_FILENAME: &str = "todo.json";

/// Environment variable overriding the task file location.
pub const FILE_ENV_VAR: &str = "TODO_TRACKER_FILE";

/// The task file both front ends read and write.
///
/// The `TODO_TRACKER_FILE` override wins when set; otherwise the file sits
/// under the home directory.
///
/// # Errors
///
/// Returns [`Error::NoHomeDir`] when the override is unset and the home
/// directory cannot be determined.
pub fn task_file() -> Result<PathBuf> {
    if let Some(path) = std::env::var_os(FILE_ENV_VAR) {
        return Ok(PathBuf::from(path));
    }
    dirs::home_dir()
        .map(|home| home.join(DATA_DIR_NAME).join(TASK_FILENAME))
        .ok_or(Error::NoHomeDir)
}

#[cfg(test)]
mod tests {
    use super::*;

    // These tests share the process environment, hence serial.

    #[test]
    #[serial_test::serial]
    fn test_task_file_defaults_under_home() {
        std::env::remove_var(FILE_ENV_VAR);
        if let Some(home) = dirs::home_dir() {
            let path = task_file().unwrap();
            assert_eq!(path, home.join(".todo-tracker").join("todo.json"));
        }
    }

    #[test]
    #[serial_test::serial]
    fn test_task_file_env_override_wins() {
        std::env::set_var(FILE_ENV_VAR, "/tmp/somewhere/else.json");
        let path = task_file().unwrap();
        std::env::remove_var(FILE_ENV_VAR);

        assert_eq!(path, PathBuf::from("/tmp/somewhere/else.json"));
    }
}

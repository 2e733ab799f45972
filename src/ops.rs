//! Operations on the task list.
//!
//! Every operation reads the full collection from the store, applies one
//! change, and writes the full collection back. Positions are 1-based and
//! checked against the freshly loaded list, so a stale index from an old
//! display is reported rather than acted on.

use crate::error::{Error, Result};
use crate::models::{Priority, Task};
use crate::store::TaskStore;

/// Add a task with the given description and priority.
///
/// Returns the stored task, including its assigned id. Callers are
/// expected to reject empty descriptions before calling.
///
/// # Errors
///
/// Returns an error if the store cannot be read or written.
pub fn add(store: &dyn TaskStore, description: &str, priority: Priority) -> Result<Task> {
    let mut tasks = store.load()?;
    let task = Task {
        id: next_id(&tasks),
        description: description.to_string(),
        completed: false,
        priority,
    };
    tasks.push(task.clone());
    store.save(&tasks)?;
    Ok(task)
}

/// All tasks in insertion order.
///
/// # Errors
///
/// Returns an error if the store cannot be read.
pub fn list(store: &dyn TaskStore) -> Result<Vec<Task>> {
    store.load()
}

/// Tasks whose description contains `keyword`, case-insensitively.
///
/// Each match is paired with its 1-based position in the full collection,
/// so numbering lines up with [`list`]. No matches is an empty result, not
/// an error.
///
/// # Errors
///
/// Returns an error if the store cannot be read.
pub fn search(store: &dyn TaskStore, keyword: &str) -> Result<Vec<(usize, Task)>> {
    let needle = keyword.to_lowercase();
    let tasks = store.load()?;
    Ok(tasks
        .into_iter()
        .enumerate()
        .filter(|(_, task)| task.description.to_lowercase().contains(&needle))
        .map(|(i, task)| (i + 1, task))
        .collect())
}

/// Mark the task at a 1-based position complete.
///
/// # Errors
///
/// Returns [`Error::InvalidPosition`] if the position is out of range; the
/// list is left untouched. Store failures propagate.
pub fn complete(store: &dyn TaskStore, position: usize) -> Result<()> {
    let mut tasks = store.load()?;
    let index = check_position(position, tasks.len())?;
    tasks[index].completed = true;
    store.save(&tasks)?;
    Ok(())
}

/// Remove the task at a 1-based position.
///
/// Returns the removed task's description for confirmation display.
///
/// # Errors
///
/// Returns [`Error::InvalidPosition`] if the position is out of range; the
/// list is left untouched. Store failures propagate.
pub fn delete(store: &dyn TaskStore, position: usize) -> Result<String> {
    let mut tasks = store.load()?;
    let index = check_position(position, tasks.len())?;
    let removed = tasks.remove(index);
    store.save(&tasks)?;
    Ok(removed.description)
}

/// Mark the task with the given id complete.
///
/// # Errors
///
/// Returns [`Error::TaskNotFound`] if no task has that id.
pub fn complete_by_id(store: &dyn TaskStore, id: u64) -> Result<()> {
    let mut tasks = store.load()?;
    let task = tasks.iter_mut().find(|t| t.id == id).ok_or(Error::TaskNotFound(id))?;
    task.completed = true;
    store.save(&tasks)?;
    Ok(())
}

/// Remove the task with the given id, returning its description.
///
/// # Errors
///
/// Returns [`Error::TaskNotFound`] if no task has that id.
pub fn delete_by_id(store: &dyn TaskStore, id: u64) -> Result<String> {
    let mut tasks = store.load()?;
    let index = tasks.iter().position(|t| t.id == id).ok_or(Error::TaskNotFound(id))?;
    let removed = tasks.remove(index);
    store.save(&tasks)?;
    Ok(removed.description)
}

/// Render one task as a display line, e.g. `3. [✔] (High) Buy milk`.
///
/// Incomplete tasks get a space instead of the check mark. Both front ends
/// use this renderer, so a task is numbered and marked the same way
/// everywhere.
#[must_use]
pub fn display_line(position: usize, task: &Task) -> String {
    let marker = if task.completed { '✔' } else { ' ' };
    format!("{position}. [{marker}] ({}) {}", task.priority, task.description)
}

fn next_id(tasks: &[Task]) -> u64 {
    tasks.iter().map(|t| t.id).max().unwrap_or(0).saturating_add(1)
}

fn check_position(position: usize, len: usize) -> Result<usize> {
    if (1..=len).contains(&position) {
        Ok(position - 1)
    } else {
        Err(Error::InvalidPosition { position, len })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::JsonTaskStore;
    use tempfile::TempDir;

    /// Helper: create a store in a temp dir and return `(dir, store)`.
    fn create_test_store() -> (TempDir, JsonTaskStore) {
        let dir = TempDir::new().unwrap();
        let store = JsonTaskStore::with_path(dir.path().join("todo.json"));
        (dir, store)
    }

    /// Helper: a store preloaded with the two-task fixture list.
    fn two_task_store() -> (TempDir, JsonTaskStore) {
        let (dir, store) = create_test_store();
        add(&store, "Write report", Priority::Medium).unwrap();
        add(&store, "Call mom", Priority::Medium).unwrap();
        (dir, store)
    }

    #[test]
    fn test_add_then_list() {
        let (_dir, store) = create_test_store();
        add(&store, "Buy milk", Priority::High).unwrap();

        let tasks = list(&store).unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].description, "Buy milk");
        assert!(!tasks[0].completed);
        assert_eq!(tasks[0].priority, Priority::High);
    }

    #[test]
    fn test_add_assigns_increasing_ids() {
        let (_dir, store) = create_test_store();
        let first = add(&store, "One", Priority::Medium).unwrap();
        let second = add(&store, "Two", Priority::Medium).unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[test]
    fn test_add_after_delete_keeps_ids_distinct() {
        let (_dir, store) = create_test_store();
        add(&store, "One", Priority::Medium).unwrap();
        add(&store, "Two", Priority::Medium).unwrap();
        delete(&store, 1).unwrap();
        add(&store, "Three", Priority::Medium).unwrap();

        let tasks = list(&store).unwrap();
        assert_eq!(tasks.len(), 2);
        assert_ne!(tasks[0].id, tasks[1].id);
    }

    #[test]
    fn test_list_empty_store() {
        let (_dir, store) = create_test_store();
        assert!(list(&store).unwrap().is_empty());
    }

    #[test]
    fn test_complete_marks_only_that_task() {
        let (_dir, store) = two_task_store();
        complete(&store, 1).unwrap();

        let tasks = list(&store).unwrap();
        assert!(tasks[0].completed);
        assert!(!tasks[1].completed);
    }

    #[test]
    fn test_complete_out_of_range_leaves_list_unchanged() {
        let (_dir, store) = two_task_store();
        let before = list(&store).unwrap();

        let err = complete(&store, 5).unwrap_err();
        assert!(matches!(err, Error::InvalidPosition { position: 5, len: 2 }));
        assert_eq!(list(&store).unwrap(), before);
    }

    #[test]
    fn test_complete_position_zero_is_invalid() {
        let (_dir, store) = two_task_store();
        assert!(matches!(complete(&store, 0), Err(Error::InvalidPosition { .. })));
    }

    #[test]
    fn test_delete_returns_description() {
        let (_dir, store) = two_task_store();
        let removed = delete(&store, 2).unwrap();

        assert_eq!(removed, "Call mom");
        let tasks = list(&store).unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].description, "Write report");
    }

    #[test]
    fn test_delete_out_of_range_leaves_list_unchanged() {
        let (_dir, store) = two_task_store();
        assert!(matches!(delete(&store, 3), Err(Error::InvalidPosition { .. })));
        assert_eq!(list(&store).unwrap().len(), 2);
    }

    #[test]
    fn test_delete_on_empty_list() {
        let (_dir, store) = create_test_store();
        assert!(matches!(delete(&store, 1), Err(Error::InvalidPosition { position: 1, len: 0 })));
    }

    #[test]
    fn test_search_is_case_insensitive_with_full_positions() {
        let (_dir, store) = two_task_store();
        let matches = search(&store, "call").unwrap();

        assert_eq!(matches.len(), 1);
        let (position, task) = &matches[0];
        assert_eq!(*position, 2);
        assert_eq!(task.description, "Call mom");
    }

    #[test]
    fn test_search_no_matches_is_empty() {
        let (_dir, store) = two_task_store();
        assert!(search(&store, "groceries").unwrap().is_empty());
    }

    #[test]
    fn test_search_matches_substring_anywhere() {
        let (_dir, store) = create_test_store();
        add(&store, "Answer email backlog", Priority::Medium).unwrap();

        assert_eq!(search(&store, "MAIL").unwrap().len(), 1);
    }

    #[test]
    fn test_complete_by_id() {
        let (_dir, store) = two_task_store();
        let id = list(&store).unwrap()[1].id;
        complete_by_id(&store, id).unwrap();

        let tasks = list(&store).unwrap();
        assert!(!tasks[0].completed);
        assert!(tasks[1].completed);
    }

    #[test]
    fn test_complete_by_id_not_found() {
        let (_dir, store) = two_task_store();
        assert!(matches!(complete_by_id(&store, 99), Err(Error::TaskNotFound(99))));
    }

    #[test]
    fn test_delete_by_id_returns_description() {
        let (_dir, store) = two_task_store();
        let id = list(&store).unwrap()[0].id;

        assert_eq!(delete_by_id(&store, id).unwrap(), "Write report");
        let tasks = list(&store).unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].description, "Call mom");
    }

    #[test]
    fn test_delete_by_id_not_found_leaves_list_unchanged() {
        let (_dir, store) = two_task_store();
        assert!(matches!(delete_by_id(&store, 42), Err(Error::TaskNotFound(42))));
        assert_eq!(list(&store).unwrap().len(), 2);
    }

    #[test]
    fn test_display_line_incomplete() {
        let task = Task {
            id: 1,
            description: "Buy milk".to_string(),
            completed: false,
            priority: Priority::High,
        };
        assert_eq!(display_line(1, &task), "1. [ ] (High) Buy milk");
    }

    #[test]
    fn test_display_line_complete() {
        let task = Task {
            id: 2,
            description: "Call mom".to_string(),
            completed: true,
            priority: Priority::Low,
        };
        assert_eq!(display_line(2, &task), "2. [✔] (Low) Call mom");
    }
}

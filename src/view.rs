//! Window front end state, kept free of toolkit types.
//!
//! [`TaskBoard`] owns everything the windowed list needs to decide what to
//! draw: the last-loaded tasks, the display mode, the selection, the draft
//! input fields, and a one-line notice. The `todo-gui` binary only renders
//! it and forwards button presses, so all of this logic is testable without
//! a display.
//!
//! Mutations are addressed by task id, never by row, so completing or
//! deleting while a search filter is active acts on the task the user sees
//! rather than whichever task happens to share its row number in the full
//! list.

use crate::error::{Error, Result};
use crate::models::{Priority, Task};
use crate::ops;
use crate::store::TaskStore;

/// What the list view is currently showing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListMode {
    /// Every stored task.
    Full,
    /// Only tasks matching a search keyword.
    Filtered {
        /// The keyword the rows are filtered by.
        keyword: String,
    },
}

/// State behind the windowed task list.
#[derive(Debug)]
pub struct TaskBoard<S> {
    store: S,
    tasks: Vec<Task>,
    mode: ListMode,
    selected: Option<u64>,
    notice: Option<String>,
    /// Draft text for the add field.
    pub description_draft: String,
    /// Draft priority for the add field.
    pub priority_draft: Priority,
    /// Draft text for the search field.
    pub search_draft: String,
}

impl<S: TaskStore> TaskBoard<S> {
    /// Create a board over a store, loading the current list.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    pub fn new(store: S) -> Result<Self> {
        let tasks = store.load()?;
        Ok(Self {
            store,
            tasks,
            mode: ListMode::Full,
            selected: None,
            notice: None,
            description_draft: String::new(),
            priority_draft: Priority::Medium,
            search_draft: String::new(),
        })
    }

    /// Reload from the store and show the full list.
    ///
    /// The selection survives when the selected task still exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    pub fn refresh(&mut self) -> Result<()> {
        self.tasks = self.store.load()?;
        self.mode = ListMode::Full;
        self.prune_selection();
        Ok(())
    }

    /// The current display mode.
    pub fn mode(&self) -> &ListMode {
        &self.mode
    }

    /// The current notice line, if any.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// The id of the selected task, if any.
    pub fn selected_id(&self) -> Option<u64> {
        self.selected
    }

    /// The selected task, if it is still in the loaded list.
    pub fn selected_task(&self) -> Option<&Task> {
        let id = self.selected?;
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Record a row click. Clicking the selected row deselects it.
    pub fn select(&mut self, id: u64) {
        self.selected = if self.selected == Some(id) { None } else { Some(id) };
    }

    /// The rows the list should draw, each with its 1-based position in the
    /// full collection.
    ///
    /// Filtered rows keep their full-collection positions so a task is
    /// numbered the same here as in the console's list and search output.
    pub fn visible_rows(&self) -> Vec<(usize, &Task)> {
        self.tasks
            .iter()
            .enumerate()
            .map(|(i, task)| (i + 1, task))
            .filter(|(_, task)| match &self.mode {
                ListMode::Full => true,
                ListMode::Filtered { keyword } => {
                    task.description.to_lowercase().contains(&keyword.to_lowercase())
                }
            })
            .collect()
    }

    /// Add a task from the draft fields.
    ///
    /// An empty or whitespace-only draft is a notice, not a call. Success
    /// clears the draft and redraws the full list.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read or written.
    pub fn add_task(&mut self) -> Result<()> {
        let description = self.description_draft.trim().to_string();
        if description.is_empty() {
            self.notice = Some("Description cannot be empty.".to_string());
            return Ok(());
        }

        ops::add(&self.store, &description, self.priority_draft)?;
        self.description_draft.clear();
        self.notice = Some("Task added.".to_string());
        self.refresh()
    }

    /// Mark the selected task complete.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read or written.
    pub fn complete_selected(&mut self) -> Result<()> {
        let Some(id) = self.selected else {
            self.notice = Some("Select a task first.".to_string());
            return Ok(());
        };

        match ops::complete_by_id(&self.store, id) {
            Ok(()) => self.notice = Some("Task marked complete.".to_string()),
            Err(Error::TaskNotFound(_)) => {
                self.notice = Some("Task no longer exists.".to_string());
            }
            Err(e) => return Err(e),
        }
        self.refresh()
    }

    /// Delete the selected task.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read or written.
    pub fn delete_selected(&mut self) -> Result<()> {
        let Some(id) = self.selected else {
            self.notice = Some("Select a task first.".to_string());
            return Ok(());
        };

        match ops::delete_by_id(&self.store, id) {
            Ok(description) => self.notice = Some(format!("Deleted task: {description}")),
            Err(Error::TaskNotFound(_)) => {
                self.notice = Some("Task no longer exists.".to_string());
            }
            Err(e) => return Err(e),
        }
        self.refresh()
    }

    /// Filter the list by the search draft.
    ///
    /// Reads the store for a fresh snapshot but never writes. No matches
    /// leaves the current view in place with a notice.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    pub fn apply_search(&mut self) -> Result<()> {
        let keyword = self.search_draft.trim().to_string();
        if keyword.is_empty() {
            self.notice = Some("Enter a search keyword.".to_string());
            return Ok(());
        }

        self.tasks = self.store.load()?;
        let needle = keyword.to_lowercase();
        let any = self.tasks.iter().any(|t| t.description.to_lowercase().contains(&needle));
        if any {
            self.mode = ListMode::Filtered { keyword };
            self.notice = None;
        } else {
            self.notice = Some("No matching tasks.".to_string());
        }
        self.prune_selection();
        Ok(())
    }

    /// Drop the filter and show the full list again.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    pub fn show_all(&mut self) -> Result<()> {
        self.search_draft.clear();
        self.notice = None;
        self.refresh()
    }

    /// Clear the selection when the selected task left the visible rows.
    fn prune_selection(&mut self) {
        if let Some(id) = self.selected {
            if !self.visible_rows().iter().any(|(_, task)| task.id == id) {
                self.selected = None;
            }
        }
    }
}

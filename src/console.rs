//! Console front end: a line-based menu over the task operations.
//!
//! [`run`] owns the whole session but talks only to the `BufRead` and
//! `Write` handles it is given, so tests can script a session with plain
//! strings. The `todo` binary wires it to stdin and stdout.

use crate::error::{Error, Result};
use crate::models::Priority;
use crate::ops;
use crate::store::TaskStore;
use std::io::{BufRead, Lines, Write};

const MENU: &str = "To-Do List\n\
1. Add task\n\
2. View tasks\n\
3. Mark task complete\n\
4. Delete task\n\
5. Search tasks\n\
6. Exit";

/// Whether the menu loop should keep going after an action.
enum Session {
    Continue,
    Quit,
}

/// Drive the interactive menu until the user exits.
///
/// Reported user errors (bad menu choice, bad number, out-of-range
/// position, empty input) are printed and the loop continues without
/// touching the list. Running out of input behaves like choosing Exit.
///
/// # Errors
///
/// Returns an error when the store cannot be written or a stream fails.
pub fn run<R: BufRead, W: Write>(store: &dyn TaskStore, input: R, mut output: W) -> Result<()> {
    let mut lines = input.lines();
    loop {
        writeln!(output, "\n{MENU}")?;
        let Some(choice) = prompt(&mut lines, &mut output, "Choose an option: ")? else {
            return goodbye(&mut output);
        };

        let flow = match choice.as_str() {
            "1" => add_task(store, &mut lines, &mut output)?,
            "2" => {
                view_tasks(store, &mut output)?;
                Session::Continue
            }
            "3" => complete_task(store, &mut lines, &mut output)?,
            "4" => delete_task(store, &mut lines, &mut output)?,
            "5" => search_tasks(store, &mut lines, &mut output)?,
            "6" => Session::Quit,
            _ => {
                writeln!(output, "Invalid choice. Please select 1-6.")?;
                Session::Continue
            }
        };

        if matches!(flow, Session::Quit) {
            return goodbye(&mut output);
        }
    }
}

/// Print a prompt and read one trimmed line. `None` means input ran out.
fn prompt<R: BufRead, W: Write>(
    lines: &mut Lines<R>,
    output: &mut W,
    text: &str,
) -> Result<Option<String>> {
    write!(output, "{text}")?;
    output.flush()?;
    match lines.next() {
        Some(line) => Ok(Some(line?.trim().to_string())),
        None => Ok(None),
    }
}

fn goodbye<W: Write>(output: &mut W) -> Result<()> {
    writeln!(output, "Goodbye.")?;
    Ok(())
}

fn add_task<R: BufRead, W: Write>(
    store: &dyn TaskStore,
    lines: &mut Lines<R>,
    output: &mut W,
) -> Result<Session> {
    let Some(description) = prompt(lines, output, "Task description: ")? else {
        return Ok(Session::Quit);
    };
    if description.is_empty() {
        writeln!(output, "Empty description; task not added.")?;
        return Ok(Session::Continue);
    }

    let Some(label) = prompt(lines, output, "Priority (High/Medium/Low) [Medium]: ")? else {
        return Ok(Session::Quit);
    };
    let priority = Priority::from_str(&label).unwrap_or_default();

    ops::add(store, &description, priority)?;
    writeln!(output, "Task added.")?;
    Ok(Session::Continue)
}

fn view_tasks<W: Write>(store: &dyn TaskStore, output: &mut W) -> Result<()> {
    let tasks = ops::list(store)?;
    if tasks.is_empty() {
        writeln!(output, "No tasks found.")?;
        return Ok(());
    }
    for (i, task) in tasks.iter().enumerate() {
        writeln!(output, "{}", ops::display_line(i + 1, task))?;
    }
    Ok(())
}

fn complete_task<R: BufRead, W: Write>(
    store: &dyn TaskStore,
    lines: &mut Lines<R>,
    output: &mut W,
) -> Result<Session> {
    view_tasks(store, output)?;
    let Some(raw) = prompt(lines, output, "Enter task number to mark complete: ")? else {
        return Ok(Session::Quit);
    };
    let Ok(position) = raw.parse::<usize>() else {
        writeln!(output, "Invalid number.")?;
        return Ok(Session::Continue);
    };

    match ops::complete(store, position) {
        Ok(()) => writeln!(output, "Task marked complete.")?,
        Err(Error::InvalidPosition { .. }) => writeln!(output, "Invalid task number.")?,
        Err(e) => return Err(e),
    }
    Ok(Session::Continue)
}

fn delete_task<R: BufRead, W: Write>(
    store: &dyn TaskStore,
    lines: &mut Lines<R>,
    output: &mut W,
) -> Result<Session> {
    view_tasks(store, output)?;
    let Some(raw) = prompt(lines, output, "Enter task number to delete: ")? else {
        return Ok(Session::Quit);
    };
    let Ok(position) = raw.parse::<usize>() else {
        writeln!(output, "Invalid number.")?;
        return Ok(Session::Continue);
    };

    match ops::delete(store, position) {
        Ok(description) => writeln!(output, "Deleted task: {description}")?,
        Err(Error::InvalidPosition { .. }) => writeln!(output, "Invalid task number.")?,
        Err(e) => return Err(e),
    }
    Ok(Session::Continue)
}

fn search_tasks<R: BufRead, W: Write>(
    store: &dyn TaskStore,
    lines: &mut Lines<R>,
    output: &mut W,
) -> Result<Session> {
    let Some(keyword) = prompt(lines, output, "Enter keyword to search for: ")? else {
        return Ok(Session::Quit);
    };
    if keyword.is_empty() {
        writeln!(output, "Empty keyword.")?;
        return Ok(Session::Continue);
    }

    let matches = ops::search(store, &keyword)?;
    if matches.is_empty() {
        writeln!(output, "No matching tasks found.")?;
        return Ok(Session::Continue);
    }
    for (position, task) in &matches {
        writeln!(output, "{}", ops::display_line(*position, task))?;
    }
    Ok(Session::Continue)
}

//! Console binary for the to-do list.
//!
//! A thin wrapper: the menu loop lives in the library, this just wires it
//! to stdin/stdout and installs the interrupt handler.

use std::io;
use std::process::ExitCode;

use todo_tracker::console;
use todo_tracker::store::JsonTaskStore;

fn main() -> ExitCode {
    // Ctrl-C at a prompt ends the session with a farewell line instead of
    // a dead prompt or a stack trace.
    if let Err(e) = ctrlc::set_handler(|| {
        eprintln!("\nInterrupted by user");
        std::process::exit(130);
    }) {
        eprintln!("Error: failed to install interrupt handler: {e}");
        return ExitCode::FAILURE;
    }

    let store = match JsonTaskStore::new() {
        Ok(store) => store,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    match console::run(&store, io::stdin().lock(), io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

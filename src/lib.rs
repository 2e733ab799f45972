//! # `todo_tracker`
//!
//! A personal to-do list: short tasks with a priority label, stored in one
//! JSON file. The `todo` binary offers a console menu, the optional
//! `todo-gui` binary a windowed form; both drive the same [`ops`]
//! functions over the same [`store::TaskStore`], so either front end sees
//! the other's changes on its next read.

pub mod console;
pub mod error;
pub mod models;
pub mod ops;
pub mod paths;
pub mod store;
pub mod view;

pub use error::{Error, Result};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

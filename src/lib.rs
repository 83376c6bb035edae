//! hip-todo: a CRUD REST resource for ToDo records over SQLite.

pub mod config;
pub mod core;
pub mod modules;

// Re-export commonly used types
pub use modules::todos;

// ToDos module

pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use models::Todo;
pub use repositories::{SqliteTodoRepository, TodoRepository};
pub use services::TodoService;

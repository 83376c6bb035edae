pub mod todo_controller;

pub use todo_controller::configure;

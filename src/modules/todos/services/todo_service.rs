use std::sync::Arc;

use crate::core::error::AppError;
use crate::core::{Page, PageRequest};
use crate::modules::todos::models::Todo;
use crate::modules::todos::repositories::todo_repository::TodoRepository;

/// Result of an upsert, so the HTTP layer can distinguish a freshly
/// created row (201) from an updated one (200).
pub struct SaveOutcome {
    pub todo: Todo,
    pub created: bool,
}

/// Service for ToDo business logic
pub struct TodoService {
    repo: Arc<dyn TodoRepository>,
}

impl TodoService {
    pub fn new(repo: Arc<dyn TodoRepository>) -> Self {
        Self { repo }
    }

    /// Create a new ToDo. The request must not carry an id; a supplied id
    /// is a validation error, not an update, and nothing is persisted.
    pub async fn create(&self, todo: Todo) -> Result<Todo, AppError> {
        if todo.id.is_some() {
            return Err(AppError::validation(
                "idexists",
                "id",
                "A new toDo cannot already have an id",
            ));
        }

        self.repo.save(&todo).await
    }

    /// Upsert a ToDo. Without an id this takes the same save path as
    /// create and reports the row as newly created; with an id the row is
    /// replaced in place.
    pub async fn update(&self, todo: Todo) -> Result<SaveOutcome, AppError> {
        let created = todo.id.is_none();
        let todo = self.repo.save(&todo).await?;

        Ok(SaveOutcome { todo, created })
    }

    /// Fetch a ToDo by id
    pub async fn get(&self, id: i64) -> Result<Todo, AppError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("toDo {id}")))
    }

    /// Fetch one page of ToDos; no filtering is supported
    pub async fn list(&self, page: &PageRequest) -> Result<Page<Todo>, AppError> {
        self.repo.find_all(page).await
    }

    /// Delete a ToDo by id. Idempotent; deleting an unknown id succeeds.
    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        self.repo.delete_by_id(id).await
    }
}

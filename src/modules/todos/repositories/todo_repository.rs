use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::core::{Page, PageRequest, Result};
use crate::modules::todos::models::Todo;

/// Storage provider contract for ToDo records.
///
/// `save` has upsert semantics: a ToDo without an id is inserted and comes
/// back with the database-assigned id; a ToDo with an id replaces the row
/// with that id, inserting it if it does not exist yet.
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// Ordered, paginated find-all with the total row count attached
    async fn find_all(&self, page: &PageRequest) -> Result<Page<Todo>>;

    /// Find a ToDo by id
    async fn find_by_id(&self, id: i64) -> Result<Option<Todo>>;

    /// Upsert a ToDo, returning the persisted row
    async fn save(&self, todo: &Todo) -> Result<Todo>;

    /// Delete by id; a no-op when the id does not exist
    async fn delete_by_id(&self, id: i64) -> Result<()>;

    /// Total number of ToDo rows
    async fn count(&self) -> Result<i64>;
}

/// SQLite-backed repository for ToDo records
pub struct SqliteTodoRepository {
    pool: SqlitePool,
}

impl SqliteTodoRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TodoRepository for SqliteTodoRepository {
    async fn find_all(&self, page: &PageRequest) -> Result<Page<Todo>> {
        // Column and direction come from the PageRequest whitelist, never
        // from raw user input.
        let (column, direction) = page.order_by();
        let sql = format!(
            "SELECT id, name, description, creation_date FROM to_do \
             ORDER BY {column} {direction} LIMIT ? OFFSET ?"
        );

        // One transaction so the page and its total count see the same
        // snapshot under concurrent writes.
        let mut tx = self.pool.begin().await?;

        let items = sqlx::query_as::<_, Todo>(&sql)
            .bind(page.limit())
            .bind(page.offset())
            .fetch_all(&mut *tx)
            .await?;

        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM to_do")
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(Page {
            items,
            total,
            page: page.page.max(0),
            size: page.limit(),
        })
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Todo>> {
        let todo = sqlx::query_as::<_, Todo>(
            "SELECT id, name, description, creation_date FROM to_do WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(todo)
    }

    async fn save(&self, todo: &Todo) -> Result<Todo> {
        match todo.id {
            None => {
                let result = sqlx::query(
                    "INSERT INTO to_do (name, description, creation_date) VALUES (?, ?, ?)",
                )
                .bind(&todo.name)
                .bind(&todo.description)
                .bind(todo.creation_date)
                .execute(&self.pool)
                .await?;

                Ok(Todo {
                    id: Some(result.last_insert_rowid()),
                    ..todo.clone()
                })
            }
            Some(id) => {
                sqlx::query(
                    "INSERT INTO to_do (id, name, description, creation_date) \
                     VALUES (?, ?, ?, ?) \
                     ON CONFLICT(id) DO UPDATE SET \
                         name = excluded.name, \
                         description = excluded.description, \
                         creation_date = excluded.creation_date",
                )
                .bind(id)
                .bind(&todo.name)
                .bind(&todo.description)
                .bind(todo.creation_date)
                .execute(&self.pool)
                .await?;

                Ok(todo.clone())
            }
        }
    }

    async fn delete_by_id(&self, id: i64) -> Result<()> {
        // No existence check; deleting a missing id is not an error
        sqlx::query("DELETE FROM to_do WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn count(&self) -> Result<i64> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM to_do")
            .fetch_one(&self.pool)
            .await?;

        Ok(total)
    }
}

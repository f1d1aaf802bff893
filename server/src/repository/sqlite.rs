//! SQLite-backed repository.
//!
//! The schema is created on connect; there are no migration scripts.
//!
//! ```sql
//! CREATE TABLE IF NOT EXISTS todos (
//!     id INTEGER PRIMARY KEY AUTOINCREMENT,
//!     title TEXT NOT NULL,
//!     completed BOOLEAN NOT NULL
//! );
//! ```
//!
//! `AUTOINCREMENT` keeps ids from being reused after the newest row is
//! deleted, matching the in-memory backend.

use std::str::FromStr;

use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use super::{RepositoryError, TodoRepository};
use crate::entity::{Todo, TodoId};

const CREATE_TABLE: &str = "CREATE TABLE IF NOT EXISTS todos (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    completed BOOLEAN NOT NULL
)";

#[derive(Debug, Clone)]
pub struct SqliteTodoRepository {
    pool: SqlitePool,
}

impl SqliteTodoRepository {
    /// Open `database_url` and make sure the `todos` table exists.
    ///
    /// An in-memory database lives only as long as its connection, so
    /// `:memory:` URLs get a single connection that is never recycled.
    /// File URLs are created if missing.
    pub async fn connect(database_url: &str) -> Result<Self, RepositoryError> {
        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

        let pool = if is_in_memory(database_url) {
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
                .connect_with(options)
                .await?
        } else {
            SqlitePoolOptions::new().connect_with(options).await?
        };

        Self::from_pool(pool).await
    }

    /// Wrap an existing pool, creating the schema if needed.
    pub async fn from_pool(pool: SqlitePool) -> Result<Self, RepositoryError> {
        sqlx::query(CREATE_TABLE).execute(&pool).await?;
        tracing::debug!("todos table ready");
        Ok(Self { pool })
    }
}

fn is_in_memory(database_url: &str) -> bool {
    database_url.contains(":memory:") || database_url.contains("mode=memory")
}

#[async_trait]
impl TodoRepository for SqliteTodoRepository {
    async fn find_all(&self) -> Result<Vec<Todo>, RepositoryError> {
        let todos = sqlx::query_as::<_, Todo>("SELECT id, title, completed FROM todos ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(todos)
    }

    async fn find_by_id(&self, id: TodoId) -> Result<Option<Todo>, RepositoryError> {
        let todo = sqlx::query_as::<_, Todo>("SELECT id, title, completed FROM todos WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(todo)
    }

    async fn save(&self, todo: Todo) -> Result<Todo, RepositoryError> {
        let saved = match todo.id {
            None => {
                sqlx::query_as::<_, Todo>(
                    "INSERT INTO todos (title, completed) VALUES (?, ?)
                     RETURNING id, title, completed",
                )
                .bind(&todo.title)
                .bind(todo.completed)
                .fetch_one(&self.pool)
                .await?
            }
            Some(id) => {
                sqlx::query_as::<_, Todo>(
                    "INSERT INTO todos (id, title, completed) VALUES (?, ?, ?)
                     ON CONFLICT(id) DO UPDATE SET
                        title = excluded.title,
                        completed = excluded.completed
                     RETURNING id, title, completed",
                )
                .bind(id)
                .bind(&todo.title)
                .bind(todo.completed)
                .fetch_one(&self.pool)
                .await?
            }
        };
        Ok(saved)
    }

    async fn delete_by_id(&self, id: TodoId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM todos WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            tracing::debug!(id, "delete matched no row");
        }
        Ok(())
    }
}

//! Persistence for todos.
//!
//! `TodoRepository` is the only seam between the service layer and storage.
//! Both backends honor the same contract:
//!
//! - `find_all` returns rows in ascending id order.
//! - `save` inserts when `id` is `None` and returns the row with its new id;
//!   with `Some(id)` it overwrites that row (or recreates it under that id).
//! - `delete_by_id` on a missing id is `Ok(())`.

mod in_memory;
mod sqlite;

pub use in_memory::InMemoryTodoRepository;
pub use sqlite::SqliteTodoRepository;

use async_trait::async_trait;
use thiserror::Error;

use crate::entity::{Todo, TodoId};

/// Errors raised by a storage backend.
#[derive(Debug, Error, Clone)]
pub enum RepositoryError {
    #[error("database error: {0}")]
    Database(String),
}

impl From<sqlx::Error> for RepositoryError {
    fn from(error: sqlx::Error) -> Self {
        Self::Database(error.to_string())
    }
}

#[async_trait]
pub trait TodoRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Todo>, RepositoryError>;

    async fn find_by_id(&self, id: TodoId) -> Result<Option<Todo>, RepositoryError>;

    async fn save(&self, todo: Todo) -> Result<Todo, RepositoryError>;

    async fn delete_by_id(&self, id: TodoId) -> Result<(), RepositoryError>;
}

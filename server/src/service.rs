//! Todo use cases on top of a `TodoRepository`.
//!
//! The only logic of its own is find-or-fail on update. Concurrent updates
//! to the same id are not serialized here: the last save wins.

use std::sync::Arc;

use thiserror::Error;

use crate::entity::{Todo, TodoId, TodoInput};
use crate::repository::{RepositoryError, TodoRepository};

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Todo not found")]
    NotFound(TodoId),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

#[derive(Clone)]
pub struct TodoService {
    repository: Arc<dyn TodoRepository>,
}

impl TodoService {
    pub fn new(repository: Arc<dyn TodoRepository>) -> Self {
        Self { repository }
    }

    pub async fn get_todos(&self) -> Result<Vec<Todo>, ServiceError> {
        let todos = self.repository.find_all().await?;
        tracing::debug!(count = todos.len(), "listed todos");
        Ok(todos)
    }

    pub async fn get_todo(&self, id: TodoId) -> Result<Todo, ServiceError> {
        let Some(todo) = self.repository.find_by_id(id).await? else {
            tracing::debug!(id, "todo not found");
            return Err(ServiceError::NotFound(id));
        };
        tracing::debug!(id, "fetched todo");
        Ok(todo)
    }

    pub async fn create_todo(&self, input: TodoInput) -> Result<Todo, ServiceError> {
        let todo = self.repository.save(Todo::from_input(input)).await?;
        tracing::info!(id = ?todo.id, "created todo");
        Ok(todo)
    }

    /// Overwrite title and completed of an existing todo.
    ///
    /// # Errors
    ///
    /// `ServiceError::NotFound` when no todo has `id`; nothing is created.
    pub async fn update_todo(&self, id: TodoId, input: TodoInput) -> Result<Todo, ServiceError> {
        let Some(mut todo) = self.repository.find_by_id(id).await? else {
            tracing::warn!(id, "update of missing todo");
            return Err(ServiceError::NotFound(id));
        };
        todo.apply(input);
        let todo = self.repository.save(todo).await?;
        tracing::info!(id, "updated todo");
        Ok(todo)
    }

    /// Delete a todo. A missing id is not an error.
    pub async fn delete_todo(&self, id: TodoId) -> Result<(), ServiceError> {
        self.repository.delete_by_id(id).await?;
        tracing::info!(id, "deleted todo");
        Ok(())
    }
}

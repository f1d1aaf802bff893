use std::{collections::BTreeMap, sync::Arc};

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{RepositoryError, TodoRepository};
use crate::entity::{Todo, TodoId};

#[derive(Debug, Default)]
struct Table {
    rows: BTreeMap<TodoId, Todo>,
    last_id: TodoId,
}

/// Process-local storage. Ids start at 1 and are never reused, even after
/// the row holding the highest id is deleted.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTodoRepository {
    table: Arc<RwLock<Table>>,
}

impl InMemoryTodoRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TodoRepository for InMemoryTodoRepository {
    async fn find_all(&self) -> Result<Vec<Todo>, RepositoryError> {
        let table = self.table.read().await;
        Ok(table.rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: TodoId) -> Result<Option<Todo>, RepositoryError> {
        let table = self.table.read().await;
        Ok(table.rows.get(&id).cloned())
    }

    async fn save(&self, mut todo: Todo) -> Result<Todo, RepositoryError> {
        let mut table = self.table.write().await;
        let id = match todo.id {
            Some(id) => id,
            None => table.last_id + 1,
        };
        table.last_id = table.last_id.max(id);
        todo.id = Some(id);
        table.rows.insert(id, todo.clone());
        Ok(todo)
    }

    async fn delete_by_id(&self, id: TodoId) -> Result<(), RepositoryError> {
        self.table.write().await.rows.remove(&id);
        Ok(())
    }
}

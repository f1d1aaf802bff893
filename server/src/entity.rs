//! The todo entity and its request payload.
//!
//! # Design
//! `Todo` is both the persisted row and the response body. Its `id` is
//! `None` until a repository assigns one, so "insert vs. overwrite" in
//! `TodoRepository::save` is decided by the entity itself.
//! `TodoInput` carries only the client-writable fields; an `id` sent by the
//! client is ignored by serde and can never reach storage.

use serde::{Deserialize, Serialize};

/// Storage-assigned identity of a todo.
pub type TodoId = i64;

/// A single todo item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Todo {
    pub id: Option<TodoId>,
    pub title: String,
    pub completed: bool,
}

impl Todo {
    /// An unsaved todo built from a request body.
    pub fn from_input(input: TodoInput) -> Self {
        Self {
            id: None,
            title: input.title,
            completed: input.completed,
        }
    }

    /// Overwrite the mutable fields, keeping the id.
    pub fn apply(&mut self, input: TodoInput) {
        self.title = input.title;
        self.completed = input.completed;
    }
}

/// Request body for `POST /todos` and `PUT /todos/{id}`.
///
/// Missing fields fall back to an empty title and `completed = false`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoInput {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub completed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn todo_serializes_to_json() {
        let todo = Todo {
            id: Some(7),
            title: "Test".to_string(),
            completed: false,
        };
        let json = serde_json::to_value(&todo).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["title"], "Test");
        assert_eq!(json["completed"], false);
    }

    #[test]
    fn input_defaults_missing_fields() {
        let input: TodoInput = serde_json::from_str("{}").unwrap();
        assert_eq!(input.title, "");
        assert!(!input.completed);
    }

    #[test]
    fn input_ignores_client_supplied_id() {
        let input: TodoInput =
            serde_json::from_str(r#"{"id":42,"title":"Buy milk","completed":true}"#).unwrap();
        assert_eq!(
            input,
            TodoInput {
                title: "Buy milk".to_string(),
                completed: true,
            }
        );
    }

    #[test]
    fn from_input_is_unsaved() {
        let todo = Todo::from_input(TodoInput {
            title: "New".to_string(),
            completed: false,
        });
        assert!(todo.id.is_none());
        assert_eq!(todo.title, "New");
    }

    #[test]
    fn apply_keeps_id() {
        let mut todo = Todo {
            id: Some(3),
            title: "Old".to_string(),
            completed: false,
        };
        todo.apply(TodoInput {
            title: "X".to_string(),
            completed: true,
        });
        assert_eq!(todo.id, Some(3));
        assert_eq!(todo.title, "X");
        assert!(todo.completed);
    }
}

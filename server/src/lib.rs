//! To-do list REST API.
//!
//! # Overview
//! Four thin layers, wired by hand at startup:
//! `entity` (the `Todo` record), `repository` (storage behind the
//! `TodoRepository` trait), `service` (use cases, find-or-fail on update) and
//! `handlers` (axum routes under `/todos`).
//!
//! # Design
//! - The repository is chosen at runtime (`STORAGE_MODE`) and shared as
//!   `Arc<dyn TodoRepository>`; nothing else holds state.
//! - Cross-origin requests are allowed from any origin.

pub mod config;
pub mod entity;
pub mod error;
pub mod handlers;
pub mod repository;
pub mod service;

use std::sync::Arc;

use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use config::{Config, ConfigError, StorageMode};
pub use entity::{Todo, TodoId, TodoInput};
pub use repository::{InMemoryTodoRepository, RepositoryError, SqliteTodoRepository, TodoRepository};
pub use service::{ServiceError, TodoService};

#[derive(Clone)]
pub struct AppState {
    pub service: TodoService,
}

impl AppState {
    pub fn new(repository: Arc<dyn TodoRepository>) -> Self {
        Self {
            service: TodoService::new(repository),
        }
    }

    /// Build the repository selected by `config`.
    pub async fn from_config(config: &Config) -> Result<Self, RepositoryError> {
        let repository: Arc<dyn TodoRepository> = match config.storage_mode {
            StorageMode::InMemory => Arc::new(InMemoryTodoRepository::new()),
            StorageMode::Sqlite => {
                Arc::new(SqliteTodoRepository::connect(&config.database_url).await?)
            }
        };
        Ok(Self::new(repository))
    }

    /// Fresh in-memory state.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryTodoRepository::new()))
    }
}

pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/todos", get(handlers::list_todos).post(handlers::create_todo))
        .route(
            "/todos/{id}",
            get(handlers::get_todo)
                .put(handlers::update_todo)
                .delete(handlers::delete_todo),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Serve until the listener fails.
pub async fn run(listener: TcpListener, state: AppState) -> Result<(), std::io::Error> {
    axum::serve(listener, app(state)).await
}

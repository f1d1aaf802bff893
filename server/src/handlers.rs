//! HTTP handlers for `/todos`.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::entity::{Todo, TodoId, TodoInput};
use crate::error::ApiErrorResponse;
use crate::AppState;

pub async fn list_todos(State(state): State<AppState>) -> Result<Json<Vec<Todo>>, ApiErrorResponse> {
    Ok(Json(state.service.get_todos().await?))
}

/// 201 with the stored row, id included.
pub async fn create_todo(
    State(state): State<AppState>,
    Json(input): Json<TodoInput>,
) -> Result<(StatusCode, Json<Todo>), ApiErrorResponse> {
    let todo = state.service.create_todo(input).await?;
    Ok((StatusCode::CREATED, Json(todo)))
}

pub async fn get_todo(
    State(state): State<AppState>,
    Path(id): Path<TodoId>,
) -> Result<Json<Todo>, ApiErrorResponse> {
    Ok(Json(state.service.get_todo(id).await?))
}

/// A missing id is 404 `NOT_FOUND`, not a generic 500; nothing is created.
pub async fn update_todo(
    State(state): State<AppState>,
    Path(id): Path<TodoId>,
    Json(input): Json<TodoInput>,
) -> Result<Json<Todo>, ApiErrorResponse> {
    Ok(Json(state.service.update_todo(id, input).await?))
}

/// Always 204, whether or not the todo existed. Unlike update, a missing
/// id is not reported.
pub async fn delete_todo(
    State(state): State<AppState>,
    Path(id): Path<TodoId>,
) -> Result<StatusCode, ApiErrorResponse> {
    state.service.delete_todo(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

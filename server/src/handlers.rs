use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use todo_core::{NewTodo, TodoId};
use tracing::info;

use crate::error::ApiError;
use crate::json::PrettyJson;
use crate::SharedStore;

pub async fn list_todos(State(store): State<SharedStore>) -> Result<PrettyJson, ApiError> {
    // Snapshot first; the store lock is released before encoding.
    let todos = store.list();
    PrettyJson::encode(&todos)
}

/// The body is decoded from raw bytes, so no `Content-Type` is required.
pub async fn create_todo(
    State(store): State<SharedStore>,
    body: Bytes,
) -> Result<impl IntoResponse, ApiError> {
    let input: NewTodo = serde_json::from_slice(&body).map_err(ApiError::Decode)?;
    let todo = store.create(input)?;
    info!(id = %todo.id, "todo created");
    Ok((StatusCode::CREATED, PrettyJson::encode(&todo)?))
}

pub fn get_todo(store: &SharedStore, id: TodoId) -> Result<PrettyJson, ApiError> {
    let todo = store.get(id)?;
    PrettyJson::encode(&todo)
}

pub fn delete_todo(store: &SharedStore, id: TodoId) -> Result<StatusCode, ApiError> {
    store.delete(id)?;
    info!(%id, "todo deleted");
    Ok(StatusCode::NO_CONTENT)
}

pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

pub async fn not_found() -> ApiError {
    ApiError::NotFound
}

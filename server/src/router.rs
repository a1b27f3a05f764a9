//! Method and path dispatch.
//!
//! # Design
//! `/todos` is a plain axum method router. The id routes go through one
//! catch-all so the checks run in a fixed order: segment count (404), then
//! id syntax (400), then method (405). A `POST /todos/abc` is therefore
//! "invalid id", not "method not allowed".
//!
//! axum answers HEAD with the GET handler unless HEAD has its own route, so
//! `/todos` registers HEAD explicitly as 405.

use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::http::Method;
use axum::response::{IntoResponse, Response};
use axum::routing::{any, get};
use axum::Router;
use todo_core::TodoId;
use tower_http::trace::TraceLayer;

use crate::error::ApiError;
use crate::handlers::{
    create_todo, delete_todo, get_todo, list_todos, method_not_allowed, not_found,
};
use crate::SharedStore;

pub fn router(store: SharedStore) -> Router {
    Router::new()
        .route(
            "/todos",
            get(list_todos)
                .head(method_not_allowed)
                .post(create_todo)
                .fallback(method_not_allowed),
        )
        .route("/todos/{*rest}", any(todo_by_id))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(store)
}

async fn todo_by_id(
    State(store): State<SharedStore>,
    method: Method,
    rest: Result<Path<String>, PathRejection>,
) -> Result<Response, ApiError> {
    // The capture is percent-decoded; one that isn't valid UTF-8 can't be an id.
    let Path(rest) = rest.map_err(|_| ApiError::InvalidId)?;
    let id = parse_id_path(&format!("/todos/{rest}"))?;
    match method {
        Method::GET => get_todo(&store, id).map(IntoResponse::into_response),
        Method::DELETE => delete_todo(&store, id).map(IntoResponse::into_response),
        _ => Err(ApiError::MethodNotAllowed),
    }
}

/// Extract the id from a decoded `/todos/{id}` path.
///
/// Surrounding slashes are ignored, so `/todos/7/` names todo 7, but the
/// trimmed path must be exactly two segments.
pub fn parse_id_path(path: &str) -> Result<TodoId, ApiError> {
    let segments: Vec<&str> = path.trim_matches('/').split('/').collect();
    match segments.as_slice() {
        [_, id] => Ok(id.parse::<TodoId>()?),
        _ => Err(ApiError::NotFound),
    }
}

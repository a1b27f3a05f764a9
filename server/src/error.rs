//! Error responses for the todo API.
//!
//! # Design
//! Every failure is handled in the handler that detects it and turned into
//! a status code plus a one-line plain-text body. Client mistakes (4xx) are
//! logged at debug only; server-side faults (encoding, id exhaustion) are
//! logged at error.

use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use todo_core::{ParseTodoIdError, StoreError};

const TEXT_UTF8: &str = "text/plain; charset=utf-8";

/// Errors surfaced to HTTP clients.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request body is not a JSON object of the expected shape.
    #[error("bad request: {0}")]
    Decode(#[source] serde_json::Error),

    /// The `{id}` path segment is not a base-10 integer.
    #[error("invalid id")]
    InvalidId,

    #[error("title required")]
    TitleRequired,

    /// Unknown id, or a path that names no resource.
    #[error("not found")]
    NotFound,

    #[error("method not allowed")]
    MethodNotAllowed,

    /// The response value could not be encoded as JSON.
    #[error("encode error: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("todo ids exhausted")]
    IdsExhausted,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Decode(_) | Self::InvalidId | Self::TitleRequired => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::Encode(_) | Self::IdsExhausted => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::TitleRequired => Self::TitleRequired,
            StoreError::NotFound(_) => Self::NotFound,
            StoreError::IdsExhausted => Self::IdsExhausted,
        }
    }
}

impl From<ParseTodoIdError> for ApiError {
    fn from(_: ParseTodoIdError) -> Self {
        Self::InvalidId
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::debug!(status = status.as_u16(), error = %self, "request rejected");
        }

        (
            status,
            [
                (header::CONTENT_TYPE, HeaderValue::from_static(TEXT_UTF8)),
                (header::X_CONTENT_TYPE_OPTIONS, HeaderValue::from_static("nosniff")),
            ],
            format!("{self}\n"),
        )
            .into_response()
    }
}

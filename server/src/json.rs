//! Pretty-printed JSON response bodies.
//!
//! Encoding happens eagerly in `PrettyJson::encode` so a failure surfaces as
//! an `ApiError` from the handler (500) instead of being masked by whatever
//! status the handler pairs the body with.

use axum::http::{header, HeaderValue};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::error::ApiError;

pub const JSON_UTF8: &str = "application/json; charset=utf-8";

/// An already-encoded JSON body: two-space indent, newline-terminated.
#[derive(Debug, Clone)]
pub struct PrettyJson(Vec<u8>);

impl PrettyJson {
    pub fn encode<T: Serialize + ?Sized>(value: &T) -> Result<Self, ApiError> {
        let mut body = serde_json::to_vec_pretty(value).map_err(ApiError::Encode)?;
        body.push(b'\n');
        Ok(Self(body))
    }

    #[cfg(test)]
    fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl IntoResponse for PrettyJson {
    fn into_response(self) -> Response {
        (
            [(header::CONTENT_TYPE, HeaderValue::from_static(JSON_UTF8))],
            self.0,
        )
            .into_response()
    }
}

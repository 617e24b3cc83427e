//! Response types shared by API handlers.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::json;

/// Outcome of a single-record lookup.
///
/// `Found` renders as `200` with the record as JSON. `NotFound` renders as
/// `404` with an empty JSON object. A miss is not an [`crate::error::AppError`].
#[derive(Debug, Clone, PartialEq)]
pub enum Lookup<T> {
    Found(T),
    NotFound,
}

impl<T> From<Option<T>> for Lookup<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(item) => Lookup::Found(item),
            None => Lookup::NotFound,
        }
    }
}

impl<T: Serialize> IntoResponse for Lookup<T> {
    fn into_response(self) -> Response {
        match self {
            Lookup::Found(item) => (StatusCode::OK, Json(item)).into_response(),
            Lookup::NotFound => (StatusCode::NOT_FOUND, Json(json!({}))).into_response(),
        }
    }
}

//! Typed error handling for the dishes and orders API
//!
//! Every failure a handler can produce is an [`ApiError`]. Each variant maps
//! to exactly one HTTP status and carries the message the client sees, so
//! the response body is always `{ "error": <message> }`.
//!
//! # Example
//!
//! ```rust,ignore
//! use grubdash::prelude::*;
//!
//! fn lookup(store: &DishStore, id: &str) -> Result<Dish, ApiError> {
//!     store.find(id)?.ok_or_else(|| ApiError::not_found::<Dish>(id))
//! }
//!
//! match lookup(&store, "42") {
//!     Ok(dish) => println!("Found: {:?}", dish),
//!     Err(ApiError::NotFound { id, .. }) => println!("Dish {} not found", id),
//!     Err(e) => eprintln!("Other error: {}", e),
//! }
//! ```

use crate::core::entity::Entity;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

/// The error type shared by stores, validators and handlers
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// A field-level rule failed; the message is the rule text (dish) or
    /// every failed rule joined together (order)
    #[error("{0}")]
    Validation(String),

    /// The payload `id` disagrees with the id in the route
    #[error("{0}")]
    IdMismatch(String),

    /// Lookup by id found no record
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    /// The record is in a state that forbids the operation
    #[error("{0}")]
    StateConflict(String),

    /// The request body could not be parsed
    #[error("{0}")]
    InvalidBody(String),

    /// No route matches the request path
    #[error("Path not found: {0}")]
    RouteNotFound(String),

    /// The route exists but does not accept the method
    #[error("{method} not allowed for {path}")]
    MethodNotAllowed { method: String, path: String },

    /// Should not happen in normal operation (poisoned lock, etc.)
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error body rendered for every failed request
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ApiError {
    /// Build a not-found error named after the entity type
    pub fn not_found<T: Entity>(id: impl Into<String>) -> Self {
        ApiError::NotFound {
            entity: T::type_label(),
            id: id.into(),
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_)
            | ApiError::IdMismatch(_)
            | ApiError::StateConflict(_)
            | ApiError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound { .. } | ApiError::RouteNotFound(_) => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::Validation(_) => "VALIDATION_ERROR",
            ApiError::IdMismatch(_) => "ID_MISMATCH",
            ApiError::NotFound { .. } => "NOT_FOUND",
            ApiError::StateConflict(_) => "STATE_CONFLICT",
            ApiError::InvalidBody(_) => "INVALID_BODY",
            ApiError::RouteNotFound(_) => "ROUTE_NOT_FOUND",
            ApiError::MethodNotAllowed { .. } => "METHOD_NOT_ALLOWED",
            ApiError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Convert to an error response
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            error: self.to_string(),
        }
    }

    /// Wrap a poisoned-lock failure from one of the stores
    pub(crate) fn lock<E: std::fmt::Display>(err: E) -> Self {
        ApiError::Internal(format!("Failed to acquire store lock: {}", err))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(code = self.error_code(), "{}", self);
        } else {
            tracing::debug!(code = self.error_code(), status = %status, "{}", self);
        }
        (status, Json(self.to_response())).into_response()
    }
}

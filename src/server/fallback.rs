//! Handlers for requests no route accepts

use crate::core::error::ApiError;
use axum::extract::OriginalUri;
use axum::http::Method;

/// Router fallback: 404 `Path not found: <path>`
pub async fn path_not_found(OriginalUri(uri): OriginalUri) -> ApiError {
    ApiError::RouteNotFound(uri.path().to_string())
}

/// Per-route fallback: 405 `<METHOD> not allowed for <path>`
pub async fn method_not_allowed(method: Method, OriginalUri(uri): OriginalUri) -> ApiError {
    ApiError::MethodNotAllowed {
        method: method.to_string(),
        path: uri.path().to_string(),
    }
}

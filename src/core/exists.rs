//! Existence-check middleware
//!
//! Routes addressing a single record (`/dishes/{dishId}`, `/orders/{orderId}`)
//! run [`require_existing`] before the handler. A missing record short-circuits
//! with a 404; a present one is handed to the handler as [`Found<T>`].

use crate::core::entity::Entity;
use crate::core::error::ApiError;
use axum::{
    extract::{Path, Request, State},
    middleware::Next,
    response::Response,
};

/// Lookup by id, implemented by each store
pub trait RecordLookup<T: Entity>: Clone + Send + Sync + 'static {
    /// Find a record by id (linear scan, `None` when absent)
    fn find(&self, id: &str) -> Result<Option<T>, ApiError>;
}

/// The record located by [`require_existing`], as a request extension
#[derive(Debug, Clone)]
pub struct Found<T>(pub T);

/// Middleware failing with `NotFound` unless the route id names a record
///
/// ```rust,ignore
/// Router::new()
///     .route("/dishes/{dishId}", get(read_dish).put(update_dish))
///     .route_layer(middleware::from_fn_with_state(
///         store.clone(),
///         require_existing::<DishStore, Dish>,
///     ))
/// ```
pub async fn require_existing<S, T>(
    State(store): State<S>,
    Path(id): Path<String>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError>
where
    S: RecordLookup<T>,
    T: Entity,
{
    let record = store
        .find(&id)?
        .ok_or_else(|| ApiError::not_found::<T>(id.as_str()))?;

    tracing::trace!(entity = T::type_label(), id = record.id(), "Record found");
    request.extensions_mut().insert(Found(record));
    Ok(next.run(request).await)
}

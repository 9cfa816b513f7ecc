//! Order HTTP handlers

use super::{
    model::{Order, OrderInput},
    store::OrderStore,
};
use crate::core::envelope::{DataEnvelope, Payload};
use crate::core::error::ApiError;
use crate::core::exists::Found;
use axum::{
    Extension,
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};

/// Order-specific AppState
#[derive(Clone)]
pub struct OrderAppState {
    pub store: OrderStore,
}

pub async fn list_orders(
    State(state): State<OrderAppState>,
) -> Result<Json<DataEnvelope<Vec<Order>>>, ApiError> {
    Ok(Json(DataEnvelope::new(state.store.list()?)))
}

pub async fn create_order(
    State(state): State<OrderAppState>,
    Payload(input): Payload<OrderInput>,
) -> Result<(StatusCode, Json<DataEnvelope<Order>>), ApiError> {
    let order = state.store.create(&input)?;
    Ok((StatusCode::CREATED, Json(DataEnvelope::new(order))))
}

pub async fn read_order(
    Extension(Found(order)): Extension<Found<Order>>,
) -> Json<DataEnvelope<Order>> {
    Json(DataEnvelope::new(order))
}

pub async fn update_order(
    State(state): State<OrderAppState>,
    Path(order_id): Path<String>,
    Payload(input): Payload<OrderInput>,
) -> Result<Json<DataEnvelope<Order>>, ApiError> {
    let order = state.store.update(&order_id, &input)?;
    Ok(Json(DataEnvelope::new(order)))
}

pub async fn delete_order(
    State(state): State<OrderAppState>,
    Path(order_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.store.delete(&order_id)?;
    Ok(StatusCode::NO_CONTENT)
}

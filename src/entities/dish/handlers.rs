//! Dish HTTP handlers

use super::{
    model::{Dish, DishInput},
    store::DishStore,
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
use serde_json::{Value, json};

pub const DISH_CREATED: &str = "Dish created successfully.";

/// Dish-specific AppState
#[derive(Clone)]
pub struct DishAppState {
    pub store: DishStore,
}

pub async fn list_dishes(
    State(state): State<DishAppState>,
) -> Result<Json<DataEnvelope<Vec<Dish>>>, ApiError> {
    Ok(Json(DataEnvelope::new(state.store.list()?)))
}

pub async fn create_dish(
    State(state): State<DishAppState>,
    Payload(input): Payload<DishInput>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let dish = state.store.create(&input)?;
    Ok((
        StatusCode::CREATED,
        Json(json!({ "data": dish, "message": DISH_CREATED })),
    ))
}

pub async fn read_dish(Extension(Found(dish)): Extension<Found<Dish>>) -> Json<DataEnvelope<Dish>> {
    Json(DataEnvelope::new(dish))
}

pub async fn update_dish(
    State(state): State<DishAppState>,
    Path(dish_id): Path<String>,
    Payload(input): Payload<DishInput>,
) -> Result<Json<DataEnvelope<Dish>>, ApiError> {
    let dish = state.store.update(&dish_id, &input)?;
    Ok(Json(DataEnvelope::new(dish)))
}

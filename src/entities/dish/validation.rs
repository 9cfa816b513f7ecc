//! Dish rule set
//!
//! Rules run in a fixed order and the first failure wins. A non-numeric
//! price is therefore reported before a missing name.

use super::model::{DishFields, DishInput};
use crate::core::error::ApiError;
use serde_json::Value;

pub const PRICE_NOT_A_NUMBER: &str = "price must be a number.";
pub const NAME_REQUIRED: &str = "name is required.";
pub const DESCRIPTION_REQUIRED: &str = "description is required.";
pub const IMAGE_URL_REQUIRED: &str = "image_url is required.";
pub const PRICE_REQUIRED: &str = "price is required.";
pub const PRICE_NOT_POSITIVE: &str = "price must be greater than zero.";

/// Validate a dish payload, returning the fields to store
pub fn validate_dish(input: &DishInput) -> Result<DishFields, ApiError> {
    check(input).map_err(|message| ApiError::Validation(message.to_string()))
}

fn check(input: &DishInput) -> Result<DishFields, &'static str> {
    let price = match &input.price {
        Some(Value::Number(price)) => Some(price),
        Some(_) => return Err(PRICE_NOT_A_NUMBER),
        None => None,
    };

    let name = non_blank(&input.name).ok_or(NAME_REQUIRED)?;

    let description = input
        .description
        .as_ref()
        .filter(|d| is_present(d))
        .ok_or(DESCRIPTION_REQUIRED)?;

    let image_url = non_blank(&input.image_url).ok_or(IMAGE_URL_REQUIRED)?;
    let price = price.ok_or(PRICE_REQUIRED)?;

    if price.as_f64().is_none_or(|p| p <= 0.0) {
        return Err(PRICE_NOT_POSITIVE);
    }

    Ok(DishFields {
        name: name.to_string(),
        description: description.clone(),
        price: price.clone(),
        image_url: image_url.to_string(),
    })
}

/// Presence only: whitespace and non-string values count
fn is_present(value: &Value) -> bool {
    match value {
        Value::Null | Value::Bool(false) => false,
        Value::String(s) => !s.is_empty(),
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        _ => true,
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

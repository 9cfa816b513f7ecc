//! Order rule set
//!
//! Unlike dishes, every failed rule is collected and the messages are joined
//! into one. Status is only checked on update.

use super::model::{OrderFields, OrderInput, OrderItem, OrderStatus};
use crate::core::error::ApiError;
use serde_json::Value;

pub const STATUS_REQUIRED: &str = "status is required";
pub const STATUS_NOT_ALLOWED: &str =
    r#"status must be one of "pending", "preparing", "out-for-delivery", "delivered""#;
pub const DELIVER_TO_REQUIRED: &str = "deliverTo is required";
pub const MOBILE_NUMBER_REQUIRED: &str = "mobileNumber is required";
pub const DISHES_REQUIRED: &str = "Order must include at least one dish";

/// Which rule set applies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Create,
    Update,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum QuantityFault {
    NotPositive,
    NotInteger,
}

/// Validate an order payload, returning the fields to store
pub fn validate_order(input: &OrderInput, operation: Operation) -> Result<OrderFields, ApiError> {
    let mut errors: Vec<String> = Vec::new();
    let status = input.status.as_deref().map(OrderStatus::from);

    if operation == Operation::Update {
        match (&input.status, &status) {
            (Some(raw), _) if raw.trim().is_empty() => errors.push(STATUS_REQUIRED.to_string()),
            (None, _) => errors.push(STATUS_REQUIRED.to_string()),
            (_, Some(status)) if !status.is_recognized() => {
                errors.push(STATUS_NOT_ALLOWED.to_string())
            }
            _ => {}
        }
    }

    let deliver_to = non_blank(&input.deliver_to);
    if deliver_to.is_none() {
        errors.push(DELIVER_TO_REQUIRED.to_string());
    }

    let mobile_number = non_blank(&input.mobile_number);
    if mobile_number.is_none() {
        errors.push(MOBILE_NUMBER_REQUIRED.to_string());
    }

    let mut dishes = Vec::new();
    match input.dishes.as_ref().and_then(Value::as_array) {
        Some(entries) if !entries.is_empty() => {
            for (index, entry) in entries.iter().enumerate() {
                match quantity(entry) {
                    Ok(quantity) => dishes.push(OrderItem {
                        dish: snapshot(entry),
                        quantity,
                    }),
                    Err(QuantityFault::NotPositive) => errors.push(format!(
                        "Dish {} must have a quantity greater than 0",
                        index
                    )),
                    Err(QuantityFault::NotInteger) => errors.push(format!(
                        "Dish {} must have a quantity that is an integer",
                        index
                    )),
                }
            }
        }
        _ => errors.push(DISHES_REQUIRED.to_string()),
    }

    match (deliver_to, mobile_number) {
        (Some(deliver_to), Some(mobile_number)) if errors.is_empty() => Ok(OrderFields {
            deliver_to: deliver_to.to_string(),
            mobile_number: mobile_number.to_string(),
            status,
            dishes,
        }),
        _ => Err(ApiError::Validation(errors.join(", "))),
    }
}

/// Classify an entry's quantity
///
/// The positivity check runs first; the integer check is only reached for
/// quantities above zero, so `-1.5` reports `NotPositive`. Strings are
/// compared numerically the way a loosely typed client would expect.
fn quantity(entry: &Value) -> Result<u64, QuantityFault> {
    match entry.get("quantity") {
        None | Some(Value::Null) | Some(Value::Bool(false)) => Err(QuantityFault::NotPositive),
        Some(Value::Number(n)) => {
            if let Some(q) = n.as_u64() {
                return if q == 0 {
                    Err(QuantityFault::NotPositive)
                } else {
                    Ok(q)
                };
            }
            match n.as_f64() {
                Some(f) if f <= 0.0 => Err(QuantityFault::NotPositive),
                // saturates above u64::MAX
                Some(f) if f.fract() == 0.0 => Ok(f as u64),
                _ => Err(QuantityFault::NotInteger),
            }
        }
        Some(Value::String(s)) => {
            let trimmed = s.trim();
            let coerced = if trimmed.is_empty() {
                0.0
            } else {
                trimmed.parse::<f64>().unwrap_or(f64::NAN)
            };
            if coerced <= 0.0 {
                Err(QuantityFault::NotPositive)
            } else {
                Err(QuantityFault::NotInteger)
            }
        }
        Some(_) => Err(QuantityFault::NotInteger),
    }
}

fn snapshot(entry: &Value) -> serde_json::Map<String, Value> {
    let mut dish = entry.as_object().cloned().unwrap_or_default();
    dish.remove("quantity");
    dish
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

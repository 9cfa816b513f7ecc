//! Order entity model, its status and its request payload

use crate::core::entity::Entity;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Lifecycle status of an order
///
/// Creation does not check the status, so whatever string a client sent is
/// kept as `Unrecognized` and written back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum OrderStatus {
    Pending,
    Preparing,
    OutForDelivery,
    Delivered,
    Unrecognized(String),
}

impl OrderStatus {
    /// Wire names of the statuses an update may set
    pub const ALLOWED: [&'static str; 4] = ["pending", "preparing", "out-for-delivery", "delivered"];

    pub fn as_str(&self) -> &str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Preparing => "preparing",
            OrderStatus::OutForDelivery => "out-for-delivery",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Unrecognized(raw) => raw,
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, OrderStatus::Unrecognized(_))
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, OrderStatus::Pending)
    }
}

impl From<&str> for OrderStatus {
    fn from(raw: &str) -> Self {
        match raw {
            "pending" => OrderStatus::Pending,
            "preparing" => OrderStatus::Preparing,
            "out-for-delivery" => OrderStatus::OutForDelivery,
            "delivered" => OrderStatus::Delivered,
            other => OrderStatus::Unrecognized(other.to_string()),
        }
    }
}

impl From<String> for OrderStatus {
    fn from(raw: String) -> Self {
        OrderStatus::from(raw.as_str())
    }
}

impl From<OrderStatus> for String {
    fn from(status: OrderStatus) -> Self {
        match status {
            OrderStatus::Unrecognized(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One line of an order: a snapshot of the dish plus how many were ordered
///
/// The dish fields are copied as sent, not resolved against the dish store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    #[serde(flatten)]
    pub dish: Map<String, Value>,
    pub quantity: u64,
}

/// A customer order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub deliver_to: String,
    pub mobile_number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<OrderStatus>,
    pub dishes: Vec<OrderItem>,
}

impl Order {
    /// Only pending orders may be deleted; an order without a status is not pending
    pub fn is_pending(&self) -> bool {
        self.status.as_ref().is_some_and(OrderStatus::is_pending)
    }
}

impl Entity for Order {
    fn type_label() -> &'static str {
        "Order"
    }

    fn id(&self) -> &str {
        &self.id
    }
}

/// Content of `data` in create and update requests
///
/// `dishes` is taken as raw JSON: the rule set reports a non-array the same
/// way as an empty one, and inspects each entry's `quantity` on its own.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderInput {
    pub id: Option<Value>,
    pub deliver_to: Option<String>,
    pub mobile_number: Option<String>,
    pub status: Option<String>,
    pub dishes: Option<Value>,
}

/// The mutable fields of an order, after validation
#[derive(Debug, Clone, PartialEq)]
pub struct OrderFields {
    pub deliver_to: String,
    pub mobile_number: String,
    pub status: Option<OrderStatus>,
    pub dishes: Vec<OrderItem>,
}

impl OrderFields {
    pub fn into_order(self, id: String) -> Order {
        Order {
            id,
            deliver_to: self.deliver_to,
            mobile_number: self.mobile_number,
            status: self.status,
            dishes: self.dishes,
        }
    }

    /// Overwrite every mutable field of `order`, leaving its id alone
    pub fn apply_to(self, order: &mut Order) {
        order.deliver_to = self.deliver_to;
        order.mobile_number = self.mobile_number;
        order.status = self.status;
        order.dishes = self.dishes;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_status_wire_names() {
        for name in OrderStatus::ALLOWED {
            let status = OrderStatus::from(name);
            assert!(status.is_recognized());
            assert_eq!(String::from(status), name);
        }
        assert_eq!(OrderStatus::from("out-for-delivery"), OrderStatus::OutForDelivery);
    }

    #[test]
    fn test_unrecognized_status_round_trips() {
        let status: OrderStatus = serde_json::from_value(json!("cancelled")).unwrap();
        assert!(!status.is_recognized());
        assert_eq!(serde_json::to_value(&status).unwrap(), json!("cancelled"));
    }

    #[test]
    fn test_order_without_status_omits_it() {
        let order = Order {
            id: "1".to_string(),
            deliver_to: "A".to_string(),
            mobile_number: "555".to_string(),
            status: None,
            dishes: vec![],
        };
        let body = serde_json::to_value(&order).unwrap();
        assert!(body.get("status").is_none());
        assert_eq!(body["deliverTo"], "A");
        assert!(!order.is_pending());
    }

    #[test]
    fn test_item_keeps_dish_snapshot() {
        let item: OrderItem = serde_json::from_value(json!({
            "id": "d1",
            "name": "Pasta",
            "price": 12,
            "quantity": 2
        }))
        .unwrap();

        assert_eq!(item.quantity, 2);
        assert_eq!(item.dish["name"], "Pasta");
        assert!(!item.dish.contains_key("quantity"));
    }
}

//! Order store implementation

use super::model::{Order, OrderInput};
use super::validation::{Operation, validate_order};
use crate::core::error::ApiError;
use crate::core::exists::RecordLookup;
use crate::core::id::{IdGenerator, conflicting_id};
use std::sync::{Arc, RwLock};

/// In-memory store for Order entities
#[derive(Clone)]
pub struct OrderStore {
    data: Arc<RwLock<Vec<Order>>>,
    ids: Arc<IdGenerator>,
}

impl OrderStore {
    pub fn new(ids: Arc<IdGenerator>) -> Self {
        Self {
            data: Arc::new(RwLock::new(Vec::new())),
            ids,
        }
    }

    /// Insert an already-identified order (seed data)
    pub fn add(&self, order: Order) -> Result<(), ApiError> {
        if !self.ids.reserve(&order.id)? {
            return Err(ApiError::Internal(format!("Duplicate order id: {}", order.id)));
        }
        self.data.write().map_err(ApiError::lock)?.push(order);
        Ok(())
    }

    pub fn list(&self) -> Result<Vec<Order>, ApiError> {
        Ok(self.data.read().map_err(ApiError::lock)?.clone())
    }

    /// Validate with the create rules (status unchecked), assign an id, append
    pub fn create(&self, input: &OrderInput) -> Result<Order, ApiError> {
        let fields = validate_order(input, Operation::Create)?;
        let order = fields.into_order(self.ids.next_id()?);

        self.data.write().map_err(ApiError::lock)?.push(order.clone());
        tracing::debug!(order_id = %order.id, dishes = order.dishes.len(), "Order created");

        Ok(order)
    }

    pub fn get(&self, id: &str) -> Result<Order, ApiError> {
        self.find(id)?.ok_or_else(|| ApiError::not_found::<Order>(id))
    }

    /// Replace every mutable field of the order at `route_id`
    ///
    /// Validation errors are reported before a payload/route id mismatch.
    pub fn update(&self, route_id: &str, input: &OrderInput) -> Result<Order, ApiError> {
        let fields = validate_order(input, Operation::Update)?;

        if let Some(payload_id) = conflicting_id(input.id.as_ref(), route_id) {
            return Err(ApiError::IdMismatch(format!(
                "Order id does not match route id: {} !== {}",
                payload_id, route_id
            )));
        }

        let mut orders = self.data.write().map_err(ApiError::lock)?;
        let order = orders
            .iter_mut()
            .find(|order| order.id == route_id)
            .ok_or_else(|| ApiError::not_found::<Order>(route_id))?;

        fields.apply_to(order);
        tracing::debug!(order_id = %order.id, status = ?order.status, "Order updated");

        Ok(order.clone())
    }

    /// Remove a pending order
    pub fn delete(&self, id: &str) -> Result<Order, ApiError> {
        let mut orders = self.data.write().map_err(ApiError::lock)?;
        let index = orders
            .iter()
            .position(|order| order.id == id)
            .ok_or_else(|| ApiError::not_found::<Order>(id))?;

        if !orders[index].is_pending() {
            return Err(ApiError::StateConflict(format!(
                "Order cannot be deleted unless it is pending: {}",
                id
            )));
        }

        let removed = orders.remove(index);
        tracing::debug!(order_id = %removed.id, "Order deleted");

        Ok(removed)
    }

    pub fn len(&self) -> usize {
        self.data.read().map(|orders| orders.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl RecordLookup<Order> for OrderStore {
    fn find(&self, id: &str) -> Result<Option<Order>, ApiError> {
        let orders = self.data.read().map_err(ApiError::lock)?;
        Ok(orders.iter().find(|order| order.id == id).cloned())
    }
}

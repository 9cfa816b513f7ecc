//! Entity descriptor for Order

use super::{
    handlers::{
        OrderAppState, create_order, delete_order, list_orders, read_order, update_order,
    },
    model::Order,
    store::OrderStore,
};
use crate::core::exists::require_existing;
use crate::server::{EntityDescriptor, fallback::method_not_allowed};
use axum::{Router, middleware, routing::get};

/// Descriptor for the Order entity
pub struct OrderDescriptor {
    pub store: OrderStore,
}

impl OrderDescriptor {
    pub fn new(store: OrderStore) -> Self {
        Self { store }
    }
}

impl EntityDescriptor for OrderDescriptor {
    fn entity_type(&self) -> &str {
        "order"
    }

    fn plural(&self) -> &str {
        "orders"
    }

    fn build_routes(&self) -> Router {
        let state = OrderAppState {
            store: self.store.clone(),
        };

        let collection_path = format!("/{}", self.plural());
        let member_path = format!("{}/{{orderId}}", collection_path);

        let collection = Router::new().route(
            &collection_path,
            get(list_orders)
                .post(create_order)
                .fallback(method_not_allowed),
        );

        let member = Router::new()
            .route(
                &member_path,
                get(read_order)
                    .put(update_order)
                    .delete(delete_order)
                    .fallback(method_not_allowed),
            )
            .route_layer(middleware::from_fn_with_state(
                self.store.clone(),
                require_existing::<OrderStore, Order>,
            ));

        collection.merge(member).with_state(state)
    }
}

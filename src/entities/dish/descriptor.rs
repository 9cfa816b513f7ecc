//! Entity descriptor for Dish

use super::{
    handlers::{DishAppState, create_dish, list_dishes, read_dish, update_dish},
    model::Dish,
    store::DishStore,
};
use crate::core::exists::require_existing;
use crate::server::{EntityDescriptor, fallback::method_not_allowed};
use axum::{Router, middleware, routing::get};

/// Descriptor for the Dish entity
pub struct DishDescriptor {
    pub store: DishStore,
}

impl DishDescriptor {
    pub fn new(store: DishStore) -> Self {
        Self { store }
    }
}

impl EntityDescriptor for DishDescriptor {
    fn entity_type(&self) -> &str {
        "dish"
    }

    fn plural(&self) -> &str {
        "dishes"
    }

    /// - GET/POST /dishes
    /// - GET/PUT /dishes/{dishId}, behind the existence check
    fn build_routes(&self) -> Router {
        let state = DishAppState {
            store: self.store.clone(),
        };

        let collection_path = format!("/{}", self.plural());
        let member_path = format!("{}/{{dishId}}", collection_path);

        let collection = Router::new().route(
            &collection_path,
            get(list_dishes)
                .post(create_dish)
                .fallback(method_not_allowed),
        );

        let member = Router::new()
            .route(
                &member_path,
                get(read_dish)
                    .put(update_dish)
                    .fallback(method_not_allowed),
            )
            .route_layer(middleware::from_fn_with_state(
                self.store.clone(),
                require_existing::<DishStore, Dish>,
            ));

        collection.merge(member).with_state(state)
    }
}

//! Aggregated store for all entities
//!
//! Both stores draw ids from one shared generator, so a dish and an order
//! never share an id.

use crate::config::SeedConfig;
use crate::core::id::IdGenerator;
use crate::entities::{DishStore, OrderStore};
use anyhow::Result;
use std::sync::Arc;

/// Aggregated store containing all entity stores
#[derive(Clone)]
pub struct EntityStore {
    pub dishes: DishStore,
    pub orders: OrderStore,
    ids: Arc<IdGenerator>,
}

impl EntityStore {
    pub fn new() -> Self {
        let ids = Arc::new(IdGenerator::new());
        Self {
            dishes: DishStore::new(ids.clone()),
            orders: OrderStore::new(ids.clone()),
            ids,
        }
    }

    /// Build a store preloaded with the seed records
    ///
    /// Seed ids are reserved in the shared generator; a duplicate id across
    /// either collection is rejected.
    pub fn seeded(seed: &SeedConfig) -> Result<Self> {
        let store = Self::new();

        for dish in &seed.dishes {
            store.dishes.add(dish.clone())?;
        }
        for order in &seed.orders {
            store.orders.add(order.clone())?;
        }

        tracing::info!(
            dishes = seed.dishes.len(),
            orders = seed.orders.len(),
            "Seed data loaded"
        );

        Ok(store)
    }

    /// The generator shared by both stores
    pub fn ids(&self) -> &Arc<IdGenerator> {
        &self.ids
    }
}

impl Default for EntityStore {
    fn default() -> Self {
        Self::new()
    }
}

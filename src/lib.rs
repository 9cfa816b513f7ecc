//! # GrubDash
//!
//! Backend for a restaurant ordering workflow: a menu of dishes and the
//! orders placed against it, exposed as a JSON REST API over in-memory
//! stores.
//!
//! ## Features
//!
//! - **Dishes**: list, create, read, update (no delete)
//! - **Orders**: list, create, read, update, delete (pending orders only)
//! - **Validation**: first-failure rules for dishes, accumulated rules for orders
//! - **Existence checks**: routes addressing one record 404 before the handler runs
//! - **Shared ids**: one generator for both stores
//! - **Seed data**: initial records loaded from YAML configuration
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use grubdash::prelude::*;
//!
//! let config = AppConfig::from_yaml_file("config/grubdash.yaml")?;
//! let store = EntityStore::seeded(&config.seed)?;
//!
//! ServerBuilder::new()
//!     .register(DishDescriptor::new(store.dishes.clone()))
//!     .register(OrderDescriptor::new(store.orders.clone()))
//!     .serve(&config.server.addr())
//!     .await?;
//! ```

pub mod config;
pub mod core;
pub mod entities;
pub mod server;
pub mod store;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        ApiError, DataEnvelope, Entity, Found, IdGenerator, Payload, RecordLookup,
    };

    // === Entities ===
    pub use crate::entities::dish::{Dish, DishDescriptor, DishInput, DishStore};
    pub use crate::entities::order::{
        Operation, Order, OrderDescriptor, OrderInput, OrderItem, OrderStatus, OrderStore,
    };

    // === Storage ===
    pub use crate::store::EntityStore;

    // === Config ===
    pub use crate::config::{AppConfig, SeedConfig, ServerConfig};

    // === Server ===
    pub use crate::server::{EntityDescriptor, EntityRegistry, ServerBuilder};

    // === External dependencies ===
    pub use anyhow::Result;
    pub use serde::{Deserialize, Serialize};

    // === Axum ===
    pub use axum::Router;
}

//! Server module for building the HTTP server
//!
//! This module provides a `ServerBuilder` that registers:
//! - CRUD routes for every entity descriptor
//! - Health check routes
//! - JSON fallbacks for unknown paths and unsupported methods

pub mod builder;
pub mod entity_registry;
pub mod fallback;

pub use builder::ServerBuilder;
pub use entity_registry::{EntityDescriptor, EntityRegistry};

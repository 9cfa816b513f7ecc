//! Order entity module

pub mod descriptor;
pub mod handlers;
pub mod model;
pub mod store;
pub mod validation;

pub use descriptor::OrderDescriptor;
pub use handlers::*;
pub use model::{Order, OrderFields, OrderInput, OrderItem, OrderStatus};
pub use store::OrderStore;
pub use validation::{Operation, validate_order};

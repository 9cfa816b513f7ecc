//! Entities module - contains the dish and order resources

pub mod dish;
pub mod order;

pub use dish::{Dish, DishDescriptor, DishStore};
pub use order::{Order, OrderDescriptor, OrderStatus, OrderStore};

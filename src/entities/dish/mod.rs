//! Dish entity module

pub mod descriptor;
pub mod handlers;
pub mod model;
pub mod store;
pub mod validation;

pub use descriptor::DishDescriptor;
pub use handlers::*;
pub use model::{Dish, DishFields, DishInput};
pub use store::DishStore;
pub use validation::validate_dish;

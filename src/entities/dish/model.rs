//! Dish entity model and its request payload

use crate::core::entity::Entity;
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

/// A dish on the menu
///
/// `price` keeps the JSON number it was created with, so `12` is echoed
/// back as `12` and `9.5` as `9.5`. `description` is only presence-checked
/// and is stored as whatever JSON value the client sent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dish {
    pub id: String,
    pub name: String,
    pub description: Value,
    pub price: Number,
    pub image_url: String,
}

impl Entity for Dish {
    fn type_label() -> &'static str {
        "Dish"
    }

    fn id(&self) -> &str {
        &self.id
    }
}

/// Content of `data` in create and update requests
///
/// Everything is optional so validation can name what is missing. `id`,
/// `price` and `description` accept any JSON value so a non-numeric price
/// or id is reported as such and a non-string description is accepted.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DishInput {
    pub id: Option<Value>,
    pub name: Option<String>,
    pub description: Option<Value>,
    pub price: Option<Value>,
    pub image_url: Option<String>,
}

/// The mutable fields of a dish, after validation
#[derive(Debug, Clone, PartialEq)]
pub struct DishFields {
    pub name: String,
    pub description: Value,
    pub price: Number,
    pub image_url: String,
}

impl DishFields {
    /// Attach an id to produce a full record
    pub fn into_dish(self, id: String) -> Dish {
        Dish {
            id,
            name: self.name,
            description: self.description,
            price: self.price,
            image_url: self.image_url,
        }
    }

    /// Overwrite every mutable field of `dish`, leaving its id alone
    pub fn apply_to(self, dish: &mut Dish) {
        dish.name = self.name;
        dish.description = self.description;
        dish.price = self.price;
        dish.image_url = self.image_url;
    }
}

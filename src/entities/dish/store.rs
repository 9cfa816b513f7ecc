//! Dish store implementation

use super::model::{Dish, DishInput};
use super::validation::validate_dish;
use crate::core::error::ApiError;
use crate::core::exists::RecordLookup;
use crate::core::id::{IdGenerator, conflicting_id};
use std::sync::{Arc, RwLock};

/// In-memory store for Dish entities
///
/// Dishes are kept in insertion order and looked up by linear scan. There
/// is no delete: once on the menu, a dish stays.
#[derive(Clone)]
pub struct DishStore {
    data: Arc<RwLock<Vec<Dish>>>,
    ids: Arc<IdGenerator>,
}

impl DishStore {
    pub fn new(ids: Arc<IdGenerator>) -> Self {
        Self {
            data: Arc::new(RwLock::new(Vec::new())),
            ids,
        }
    }

    /// Insert an already-identified dish (seed data)
    pub fn add(&self, dish: Dish) -> Result<(), ApiError> {
        if !self.ids.reserve(&dish.id)? {
            return Err(ApiError::Internal(format!("Duplicate dish id: {}", dish.id)));
        }
        self.data.write().map_err(ApiError::lock)?.push(dish);
        Ok(())
    }

    pub fn list(&self) -> Result<Vec<Dish>, ApiError> {
        Ok(self.data.read().map_err(ApiError::lock)?.clone())
    }

    /// Validate, assign an id, append
    pub fn create(&self, input: &DishInput) -> Result<Dish, ApiError> {
        let fields = validate_dish(input)?;
        let dish = fields.into_dish(self.ids.next_id()?);

        self.data.write().map_err(ApiError::lock)?.push(dish.clone());
        tracing::debug!(dish_id = %dish.id, name = %dish.name, "Dish created");

        Ok(dish)
    }

    pub fn get(&self, id: &str) -> Result<Dish, ApiError> {
        self.find(id)?.ok_or_else(|| ApiError::not_found::<Dish>(id))
    }

    /// Replace every mutable field of the dish at `route_id`
    ///
    /// A non-empty payload id that differs from the route id is rejected
    /// before the fields are validated.
    pub fn update(&self, route_id: &str, input: &DishInput) -> Result<Dish, ApiError> {
        if let Some(payload_id) = conflicting_id(input.id.as_ref(), route_id) {
            return Err(ApiError::IdMismatch(format!(
                "Dish id does not match route id. Dish: {}, Route: {}.",
                payload_id, route_id
            )));
        }

        let fields = validate_dish(input)?;

        let mut dishes = self.data.write().map_err(ApiError::lock)?;
        let dish = dishes
            .iter_mut()
            .find(|dish| dish.id == route_id)
            .ok_or_else(|| ApiError::not_found::<Dish>(route_id))?;

        fields.apply_to(dish);
        tracing::debug!(dish_id = %dish.id, "Dish updated");

        Ok(dish.clone())
    }

    pub fn len(&self) -> usize {
        self.data.read().map(|dishes| dishes.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl RecordLookup<Dish> for DishStore {
    fn find(&self, id: &str) -> Result<Option<Dish>, ApiError> {
        let dishes = self.data.read().map_err(ApiError::lock)?;
        Ok(dishes.iter().find(|dish| dish.id == id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    fn store() -> DishStore {
        DishStore::new(Arc::new(IdGenerator::new()))
    }

    fn input(value: Value) -> DishInput {
        serde_json::from_value(value).unwrap()
    }

    fn pasta() -> DishInput {
        input(json!({
            "name": "Pasta",
            "description": "Tasty",
            "price": 12,
            "image_url": "http://x"
        }))
    }

    #[test]
    fn test_create_dish() {
        let store = store();
        let dish = store.create(&pasta()).unwrap();

        assert_eq!(dish.name, "Pasta");
        assert_eq!(dish.description, "Tasty");
        assert_eq!(dish.price.as_u64(), Some(12));
        assert_eq!(dish.image_url, "http://x");
        assert!(!dish.id.is_empty());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_create_then_get_round_trips() {
        let store = store();
        let created = store.create(&pasta()).unwrap();
        assert_eq!(store.get(&created.id).unwrap(), created);
        assert_eq!(store.get(&created.id).unwrap(), store.get(&created.id).unwrap());
    }

    #[test]
    fn test_invalid_create_leaves_store_unchanged() {
        let store = store();
        let err = store
            .create(&input(json!({ "name": "", "description": "x", "price": 5, "image_url": "y" })))
            .unwrap_err();

        assert_eq!(err, ApiError::Validation("name is required.".to_string()));
        assert!(store.is_empty());
    }

    #[test]
    fn test_list_preserves_insertion_order() {
        let store = store();
        let first = store.create(&pasta()).unwrap();
        let second = store.create(&pasta()).unwrap();

        let ids: Vec<String> = store.list().unwrap().into_iter().map(|d| d.id).collect();
        assert_eq!(ids, vec![first.id, second.id]);
    }

    #[test]
    fn test_get_missing_dish() {
        let err = store().get("nope").unwrap_err();
        assert_eq!(err.to_string(), "Dish not found: nope");
    }

    #[test]
    fn test_update_replaces_fields_and_keeps_id() {
        let store = store();
        let dish = store.create(&pasta()).unwrap();

        let updated = store
            .update(
                &dish.id,
                &input(json!({
                    "name": "Pizza",
                    "description": "Cheesy",
                    "price": 15,
                    "image_url": "http://y"
                })),
            )
            .unwrap();

        assert_eq!(updated.id, dish.id);
        assert_eq!(updated.name, "Pizza");
        assert_eq!(store.get(&dish.id).unwrap(), updated);
    }

    #[test]
    fn test_update_id_mismatch_checked_before_validation() {
        let store = store();
        let dish = store.create(&pasta()).unwrap();

        let err = store.update(&dish.id, &input(json!({ "id": "other" }))).unwrap_err();

        assert_eq!(
            err.to_string(),
            format!("Dish id does not match route id. Dish: other, Route: {}.", dish.id)
        );
        assert_eq!(store.get(&dish.id).unwrap(), dish);
    }

    #[test]
    fn test_update_with_matching_or_empty_id() {
        let store = store();
        let dish = store.create(&pasta()).unwrap();

        for id in [json!(dish.id), json!(""), Value::Null] {
            let updated = store
                .update(
                    &dish.id,
                    &input(json!({
                        "id": id,
                        "name": "Soup",
                        "description": "Hot",
                        "price": 4,
                        "image_url": "http://z"
                    })),
                )
                .unwrap();
            assert_eq!(updated.name, "Soup");
        }
    }

    #[test]
    fn test_seed_rejects_duplicate_ids() {
        let store = store();
        let seeded = validate_dish(&pasta()).unwrap().into_dish("d1".to_string());

        store.add(seeded.clone()).unwrap();
        assert!(store.add(seeded).is_err());
        assert_eq!(store.len(), 1);
    }
}

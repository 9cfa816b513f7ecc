//! Entity trait defining the common shape of every stored record

/// Base trait for all records kept in a store.
///
/// All entities have:
/// - id: Unique identifier, assigned at creation and never changed
/// - a type label used in client messages (e.g., "Dish")
pub trait Entity: Clone + Send + Sync + 'static {
    /// Capitalized name used in messages ("Dish not found: 3")
    fn type_label() -> &'static str;

    /// Get the unique identifier for this entity instance
    fn id(&self) -> &str;
}

use crate::error::PersistenceError;
use crate::models::FoodItem;
use crate::storage::FoodStore;

/// Domain operations layered on a [`FoodStore`].
///
/// Propagates `PersistenceError` from the store unchanged; validation and
/// duplicate checks are the caller's responsibility.
pub struct FoodRepository<S: FoodStore> {
    store: S,
}

impl<S: FoodStore> FoodRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// All entries, most recent first.
    ///
    /// Equal timestamps tie-break in reverse insertion order, so the result
    /// always matches a list maintained by inserting new entries at the head.
    pub fn get_all(&self) -> Result<Vec<FoodItem>, PersistenceError> {
        let mut items = self.store.fetch_all()?;
        items.reverse();
        items.sort_by(|a, b| b.date_added.cmp(&a.date_added));
        Ok(items)
    }

    /// Create and persist a new entry; returns the persisted instance.
    pub fn add(&mut self, name: &str, calories: i64) -> Result<FoodItem, PersistenceError> {
        let item = FoodItem::new(name, calories);
        self.store.save(&item)?;
        Ok(item)
    }

    pub fn delete(&mut self, item: &FoodItem) -> Result<(), PersistenceError> {
        self.store.delete(item.id)
    }

    /// Commit field changes the caller has already applied to `item`.
    pub fn update(&mut self, item: &FoodItem) -> Result<(), PersistenceError> {
        self.store.update(item)
    }
}

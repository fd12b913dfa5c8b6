use std::fs;
use std::path::{Path, PathBuf};

use uuid::Uuid;

use crate::error::PersistenceError;
use crate::models::FoodItem;

/// Generic storage access for food entries.
///
/// Every successful mutating call has durably committed before returning.
/// `fetch_all` returns records in storage-native order; ordering guarantees
/// are the repository's responsibility, not the store's.
pub trait FoodStore {
    fn save(&mut self, item: &FoodItem) -> Result<(), PersistenceError>;
    fn delete(&mut self, id: Uuid) -> Result<(), PersistenceError>;
    fn fetch_all(&self) -> Result<Vec<FoodItem>, PersistenceError>;
    fn update(&mut self, item: &FoodItem) -> Result<(), PersistenceError>;
}

/// File-backed store: a pretty-printed JSON array, rewritten on every
/// mutation. Constructed with an explicit path; there is no ambient default.
pub struct JsonFileStore {
    path: PathBuf,
    items: Vec<FoodItem>,
}

impl JsonFileStore {
    /// Open a store at `path`. A missing file is an empty log.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path = path.as_ref().to_path_buf();
        let items = if path.exists() {
            let content = fs::read_to_string(&path)?;
            serde_json::from_str(&content)?
        } else {
            Vec::new()
        };
        Ok(Self { path, items })
    }

    fn commit(&self) -> Result<(), PersistenceError> {
        let json = serde_json::to_string_pretty(&self.items)?;
        fs::write(&self.path, json)?;
        Ok(())
    }

    fn position(&self, id: Uuid) -> Result<usize, PersistenceError> {
        self.items
            .iter()
            .position(|i| i.id == id)
            .ok_or(PersistenceError::NotFound(id))
    }
}

impl FoodStore for JsonFileStore {
    fn save(&mut self, item: &FoodItem) -> Result<(), PersistenceError> {
        self.items.push(item.clone());
        if let Err(e) = self.commit() {
            self.items.pop();
            return Err(e);
        }
        Ok(())
    }

    fn delete(&mut self, id: Uuid) -> Result<(), PersistenceError> {
        let pos = self.position(id)?;
        let removed = self.items.remove(pos);
        if let Err(e) = self.commit() {
            self.items.insert(pos, removed);
            return Err(e);
        }
        Ok(())
    }

    fn fetch_all(&self) -> Result<Vec<FoodItem>, PersistenceError> {
        Ok(self.items.clone())
    }

    fn update(&mut self, item: &FoodItem) -> Result<(), PersistenceError> {
        let pos = self.position(item.id)?;
        let previous = std::mem::replace(&mut self.items[pos], item.clone());
        if let Err(e) = self.commit() {
            self.items[pos] = previous;
            return Err(e);
        }
        Ok(())
    }
}

/// In-memory store, interchangeable with `JsonFileStore` behind the trait.
/// Used in tests and anywhere durability is not wanted.
#[derive(Default)]
pub struct MemoryStore {
    items: Vec<FoodItem>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FoodStore for MemoryStore {
    fn save(&mut self, item: &FoodItem) -> Result<(), PersistenceError> {
        self.items.push(item.clone());
        Ok(())
    }

    fn delete(&mut self, id: Uuid) -> Result<(), PersistenceError> {
        let pos = self
            .items
            .iter()
            .position(|i| i.id == id)
            .ok_or(PersistenceError::NotFound(id))?;
        self.items.remove(pos);
        Ok(())
    }

    fn fetch_all(&self) -> Result<Vec<FoodItem>, PersistenceError> {
        Ok(self.items.clone())
    }

    fn update(&mut self, item: &FoodItem) -> Result<(), PersistenceError> {
        let pos = self
            .items
            .iter()
            .position(|i| i.id == item.id)
            .ok_or(PersistenceError::NotFound(item.id))?;
        self.items[pos] = item.clone();
        Ok(())
    }
}

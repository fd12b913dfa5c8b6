use std::io;

use tempfile::tempdir;
use uuid::Uuid;

use calorie_tracker_rs::error::PersistenceError;
use calorie_tracker_rs::models::FoodItem;
use calorie_tracker_rs::state::{AlertKind, TrackerState};
use calorie_tracker_rs::storage::{FoodRepository, FoodStore, JsonFileStore, MemoryStore};

/// Store whose mutations all fail, for exercising the no-partial-application
/// guarantee. Reads delegate to a pre-populated in-memory store.
struct BrokenStore {
    inner: MemoryStore,
}

impl BrokenStore {
    fn with_items(items: &[FoodItem]) -> Self {
        let mut inner = MemoryStore::new();
        for item in items {
            inner.save(item).unwrap();
        }
        Self { inner }
    }

    fn disk_full() -> PersistenceError {
        PersistenceError::Io(io::Error::other("disk full"))
    }
}

impl FoodStore for BrokenStore {
    fn save(&mut self, _item: &FoodItem) -> Result<(), PersistenceError> {
        Err(Self::disk_full())
    }

    fn delete(&mut self, _id: Uuid) -> Result<(), PersistenceError> {
        Err(Self::disk_full())
    }

    fn fetch_all(&self) -> Result<Vec<FoodItem>, PersistenceError> {
        self.inner.fetch_all()
    }

    fn update(&mut self, _item: &FoodItem) -> Result<(), PersistenceError> {
        Err(Self::disk_full())
    }
}

#[test]
fn test_full_session_against_disk() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("log.json");

    {
        let store = JsonFileStore::open(&path).unwrap();
        let mut state = TrackerState::new(FoodRepository::new(store));

        state.set_input_text("Bread 200");
        state.submit_add();
        state.set_input_text("Green Apple 5");
        state.submit_add();
        assert_eq!(state.total_calories(), 205);

        let apple_id = state.items()[0].id;
        state.begin_edit(apple_id);
        state.edit_session_mut().unwrap().calories = "7".to_string();
        state.save_edit();
        assert_eq!(state.total_calories(), 207);
    }

    // A fresh session sees everything the previous one committed
    let store = JsonFileStore::open(&path).unwrap();
    let mut state = TrackerState::new(FoodRepository::new(store));
    let names: Vec<_> = state.items().iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, ["Green Apple", "Bread"]);
    assert_eq!(state.total_calories(), 207);

    let bread_id = state.items()[1].id;
    state.select_for_delete(bread_id);
    state.confirm_delete();
    assert_eq!(state.total_calories(), 7);

    let reopened = JsonFileStore::open(&path).unwrap();
    assert_eq!(reopened.fetch_all().unwrap().len(), 1);
}

#[test]
fn test_duplicate_warning_still_persists_both_entries() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("log.json");

    let store = JsonFileStore::open(&path).unwrap();
    let mut state = TrackerState::new(FoodRepository::new(store));

    state.set_input_text("Orange 12");
    state.submit_add();
    state.set_input_text("orange 3");
    state.submit_add();

    assert_eq!(state.alert().unwrap().kind, AlertKind::Warning);
    assert_eq!(state.items().len(), 2);

    let reopened = JsonFileStore::open(&path).unwrap();
    assert_eq!(reopened.fetch_all().unwrap().len(), 2);
}

#[test]
fn test_failed_add_leaves_state_unchanged() {
    let store = BrokenStore::with_items(&[FoodItem::new("Bread", 200)]);
    let mut state = TrackerState::new(FoodRepository::new(store));

    state.set_input_text("Orange 12");
    state.submit_add();

    assert_eq!(state.alert().unwrap().kind, AlertKind::Error);
    assert_eq!(state.items().len(), 1);
    assert_eq!(state.total_calories(), 200);
    assert_eq!(state.input_text(), "Orange 12");
}

#[test]
fn test_failed_delete_keeps_item_in_list() {
    let item = FoodItem::new("Bread", 200);
    let store = BrokenStore::with_items(&[item.clone()]);
    let mut state = TrackerState::new(FoodRepository::new(store));

    state.select_for_delete(item.id);
    state.confirm_delete();

    assert_eq!(state.alert().unwrap().kind, AlertKind::Error);
    assert_eq!(state.items().len(), 1);
}

#[test]
fn test_failed_edit_save_rolls_back_and_keeps_session() {
    let item = FoodItem::new("Bread", 200);
    let store = BrokenStore::with_items(&[item.clone()]);
    let mut state = TrackerState::new(FoodRepository::new(store));

    state.begin_edit(item.id);
    {
        let session = state.edit_session_mut().unwrap();
        session.name = "Toast".to_string();
        session.calories = "150".to_string();
    }
    state.save_edit();

    assert_eq!(state.alert().unwrap().kind, AlertKind::Error);
    // Session stays open for retry or cancel; the entry is rolled back
    assert!(state.edit_session().is_some());
    assert_eq!(state.items()[0].name, "Bread");
    assert_eq!(state.items()[0].calories, 200);
}

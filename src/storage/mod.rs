mod gateway;
mod repository;

pub use gateway::{FoodStore, JsonFileStore, MemoryStore};
pub use repository::FoodRepository;

pub mod cli;
pub mod error;
pub mod export;
pub mod interface;
pub mod models;
pub mod state;
pub mod storage;

pub use error::{PersistenceError, Result, TrackError, ValidationError};
pub use models::FoodItem;

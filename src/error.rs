use thiserror::Error;
use uuid::Uuid;

/// User-input problems, detected before any persistence call.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Enter the product name and calorie count separated by a space. For example: 'Orange 12'")]
    MissingCalories,

    #[error("Calories must be a number. For example: 'Orange 12'")]
    CaloriesNotNumeric,

    #[error("Enter the product name. For example: 'Orange 12'")]
    MissingName,
}

/// Storage-layer failures.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Item not found: {0}")]
    NotFound(Uuid),
}

#[derive(Debug, Error)]
pub enum TrackError {
    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationError),

    #[error("Persistence error: {0}")]
    Persistence(#[from] PersistenceError),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, TrackError>;

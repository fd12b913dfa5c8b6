use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single logged food entry.
///
/// `id` and `date_added` are assigned once at construction and never change;
/// `name` and `calories` are mutated only through the repository's update path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodItem {
    #[serde(rename = "Id")]
    pub id: Uuid,

    #[serde(rename = "Name")]
    pub name: String,

    #[serde(rename = "Calories")]
    pub calories: i64,

    #[serde(rename = "DateAdded")]
    pub date_added: DateTime<Utc>,
}

impl FoodItem {
    /// Construct a fresh entry with a new id and the current timestamp.
    pub fn new(name: impl Into<String>, calories: i64) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            calories,
            date_added: Utc::now(),
        }
    }

    /// Canonical key for duplicate detection (lowercase name).
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }

    /// Time-of-day in the local timezone, for display.
    pub fn format_time(&self) -> String {
        self.date_added
            .with_timezone(&Local)
            .format("%H:%M")
            .to_string()
    }
}

impl PartialEq for FoodItem {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for FoodItem {}

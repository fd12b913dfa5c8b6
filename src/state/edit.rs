use uuid::Uuid;

use crate::models::FoodItem;

/// Transient draft of one entry's editable fields.
///
/// Holds the drafts as entered text plus a frozen snapshot of the original
/// values for change detection. Discarded on cancel, committed on save.
#[derive(Debug, Clone)]
pub struct EditSession {
    item_id: Uuid,
    pub name: String,
    pub calories: String,
    original_name: String,
    original_calories: i64,
}

impl EditSession {
    pub fn new(item: &FoodItem) -> Self {
        Self {
            item_id: item.id,
            name: item.name.clone(),
            calories: item.calories.to_string(),
            original_name: item.name.clone(),
            original_calories: item.calories,
        }
    }

    pub fn item_id(&self) -> Uuid {
        self.item_id
    }

    /// Draft calories as an integer, if they parse.
    pub fn parsed_calories(&self) -> Option<i64> {
        self.calories.trim().parse().ok()
    }

    pub fn is_valid(&self) -> bool {
        !self.name.is_empty() && self.parsed_calories().is_some()
    }

    /// True when either field differs from the saved baseline.
    pub fn has_changes(&self) -> bool {
        self.name != self.original_name || self.parsed_calories() != Some(self.original_calories)
    }

    /// Reset the baseline to the current drafts, as after a successful save.
    pub fn rebase(&mut self) {
        self.original_name = self.name.clone();
        if let Some(calories) = self.parsed_calories() {
            self.original_calories = calories;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_session_has_no_changes() {
        let item = FoodItem::new("Orange", 12);
        let session = EditSession::new(&item);
        assert!(session.is_valid());
        assert!(!session.has_changes());
    }

    #[test]
    fn test_changes_detected_per_field() {
        let item = FoodItem::new("Orange", 12);

        let mut session = EditSession::new(&item);
        session.name = "Tangerine".to_string();
        assert!(session.has_changes());

        let mut session = EditSession::new(&item);
        session.calories = "40".to_string();
        assert!(session.has_changes());
    }

    #[test]
    fn test_invalid_when_name_empty_or_calories_not_numeric() {
        let item = FoodItem::new("Orange", 12);

        let mut session = EditSession::new(&item);
        session.name.clear();
        assert!(!session.is_valid());

        let mut session = EditSession::new(&item);
        session.calories = "abc".to_string();
        assert!(!session.is_valid());
    }

    #[test]
    fn test_rebase_clears_changes_until_next_edit() {
        let item = FoodItem::new("Orange", 12);
        let mut session = EditSession::new(&item);

        session.name = "X".to_string();
        session.calories = "9".to_string();
        session.rebase();
        assert!(!session.has_changes());

        session.calories = "10".to_string();
        assert!(session.has_changes());
    }
}

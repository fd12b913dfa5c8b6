use uuid::Uuid;

use crate::error::ValidationError;
use crate::models::FoodItem;
use crate::state::EditSession;
use crate::storage::{FoodRepository, FoodStore};

/// User-visible message surfaced by the state layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub kind: AlertKind,
    pub message: String,
}

/// Warnings do not abort the action that raised them; errors do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Warning,
    Error,
}

/// Parse free-text input into a `(name, calories)` pair.
///
/// Returns `Ok(None)` for empty/whitespace-only input, which is a no-op
/// rather than an error. The last space-separated token is the calorie
/// count; everything before it is the name.
pub fn parse_entry(text: &str) -> Result<Option<(String, i64)>, ValidationError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let tokens: Vec<&str> = trimmed.split(' ').collect();
    if tokens.len() < 2 {
        return Err(ValidationError::MissingCalories);
    }

    let calories: i64 = tokens
        .last()
        .and_then(|t| t.parse().ok())
        .ok_or(ValidationError::CaloriesNotNumeric)?;

    let name = tokens[..tokens.len() - 1].join(" ").trim().to_string();
    if name.is_empty() {
        return Err(ValidationError::MissingName);
    }

    Ok(Some((name, calories)))
}

/// Authoritative in-memory view of the food log plus orchestration of all
/// user-triggered actions.
///
/// All mutation paths go through `&mut self`, so actions are inherently
/// serialized; persistence failures leave the in-memory list exactly as it
/// was before the failed call.
pub struct TrackerState<S: FoodStore> {
    repository: FoodRepository<S>,
    items: Vec<FoodItem>,
    input_text: String,
    alert: Option<Alert>,
    pending_delete: Option<Uuid>,
    edit: Option<EditSession>,
}

impl<S: FoodStore> TrackerState<S> {
    /// Create a state layer over `repository` and load the current log.
    pub fn new(repository: FoodRepository<S>) -> Self {
        let mut state = Self {
            repository,
            items: Vec::new(),
            input_text: String::new(),
            alert: None,
            pending_delete: None,
            edit: None,
        };
        state.load();
        state
    }

    /// Refresh the in-memory list from storage.
    pub fn load(&mut self) {
        match self.repository.get_all() {
            Ok(items) => self.items = items,
            Err(e) => self.set_error(format!("Error loading data: {}", e)),
        }
    }

    /// Current entries, most recent first.
    pub fn items(&self) -> &[FoodItem] {
        &self.items
    }

    /// Sum of calories over the full list, recomputed on every call.
    pub fn total_calories(&self) -> i64 {
        self.items.iter().map(|i| i.calories).sum()
    }

    pub fn input_text(&self) -> &str {
        &self.input_text
    }

    pub fn set_input_text(&mut self, text: impl Into<String>) {
        self.input_text = text.into();
    }

    pub fn alert(&self) -> Option<&Alert> {
        self.alert.as_ref()
    }

    pub fn take_alert(&mut self) -> Option<Alert> {
        self.alert.take()
    }

    fn set_error(&mut self, message: String) {
        self.alert = Some(Alert {
            kind: AlertKind::Error,
            message,
        });
    }

    fn set_warning(&mut self, message: String) {
        self.alert = Some(Alert {
            kind: AlertKind::Warning,
            message,
        });
    }

    /// Parse the pending input text and add the entry it describes.
    ///
    /// Empty input is a no-op. A name already in the list (case-insensitive)
    /// raises a duplicate warning but the entry is still added. On success
    /// the new entry goes to the head of the list and the input clears; on
    /// persistence failure nothing in memory changes.
    pub fn submit_add(&mut self) {
        let (name, calories) = match parse_entry(&self.input_text) {
            Ok(Some(parsed)) => parsed,
            Ok(None) => return,
            Err(e) => {
                self.set_error(e.to_string());
                return;
            }
        };

        let duplicate = self.items.iter().any(|i| i.key() == name.to_lowercase());
        if duplicate {
            self.set_warning(format!(
                "The product \"{}\" is already in the list. Do you want to add it again?",
                name
            ));
        }

        match self.repository.add(&name, calories) {
            Ok(item) => {
                self.items.insert(0, item);
                self.input_text.clear();
            }
            Err(e) => self.set_error(format!("Error adding product: {}", e)),
        }
    }

    /// Stage an entry for deletion, pending confirmation.
    pub fn select_for_delete(&mut self, id: Uuid) {
        self.pending_delete = Some(id);
    }

    pub fn pending_delete(&self) -> Option<Uuid> {
        self.pending_delete
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Delete the staged entry. The in-memory list is only touched after the
    /// store confirms the removal; there is no optimistic removal.
    pub fn confirm_delete(&mut self) {
        let Some(id) = self.pending_delete.take() else {
            return;
        };
        let Some(item) = self.items.iter().find(|i| i.id == id).cloned() else {
            return;
        };

        match self.repository.delete(&item) {
            Ok(()) => self.items.retain(|i| i.id != id),
            Err(e) => self.set_error(format!("Error deleting product: {}", e)),
        }
    }

    /// Open an edit session for the entry with `id`.
    pub fn begin_edit(&mut self, id: Uuid) {
        if let Some(item) = self.items.iter().find(|i| i.id == id) {
            self.edit = Some(EditSession::new(item));
        }
    }

    pub fn edit_session(&self) -> Option<&EditSession> {
        self.edit.as_ref()
    }

    pub fn edit_session_mut(&mut self) -> Option<&mut EditSession> {
        self.edit.as_mut()
    }

    pub fn cancel_edit(&mut self) {
        self.edit = None;
    }

    /// Commit the open edit session.
    ///
    /// Re-validates the drafts, applies them onto the in-memory entry, and
    /// asks the repository to commit. Success ends the session; failure rolls
    /// the entry back and keeps the session open for retry or cancel.
    pub fn save_edit(&mut self) {
        let Some(session) = self.edit.clone() else {
            return;
        };

        let Some(calories) = session.parsed_calories() else {
            self.set_error("Please check the entered data.".to_string());
            return;
        };
        if !session.is_valid() {
            self.set_error("Please check the entered data.".to_string());
            return;
        }

        let Some(pos) = self.items.iter().position(|i| i.id == session.item_id()) else {
            return;
        };

        let previous_name = std::mem::replace(&mut self.items[pos].name, session.name.clone());
        let previous_calories = std::mem::replace(&mut self.items[pos].calories, calories);

        match self.repository.update(&self.items[pos]) {
            Ok(()) => self.edit = None,
            Err(e) => {
                self.items[pos].name = previous_name;
                self.items[pos].calories = previous_calories;
                self.set_error(format!("Error while saving: {}", e));
            }
        }
    }
}

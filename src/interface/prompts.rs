use dialoguer::{Confirm, Input, Select};
use strsim::jaro_winkler;

use crate::error::Result;
use crate::models::FoodItem;
use crate::state::EditSession;

/// Resolve a food entry from a user-supplied name.
///
/// Tries an exact case-insensitive match first, then fuzzy matching; a single
/// fuzzy candidate is confirmed, multiple candidates go through a select
/// prompt. Returns `None` when nothing matched or the user declined.
pub fn resolve_item<'a>(items: &'a [FoodItem], query: &str) -> Result<Option<&'a FoodItem>> {
    let query = query.trim();
    if query.is_empty() {
        return select_item(items);
    }

    if let Some(item) = items
        .iter()
        .find(|i| i.name.to_lowercase() == query.to_lowercase())
    {
        return Ok(Some(item));
    }

    let mut candidates: Vec<(&FoodItem, f64)> = items
        .iter()
        .map(|i| (i, jaro_winkler(&i.name.to_lowercase(), &query.to_lowercase())))
        .filter(|(_, score)| *score > 0.7)
        .collect();

    candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    if candidates.is_empty() {
        println!("No entry found for '{}'", query);
        return Ok(None);
    }

    if candidates.len() == 1 {
        let item = candidates[0].0;
        let confirm = Confirm::new()
            .with_prompt(format!("Did you mean '{}'?", item.name))
            .default(true)
            .interact()?;
        return Ok(if confirm { Some(item) } else { None });
    }

    let options: Vec<String> = candidates
        .iter()
        .take(5)
        .map(|(i, _)| format!("{} ({} cal, {})", i.name, i.calories, i.format_time()))
        .collect();

    let mut selection_options = options.clone();
    selection_options.push("None of these".to_string());

    let selection = Select::new()
        .with_prompt("Which did you mean?")
        .items(&selection_options)
        .default(0)
        .interact()?;

    if selection < options.len() {
        Ok(Some(candidates[selection].0))
    } else {
        Ok(None)
    }
}

/// Pick an entry from the full list.
fn select_item(items: &[FoodItem]) -> Result<Option<&FoodItem>> {
    if items.is_empty() {
        println!("The food log is empty.");
        return Ok(None);
    }

    let mut options: Vec<String> = items
        .iter()
        .map(|i| format!("{}  {} - {} cal", i.format_time(), i.name, i.calories))
        .collect();
    options.push("Cancel".to_string());

    let selection = Select::new()
        .with_prompt("Select an entry")
        .items(&options)
        .default(0)
        .interact()?;

    if selection < items.len() {
        Ok(Some(&items[selection]))
    } else {
        Ok(None)
    }
}

/// Prompt for the free-text entry line ("name calories").
pub fn prompt_entry_text() -> Result<String> {
    let input: String = Input::new()
        .with_prompt("Food and calories (e.g. 'Orange 12')")
        .allow_empty(true)
        .interact_text()?;
    Ok(input)
}

/// Fill an edit session's drafts, prefilled with the current values.
pub fn prompt_edit_fields(session: &mut EditSession) -> Result<()> {
    session.name = Input::new()
        .with_prompt("Name")
        .default(session.name.clone())
        .interact_text()?;

    session.calories = Input::new()
        .with_prompt("Calories")
        .default(session.calories.clone())
        .interact_text()?;

    Ok(())
}

/// Yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

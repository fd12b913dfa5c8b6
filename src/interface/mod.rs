pub mod prompts;
pub mod render;

pub use prompts::{prompt_edit_fields, prompt_entry_text, prompt_yes_no, resolve_item};
pub use render::{display_alert, display_food_log};

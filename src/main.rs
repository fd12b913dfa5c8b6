use clap::Parser;
use std::path::Path;

use calorie_tracker_rs::cli::{Cli, Command};
use calorie_tracker_rs::error::Result;
use calorie_tracker_rs::export::write_csv;
use calorie_tracker_rs::interface::{
    display_alert, display_food_log, prompt_edit_fields, prompt_entry_text, prompt_yes_no,
    resolve_item,
};
use calorie_tracker_rs::state::TrackerState;
use calorie_tracker_rs::storage::{FoodRepository, JsonFileStore};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Add { text } => cmd_add(&cli.file, &text),
        Command::List => cmd_list(&cli.file),
        Command::Delete { name } => cmd_delete(&cli.file, name.as_deref()),
        Command::Edit { name } => cmd_edit(&cli.file, name.as_deref()),
        Command::Export { path } => cmd_export(&cli.file, &path),
    }
}

fn open_state(file_path: &str) -> Result<TrackerState<JsonFileStore>> {
    let store = JsonFileStore::open(file_path)?;
    let mut state = TrackerState::new(FoodRepository::new(store));

    // A load failure is surfaced once, here
    if let Some(alert) = state.take_alert() {
        display_alert(&alert);
    }

    Ok(state)
}

/// Parse free text into an entry and add it to the log.
fn cmd_add(file_path: &str, text: &[String]) -> Result<()> {
    let mut state = open_state(file_path)?;

    let input = if text.is_empty() {
        prompt_entry_text()?
    } else {
        text.join(" ")
    };

    let count_before = state.items().len();
    state.set_input_text(input);
    state.submit_add();

    if let Some(alert) = state.take_alert() {
        display_alert(&alert);
    }

    if state.items().len() > count_before {
        let item = &state.items()[0];
        println!(
            "Added {} ({} cal). Total today: {} cal.",
            item.name,
            item.calories,
            state.total_calories()
        );
    }

    Ok(())
}

/// Show the food log and the running total.
fn cmd_list(file_path: &str) -> Result<()> {
    let state = open_state(file_path)?;
    display_food_log(state.items(), state.total_calories());
    Ok(())
}

/// Delete an entry after confirmation.
fn cmd_delete(file_path: &str, name: Option<&str>) -> Result<()> {
    let mut state = open_state(file_path)?;

    let Some(target) = resolve_item(state.items(), name.unwrap_or(""))?.cloned() else {
        return Ok(());
    };

    state.select_for_delete(target.id);

    let confirm = prompt_yes_no(
        &format!("Delete '{}' ({} cal)?", target.name, target.calories),
        false,
    )?;
    if !confirm {
        state.cancel_delete();
        println!("Nothing deleted.");
        return Ok(());
    }

    state.confirm_delete();

    if let Some(alert) = state.take_alert() {
        display_alert(&alert);
    } else {
        println!(
            "Deleted {}. Total today: {} cal.",
            target.name,
            state.total_calories()
        );
    }

    Ok(())
}

/// Edit an entry's name or calories.
fn cmd_edit(file_path: &str, name: Option<&str>) -> Result<()> {
    let mut state = open_state(file_path)?;

    let Some(target) = resolve_item(state.items(), name.unwrap_or(""))?.cloned() else {
        return Ok(());
    };

    state.begin_edit(target.id);
    {
        let Some(session) = state.edit_session_mut() else {
            return Ok(());
        };
        prompt_edit_fields(session)?;

        if !session.is_valid() {
            eprintln!("Error: Please check the entered data.");
            state.cancel_edit();
            return Ok(());
        }
        if !session.has_changes() {
            println!("No changes.");
            state.cancel_edit();
            return Ok(());
        }
    }

    state.save_edit();

    if let Some(alert) = state.take_alert() {
        display_alert(&alert);
    } else {
        println!("Saved. Total today: {} cal.", state.total_calories());
    }

    Ok(())
}

/// Export the log to CSV.
fn cmd_export(file_path: &str, out_path: &str) -> Result<()> {
    let state = open_state(file_path)?;

    write_csv(state.items(), Path::new(out_path))?;
    println!("Exported {} entries to {}.", state.items().len(), out_path);

    Ok(())
}

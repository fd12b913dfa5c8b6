use clap::{Parser, Subcommand};

/// CalorieTracker — log what you eat and keep a running daily total.
#[derive(Parser, Debug)]
#[command(name = "calorie_tracker")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the food log JSON file.
    #[arg(short, long, default_value = "food_log.json")]
    pub file: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Add an entry from free text: a name followed by a calorie count.
    Add {
        /// Entry text, e.g. `add Green Apple 5`. Prompts when omitted.
        text: Vec<String>,
    },

    /// Show the food log and the running calorie total.
    List,

    /// Delete an entry, with confirmation.
    Delete {
        /// Entry name; fuzzy-matched. Prompts a selection when omitted.
        name: Option<String>,
    },

    /// Edit an entry's name or calories.
    Edit {
        /// Entry name; fuzzy-matched. Prompts a selection when omitted.
        name: Option<String>,
    },

    /// Export the food log to a CSV file.
    Export {
        /// Output path.
        path: String,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::List
    }
}

use crate::models::FoodItem;
use crate::state::{Alert, AlertKind};

/// Display the food log as a table with a running total.
pub fn display_food_log(items: &[FoodItem], total_calories: i64) {
    if items.is_empty() {
        println!("The food log is empty. Add an entry like: add Orange 12");
        return;
    }

    println!();
    println!("=== Food Log ===");
    println!();

    let max_name_len = items.iter().map(|i| i.name.len()).max().unwrap_or(10);

    for item in items {
        println!(
            "  {}  {:<width$} {:>6} cal",
            item.format_time(),
            item.name,
            item.calories,
            width = max_name_len
        );
    }

    println!();
    println!("Total: {} cal over {} entries", total_calories, items.len());
    println!();
}

/// Print an alert; warnings go to stdout, errors to stderr.
pub fn display_alert(alert: &Alert) {
    match alert.kind {
        AlertKind::Warning => println!("Warning: {}", alert.message),
        AlertKind::Error => eprintln!("Error: {}", alert.message),
    }
}

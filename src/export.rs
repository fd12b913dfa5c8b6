use std::path::Path;

use crate::error::Result;
use crate::models::FoodItem;

/// Write the food log to a CSV file, one row per entry.
pub fn write_csv(items: &[FoodItem], path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record(["id", "name", "calories", "date_added"])?;

    for item in items {
        wtr.write_record([
            item.id.to_string(),
            item.name.clone(),
            item.calories.to_string(),
            item.date_added.to_rfc3339(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_write_csv_has_header_and_one_row_per_item() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("log.csv");

        let items = vec![FoodItem::new("Orange", 12), FoodItem::new("Green Apple", 5)];
        write_csv(&items, &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "id,name,calories,date_added");
        assert!(lines[1].contains("Orange"));
        assert!(lines[2].contains("Green Apple"));
    }
}

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::models::{MenuItem, Recipe, RecipeCostResult};

/// Load recipes from a JSON file.
///
/// Deduplicates by lowercase name (last occurrence wins).
pub fn load_recipes<P: AsRef<Path>>(path: P) -> Result<Vec<Recipe>> {
    let content = fs::read_to_string(path)?;
    let recipes: Vec<Recipe> = serde_json::from_str(&content)?;

    let mut seen: HashMap<String, Recipe> = HashMap::new();
    for recipe in recipes {
        seen.insert(recipe.key(), recipe);
    }

    Ok(seen.into_values().collect())
}

/// Save recipes to a JSON file.
pub fn save_recipes<P: AsRef<Path>>(path: P, recipes: &[Recipe]) -> Result<()> {
    let mut seen: HashMap<String, &Recipe> = HashMap::new();
    for recipe in recipes {
        seen.insert(recipe.key(), recipe);
    }

    let deduped: Vec<&Recipe> = seen.into_values().collect();
    let json = serde_json::to_string_pretty(&deduped)?;
    fs::write(path, json)?;
    Ok(())
}

/// Load menu sales records from a JSON file for the classifier.
pub fn load_menu_items<P: AsRef<Path>>(path: P) -> Result<Vec<MenuItem>> {
    let content = fs::read_to_string(path)?;
    let items: Vec<MenuItem> = serde_json::from_str(&content)?;
    Ok(items)
}

/// Export a cost breakdown as CSV, one row per ingredient plus surcharge and
/// total rows, matching the on-screen escandallo table.
pub fn export_breakdown_csv<P: AsRef<Path>>(path: P, result: &RecipeCostResult) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;

    writer.write_record([
        "ingredient",
        "quantity",
        "unit",
        "unitPrice",
        "apCost",
        "yieldPercentage",
        "epCost",
        "wasteCost",
        "percentageOfTotal",
    ])?;

    for line in &result.breakdown {
        writer.write_record([
            line.name.clone(),
            line.quantity.to_string(),
            line.unit.clone(),
            line.unit_price.to_string(),
            line.ap_cost.round_dp(4).to_string(),
            line.yield_percentage.to_string(),
            line.ep_cost.round_dp(4).to_string(),
            line.waste_cost.round_dp(4).to_string(),
            line.percentage_of_total.round_dp(2).to_string(),
        ])?;
    }

    let summary_row = |label: &str, cost: String| -> [String; 9] {
        [
            label.to_string(),
            String::new(),
            String::new(),
            String::new(),
            String::new(),
            String::new(),
            cost,
            String::new(),
            String::new(),
        ]
    };

    writer.write_record(summary_row(
        "spice factor",
        result.spice_cost.round_dp(4).to_string(),
    ))?;
    writer.write_record(summary_row(
        "q factor",
        result.q_cost.round_dp(4).to_string(),
    ))?;
    writer.write_record(summary_row(
        "total",
        result.total_cost.round_dp(4).to_string(),
    ))?;

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::costing::cost_recipe;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_and_save_roundtrip() {
        let json = r#"[
            {"name": "Tortilla", "portions": 4, "ingredients": [
                {"name": "Potato", "quantity": 500, "unit": "g", "unitPrice": 0.002, "yieldPercentage": 85}
            ]}
        ]"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let recipes = load_recipes(file.path()).unwrap();
        assert_eq!(recipes.len(), 1);
        assert_eq!(recipes[0].name, "Tortilla");

        let out_file = NamedTempFile::new().unwrap();
        save_recipes(out_file.path(), &recipes).unwrap();

        let reloaded = load_recipes(out_file.path()).unwrap();
        assert_eq!(reloaded.len(), 1);
        assert_eq!(reloaded[0].ingredients.len(), 1);
    }

    #[test]
    fn test_deduplication_last_wins() {
        let json = r#"[
            {"name": "Tortilla", "portions": 4, "ingredients": []},
            {"name": "tortilla", "portions": 6, "ingredients": []}
        ]"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let recipes = load_recipes(file.path()).unwrap();
        assert_eq!(recipes.len(), 1);
        assert_eq!(recipes[0].portions, 6);
    }

    #[test]
    fn test_load_menu_items() {
        let json = r#"[
            {"name": "Ribeye", "sellingPrice": 20, "cost": 5, "unitsSold": 100}
        ]"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let items = load_menu_items(file.path()).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].units_sold, 100);
    }

    #[test]
    fn test_csv_export_has_line_and_total_rows() {
        let json = r#"{"name": "Tortilla", "portions": 4, "ingredients": [
            {"name": "Potato", "quantity": 500, "unit": "g", "unitPrice": 0.01, "yieldPercentage": 80}
        ]}"#;
        let recipe: Recipe = serde_json::from_str(json).unwrap();
        let result = cost_recipe(&recipe).unwrap();

        let file = NamedTempFile::new().unwrap();
        export_breakdown_csv(file.path(), &result).unwrap();

        let content = std::fs::read_to_string(file.path()).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        // Header, one ingredient, spice, q, total.
        assert_eq!(lines.len(), 5);
        assert!(lines[1].starts_with("Potato"));
        assert!(lines[4].starts_with("total,"));
        assert!(lines[4].contains("6.566"));
    }
}

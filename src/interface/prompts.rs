use dialoguer::{Confirm, Input};
use rust_decimal::Decimal;
use strsim::jaro_winkler;

use crate::costing::constants::{
    DEFAULT_Q_FACTOR, DEFAULT_SPICE_FACTOR, DEFAULT_TARGET_FOOD_COST, FULL_YIELD,
};
use crate::error::{CostError, Result};
use crate::models::{IngredientUsage, MeatPart, MeatYieldTest, Recipe};

/// Minimum similarity for a fuzzy recipe-name match.
const FUZZY_MATCH_THRESHOLD: f64 = 0.85;

fn prompt_decimal(prompt: &str, default: Option<Decimal>) -> Result<Decimal> {
    let mut input = Input::<String>::new().with_prompt(prompt);
    if let Some(d) = default {
        input = input.default(d.to_string());
    }
    let raw = input.interact_text()?;

    raw.trim()
        .parse()
        .map_err(|_| CostError::InvalidInput(format!("not a number: {}", raw)))
}

/// Resolve a recipe name against the book, case-insensitively, falling back
/// to the closest fuzzy match above the similarity threshold.
pub fn find_recipe_name(query: &str, names: &[String]) -> Option<String> {
    let lowered = query.to_lowercase();

    if let Some(exact) = names.iter().find(|n| n.to_lowercase() == lowered) {
        return Some(exact.clone());
    }

    names
        .iter()
        .map(|n| (n, jaro_winkler(&n.to_lowercase(), &lowered)))
        .filter(|(_, score)| *score >= FUZZY_MATCH_THRESHOLD)
        .max_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(n, _)| n.clone())
}

/// Simple yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Build a recipe interactively: header fields, then ingredient lines until
/// the user enters an empty name.
pub fn prompt_recipe() -> Result<Recipe> {
    let name: String = Input::new().with_prompt("Recipe name").interact_text()?;

    let portions: u32 = Input::<String>::new()
        .with_prompt("Portions")
        .default("4".to_string())
        .interact_text()?
        .trim()
        .parse()
        .map_err(|_| CostError::InvalidInput("portions must be a whole number".to_string()))?;

    let mut ingredients = Vec::new();

    loop {
        let ing_name: String = Input::new()
            .with_prompt("Ingredient name (empty to finish)")
            .allow_empty(true)
            .interact_text()?;

        let ing_name = ing_name.trim().to_string();
        if ing_name.is_empty() {
            break;
        }

        let quantity = prompt_decimal("Quantity", None)?;
        let unit: String = Input::new()
            .with_prompt("Unit")
            .default("g".to_string())
            .interact_text()?;
        let unit_price = prompt_decimal("Unit price", None)?;
        let yield_percentage = prompt_decimal("Yield percentage", Some(FULL_YIELD))?;

        ingredients.push(IngredientUsage {
            name: ing_name,
            quantity,
            unit,
            unit_price,
            yield_percentage,
        });
    }

    let spice_factor = prompt_decimal("Spice factor", Some(DEFAULT_SPICE_FACTOR))?;
    let q_factor = prompt_decimal("Q factor", Some(DEFAULT_Q_FACTOR))?;
    let target_food_cost =
        prompt_decimal("Target food cost %", Some(DEFAULT_TARGET_FOOD_COST))?;

    Ok(Recipe {
        name,
        portions,
        ingredients,
        spice_factor,
        q_factor,
        target_food_cost,
    })
}

/// Build a meat yield test interactively: the purchased cut, then fabricated
/// parts until the user enters an empty name.
pub fn prompt_yield_test() -> Result<MeatYieldTest> {
    let product: String = Input::new().with_prompt("Product").interact_text()?;
    let ap_weight = prompt_decimal("AP weight (g)", None)?;
    let ap_cost = prompt_decimal("AP cost", None)?;

    let mut parts = Vec::new();

    loop {
        let part_name: String = Input::new()
            .with_prompt("Part name (empty to finish)")
            .allow_empty(true)
            .interact_text()?;

        let part_name = part_name.trim().to_string();
        if part_name.is_empty() {
            break;
        }

        let weight = prompt_decimal("Weight (g)", None)?;
        let usable = prompt_yes_no("Usable?", true)?;

        parts.push(MeatPart {
            name: part_name,
            weight,
            usable,
        });
    }

    Ok(MeatYieldTest {
        product,
        ap_weight,
        ap_cost,
        parts,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names() -> Vec<String> {
        vec![
            "Tortilla Espanola".to_string(),
            "Gazpacho".to_string(),
            "Paella Mixta".to_string(),
        ]
    }

    #[test]
    fn test_exact_match_ignores_case() {
        assert_eq!(
            find_recipe_name("gazpacho", &names()),
            Some("Gazpacho".to_string())
        );
    }

    #[test]
    fn test_fuzzy_match_catches_typo() {
        assert_eq!(
            find_recipe_name("gaspacho", &names()),
            Some("Gazpacho".to_string())
        );
    }

    #[test]
    fn test_no_match_below_threshold() {
        assert_eq!(find_recipe_name("sushi platter", &names()), None);
    }
}

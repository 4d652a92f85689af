use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::costing::constants::{
    DEFAULT_Q_FACTOR, DEFAULT_SPICE_FACTOR, DEFAULT_TARGET_FOOD_COST, FULL_YIELD,
};

/// A single ingredient line inside a recipe.
///
/// `yield_percentage` is the edible fraction of the purchased product, in
/// (0, 100]. Absent in the input record it defaults to 100 (no trim loss).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngredientUsage {
    pub name: String,

    pub quantity: Decimal,

    /// Unit label for display only; quantities are not dimensionally checked.
    pub unit: String,

    pub unit_price: Decimal,

    #[serde(default = "default_yield")]
    pub yield_percentage: Decimal,
}

fn default_yield() -> Decimal {
    FULL_YIELD
}

fn default_spice_factor() -> Decimal {
    DEFAULT_SPICE_FACTOR
}

fn default_q_factor() -> Decimal {
    DEFAULT_Q_FACTOR
}

fn default_target_food_cost() -> Decimal {
    DEFAULT_TARGET_FOOD_COST
}

/// A recipe as loaded from the recipe book.
///
/// Ingredient order is preserved so cost reports list lines in entry order.
/// Recipes are read-only input to the costing engine; a price edit means
/// re-running the aggregator, not patching a previous result.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub name: String,

    pub portions: u32,

    pub ingredients: Vec<IngredientUsage>,

    /// Seasoning surcharge as a fraction of direct cost, typically 0.02.
    #[serde(default = "default_spice_factor")]
    pub spice_factor: Decimal,

    /// Garnish/accompaniment surcharge layered after the spice factor.
    #[serde(default = "default_q_factor")]
    pub q_factor: Decimal,

    /// Target food-cost percentage used to derive the suggested price.
    #[serde(default = "default_target_food_cost")]
    pub target_food_cost: Decimal,
}

impl Recipe {
    /// Canonical key for lookups (lowercase name).
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_defaults_applied_on_missing_fields() {
        let json = r#"{
            "name": "Tortilla",
            "portions": 4,
            "ingredients": [
                {"name": "Potato", "quantity": 500, "unit": "g", "unitPrice": 0.002}
            ]
        }"#;

        let recipe: Recipe = serde_json::from_str(json).unwrap();
        assert_eq!(recipe.spice_factor, dec!(0.02));
        assert_eq!(recipe.q_factor, dec!(0.03));
        assert_eq!(recipe.target_food_cost, dec!(30));
        assert_eq!(recipe.ingredients[0].yield_percentage, dec!(100));
    }

    #[test]
    fn test_key_is_lowercase() {
        let json = r#"{"name": "Paella Mixta", "portions": 2, "ingredients": []}"#;
        let recipe: Recipe = serde_json::from_str(json).unwrap();
        assert_eq!(recipe.key(), "paella mixta");
    }
}

//! Escandallo costing: the two-pass recipe cost aggregator.
//!
//! Pass 1 prices every ingredient line (AP, EP, waste) and accumulates the
//! direct total. The spice and Q surcharges are then applied in sequence, Q on
//! top of the spice-adjusted subtotal. Pass 2 fills in each line's share of
//! the final total, which can only be known once the surcharges are in. The
//! shares deliberately sum to less than 100% because the surcharges belong to
//! no single line.

use rust_decimal::Decimal;

use crate::costing::constants::HUNDRED;
use crate::costing::{decimal, yield_cost};
use crate::error::{CostError, Result};
use crate::models::{CostedIngredient, Recipe, RecipeCostResult};

/// Cost a recipe end to end: per-line breakdown, cascading surcharges, cost
/// per portion, and the suggested menu price.
pub fn cost_recipe(recipe: &Recipe) -> Result<RecipeCostResult> {
    if recipe.portions == 0 {
        return Err(CostError::InvalidPortions(recipe.portions as i64));
    }
    if recipe.target_food_cost <= Decimal::ZERO {
        return Err(CostError::InvalidTarget(recipe.target_food_cost.to_string()));
    }

    // Pass 1: price each line and accumulate the direct EP total.
    let mut breakdown = Vec::with_capacity(recipe.ingredients.len());
    let mut direct_total = Decimal::ZERO;

    for ingredient in &recipe.ingredients {
        let ap = yield_cost::ap_cost(ingredient.quantity, ingredient.unit_price)?;
        let ep = yield_cost::ep_cost(ap, ingredient.yield_percentage)?;
        let waste = yield_cost::waste_cost(ep, ap)?;

        direct_total = decimal::add(direct_total, ep)?;

        breakdown.push(CostedIngredient {
            name: ingredient.name.clone(),
            quantity: ingredient.quantity,
            unit: ingredient.unit.clone(),
            unit_price: ingredient.unit_price,
            ap_cost: ap,
            yield_percentage: ingredient.yield_percentage,
            ep_cost: ep,
            waste_cost: waste,
            percentage_of_total: Decimal::ZERO,
        });
    }

    // Surcharges cascade: Q applies to the spice-adjusted subtotal.
    let spice_cost = decimal::mul(direct_total, recipe.spice_factor)?;
    let after_spice = decimal::add(direct_total, spice_cost)?;
    let q_cost = decimal::mul(after_spice, recipe.q_factor)?;
    let total_cost = decimal::add(after_spice, q_cost)?;

    // Pass 2: per-line share of the surcharge-inclusive total.
    if total_cost > Decimal::ZERO {
        for line in &mut breakdown {
            line.percentage_of_total =
                decimal::div(decimal::mul(line.ep_cost, HUNDRED)?, total_cost)?;
        }
    }

    let cost_per_portion = decimal::div(total_cost, Decimal::from(recipe.portions))?;
    let target_fraction = decimal::div(recipe.target_food_cost, HUNDRED)?;
    let suggested_price = decimal::div(cost_per_portion, target_fraction)?;

    Ok(RecipeCostResult {
        recipe_name: recipe.name.clone(),
        portions: recipe.portions,
        breakdown,
        spice_factor: recipe.spice_factor,
        spice_cost,
        q_factor: recipe.q_factor,
        q_cost,
        total_cost,
        cost_per_portion,
        suggested_price,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::IngredientUsage;
    use rust_decimal_macros::dec;

    fn ingredient(name: &str, qty: Decimal, price: Decimal, yield_pct: Decimal) -> IngredientUsage {
        IngredientUsage {
            name: name.to_string(),
            quantity: qty,
            unit: "g".to_string(),
            unit_price: price,
            yield_percentage: yield_pct,
        }
    }

    fn recipe(portions: u32, ingredients: Vec<IngredientUsage>) -> Recipe {
        Recipe {
            name: "Test".to_string(),
            portions,
            ingredients,
            spice_factor: dec!(0.02),
            q_factor: dec!(0.03),
            target_food_cost: dec!(30),
        }
    }

    #[test]
    fn test_single_ingredient_escandallo() {
        let r = recipe(4, vec![ingredient("Potato", dec!(500), dec!(0.01), dec!(80))]);
        let result = cost_recipe(&r).unwrap();

        let line = &result.breakdown[0];
        assert_eq!(line.ap_cost, dec!(5.00));
        assert_eq!(line.ep_cost, dec!(6.25));
        assert_eq!(line.waste_cost, dec!(1.25));

        assert_eq!(result.spice_cost, dec!(0.125));
        assert_eq!(result.q_cost, dec!(0.19125));
        assert_eq!(result.total_cost, dec!(6.56625));
        assert_eq!(result.cost_per_portion, dec!(1.6415625));
        assert_eq!(result.suggested_price, dec!(5.471875));
    }

    #[test]
    fn test_surcharges_cascade_not_add() {
        // total = direct * 1.02 * 1.03, not direct * 1.05.
        let r = recipe(1, vec![ingredient("Base", dec!(100), dec!(1), dec!(100))]);
        let result = cost_recipe(&r).unwrap();
        assert_eq!(result.total_cost, dec!(105.06));
        assert_ne!(result.total_cost, dec!(105));
    }

    #[test]
    fn test_percentages_leave_room_for_surcharges() {
        let r = recipe(
            2,
            vec![
                ingredient("A", dec!(1), dec!(4), dec!(100)),
                ingredient("B", dec!(1), dec!(6), dec!(100)),
            ],
        );
        let result = cost_recipe(&r).unwrap();

        let share_sum: Decimal = result
            .breakdown
            .iter()
            .map(|l| l.percentage_of_total)
            .sum();
        // Surcharge share is unattributed, so line shares stay under 100.
        assert!(share_sum < dec!(100));
        assert!(share_sum > dec!(95));
    }

    #[test]
    fn test_breakdown_preserves_entry_order() {
        let r = recipe(
            1,
            vec![
                ingredient("Zucchini", dec!(1), dec!(1), dec!(100)),
                ingredient("Apple", dec!(1), dec!(1), dec!(100)),
            ],
        );
        let result = cost_recipe(&r).unwrap();
        assert_eq!(result.breakdown[0].name, "Zucchini");
        assert_eq!(result.breakdown[1].name, "Apple");
    }

    #[test]
    fn test_zero_portions_rejected() {
        let r = recipe(0, vec![ingredient("A", dec!(1), dec!(1), dec!(100))]);
        assert!(matches!(cost_recipe(&r), Err(CostError::InvalidPortions(0))));
    }

    #[test]
    fn test_zero_target_rejected() {
        let mut r = recipe(2, vec![ingredient("A", dec!(1), dec!(1), dec!(100))]);
        r.target_food_cost = Decimal::ZERO;
        assert!(matches!(cost_recipe(&r), Err(CostError::InvalidTarget(_))));
    }

    #[test]
    fn test_bad_yield_surfaces_unmodified() {
        let r = recipe(2, vec![ingredient("A", dec!(1), dec!(1), Decimal::ZERO)]);
        assert!(matches!(cost_recipe(&r), Err(CostError::InvalidYield(_))));
    }

    #[test]
    fn test_empty_recipe_costs_nothing() {
        let r = recipe(2, vec![]);
        let result = cost_recipe(&r).unwrap();
        assert_eq!(result.total_cost, Decimal::ZERO);
        assert_eq!(result.cost_per_portion, Decimal::ZERO);
        assert_eq!(result.suggested_price, Decimal::ZERO);
    }
}

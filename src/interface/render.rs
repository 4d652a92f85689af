use crate::costing::constants::HUNDRED;
use crate::models::{ClassifiedMenuItem, MeatYieldResult, Recipe, RecipeCostResult};

/// Display a full escandallo: per-ingredient lines, surcharges, totals, and
/// the suggested menu price.
pub fn display_cost_report(result: &RecipeCostResult) {
    println!();
    println!("=== Escandallo: {} ===", result.recipe_name);
    println!();

    let max_name_len = result
        .breakdown
        .iter()
        .map(|l| l.name.len())
        .max()
        .unwrap_or(10)
        .max(10);

    for line in &result.breakdown {
        println!(
            "  {:<width$}  {:>8} {:<4} @ {:<8} | AP {:>8} | yield {:>5}% | EP {:>8} | waste {:>7} | {:>5}%",
            line.name,
            line.quantity,
            line.unit,
            line.unit_price,
            line.ap_cost.round_dp(2),
            line.yield_percentage,
            line.ep_cost.round_dp(2),
            line.waste_cost.round_dp(2),
            line.percentage_of_total.round_dp(1),
            width = max_name_len
        );
    }

    println!();
    println!(
        "  Spice factor ({}%): {}",
        (result.spice_factor * HUNDRED).round_dp(1),
        result.spice_cost.round_dp(2)
    );
    println!(
        "  Q factor ({}%):     {}",
        (result.q_factor * HUNDRED).round_dp(1),
        result.q_cost.round_dp(2)
    );
    println!();
    println!("  Total cost:       {}", result.total_cost.round_dp(2));
    println!(
        "  Cost per portion: {} ({} portions)",
        result.cost_per_portion.round_dp(2),
        result.portions
    );
    println!(
        "  Suggested price:  {}",
        result.suggested_price.round_dp(2)
    );
    println!();
}

/// Display a meat yield test result.
pub fn display_yield_test(result: &MeatYieldResult) {
    println!();
    println!("=== Yield test: {} ===", result.product);
    println!();

    let max_name_len = result
        .parts
        .iter()
        .map(|p| p.name.len())
        .max()
        .unwrap_or(10)
        .max(10);

    for part in &result.parts {
        let tag = if part.usable { "usable" } else { "waste" };
        println!(
            "  {:<width$}  {:>8} g | {:>5}% | value {:>8} | {}",
            part.name,
            part.weight,
            part.percentage.round_dp(1),
            part.value.round_dp(2),
            tag,
            width = max_name_len
        );
    }

    println!();
    println!(
        "  Usable weight: {} g ({}%)",
        result.total_usable_weight,
        result.yield_percentage.round_dp(1)
    );
    println!(
        "  Waste weight:  {} g ({}%)",
        result.total_waste_weight,
        result.waste_percentage.round_dp(1)
    );
    println!(
        "  EP cost per unit: {}",
        result.ep_cost_per_unit.round_dp(4)
    );
    println!(
        "  Cost increase factor: {}",
        result.cost_increase_factor.round_dp(2)
    );
    println!();
}

/// Display the menu-engineering matrix.
pub fn display_menu_matrix(items: &[ClassifiedMenuItem]) {
    if items.is_empty() {
        println!("No menu items to classify.");
        return;
    }

    println!();
    println!("=== Menu engineering ({} items) ===", items.len());
    println!();

    let max_name_len = items.iter().map(|i| i.name.len()).max().unwrap_or(10).max(10);

    for item in items {
        println!(
            "  {:<width$}  price {:>7} | cost {:>7} | margin {:>7} | sold {:>5} | {}",
            item.name,
            item.selling_price.round_dp(2),
            item.cost.round_dp(2),
            item.contribution_margin.round_dp(2),
            item.units_sold,
            item.classification.label(),
            width = max_name_len
        );
    }

    println!();
}

/// Display a short listing of recipes in the book.
pub fn display_recipe_list(recipes: &[&Recipe]) {
    if recipes.is_empty() {
        println!("Recipe book is empty.");
        return;
    }

    println!();
    println!("=== Recipe book ({} recipes) ===", recipes.len());
    println!();

    for recipe in recipes {
        println!(
            "  {} - {} portions, {} ingredients",
            recipe.name,
            recipe.portions,
            recipe.ingredients.len()
        );
    }

    println!();
}

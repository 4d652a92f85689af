use rust_decimal::Decimal;
use serde::Serialize;

/// One costed ingredient line of an escandallo.
///
/// Produced by the aggregator and never mutated afterward.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CostedIngredient {
    pub name: String,

    pub quantity: Decimal,

    pub unit: String,

    pub unit_price: Decimal,

    /// As-purchased cost: quantity x unit price.
    pub ap_cost: Decimal,

    pub yield_percentage: Decimal,

    /// Edible-portion cost after yield loss is priced in.
    pub ep_cost: Decimal,

    /// EP cost minus AP cost; what the trim loss costs.
    pub waste_cost: Decimal,

    /// Share of the surcharge-inclusive total. Lines sum to less than 100%
    /// because spice and Q surcharges belong to no single line.
    pub percentage_of_total: Decimal,
}

/// Full cost breakdown for a recipe.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeCostResult {
    pub recipe_name: String,

    pub portions: u32,

    pub breakdown: Vec<CostedIngredient>,

    pub spice_factor: Decimal,

    pub spice_cost: Decimal,

    pub q_factor: Decimal,

    pub q_cost: Decimal,

    /// Direct EP total with both surcharges applied in sequence.
    pub total_cost: Decimal,

    pub cost_per_portion: Decimal,

    /// Cost per portion divided by the target food-cost fraction.
    pub suggested_price: Decimal,
}

/// One part line of a meat yield test result.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PartYield {
    pub name: String,

    pub weight: Decimal,

    /// Share of the AP weight.
    pub percentage: Decimal,

    /// Value at the AP price per unit.
    pub value: Decimal,

    pub usable: bool,
}

/// Result of a meat yield test.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MeatYieldResult {
    pub product: String,

    pub parts: Vec<PartYield>,

    pub total_usable_weight: Decimal,

    pub total_waste_weight: Decimal,

    pub yield_percentage: Decimal,

    pub waste_percentage: Decimal,

    /// Effective cost per weight unit once waste is excluded.
    pub ep_cost_per_unit: Decimal,

    /// EP cost per unit over AP price per unit; >= 1 for a sane test.
    pub cost_increase_factor: Decimal,
}

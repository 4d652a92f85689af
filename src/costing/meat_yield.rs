//! Meat/protein yield-test processing.
//!
//! Given a bulk purchased cut and its post-fabrication parts, derive per-part
//! value at the AP price, usable/waste totals, and the factor by which the
//! effective per-unit cost rises once waste is excluded.

use rust_decimal::Decimal;

use crate::costing::constants::HUNDRED;
use crate::costing::decimal;
use crate::error::{CostError, Result};
use crate::models::{MeatYieldResult, MeatYieldTest, PartYield};

/// Process a yield test into per-part and aggregate figures.
///
/// Part weights are taken as entered; a test whose parts do not sum to the AP
/// weight yields percentages outside [0, 100] rather than an error.
pub fn run_yield_test(test: &MeatYieldTest) -> Result<MeatYieldResult> {
    if test.ap_weight <= Decimal::ZERO {
        return Err(CostError::InvalidWeight(test.ap_weight.to_string()));
    }

    let price_per_unit = decimal::div(test.ap_cost, test.ap_weight)?;

    let mut parts = Vec::with_capacity(test.parts.len());
    let mut total_usable = Decimal::ZERO;
    let mut total_waste = Decimal::ZERO;

    for part in &test.parts {
        let percentage = decimal::div(decimal::mul(part.weight, HUNDRED)?, test.ap_weight)?;
        let value = decimal::mul(part.weight, price_per_unit)?;

        if part.usable {
            total_usable = decimal::add(total_usable, part.weight)?;
        } else {
            total_waste = decimal::add(total_waste, part.weight)?;
        }

        parts.push(PartYield {
            name: part.name.clone(),
            weight: part.weight,
            percentage,
            value,
            usable: part.usable,
        });
    }

    let yield_percentage = decimal::div(decimal::mul(total_usable, HUNDRED)?, test.ap_weight)?;
    let waste_percentage = decimal::div(decimal::mul(total_waste, HUNDRED)?, test.ap_weight)?;

    if total_usable.is_zero() {
        // Every part wasted: no EP cost exists.
        return Err(CostError::InvalidYield("no usable weight".to_string()));
    }

    let ep_cost_per_unit = decimal::div(test.ap_cost, total_usable)?;
    let cost_increase_factor = decimal::div(ep_cost_per_unit, price_per_unit)?;

    Ok(MeatYieldResult {
        product: test.product.clone(),
        parts,
        total_usable_weight: total_usable,
        total_waste_weight: total_waste,
        yield_percentage,
        waste_percentage,
        ep_cost_per_unit,
        cost_increase_factor,
    })
}

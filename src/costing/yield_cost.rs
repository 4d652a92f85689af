//! AP/EP cost conversion.
//!
//! Pure functions converting between As-Purchased and Edible-Portion cost
//! given a yield percentage. Used by both the recipe aggregator and the meat
//! yield-test processor.

use rust_decimal::Decimal;

use crate::costing::constants::HUNDRED;
use crate::costing::decimal;
use crate::error::{CostError, Result};

/// As-purchased cost: quantity times unit price.
pub fn ap_cost(quantity: Decimal, unit_price: Decimal) -> Result<Decimal> {
    decimal::mul(quantity, unit_price)
}

/// Edible-portion cost: AP cost scaled up by the yield loss.
///
/// Fails with `InvalidYield` when the yield percentage is zero or negative.
pub fn ep_cost(ap_cost: Decimal, yield_percentage: Decimal) -> Result<Decimal> {
    if yield_percentage <= Decimal::ZERO {
        return Err(CostError::InvalidYield(yield_percentage.to_string()));
    }
    decimal::div(decimal::mul(ap_cost, HUNDRED)?, yield_percentage)
}

/// What the trim loss costs: EP cost minus AP cost.
pub fn waste_cost(ep_cost: Decimal, ap_cost: Decimal) -> Result<Decimal> {
    decimal::sub(ep_cost, ap_cost)
}

/// Reusable multiplier converting any AP cost to its EP equivalent.
pub fn cost_factor(yield_percentage: Decimal) -> Result<Decimal> {
    if yield_percentage <= Decimal::ZERO {
        return Err(CostError::InvalidYield(yield_percentage.to_string()));
    }
    decimal::div(HUNDRED, yield_percentage)
}

//! Menu-engineering classification.
//!
//! Places each sold item in a profitability/popularity quadrant. The margin
//! bar is the set average (inclusive, so an exactly-average item counts as
//! high margin); the popularity bar is softened to 70% of average sales.

use rust_decimal::Decimal;

use crate::costing::constants::POPULARITY_THRESHOLD;
use crate::costing::decimal;
use crate::error::{CostError, Result};
use crate::models::{ClassifiedMenuItem, MenuCategory, MenuItem};

/// Classify every item of a menu into its quadrant.
///
/// Fails with `EmptyItemSet` when given no items, since the averages the
/// quadrants are measured against are undefined.
pub fn classify_menu(items: &[MenuItem]) -> Result<Vec<ClassifiedMenuItem>> {
    if items.is_empty() {
        return Err(CostError::EmptyItemSet);
    }

    let count = Decimal::from(items.len());

    let mut margin_sum = Decimal::ZERO;
    let mut sold_sum = Decimal::ZERO;
    let mut margins = Vec::with_capacity(items.len());

    for item in items {
        let margin = decimal::sub(item.selling_price, item.cost)?;
        margin_sum = decimal::add(margin_sum, margin)?;
        sold_sum = decimal::add(sold_sum, Decimal::from(item.units_sold))?;
        margins.push(margin);
    }

    let avg_margin = decimal::div(margin_sum, count)?;
    let avg_popularity = decimal::div(sold_sum, count)?;
    let popularity_bar = decimal::mul(avg_popularity, POPULARITY_THRESHOLD)?;

    let mut classified = Vec::with_capacity(items.len());

    for (item, margin) in items.iter().zip(margins) {
        let sold = Decimal::from(item.units_sold);
        let high_margin = margin >= avg_margin;
        let popular = sold >= popularity_bar;

        let classification = match (high_margin, popular) {
            (true, true) => MenuCategory::Star,
            (true, false) => MenuCategory::Puzzle,
            (false, true) => MenuCategory::PlowHorse,
            (false, false) => MenuCategory::Dog,
        };

        classified.push(ClassifiedMenuItem {
            name: item.name.clone(),
            selling_price: item.selling_price,
            cost: item.cost,
            units_sold: item.units_sold,
            contribution_margin: margin,
            contribution_margin_ratio: decimal::div(margin, avg_margin)?,
            popularity_ratio: decimal::div(sold, avg_popularity)?,
            classification,
        });
    }

    Ok(classified)
}

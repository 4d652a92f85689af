use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Yield percentage meaning no trim loss (EP cost equals AP cost).
pub const FULL_YIELD: Decimal = dec!(100);

/// Default seasoning surcharge: 2% of direct ingredient cost.
pub const DEFAULT_SPICE_FACTOR: Decimal = dec!(0.02);

/// Default garnish/accompaniment surcharge: 3%, applied on top of the
/// spice-adjusted subtotal.
pub const DEFAULT_Q_FACTOR: Decimal = dec!(0.03);

/// Default target food-cost percentage for suggested pricing.
pub const DEFAULT_TARGET_FOOD_COST: Decimal = dec!(30);

/// Popularity softening threshold for menu engineering.
///
/// An item counts as popular at 70% of average sales rather than the raw
/// average, so moderately popular high-margin items are not demoted.
pub const POPULARITY_THRESHOLD: Decimal = dec!(0.7);

pub const HUNDRED: Decimal = dec!(100);

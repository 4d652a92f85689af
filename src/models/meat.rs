use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One fabricated part of a butchered cut.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeatPart {
    pub name: String,

    /// Weight in the same unit as the test's AP weight (grams by convention).
    pub weight: Decimal,

    /// Whether the part is sellable/usable or trim waste.
    pub usable: bool,
}

/// A butcher's yield test: a bulk purchased cut and its post-fabrication parts.
///
/// Part weights are not required to sum to the AP weight; an under- or
/// over-accounted test produces a yield percentage outside [0, 100] rather
/// than an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeatYieldTest {
    pub product: String,

    pub ap_weight: Decimal,

    pub ap_cost: Decimal,

    pub parts: Vec<MeatPart>,
}

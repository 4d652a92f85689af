use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A sold menu item as read from the sales record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub name: String,

    pub selling_price: Decimal,

    pub cost: Decimal,

    pub units_sold: u32,
}

/// Menu-engineering quadrant: profitability crossed with popularity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MenuCategory {
    /// High margin, high popularity.
    Star,
    /// High margin, low popularity.
    Puzzle,
    /// Low margin, high popularity.
    PlowHorse,
    /// Low margin, low popularity.
    Dog,
}

impl MenuCategory {
    pub fn label(&self) -> &'static str {
        match self {
            MenuCategory::Star => "star",
            MenuCategory::Puzzle => "puzzle",
            MenuCategory::PlowHorse => "plow horse",
            MenuCategory::Dog => "dog",
        }
    }
}

/// A menu item with its derived margin, ratios, and quadrant.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassifiedMenuItem {
    pub name: String,

    pub selling_price: Decimal,

    pub cost: Decimal,

    pub units_sold: u32,

    pub contribution_margin: Decimal,

    /// Item margin divided by the set's average margin.
    pub contribution_margin_ratio: Decimal,

    /// Item units sold divided by the set's average units sold.
    pub popularity_ratio: Decimal,

    pub classification: MenuCategory,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_serializes_snake_case() {
        let json = serde_json::to_string(&MenuCategory::PlowHorse).unwrap();
        assert_eq!(json, "\"plow_horse\"");
    }

    #[test]
    fn test_category_labels() {
        assert_eq!(MenuCategory::Star.label(), "star");
        assert_eq!(MenuCategory::PlowHorse.label(), "plow horse");
    }
}

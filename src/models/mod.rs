mod meat;
mod menu;
mod recipe;
mod results;

pub use meat::{MeatPart, MeatYieldTest};
pub use menu::{ClassifiedMenuItem, MenuCategory, MenuItem};
pub use recipe::{IngredientUsage, Recipe};
pub use results::{CostedIngredient, MeatYieldResult, PartYield, RecipeCostResult};

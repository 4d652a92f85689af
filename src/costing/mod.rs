pub mod constants;
pub mod decimal;
pub mod meat_yield;
pub mod menu_engineering;
pub mod recipe_cost;
pub mod yield_cost;

pub use constants::*;
pub use meat_yield::run_yield_test;
pub use menu_engineering::classify_menu;
pub use recipe_cost::cost_recipe;
pub use yield_cost::{ap_cost, cost_factor, ep_cost, waste_cost};

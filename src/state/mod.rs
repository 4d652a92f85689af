mod manager;
mod persistence;

pub use manager::RecipeBook;
pub use persistence::{export_breakdown_csv, load_menu_items, load_recipes, save_recipes};

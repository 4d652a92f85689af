pub mod prompts;
pub mod render;

pub use prompts::{find_recipe_name, prompt_recipe, prompt_yes_no, prompt_yield_test};
pub use render::{display_cost_report, display_menu_matrix, display_recipe_list, display_yield_test};

use std::collections::HashMap;

use crate::error::{CostError, Result};
use crate::models::Recipe;

/// In-memory recipe book keyed by lowercase recipe name.
///
/// This is the repository object callers inject into the costing flow; the
/// costing engine itself never touches storage.
pub struct RecipeBook {
    recipes: HashMap<String, Recipe>,
}

impl RecipeBook {
    /// Create a book from a list of recipes.
    pub fn new(recipes: Vec<Recipe>) -> Self {
        let mut map = HashMap::new();
        for recipe in recipes {
            map.insert(recipe.key(), recipe);
        }
        Self { recipes: map }
    }

    /// Get a recipe by name (case-insensitive).
    pub fn get(&self, name: &str) -> Option<&Recipe> {
        self.recipes.get(&name.to_lowercase())
    }

    /// Get a recipe by name or fail with `RecipeNotFound`.
    pub fn get_required(&self, name: &str) -> Result<&Recipe> {
        self.get(name)
            .ok_or_else(|| CostError::RecipeNotFound(name.to_string()))
    }

    /// Insert or replace a recipe.
    pub fn upsert(&mut self, recipe: Recipe) {
        self.recipes.insert(recipe.key(), recipe);
    }

    /// Remove a recipe by name (case-insensitive).
    pub fn remove(&mut self, name: &str) -> Option<Recipe> {
        self.recipes.remove(&name.to_lowercase())
    }

    /// All recipes, sorted by name for stable listings.
    pub fn all(&self) -> Vec<&Recipe> {
        let mut recipes: Vec<&Recipe> = self.recipes.values().collect();
        recipes.sort_by(|a, b| a.name.cmp(&b.name));
        recipes
    }

    /// Recipe names, sorted, for prompt menus and fuzzy matching.
    pub fn names(&self) -> Vec<String> {
        self.all().into_iter().map(|r| r.name.clone()).collect()
    }

    /// Convert the book back to a list for serialization.
    pub fn to_recipes(&self) -> Vec<Recipe> {
        self.recipes.values().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

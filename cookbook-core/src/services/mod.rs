//! Catalog operations: validate a request, touch the stores, return a response.
//!
//! Business failures come back as [`CatalogError`](crate::CatalogError)
//! values. Nothing here panics on bad input.

mod ingredients;
mod recipe_ingredients;
mod recipes;

pub use ingredients::IngredientService;
pub use recipe_ingredients::RecipeIngredientService;
pub use recipes::RecipeService;

use std::sync::Arc;

use crate::store::{IngredientStore, MemoryStore, RecipeStore};

/// All services wired over one pair of stores.
#[derive(Clone)]
pub struct Catalog {
    pub recipes: RecipeService,
    pub ingredients: IngredientService,
    pub recipe_ingredients: RecipeIngredientService,
}

impl Catalog {
    pub fn new(recipe_store: Arc<dyn RecipeStore>, ingredient_store: Arc<dyn IngredientStore>) -> Self {
        let ingredients = IngredientService::new(ingredient_store.clone());
        Self {
            recipes: RecipeService::new(recipe_store.clone()),
            recipe_ingredients: RecipeIngredientService::new(recipe_store, ingredients.clone()),
            ingredients,
        }
    }

    /// A catalog over a fresh [`MemoryStore`].
    pub fn in_memory() -> Self {
        let store = Arc::new(MemoryStore::new());
        Self::new(store.clone(), store)
    }
}

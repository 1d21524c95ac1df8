//! Bundled starter data.

use thiserror::Error;

use crate::error::StoreError;
use crate::store::{IngredientStore, RecipeStore};
use crate::types::{Ingredient, Recipe};

const INGREDIENTS_JSON: &str = include_str!("../seed/ingredients.json");
const RECIPES_JSON: &str = include_str!("../seed/recipes.json");

#[derive(Error, Debug)]
pub enum SeedError {
    #[error("Bundled seed file {file} is malformed: {source}")]
    Parse {
        file: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// How many rows `load_into` inserted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedCounts {
    pub ingredients: usize,
    pub recipes: usize,
}

pub fn ingredients() -> Result<Vec<Ingredient>, SeedError> {
    serde_json::from_str(INGREDIENTS_JSON).map_err(|source| SeedError::Parse {
        file: "ingredients.json",
        source,
    })
}

pub fn recipes() -> Result<Vec<Recipe>, SeedError> {
    serde_json::from_str(RECIPES_JSON).map_err(|source| SeedError::Parse {
        file: "recipes.json",
        source,
    })
}

/// Inserts the bundled data. Each store is only filled when it is empty, so
/// running this on every startup is safe.
pub fn load_into(
    recipes_store: &dyn RecipeStore,
    ingredient_store: &dyn IngredientStore,
) -> Result<SeedCounts, SeedError> {
    let mut counts = SeedCounts::default();

    if ingredient_store.get_all()?.is_empty() {
        for ingredient in ingredients()? {
            ingredient_store.add(ingredient)?;
            counts.ingredients += 1;
        }
    }
    if recipes_store.get_all()?.is_empty() {
        for recipe in recipes()? {
            recipes_store.add(recipe)?;
            counts.recipes += 1;
        }
    }

    tracing::info!(
        ingredients = counts.ingredients,
        recipes = counts.recipes,
        "seed data loaded"
    );
    Ok(counts)
}

//! Repository ports for persisted recipes and ingredients.
//!
//! Implementations must be thread-safe. Each call either completes or fails
//! as a whole; nothing spans more than one call.

mod memory;

pub use memory::MemoryStore;

use uuid::Uuid;

use crate::error::StoreError;
use crate::types::{Ingredient, Recipe, RecipeIngredient};

pub type StoreResult<T> = Result<T, StoreError>;

/// Predicate handed to `get_filtered`.
pub type Predicate<'a, T> = &'a (dyn Fn(&T) -> bool + Sync);

/// Collection-like access to recipe aggregates.
///
/// Recipes returned from any read carry their `recipe_ingredients`, each with
/// its `ingredient` populated.
pub trait RecipeStore: Send + Sync {
    fn add(&self, recipe: Recipe) -> StoreResult<Recipe>;

    fn get_by_id(&self, id: Uuid) -> StoreResult<Option<Recipe>>;

    fn get_all(&self) -> StoreResult<Vec<Recipe>>;

    fn get_filtered(&self, predicate: Predicate<'_, Recipe>) -> StoreResult<Vec<Recipe>>;

    /// Replaces the scalar fields of an existing recipe. Join rows are not touched.
    fn update(&self, recipe: Recipe) -> StoreResult<Recipe>;

    /// Returns false if no recipe had this id. Join rows go with the recipe.
    fn delete(&self, id: Uuid) -> StoreResult<bool>;

    /// Persists a join row and returns the owning recipe, or `None` if that
    /// recipe does not exist. A second row for the same (recipe, ingredient)
    /// pair fails with [`StoreError::Duplicate`].
    fn insert_recipe_ingredient(&self, link: RecipeIngredient) -> StoreResult<Option<Recipe>>;
}

/// Collection-like access to ingredients.
pub trait IngredientStore: Send + Sync {
    fn add(&self, ingredient: Ingredient) -> StoreResult<Ingredient>;

    fn get_by_id(&self, id: Uuid) -> StoreResult<Option<Ingredient>>;

    fn get_all(&self) -> StoreResult<Vec<Ingredient>>;

    fn get_filtered(&self, predicate: Predicate<'_, Ingredient>) -> StoreResult<Vec<Ingredient>>;

    /// Returns `None` if no ingredient had this id.
    fn update(&self, ingredient: Ingredient) -> StoreResult<Option<Ingredient>>;

    /// Returns false if no ingredient had this id.
    fn delete(&self, id: Uuid) -> StoreResult<bool>;
}

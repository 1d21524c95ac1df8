pub mod dto;
pub mod error;
pub mod query;
pub mod seed;
pub mod services;
pub mod store;
pub mod types;
pub mod validation;

pub use error::{CatalogError, CatalogResult, StoreError};
pub use query::{filter_recipes, sort_recipes, RecipeField, RecipeFilter, RecipeView};
pub use services::{Catalog, IngredientService, RecipeIngredientService, RecipeService};
pub use store::{IngredientStore, MemoryStore, RecipeStore};
pub use types::{Category, Ingredient, Recipe, RecipeIngredient, Unit};
pub use validation::{Validate, Violation};

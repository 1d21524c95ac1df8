//! Request and response shapes exchanged with callers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::error::{CatalogError, CatalogResult};
use crate::types::{Category, Ingredient, Recipe, RecipeIngredient, Unit};
use crate::validation::{Rules, Validate, Violation};

pub const RECIPE_NAME_LEN: (usize, usize) = (3, 50);
pub const DESCRIPTION_MAX_LEN: usize = 1000;
pub const AUTHOR_MAX_LEN: usize = 100;
pub const IMAGE_URL_MAX_LEN: usize = 100;
pub const INGREDIENT_NAME_LEN: (usize, usize) = (2, 50);
pub const PREPARATION_TIME_RANGE: std::ops::RangeInclusive<i32> = 1..=1440;
pub const SERVINGS_RANGE: std::ops::RangeInclusive<i32> = 1..=20;
pub const RATING_RANGE: std::ops::RangeInclusive<f64> = 0.0..=5.0;
pub const QUANTITY_RANGE: std::ops::RangeInclusive<f64> = 0.1..=10000.0;

// ---------------------------------------------------------------------------
// Recipes
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RecipeAddRequest {
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub author: Option<String>,
    pub category: Option<Category>,
    /// Minutes, 1-1440
    #[serde(default)]
    pub preparation_time: i32,
    /// 1-20
    #[serde(default)]
    pub servings: i32,
    /// 0.0-5.0
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RecipeUpdateRequest {
    pub id: Option<Uuid>,
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub author: Option<String>,
    pub category: Option<Category>,
    #[serde(default)]
    pub preparation_time: i32,
    #[serde(default)]
    pub servings: i32,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// Rules shared by add and update, which carry the same recipe fields.
#[allow(clippy::too_many_arguments)]
fn recipe_field_rules(
    rules: Rules,
    name: Option<&str>,
    description: Option<&str>,
    author: Option<&str>,
    category: &Option<Category>,
    preparation_time: i32,
    servings: i32,
    rating: f64,
    image_url: Option<&str>,
) -> Rules {
    rules
        .required_text("name", name)
        .text_length("name", name, RECIPE_NAME_LEN.0, RECIPE_NAME_LEN.1)
        .max_length("description", description, DESCRIPTION_MAX_LEN)
        .required_text("author", author)
        .max_length("author", author, AUTHOR_MAX_LEN)
        .required("category", category)
        .in_range("preparation_time", preparation_time, PREPARATION_TIME_RANGE)
        .in_range("servings", servings, SERVINGS_RANGE)
        .in_range("rating", rating, RATING_RANGE)
        .max_length("image_url", image_url, IMAGE_URL_MAX_LEN)
}

impl Validate for RecipeAddRequest {
    fn violations(&self) -> Vec<Violation> {
        recipe_field_rules(
            Rules::new(),
            self.name.as_deref(),
            self.description.as_deref(),
            self.author.as_deref(),
            &self.category,
            self.preparation_time,
            self.servings,
            self.rating,
            self.image_url.as_deref(),
        )
        .finish()
    }
}

impl Validate for RecipeUpdateRequest {
    fn violations(&self) -> Vec<Violation> {
        recipe_field_rules(
            Rules::new().non_nil_id("id", self.id),
            self.name.as_deref(),
            self.description.as_deref(),
            self.author.as_deref(),
            &self.category,
            self.preparation_time,
            self.servings,
            self.rating,
            self.image_url.as_deref(),
        )
        .finish()
    }
}

fn missing(field: &str) -> CatalogError {
    CatalogError::Validation(vec![Violation::new(field, "is required")])
}

impl RecipeAddRequest {
    /// Validates the request and builds a new recipe with no ingredients.
    pub fn into_recipe(self, id: Uuid, created_at: DateTime<Utc>) -> CatalogResult<Recipe> {
        self.validate()?;
        Ok(Recipe {
            id,
            name: self.name.ok_or_else(|| missing("name"))?,
            description: self.description,
            author: self.author.ok_or_else(|| missing("author"))?,
            category: self.category.ok_or_else(|| missing("category"))?,
            preparation_time: self.preparation_time,
            servings: self.servings,
            rating: self.rating,
            image_url: self.image_url,
            created_at,
            recipe_ingredients: Vec::new(),
        })
    }
}

impl RecipeUpdateRequest {
    /// Validates the request and overwrites every editable field of `recipe`.
    /// Identity, creation time and attached ingredients are left alone.
    pub fn apply_to(self, recipe: &mut Recipe) -> CatalogResult<()> {
        self.validate()?;
        recipe.name = self.name.ok_or_else(|| missing("name"))?;
        recipe.description = self.description;
        recipe.author = self.author.ok_or_else(|| missing("author"))?;
        recipe.category = self.category.ok_or_else(|| missing("category"))?;
        recipe.preparation_time = self.preparation_time;
        recipe.servings = self.servings;
        recipe.rating = self.rating;
        recipe.image_url = self.image_url;
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RecipeIngredientResponse {
    pub id: Uuid,
    pub ingredient_id: Uuid,
    pub ingredient_name: Option<String>,
    pub quantity: f64,
    pub unit: Unit,
    pub unit_label: String,
}

impl From<&RecipeIngredient> for RecipeIngredientResponse {
    fn from(ri: &RecipeIngredient) -> Self {
        Self {
            id: ri.id,
            ingredient_id: ri.ingredient_id,
            ingredient_name: ri.ingredient.as_ref().map(|i| i.name.clone()),
            quantity: ri.quantity,
            unit: ri.unit,
            unit_label: ri.unit.label().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RecipeResponse {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub author: String,
    pub category: Category,
    pub category_label: String,
    pub preparation_time: i32,
    pub servings: i32,
    pub rating: f64,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub recipe_ingredients: Vec<RecipeIngredientResponse>,
}

impl From<&Recipe> for RecipeResponse {
    fn from(recipe: &Recipe) -> Self {
        Self {
            id: recipe.id,
            name: recipe.name.clone(),
            description: recipe.description.clone(),
            author: recipe.author.clone(),
            category: recipe.category,
            category_label: recipe.category.label().to_string(),
            preparation_time: recipe.preparation_time,
            servings: recipe.servings,
            rating: recipe.rating,
            image_url: recipe.image_url.clone(),
            created_at: recipe.created_at,
            recipe_ingredients: recipe
                .recipe_ingredients
                .iter()
                .map(RecipeIngredientResponse::from)
                .collect(),
        }
    }
}

impl From<Recipe> for RecipeResponse {
    fn from(recipe: Recipe) -> Self {
        Self::from(&recipe)
    }
}

// ---------------------------------------------------------------------------
// Ingredients
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct IngredientAddRequest {
    pub name: Option<String>,
}

impl Validate for IngredientAddRequest {
    fn violations(&self) -> Vec<Violation> {
        let name = self.name.as_deref();
        Rules::new()
            .required_text("name", name)
            .text_length("name", name, INGREDIENT_NAME_LEN.0, INGREDIENT_NAME_LEN.1)
            .finish()
    }
}

impl IngredientAddRequest {
    pub fn into_ingredient(self, id: Uuid) -> CatalogResult<Ingredient> {
        self.validate()?;
        Ok(Ingredient {
            id,
            name: self.name.ok_or_else(|| missing("name"))?,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct IngredientUpdateRequest {
    pub id: Option<Uuid>,
    pub name: Option<String>,
}

impl Validate for IngredientUpdateRequest {
    fn violations(&self) -> Vec<Violation> {
        let name = self.name.as_deref();
        Rules::new()
            .non_nil_id("id", self.id)
            .required_text("name", name)
            .text_length("name", name, INGREDIENT_NAME_LEN.0, INGREDIENT_NAME_LEN.1)
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct IngredientResponse {
    pub id: Uuid,
    pub name: String,
}

impl From<&Ingredient> for IngredientResponse {
    fn from(ingredient: &Ingredient) -> Self {
        Self {
            id: ingredient.id,
            name: ingredient.name.clone(),
        }
    }
}

impl From<Ingredient> for IngredientResponse {
    fn from(ingredient: Ingredient) -> Self {
        Self {
            id: ingredient.id,
            name: ingredient.name,
        }
    }
}

// ---------------------------------------------------------------------------
// Recipe ingredients
// ---------------------------------------------------------------------------

/// Attach an ingredient to a recipe, by ingredient id or by ingredient name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RecipeIngredientAddRequest {
    pub recipe_id: Option<Uuid>,
    #[serde(default)]
    pub ingredient_id: Option<Uuid>,
    #[serde(default)]
    pub ingredient_name: Option<String>,
    /// 0.1-10000
    pub quantity: f64,
    pub unit: Option<Unit>,
}

impl RecipeIngredientAddRequest {
    /// Field constraints on the amount and the ingredient name.
    pub fn amount_violations(&self) -> Vec<Violation> {
        Rules::new()
            .non_nil_id("recipe_id", self.recipe_id)
            .max_length(
                "ingredient_name",
                self.ingredient_name.as_deref(),
                INGREDIENT_NAME_LEN.1,
            )
            .in_range("quantity", self.quantity, QUANTITY_RANGE)
            .required("unit", &self.unit)
            .finish()
    }

    /// The ingredient must be named by id or by name, never both.
    pub fn reference_violations(&self) -> Vec<Violation> {
        Rules::new()
            .exactly_one_of(
                "ingredient_id",
                self.ingredient_id,
                "ingredient_name",
                self.ingredient_name.as_deref(),
            )
            .finish()
    }
}

impl Validate for RecipeIngredientAddRequest {
    fn violations(&self) -> Vec<Violation> {
        let mut v = self.amount_violations();
        v.extend(self.reference_violations());
        v
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RecipeIngredientUpdateRequest {
    pub id: Option<Uuid>,
    pub recipe_id: Option<Uuid>,
    pub ingredient_id: Option<Uuid>,
    pub quantity: f64,
    pub unit: Option<Unit>,
}

impl Validate for RecipeIngredientUpdateRequest {
    fn violations(&self) -> Vec<Violation> {
        Rules::new()
            .non_nil_id("id", self.id)
            .non_nil_id("recipe_id", self.recipe_id)
            .non_nil_id("ingredient_id", self.ingredient_id)
            .in_range("quantity", self.quantity, QUANTITY_RANGE)
            .required("unit", &self.unit)
            .finish()
    }
}

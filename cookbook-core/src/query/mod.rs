//! Field-driven filtering and sorting over recipe lists.
//!
//! Callers name a field with a string (e.g. from a query parameter). The
//! string is parsed once into [`RecipeField`]; an unknown name never errors,
//! it just makes the filter or sort a no-op.

pub mod filter;
pub mod sort;

pub use filter::{filter_recipes, RecipeFilter};
pub use sort::sort_recipes;

use chrono::{DateTime, Utc};

use crate::dto::RecipeResponse;
use crate::types::{Category, Recipe};

/// The recipe fields a caller can filter or sort by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecipeField {
    Name,
    Description,
    Author,
    Category,
    PreparationTime,
    Servings,
    Rating,
    RecipeIngredients,
    CreatedAt,
}

impl RecipeField {
    pub const ALL: &'static [RecipeField] = &[
        RecipeField::Name,
        RecipeField::Description,
        RecipeField::Author,
        RecipeField::Category,
        RecipeField::PreparationTime,
        RecipeField::Servings,
        RecipeField::Rating,
        RecipeField::RecipeIngredients,
        RecipeField::CreatedAt,
    ];

    /// PascalCase name, as used by existing clients.
    pub fn as_str(&self) -> &'static str {
        match self {
            RecipeField::Name => "Name",
            RecipeField::Description => "Description",
            RecipeField::Author => "Author",
            RecipeField::Category => "Category",
            RecipeField::PreparationTime => "PreparationTime",
            RecipeField::Servings => "Servings",
            RecipeField::Rating => "Rating",
            RecipeField::RecipeIngredients => "RecipeIngredients",
            RecipeField::CreatedAt => "CreatedAt",
        }
    }

    pub fn snake_case(&self) -> &'static str {
        match self {
            RecipeField::Name => "name",
            RecipeField::Description => "description",
            RecipeField::Author => "author",
            RecipeField::Category => "category",
            RecipeField::PreparationTime => "preparation_time",
            RecipeField::Servings => "servings",
            RecipeField::Rating => "rating",
            RecipeField::RecipeIngredients => "recipe_ingredients",
            RecipeField::CreatedAt => "created_at",
        }
    }

    /// Accepts the PascalCase or snake_case spelling. Matching is exact.
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|f| f.as_str() == s || f.snake_case() == s)
    }
}

/// Read access to the fields filtering and sorting look at.
///
/// Implemented for both the domain aggregate and the response DTO so the
/// same engines run before or after projection.
pub trait RecipeView {
    fn name(&self) -> &str;
    fn description(&self) -> Option<&str>;
    fn author(&self) -> &str;
    fn category(&self) -> Category;
    fn preparation_time(&self) -> i32;
    fn servings(&self) -> i32;
    fn rating(&self) -> f64;
    fn created_at(&self) -> DateTime<Utc>;
    /// Names of attached ingredients whose ingredient row is known.
    fn ingredient_names(&self) -> Vec<&str>;
}

impl RecipeView for Recipe {
    fn name(&self) -> &str {
        &self.name
    }
    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
    fn author(&self) -> &str {
        &self.author
    }
    fn category(&self) -> Category {
        self.category
    }
    fn preparation_time(&self) -> i32 {
        self.preparation_time
    }
    fn servings(&self) -> i32 {
        self.servings
    }
    fn rating(&self) -> f64 {
        self.rating
    }
    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
    fn ingredient_names(&self) -> Vec<&str> {
        self.recipe_ingredients
            .iter()
            .filter_map(|ri| ri.ingredient.as_ref().map(|i| i.name.as_str()))
            .collect()
    }
}

impl RecipeView for RecipeResponse {
    fn name(&self) -> &str {
        &self.name
    }
    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
    fn author(&self) -> &str {
        &self.author
    }
    fn category(&self) -> Category {
        self.category
    }
    fn preparation_time(&self) -> i32 {
        self.preparation_time
    }
    fn servings(&self) -> i32 {
        self.servings
    }
    fn rating(&self) -> f64 {
        self.rating
    }
    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
    fn ingredient_names(&self) -> Vec<&str> {
        self.recipe_ingredients
            .iter()
            .filter_map(|ri| ri.ingredient_name.as_deref())
            .collect()
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_both_spellings() {
        assert_eq!(RecipeField::parse("Name"), Some(RecipeField::Name));
        assert_eq!(
            RecipeField::parse("preparation_time"),
            Some(RecipeField::PreparationTime)
        );
        assert_eq!(
            RecipeField::parse("RecipeIngredients"),
            Some(RecipeField::RecipeIngredients)
        );
    }

    #[test]
    fn test_parse_rejects_unknown_and_other_casing() {
        assert_eq!(RecipeField::parse("Title"), None);
        assert_eq!(RecipeField::parse("NAME"), None);
        assert_eq!(RecipeField::parse(""), None);
    }

    #[test]
    fn test_response_view_matches_entity_view() {
        let recipe = fixtures::with_ingredient(
            fixtures::recipe("Szarlotka", "Julia Nowak", Category::PastriesAndDesserts),
            "Jabłka",
        );
        let response = RecipeResponse::from(&recipe);
        assert_eq!(recipe.ingredient_names(), response.ingredient_names());
        assert_eq!(RecipeView::name(&recipe), RecipeView::name(&response));
    }
}

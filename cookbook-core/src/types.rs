use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Recipe category. Declaration order is the sort order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Breakfast,
    Soups,
    Salads,
    PastriesAndDesserts,
    MainCourse,
    SideDishes,
    Drinks,
    Snacks,
}

impl Category {
    pub const ALL: &'static [Category] = &[
        Category::Breakfast,
        Category::Soups,
        Category::Salads,
        Category::PastriesAndDesserts,
        Category::MainCourse,
        Category::SideDishes,
        Category::Drinks,
        Category::Snacks,
    ];

    /// Human-readable label shown to users and matched by the category filter.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Breakfast => "Śniadania",
            Category::Soups => "Zupy",
            Category::Salads => "Sałatki",
            Category::PastriesAndDesserts => "Wypieki i desery",
            Category::MainCourse => "Dania główne",
            Category::SideDishes => "Dodatki",
            Category::Drinks => "Napoje",
            Category::Snacks => "Przekąski",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Breakfast => "breakfast",
            Category::Soups => "soups",
            Category::Salads => "salads",
            Category::PastriesAndDesserts => "pastries_and_desserts",
            Category::MainCourse => "main_course",
            Category::SideDishes => "side_dishes",
            Category::Drinks => "drinks",
            Category::Snacks => "snacks",
        }
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.as_str() == s)
    }
}

/// Measurement unit for an attached ingredient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Unit {
    Gram,
    Kilogram,
    Milliliter,
    Liter,
    Spoon,
    Teaspoon,
    Piece,
}

impl Unit {
    pub const ALL: &'static [Unit] = &[
        Unit::Gram,
        Unit::Kilogram,
        Unit::Milliliter,
        Unit::Liter,
        Unit::Spoon,
        Unit::Teaspoon,
        Unit::Piece,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Unit::Gram => "g",
            Unit::Kilogram => "kg",
            Unit::Milliliter => "ml",
            Unit::Liter => "l",
            Unit::Spoon => "Łyżka",
            Unit::Teaspoon => "Łyżeczka",
            Unit::Piece => "Sztuka",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Unit::Gram => "gram",
            Unit::Kilogram => "kilogram",
            Unit::Milliliter => "milliliter",
            Unit::Liter => "liter",
            Unit::Spoon => "spoon",
            Unit::Teaspoon => "teaspoon",
            Unit::Piece => "piece",
        }
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|u| u.as_str() == s)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub id: Uuid,
    pub name: String,
}

/// Join row linking a recipe to an ingredient with an amount.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeIngredient {
    pub id: Uuid,
    pub recipe_id: Uuid,
    pub ingredient_id: Uuid,
    pub quantity: f64,
    pub unit: Unit,
    /// Referenced ingredient, populated when the owning recipe is loaded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ingredient: Option<Ingredient>,
}

/// A recipe together with its attached ingredients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub author: String,
    pub category: Category,
    /// Minutes.
    pub preparation_time: i32,
    pub servings: i32,
    pub rating: f64,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub recipe_ingredients: Vec<RecipeIngredient>,
}

impl Recipe {
    pub fn has_ingredient(&self, ingredient_id: Uuid) -> bool {
        self.recipe_ingredients
            .iter()
            .any(|ri| ri.ingredient_id == ingredient_id)
    }
}

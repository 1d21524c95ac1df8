use chrono::{DateTime, Utc};
use cookbook_core::{Category, Ingredient, Recipe, RecipeIngredient, StoreError, Unit};
use diesel::prelude::*;
use uuid::Uuid;

#[derive(Queryable, Selectable, Insertable, Debug)]
#[diesel(table_name = crate::schema::recipes)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct RecipeRow {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub author: String,
    pub category: String,
    pub preparation_time: i32,
    pub servings: i32,
    pub rating: f64,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Editable recipe columns. `None` clears the column.
#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::recipes)]
#[diesel(treat_none_as_null = true)]
pub struct RecipeChanges<'a> {
    pub name: &'a str,
    pub description: Option<&'a str>,
    pub author: &'a str,
    pub category: &'a str,
    pub preparation_time: i32,
    pub servings: i32,
    pub rating: f64,
    pub image_url: Option<&'a str>,
}

#[derive(Queryable, Selectable, Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::ingredients)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct IngredientRow {
    pub id: Uuid,
    pub name: String,
}

#[derive(Queryable, Selectable, Insertable, Debug)]
#[diesel(table_name = crate::schema::recipe_ingredients)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct RecipeIngredientRow {
    pub id: Uuid,
    pub recipe_id: Uuid,
    pub ingredient_id: Uuid,
    pub quantity: f64,
    pub unit: String,
}

impl From<&Recipe> for RecipeRow {
    fn from(recipe: &Recipe) -> Self {
        Self {
            id: recipe.id,
            name: recipe.name.clone(),
            description: recipe.description.clone(),
            author: recipe.author.clone(),
            category: recipe.category.as_str().to_string(),
            preparation_time: recipe.preparation_time,
            servings: recipe.servings,
            rating: recipe.rating,
            image_url: recipe.image_url.clone(),
            created_at: recipe.created_at,
        }
    }
}

impl<'a> From<&'a Recipe> for RecipeChanges<'a> {
    fn from(recipe: &'a Recipe) -> Self {
        Self {
            name: &recipe.name,
            description: recipe.description.as_deref(),
            author: &recipe.author,
            category: recipe.category.as_str(),
            preparation_time: recipe.preparation_time,
            servings: recipe.servings,
            rating: recipe.rating,
            image_url: recipe.image_url.as_deref(),
        }
    }
}

impl RecipeRow {
    /// Builds the aggregate from this row and its (join row, ingredient) pairs.
    pub fn into_recipe(
        self,
        links: Vec<(RecipeIngredientRow, IngredientRow)>,
    ) -> Result<Recipe, StoreError> {
        let category = Category::from_str(&self.category).ok_or_else(|| {
            StoreError::Corrupt(format!("recipe {} has category {:?}", self.id, self.category))
        })?;
        let recipe_ingredients = links
            .into_iter()
            .map(|(link, ingredient)| link.into_link(ingredient))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Recipe {
            id: self.id,
            name: self.name,
            description: self.description,
            author: self.author,
            category,
            preparation_time: self.preparation_time,
            servings: self.servings,
            rating: self.rating,
            image_url: self.image_url,
            created_at: self.created_at,
            recipe_ingredients,
        })
    }
}

impl RecipeIngredientRow {
    fn into_link(self, ingredient: IngredientRow) -> Result<RecipeIngredient, StoreError> {
        let unit = Unit::from_str(&self.unit).ok_or_else(|| {
            StoreError::Corrupt(format!("recipe ingredient {} has unit {:?}", self.id, self.unit))
        })?;
        Ok(RecipeIngredient {
            id: self.id,
            recipe_id: self.recipe_id,
            ingredient_id: self.ingredient_id,
            quantity: self.quantity,
            unit,
            ingredient: Some(ingredient.into()),
        })
    }
}

impl From<&RecipeIngredient> for RecipeIngredientRow {
    fn from(link: &RecipeIngredient) -> Self {
        Self {
            id: link.id,
            recipe_id: link.recipe_id,
            ingredient_id: link.ingredient_id,
            quantity: link.quantity,
            unit: link.unit.as_str().to_string(),
        }
    }
}

impl From<IngredientRow> for Ingredient {
    fn from(row: IngredientRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
        }
    }
}

impl From<&Ingredient> for IngredientRow {
    fn from(ingredient: &Ingredient) -> Self {
        Self {
            id: ingredient.id,
            name: ingredient.name.clone(),
        }
    }
}

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use uuid::Uuid;

use super::{IngredientStore, Predicate, RecipeStore, StoreResult};
use crate::error::StoreError;
use crate::types::{Ingredient, Recipe, RecipeIngredient};

#[derive(Debug, Default)]
struct State {
    /// Recipe rows without their join rows, in insertion order.
    recipes: Vec<Recipe>,
    ingredients: Vec<Ingredient>,
    links: Vec<RecipeIngredient>,
}

impl State {
    fn assemble(&self, row: &Recipe) -> Recipe {
        let mut recipe = row.clone();
        recipe.recipe_ingredients = self
            .links
            .iter()
            .filter(|l| l.recipe_id == row.id)
            .map(|l| {
                let mut link = l.clone();
                link.ingredient = self
                    .ingredients
                    .iter()
                    .find(|i| i.id == l.ingredient_id)
                    .cloned();
                link
            })
            .collect();
        recipe
    }
}

/// Process-local store backing both repository ports.
///
/// Used by tests and by the server when no database is configured.
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: RwLock<State>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> StoreResult<RwLockReadGuard<'_, State>> {
        self.state
            .read()
            .map_err(|_| StoreError::Connection("memory store lock poisoned".to_string()))
    }

    fn write(&self) -> StoreResult<RwLockWriteGuard<'_, State>> {
        self.state
            .write()
            .map_err(|_| StoreError::Connection("memory store lock poisoned".to_string()))
    }
}

impl RecipeStore for MemoryStore {
    fn add(&self, mut recipe: Recipe) -> StoreResult<Recipe> {
        let mut state = self.write()?;
        if state.recipes.iter().any(|r| r.id == recipe.id) {
            return Err(StoreError::Duplicate(format!("recipe {}", recipe.id)));
        }
        recipe.recipe_ingredients.clear();
        state.recipes.push(recipe.clone());
        Ok(state.assemble(&recipe))
    }

    fn get_by_id(&self, id: Uuid) -> StoreResult<Option<Recipe>> {
        let state = self.read()?;
        Ok(state
            .recipes
            .iter()
            .find(|r| r.id == id)
            .map(|r| state.assemble(r)))
    }

    fn get_all(&self) -> StoreResult<Vec<Recipe>> {
        let state = self.read()?;
        Ok(state.recipes.iter().map(|r| state.assemble(r)).collect())
    }

    fn get_filtered(&self, predicate: Predicate<'_, Recipe>) -> StoreResult<Vec<Recipe>> {
        let state = self.read()?;
        Ok(state
            .recipes
            .iter()
            .map(|r| state.assemble(r))
            .filter(|r| predicate(r))
            .collect())
    }

    fn update(&self, mut recipe: Recipe) -> StoreResult<Recipe> {
        let mut state = self.write()?;
        let Some(index) = state.recipes.iter().position(|r| r.id == recipe.id) else {
            return Err(StoreError::Query(format!("recipe {} does not exist", recipe.id)));
        };
        recipe.recipe_ingredients.clear();
        state.recipes[index] = recipe;
        let row = state.recipes[index].clone();
        Ok(state.assemble(&row))
    }

    fn delete(&self, id: Uuid) -> StoreResult<bool> {
        let mut state = self.write()?;
        let before = state.recipes.len();
        state.recipes.retain(|r| r.id != id);
        if state.recipes.len() == before {
            return Ok(false);
        }
        state.links.retain(|l| l.recipe_id != id);
        Ok(true)
    }

    fn insert_recipe_ingredient(&self, mut link: RecipeIngredient) -> StoreResult<Option<Recipe>> {
        let mut state = self.write()?;
        let Some(row) = state.recipes.iter().find(|r| r.id == link.recipe_id).cloned() else {
            return Ok(None);
        };
        if !state.ingredients.iter().any(|i| i.id == link.ingredient_id) {
            return Err(StoreError::Query(format!(
                "ingredient {} does not exist",
                link.ingredient_id
            )));
        }
        if state
            .links
            .iter()
            .any(|l| l.recipe_id == link.recipe_id && l.ingredient_id == link.ingredient_id)
        {
            return Err(StoreError::Duplicate(format!(
                "ingredient {} on recipe {}",
                link.ingredient_id, link.recipe_id
            )));
        }
        link.ingredient = None;
        state.links.push(link);
        Ok(Some(state.assemble(&row)))
    }
}

impl IngredientStore for MemoryStore {
    fn add(&self, ingredient: Ingredient) -> StoreResult<Ingredient> {
        let mut state = self.write()?;
        if state.ingredients.iter().any(|i| i.id == ingredient.id) {
            return Err(StoreError::Duplicate(format!("ingredient {}", ingredient.id)));
        }
        state.ingredients.push(ingredient.clone());
        Ok(ingredient)
    }

    fn get_by_id(&self, id: Uuid) -> StoreResult<Option<Ingredient>> {
        Ok(self.read()?.ingredients.iter().find(|i| i.id == id).cloned())
    }

    fn get_all(&self) -> StoreResult<Vec<Ingredient>> {
        Ok(self.read()?.ingredients.clone())
    }

    fn get_filtered(&self, predicate: Predicate<'_, Ingredient>) -> StoreResult<Vec<Ingredient>> {
        Ok(self
            .read()?
            .ingredients
            .iter()
            .filter(|i| predicate(*i))
            .cloned()
            .collect())
    }

    fn update(&self, ingredient: Ingredient) -> StoreResult<Option<Ingredient>> {
        let mut state = self.write()?;
        match state.ingredients.iter_mut().find(|i| i.id == ingredient.id) {
            Some(existing) => {
                existing.name = ingredient.name;
                Ok(Some(existing.clone()))
            }
            None => Ok(None),
        }
    }

    fn delete(&self, id: Uuid) -> StoreResult<bool> {
        let mut state = self.write()?;
        let before = state.ingredients.len();
        state.ingredients.retain(|i| i.id != id);
        if state.ingredients.len() == before {
            return Ok(false);
        }
        state.links.retain(|l| l.ingredient_id != id);
        Ok(true)
    }
}

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::dto::{RecipeAddRequest, RecipeResponse, RecipeUpdateRequest};
use crate::error::{CatalogError, CatalogResult};
use crate::query::{sort_recipes, RecipeFilter};
use crate::store::RecipeStore;
use crate::types::Recipe;
use crate::validation::Validate;

#[derive(Clone)]
pub struct RecipeService {
    store: Arc<dyn RecipeStore>,
}

impl RecipeService {
    pub fn new(store: Arc<dyn RecipeStore>) -> Self {
        Self { store }
    }

    pub fn add_recipe(&self, request: Option<RecipeAddRequest>) -> CatalogResult<RecipeResponse> {
        let request = request.ok_or_else(|| missing_request("RecipeAddRequest"))?;
        let recipe = request.into_recipe(Uuid::new_v4(), Utc::now())?;
        tracing::debug!(recipe_id = %recipe.id, name = %recipe.name, "adding recipe");

        let saved = self.store.add(recipe)?;
        tracing::info!(recipe_id = %saved.id, "recipe created");
        Ok(RecipeResponse::from(saved))
    }

    pub fn get_recipe_by_id(&self, id: Option<Uuid>) -> CatalogResult<RecipeResponse> {
        let recipe = self.find(id)?;
        Ok(RecipeResponse::from(recipe))
    }

    pub fn get_all_recipes(&self) -> CatalogResult<Vec<RecipeResponse>> {
        Ok(project(self.store.get_all()?))
    }

    /// Recipes whose `search_by` field matches `search_string`.
    ///
    /// A blank or unknown field, or a blank query, returns every recipe.
    pub fn get_filtered_recipes(
        &self,
        search_by: &str,
        search_string: Option<&str>,
    ) -> CatalogResult<Vec<RecipeResponse>> {
        let Some(filter) = RecipeFilter::parse(search_by, search_string) else {
            return self.get_all_recipes();
        };
        let predicate = |recipe: &Recipe| filter.matches(recipe);
        Ok(project(self.store.get_filtered(&predicate)?))
    }

    /// Orders an already loaded list. `None` is a caller bug.
    pub fn get_sorted_recipes(
        &self,
        recipes: Option<Vec<RecipeResponse>>,
        sort_by: &str,
        ascending: bool,
    ) -> CatalogResult<Vec<RecipeResponse>> {
        let recipes = recipes.ok_or_else(|| {
            CatalogError::InvalidArgument("recipe list to sort must be provided".to_string())
        })?;
        Ok(sort_recipes(recipes, sort_by, ascending))
    }

    pub fn update_recipe(
        &self,
        request: Option<RecipeUpdateRequest>,
    ) -> CatalogResult<RecipeResponse> {
        let request = request.ok_or_else(|| missing_request("RecipeUpdateRequest"))?;
        request.validate()?;
        let mut recipe = self.find(request.id)?;
        tracing::debug!(recipe_id = %recipe.id, "updating recipe");

        request.apply_to(&mut recipe)?;
        let saved = self.store.update(recipe)?;
        Ok(RecipeResponse::from(saved))
    }

    pub fn delete_recipe(&self, id: Option<Uuid>) -> CatalogResult<()> {
        let id = id.ok_or_else(|| CatalogError::InvalidArgument("recipe id is required".to_string()))?;
        if !self.store.delete(id)? {
            tracing::warn!(recipe_id = %id, "delete of unknown recipe");
            return Err(CatalogError::not_found("Recipe", id));
        }
        tracing::info!(recipe_id = %id, "recipe deleted");
        Ok(())
    }

    fn find(&self, id: Option<Uuid>) -> CatalogResult<Recipe> {
        let id = id.ok_or_else(|| CatalogError::InvalidArgument("recipe id is required".to_string()))?;
        self.store.get_by_id(id)?.ok_or_else(|| {
            tracing::warn!(recipe_id = %id, "recipe lookup failed");
            CatalogError::not_found("Recipe", id)
        })
    }
}

fn project(recipes: Vec<Recipe>) -> Vec<RecipeResponse> {
    recipes.into_iter().map(RecipeResponse::from).collect()
}

pub(super) fn missing_request(name: &str) -> CatalogError {
    CatalogError::InvalidArgument(format!("{} must be provided", name))
}

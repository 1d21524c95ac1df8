use std::sync::Arc;

use uuid::Uuid;

use super::recipes::missing_request;
use super::IngredientService;
use crate::dto::{RecipeIngredientAddRequest, RecipeIngredientUpdateRequest, RecipeResponse};
use crate::error::{CatalogError, CatalogResult, StoreError};
use crate::store::RecipeStore;
use crate::types::RecipeIngredient;
use crate::validation::Violation;

/// Attaches ingredients to recipes.
///
/// The steps run as separate store calls. If the join insert fails after a
/// new ingredient was created, that ingredient stays. The store rejects a
/// second row for the same (recipe, ingredient) pair, which also catches two
/// attachments racing past the conflict check.
#[derive(Clone)]
pub struct RecipeIngredientService {
    recipes: Arc<dyn RecipeStore>,
    ingredients: IngredientService,
}

impl RecipeIngredientService {
    pub fn new(recipes: Arc<dyn RecipeStore>, ingredients: IngredientService) -> Self {
        Self {
            recipes,
            ingredients,
        }
    }

    pub fn add_recipe_ingredient(
        &self,
        request: Option<RecipeIngredientAddRequest>,
    ) -> CatalogResult<RecipeResponse> {
        let request = request.ok_or_else(|| missing_request("RecipeIngredientAddRequest"))?;
        let Some(recipe_id) = request.recipe_id.filter(|id| !id.is_nil()) else {
            return Err(CatalogError::Validation(vec![Violation::new(
                "recipe_id",
                "must be a non-empty id",
            )]));
        };

        let Some(recipe) = self.recipes.get_by_id(recipe_id)? else {
            tracing::warn!(%recipe_id, "attach to unknown recipe");
            return Err(CatalogError::not_found("Recipe", recipe_id));
        };

        let violations = request.amount_violations();
        if !violations.is_empty() {
            return Err(CatalogError::Validation(violations));
        }
        let violations = request.reference_violations();
        if !violations.is_empty() {
            return Err(CatalogError::Validation(violations));
        }
        let Some(unit) = request.unit else {
            return Err(CatalogError::Validation(vec![Violation::new(
                "unit",
                "is required",
            )]));
        };

        let name = request.ingredient_name.as_deref();
        if let Some(existing) = self.ingredients.lookup(name, request.ingredient_id)? {
            if recipe.has_ingredient(existing) {
                tracing::warn!(%recipe_id, ingredient_id = %existing, "ingredient already attached");
                return Err(already_attached());
            }
        }

        let ingredient_id = self.ingredients.resolve(name, request.ingredient_id)?;
        let link = RecipeIngredient {
            id: Uuid::new_v4(),
            recipe_id,
            ingredient_id,
            quantity: request.quantity,
            unit,
            ingredient: None,
        };
        tracing::debug!(%recipe_id, %ingredient_id, link_id = %link.id, "attaching ingredient");

        match self.recipes.insert_recipe_ingredient(link) {
            Ok(Some(updated)) => {
                tracing::info!(%recipe_id, %ingredient_id, "ingredient attached");
                Ok(RecipeResponse::from(updated))
            }
            Ok(None) => Err(CatalogError::not_found("Recipe", recipe_id)),
            Err(StoreError::Duplicate(_)) => {
                tracing::warn!(%recipe_id, %ingredient_id, "ingredient already attached");
                Err(already_attached())
            }
            Err(e) => Err(e.into()),
        }
    }

    pub fn update_recipe_ingredient(
        &self,
        _request: Option<RecipeIngredientUpdateRequest>,
    ) -> CatalogResult<RecipeResponse> {
        Err(CatalogError::NotImplemented("updating a recipe ingredient"))
    }

    pub fn delete_recipe_ingredient(&self, _id: Option<Uuid>) -> CatalogResult<()> {
        Err(CatalogError::NotImplemented("deleting a recipe ingredient"))
    }
}

fn already_attached() -> CatalogError {
    CatalogError::Conflict("Ingredient already attached to recipe".to_string())
}

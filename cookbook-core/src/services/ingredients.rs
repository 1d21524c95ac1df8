use std::sync::Arc;

use uuid::Uuid;

use super::recipes::missing_request;
use crate::dto::{IngredientAddRequest, IngredientResponse, IngredientUpdateRequest};
use crate::error::{CatalogError, CatalogResult};
use crate::store::IngredientStore;
use crate::types::Ingredient;
use crate::validation::{is_present_id, Validate};

#[derive(Clone)]
pub struct IngredientService {
    store: Arc<dyn IngredientStore>,
}

impl IngredientService {
    pub fn new(store: Arc<dyn IngredientStore>) -> Self {
        Self { store }
    }

    pub fn add_ingredient(
        &self,
        request: Option<IngredientAddRequest>,
    ) -> CatalogResult<IngredientResponse> {
        let request = request.ok_or_else(|| missing_request("IngredientAddRequest"))?;
        let ingredient = request.into_ingredient(Uuid::new_v4())?;
        Ok(self.create(ingredient)?.into())
    }

    pub fn get_ingredient_by_id(&self, id: Option<Uuid>) -> CatalogResult<IngredientResponse> {
        let id = required_id(id)?;
        match self.store.get_by_id(id)? {
            Some(ingredient) => Ok(ingredient.into()),
            None => Err(CatalogError::not_found("Ingredient", id)),
        }
    }

    pub fn get_all_ingredients(&self) -> CatalogResult<Vec<IngredientResponse>> {
        Ok(project(self.store.get_all()?))
    }

    /// Ingredients whose name contains `search`, ignoring case. Blank returns all.
    pub fn get_filtered_ingredients(
        &self,
        search: Option<&str>,
    ) -> CatalogResult<Vec<IngredientResponse>> {
        let Some(needle) = search.filter(|s| !s.trim().is_empty()) else {
            return self.get_all_ingredients();
        };
        let needle = needle.to_lowercase();
        let predicate = |i: &Ingredient| i.name.to_lowercase().contains(&needle);
        Ok(project(self.store.get_filtered(&predicate)?))
    }

    pub fn update_ingredient(
        &self,
        request: Option<IngredientUpdateRequest>,
    ) -> CatalogResult<IngredientResponse> {
        let request = request.ok_or_else(|| missing_request("IngredientUpdateRequest"))?;
        request.validate()?;
        let (Some(id), Some(name)) = (request.id, request.name) else {
            return Err(CatalogError::InvalidArgument(
                "validated ingredient update lost its fields".to_string(),
            ));
        };

        tracing::debug!(ingredient_id = %id, "updating ingredient");
        match self.store.update(Ingredient { id, name })? {
            Some(updated) => Ok(updated.into()),
            None => Err(CatalogError::not_found("Ingredient", id)),
        }
    }

    /// Returns false when there was nothing to delete.
    pub fn delete_ingredient(&self, id: Option<Uuid>) -> CatalogResult<bool> {
        let id = required_id(id)?;
        let deleted = self.store.delete(id)?;
        if deleted {
            tracing::info!(ingredient_id = %id, "ingredient deleted");
        }
        Ok(deleted)
    }

    /// Turns an ingredient reference into the id of a stored ingredient.
    ///
    /// An id wins over a name and is only checked for existence. A name is
    /// matched against stored names ignoring case and surrounding whitespace;
    /// with no match a new ingredient is created under the trimmed name.
    /// Passing neither is a caller bug.
    pub fn resolve(&self, name: Option<&str>, id: Option<Uuid>) -> CatalogResult<Uuid> {
        if let Some(id) = id.filter(|id| !id.is_nil()) {
            return match self.store.get_by_id(id)? {
                Some(_) => Ok(id),
                None => {
                    tracing::warn!(ingredient_id = %id, "ingredient lookup failed");
                    Err(CatalogError::not_found("Ingredient", id))
                }
            };
        }

        let Some(name) = name.filter(|n| !n.trim().is_empty()) else {
            return Err(CatalogError::InvalidOperation(
                "an ingredient id or name is required to resolve an ingredient".to_string(),
            ));
        };
        if let Some(existing) = self.find_by_name(name)? {
            return Ok(existing.id);
        }

        let ingredient = IngredientAddRequest {
            name: Some(name.trim().to_string()),
        }
        .into_ingredient(Uuid::new_v4())?;
        Ok(self.create(ingredient)?.id)
    }

    /// The id `resolve` would return without creating anything, or `None`
    /// if it would have to create a new ingredient.
    pub fn lookup(&self, name: Option<&str>, id: Option<Uuid>) -> CatalogResult<Option<Uuid>> {
        if is_present_id(id) {
            return Ok(id);
        }
        match name.filter(|n| !n.trim().is_empty()) {
            Some(name) => Ok(self.find_by_name(name)?.map(|i| i.id)),
            None => Ok(None),
        }
    }

    fn find_by_name(&self, name: &str) -> CatalogResult<Option<Ingredient>> {
        let wanted = name.trim().to_lowercase();
        let predicate = |i: &Ingredient| i.name.trim().to_lowercase() == wanted;
        Ok(self.store.get_filtered(&predicate)?.into_iter().next())
    }

    fn create(&self, ingredient: Ingredient) -> CatalogResult<Ingredient> {
        tracing::debug!(ingredient_id = %ingredient.id, name = %ingredient.name, "adding ingredient");
        let saved = self.store.add(ingredient)?;
        tracing::info!(ingredient_id = %saved.id, name = %saved.name, "ingredient created");
        Ok(saved)
    }
}

fn required_id(id: Option<Uuid>) -> CatalogResult<Uuid> {
    id.ok_or_else(|| CatalogError::InvalidArgument("ingredient id is required".to_string()))
}

fn project(ingredients: Vec<Ingredient>) -> Vec<IngredientResponse> {
    ingredients.into_iter().map(IngredientResponse::from).collect()
}

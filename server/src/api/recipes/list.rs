use crate::api::{error_response, AppState, ErrorResponse};
use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};
use cookbook_core::dto::RecipeResponse;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Deserialize, IntoParams)]
pub struct ListRecipesParams {
    /// Field to search in: Name, Description, Author, Category,
    /// PreparationTime, Servings, Rating or RecipeIngredients.
    /// snake_case spellings are accepted too.
    pub search_by: Option<String>,
    /// Text to look for. Numeric fields must match their printed value exactly.
    pub q: Option<String>,
    /// Field to order by; same names as `search_by` plus CreatedAt.
    pub sort_by: Option<String>,
    /// Sort direction (default: true)
    pub ascending: Option<bool>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ListRecipesResponse {
    pub recipes: Vec<RecipeResponse>,
}

#[utoipa::path(
    get,
    path = "/api/recipes",
    tag = "recipes",
    params(ListRecipesParams),
    responses(
        (status = 200, description = "Matching recipes", body = ListRecipesResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
pub async fn list_recipes(
    State(catalog): State<AppState>,
    Query(params): Query<ListRecipesParams>,
) -> impl IntoResponse {
    let search_by = params.search_by.as_deref().unwrap_or_default();
    let recipes = match catalog
        .recipes
        .get_filtered_recipes(search_by, params.q.as_deref())
    {
        Ok(recipes) => recipes,
        Err(e) => return error_response(e, "list recipes"),
    };

    let recipes = match params.sort_by.as_deref() {
        Some(sort_by) => match catalog.recipes.get_sorted_recipes(
            Some(recipes),
            sort_by,
            params.ascending.unwrap_or(true),
        ) {
            Ok(sorted) => sorted,
            Err(e) => return error_response(e, "sort recipes"),
        },
        None => recipes,
    };

    Json(ListRecipesResponse { recipes }).into_response()
}

use crate::api::{error_response, AppState, ErrorResponse};
use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};
use cookbook_core::dto::IngredientResponse;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Deserialize, IntoParams)]
pub struct ListIngredientsParams {
    /// Case-insensitive substring of the ingredient name
    pub q: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ListIngredientsResponse {
    pub ingredients: Vec<IngredientResponse>,
}

#[utoipa::path(
    get,
    path = "/api/ingredients",
    tag = "ingredients",
    params(ListIngredientsParams),
    responses(
        (status = 200, description = "Matching ingredients", body = ListIngredientsResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
pub async fn list_ingredients(
    State(catalog): State<AppState>,
    Query(params): Query<ListIngredientsParams>,
) -> impl IntoResponse {
    match catalog
        .ingredients
        .get_filtered_ingredients(params.q.as_deref())
    {
        Ok(ingredients) => Json(ListIngredientsResponse { ingredients }).into_response(),
        Err(e) => error_response(e, "list ingredients"),
    }
}

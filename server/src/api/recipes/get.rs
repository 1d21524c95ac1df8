use crate::api::{error_response, AppState, ErrorResponse};
use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use cookbook_core::dto::RecipeResponse;
use uuid::Uuid;

#[utoipa::path(
    get,
    path = "/api/recipes/{id}",
    tag = "recipes",
    params(
        ("id" = Uuid, Path, description = "Recipe ID")
    ),
    responses(
        (status = 200, description = "Recipe details", body = RecipeResponse),
        (status = 404, description = "Recipe not found", body = ErrorResponse)
    )
)]
pub async fn get_recipe(State(catalog): State<AppState>, Path(id): Path<Uuid>) -> impl IntoResponse {
    match catalog.recipes.get_recipe_by_id(Some(id)) {
        Ok(recipe) => Json(recipe).into_response(),
        Err(e) => error_response(e, "fetch recipe"),
    }
}

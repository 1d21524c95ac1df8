use crate::api::{error_response, AppState, ErrorResponse};
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use cookbook_core::dto::{RecipeAddRequest, RecipeResponse};

#[utoipa::path(
    post,
    path = "/api/recipes",
    tag = "recipes",
    request_body = RecipeAddRequest,
    responses(
        (status = 201, description = "Recipe created successfully", body = RecipeResponse),
        (status = 400, description = "Invalid request", body = ErrorResponse)
    )
)]
pub async fn create_recipe(
    State(catalog): State<AppState>,
    Json(request): Json<RecipeAddRequest>,
) -> impl IntoResponse {
    match catalog.recipes.add_recipe(Some(request)) {
        Ok(recipe) => (StatusCode::CREATED, Json(recipe)).into_response(),
        Err(e) => error_response(e, "create recipe"),
    }
}

use crate::api::{error_response, AppState, ErrorResponse};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use cookbook_core::dto::{RecipeIngredientAddRequest, RecipeResponse};
use uuid::Uuid;

/// Attaches an ingredient, given by id or by name, to the recipe.
///
/// An unknown name creates the ingredient. The recipe id in the path wins
/// over one in the body.
#[utoipa::path(
    post,
    path = "/api/recipes/{id}/ingredients",
    tag = "recipes",
    params(
        ("id" = Uuid, Path, description = "Recipe ID")
    ),
    request_body = RecipeIngredientAddRequest,
    responses(
        (status = 201, description = "Ingredient attached; the updated recipe", body = RecipeResponse),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 404, description = "Recipe or ingredient not found", body = ErrorResponse),
        (status = 409, description = "Ingredient already attached", body = ErrorResponse)
    )
)]
pub async fn add_recipe_ingredient(
    State(catalog): State<AppState>,
    Path(id): Path<Uuid>,
    Json(mut request): Json<RecipeIngredientAddRequest>,
) -> impl IntoResponse {
    request.recipe_id = Some(id);
    match catalog.recipe_ingredients.add_recipe_ingredient(Some(request)) {
        Ok(recipe) => (StatusCode::CREATED, Json(recipe)).into_response(),
        Err(e) => error_response(e, "attach ingredient"),
    }
}

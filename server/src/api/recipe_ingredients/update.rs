use crate::api::{error_response, AppState, ErrorResponse};
use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use cookbook_core::dto::{RecipeIngredientUpdateRequest, RecipeResponse};
use uuid::Uuid;

#[utoipa::path(
    put,
    path = "/api/recipes/{id}/ingredients/{ri_id}",
    tag = "recipes",
    params(
        ("id" = Uuid, Path, description = "Recipe ID"),
        ("ri_id" = Uuid, Path, description = "Recipe ingredient ID")
    ),
    request_body = RecipeIngredientUpdateRequest,
    responses(
        (status = 200, description = "Updated recipe", body = RecipeResponse),
        (status = 501, description = "Not implemented yet", body = ErrorResponse)
    )
)]
pub async fn update_recipe_ingredient(
    State(catalog): State<AppState>,
    Path((id, ri_id)): Path<(Uuid, Uuid)>,
    Json(mut request): Json<RecipeIngredientUpdateRequest>,
) -> impl IntoResponse {
    request.recipe_id = Some(id);
    request.id = Some(ri_id);
    match catalog
        .recipe_ingredients
        .update_recipe_ingredient(Some(request))
    {
        Ok(recipe) => Json(recipe).into_response(),
        Err(e) => error_response(e, "update recipe ingredient"),
    }
}

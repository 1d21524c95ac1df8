use crate::api::{error_response, AppState, ErrorResponse};
use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use cookbook_core::dto::{RecipeResponse, RecipeUpdateRequest};
use uuid::Uuid;

/// Replaces every editable field. The id in the path wins over one in the body.
#[utoipa::path(
    put,
    path = "/api/recipes/{id}",
    tag = "recipes",
    params(
        ("id" = Uuid, Path, description = "Recipe ID")
    ),
    request_body = RecipeUpdateRequest,
    responses(
        (status = 200, description = "Recipe updated", body = RecipeResponse),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 404, description = "Recipe not found", body = ErrorResponse)
    )
)]
pub async fn update_recipe(
    State(catalog): State<AppState>,
    Path(id): Path<Uuid>,
    Json(mut request): Json<RecipeUpdateRequest>,
) -> impl IntoResponse {
    request.id = Some(id);
    match catalog.recipes.update_recipe(Some(request)) {
        Ok(recipe) => Json(recipe).into_response(),
        Err(e) => error_response(e, "update recipe"),
    }
}

use crate::api::{error_response, AppState, ErrorResponse};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use uuid::Uuid;

#[utoipa::path(
    delete,
    path = "/api/recipes/{id}/ingredients/{ri_id}",
    tag = "recipes",
    params(
        ("id" = Uuid, Path, description = "Recipe ID"),
        ("ri_id" = Uuid, Path, description = "Recipe ingredient ID")
    ),
    responses(
        (status = 204, description = "Ingredient detached"),
        (status = 501, description = "Not implemented yet", body = ErrorResponse)
    )
)]
pub async fn delete_recipe_ingredient(
    State(catalog): State<AppState>,
    Path((_id, ri_id)): Path<(Uuid, Uuid)>,
) -> impl IntoResponse {
    match catalog.recipe_ingredients.delete_recipe_ingredient(Some(ri_id)) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => error_response(e, "delete recipe ingredient"),
    }
}

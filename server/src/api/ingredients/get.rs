use crate::api::{error_response, AppState, ErrorResponse};
use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use cookbook_core::dto::IngredientResponse;
use uuid::Uuid;

#[utoipa::path(
    get,
    path = "/api/ingredients/{id}",
    tag = "ingredients",
    params(
        ("id" = Uuid, Path, description = "Ingredient ID")
    ),
    responses(
        (status = 200, description = "Ingredient", body = IngredientResponse),
        (status = 404, description = "Ingredient not found", body = ErrorResponse)
    )
)]
pub async fn get_ingredient(
    State(catalog): State<AppState>,
    Path(id): Path<Uuid>,
) -> impl IntoResponse {
    match catalog.ingredients.get_ingredient_by_id(Some(id)) {
        Ok(ingredient) => Json(ingredient).into_response(),
        Err(e) => error_response(e, "fetch ingredient"),
    }
}

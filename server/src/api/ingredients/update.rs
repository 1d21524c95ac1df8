use crate::api::{error_response, AppState, ErrorResponse};
use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use cookbook_core::dto::{IngredientResponse, IngredientUpdateRequest};
use uuid::Uuid;

#[utoipa::path(
    put,
    path = "/api/ingredients/{id}",
    tag = "ingredients",
    params(
        ("id" = Uuid, Path, description = "Ingredient ID")
    ),
    request_body = IngredientUpdateRequest,
    responses(
        (status = 200, description = "Ingredient renamed", body = IngredientResponse),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 404, description = "Ingredient not found", body = ErrorResponse)
    )
)]
pub async fn update_ingredient(
    State(catalog): State<AppState>,
    Path(id): Path<Uuid>,
    Json(mut request): Json<IngredientUpdateRequest>,
) -> impl IntoResponse {
    request.id = Some(id);
    match catalog.ingredients.update_ingredient(Some(request)) {
        Ok(ingredient) => Json(ingredient).into_response(),
        Err(e) => error_response(e, "update ingredient"),
    }
}

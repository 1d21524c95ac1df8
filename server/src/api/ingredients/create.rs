use crate::api::{error_response, AppState, ErrorResponse};
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use cookbook_core::dto::{IngredientAddRequest, IngredientResponse};

#[utoipa::path(
    post,
    path = "/api/ingredients",
    tag = "ingredients",
    request_body = IngredientAddRequest,
    responses(
        (status = 201, description = "Ingredient created", body = IngredientResponse),
        (status = 400, description = "Invalid request", body = ErrorResponse)
    )
)]
pub async fn create_ingredient(
    State(catalog): State<AppState>,
    Json(request): Json<IngredientAddRequest>,
) -> impl IntoResponse {
    match catalog.ingredients.add_ingredient(Some(request)) {
        Ok(ingredient) => (StatusCode::CREATED, Json(ingredient)).into_response(),
        Err(e) => error_response(e, "create ingredient"),
    }
}

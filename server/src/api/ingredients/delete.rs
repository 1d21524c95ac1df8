use crate::api::{error_response, AppState, ErrorResponse};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

#[utoipa::path(
    delete,
    path = "/api/ingredients/{id}",
    tag = "ingredients",
    params(
        ("id" = Uuid, Path, description = "Ingredient ID")
    ),
    responses(
        (status = 204, description = "Ingredient deleted and detached from every recipe"),
        (status = 404, description = "Ingredient not found", body = ErrorResponse)
    )
)]
pub async fn delete_ingredient(
    State(catalog): State<AppState>,
    Path(id): Path<Uuid>,
) -> impl IntoResponse {
    match catalog.ingredients.delete_ingredient(Some(id)) {
        Ok(true) => StatusCode::NO_CONTENT.into_response(),
        Ok(false) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: format!("Ingredient not found: {}", id),
            }),
        )
            .into_response(),
        Err(e) => error_response(e, "delete ingredient"),
    }
}

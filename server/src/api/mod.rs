pub mod ingredients;
pub mod recipe_ingredients;
pub mod recipes;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use cookbook_core::validation::Violation;
use cookbook_core::{Catalog, CatalogError, Category, Unit};
use serde::Serialize;
use std::sync::Arc;
use utoipa::{OpenApi, ToSchema};

/// Application state shared across all handlers
pub type AppState = Arc<Catalog>;

/// Shared error response used by all endpoints
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Status code a failed catalog operation is reported with.
pub fn status_for(err: &CatalogError) -> StatusCode {
    match err {
        CatalogError::NotFound(_) => StatusCode::NOT_FOUND,
        CatalogError::Validation(_) => StatusCode::BAD_REQUEST,
        CatalogError::Conflict(_) => StatusCode::CONFLICT,
        CatalogError::NotImplemented(_) => StatusCode::NOT_IMPLEMENTED,
        CatalogError::InvalidArgument(_)
        | CatalogError::InvalidOperation(_)
        | CatalogError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Turns a failed catalog operation into an `ErrorResponse`.
///
/// Server-side faults are logged and hidden behind a generic message.
pub fn error_response(err: CatalogError, action: &str) -> Response {
    let status = status_for(&err);
    let error = if status.is_server_error() && status != StatusCode::NOT_IMPLEMENTED {
        tracing::error!(error = %err, "Failed to {}", action);
        format!("Failed to {}", action)
    } else {
        err.to_string()
    };
    (status, Json(ErrorResponse { error })).into_response()
}

/// All API routes, without middleware.
pub fn router(state: AppState) -> Router {
    Router::new()
        .nest("/api/recipes", recipes::router())
        .nest("/api/ingredients", ingredients::router())
        .route("/api-docs/openapi.json", get(openapi_json))
        .with_state(state)
}

async fn openapi_json() -> impl IntoResponse {
    Json(openapi())
}

/// Generate the complete OpenAPI spec by merging all module specs
pub fn openapi() -> utoipa::openapi::OpenApi {
    #[derive(OpenApi)]
    #[openapi(
        info(title = "Cookbook API"),
        components(schemas(ErrorResponse, Violation, Category, Unit))
    )]
    struct BaseApi;

    let mut spec = BaseApi::openapi();

    let modules: Vec<utoipa::openapi::OpenApi> = vec![
        recipes::ApiDoc::openapi(),
        recipe_ingredients::ApiDoc::openapi(),
        ingredients::ApiDoc::openapi(),
    ];

    for module_spec in modules {
        spec.paths.paths.extend(module_spec.paths.paths);

        if let Some(module_components) = module_spec.components {
            if let Some(spec_components) = spec.components.as_mut() {
                spec_components.schemas.extend(module_components.schemas);
            }
        }
    }

    spec
}

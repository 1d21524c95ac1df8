pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use crate::api::AppState;
use axum::routing::get;
use axum::Router;
use cookbook_core::dto::{IngredientAddRequest, IngredientResponse, IngredientUpdateRequest};
use utoipa::OpenApi;

/// Returns the router for /api/ingredients endpoints (mounted at /api/ingredients)
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(list::list_ingredients).post(create::create_ingredient),
        )
        .route(
            "/{id}",
            get(get::get_ingredient)
                .put(update::update_ingredient)
                .delete(delete::delete_ingredient),
        )
}

#[derive(OpenApi)]
#[openapi(
    paths(
        list::list_ingredients,
        create::create_ingredient,
        get::get_ingredient,
        update::update_ingredient,
        delete::delete_ingredient
    ),
    components(schemas(
        list::ListIngredientsResponse,
        IngredientAddRequest,
        IngredientUpdateRequest,
        IngredientResponse,
    ))
)]
pub struct ApiDoc;

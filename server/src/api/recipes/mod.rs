pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use crate::api::recipe_ingredients;
use crate::api::AppState;
use axum::routing::{get, post, put};
use axum::Router;
use cookbook_core::dto::{
    RecipeAddRequest, RecipeIngredientResponse, RecipeResponse, RecipeUpdateRequest,
};
use utoipa::OpenApi;

/// Returns the router for /api/recipes endpoints (mounted at /api/recipes)
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list::list_recipes).post(create::create_recipe))
        .route(
            "/{id}",
            get(get::get_recipe)
                .put(update::update_recipe)
                .delete(delete::delete_recipe),
        )
        .route(
            "/{id}/ingredients",
            post(recipe_ingredients::create::add_recipe_ingredient),
        )
        .route(
            "/{id}/ingredients/{ri_id}",
            put(recipe_ingredients::update::update_recipe_ingredient)
                .delete(recipe_ingredients::delete::delete_recipe_ingredient),
        )
}

#[derive(OpenApi)]
#[openapi(
    paths(
        list::list_recipes,
        create::create_recipe,
        get::get_recipe,
        update::update_recipe,
        delete::delete_recipe
    ),
    components(schemas(
        list::ListRecipesResponse,
        RecipeAddRequest,
        RecipeUpdateRequest,
        RecipeResponse,
        RecipeIngredientResponse,
    ))
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use crate::api::test_support::{app, send};
    use axum::http::{Method, StatusCode};
    use serde_json::{json, Value};

    fn pancakes() -> Value {
        json!({
            "name": "Naleśniki klasyczne",
            "description": "Cienkie naleśniki z mąki, mleka i jajek.",
            "author": "Jan Kowalski",
            "category": "breakfast",
            "preparation_time": 20,
            "servings": 4,
            "rating": 4.5
        })
    }

    #[tokio::test]
    async fn test_create_then_get() {
        let app = app();
        let (status, created) = send(&app, Method::POST, "/api/recipes", Some(pancakes())).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created["category_label"], "Śniadania");

        let id = created["id"].as_str().unwrap();
        let (status, fetched) = send(&app, Method::GET, &format!("/api/recipes/{}", id), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn test_create_invalid_is_bad_request() {
        let mut body = pancakes();
        body["servings"] = json!(50);
        let (status, error) = send(&app(), Method::POST, "/api/recipes", Some(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(error["error"].as_str().unwrap().contains("servings"));
    }

    #[tokio::test]
    async fn test_get_unknown_is_not_found() {
        let (status, error) = send(
            &app(),
            Method::GET,
            "/api/recipes/00000000-0000-4000-8000-000000000001",
            None,
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(error["error"].as_str().unwrap().starts_with("Recipe not found"));
    }

    #[tokio::test]
    async fn test_list_filters_and_sorts() {
        let app = app();
        for (name, author) in [
            ("Spaghetti Bolognese", "Luca Rossi"),
            ("Sałatka Cezar", "Anna Nowak"),
            ("Szarlotka", "Julia Nowak"),
        ] {
            let mut body = pancakes();
            body["name"] = json!(name);
            body["author"] = json!(author);
            let (status, _) = send(&app, Method::POST, "/api/recipes", Some(body)).await;
            assert_eq!(status, StatusCode::CREATED);
        }

        let (status, list) = send(
            &app,
            Method::GET,
            "/api/recipes?search_by=Author&q=nowak&sort_by=Name&ascending=false",
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let names: Vec<&str> = list["recipes"]
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["Szarlotka", "Sałatka Cezar"]);

        let (_, list) = send(&app, Method::GET, "/api/recipes", None).await;
        assert_eq!(list["recipes"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_update_uses_path_id() {
        let app = app();
        let (_, created) = send(&app, Method::POST, "/api/recipes", Some(pancakes())).await;
        let id = created["id"].as_str().unwrap();

        let mut body = pancakes();
        body["name"] = json!("Naleśniki z serem");
        let (status, updated) =
            send(&app, Method::PUT, &format!("/api/recipes/{}", id), Some(body)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(updated["id"], created["id"]);
        assert_eq!(updated["name"], "Naleśniki z serem");
        assert_eq!(updated["created_at"], created["created_at"]);
    }

    #[tokio::test]
    async fn test_delete() {
        let app = app();
        let (_, created) = send(&app, Method::POST, "/api/recipes", Some(pancakes())).await;
        let uri = format!("/api/recipes/{}", created["id"].as_str().unwrap());

        let (status, _) = send(&app, Method::DELETE, &uri, None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        let (status, _) = send(&app, Method::DELETE, &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}

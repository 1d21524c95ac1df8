//! Ingredient rows of a recipe. Routes are mounted by the recipes router.

pub mod create;
pub mod delete;
pub mod update;

use cookbook_core::dto::{RecipeIngredientAddRequest, RecipeIngredientUpdateRequest};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        create::add_recipe_ingredient,
        update::update_recipe_ingredient,
        delete::delete_recipe_ingredient
    ),
    components(schemas(RecipeIngredientAddRequest, RecipeIngredientUpdateRequest))
)]
pub struct ApiDoc;

use super::handlers::create_recipe::{__path_create_recipe, create_recipe};
use super::handlers::delete_recipe::{__path_delete_recipe, delete_recipe};
use super::handlers::get_recipe::{__path_get_recipe, get_recipe};
use super::handlers::list_recipes::{__path_list_recipes, list_recipes};
use super::handlers::update_recipe::{__path_update_recipe, update_recipe};
use crate::application::http::server::app_state::AppState;

use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(create_recipe, list_recipes, get_recipe, update_recipe, delete_recipe))]
pub struct RecipeApiDoc;

pub fn recipe_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(
            &format!("{root_path}/recipes"),
            get(list_recipes).post(create_recipe),
        )
        .route(
            &format!("{root_path}/recipes/{{recipe_id}}"),
            get(get_recipe).patch(update_recipe).delete(delete_recipe),
        )
}

use super::handlers::approve_menu::{__path_approve_menu, approve_menu};
use super::handlers::generate_menu::{__path_generate_menu, generate_menu};
use super::handlers::get_alternatives::{__path_get_alternatives, get_alternatives};
use super::handlers::get_current_menu::{__path_get_current_menu, get_current_menu};
use super::handlers::get_menu::{__path_get_menu, get_menu};
use super::handlers::get_menu_history::{__path_get_menu_history, get_menu_history};
use super::handlers::lock_meal::{__path_lock_meal, lock_meal};
use super::handlers::replace_meal::{__path_replace_meal, replace_meal};
use crate::application::http::server::app_state::AppState;

use axum::{
    Router,
    routing::{get, patch, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(
    generate_menu,
    get_current_menu,
    get_menu_history,
    get_menu,
    get_alternatives,
    replace_meal,
    lock_meal,
    approve_menu
))]
pub struct MenuApiDoc;

pub fn menu_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(&format!("{root_path}/menus/generate"), post(generate_menu))
        .route(&format!("{root_path}/menus/current"), get(get_current_menu))
        .route(&format!("{root_path}/menus/history"), get(get_menu_history))
        .route(&format!("{root_path}/menus/{{menu_id}}"), get(get_menu))
        .route(
            &format!("{root_path}/menus/{{menu_id}}/meals/{{meal_id}}/alternatives"),
            post(get_alternatives),
        )
        .route(
            &format!("{root_path}/menus/{{menu_id}}/meals/{{meal_id}}"),
            patch(replace_meal),
        )
        .route(
            &format!("{root_path}/menus/{{menu_id}}/meals/{{meal_id}}/lock"),
            patch(lock_meal),
        )
        .route(
            &format!("{root_path}/menus/{{menu_id}}/approve"),
            post(approve_menu),
        )
}

use super::handlers::get_family::{__path_get_family, get_family};
use super::handlers::save_family::{__path_save_family, save_family};
use crate::application::http::server::app_state::AppState;

use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_family, save_family))]
pub struct FamilyApiDoc;

pub fn family_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/family", state.args.server.root_path),
        get(get_family).put(save_family),
    )
}

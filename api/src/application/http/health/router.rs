use super::handlers::health_check::{__path_health_check, health_check};
use crate::application::http::server::app_state::AppState;

use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(health_check))]
pub struct HealthApiDoc;

pub fn health_routes(root_path: &str) -> Router<AppState> {
    Router::new().route(&format!("{root_path}/health"), get(health_check))
}

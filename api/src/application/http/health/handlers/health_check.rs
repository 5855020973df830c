use axum::extract::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{api_entities::response::Response, app_state::AppState};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
    /// Seconds since the server started.
    pub uptime: f64,
}

#[utoipa::path(
    get,
    path = "",
    tag = "health",
    summary = "Liveness check",
    responses(
        (status = 200, body = HealthResponse)
    ),
)]
pub async fn health_check(State(state): State<AppState>) -> Response<HealthResponse> {
    Response::OK(HealthResponse {
        status: "ok".to_string(),
        timestamp: Utc::now(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime: state.started_at.elapsed().as_secs_f64(),
    })
}

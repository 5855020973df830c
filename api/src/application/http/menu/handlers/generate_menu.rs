use crate::application::auth::RequiredIdentity;
use crate::application::http::menu::validators::GenerateMenuValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use menuforge_core::domain::menu::{entities::WeeklyMenu, ports::MenuService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GenerateMenuResponse {
    pub data: WeeklyMenu,
}

#[utoipa::path(
    post,
    path = "/generate",
    tag = "menu",
    summary = "Generate weekly menu",
    description = "Generates a draft weekly menu for the caller's family. Replaces any existing draft for the same week.",
    responses(
        (status = 200, body = GenerateMenuResponse),
        (status = 429, description = "Menu generation rate limit exceeded"),
        (status = 502, description = "AI generation failed"),
    ),
    request_body = GenerateMenuValidator
)]
pub async fn generate_menu(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<GenerateMenuValidator>,
) -> Result<Response<GenerateMenuResponse>, ApiError> {
    let menu = state
        .service
        .generate_menu(identity, payload.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GenerateMenuResponse { data: menu }))
}

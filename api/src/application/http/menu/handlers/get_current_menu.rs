use crate::application::auth::RequiredIdentity;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use menuforge_core::domain::menu::{entities::WeeklyMenu, ports::MenuService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetCurrentMenuResponse {
    pub data: WeeklyMenu,
}

#[utoipa::path(
    get,
    path = "/current",
    tag = "menu",
    summary = "Get current menu",
    description = "Retrieves the caller's most recently created menu.",
    responses(
        (status = 200, body = GetCurrentMenuResponse)
    ),
)]
pub async fn get_current_menu(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<GetCurrentMenuResponse>, ApiError> {
    let menu = state
        .service
        .get_current_menu(identity)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetCurrentMenuResponse { data: menu }))
}

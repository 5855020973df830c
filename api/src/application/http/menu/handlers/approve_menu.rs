use crate::application::auth::RequiredIdentity;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use menuforge_core::domain::menu::{entities::WeeklyMenu, ports::MenuService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ApproveMenuResponse {
    pub data: WeeklyMenu,
}

#[utoipa::path(
    post,
    path = "/{menu_id}/approve",
    tag = "menu",
    summary = "Approve menu",
    description = "Approves a draft menu and archives the previously approved one.",
    params(
        ("menu_id" = Uuid, Path, description = "Menu ID"),
    ),
    responses(
        (status = 200, body = ApproveMenuResponse),
        (status = 409, description = "Menu is already approved or archived"),
    ),
)]
pub async fn approve_menu(
    Path(menu_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<ApproveMenuResponse>, ApiError> {
    let menu = state
        .service
        .approve_menu(identity, menu_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(ApproveMenuResponse { data: menu }))
}

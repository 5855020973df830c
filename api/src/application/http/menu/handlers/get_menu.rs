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
pub struct GetMenuResponse {
    pub data: WeeklyMenu,
}

#[utoipa::path(
    get,
    path = "/{menu_id}",
    tag = "menu",
    summary = "Get menu",
    params(
        ("menu_id" = Uuid, Path, description = "Menu ID"),
    ),
    responses(
        (status = 200, body = GetMenuResponse)
    ),
)]
pub async fn get_menu(
    Path(menu_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<GetMenuResponse>, ApiError> {
    let menu = state
        .service
        .get_menu(identity, menu_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetMenuResponse { data: menu }))
}

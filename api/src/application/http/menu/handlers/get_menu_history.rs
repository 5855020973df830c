use axum::extract::{Query, State};

use crate::application::{
    auth::RequiredIdentity,
    http::{
        menu::validators::GetMenuHistoryParams,
        server::{
            api_entities::{api_error::ApiError, response::Response},
            app_state::AppState,
        },
    },
};
use menuforge_core::domain::menu::{
    entities::MenuHistory, ports::MenuService, value_objects::GetMenuHistoryInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetMenuHistoryResponse {
    pub data: MenuHistory,
}

#[utoipa::path(
    get,
    path = "/history",
    tag = "menu",
    summary = "Get menu history",
    description = "Lists the caller's menus, newest week first.",
    responses(
        (status = 200, body = GetMenuHistoryResponse)
    ),
    params(
        GetMenuHistoryParams
    ),
)]
pub async fn get_menu_history(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    Query(params): Query<GetMenuHistoryParams>,
) -> Result<Response<GetMenuHistoryResponse>, ApiError> {
    let defaults = GetMenuHistoryInput::default();
    let input = GetMenuHistoryInput {
        page: params.page.unwrap_or(defaults.page),
        limit: params.limit.unwrap_or(defaults.limit),
    };

    let history = state
        .service
        .get_menu_history(identity, input)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetMenuHistoryResponse { data: history }))
}

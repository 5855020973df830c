use crate::application::auth::RequiredIdentity;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use menuforge_core::domain::{menu::ports::MenuService, recipe::entities::Recipe};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetAlternativesResponse {
    pub data: Vec<Recipe>,
}

#[utoipa::path(
    post,
    path = "/{menu_id}/meals/{meal_id}/alternatives",
    tag = "menu",
    summary = "Suggest alternative recipes",
    description = "Generates replacement candidates for one meal slot. Candidates are stored as recipes but not applied to the menu.",
    params(
        ("menu_id" = Uuid, Path, description = "Menu ID"),
        ("meal_id" = Uuid, Path, description = "Meal ID"),
    ),
    responses(
        (status = 200, body = GetAlternativesResponse),
        (status = 429, description = "Alternatives rate limit exceeded"),
        (status = 502, description = "AI generation failed"),
    ),
)]
pub async fn get_alternatives(
    Path((menu_id, meal_id)): Path<(Uuid, Uuid)>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<GetAlternativesResponse>, ApiError> {
    let recipes = state
        .service
        .get_alternatives(identity, menu_id, meal_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetAlternativesResponse { data: recipes }))
}

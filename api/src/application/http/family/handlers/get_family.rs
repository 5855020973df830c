use crate::application::auth::RequiredIdentity;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use menuforge_core::domain::family::{entities::Family, ports::FamilyService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetFamilyResponse {
    pub data: Family,
}

#[utoipa::path(
    get,
    path = "",
    tag = "family",
    summary = "Get family",
    description = "Retrieves the caller's family profile with members and preferences.",
    responses(
        (status = 200, body = GetFamilyResponse)
    ),
)]
pub async fn get_family(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<GetFamilyResponse>, ApiError> {
    let family = state
        .service
        .get_family(identity)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetFamilyResponse { data: family }))
}

use crate::application::auth::RequiredIdentity;
use crate::application::http::family::validators::SaveFamilyValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use menuforge_core::domain::family::{entities::Family, ports::FamilyService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct SaveFamilyResponse {
    pub data: Family,
}

#[utoipa::path(
    put,
    path = "",
    tag = "family",
    summary = "Save family",
    description = "Creates the caller's family profile or replaces it wholesale.",
    responses(
        (status = 200, body = SaveFamilyResponse)
    ),
    request_body = SaveFamilyValidator
)]
pub async fn save_family(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<SaveFamilyValidator>,
) -> Result<Response<SaveFamilyResponse>, ApiError> {
    let family = state
        .service
        .save_family(identity, payload.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(SaveFamilyResponse { data: family }))
}

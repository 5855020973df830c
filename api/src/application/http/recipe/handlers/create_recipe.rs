use crate::application::auth::RequiredIdentity;
use crate::application::http::recipe::validators::CreateRecipeValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use menuforge_core::domain::recipe::{entities::Recipe, ports::RecipeService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CreateRecipeResponse {
    pub data: Recipe,
}

#[utoipa::path(
    post,
    path = "",
    tag = "recipe",
    summary = "Create recipe",
    description = "Stores a hand-authored recipe owned by the caller.",
    responses(
        (status = 201, body = CreateRecipeResponse)
    ),
    request_body = CreateRecipeValidator
)]
pub async fn create_recipe(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<CreateRecipeValidator>,
) -> Result<Response<CreateRecipeResponse>, ApiError> {
    let recipe = state
        .service
        .create_recipe(identity, payload.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(CreateRecipeResponse { data: recipe }))
}

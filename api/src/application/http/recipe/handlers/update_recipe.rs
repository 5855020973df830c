use crate::application::auth::RequiredIdentity;
use crate::application::http::recipe::validators::UpdateRecipeValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use menuforge_core::domain::recipe::{entities::Recipe, ports::RecipeService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct UpdateRecipeResponse {
    pub data: Recipe,
}

#[utoipa::path(
    patch,
    path = "/{recipe_id}",
    tag = "recipe",
    summary = "Update recipe",
    description = "Partially updates a recipe the caller authored.",
    params(
        ("recipe_id" = Uuid, Path, description = "Recipe ID"),
    ),
    responses(
        (status = 200, body = UpdateRecipeResponse)
    ),
    request_body = UpdateRecipeValidator
)]
pub async fn update_recipe(
    Path(recipe_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<UpdateRecipeValidator>,
) -> Result<Response<UpdateRecipeResponse>, ApiError> {
    let recipe = state
        .service
        .update_recipe(identity, recipe_id, payload.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(UpdateRecipeResponse { data: recipe }))
}

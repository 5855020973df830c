use crate::application::auth::RequiredIdentity;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use menuforge_core::domain::recipe::{entities::Recipe, ports::RecipeService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetRecipeResponse {
    pub data: Recipe,
}

#[utoipa::path(
    get,
    path = "/{recipe_id}",
    tag = "recipe",
    summary = "Get recipe",
    params(
        ("recipe_id" = Uuid, Path, description = "Recipe ID"),
    ),
    responses(
        (status = 200, body = GetRecipeResponse)
    ),
)]
pub async fn get_recipe(
    Path(recipe_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(_identity): RequiredIdentity,
) -> Result<Response<GetRecipeResponse>, ApiError> {
    let recipe = state
        .service
        .get_recipe(recipe_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetRecipeResponse { data: recipe }))
}

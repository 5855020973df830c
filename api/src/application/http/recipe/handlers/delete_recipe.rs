use crate::application::auth::RequiredIdentity;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use menuforge_core::domain::recipe::ports::RecipeService;
use uuid::Uuid;

#[utoipa::path(
    delete,
    path = "/{recipe_id}",
    tag = "recipe",
    summary = "Delete recipe",
    description = "Deletes a recipe the caller authored.",
    params(
        ("recipe_id" = Uuid, Path, description = "Recipe ID"),
    ),
    responses(
        (status = 204, description = "Recipe deleted")
    ),
)]
pub async fn delete_recipe(
    Path(recipe_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<StatusCode, ApiError> {
    state
        .service
        .delete_recipe(identity, recipe_id)
        .await
        .map_err(ApiError::from)?;

    Ok(StatusCode::NO_CONTENT)
}

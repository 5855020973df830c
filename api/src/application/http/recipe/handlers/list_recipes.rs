use axum::extract::{Query, State};

use crate::application::{
    auth::RequiredIdentity,
    http::{
        recipe::validators::ListRecipesParams,
        server::{
            api_entities::{api_error::ApiError, response::Response},
            app_state::AppState,
        },
    },
};
use menuforge_core::domain::recipe::{entities::RecipePage, ports::RecipeService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ListRecipesResponse {
    pub data: RecipePage,
}

#[utoipa::path(
    get,
    path = "",
    tag = "recipe",
    summary = "List recipes",
    description = "Lists the catalogue, newest first, optionally filtered by cuisine.",
    responses(
        (status = 200, body = ListRecipesResponse)
    ),
    params(
        ListRecipesParams
    ),
)]
pub async fn list_recipes(
    State(state): State<AppState>,
    RequiredIdentity(_identity): RequiredIdentity,
    Query(params): Query<ListRecipesParams>,
) -> Result<Response<ListRecipesResponse>, ApiError> {
    let page = state
        .service
        .list_recipes(params.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(ListRecipesResponse { data: page }))
}

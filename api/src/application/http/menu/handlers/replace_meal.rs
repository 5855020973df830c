use crate::application::auth::RequiredIdentity;
use crate::application::http::menu::validators::ReplaceMealValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use menuforge_core::domain::menu::{
    entities::Meal, ports::MenuService, value_objects::ReplaceMealInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ReplaceMealResponse {
    pub data: Meal,
}

#[utoipa::path(
    patch,
    path = "/{menu_id}/meals/{meal_id}",
    tag = "menu",
    summary = "Replace meal recipe",
    description = "Swaps the recipe of one meal in a draft menu.",
    params(
        ("menu_id" = Uuid, Path, description = "Menu ID"),
        ("meal_id" = Uuid, Path, description = "Meal ID"),
    ),
    responses(
        (status = 200, body = ReplaceMealResponse),
        (status = 409, description = "Menu is not a draft"),
    ),
    request_body = ReplaceMealValidator
)]
pub async fn replace_meal(
    Path((menu_id, meal_id)): Path<(Uuid, Uuid)>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<ReplaceMealValidator>,
) -> Result<Response<ReplaceMealResponse>, ApiError> {
    let meal = state
        .service
        .replace_meal(
            identity,
            ReplaceMealInput {
                menu_id,
                meal_id,
                recipe_id: payload.recipe_id,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(ReplaceMealResponse { data: meal }))
}

use crate::application::auth::RequiredIdentity;
use crate::application::http::menu::validators::LockMealValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use menuforge_core::domain::menu::{entities::Meal, ports::MenuService, value_objects::LockMealInput};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct LockMealResponse {
    pub data: Meal,
}

#[utoipa::path(
    patch,
    path = "/{menu_id}/meals/{meal_id}/lock",
    tag = "menu",
    summary = "Lock or unlock meal",
    description = "Locked meals are kept when the week is regenerated.",
    params(
        ("menu_id" = Uuid, Path, description = "Menu ID"),
        ("meal_id" = Uuid, Path, description = "Meal ID"),
    ),
    responses(
        (status = 200, body = LockMealResponse),
        (status = 409, description = "Menu is not a draft"),
    ),
    request_body = LockMealValidator
)]
pub async fn lock_meal(
    Path((menu_id, meal_id)): Path<(Uuid, Uuid)>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<LockMealValidator>,
) -> Result<Response<LockMealResponse>, ApiError> {
    let meal = state
        .service
        .lock_meal(
            identity,
            LockMealInput {
                menu_id,
                meal_id,
                is_locked: payload.is_locked,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(LockMealResponse { data: meal }))
}

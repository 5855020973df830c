use menuforge_core::domain::{
    menu::value_objects::{GenerateMenuInput, LockedMealInput},
    menu_generation::entities::MealType,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct LockedMealValidator {
    #[validate(range(min = 1, max = 7, message = "day must be between 1 and 7"))]
    pub day: u8,

    pub meal_type: MealType,

    pub recipe_id: Uuid,
}

#[derive(Debug, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct GenerateMenuValidator {
    /// Monday of the week to plan, `YYYY-MM-DD`.
    #[serde(default)]
    #[schema(example = "2026-10-19")]
    #[validate(length(equal = 10, message = "week_start must be in YYYY-MM-DD format"))]
    pub week_start: Option<String>,

    #[serde(default)]
    #[validate(nested)]
    pub locked_meals: Vec<LockedMealValidator>,
}

impl From<GenerateMenuValidator> for GenerateMenuInput {
    fn from(payload: GenerateMenuValidator) -> Self {
        Self {
            week_start: payload.week_start,
            locked_meals: payload
                .locked_meals
                .into_iter()
                .map(|locked| LockedMealInput {
                    day: locked.day,
                    meal_type: locked.meal_type,
                    recipe_id: locked.recipe_id,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct ReplaceMealValidator {
    pub recipe_id: Uuid,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct LockMealValidator {
    pub is_locked: bool,
}

#[derive(Debug, Serialize, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct GetMenuHistoryParams {
    #[schema(example = 1)]
    pub page: Option<u32>,
    #[schema(example = 10)]
    pub limit: Option<u32>,
}

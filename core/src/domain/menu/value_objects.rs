use uuid::Uuid;

use crate::domain::menu_generation::entities::MealType;

#[derive(Debug, Clone)]
pub struct LockedMealInput {
    pub day: u8,
    pub meal_type: MealType,
    pub recipe_id: Uuid,
}

#[derive(Debug, Clone, Default)]
pub struct GenerateMenuInput {
    /// `YYYY-MM-DD`; defaults to the next Monday.
    pub week_start: Option<String>,
    pub locked_meals: Vec<LockedMealInput>,
}

#[derive(Debug, Clone, Copy)]
pub struct GetMenuHistoryInput {
    pub page: u32,
    pub limit: u32,
}

impl Default for GetMenuHistoryInput {
    fn default() -> Self {
        Self { page: 1, limit: 10 }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ReplaceMealInput {
    pub menu_id: Uuid,
    pub meal_id: Uuid,
    pub recipe_id: Uuid,
}

#[derive(Debug, Clone, Copy)]
pub struct LockMealInput {
    pub menu_id: Uuid,
    pub meal_id: Uuid,
    pub is_locked: bool,
}

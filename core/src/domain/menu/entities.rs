use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{menu_generation::entities::MealType, recipe::entities::Recipe};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum MenuStatus {
    Draft,
    Approved,
    Archived,
}

impl fmt::Display for MenuStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MenuStatus::Draft => f.write_str("draft"),
            MenuStatus::Approved => f.write_str("approved"),
            MenuStatus::Archived => f.write_str("archived"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Meal {
    pub id: Uuid,
    pub meal_type: MealType,
    pub recipe: Recipe,
    pub is_locked: bool,
    pub servings: u32,
}

impl Meal {
    /// Widened so no per-serving value and serving count can overflow.
    pub fn calories(&self) -> u64 {
        u64::from(self.recipe.calories_per_serving.unwrap_or(0)) * u64::from(self.servings)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MenuDay {
    pub id: Uuid,
    pub day_of_week: u8,
    pub date: NaiveDate,
    pub meals: Vec<Meal>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct WeeklyMenu {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub family_id: Uuid,
    pub week_start: NaiveDate,
    pub status: MenuStatus,
    pub total_cost_estimate: f64,
    pub total_calories: u64,
    pub days: Vec<MenuDay>,
    pub created_at: DateTime<Utc>,
}

impl WeeklyMenu {
    pub fn meals(&self) -> impl Iterator<Item = &Meal> {
        self.days.iter().flat_map(|day| day.meals.iter())
    }

    pub fn meal_mut(&mut self, meal_id: Uuid) -> Option<&mut Meal> {
        self.days
            .iter_mut()
            .flat_map(|day| day.meals.iter_mut())
            .find(|meal| meal.id == meal_id)
    }

    pub fn recompute_total_calories(&mut self) {
        self.total_calories = self
            .meals()
            .map(Meal::calories)
            .fold(0, u64::saturating_add);
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MenuSummary {
    pub id: Uuid,
    pub week_start: NaiveDate,
    pub status: MenuStatus,
    pub total_cost_estimate: f64,
    pub total_calories: u64,
    pub created_at: DateTime<Utc>,
}

impl From<&WeeklyMenu> for MenuSummary {
    fn from(menu: &WeeklyMenu) -> Self {
        Self {
            id: menu.id,
            week_start: menu.week_start,
            status: menu.status,
            total_cost_estimate: menu.total_cost_estimate,
            total_calories: menu.total_calories,
            created_at: menu.created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Pagination {
    pub page: u32,
    pub limit: u32,
    pub total: u64,
    pub total_pages: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MenuHistory {
    pub menus: Vec<MenuSummary>,
    pub pagination: Pagination,
}

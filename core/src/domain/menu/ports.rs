use chrono::NaiveDate;
use uuid::Uuid;

use crate::domain::{
    authentication::value_objects::Identity,
    common::entities::app_errors::CoreError,
    menu::{
        entities::{Meal, MenuHistory, WeeklyMenu},
        value_objects::{GenerateMenuInput, GetMenuHistoryInput, LockMealInput, ReplaceMealInput},
    },
    recipe::entities::Recipe,
};

#[cfg_attr(test, mockall::automock)]
pub trait MenuRepository: Send + Sync {
    fn get_by_id(&self, id: Uuid) -> impl Future<Output = Result<Option<WeeklyMenu>, CoreError>> + Send;

    /// Most recently created menu of the owner, whatever its status.
    fn get_latest_for_owner(
        &self,
        owner_id: Uuid,
    ) -> impl Future<Output = Result<Option<WeeklyMenu>, CoreError>> + Send;

    /// Menus ordered by `week_start` descending, plus the total count.
    fn list_for_owner(
        &self,
        owner_id: Uuid,
        offset: u64,
        limit: u64,
    ) -> impl Future<Output = Result<(Vec<WeeklyMenu>, u64), CoreError>> + Send;

    /// Inserts or replaces by id.
    fn save(&self, menu: WeeklyMenu) -> impl Future<Output = Result<WeeklyMenu, CoreError>> + Send;

    fn delete_drafts_for_week(
        &self,
        owner_id: Uuid,
        week_start: NaiveDate,
    ) -> impl Future<Output = Result<u64, CoreError>> + Send;

    fn archive_approved_for_owner(
        &self,
        owner_id: Uuid,
    ) -> impl Future<Output = Result<u64, CoreError>> + Send;
}

pub trait MenuService: Send + Sync {
    fn generate_menu(
        &self,
        identity: Identity,
        input: GenerateMenuInput,
    ) -> impl Future<Output = Result<WeeklyMenu, CoreError>> + Send;

    fn get_menu(
        &self,
        identity: Identity,
        menu_id: Uuid,
    ) -> impl Future<Output = Result<WeeklyMenu, CoreError>> + Send;

    fn get_current_menu(
        &self,
        identity: Identity,
    ) -> impl Future<Output = Result<WeeklyMenu, CoreError>> + Send;

    fn get_menu_history(
        &self,
        identity: Identity,
        input: GetMenuHistoryInput,
    ) -> impl Future<Output = Result<MenuHistory, CoreError>> + Send;

    fn get_alternatives(
        &self,
        identity: Identity,
        menu_id: Uuid,
        meal_id: Uuid,
    ) -> impl Future<Output = Result<Vec<Recipe>, CoreError>> + Send;

    fn replace_meal(
        &self,
        identity: Identity,
        input: ReplaceMealInput,
    ) -> impl Future<Output = Result<Meal, CoreError>> + Send;

    fn lock_meal(
        &self,
        identity: Identity,
        input: LockMealInput,
    ) -> impl Future<Output = Result<Meal, CoreError>> + Send;

    fn approve_menu(
        &self,
        identity: Identity,
        menu_id: Uuid,
    ) -> impl Future<Output = Result<WeeklyMenu, CoreError>> + Send;
}

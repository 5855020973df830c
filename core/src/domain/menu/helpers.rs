use chrono::{Datelike, Days, NaiveDate, Weekday};
use uuid::Uuid;

use crate::domain::{
    authentication::value_objects::Identity, common::entities::app_errors::CoreError,
    menu::entities::{MenuStatus, WeeklyMenu},
};

/// `today` itself when it is a Monday.
pub fn next_monday(today: NaiveDate) -> NaiveDate {
    let days_ahead = (7 - today.weekday().num_days_from_monday()) % 7;
    today + Days::new(u64::from(days_ahead))
}

pub fn parse_week_start(week_start: Option<&str>, today: NaiveDate) -> Result<NaiveDate, CoreError> {
    let Some(raw) = week_start else {
        return Ok(next_monday(today));
    };

    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| CoreError::InvalidInput("Invalid date format".to_string()))?;

    if date.weekday() != Weekday::Mon {
        return Err(CoreError::InvalidInput(
            "week_start must be a Monday".to_string(),
        ));
    }

    Ok(date)
}

pub fn day_date(week_start: NaiveDate, day_of_week: u8) -> NaiveDate {
    week_start + Days::new(u64::from(day_of_week.saturating_sub(1)))
}

pub fn ensure_owner(menu: &WeeklyMenu, identity: &Identity) -> Result<(), CoreError> {
    if menu.owner_id != identity.id() {
        return Err(CoreError::Forbidden(
            "Menu does not belong to your family".to_string(),
        ));
    }
    Ok(())
}

pub fn ensure_draft(menu: &WeeklyMenu) -> Result<(), CoreError> {
    if menu.status != MenuStatus::Draft {
        return Err(CoreError::Conflict("Can only modify draft menus".to_string()));
    }
    Ok(())
}

pub fn ensure_approvable(menu: &WeeklyMenu) -> Result<(), CoreError> {
    match menu.status {
        MenuStatus::Draft => Ok(()),
        MenuStatus::Approved => Err(CoreError::Conflict(
            "Menu is already approved".to_string(),
        )),
        MenuStatus::Archived => Err(CoreError::Conflict(
            "Cannot approve an archived menu".to_string(),
        )),
    }
}

pub fn page_offset(page: u32, limit: u32) -> u64 {
    u64::from(page.saturating_sub(1)) * u64::from(limit)
}

pub fn total_pages(total: u64, limit: u32) -> u64 {
    if limit == 0 {
        return 0;
    }
    total.div_ceil(u64::from(limit))
}

pub fn rate_limit_key(operation: &str, user_id: Uuid) -> String {
    format!("{operation}:{user_id}")
}

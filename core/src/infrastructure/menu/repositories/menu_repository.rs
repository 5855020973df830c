use std::{collections::HashMap, sync::Arc};

use chrono::NaiveDate;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    menu::{
        entities::{MenuStatus, WeeklyMenu},
        ports::MenuRepository,
    },
};

#[derive(Debug, Clone, Default)]
pub struct InMemoryMenuRepository {
    menus: Arc<RwLock<HashMap<Uuid, WeeklyMenu>>>,
}

impl InMemoryMenuRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl MenuRepository for InMemoryMenuRepository {
    async fn get_by_id(&self, id: Uuid) -> Result<Option<WeeklyMenu>, CoreError> {
        Ok(self.menus.read().await.get(&id).cloned())
    }

    async fn get_latest_for_owner(&self, owner_id: Uuid) -> Result<Option<WeeklyMenu>, CoreError> {
        Ok(self
            .menus
            .read()
            .await
            .values()
            .filter(|m| m.owner_id == owner_id)
            .max_by_key(|m| (m.created_at, m.id))
            .cloned())
    }

    async fn list_for_owner(
        &self,
        owner_id: Uuid,
        offset: u64,
        limit: u64,
    ) -> Result<(Vec<WeeklyMenu>, u64), CoreError> {
        let menus = self.menus.read().await;

        let mut owned: Vec<&WeeklyMenu> = menus.values().filter(|m| m.owner_id == owner_id).collect();
        owned.sort_by(|a, b| {
            b.week_start
                .cmp(&a.week_start)
                .then(b.created_at.cmp(&a.created_at))
        });

        let total = owned.len() as u64;
        let page = owned
            .into_iter()
            .skip(usize::try_from(offset).unwrap_or(usize::MAX))
            .take(usize::try_from(limit).unwrap_or(usize::MAX))
            .cloned()
            .collect();

        Ok((page, total))
    }

    async fn save(&self, menu: WeeklyMenu) -> Result<WeeklyMenu, CoreError> {
        self.menus.write().await.insert(menu.id, menu.clone());
        Ok(menu)
    }

    async fn delete_drafts_for_week(
        &self,
        owner_id: Uuid,
        week_start: NaiveDate,
    ) -> Result<u64, CoreError> {
        let mut menus = self.menus.write().await;
        let before = menus.len();
        menus.retain(|_, m| {
            !(m.owner_id == owner_id && m.week_start == week_start && m.status == MenuStatus::Draft)
        });
        Ok((before - menus.len()) as u64)
    }

    async fn archive_approved_for_owner(&self, owner_id: Uuid) -> Result<u64, CoreError> {
        let mut archived = 0;
        for menu in self.menus.write().await.values_mut() {
            if menu.owner_id == owner_id && menu.status == MenuStatus::Approved {
                menu.status = MenuStatus::Archived;
                archived += 1;
            }
        }
        Ok(archived)
    }
}

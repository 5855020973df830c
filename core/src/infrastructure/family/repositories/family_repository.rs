use std::{collections::HashMap, sync::Arc};

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    family::{entities::Family, ports::FamilyRepository},
};

/// One family per owner.
#[derive(Debug, Clone, Default)]
pub struct InMemoryFamilyRepository {
    families: Arc<RwLock<HashMap<Uuid, Family>>>,
}

impl InMemoryFamilyRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FamilyRepository for InMemoryFamilyRepository {
    async fn get_by_owner(&self, owner_id: Uuid) -> Result<Option<Family>, CoreError> {
        Ok(self.families.read().await.get(&owner_id).cloned())
    }

    async fn save(&self, family: Family) -> Result<Family, CoreError> {
        self.families
            .write()
            .await
            .insert(family.owner_id, family.clone());
        Ok(family)
    }
}

use uuid::Uuid;

use crate::domain::{
    authentication::value_objects::Identity,
    common::entities::app_errors::CoreError,
    family::{entities::Family, value_objects::SaveFamilyInput},
};

#[cfg_attr(test, mockall::automock)]
pub trait FamilyRepository: Send + Sync {
    fn get_by_owner(
        &self,
        owner_id: Uuid,
    ) -> impl Future<Output = Result<Option<Family>, CoreError>> + Send;

    fn save(&self, family: Family) -> impl Future<Output = Result<Family, CoreError>> + Send;
}

pub trait FamilyService: Send + Sync {
    fn get_family(
        &self,
        identity: Identity,
    ) -> impl Future<Output = Result<Family, CoreError>> + Send;

    /// Creates the caller's family or replaces it wholesale.
    fn save_family(
        &self,
        identity: Identity,
        input: SaveFamilyInput,
    ) -> impl Future<Output = Result<Family, CoreError>> + Send;
}

use tracing::instrument;

use crate::domain::{
    authentication::value_objects::Identity,
    common::{entities::app_errors::CoreError, services::Service},
    family::{
        entities::Family,
        helpers::ensure_meals_per_day,
        ports::{FamilyRepository, FamilyService},
        value_objects::SaveFamilyInput,
    },
    menu::ports::MenuRepository,
    menu_generation::ports::MenuGenerationService,
    rate_limit::ports::RateLimiter,
    recipe::ports::RecipeRepository,
};

impl<F, R, M, RL, G> FamilyService for Service<F, R, M, RL, G>
where
    F: FamilyRepository,
    R: RecipeRepository,
    M: MenuRepository,
    RL: RateLimiter,
    G: MenuGenerationService,
{
    async fn get_family(&self, identity: Identity) -> Result<Family, CoreError> {
        self.family_repository
            .get_by_owner(identity.id())
            .await?
            .ok_or_else(|| CoreError::NotFound("Family".to_string()))
    }

    #[instrument(skip(self, input), fields(user_id = %identity.id()))]
    async fn save_family(
        &self,
        identity: Identity,
        input: SaveFamilyInput,
    ) -> Result<Family, CoreError> {
        ensure_meals_per_day(input.meals_per_day)?;

        let family = match self.family_repository.get_by_owner(identity.id()).await? {
            Some(mut existing) => {
                existing.apply(input);
                existing
            }
            None => Family::new(identity.id(), input),
        };

        let family = self.family_repository.save(family).await?;
        tracing::info!(family_id = %family.id, members = family.members.len(), "Family saved");

        Ok(family)
    }
}

use crate::domain::{
    common::RateLimitConfig, family::ports::FamilyRepository,
    menu::ports::MenuRepository, menu_generation::ports::MenuGenerationService,
    rate_limit::ports::RateLimiter, recipe::ports::RecipeRepository,
};

#[derive(Clone)]
pub struct Service<F, R, M, RL, G>
where
    F: FamilyRepository,
    R: RecipeRepository,
    M: MenuRepository,
    RL: RateLimiter,
    G: MenuGenerationService,
{
    pub(crate) family_repository: F,
    pub(crate) recipe_repository: R,
    pub(crate) menu_repository: M,
    pub(crate) rate_limiter: RL,
    pub(crate) menu_generator: G,
    pub(crate) rate_limit: RateLimitConfig,
}

impl<F, R, M, RL, G> Service<F, R, M, RL, G>
where
    F: FamilyRepository,
    R: RecipeRepository,
    M: MenuRepository,
    RL: RateLimiter,
    G: MenuGenerationService,
{
    pub fn new(
        family_repository: F,
        recipe_repository: R,
        menu_repository: M,
        rate_limiter: RL,
        menu_generator: G,
        rate_limit: RateLimitConfig,
    ) -> Self {
        Self {
            family_repository,
            recipe_repository,
            menu_repository,
            rate_limiter,
            menu_generator,
            rate_limit,
        }
    }
}

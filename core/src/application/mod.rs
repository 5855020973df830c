use crate::{
    domain::{
        common::{MenuforgeConfig, entities::app_errors::CoreError, services::Service},
        menu_generation::{observer::TracingObserver, services::MenuGenerator},
    },
    infrastructure::{
        family::repositories::family_repository::InMemoryFamilyRepository,
        llm::LLMProvider,
        menu::repositories::menu_repository::InMemoryMenuRepository,
        rate_limit::in_memory_rate_limiter::InMemoryRateLimiter,
        recipe::repositories::recipe_repository::InMemoryRecipeRepository,
    },
};

pub type MenuforgeGenerator = MenuGenerator<LLMProvider, TracingObserver>;

pub type MenuforgeService = Service<
    InMemoryFamilyRepository,
    InMemoryRecipeRepository,
    InMemoryMenuRepository,
    InMemoryRateLimiter,
    MenuforgeGenerator,
>;

pub async fn create_service(config: MenuforgeConfig) -> Result<MenuforgeService, CoreError> {
    let llm_client = LLMProvider::from_config(&config.llm)?;
    let menu_generator = MenuGenerator::new(llm_client, TracingObserver, config.llm.request_timeout);

    tracing::info!(
        provider = ?config.llm.provider,
        timeout_secs = config.llm.request_timeout.as_secs(),
        "Menu generator initialised"
    );

    Ok(Service::new(
        InMemoryFamilyRepository::new(),
        InMemoryRecipeRepository::new(),
        InMemoryMenuRepository::new(),
        InMemoryRateLimiter::new(),
        menu_generator,
        config.rate_limit,
    ))
}

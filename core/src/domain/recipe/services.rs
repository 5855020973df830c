use tracing::instrument;
use uuid::Uuid;

use crate::domain::{
    authentication::value_objects::Identity,
    common::{entities::app_errors::CoreError, services::Service},
    family::ports::FamilyRepository,
    menu::{
        entities::Pagination,
        helpers::{page_offset, total_pages},
        ports::MenuRepository,
    },
    menu_generation::ports::MenuGenerationService,
    rate_limit::ports::RateLimiter,
    recipe::{
        entities::{Recipe, RecipePage},
        helpers::{MAX_RECIPE_PAGE_LIMIT, ensure_recipe_owner},
        ports::{RecipeRepository, RecipeService},
        value_objects::{CreateRecipeInput, ListRecipesInput, UpdateRecipeInput},
    },
};

impl<F, R, M, RL, G> Service<F, R, M, RL, G>
where
    F: FamilyRepository,
    R: RecipeRepository,
    M: MenuRepository,
    RL: RateLimiter,
    G: MenuGenerationService,
{
    async fn owned_recipe(&self, identity: &Identity, recipe_id: Uuid) -> Result<Recipe, CoreError> {
        let recipe = self.get_recipe(recipe_id).await?;
        ensure_recipe_owner(&recipe, identity)?;
        Ok(recipe)
    }
}

impl<F, R, M, RL, G> RecipeService for Service<F, R, M, RL, G>
where
    F: FamilyRepository,
    R: RecipeRepository,
    M: MenuRepository,
    RL: RateLimiter,
    G: MenuGenerationService,
{
    #[instrument(skip(self, input), fields(user_id = %identity.id()))]
    async fn create_recipe(
        &self,
        identity: Identity,
        input: CreateRecipeInput,
    ) -> Result<Recipe, CoreError> {
        let recipe = self
            .recipe_repository
            .save(Recipe::new_custom(identity.id(), input))
            .await?;
        tracing::info!(recipe_id = %recipe.id, "Recipe created");

        Ok(recipe)
    }

    async fn list_recipes(&self, input: ListRecipesInput) -> Result<RecipePage, CoreError> {
        let page = input.page.max(1);
        let limit = input.limit.clamp(1, MAX_RECIPE_PAGE_LIMIT);

        let (recipes, total) = self
            .recipe_repository
            .list(input.cuisine_type, page_offset(page, limit), u64::from(limit))
            .await?;

        Ok(RecipePage {
            recipes,
            pagination: Pagination {
                page,
                limit,
                total,
                total_pages: total_pages(total, limit),
            },
        })
    }

    async fn get_recipe(&self, recipe_id: Uuid) -> Result<Recipe, CoreError> {
        self.recipe_repository
            .get_by_id(recipe_id)
            .await?
            .ok_or_else(|| CoreError::NotFound("Recipe".to_string()))
    }

    #[instrument(skip(self, input), fields(user_id = %identity.id()))]
    async fn update_recipe(
        &self,
        identity: Identity,
        recipe_id: Uuid,
        input: UpdateRecipeInput,
    ) -> Result<Recipe, CoreError> {
        let mut recipe = self.owned_recipe(&identity, recipe_id).await?;
        recipe.apply(input);

        let recipe = self.recipe_repository.save(recipe).await?;
        tracing::info!(%recipe_id, "Recipe updated");

        Ok(recipe)
    }

    #[instrument(skip(self), fields(user_id = %identity.id()))]
    async fn delete_recipe(&self, identity: Identity, recipe_id: Uuid) -> Result<(), CoreError> {
        self.owned_recipe(&identity, recipe_id).await?;
        self.recipe_repository.delete(recipe_id).await?;
        tracing::info!(%recipe_id, "Recipe deleted");

        Ok(())
    }
}

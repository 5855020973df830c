use uuid::Uuid;

use crate::domain::{
    authentication::value_objects::Identity,
    common::entities::app_errors::CoreError,
    menu_generation::entities::GeneratedRecipe,
    recipe::{
        entities::{Recipe, RecipePage},
        value_objects::{CreateRecipeInput, ListRecipesInput, UpdateRecipeInput},
    },
};

#[cfg_attr(test, mockall::automock)]
pub trait RecipeRepository: Send + Sync {
    fn get_by_id(&self, id: Uuid) -> impl Future<Output = Result<Option<Recipe>, CoreError>> + Send;

    /// Recipes ordered by `created_at` descending, plus the total count of the filtered set.
    fn list(
        &self,
        cuisine_type: Option<String>,
        offset: u64,
        limit: u64,
    ) -> impl Future<Output = Result<(Vec<Recipe>, u64), CoreError>> + Send;

    /// Inserts or replaces by id.
    fn save(&self, recipe: Recipe) -> impl Future<Output = Result<Recipe, CoreError>> + Send;

    fn delete(&self, id: Uuid) -> impl Future<Output = Result<(), CoreError>> + Send;

    /// Returns the stored recipe with the same `(title_en, title_fi)`, or stores a new one.
    ///
    /// Ingredients are reused by English name; missing ones are created.
    fn upsert_generated(
        &self,
        recipe: GeneratedRecipe,
    ) -> impl Future<Output = Result<Recipe, CoreError>> + Send;
}

pub trait RecipeService: Send + Sync {
    fn create_recipe(
        &self,
        identity: Identity,
        input: CreateRecipeInput,
    ) -> impl Future<Output = Result<Recipe, CoreError>> + Send;

    fn list_recipes(
        &self,
        input: ListRecipesInput,
    ) -> impl Future<Output = Result<RecipePage, CoreError>> + Send;

    fn get_recipe(&self, recipe_id: Uuid) -> impl Future<Output = Result<Recipe, CoreError>> + Send;

    /// Owner only.
    fn update_recipe(
        &self,
        identity: Identity,
        recipe_id: Uuid,
        input: UpdateRecipeInput,
    ) -> impl Future<Output = Result<Recipe, CoreError>> + Send;

    /// Owner only.
    fn delete_recipe(
        &self,
        identity: Identity,
        recipe_id: Uuid,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}

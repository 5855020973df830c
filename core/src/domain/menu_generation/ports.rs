use crate::domain::{
    common::entities::app_errors::CoreError,
    menu_generation::{
        entities::{GeneratedRecipe, MealType, WeeklyMenuDraft},
        value_objects::{FamilyContext, GenerationRequest},
    },
};

/// Opaque text-generation backend: prompts in, raw text out.
///
/// Transport failures (network, non-2xx, timeout) are returned as errors and are never
/// retried by the caller.
#[cfg_attr(test, mockall::automock)]
pub trait LLMClient: Send + Sync {
    fn generate(
        &self,
        request: GenerationRequest,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

/// Service trait for AI-driven menu generation
#[cfg_attr(test, mockall::automock)]
pub trait MenuGenerationService: Send + Sync {
    fn generate_weekly_menu(
        &self,
        context: FamilyContext,
    ) -> impl Future<Output = Result<WeeklyMenuDraft, CoreError>> + Send;

    fn generate_alternatives(
        &self,
        context: FamilyContext,
        existing_recipe_titles: Vec<String>,
        meal_type: MealType,
    ) -> impl Future<Output = Result<Vec<GeneratedRecipe>, CoreError>> + Send;
}

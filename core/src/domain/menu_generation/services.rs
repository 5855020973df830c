use std::time::Duration;

use tokio::time::Instant;
use tracing::instrument;

use crate::domain::{
    common::entities::app_errors::CoreError,
    menu_generation::{
        entities::{GeneratedRecipe, MealType, WeeklyMenuDraft},
        observer::GenerationObserver,
        ports::{LLMClient, MenuGenerationService},
        prompts::{
            build_alternatives_system_prompt, build_alternatives_user_prompt, build_system_prompt,
            build_user_prompt,
        },
        schema::{
            alternatives_response_schema, parse_alternatives, parse_weekly_menu,
            weekly_menu_response_schema,
        },
        validators::{
            strict_restrictions, validate_completeness, validate_meal_count,
            validate_restriction_compliance, validate_uniqueness,
        },
        value_objects::{
            FamilyContext, GenerationKind, GenerationRequest, GenerationStage, SemanticStage,
            StrictRestriction,
        },
    },
};

pub const MENU_MAX_ATTEMPTS: u32 = 3;
pub const ALTERNATIVES_MAX_ATTEMPTS: u32 = 2;
pub const ALTERNATIVES_BACKOFF_BASE: Duration = Duration::from_millis(500);
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

const FEEDBACK_HEADER: &str = "\n\nPREVIOUS ATTEMPT FAILED. Fix these errors:\n";

/// Delay slept before `attempt` (1-based) on the alternatives path.
pub fn backoff_delay(attempt: u32) -> Duration {
    if attempt < 2 {
        return Duration::ZERO;
    }
    ALTERNATIVES_BACKOFF_BASE.saturating_mul(2u32.saturating_pow(attempt - 2))
}

fn describe_semantic_failure(stage: SemanticStage, errors: &[String]) -> String {
    let joined = errors.join("; ");
    match stage {
        SemanticStage::MealCount => format!("Meal count errors: {joined}"),
        SemanticStage::RestrictionCompliance => {
            format!("Restriction violations: {joined}. These ingredients are FORBIDDEN.")
        }
        SemanticStage::Uniqueness => {
            format!("Duplicate recipes: {joined}. Each recipe must be unique.")
        }
        SemanticStage::Completeness => format!("Incomplete recipes: {joined}"),
    }
}

/// Result of a single pass through call, parse and validation.
#[derive(Debug)]
enum AttemptOutcome<T> {
    Success(T),
    StructuralFailure(String),
    SemanticFailure {
        stage: SemanticStage,
        detail: String,
    },
    ParseFailure,
    TransportFailure(CoreError),
}

/// Drives the bounded retry loop around an [`LLMClient`].
///
/// Stateless between calls; clones share the underlying client and observer.
#[derive(Debug, Clone)]
pub struct MenuGenerator<L, O>
where
    L: LLMClient,
    O: GenerationObserver,
{
    llm_client: L,
    observer: O,
    request_timeout: Duration,
}

impl<L, O> MenuGenerator<L, O>
where
    L: LLMClient,
    O: GenerationObserver,
{
    pub fn new(llm_client: L, observer: O, request_timeout: Duration) -> Self {
        Self {
            llm_client,
            observer,
            request_timeout,
        }
    }

    async fn call(
        &self,
        kind: GenerationKind,
        attempt: u32,
        system_prompt: &str,
        user_prompt: String,
        response_schema: serde_json::Value,
    ) -> Result<String, CoreError> {
        self.observer
            .stage_entered(kind, attempt, GenerationStage::Calling);

        let request = GenerationRequest {
            system_prompt: system_prompt.to_string(),
            user_prompt,
            response_schema,
            timeout: self.request_timeout,
        };

        match tokio::time::timeout(self.request_timeout, self.llm_client.generate(request)).await {
            Ok(result) => result,
            Err(_) => Err(CoreError::ExternalServiceError(format!(
                "LLM request timed out after {}s",
                self.request_timeout.as_secs()
            ))),
        }
    }

    /// Calls the backend, then parses and structurally checks the reply.
    async fn fetch<T>(
        &self,
        kind: GenerationKind,
        attempt: u32,
        system_prompt: &str,
        user_prompt: String,
        response_schema: serde_json::Value,
        conform: fn(serde_json::Value) -> Result<T, String>,
    ) -> AttemptOutcome<T> {
        let raw = match self
            .call(kind, attempt, system_prompt, user_prompt, response_schema)
            .await
        {
            Ok(raw) => raw,
            Err(e) => return AttemptOutcome::TransportFailure(e),
        };

        self.observer
            .stage_entered(kind, attempt, GenerationStage::Parsing);
        let value: serde_json::Value = match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                tracing::error!("Failed to parse LLM response as JSON: {}", e);
                return AttemptOutcome::ParseFailure;
            }
        };

        self.observer
            .stage_entered(kind, attempt, GenerationStage::StructuralValidation);
        match conform(value) {
            Ok(parsed) => AttemptOutcome::Success(parsed),
            Err(detail) => AttemptOutcome::StructuralFailure(detail),
        }
    }

    async fn weekly_menu_attempt(
        &self,
        attempt: u32,
        system_prompt: &str,
        user_prompt: String,
        context: &FamilyContext,
        strict: &[StrictRestriction],
    ) -> AttemptOutcome<WeeklyMenuDraft> {
        let kind = GenerationKind::WeeklyMenu;
        let menu = match self
            .fetch(
                kind,
                attempt,
                system_prompt,
                user_prompt,
                weekly_menu_response_schema(),
                parse_weekly_menu,
            )
            .await
        {
            AttemptOutcome::Success(menu) => menu,
            other => return other,
        };

        for stage in SemanticStage::ALL {
            self.observer.stage_entered(kind, attempt, stage.into());
            let result = match stage {
                SemanticStage::MealCount => validate_meal_count(&menu, context.meals_per_day),
                SemanticStage::RestrictionCompliance => {
                    validate_restriction_compliance(&menu, strict)
                }
                SemanticStage::Uniqueness => validate_uniqueness(&menu),
                SemanticStage::Completeness => validate_completeness(&menu),
            };

            if !result.valid {
                return AttemptOutcome::SemanticFailure {
                    stage,
                    detail: describe_semantic_failure(stage, &result.errors),
                };
            }
        }

        AttemptOutcome::Success(menu)
    }

    fn abort(&self, kind: GenerationKind, attempt: u32, error: CoreError) -> CoreError {
        self.observer.generation_aborted(kind, attempt, &error);
        error
    }
}

impl<L, O> MenuGenerationService for MenuGenerator<L, O>
where
    L: LLMClient,
    O: GenerationObserver,
{
    #[instrument(skip(self, context), fields(meals_per_day = context.meals_per_day))]
    async fn generate_weekly_menu(&self, context: FamilyContext) -> Result<WeeklyMenuDraft, CoreError> {
        let kind = GenerationKind::WeeklyMenu;
        let started = Instant::now();

        let strict = strict_restrictions(&context.dietary_restrictions);
        let system_prompt = build_system_prompt(context.meals_per_day);
        let base_user_prompt = build_user_prompt(&context);
        let mut last_error = String::new();

        for attempt in 1..=MENU_MAX_ATTEMPTS {
            self.observer.attempt_started(kind, attempt);
            self.observer
                .stage_entered(kind, attempt, GenerationStage::BuildingPrompt);

            let user_prompt = if attempt == 1 {
                base_user_prompt.clone()
            } else {
                format!("{base_user_prompt}{FEEDBACK_HEADER}{last_error}")
            };

            match self
                .weekly_menu_attempt(attempt, &system_prompt, user_prompt, &context, &strict)
                .await
            {
                AttemptOutcome::Success(menu) => {
                    self.observer
                        .generation_succeeded(kind, attempt, started.elapsed());
                    return Ok(menu);
                }
                AttemptOutcome::ParseFailure => {
                    return Err(self.abort(kind, attempt, CoreError::InvalidAiResponse));
                }
                AttemptOutcome::TransportFailure(e) => {
                    return Err(self.abort(kind, attempt, e));
                }
                AttemptOutcome::StructuralFailure(detail) => {
                    last_error = format!("Schema validation failed: {detail}");
                }
                AttemptOutcome::SemanticFailure { stage, detail } => {
                    tracing::debug!(stage = %GenerationStage::from(stage), "Generated menu rejected");
                    last_error = detail;
                }
            }

            self.observer.attempt_failed(kind, attempt, &last_error);
        }

        let error = CoreError::GenerationExhausted {
            operation: kind.label().to_string(),
            attempts: MENU_MAX_ATTEMPTS,
            last_error,
        };
        Err(self.abort(kind, MENU_MAX_ATTEMPTS, error))
    }

    #[instrument(skip(self, context, existing_recipe_titles), fields(%meal_type))]
    async fn generate_alternatives(
        &self,
        context: FamilyContext,
        existing_recipe_titles: Vec<String>,
        meal_type: MealType,
    ) -> Result<Vec<GeneratedRecipe>, CoreError> {
        let kind = GenerationKind::Alternatives;
        let started = Instant::now();

        let system_prompt = build_alternatives_system_prompt();
        let user_prompt = build_alternatives_user_prompt(&context, &existing_recipe_titles, meal_type);
        let mut last_error = String::new();

        for attempt in 1..=ALTERNATIVES_MAX_ATTEMPTS {
            let delay = backoff_delay(attempt);
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }

            self.observer.attempt_started(kind, attempt);
            self.observer
                .stage_entered(kind, attempt, GenerationStage::BuildingPrompt);

            match self
                .fetch(
                    kind,
                    attempt,
                    &system_prompt,
                    user_prompt.clone(),
                    alternatives_response_schema(),
                    parse_alternatives,
                )
                .await
            {
                AttemptOutcome::Success(recipes) => {
                    self.observer
                        .generation_succeeded(kind, attempt, started.elapsed());
                    return Ok(recipes);
                }
                AttemptOutcome::ParseFailure => {
                    return Err(self.abort(kind, attempt, CoreError::InvalidAiResponse));
                }
                AttemptOutcome::TransportFailure(e) => {
                    return Err(self.abort(kind, attempt, e));
                }
                AttemptOutcome::StructuralFailure(detail)
                | AttemptOutcome::SemanticFailure { detail, .. } => {
                    last_error = format!("Schema validation failed: {detail}");
                }
            }

            self.observer.attempt_failed(kind, attempt, &last_error);
        }

        let error = CoreError::GenerationExhausted {
            operation: kind.label().to_string(),
            attempts: ALTERNATIVES_MAX_ATTEMPTS,
            last_error,
        };
        Err(self.abort(kind, ALTERNATIVES_MAX_ATTEMPTS, error))
    }
}

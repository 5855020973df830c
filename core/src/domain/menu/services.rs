use std::collections::HashMap;

use chrono::Utc;
use tokio::time::Instant;
use tracing::instrument;
use uuid::Uuid;

use crate::domain::{
    authentication::value_objects::Identity,
    common::{entities::app_errors::CoreError, generate_timestamp, generate_uuid_v7, services::Service},
    family::{
        entities::{Family, MemberRole},
        helpers::{build_family_context, ensure_plannable},
        ports::FamilyRepository,
    },
    menu::{
        entities::{Meal, MenuDay, MenuHistory, MenuStatus, Pagination, WeeklyMenu},
        helpers::{
            day_date, ensure_approvable, ensure_draft, ensure_owner, page_offset, parse_week_start,
            rate_limit_key, total_pages,
        },
        ports::{MenuRepository, MenuService},
        value_objects::{
            GenerateMenuInput, GetMenuHistoryInput, LockMealInput, LockedMealInput,
            ReplaceMealInput,
        },
    },
    menu_generation::{
        entities::{MealType, WeeklyMenuDraft},
        ports::MenuGenerationService,
        value_objects::LockedMeal,
    },
    rate_limit::ports::RateLimiter,
    recipe::{entities::Recipe, ports::RecipeRepository},
};

const MENU_GENERATION_OPERATION: &str = "menu_generation";
const ALTERNATIVES_OPERATION: &str = "alternatives";
const MAX_HISTORY_LIMIT: u32 = 50;

impl<F, R, M, RL, G> Service<F, R, M, RL, G>
where
    F: FamilyRepository,
    R: RecipeRepository,
    M: MenuRepository,
    RL: RateLimiter,
    G: MenuGenerationService,
{
    async fn check_rate_limit(
        &self,
        operation: &str,
        label: &str,
        limit: u32,
        identity: &Identity,
    ) -> Result<(), CoreError> {
        let allowed = self
            .rate_limiter
            .try_acquire(
                rate_limit_key(operation, identity.id()),
                limit,
                self.rate_limit.window,
            )
            .await?;

        if !allowed {
            tracing::warn!(user_id = %identity.id(), operation, "Rate limit exceeded");
            return Err(CoreError::RateLimited(label.to_string()));
        }
        Ok(())
    }

    async fn plannable_family(&self, identity: &Identity) -> Result<Family, CoreError> {
        let family = self
            .family_repository
            .get_by_owner(identity.id())
            .await?
            .ok_or_else(|| CoreError::NotFound("Family".to_string()))?;

        ensure_plannable(&family)?;
        Ok(family)
    }

    async fn owned_menu(&self, identity: &Identity, menu_id: Uuid) -> Result<WeeklyMenu, CoreError> {
        let menu = self
            .menu_repository
            .get_by_id(menu_id)
            .await?
            .ok_or_else(|| CoreError::NotFound("Menu".to_string()))?;

        ensure_owner(&menu, identity)?;
        Ok(menu)
    }

    /// Resolves locked slots to stored recipes. Unknown recipe ids are dropped.
    async fn resolve_locked_meals(
        &self,
        locked_meals: Vec<LockedMealInput>,
    ) -> Result<HashMap<(u8, MealType), Recipe>, CoreError> {
        let mut resolved = HashMap::new();

        for locked in locked_meals {
            match self.recipe_repository.get_by_id(locked.recipe_id).await? {
                Some(recipe) => {
                    resolved.insert((locked.day, locked.meal_type), recipe);
                }
                None => {
                    tracing::debug!(recipe_id = %locked.recipe_id, "Ignoring unknown locked recipe");
                }
            }
        }

        Ok(resolved)
    }

    async fn assemble_menu(
        &self,
        family: &Family,
        identity: &Identity,
        week_start: chrono::NaiveDate,
        draft: WeeklyMenuDraft,
        mut locked: HashMap<(u8, MealType), Recipe>,
    ) -> Result<WeeklyMenu, CoreError> {
        let servings = (family
            .members
            .iter()
            .filter(|m| m.role != MemberRole::Infant)
            .count() as u32)
            .max(1);

        let mut days = Vec::with_capacity(draft.days.len());
        for generated_day in draft.days {
            let mut meals = Vec::with_capacity(generated_day.meals.len());

            for generated_meal in generated_day.meals {
                let slot = (generated_day.day_of_week, generated_meal.meal_type);
                let (recipe, is_locked) = match locked.remove(&slot) {
                    Some(recipe) => (recipe, true),
                    None => (
                        self.recipe_repository
                            .upsert_generated(generated_meal.recipe)
                            .await?,
                        false,
                    ),
                };

                meals.push(Meal {
                    id: generate_uuid_v7(),
                    meal_type: generated_meal.meal_type,
                    recipe,
                    is_locked,
                    servings,
                });
            }

            days.push(MenuDay {
                id: generate_uuid_v7(),
                day_of_week: generated_day.day_of_week,
                date: day_date(week_start, generated_day.day_of_week),
                meals,
            });
        }

        let (now, timestamp) = generate_timestamp();
        let mut menu = WeeklyMenu {
            id: Uuid::new_v7(timestamp),
            owner_id: identity.id(),
            family_id: family.id,
            week_start,
            status: MenuStatus::Draft,
            total_cost_estimate: draft.total_estimated_cost_eur,
            total_calories: 0,
            days,
            created_at: now,
        };
        menu.recompute_total_calories();

        Ok(menu)
    }
}

impl<F, R, M, RL, G> MenuService for Service<F, R, M, RL, G>
where
    F: FamilyRepository,
    R: RecipeRepository,
    M: MenuRepository,
    RL: RateLimiter,
    G: MenuGenerationService,
{
    #[instrument(skip(self, input), fields(user_id = %identity.id()))]
    async fn generate_menu(
        &self,
        identity: Identity,
        input: GenerateMenuInput,
    ) -> Result<WeeklyMenu, CoreError> {
        self.check_rate_limit(
            MENU_GENERATION_OPERATION,
            "Menu generation",
            self.rate_limit.menu_generations_per_window,
            &identity,
        )
        .await?;

        let family = self.plannable_family(&identity).await?;
        let week_start = parse_week_start(input.week_start.as_deref(), Utc::now().date_naive())?;

        let locked = self.resolve_locked_meals(input.locked_meals).await?;
        let mut locked_meals: Vec<LockedMeal> = locked
            .iter()
            .map(|((day, meal_type), recipe)| LockedMeal {
                day: *day,
                meal_type: *meal_type,
                recipe_title: recipe.title_en.clone(),
            })
            .collect();
        locked_meals.sort_by_key(|m| (m.day, m.meal_type));

        let context = build_family_context(&family, locked_meals);

        tracing::info!(
            event = "menu_generation_started",
            family_id = %family.id,
            %week_start,
            "Menu generation started"
        );
        let started = Instant::now();

        let draft = self.menu_generator.generate_weekly_menu(context).await?;
        let menu = self
            .assemble_menu(&family, &identity, week_start, draft, locked)
            .await?;

        // The previous draft goes only once its replacement is fully built.
        let removed = self
            .menu_repository
            .delete_drafts_for_week(identity.id(), week_start)
            .await?;
        if removed > 0 {
            tracing::debug!(removed, "Replaced existing draft for the week");
        }
        let menu = self.menu_repository.save(menu).await?;

        tracing::info!(
            event = "menu_generation_completed",
            family_id = %family.id,
            menu_id = %menu.id,
            duration_ms = started.elapsed().as_millis() as u64,
            "Menu generated"
        );

        Ok(menu)
    }

    async fn get_menu(&self, identity: Identity, menu_id: Uuid) -> Result<WeeklyMenu, CoreError> {
        self.owned_menu(&identity, menu_id).await
    }

    async fn get_current_menu(&self, identity: Identity) -> Result<WeeklyMenu, CoreError> {
        self.menu_repository
            .get_latest_for_owner(identity.id())
            .await?
            .ok_or_else(|| CoreError::NotFound("Menu".to_string()))
    }

    async fn get_menu_history(
        &self,
        identity: Identity,
        input: GetMenuHistoryInput,
    ) -> Result<MenuHistory, CoreError> {
        let page = input.page.max(1);
        let limit = input.limit.clamp(1, MAX_HISTORY_LIMIT);

        let (menus, total) = self
            .menu_repository
            .list_for_owner(identity.id(), page_offset(page, limit), u64::from(limit))
            .await?;

        Ok(MenuHistory {
            menus: menus.iter().map(Into::into).collect(),
            pagination: Pagination {
                page,
                limit,
                total,
                total_pages: total_pages(total, limit),
            },
        })
    }

    #[instrument(skip(self), fields(user_id = %identity.id()))]
    async fn get_alternatives(
        &self,
        identity: Identity,
        menu_id: Uuid,
        meal_id: Uuid,
    ) -> Result<Vec<Recipe>, CoreError> {
        let family = self.plannable_family(&identity).await?;
        let menu = self.owned_menu(&identity, menu_id).await?;

        self.check_rate_limit(
            ALTERNATIVES_OPERATION,
            "Alternatives",
            self.rate_limit.alternatives_per_window,
            &identity,
        )
        .await?;

        tracing::info!(event = "alternatives_requested", %menu_id, %meal_id, "Alternatives requested");

        let meal_type = menu
            .meals()
            .find(|meal| meal.id == meal_id)
            .map(|meal| meal.meal_type)
            .ok_or_else(|| CoreError::NotFound("Meal".to_string()))?;

        let context = build_family_context(&family, Vec::new());
        let existing_titles = menu
            .meals()
            .map(|meal| meal.recipe.title_en.clone())
            .collect();

        let alternatives = self
            .menu_generator
            .generate_alternatives(context, existing_titles, meal_type)
            .await?;

        let mut recipes = Vec::with_capacity(alternatives.len());
        for generated in alternatives {
            recipes.push(self.recipe_repository.upsert_generated(generated).await?);
        }

        Ok(recipes)
    }

    #[instrument(skip(self), fields(user_id = %identity.id()))]
    async fn replace_meal(
        &self,
        identity: Identity,
        input: ReplaceMealInput,
    ) -> Result<Meal, CoreError> {
        let mut menu = self.owned_menu(&identity, input.menu_id).await?;
        ensure_draft(&menu)?;

        if !menu.meals().any(|meal| meal.id == input.meal_id) {
            return Err(CoreError::NotFound("Meal".to_string()));
        }

        let recipe = self
            .recipe_repository
            .get_by_id(input.recipe_id)
            .await?
            .ok_or_else(|| CoreError::NotFound("Recipe".to_string()))?;

        let meal = menu
            .meal_mut(input.meal_id)
            .ok_or_else(|| CoreError::NotFound("Meal".to_string()))?;
        meal.recipe = recipe;
        let updated = meal.clone();

        menu.recompute_total_calories();
        self.menu_repository.save(menu).await?;

        tracing::info!(
            event = "meal_replaced",
            menu_id = %input.menu_id,
            meal_id = %input.meal_id,
            recipe_id = %input.recipe_id,
            "Meal replaced"
        );

        Ok(updated)
    }

    #[instrument(skip(self), fields(user_id = %identity.id()))]
    async fn lock_meal(&self, identity: Identity, input: LockMealInput) -> Result<Meal, CoreError> {
        let mut menu = self.owned_menu(&identity, input.menu_id).await?;
        ensure_draft(&menu)?;

        let meal = menu
            .meal_mut(input.meal_id)
            .ok_or_else(|| CoreError::NotFound("Meal".to_string()))?;
        meal.is_locked = input.is_locked;
        let updated = meal.clone();

        self.menu_repository.save(menu).await?;

        tracing::info!(
            event = "meal_locked",
            menu_id = %input.menu_id,
            meal_id = %input.meal_id,
            is_locked = input.is_locked,
            "Meal lock toggled"
        );

        Ok(updated)
    }

    #[instrument(skip(self), fields(user_id = %identity.id()))]
    async fn approve_menu(&self, identity: Identity, menu_id: Uuid) -> Result<WeeklyMenu, CoreError> {
        let mut menu = self.owned_menu(&identity, menu_id).await?;
        ensure_approvable(&menu)?;

        let archived = self
            .menu_repository
            .archive_approved_for_owner(identity.id())
            .await?;

        menu.status = MenuStatus::Approved;
        let menu = self.menu_repository.save(menu).await?;

        tracing::info!(
            event = "menu_approved",
            %menu_id,
            family_id = %menu.family_id,
            archived,
            "Menu approved"
        );

        Ok(menu)
    }
}

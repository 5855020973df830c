use uuid::Uuid;

use crate::{
    domain::{
        authentication::value_objects::Identity,
        common::{RateLimitConfig, entities::app_errors::CoreError, services::Service},
        menu_generation::{entities::GeneratedRecipe, ports::MockMenuGenerationService},
        recipe::{
            ports::{RecipeRepository, RecipeService},
            value_objects::{CreateRecipeInput, ListRecipesInput, UpdateRecipeInput},
        },
    },
    infrastructure::{
        family::repositories::family_repository::InMemoryFamilyRepository,
        menu::repositories::menu_repository::InMemoryMenuRepository,
        rate_limit::in_memory_rate_limiter::InMemoryRateLimiter,
        recipe::repositories::recipe_repository::InMemoryRecipeRepository,
    },
};

type TestService = Service<
    InMemoryFamilyRepository,
    InMemoryRecipeRepository,
    InMemoryMenuRepository,
    InMemoryRateLimiter,
    MockMenuGenerationService,
>;

fn service() -> (TestService, InMemoryRecipeRepository) {
    let recipes = InMemoryRecipeRepository::new();
    let service = Service::new(
        InMemoryFamilyRepository::new(),
        recipes.clone(),
        InMemoryMenuRepository::new(),
        InMemoryRateLimiter::new(),
        MockMenuGenerationService::new(),
        RateLimitConfig::default(),
    );
    (service, recipes)
}

fn create_input(title: &str, cuisine_type: Option<&str>) -> CreateRecipeInput {
    CreateRecipeInput {
        title_en: title.to_string(),
        title_fi: format!("{title} fi"),
        description_en: Some(format!("{title} description")),
        description_fi: None,
        cuisine_type: cuisine_type.map(str::to_string),
        prep_time_min: Some(25),
        calories_per_serving: Some(450),
        protein_per_serving: Some(18.5),
        carbs_per_serving: None,
        fat_per_serving: None,
        tags: vec!["weeknight".to_string()],
        source: Some("grandma".to_string()),
    }
}

#[tokio::test]
async fn test_create_recipe_is_custom_and_owned() {
    let (service, recipes) = service();
    let identity = Identity::new(Uuid::new_v4());

    let recipe = service
        .create_recipe(identity, create_input("Meatballs", Some("swedish")))
        .await
        .unwrap();

    assert!(recipe.is_custom);
    assert_eq!(recipe.user_id, Some(identity.id()));
    assert_eq!(recipe.source.as_deref(), Some("grandma"));
    assert_eq!(recipes.get_by_id(recipe.id).await.unwrap(), Some(recipe.clone()));
    assert_eq!(service.get_recipe(recipe.id).await.unwrap(), recipe);
}

#[tokio::test]
async fn test_get_unknown_recipe_is_not_found() {
    let (service, _) = service();

    let error = service.get_recipe(Uuid::new_v4()).await.unwrap_err();

    assert_eq!(error, CoreError::NotFound("Recipe".to_string()));
    assert_eq!(error.to_string(), "Recipe not found");
}

#[tokio::test]
async fn test_list_recipes_paginates_and_filters() {
    let (service, _) = service();
    let identity = Identity::new(Uuid::new_v4());
    for i in 0..3 {
        service
            .create_recipe(identity, create_input(&format!("Pasta {i}"), Some("italian")))
            .await
            .unwrap();
    }
    service
        .create_recipe(identity, create_input("Sushi", Some("japanese")))
        .await
        .unwrap();

    let italian = service
        .list_recipes(ListRecipesInput {
            page: 2,
            limit: 2,
            cuisine_type: Some("italian".to_string()),
        })
        .await
        .unwrap();
    assert_eq!(italian.recipes.len(), 1);
    assert_eq!(italian.pagination.total, 3);
    assert_eq!(italian.pagination.total_pages, 2);

    let all = service.list_recipes(ListRecipesInput::default()).await.unwrap();
    assert_eq!(all.pagination.limit, 20);
    assert_eq!(all.pagination.total, 4);
}

#[tokio::test]
async fn test_list_recipes_clamps_limit() {
    let (service, _) = service();

    let page = service
        .list_recipes(ListRecipesInput {
            page: 0,
            limit: 500,
            cuisine_type: None,
        })
        .await
        .unwrap();

    assert_eq!(page.pagination.page, 1);
    assert_eq!(page.pagination.limit, 100);
    assert_eq!(page.pagination.total_pages, 0);
}

#[tokio::test]
async fn test_owner_updates_and_clears_fields() {
    let (service, _) = service();
    let identity = Identity::new(Uuid::new_v4());
    let recipe = service
        .create_recipe(identity, create_input("Meatballs", Some("swedish")))
        .await
        .unwrap();

    let updated = service
        .update_recipe(
            identity,
            recipe.id,
            UpdateRecipeInput {
                title_fi: Some("Lihapullat".to_string()),
                source: Some(None),
                tags: Some(vec![]),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.title_fi, "Lihapullat");
    assert_eq!(updated.title_en, "Meatballs");
    assert_eq!(updated.source, None);
    assert!(updated.tags.is_empty());
    assert_eq!(updated.prep_time_min, Some(25));
    assert_eq!(service.get_recipe(recipe.id).await.unwrap(), updated);
}

#[tokio::test]
async fn test_non_owner_cannot_update_or_delete() {
    let (service, _) = service();
    let owner = Identity::new(Uuid::new_v4());
    let stranger = Identity::new(Uuid::new_v4());
    let recipe = service
        .create_recipe(owner, create_input("Meatballs", None))
        .await
        .unwrap();

    let forbidden = CoreError::Forbidden("Not the recipe owner".to_string());
    assert_eq!(
        service
            .update_recipe(stranger, recipe.id, UpdateRecipeInput::default())
            .await,
        Err(forbidden.clone())
    );
    assert_eq!(service.delete_recipe(stranger, recipe.id).await, Err(forbidden));
    assert_eq!(service.get_recipe(recipe.id).await.unwrap(), recipe);
}

#[tokio::test]
async fn test_generated_recipes_are_read_only() {
    let (service, recipes) = service();
    let identity = Identity::new(Uuid::new_v4());
    let generated: GeneratedRecipe = serde_json::from_value(serde_json::json!({
        "title_en": "Pea soup",
        "title_fi": "Hernekeitto",
        "calories_per_serving": 380,
        "ingredients": [
            { "name_en": "peas", "name_fi": "herneet", "quantity": 500, "unit": "g", "category": "legumes" },
            { "name_en": "pork", "name_fi": "sianliha", "quantity": 300, "unit": "g", "category": "meat" }
        ]
    }))
    .unwrap();
    let stored = recipes.upsert_generated(generated).await.unwrap();

    let result = service.delete_recipe(identity, stored.id).await;

    assert!(matches!(result, Err(CoreError::Forbidden(_))));
    assert!(service.get_recipe(stored.id).await.is_ok());
}

#[tokio::test]
async fn test_owner_deletes_recipe() {
    let (service, _) = service();
    let identity = Identity::new(Uuid::new_v4());
    let recipe = service
        .create_recipe(identity, create_input("Meatballs", None))
        .await
        .unwrap();

    service.delete_recipe(identity, recipe.id).await.unwrap();

    assert_eq!(
        service.get_recipe(recipe.id).await,
        Err(CoreError::NotFound("Recipe".to_string()))
    );
    assert_eq!(
        service.delete_recipe(identity, recipe.id).await,
        Err(CoreError::NotFound("Recipe".to_string()))
    );
}

use std::{collections::HashMap, sync::Arc};

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    menu_generation::entities::GeneratedRecipe,
    recipe::{
        entities::{Ingredient, Recipe},
        ports::RecipeRepository,
    },
};

#[derive(Debug, Default)]
struct Catalogue {
    recipes: HashMap<Uuid, Recipe>,
    /// Keyed by English name.
    ingredients: HashMap<String, Ingredient>,
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryRecipeRepository {
    catalogue: Arc<RwLock<Catalogue>>,
}

impl InMemoryRecipeRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RecipeRepository for InMemoryRecipeRepository {
    async fn get_by_id(&self, id: Uuid) -> Result<Option<Recipe>, CoreError> {
        Ok(self.catalogue.read().await.recipes.get(&id).cloned())
    }

    async fn list(
        &self,
        cuisine_type: Option<String>,
        offset: u64,
        limit: u64,
    ) -> Result<(Vec<Recipe>, u64), CoreError> {
        let catalogue = self.catalogue.read().await;

        let mut matching: Vec<&Recipe> = catalogue
            .recipes
            .values()
            .filter(|r| match &cuisine_type {
                Some(cuisine) => r.cuisine_type.as_ref() == Some(cuisine),
                None => true,
            })
            .collect();
        matching.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));

        let total = matching.len() as u64;
        let page = matching
            .into_iter()
            .skip(usize::try_from(offset).unwrap_or(usize::MAX))
            .take(usize::try_from(limit).unwrap_or(usize::MAX))
            .cloned()
            .collect();

        Ok((page, total))
    }

    async fn save(&self, recipe: Recipe) -> Result<Recipe, CoreError> {
        self.catalogue
            .write()
            .await
            .recipes
            .insert(recipe.id, recipe.clone());
        Ok(recipe)
    }

    async fn delete(&self, id: Uuid) -> Result<(), CoreError> {
        self.catalogue.write().await.recipes.remove(&id);
        Ok(())
    }

    async fn upsert_generated(&self, generated: GeneratedRecipe) -> Result<Recipe, CoreError> {
        let mut catalogue = self.catalogue.write().await;

        if let Some(existing) = catalogue
            .recipes
            .values()
            .find(|r| r.title_en == generated.title_en && r.title_fi == generated.title_fi)
        {
            return Ok(existing.clone());
        }

        let mut ingredients = Vec::with_capacity(generated.ingredients.len());
        for line in &generated.ingredients {
            let ingredient = catalogue
                .ingredients
                .entry(line.name_en.clone())
                .or_insert_with(|| Ingredient::from_generated(line));
            ingredients.push(ingredient.clone());
        }

        let recipe = Recipe::from_generated(&generated, &ingredients);
        catalogue.recipes.insert(recipe.id, recipe.clone());
        tracing::debug!(recipe_id = %recipe.id, title = %recipe.title_en, "Stored generated recipe");

        Ok(recipe)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::menu_generation::entities::GeneratedIngredient;

    fn generated(title_en: &str, title_fi: &str, ingredient_names: &[&str]) -> GeneratedRecipe {
        GeneratedRecipe {
            title_en: title_en.to_string(),
            title_fi: title_fi.to_string(),
            description_en: String::new(),
            description_fi: "Perinteinen".to_string(),
            cuisine_type: "finnish".to_string(),
            prep_time_min: 40,
            calories_per_serving: 480,
            protein_per_serving: 28.0,
            carbs_per_serving: 30.0,
            fat_per_serving: 20.0,
            tags: vec!["soup".to_string()],
            ingredients: ingredient_names
                .iter()
                .map(|name| GeneratedIngredient {
                    name_en: name.to_string(),
                    name_fi: format!("{name}-fi"),
                    quantity: 1.0,
                    unit: "kg".to_string(),
                    category: "produce".to_string(),
                    is_optional: false,
                })
                .collect(),
        }
    }

    #[tokio::test]
    async fn test_upsert_matches_on_both_titles() {
        let repository = InMemoryRecipeRepository::new();

        let first = repository
            .upsert_generated(generated("Salmon soup", "Lohikeitto", &["salmon", "potato"]))
            .await
            .unwrap();
        let again = repository
            .upsert_generated(generated("Salmon soup", "Lohikeitto", &["salmon", "leek"]))
            .await
            .unwrap();
        let other = repository
            .upsert_generated(generated("Salmon soup", "Lohisoppa", &["salmon", "potato"]))
            .await
            .unwrap();

        assert_eq!(first.id, again.id);
        assert_eq!(again.ingredients.len(), 2);
        assert_eq!(again.ingredients[1].name_en, "potato");
        assert_ne!(first.id, other.id);
    }

    #[tokio::test]
    async fn test_ingredients_are_shared_by_english_name() {
        let repository = InMemoryRecipeRepository::new();

        let soup = repository
            .upsert_generated(generated("Salmon soup", "Lohikeitto", &["salmon", "potato"]))
            .await
            .unwrap();
        let mash = repository
            .upsert_generated(generated("Mash", "Muusi", &["potato", "butter"]))
            .await
            .unwrap();

        assert_eq!(soup.ingredients[1].ingredient_id, mash.ingredients[0].ingredient_id);
        assert_ne!(soup.ingredients[0].ingredient_id, mash.ingredients[1].ingredient_id);
    }

    #[tokio::test]
    async fn test_empty_text_fields_are_stored_as_none() {
        let repository = InMemoryRecipeRepository::new();
        let mut recipe = generated("Porridge", "Puuro", &["oats", "milk"]);
        recipe.cuisine_type = String::new();

        let stored = repository.upsert_generated(recipe).await.unwrap();

        assert_eq!(stored.description_en, None);
        assert_eq!(stored.description_fi.as_deref(), Some("Perinteinen"));
        assert_eq!(stored.cuisine_type, None);
        assert_eq!(stored.calories_per_serving, Some(480));
        assert!(!stored.is_custom);
        assert_eq!(
            repository.get_by_id(stored.id).await.unwrap(),
            Some(stored)
        );
    }

    #[tokio::test]
    async fn test_list_filters_by_cuisine_newest_first() {
        let repository = InMemoryRecipeRepository::new();
        let mut older = generated("Salmon soup", "Lohikeitto", &["salmon", "potato"]);
        older.cuisine_type = "finnish".to_string();
        let older = repository.upsert_generated(older).await.unwrap();

        let mut newer = repository
            .upsert_generated(generated("Reindeer stew", "Poronkäristys", &["reindeer", "lingonberry"]))
            .await
            .unwrap();
        newer.created_at = older.created_at + chrono::Duration::seconds(5);
        let newer = repository.save(newer).await.unwrap();
        let mut pasta = generated("Carbonara", "Carbonara", &["pasta", "egg"]);
        pasta.cuisine_type = "italian".to_string();
        repository.upsert_generated(pasta).await.unwrap();

        let (finnish, total) = repository.list(Some("finnish".to_string()), 0, 10).await.unwrap();
        assert_eq!(total, 2);
        assert_eq!(finnish[0].id, newer.id);
        assert_eq!(finnish[1].id, older.id);

        let (page, total) = repository.list(None, 2, 10).await.unwrap();
        assert_eq!(total, 3);
        assert_eq!(page.len(), 1);
    }

    #[tokio::test]
    async fn test_delete_removes_recipe() {
        let repository = InMemoryRecipeRepository::new();
        let stored = repository
            .upsert_generated(generated("Porridge", "Puuro", &["oats", "milk"]))
            .await
            .unwrap();

        repository.delete(stored.id).await.unwrap();

        assert_eq!(repository.get_by_id(stored.id).await.unwrap(), None);
    }
}

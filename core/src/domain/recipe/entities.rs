use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    common::{generate_timestamp, generate_uuid_v7},
    menu::entities::Pagination,
    menu_generation::entities::{GeneratedIngredient, GeneratedRecipe},
    recipe::value_objects::{CreateRecipeInput, UpdateRecipeInput},
};

/// Catalogue entry shared by every recipe that uses the ingredient. Keyed by English name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Ingredient {
    pub id: Uuid,
    pub name_en: String,
    pub name_fi: String,
    pub category: String,
    pub default_unit: String,
}

impl Ingredient {
    pub fn from_generated(generated: &GeneratedIngredient) -> Self {
        Self {
            id: generate_uuid_v7(),
            name_en: generated.name_en.clone(),
            name_fi: generated.name_fi.clone(),
            category: generated.category.clone(),
            default_unit: generated.unit.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RecipeIngredient {
    pub ingredient_id: Uuid,
    pub name_en: String,
    pub name_fi: String,
    pub quantity: f64,
    pub unit: String,
    pub category: String,
    pub is_optional: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Recipe {
    pub id: Uuid,
    pub title_en: String,
    pub title_fi: String,
    pub description_en: Option<String>,
    pub description_fi: Option<String>,
    pub cuisine_type: Option<String>,
    pub prep_time_min: Option<u32>,
    pub calories_per_serving: Option<u32>,
    pub protein_per_serving: Option<f64>,
    pub carbs_per_serving: Option<f64>,
    pub fat_per_serving: Option<f64>,
    pub tags: Vec<String>,
    pub ingredients: Vec<RecipeIngredient>,
    /// Hand-authored recipes belong to their author; generated ones to nobody.
    pub is_custom: bool,
    pub user_id: Option<Uuid>,
    pub source: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

impl Recipe {
    /// Builds a catalogue recipe from generator output, linking each line to `ingredients`
    /// by English name.
    pub fn from_generated(generated: &GeneratedRecipe, ingredients: &[Ingredient]) -> Self {
        let (now, timestamp) = generate_timestamp();

        let lines = generated
            .ingredients
            .iter()
            .filter_map(|line| {
                ingredients
                    .iter()
                    .find(|i| i.name_en == line.name_en)
                    .map(|ingredient| RecipeIngredient {
                        ingredient_id: ingredient.id,
                        name_en: ingredient.name_en.clone(),
                        name_fi: ingredient.name_fi.clone(),
                        quantity: line.quantity,
                        unit: line.unit.clone(),
                        category: ingredient.category.clone(),
                        is_optional: line.is_optional,
                    })
            })
            .collect();

        Self {
            id: Uuid::new_v7(timestamp),
            title_en: generated.title_en.clone(),
            title_fi: generated.title_fi.clone(),
            description_en: non_empty(&generated.description_en),
            description_fi: non_empty(&generated.description_fi),
            cuisine_type: non_empty(&generated.cuisine_type),
            prep_time_min: Some(generated.prep_time_min),
            calories_per_serving: Some(generated.calories_per_serving),
            protein_per_serving: Some(generated.protein_per_serving),
            carbs_per_serving: Some(generated.carbs_per_serving),
            fat_per_serving: Some(generated.fat_per_serving),
            tags: generated.tags.clone(),
            ingredients: lines,
            is_custom: false,
            user_id: None,
            source: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn new_custom(owner_id: Uuid, input: CreateRecipeInput) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            title_en: input.title_en,
            title_fi: input.title_fi,
            description_en: input.description_en,
            description_fi: input.description_fi,
            cuisine_type: input.cuisine_type,
            prep_time_min: input.prep_time_min,
            calories_per_serving: input.calories_per_serving,
            protein_per_serving: input.protein_per_serving,
            carbs_per_serving: input.carbs_per_serving,
            fat_per_serving: input.fat_per_serving,
            tags: input.tags,
            ingredients: Vec::new(),
            is_custom: true,
            user_id: Some(owner_id),
            source: input.source,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_owned_by(&self, user_id: Uuid) -> bool {
        self.user_id == Some(user_id)
    }

    /// Applies only the fields present in `input`.
    pub fn apply(&mut self, input: UpdateRecipeInput) {
        if let Some(title_en) = input.title_en {
            self.title_en = title_en;
        }
        if let Some(title_fi) = input.title_fi {
            self.title_fi = title_fi;
        }
        if let Some(description_en) = input.description_en {
            self.description_en = description_en;
        }
        if let Some(description_fi) = input.description_fi {
            self.description_fi = description_fi;
        }
        if let Some(cuisine_type) = input.cuisine_type {
            self.cuisine_type = cuisine_type;
        }
        if let Some(prep_time_min) = input.prep_time_min {
            self.prep_time_min = prep_time_min;
        }
        if let Some(calories) = input.calories_per_serving {
            self.calories_per_serving = calories;
        }
        if let Some(protein) = input.protein_per_serving {
            self.protein_per_serving = protein;
        }
        if let Some(carbs) = input.carbs_per_serving {
            self.carbs_per_serving = carbs;
        }
        if let Some(fat) = input.fat_per_serving {
            self.fat_per_serving = fat;
        }
        if let Some(tags) = input.tags {
            self.tags = tags;
        }
        if let Some(source) = input.source {
            self.source = source;
        }
        self.updated_at = Utc::now();
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RecipePage {
    pub recipes: Vec<Recipe>,
    pub pagination: Pagination,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_input() -> CreateRecipeInput {
        CreateRecipeInput {
            title_en: "Karelian pasties".to_string(),
            title_fi: "Karjalanpiirakat".to_string(),
            description_en: Some("Rye crust, rice filling".to_string()),
            description_fi: None,
            cuisine_type: Some("finnish".to_string()),
            prep_time_min: Some(90),
            calories_per_serving: Some(310),
            protein_per_serving: None,
            carbs_per_serving: None,
            fat_per_serving: None,
            tags: vec!["baking".to_string()],
            source: None,
        }
    }

    #[test]
    fn test_custom_recipe_belongs_to_author() {
        let owner = Uuid::new_v4();
        let recipe = Recipe::new_custom(owner, create_input());

        assert!(recipe.is_custom);
        assert!(recipe.is_owned_by(owner));
        assert!(!recipe.is_owned_by(Uuid::new_v4()));
        assert!(recipe.ingredients.is_empty());
        assert_eq!(recipe.created_at, recipe.updated_at);
    }

    #[test]
    fn test_apply_distinguishes_absent_from_cleared() {
        let mut recipe = Recipe::new_custom(Uuid::new_v4(), create_input());

        recipe.apply(UpdateRecipeInput {
            title_en: Some("Rice pasties".to_string()),
            description_en: Some(None),
            calories_per_serving: Some(Some(280)),
            ..Default::default()
        });

        assert_eq!(recipe.title_en, "Rice pasties");
        assert_eq!(recipe.title_fi, "Karjalanpiirakat");
        assert_eq!(recipe.description_en, None);
        assert_eq!(recipe.cuisine_type.as_deref(), Some("finnish"));
        assert_eq!(recipe.calories_per_serving, Some(280));
        assert_eq!(recipe.prep_time_min, Some(90));
        assert!(recipe.updated_at >= recipe.created_at);
    }
}

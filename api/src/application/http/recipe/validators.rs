use menuforge_core::domain::recipe::value_objects::{
    CreateRecipeInput, ListRecipesInput, UpdateRecipeInput,
};
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Maps an explicit `null` to `Some(None)` so it can be told apart from an absent field.
fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateRecipeValidator {
    #[validate(length(min = 1, max = 255, message = "title_en must be between 1 and 255 characters"))]
    pub title_en: String,

    #[validate(length(min = 1, max = 255, message = "title_fi must be between 1 and 255 characters"))]
    pub title_fi: String,

    #[serde(default)]
    #[validate(length(max = 5000, message = "description_en must be at most 5000 characters"))]
    pub description_en: Option<String>,

    #[serde(default)]
    #[validate(length(max = 5000, message = "description_fi must be at most 5000 characters"))]
    pub description_fi: Option<String>,

    #[serde(default)]
    #[validate(length(max = 50, message = "cuisine_type must be at most 50 characters"))]
    pub cuisine_type: Option<String>,

    #[serde(default)]
    #[validate(range(min = 1, max = 32767, message = "prep_time_min must be between 1 and 32767"))]
    pub prep_time_min: Option<u32>,

    #[serde(default)]
    #[validate(range(min = 1, max = 32767, message = "calories_per_serving must be between 1 and 32767"))]
    pub calories_per_serving: Option<u32>,

    #[serde(default)]
    #[validate(range(exclusive_min = 0.0, max = 9999.0, message = "protein_per_serving must be positive"))]
    pub protein_per_serving: Option<f64>,

    #[serde(default)]
    #[validate(range(exclusive_min = 0.0, max = 9999.0, message = "carbs_per_serving must be positive"))]
    pub carbs_per_serving: Option<f64>,

    #[serde(default)]
    #[validate(range(exclusive_min = 0.0, max = 9999.0, message = "fat_per_serving must be positive"))]
    pub fat_per_serving: Option<f64>,

    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default)]
    #[validate(length(max = 500, message = "source must be at most 500 characters"))]
    pub source: Option<String>,
}

impl From<CreateRecipeValidator> for CreateRecipeInput {
    fn from(payload: CreateRecipeValidator) -> Self {
        Self {
            title_en: payload.title_en,
            title_fi: payload.title_fi,
            description_en: payload.description_en,
            description_fi: payload.description_fi,
            cuisine_type: payload.cuisine_type,
            prep_time_min: payload.prep_time_min,
            calories_per_serving: payload.calories_per_serving,
            protein_per_serving: payload.protein_per_serving,
            carbs_per_serving: payload.carbs_per_serving,
            fat_per_serving: payload.fat_per_serving,
            tags: payload.tags,
            source: payload.source,
        }
    }
}

/// Every field is optional; nullable ones are cleared by sending `null`.
#[derive(Debug, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateRecipeValidator {
    #[serde(default)]
    #[validate(length(min = 1, max = 255, message = "title_en must be between 1 and 255 characters"))]
    pub title_en: Option<String>,

    #[serde(default)]
    #[validate(length(min = 1, max = 255, message = "title_fi must be between 1 and 255 characters"))]
    pub title_fi: Option<String>,

    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<String>)]
    #[validate(length(max = 5000, message = "description_en must be at most 5000 characters"))]
    pub description_en: Option<Option<String>>,

    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<String>)]
    #[validate(length(max = 5000, message = "description_fi must be at most 5000 characters"))]
    pub description_fi: Option<Option<String>>,

    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<String>)]
    #[validate(length(max = 50, message = "cuisine_type must be at most 50 characters"))]
    pub cuisine_type: Option<Option<String>>,

    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<u32>)]
    #[validate(range(min = 1, max = 32767, message = "prep_time_min must be between 1 and 32767"))]
    pub prep_time_min: Option<Option<u32>>,

    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<u32>)]
    #[validate(range(min = 1, max = 32767, message = "calories_per_serving must be between 1 and 32767"))]
    pub calories_per_serving: Option<Option<u32>>,

    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<f64>)]
    #[validate(range(exclusive_min = 0.0, max = 9999.0, message = "protein_per_serving must be positive"))]
    pub protein_per_serving: Option<Option<f64>>,

    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<f64>)]
    #[validate(range(exclusive_min = 0.0, max = 9999.0, message = "carbs_per_serving must be positive"))]
    pub carbs_per_serving: Option<Option<f64>>,

    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<f64>)]
    #[validate(range(exclusive_min = 0.0, max = 9999.0, message = "fat_per_serving must be positive"))]
    pub fat_per_serving: Option<Option<f64>>,

    /// `null` empties the list.
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<Vec<String>>)]
    pub tags: Option<Option<Vec<String>>>,

    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<String>)]
    #[validate(length(max = 500, message = "source must be at most 500 characters"))]
    pub source: Option<Option<String>>,
}

impl From<UpdateRecipeValidator> for UpdateRecipeInput {
    fn from(payload: UpdateRecipeValidator) -> Self {
        Self {
            title_en: payload.title_en,
            title_fi: payload.title_fi,
            description_en: payload.description_en,
            description_fi: payload.description_fi,
            cuisine_type: payload.cuisine_type,
            prep_time_min: payload.prep_time_min,
            calories_per_serving: payload.calories_per_serving,
            protein_per_serving: payload.protein_per_serving,
            carbs_per_serving: payload.carbs_per_serving,
            fat_per_serving: payload.fat_per_serving,
            tags: payload.tags.map(Option::unwrap_or_default),
            source: payload.source,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct ListRecipesParams {
    #[schema(example = 1)]
    pub page: Option<u32>,
    #[schema(example = 20)]
    pub limit: Option<u32>,
    #[schema(example = "finnish")]
    pub cuisine_type: Option<String>,
}

impl From<ListRecipesParams> for ListRecipesInput {
    fn from(params: ListRecipesParams) -> Self {
        let defaults = ListRecipesInput::default();
        Self {
            page: params.page.unwrap_or(defaults.page),
            limit: params.limit.unwrap_or(defaults.limit),
            cuisine_type: params.cuisine_type.filter(|cuisine| !cuisine.is_empty()),
        }
    }
}

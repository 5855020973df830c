use std::fmt;
use std::marker::PhantomData;

use serde::de::{self, Deserializer, Unexpected, Visitor};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
}

impl MealType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MealType::Breakfast => "breakfast",
            MealType::Lunch => "lunch",
            MealType::Dinner => "dinner",
        }
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct GeneratedIngredient {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub name_en: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub name_fi: String,
    #[validate(range(exclusive_min = 0.0, message = "must be greater than 0"))]
    pub quantity: f64,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub unit: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub category: String,
    #[serde(default)]
    pub is_optional: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct GeneratedRecipe {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub title_en: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub title_fi: String,
    #[serde(default)]
    pub description_en: String,
    #[serde(default)]
    pub description_fi: String,
    #[serde(default = "default_cuisine_type")]
    pub cuisine_type: String,
    #[serde(default = "default_prep_time_min", deserialize_with = "whole_number")]
    #[validate(range(min = 1, max = 180, message = "must be between 1 and 180 minutes"))]
    pub prep_time_min: u32,
    #[serde(deserialize_with = "whole_number")]
    #[validate(range(min = 1, message = "must be a positive integer"))]
    pub calories_per_serving: u32,
    #[serde(default)]
    #[validate(range(min = 0.0, message = "must not be negative"))]
    pub protein_per_serving: f64,
    #[serde(default)]
    #[validate(range(min = 0.0, message = "must not be negative"))]
    pub carbs_per_serving: f64,
    #[serde(default)]
    #[validate(range(min = 0.0, message = "must not be negative"))]
    pub fat_per_serving: f64,
    #[serde(default)]
    pub tags: Vec<String>,
    #[validate(length(min = 2, message = "must contain at least 2 ingredients"), nested)]
    pub ingredients: Vec<GeneratedIngredient>,
}

fn default_cuisine_type() -> String {
    "international".to_string()
}

fn default_prep_time_min() -> u32 {
    30
}

/// Accepts integral JSON numbers in any encoding, so `520.0` reads as `520`.
fn whole_number<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: TryFrom<u64>,
{
    deserializer.deserialize_any(WholeNumber(PhantomData))
}

struct WholeNumber<T>(PhantomData<T>);

impl<'de, T: TryFrom<u64>> Visitor<'de> for WholeNumber<T> {
    type Value = T;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a non-negative whole number")
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<T, E> {
        match T::try_from(v) {
            Ok(value) => Ok(value),
            Err(_) => Err(E::invalid_value(Unexpected::Unsigned(v), &self)),
        }
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<T, E> {
        match u64::try_from(v) {
            Ok(unsigned) => self.visit_u64(unsigned),
            Err(_) => Err(E::invalid_value(Unexpected::Signed(v), &self)),
        }
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<T, E> {
        if v.fract() == 0.0 && (0.0..=u64::MAX as f64).contains(&v) {
            self.visit_u64(v as u64)
        } else {
            Err(E::invalid_value(Unexpected::Float(v), &self))
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct GeneratedMeal {
    pub meal_type: MealType,
    #[validate(nested)]
    pub recipe: GeneratedRecipe,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct GeneratedDay {
    #[serde(deserialize_with = "whole_number")]
    #[validate(range(min = 1, max = 7, message = "must be between 1 and 7"))]
    pub day_of_week: u8,
    #[validate(length(min = 2, max = 3, message = "must contain 2 or 3 meals"), nested)]
    pub meals: Vec<GeneratedMeal>,
}

/// A validated seven-day menu as produced by the generator.
///
/// Built fresh on every successful run and never patched afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct WeeklyMenuDraft {
    #[validate(length(equal = 7, message = "must contain exactly 7 days"), nested)]
    pub days: Vec<GeneratedDay>,
    #[serde(default)]
    #[validate(range(min = 0.0, message = "must not be negative"))]
    pub total_estimated_cost_eur: f64,
}

impl WeeklyMenuDraft {
    /// Iterates `(day_of_week, meal)` pairs in day order.
    pub fn meals(&self) -> impl Iterator<Item = (u8, &GeneratedMeal)> {
        self.days
            .iter()
            .flat_map(|day| day.meals.iter().map(move |meal| (day.day_of_week, meal)))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct AlternativesDraft {
    #[validate(length(min = 1, max = 5, message = "must contain between 1 and 5 recipes"), nested)]
    pub alternatives: Vec<GeneratedRecipe>,
}

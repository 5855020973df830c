//! Prompt construction for menu and alternatives generation.
//!
//! Everything here is pure text building: no I/O, no failure paths. Free-text values that
//! originate from users are passed through [`sanitize_user_input`] before they are embedded.

use serde::Serialize;

use crate::domain::menu_generation::{
    entities::MealType,
    value_objects::{FamilyContext, Severity},
};

/// Number of recipes requested for a single slot.
pub const ALTERNATIVES_COUNT: usize = 5;

const MAX_USER_INPUT_CHARS: usize = 500;

const PERSONA: &str = "You are a professional family nutritionist and chef specializing in Finnish and international cuisine.";

const RECIPE_SCHEMA: &str = r#"{
  "title_en": "string",
  "title_fi": "string",
  "description_en": "string",
  "description_fi": "string",
  "cuisine_type": "string",
  "prep_time_min": number,
  "calories_per_serving": number,
  "protein_per_serving": number,
  "carbs_per_serving": number,
  "fat_per_serving": number,
  "tags": ["string"],
  "ingredients": [
    {
      "name_en": "string",
      "name_fi": "string",
      "quantity": number,
      "unit": "string (g, ml, pcs, tbsp, tsp)",
      "category": "string",
      "is_optional": boolean
    }
  ]
}"#;

const MENU_SCHEMA: &str = r#"{
  "days": [
    {
      "day_of_week": 1,
      "meals": [
        {
          "meal_type": "breakfast" | "lunch" | "dinner",
          "recipe": <Recipe>
        }
      ]
    }
  ],
  "total_estimated_cost_eur": number
}"#;

/// Strips control characters and angle brackets, then truncates to 500 characters.
pub fn sanitize_user_input(input: &str) -> String {
    input
        .chars()
        .filter(|c| !c.is_ascii_control() && *c != '<' && *c != '>')
        .take(MAX_USER_INPUT_CHARS)
        .collect()
}

pub fn build_system_prompt(meals_per_day: u8) -> String {
    format!(
        "{PERSONA}
Your task is to generate a weekly meal plan for a family living in Finland.

Rules:
1. Generate exactly {meals_per_day} meals per day for 7 days (Monday through Sunday).
2. Every meal must use a unique recipe. Do not repeat a main dish within the same week.
3. All recipes must be safe for ALL family members given their dietary and medical restrictions.
4. Use only ingredients commonly available in Finnish grocery stores (S-Market / S-kaupat.fi).
5. Keep recipes practical for home cooking with a prep time under 60 minutes.
6. Give both English and Finnish names for every recipe and ingredient.
7. If a weekly budget is given, keep the total ingredient cost within it.
8. If a calorie target is given, stay within ±20% of it per person per day.
9. Respond ONLY with valid JSON matching the schema below.

JSON Schema:
{MENU_SCHEMA}

Recipe:
{RECIPE_SCHEMA}"
    )
}

pub fn build_alternatives_system_prompt() -> String {
    format!(
        "{PERSONA}
Generate {ALTERNATIVES_COUNT} alternative recipe suggestions for a single meal slot in a weekly menu.

Rules:
1. All recipes must be safe for ALL family members given their dietary and medical restrictions.
2. Use only ingredients commonly available in Finnish grocery stores (S-Market / S-kaupat.fi).
3. Keep recipes practical for home cooking with a prep time under 60 minutes.
4. Give both English and Finnish names for every recipe and ingredient.
5. Do NOT suggest any recipe that already appears in the current menu.
6. Respond ONLY with valid JSON: {{ \"alternatives\": [ ...Recipe objects ] }}

Recipe:
{RECIPE_SCHEMA}"
    )
}

#[derive(Serialize)]
struct UserPrompt {
    family: FamilySection,
    restrictions: RestrictionsSection,
    preferences: PreferencesSection,
    #[serde(skip_serializing_if = "Option::is_none")]
    budget: Option<BudgetSection>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    locked_meals: Vec<LockedMealSection>,
}

#[derive(Serialize)]
struct FamilySection {
    members: Vec<MemberSection>,
    servings: u32,
    meals_per_day: u8,
}

#[derive(Serialize)]
struct MemberSection {
    label: String,
    role: String,
    age: u32,
}

#[derive(Serialize)]
struct RestrictionsSection {
    dietary: Vec<DietarySection>,
    medical: Vec<MedicalSection>,
}

#[derive(Serialize)]
struct DietarySection {
    member: String,
    #[serde(rename = "type")]
    restriction_type: String,
    value: String,
    severity: Severity,
}

#[derive(Serialize)]
struct MedicalSection {
    member: String,
    condition: String,
}

#[derive(Serialize)]
struct PreferencesSection {
    cuisines: Vec<String>,
    excluded_ingredients: Vec<String>,
}

#[derive(Serialize)]
struct BudgetSection {
    weekly_budget_eur: Option<f64>,
    calorie_target_per_person: Option<u32>,
}

#[derive(Serialize)]
struct LockedMealSection {
    day: u8,
    meal_type: MealType,
    recipe_title: String,
    note: &'static str,
}

pub fn build_user_prompt(context: &FamilyContext) -> String {
    let members = context
        .members
        .iter()
        .enumerate()
        .map(|(index, member)| MemberSection {
            label: format!("Member {} ({}, {})", index + 1, member.role, member.age),
            role: member.role.clone(),
            age: member.age,
        })
        .collect();

    let budget = (context.weekly_budget_eur.is_some()
        || context.calorie_target_per_person.is_some())
    .then(|| BudgetSection {
        weekly_budget_eur: context.weekly_budget_eur,
        calorie_target_per_person: context.calorie_target_per_person,
    });

    let prompt = UserPrompt {
        family: FamilySection {
            members,
            servings: context.servings,
            meals_per_day: context.meals_per_day,
        },
        restrictions: RestrictionsSection {
            dietary: context
                .dietary_restrictions
                .iter()
                .map(|r| DietarySection {
                    member: sanitize_user_input(&r.member_label),
                    restriction_type: sanitize_user_input(&r.restriction_type),
                    value: sanitize_user_input(&r.value),
                    severity: r.severity,
                })
                .collect(),
            medical: context
                .medical_restrictions
                .iter()
                .map(|r| MedicalSection {
                    member: sanitize_user_input(&r.member_label),
                    condition: sanitize_user_input(&r.condition),
                })
                .collect(),
        },
        preferences: PreferencesSection {
            cuisines: context
                .cuisines
                .iter()
                .map(|c| sanitize_user_input(c))
                .collect(),
            excluded_ingredients: context
                .excluded_ingredients
                .iter()
                .map(|i| sanitize_user_input(i))
                .collect(),
        },
        budget,
        locked_meals: context
            .locked_meals
            .iter()
            .map(|m| LockedMealSection {
                day: m.day,
                meal_type: m.meal_type,
                recipe_title: m.recipe_title.clone(),
                note: "This meal is locked. Do NOT generate a recipe for this slot.",
            })
            .collect(),
    };

    // Plain data with string keys; serialization cannot fail.
    serde_json::to_string_pretty(&prompt).unwrap_or_default()
}

#[derive(Serialize)]
struct AlternativesUserPrompt<'a> {
    family: String,
    meal_type: MealType,
    existing_recipes_to_avoid: &'a [String],
}

pub fn build_alternatives_user_prompt(
    context: &FamilyContext,
    existing_recipe_titles: &[String],
    meal_type: MealType,
) -> String {
    let prompt = AlternativesUserPrompt {
        family: build_user_prompt(context),
        meal_type,
        existing_recipes_to_avoid: existing_recipe_titles,
    };

    serde_json::to_string(&prompt).unwrap_or_default()
}

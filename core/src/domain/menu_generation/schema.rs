//! Structural contract for generator output.
//!
//! Type-level shape is enforced by deserialization, bounds by `validator`. Any single
//! violation rejects the whole candidate. Family-specific rules live in `validators`.

use serde::de::DeserializeOwned;
use serde_json::json;
use serde_path_to_error::Segment;
use validator::{Validate, ValidationError, ValidationErrors, ValidationErrorsKind};

use crate::domain::menu_generation::entities::{AlternativesDraft, GeneratedRecipe, WeeklyMenuDraft};

pub fn parse_weekly_menu(value: serde_json::Value) -> Result<WeeklyMenuDraft, String> {
    conform(value)
}

pub fn parse_alternatives(value: serde_json::Value) -> Result<Vec<GeneratedRecipe>, String> {
    conform::<AlternativesDraft>(value).map(|draft| draft.alternatives)
}

fn conform<T>(value: serde_json::Value) -> Result<T, String>
where
    T: DeserializeOwned + Validate,
{
    let candidate: T = serde_path_to_error::deserialize(value).map_err(|error| {
        let path = field_path(error.path());
        if path.is_empty() {
            error.inner().to_string()
        } else {
            format!("{path}: {}", error.inner())
        }
    })?;

    candidate.validate().map_err(|errors| {
        let mut issues = Vec::new();
        collect_issues("", &errors, &mut issues);
        issues.sort();
        issues.join("; ")
    })?;

    Ok(candidate)
}

/// Renders a deserialization path in the same dotted form as validation issues.
fn field_path(path: &serde_path_to_error::Path) -> String {
    path.iter()
        .filter_map(|segment| match segment {
            Segment::Seq { index } => Some(index.to_string()),
            Segment::Map { key } => Some(key.clone()),
            Segment::Enum { variant } => Some(variant.clone()),
            Segment::Unknown => None,
        })
        .collect::<Vec<_>>()
        .join(".")
}

fn collect_issues(path: &str, errors: &ValidationErrors, issues: &mut Vec<String>) {
    for (field, kind) in errors.errors() {
        let field_path = if path.is_empty() {
            field.to_string()
        } else {
            format!("{path}.{field}")
        };

        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                for error in field_errors {
                    issues.push(format!("{field_path}: {}", describe(error)));
                }
            }
            ValidationErrorsKind::Struct(inner) => collect_issues(&field_path, inner, issues),
            ValidationErrorsKind::List(items) => {
                for (index, inner) in items {
                    collect_issues(&format!("{field_path}.{index}"), inner, issues);
                }
            }
        }
    }
}

fn describe(error: &ValidationError) -> String {
    error
        .message
        .as_ref()
        .map(|message| message.to_string())
        .unwrap_or_else(|| error.code.to_string())
}

fn recipe_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "title_en": { "type": "string" },
            "title_fi": { "type": "string" },
            "description_en": { "type": "string" },
            "description_fi": { "type": "string" },
            "cuisine_type": { "type": "string" },
            "prep_time_min": { "type": "integer" },
            "calories_per_serving": { "type": "integer" },
            "protein_per_serving": { "type": "number" },
            "carbs_per_serving": { "type": "number" },
            "fat_per_serving": { "type": "number" },
            "tags": { "type": "array", "items": { "type": "string" } },
            "ingredients": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "name_en": { "type": "string" },
                        "name_fi": { "type": "string" },
                        "quantity": { "type": "number" },
                        "unit": { "type": "string" },
                        "category": { "type": "string" },
                        "is_optional": { "type": "boolean" }
                    },
                    "required": ["name_en", "name_fi", "quantity", "unit", "category"]
                }
            }
        },
        "required": ["title_en", "title_fi", "calories_per_serving", "ingredients"]
    })
}

/// Response schema for providers that accept one alongside the prompt.
pub fn weekly_menu_response_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "days": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "day_of_week": { "type": "integer" },
                        "meals": {
                            "type": "array",
                            "items": {
                                "type": "object",
                                "properties": {
                                    "meal_type": {
                                        "type": "string",
                                        "enum": ["breakfast", "lunch", "dinner"]
                                    },
                                    "recipe": recipe_schema()
                                },
                                "required": ["meal_type", "recipe"]
                            }
                        }
                    },
                    "required": ["day_of_week", "meals"]
                }
            },
            "total_estimated_cost_eur": { "type": "number" }
        },
        "required": ["days"]
    })
}

pub fn alternatives_response_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "alternatives": {
                "type": "array",
                "items": recipe_schema()
            }
        },
        "required": ["alternatives"]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipe(title: &str) -> serde_json::Value {
        json!({
            "title_en": title,
            "title_fi": format!("{title} (fi)"),
            "calories_per_serving": 420,
            "ingredients": [
                { "name_en": "potato", "name_fi": "peruna", "quantity": 300, "unit": "g", "category": "produce" },
                { "name_en": "dill", "name_fi": "tilli", "quantity": 1, "unit": "tbsp", "category": "herbs" }
            ]
        })
    }

    fn menu(days: usize, meals: usize) -> serde_json::Value {
        let meal_types = ["breakfast", "lunch", "dinner"];
        let days: Vec<_> = (1..=days)
            .map(|day| {
                json!({
                    "day_of_week": day,
                    "meals": (0..meals)
                        .map(|m| json!({
                            "meal_type": meal_types[m % 3],
                            "recipe": recipe(&format!("Day {day} meal {m}")),
                        }))
                        .collect::<Vec<_>>(),
                })
            })
            .collect();
        json!({ "days": days })
    }

    #[test]
    fn test_well_formed_menu_applies_defaults() {
        let draft = parse_weekly_menu(menu(7, 3)).unwrap();
        assert_eq!(draft.days.len(), 7);
        assert_eq!(draft.total_estimated_cost_eur, 0.0);

        let recipe = &draft.days[0].meals[0].recipe;
        assert_eq!(recipe.prep_time_min, 30);
        assert_eq!(recipe.cuisine_type, "international");
        assert_eq!(recipe.protein_per_serving, 0.0);
        assert!(recipe.tags.is_empty());
        assert!(!recipe.ingredients[0].is_optional);
    }

    #[test]
    fn test_empty_day_list_is_rejected() {
        let error = parse_weekly_menu(json!({ "days": [] })).unwrap_err();
        assert_eq!(error, "days: must contain exactly 7 days");
    }

    #[test]
    fn test_day_with_one_meal_is_rejected() {
        let error = parse_weekly_menu(menu(7, 1)).unwrap_err();
        assert!(error.contains("days.0.meals: must contain 2 or 3 meals"));
    }

    #[test]
    fn test_nested_bound_violation_reports_path() {
        let mut value = menu(7, 2);
        value["days"][2]["meals"][1]["recipe"]["ingredients"][0]["quantity"] = json!(0);
        value["days"][2]["meals"][1]["recipe"]["prep_time_min"] = json!(240);
        let error = parse_weekly_menu(value).unwrap_err();
        assert!(error.contains("days.2.meals.1.recipe.ingredients.0.quantity: must be greater than 0"));
        assert!(error.contains("days.2.meals.1.recipe.prep_time_min: must be between 1 and 180 minutes"));
    }

    #[test]
    fn test_unknown_meal_type_is_rejected() {
        let mut value = menu(7, 2);
        value["days"][0]["meals"][0]["meal_type"] = json!("brunch");
        assert!(parse_weekly_menu(value).is_err());
    }

    #[test]
    fn test_missing_calories_is_rejected() {
        let mut value = menu(7, 2);
        value["days"][0]["meals"][0]["recipe"]
            .as_object_mut()
            .unwrap()
            .remove("calories_per_serving");
        let error = parse_weekly_menu(value).unwrap_err();
        assert!(error.contains("calories_per_serving"));
    }

    #[test]
    fn test_negative_cost_is_rejected() {
        let mut value = menu(7, 3);
        value["total_estimated_cost_eur"] = json!(-5.0);
        let error = parse_weekly_menu(value).unwrap_err();
        assert_eq!(error, "total_estimated_cost_eur: must not be negative");
    }

    #[test]
    fn test_alternatives_bounds() {
        assert!(parse_alternatives(json!({ "alternatives": [] })).is_err());
        let six: Vec<_> = (0..6).map(|i| recipe(&format!("Alt {i}"))).collect();
        assert!(parse_alternatives(json!({ "alternatives": six })).is_err());
        let two = parse_alternatives(json!({ "alternatives": [recipe("A"), recipe("B")] })).unwrap();
        assert_eq!(two.len(), 2);
    }

    #[test]
    fn test_integral_floats_are_accepted_for_whole_number_fields() {
        let mut value = menu(7, 2);
        value["days"][0]["day_of_week"] = json!(1.0);
        value["days"][0]["meals"][0]["recipe"]["calories_per_serving"] = json!(520.0);
        value["days"][0]["meals"][0]["recipe"]["prep_time_min"] = json!(30.0);
        let draft = parse_weekly_menu(value).unwrap();

        assert_eq!(draft.days[0].day_of_week, 1);
        let recipe = &draft.days[0].meals[0].recipe;
        assert_eq!(recipe.calories_per_serving, 520);
        assert_eq!(recipe.prep_time_min, 30);
    }

    #[test]
    fn test_fractional_whole_number_field_reports_path() {
        let mut alternative = recipe("Half minute");
        alternative["prep_time_min"] = json!(30.5);
        let error = parse_alternatives(json!({ "alternatives": [alternative] })).unwrap_err();
        assert!(error.starts_with("alternatives.0.prep_time_min: invalid value"));
    }

    #[test]
    fn test_type_mismatch_reports_path() {
        let mut value = menu(7, 2);
        value["days"][3]["meals"][1]["recipe"]["calories_per_serving"] = json!("lots");
        let error = parse_weekly_menu(value).unwrap_err();
        assert!(error.starts_with("days.3.meals.1.recipe.calories_per_serving: "));
    }

    #[test]
    fn test_recipe_with_single_ingredient_is_rejected() {
        let mut single = recipe("Lonely");
        single["ingredients"].as_array_mut().unwrap().truncate(1);
        let error = parse_alternatives(json!({ "alternatives": [single] })).unwrap_err();
        assert!(error.contains("alternatives.0.ingredients: must contain at least 2 ingredients"));
    }
}

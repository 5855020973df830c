//! Family-specific checks run after the structural schema has accepted a menu.
//!
//! Each check is independent and pure, and reports every violation it finds.

use std::collections::HashSet;

use regex::{Regex, RegexBuilder};

use crate::domain::menu_generation::{
    entities::WeeklyMenuDraft,
    value_objects::{ContextDietaryRestriction, StrictRestriction, ValidationResult},
};

/// Picks out the restrictions that must block generation. Moderate and mild ones are advisory.
pub fn strict_restrictions(restrictions: &[ContextDietaryRestriction]) -> Vec<StrictRestriction> {
    restrictions
        .iter()
        .filter(|r| r.severity.is_enforced())
        .map(|r| StrictRestriction {
            value: r.value.clone(),
        })
        .collect()
}

pub fn validate_meal_count(menu: &WeeklyMenuDraft, expected_meals_per_day: u8) -> ValidationResult {
    let errors = menu
        .days
        .iter()
        .filter(|day| day.meals.len() != expected_meals_per_day as usize)
        .map(|day| {
            format!(
                "Day {}: expected {} meals, got {}",
                day.day_of_week,
                expected_meals_per_day,
                day.meals.len()
            )
        })
        .collect();

    ValidationResult::from_errors(errors)
}

fn forbidden_pattern(value: &str) -> Option<Regex> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    RegexBuilder::new(&format!(r"\b{}\b", regex::escape(value)))
        .case_insensitive(true)
        .build()
        .map_err(|e| tracing::warn!("Skipping unusable restriction pattern {:?}: {}", value, e))
        .ok()
}

pub fn validate_restriction_compliance(
    menu: &WeeklyMenuDraft,
    restrictions: &[StrictRestriction],
) -> ValidationResult {
    if restrictions.is_empty() {
        return ValidationResult::from_errors(Vec::new());
    }

    let patterns: Vec<(&str, Regex)> = restrictions
        .iter()
        .filter_map(|r| forbidden_pattern(&r.value).map(|regex| (r.value.as_str(), regex)))
        .collect();

    let mut errors = Vec::new();
    for (day_of_week, meal) in menu.meals() {
        for ingredient in &meal.recipe.ingredients {
            for (value, regex) in &patterns {
                if regex.is_match(&ingredient.name_en) || regex.is_match(&ingredient.name_fi) {
                    errors.push(format!(
                        "Day {} {}: \"{}\" contains forbidden ingredient \"{}\" (matches restriction \"{}\")",
                        day_of_week, meal.meal_type, meal.recipe.title_en, ingredient.name_en, value
                    ));
                }
            }
        }
    }

    ValidationResult::from_errors(errors)
}

pub fn validate_uniqueness(menu: &WeeklyMenuDraft) -> ValidationResult {
    let mut seen = HashSet::new();
    let mut errors = Vec::new();

    for (day_of_week, meal) in menu.meals() {
        if !seen.insert(meal.recipe.title_en.to_lowercase()) {
            errors.push(format!(
                "Day {} {}: duplicate recipe \"{}\"",
                day_of_week, meal.meal_type, meal.recipe.title_en
            ));
        }
    }

    ValidationResult::from_errors(errors)
}

pub fn validate_completeness(menu: &WeeklyMenuDraft) -> ValidationResult {
    let mut errors = Vec::new();

    for (day_of_week, meal) in menu.meals() {
        let recipe = &meal.recipe;
        if recipe.title_en.is_empty() || recipe.title_fi.is_empty() {
            errors.push(format!(
                "Day {} {}: missing title_en or title_fi",
                day_of_week, meal.meal_type
            ));
        }
        if recipe.ingredients.len() < 2 {
            errors.push(format!(
                "Day {} {}: \"{}\" has fewer than 2 ingredients",
                day_of_week, meal.meal_type, recipe.title_en
            ));
        }
        if recipe.calories_per_serving == 0 {
            errors.push(format!(
                "Day {} {}: \"{}\" has invalid calories",
                day_of_week, meal.meal_type, recipe.title_en
            ));
        }
    }

    ValidationResult::from_errors(errors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::menu_generation::{
        entities::{GeneratedDay, GeneratedIngredient, GeneratedMeal, GeneratedRecipe, MealType},
        value_objects::Severity,
    };

    fn ingredient(name_en: &str, name_fi: &str) -> GeneratedIngredient {
        GeneratedIngredient {
            name_en: name_en.to_string(),
            name_fi: name_fi.to_string(),
            quantity: 100.0,
            unit: "g".to_string(),
            category: "produce".to_string(),
            is_optional: false,
        }
    }

    fn recipe(title: &str) -> GeneratedRecipe {
        GeneratedRecipe {
            title_en: title.to_string(),
            title_fi: format!("{title} fi"),
            description_en: String::new(),
            description_fi: String::new(),
            cuisine_type: "nordic".to_string(),
            prep_time_min: 25,
            calories_per_serving: 450,
            protein_per_serving: 20.0,
            carbs_per_serving: 40.0,
            fat_per_serving: 12.0,
            tags: vec![],
            ingredients: vec![ingredient("tomato", "tomaatti"), ingredient("onion", "sipuli")],
        }
    }

    fn menu(meals_per_day: usize) -> WeeklyMenuDraft {
        let types = [MealType::Breakfast, MealType::Lunch, MealType::Dinner];
        WeeklyMenuDraft {
            days: (1..=7u8)
                .map(|day| GeneratedDay {
                    day_of_week: day,
                    meals: types[..meals_per_day]
                        .iter()
                        .map(|t| GeneratedMeal {
                            meal_type: *t,
                            recipe: recipe(&format!("Day {day} {t}")),
                        })
                        .collect(),
                })
                .collect(),
            total_estimated_cost_eur: 95.0,
        }
    }

    fn strict(value: &str) -> StrictRestriction {
        StrictRestriction {
            value: value.to_string(),
        }
    }

    #[test]
    fn test_strict_only_filtering() {
        let restrictions = vec![
            ContextDietaryRestriction {
                member_label: "Member 1 (adult, 40)".to_string(),
                restriction_type: "allergy".to_string(),
                value: "peanuts".to_string(),
                severity: Severity::Strict,
            },
            ContextDietaryRestriction {
                member_label: "Member 1 (adult, 40)".to_string(),
                restriction_type: "intolerance".to_string(),
                value: "dairy".to_string(),
                severity: Severity::Mild,
            },
        ];

        assert_eq!(strict_restrictions(&restrictions), vec![strict("peanuts")]);
    }

    #[test]
    fn test_meal_count_reports_each_offending_day() {
        let mut draft = menu(3);
        draft.days[1].meals.pop();
        draft.days[4].meals.pop();

        let result = validate_meal_count(&draft, 3);
        assert!(!result.valid);
        assert_eq!(
            result.errors,
            vec![
                "Day 2: expected 3 meals, got 2".to_string(),
                "Day 5: expected 3 meals, got 2".to_string(),
            ]
        );
    }

    #[test]
    fn test_meal_count_is_stricter_than_schema() {
        let result = validate_meal_count(&menu(3), 2);
        assert!(!result.valid);
        assert_eq!(result.errors.len(), 7);
        assert!(validate_meal_count(&menu(2), 2).valid);
    }

    #[test]
    fn test_forbidden_ingredient_is_flagged_case_insensitively() {
        let mut draft = menu(3);
        draft.days[2].meals[1]
            .recipe
            .ingredients
            .push(ingredient("Butter", "voi"));

        let result = validate_restriction_compliance(&draft, &[strict("butter")]);
        assert!(!result.valid);
        assert_eq!(result.errors.len(), 1);
        assert!(result.errors[0].contains("Butter"));
        assert!(result.errors[0].starts_with("Day 3 lunch: \"Day 3 lunch\""));
        assert!(result.errors[0].contains("(matches restriction \"butter\")"));
    }

    #[test]
    fn test_restriction_matches_localized_name() {
        let mut draft = menu(2);
        draft.days[0].meals[0]
            .recipe
            .ingredients
            .push(ingredient("spread", "maapähkinä"));

        let result = validate_restriction_compliance(&draft, &[strict("maapähkinä")]);
        assert!(!result.valid);
    }

    #[test]
    fn test_restriction_requires_whole_word() {
        let mut draft = menu(2);
        draft.days[0].meals[0]
            .recipe
            .ingredients
            .push(ingredient("buttermilk", "piimä"));

        assert!(validate_restriction_compliance(&draft, &[strict("butter")]).valid);
        assert!(!validate_restriction_compliance(&draft, &[strict("buttermilk")]).valid);
    }

    #[test]
    fn test_restriction_value_is_escaped() {
        let mut draft = menu(2);
        draft.days[0].meals[0]
            .recipe
            .ingredients
            .push(ingredient("c.cumber", "kurkku"));

        assert!(!validate_restriction_compliance(&draft, &[strict("c.cumber")]).valid);
        assert!(validate_restriction_compliance(&draft, &[strict("c.c")]).valid);
        assert!(validate_restriction_compliance(&menu(2), &[strict("t.mato")]).valid);
    }

    #[test]
    fn test_no_strict_restrictions_always_passes() {
        assert_eq!(
            validate_restriction_compliance(&menu(3), &[]),
            ValidationResult {
                valid: true,
                errors: vec![]
            }
        );
    }

    #[test]
    fn test_duplicate_titles_are_reported() {
        let mut draft = menu(3);
        draft.days[1].meals[0].recipe.title_en = "day 1 BREAKFAST".to_string();

        let result = validate_uniqueness(&draft);
        assert!(!result.valid);
        assert_eq!(result.errors.len(), 1);
        assert!(result.errors[0].contains("duplicate"));
        assert!(result.errors[0].starts_with("Day 2 breakfast"));
    }

    #[test]
    fn test_every_duplicate_is_collected() {
        let mut draft = menu(2);
        for day in draft.days.iter_mut() {
            day.meals[1].recipe.title_en = "Porridge".to_string();
        }

        let result = validate_uniqueness(&draft);
        assert_eq!(result.errors.len(), 6);
    }

    #[test]
    fn test_completeness_catches_degenerate_recipes() {
        let mut draft = menu(2);
        draft.days[0].meals[0].recipe.title_fi = String::new();
        draft.days[3].meals[1].recipe.ingredients.truncate(1);
        draft.days[6].meals[0].recipe.calories_per_serving = 0;

        let result = validate_completeness(&draft);
        assert_eq!(
            result.errors,
            vec![
                "Day 1 breakfast: missing title_en or title_fi".to_string(),
                "Day 4 lunch: \"Day 4 lunch\" has fewer than 2 ingredients".to_string(),
                "Day 7 breakfast: \"Day 7 breakfast\" has invalid calories".to_string(),
            ]
        );
    }

    #[test]
    fn test_validators_are_idempotent() {
        let mut draft = menu(3);
        draft.days[1].meals[0].recipe.title_en = "Day 1 breakfast".to_string();
        draft.days[0].meals[2].recipe.ingredients.push(ingredient("Peanuts", "maapähkinät"));
        let restrictions = [strict("peanuts")];

        assert_eq!(validate_meal_count(&draft, 2), validate_meal_count(&draft, 2));
        assert_eq!(
            validate_restriction_compliance(&draft, &restrictions),
            validate_restriction_compliance(&draft, &restrictions)
        );
        assert_eq!(validate_uniqueness(&draft), validate_uniqueness(&draft));
        assert_eq!(validate_completeness(&draft), validate_completeness(&draft));
    }
}

use crate::domain::{
    common::entities::app_errors::CoreError,
    family::entities::{Family, MemberRole, PreferenceType},
    menu_generation::value_objects::{
        ContextDietaryRestriction, ContextMedicalRestriction, ContextMember, FamilyContext,
        LockedMeal,
    },
};

pub fn ensure_meals_per_day(meals_per_day: u8) -> Result<(), CoreError> {
    match meals_per_day {
        2 | 3 => Ok(()),
        other => Err(CoreError::InvalidInput(format!(
            "meals_per_day must be 2 or 3, got {other}"
        ))),
    }
}

/// Fails when a family cannot be planned for.
pub fn ensure_plannable(family: &Family) -> Result<(), CoreError> {
    if family.members.is_empty() {
        return Err(CoreError::InvalidInput(
            "Family has no members. Add at least one member before generating a menu.".to_string(),
        ));
    }
    Ok(())
}

/// Builds the anonymized context sent to the generator. Member names stay behind.
pub fn build_family_context(family: &Family, locked_meals: Vec<LockedMeal>) -> FamilyContext {
    let servings = family
        .members
        .iter()
        .filter(|m| m.role != MemberRole::Infant)
        .count() as u32;

    let mut dietary_restrictions = Vec::new();
    let mut medical_restrictions = Vec::new();

    for (i, member) in family.members.iter().enumerate() {
        let label = format!("Member {} ({}, {})", i + 1, member.role, member.age);

        dietary_restrictions.extend(member.dietary_restrictions.iter().map(|r| {
            ContextDietaryRestriction {
                member_label: label.clone(),
                restriction_type: r.restriction_type.as_str().to_string(),
                value: r.value.clone(),
                severity: r.severity,
            }
        }));
        medical_restrictions.extend(member.medical_restrictions.iter().map(|r| {
            ContextMedicalRestriction {
                member_label: label.clone(),
                condition: r.condition.clone(),
            }
        }));
    }

    let preferences_of = |kind: PreferenceType| -> Vec<String> {
        family
            .preferences
            .iter()
            .filter(|p| p.preference_type == kind)
            .map(|p| p.value.clone())
            .collect()
    };

    FamilyContext {
        members: family
            .members
            .iter()
            .map(|m| ContextMember {
                role: m.role.as_str().to_string(),
                age: m.age,
            })
            .collect(),
        servings: servings.max(1),
        meals_per_day: family.meals_per_day,
        dietary_restrictions,
        medical_restrictions,
        cuisines: preferences_of(PreferenceType::Cuisine),
        excluded_ingredients: preferences_of(PreferenceType::ExcludedIngredient),
        weekly_budget_eur: family.weekly_budget_eur,
        calorie_target_per_person: family.calorie_target_per_person,
        locked_meals,
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;
    use crate::domain::{
        family::{
            entities::{DietaryRestriction, MedicalRestriction, Preference, RestrictionType},
            value_objects::{FamilyMemberInput, SaveFamilyInput},
        },
        menu_generation::{entities::MealType, value_objects::Severity},
    };

    fn member(name: &str, age: u32, role: MemberRole) -> FamilyMemberInput {
        FamilyMemberInput {
            name: name.to_string(),
            age,
            role,
            dietary_restrictions: vec![],
            medical_restrictions: vec![],
        }
    }

    fn family(members: Vec<FamilyMemberInput>) -> Family {
        Family::new(
            Uuid::new_v4(),
            SaveFamilyInput {
                name: "Virtanen".to_string(),
                meals_per_day: 3,
                weekly_budget_eur: Some(150.0),
                calorie_target_per_person: Some(2000),
                members,
                preferences: vec![
                    Preference {
                        preference_type: PreferenceType::Cuisine,
                        value: "finnish".to_string(),
                    },
                    Preference {
                        preference_type: PreferenceType::ExcludedIngredient,
                        value: "liver".to_string(),
                    },
                    Preference {
                        preference_type: PreferenceType::FavoriteRecipe,
                        value: "Karjalanpiirakka".to_string(),
                    },
                ],
            },
        )
    }

    #[test]
    fn test_context_is_anonymized() {
        let mut child = member("Aino", 6, MemberRole::Child);
        child.dietary_restrictions.push(DietaryRestriction {
            restriction_type: RestrictionType::Allergy,
            value: "peanuts".to_string(),
            severity: Severity::Strict,
        });
        let mut adult = member("Mikko", 40, MemberRole::Adult);
        adult.medical_restrictions.push(MedicalRestriction {
            condition: "celiac disease".to_string(),
            notes: Some("diagnosed 2019".to_string()),
        });

        let context = build_family_context(&family(vec![adult, child]), vec![]);

        assert_eq!(context.dietary_restrictions.len(), 1);
        assert_eq!(
            context.dietary_restrictions[0].member_label,
            "Member 2 (child, 6)"
        );
        assert_eq!(context.dietary_restrictions[0].restriction_type, "allergy");
        assert_eq!(
            context.medical_restrictions[0].member_label,
            "Member 1 (adult, 40)"
        );

        let serialized = serde_json::to_string(&context).unwrap();
        assert!(!serialized.contains("Aino"));
        assert!(!serialized.contains("Mikko"));
        assert!(!serialized.contains("diagnosed"));
    }

    #[test]
    fn test_servings_exclude_infants() {
        let context = build_family_context(
            &family(vec![
                member("A", 35, MemberRole::Adult),
                member("B", 33, MemberRole::Adult),
                member("C", 0, MemberRole::Infant),
            ]),
            vec![],
        );
        assert_eq!(context.servings, 2);
        assert_eq!(context.members.len(), 3);
        assert_eq!(context.members[2].role, "infant");
    }

    #[test]
    fn test_servings_never_below_one() {
        let context =
            build_family_context(&family(vec![member("C", 1, MemberRole::Infant)]), vec![]);
        assert_eq!(context.servings, 1);
    }

    #[test]
    fn test_preferences_and_locked_meals_are_copied() {
        let locked = vec![LockedMeal {
            day: 3,
            meal_type: MealType::Dinner,
            recipe_title: "Salmon soup".to_string(),
        }];

        let context = build_family_context(
            &family(vec![member("A", 35, MemberRole::Adult)]),
            locked.clone(),
        );

        assert_eq!(context.cuisines, vec!["finnish".to_string()]);
        assert_eq!(context.excluded_ingredients, vec!["liver".to_string()]);
        assert_eq!(context.weekly_budget_eur, Some(150.0));
        assert_eq!(context.calorie_target_per_person, Some(2000));
        assert_eq!(context.meals_per_day, 3);
        assert_eq!(context.locked_meals, locked);
    }

    #[test]
    fn test_meals_per_day_bounds() {
        assert!(ensure_meals_per_day(2).is_ok());
        assert!(ensure_meals_per_day(3).is_ok());
        assert!(matches!(
            ensure_meals_per_day(4),
            Err(CoreError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_empty_family_is_not_plannable() {
        let result = ensure_plannable(&family(vec![]));
        assert!(matches!(result, Err(CoreError::InvalidInput(message)) if message.starts_with("Family has no members")));
    }
}

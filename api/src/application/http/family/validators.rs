use menuforge_core::domain::{
    family::{
        entities::{
            DietaryRestriction, MedicalRestriction, MemberRole, Preference, PreferenceType,
            RestrictionType,
        },
        value_objects::{FamilyMemberInput, SaveFamilyInput},
    },
    menu_generation::value_objects::Severity,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

fn default_meals_per_day() -> u8 {
    3
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct DietaryRestrictionValidator {
    #[serde(rename = "type")]
    pub restriction_type: RestrictionType,

    #[validate(length(min = 1, max = 500, message = "value must be between 1 and 500 characters"))]
    pub value: String,

    pub severity: Severity,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct MedicalRestrictionValidator {
    #[validate(length(min = 1, max = 500, message = "condition must be between 1 and 500 characters"))]
    pub condition: String,

    #[serde(default)]
    #[validate(length(max = 1000, message = "notes must be at most 1000 characters"))]
    pub notes: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct PreferenceValidator {
    #[serde(rename = "type")]
    pub preference_type: PreferenceType,

    #[validate(length(min = 1, max = 500, message = "value must be between 1 and 500 characters"))]
    pub value: String,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct FamilyMemberValidator {
    #[validate(length(min = 1, max = 100, message = "name must be between 1 and 100 characters"))]
    pub name: String,

    #[validate(range(max = 150, message = "age must be between 0 and 150"))]
    pub age: u32,

    pub role: MemberRole,

    #[serde(default)]
    #[validate(nested)]
    pub dietary_restrictions: Vec<DietaryRestrictionValidator>,

    #[serde(default)]
    #[validate(nested)]
    pub medical_restrictions: Vec<MedicalRestrictionValidator>,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct SaveFamilyValidator {
    #[validate(length(min = 1, max = 100, message = "name must be between 1 and 100 characters"))]
    pub name: String,

    #[serde(default = "default_meals_per_day")]
    #[validate(range(min = 2, max = 3, message = "meals_per_day must be 2 or 3"))]
    pub meals_per_day: u8,

    #[serde(default)]
    #[validate(range(exclusive_min = 0.0, max = 99999.0, message = "weekly_budget_eur must be positive"))]
    pub weekly_budget_eur: Option<f64>,

    #[serde(default)]
    #[validate(range(min = 1, max = 10000, message = "calorie_target_per_person must be between 1 and 10000"))]
    pub calorie_target_per_person: Option<u32>,

    #[serde(default)]
    #[validate(nested)]
    pub members: Vec<FamilyMemberValidator>,

    #[serde(default)]
    #[validate(nested)]
    pub preferences: Vec<PreferenceValidator>,
}

impl From<SaveFamilyValidator> for SaveFamilyInput {
    fn from(payload: SaveFamilyValidator) -> Self {
        Self {
            name: payload.name,
            meals_per_day: payload.meals_per_day,
            weekly_budget_eur: payload.weekly_budget_eur,
            calorie_target_per_person: payload.calorie_target_per_person,
            members: payload
                .members
                .into_iter()
                .map(|member| FamilyMemberInput {
                    name: member.name,
                    age: member.age,
                    role: member.role,
                    dietary_restrictions: member
                        .dietary_restrictions
                        .into_iter()
                        .map(|r| DietaryRestriction {
                            restriction_type: r.restriction_type,
                            value: r.value,
                            severity: r.severity,
                        })
                        .collect(),
                    medical_restrictions: member
                        .medical_restrictions
                        .into_iter()
                        .map(|r| MedicalRestriction {
                            condition: r.condition,
                            notes: r.notes,
                        })
                        .collect(),
                })
                .collect(),
            preferences: payload
                .preferences
                .into_iter()
                .map(|p| Preference {
                    preference_type: p.preference_type,
                    value: p.value,
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn payload() -> serde_json::Value {
        json!({
            "name": "Virtanen",
            "members": [{
                "name": "Aino",
                "age": 34,
                "role": "ADULT",
                "dietary_restrictions": [
                    { "type": "allergy", "value": "peanuts", "severity": "strict" }
                ]
            }],
            "preferences": [{ "type": "cuisine", "value": "Finnish" }]
        })
    }

    #[test]
    fn test_defaults_and_uppercase_enums() {
        let validator: SaveFamilyValidator = serde_json::from_value(payload()).unwrap();

        assert!(validator.validate().is_ok());
        assert_eq!(validator.meals_per_day, 3);

        let input = SaveFamilyInput::from(validator);
        assert_eq!(input.members[0].role, MemberRole::Adult);
        assert_eq!(input.members[0].dietary_restrictions[0].severity, Severity::Strict);
        assert_eq!(input.preferences[0].preference_type, PreferenceType::Cuisine);
    }

    #[test]
    fn test_meals_per_day_out_of_range() {
        let mut body = payload();
        body["meals_per_day"] = json!(4);
        let validator: SaveFamilyValidator = serde_json::from_value(body).unwrap();

        assert!(validator.validate().is_err());
    }

    #[test]
    fn test_nested_member_is_validated() {
        let mut body = payload();
        body["members"][0]["name"] = json!("");
        let validator: SaveFamilyValidator = serde_json::from_value(body).unwrap();

        let errors = validator.validate().unwrap_err();
        assert!(errors.to_string().contains("name"));
    }

    #[test]
    fn test_non_positive_budget_is_rejected() {
        let mut body = payload();
        body["weekly_budget_eur"] = json!(0.0);
        let validator: SaveFamilyValidator = serde_json::from_value(body).unwrap();

        assert!(validator.validate().is_err());
    }
}

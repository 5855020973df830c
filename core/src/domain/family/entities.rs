use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    common::generate_timestamp, family::value_objects::SaveFamilyInput,
    menu_generation::value_objects::Severity,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum MemberRole {
    #[serde(alias = "ADULT")]
    Adult,
    #[serde(alias = "CHILD")]
    Child,
    #[serde(alias = "INFANT")]
    Infant,
}

impl MemberRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            MemberRole::Adult => "adult",
            MemberRole::Child => "child",
            MemberRole::Infant => "infant",
        }
    }
}

impl fmt::Display for MemberRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum RestrictionType {
    #[serde(alias = "ALLERGY")]
    Allergy,
    #[serde(alias = "INTOLERANCE")]
    Intolerance,
    #[serde(alias = "LIFESTYLE")]
    Lifestyle,
}

impl RestrictionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RestrictionType::Allergy => "allergy",
            RestrictionType::Intolerance => "intolerance",
            RestrictionType::Lifestyle => "lifestyle",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum PreferenceType {
    #[serde(alias = "CUISINE")]
    Cuisine,
    #[serde(alias = "EXCLUDED_INGREDIENT")]
    ExcludedIngredient,
    #[serde(alias = "FAVORITE_RECIPE")]
    FavoriteRecipe,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DietaryRestriction {
    #[serde(rename = "type")]
    pub restriction_type: RestrictionType,
    pub value: String,
    pub severity: Severity,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MedicalRestriction {
    pub condition: String,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Preference {
    #[serde(rename = "type")]
    pub preference_type: PreferenceType,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FamilyMember {
    pub id: Uuid,
    pub name: String,
    pub age: u32,
    pub role: MemberRole,
    pub dietary_restrictions: Vec<DietaryRestriction>,
    pub medical_restrictions: Vec<MedicalRestriction>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Family {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub name: String,
    pub meals_per_day: u8,
    pub weekly_budget_eur: Option<f64>,
    pub calorie_target_per_person: Option<u32>,
    pub members: Vec<FamilyMember>,
    pub preferences: Vec<Preference>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Family {
    pub fn new(owner_id: Uuid, input: SaveFamilyInput) -> Self {
        let (now, timestamp) = generate_timestamp();

        let mut family = Self {
            id: Uuid::new_v7(timestamp),
            owner_id,
            name: String::new(),
            meals_per_day: input.meals_per_day,
            weekly_budget_eur: None,
            calorie_target_per_person: None,
            members: Vec::new(),
            preferences: Vec::new(),
            created_at: now,
            updated_at: now,
        };
        family.apply(input);
        family.updated_at = now;
        family
    }

    /// Replaces every editable field, keeping identity and creation time.
    pub fn apply(&mut self, input: SaveFamilyInput) {
        let (now, timestamp) = generate_timestamp();

        self.name = input.name;
        self.meals_per_day = input.meals_per_day;
        self.weekly_budget_eur = input.weekly_budget_eur;
        self.calorie_target_per_person = input.calorie_target_per_person;
        self.members = input
            .members
            .into_iter()
            .map(|member| FamilyMember {
                id: Uuid::new_v7(timestamp),
                name: member.name,
                age: member.age,
                role: member.role,
                dietary_restrictions: member.dietary_restrictions,
                medical_restrictions: member.medical_restrictions,
            })
            .collect();
        self.preferences = input.preferences;
        self.updated_at = now;
    }
}

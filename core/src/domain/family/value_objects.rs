use crate::domain::family::entities::{
    DietaryRestriction, MedicalRestriction, MemberRole, Preference,
};

#[derive(Debug, Clone)]
pub struct FamilyMemberInput {
    pub name: String,
    pub age: u32,
    pub role: MemberRole,
    pub dietary_restrictions: Vec<DietaryRestriction>,
    pub medical_restrictions: Vec<MedicalRestriction>,
}

#[derive(Debug, Clone)]
pub struct SaveFamilyInput {
    pub name: String,
    pub meals_per_day: u8,
    pub weekly_budget_eur: Option<f64>,
    pub calorie_target_per_person: Option<u32>,
    pub members: Vec<FamilyMemberInput>,
    pub preferences: Vec<Preference>,
}

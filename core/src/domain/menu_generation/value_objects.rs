use std::{fmt, time::Duration};

use serde::{Deserialize, Deserializer, Serialize, de};
use utoipa::ToSchema;

use crate::domain::menu_generation::entities::MealType;

/// Anonymized family description handed to the generator. Immutable per call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FamilyContext {
    pub members: Vec<ContextMember>,
    pub servings: u32,
    pub meals_per_day: u8,
    pub dietary_restrictions: Vec<ContextDietaryRestriction>,
    pub medical_restrictions: Vec<ContextMedicalRestriction>,
    pub cuisines: Vec<String>,
    pub excluded_ingredients: Vec<String>,
    pub weekly_budget_eur: Option<f64>,
    pub calorie_target_per_person: Option<u32>,
    pub locked_meals: Vec<LockedMeal>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextMember {
    pub role: String,
    pub age: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextDietaryRestriction {
    pub member_label: String,
    pub restriction_type: String,
    pub value: String,
    pub severity: Severity,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextMedicalRestriction {
    pub member_label: String,
    pub condition: String,
}

/// A slot the caller keeps; the generator is told not to author a recipe for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LockedMeal {
    pub day: u8,
    pub meal_type: MealType,
    pub recipe_title: String,
}

/// Serialized lowercase; parsed case-insensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Strict,
    Moderate,
    Mild,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Strict => "strict",
            Severity::Moderate => "moderate",
            Severity::Mild => "mild",
        }
    }

    /// Only strict restrictions block a generated menu.
    pub fn is_enforced(&self) -> bool {
        matches!(self, Severity::Strict)
    }
}

impl std::str::FromStr for Severity {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "strict" => Ok(Severity::Strict),
            "moderate" => Ok(Severity::Moderate),
            "mild" => Ok(Severity::Mild),
            _ => Err(format!("unknown severity `{value}`, expected strict, moderate or mild")),
        }
    }
}

impl<'de> Deserialize<'de> for Severity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrictRestriction {
    pub value: String,
}

/// Outcome of one semantic check: every violation found, not just the first.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationResult {
    pub valid: bool,
    pub errors: Vec<String>,
}

impl ValidationResult {
    pub fn from_errors(errors: Vec<String>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationKind {
    WeeklyMenu,
    Alternatives,
}

impl GenerationKind {
    /// Label used in exhaustion errors: "AI {label} generation failed ...".
    pub fn label(&self) -> &'static str {
        match self {
            GenerationKind::WeeklyMenu => "menu",
            GenerationKind::Alternatives => "alternatives",
        }
    }
}

impl fmt::Display for GenerationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GenerationStage {
    BuildingPrompt,
    Calling,
    Parsing,
    StructuralValidation,
    MealCount,
    RestrictionCompliance,
    Uniqueness,
    Completeness,
}

impl GenerationStage {
    pub fn is_semantic(&self) -> bool {
        matches!(
            self,
            GenerationStage::MealCount
                | GenerationStage::RestrictionCompliance
                | GenerationStage::Uniqueness
                | GenerationStage::Completeness
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GenerationStage::BuildingPrompt => "building_prompt",
            GenerationStage::Calling => "calling",
            GenerationStage::Parsing => "parsing",
            GenerationStage::StructuralValidation => "structural_validation",
            GenerationStage::MealCount => "meal_count",
            GenerationStage::RestrictionCompliance => "restriction_compliance",
            GenerationStage::Uniqueness => "uniqueness",
            GenerationStage::Completeness => "completeness",
        }
    }
}

impl fmt::Display for GenerationStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The family-specific checks run after structural validation, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SemanticStage {
    MealCount,
    RestrictionCompliance,
    Uniqueness,
    Completeness,
}

impl SemanticStage {
    pub const ALL: [SemanticStage; 4] = [
        SemanticStage::MealCount,
        SemanticStage::RestrictionCompliance,
        SemanticStage::Uniqueness,
        SemanticStage::Completeness,
    ];
}

impl From<SemanticStage> for GenerationStage {
    fn from(stage: SemanticStage) -> Self {
        match stage {
            SemanticStage::MealCount => GenerationStage::MealCount,
            SemanticStage::RestrictionCompliance => GenerationStage::RestrictionCompliance,
            SemanticStage::Uniqueness => GenerationStage::Uniqueness,
            SemanticStage::Completeness => GenerationStage::Completeness,
        }
    }
}

/// One call to the text-generation backend.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub system_prompt: String,
    pub user_prompt: String,
    pub response_schema: serde_json::Value,
    pub timeout: Duration,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_parses_any_casing() {
        for raw in ["strict", "STRICT", "Strict", "sTrict", "stRICT"] {
            let parsed: Severity = serde_json::from_value(serde_json::json!(raw)).unwrap();
            assert_eq!(parsed, Severity::Strict, "{raw}");
        }
        let mild: Severity = serde_json::from_value(serde_json::json!("mILD")).unwrap();
        assert_eq!(mild, Severity::Mild);
        assert_eq!(serde_json::to_value(Severity::Moderate).unwrap(), "moderate");
    }

    #[test]
    fn test_unknown_severity_is_rejected() {
        let error = serde_json::from_value::<Severity>(serde_json::json!("fatal")).unwrap_err();
        assert!(error.to_string().contains("unknown severity `fatal`"));
    }

    #[test]
    fn test_semantic_stages_map_onto_generation_stages() {
        let mapped: Vec<GenerationStage> = SemanticStage::ALL.into_iter().map(Into::into).collect();
        assert_eq!(
            mapped,
            vec![
                GenerationStage::MealCount,
                GenerationStage::RestrictionCompliance,
                GenerationStage::Uniqueness,
                GenerationStage::Completeness,
            ]
        );
        assert!(mapped.iter().all(GenerationStage::is_semantic));
    }
}

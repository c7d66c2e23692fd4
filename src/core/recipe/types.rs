use serde::{Deserialize, Serialize};
use strum::Display;

use crate::core::catalog::IngredientCategory;

// ProductBucket — template selected by keyword classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ProductBucket {
    MeatAnalog,
    DairyAnalog,
    Generic,
}

/// Recommended usage window for a suggested ingredient, in percent of the
/// formula.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PercentageRange {
    pub min: f64,
    pub max: f64,
    pub recommended: f64,
}

/// One suggested formula ingredient with usage range and substitutes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngredientSuggestion {
    pub name: String,
    pub category: IngredientCategory,
    pub percentage_range: PercentageRange,
    /// What the ingredient does in the formula ("function" on the wire).
    #[serde(rename = "function")]
    pub role: String,
    pub alternatives: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstimatedProperties {
    pub texture: String,
    pub color: String,
    pub shelf_life_days: u32,
    pub cooking_behavior: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComplianceNotes {
    pub regulatory_status: String,
    pub allergens: Vec<String>,
    pub certifications_possible: Vec<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DevelopmentTimeline {
    pub prototype_weeks: u32,
    pub testing_weeks: u32,
    pub regulatory_weeks: u32,
}

/// Full analyzer output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeAnalysis {
    pub suggested_ingredients: Vec<IngredientSuggestion>,
    pub estimated_properties: EstimatedProperties,
    pub compliance_notes: ComplianceNotes,
    pub development_timeline: DevelopmentTimeline,
}

/// Optional constraints accompanying an analysis request.
#[derive(Debug, Clone, Default)]
pub struct AnalysisConstraints {
    /// Accepted for forward compatibility; the templates do not vary by
    /// market yet.
    pub target_market: Option<String>,
    /// Any subset of "gluten-free", "soy-free", "nut-free".
    pub dietary_restrictions: Vec<String>,
    /// Maximum ingredient budget in USD per kg.
    pub budget_constraint: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bucket_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&ProductBucket::MeatAnalog).unwrap(),
            "\"meat_analog\""
        );
        assert_eq!(ProductBucket::DairyAnalog.to_string(), "dairy_analog");
    }

    #[test]
    fn suggestion_role_serializes_as_function() {
        let suggestion = IngredientSuggestion {
            name: "Agar".into(),
            category: IngredientCategory::Texturizer,
            percentage_range: PercentageRange {
                min: 1.0,
                max: 3.0,
                recommended: 2.0,
            },
            role: "Firmness and sliceability".into(),
            alternatives: vec!["Carrageenan".into()],
        };
        let json = serde_json::to_value(&suggestion).unwrap();
        assert_eq!(json["function"], "Firmness and sliceability");
        assert_eq!(json["category"], "texturizer");
        assert_eq!(json["percentage_range"]["recommended"], 2.0);
    }

    #[test]
    fn analysis_constraints_default_is_unconstrained() {
        let constraints = AnalysisConstraints::default();
        assert!(constraints.target_market.is_none());
        assert!(constraints.dietary_restrictions.is_empty());
        assert!(constraints.budget_constraint.is_none());
    }
}

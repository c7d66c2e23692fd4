use crate::error::ValidationError;

use super::templates;
use super::types::{
    AnalysisConstraints, ComplianceNotes, DevelopmentTimeline, IngredientSuggestion,
    RecipeAnalysis,
};

/// Restriction labels recognized by the dietary post-filter.
const GLUTEN_FREE: &str = "gluten-free";
const SOY_FREE: &str = "soy-free";
const NUT_FREE: &str = "nut-free";

/// Budget (USD/kg) below which premium ingredients are dropped.
const PREMIUM_BUDGET_FLOOR: f64 = 20.0;

/// Analyzes a product description into suggested ingredients, property
/// estimates, compliance notes and a development timeline.
///
/// Pure function of the description, the constraints, and the static
/// template tables.
pub fn analyze(
    description: &str,
    constraints: &AnalysisConstraints,
) -> Result<RecipeAnalysis, ValidationError> {
    if description.trim().is_empty() {
        return Err(ValidationError::EmptyDescription);
    }

    let bucket = templates::classify(description);
    let suggestions = templates::suggestions_for(bucket);
    let estimated_properties = templates::properties_for(bucket);

    // Allergens are derived from the unfiltered template list. Keeping the
    // declaration conservative: a restriction may drop the ingredient, yet
    // the allergen stays flagged. See DESIGN.md before changing this.
    let allergens = determine_allergens(&suggestions);

    let suggested_ingredients = apply_budget_constraint(
        apply_dietary_restrictions(suggestions, &constraints.dietary_restrictions),
        constraints.budget_constraint,
    );

    Ok(RecipeAnalysis {
        suggested_ingredients,
        estimated_properties,
        compliance_notes: ComplianceNotes {
            regulatory_status: "Generally Recognized as Safe (GRAS) ingredients".into(),
            allergens,
            certifications_possible: vec![
                "Vegan".into(),
                "Non-GMO".into(),
                "Organic (with certified ingredients)".into(),
            ],
        },
        development_timeline: DevelopmentTimeline {
            prototype_weeks: 2,
            testing_weeks: 4,
            regulatory_weeks: 8,
        },
    })
}

/// Derives the allergen declaration from suggestion names, deduplicated in
/// first-detection order.
fn determine_allergens(suggestions: &[IngredientSuggestion]) -> Vec<String> {
    let mut allergens: Vec<String> = Vec::new();

    for suggestion in suggestions {
        let name = suggestion.name.to_lowercase();
        if name.contains("soy") {
            push_unique(&mut allergens, "Soy");
        }
        if name.contains("cashew") || name.contains("almond") {
            push_unique(&mut allergens, "Tree Nuts");
        }
        if name.contains("wheat") || name.contains("gluten") {
            push_unique(&mut allergens, "Gluten");
        }
    }

    allergens
}

fn push_unique(list: &mut Vec<String>, label: &str) {
    if !list.iter().any(|existing| existing == label) {
        list.push(label.to_owned());
    }
}

/// Drops suggestions whose names match an excluded substring per restriction.
fn apply_dietary_restrictions(
    suggestions: Vec<IngredientSuggestion>,
    restrictions: &[String],
) -> Vec<IngredientSuggestion> {
    if restrictions.is_empty() {
        return suggestions;
    }

    let gluten_free = restrictions.iter().any(|r| r == GLUTEN_FREE);
    let soy_free = restrictions.iter().any(|r| r == SOY_FREE);
    let nut_free = restrictions.iter().any(|r| r == NUT_FREE);

    suggestions
        .into_iter()
        .filter(|suggestion| {
            let name = suggestion.name.to_lowercase();
            if gluten_free && name.contains("wheat") {
                return false;
            }
            if soy_free && name.contains("soy") {
                return false;
            }
            if nut_free && (name.contains("cashew") || name.contains("almond")) {
                return false;
            }
            true
        })
        .collect()
}

/// Cost-control heuristic: a tight budget excludes the premium ingredients.
fn apply_budget_constraint(
    suggestions: Vec<IngredientSuggestion>,
    budget: Option<f64>,
) -> Vec<IngredientSuggestion> {
    match budget {
        Some(limit) if limit > 0.0 && limit < PREMIUM_BUDGET_FLOOR => suggestions
            .into_iter()
            .filter(|suggestion| {
                let name = suggestion.name.to_lowercase();
                !name.contains("heme") && !name.contains("lab-grown")
            })
            .collect(),
        _ => suggestions,
    }
}

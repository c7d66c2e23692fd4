use crate::error::ValidationError;

use super::cost::cost_analysis;
use super::rules::{AXIS_COUNT, TASTE_RULES, TasteAxis};
use super::types::{
    FormulaIngredient, Recommendation, RecommendationKind, TastePrediction, TasteReport,
};

/// Absolute tolerance on the formula percentage sum.
pub const PERCENTAGE_TOLERANCE: f64 = 0.1;

const CONFIDENCE_FLOOR: f64 = 0.85;
const CONFIDENCE_CAP: f64 = 0.98;
const CONFIDENCE_PER_INGREDIENT: f64 = 0.03;

/// Clamps a score to the 0–10 axis scale.
fn clamp_axis(score: f64) -> f64 {
    score.clamp(0.0, 10.0)
}

/// Rounds to two decimal places.
pub(super) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Rejects empty formulas and percentage sums outside 100 ± 0.1.
///
/// Violations are client errors, never silently corrected.
pub fn validate_formula(formula: &[FormulaIngredient]) -> Result<(), ValidationError> {
    if formula.is_empty() {
        return Err(ValidationError::EmptyFormula);
    }
    let total: f64 = formula.iter().map(|ingredient| ingredient.percentage).sum();
    if (total - 100.0).abs() > PERCENTAGE_TOLERANCE {
        return Err(ValidationError::PercentageSum { total });
    }
    Ok(())
}

/// Runs the full predictor pipeline: validation, axis scoring,
/// recommendations, and cost analysis.
///
/// Pure function of the formula and the static reference tables.
pub fn predict(formula: &[FormulaIngredient]) -> Result<TasteReport, ValidationError> {
    validate_formula(formula)?;

    let predictions = predict_taste_profile(formula);
    let recommendations = generate_recommendations(&predictions);
    let cost_analysis = cost_analysis(formula);

    Ok(TasteReport {
        predictions,
        recommendations,
        cost_analysis,
    })
}

/// Scores the five axes from the rule table and derives the overall rating
/// and confidence. Assumes the formula has already been validated.
#[allow(clippy::cast_precision_loss)]
pub(super) fn predict_taste_profile(formula: &[FormulaIngredient]) -> TastePrediction {
    let mut axes = [0.0_f64; AXIS_COUNT];

    for ingredient in formula {
        let weight = ingredient.percentage / 100.0;
        let name = ingredient.name.to_lowercase();
        for rule in TASTE_RULES {
            if !name.contains(rule.needle) {
                continue;
            }
            for &(axis, per_unit) in rule.contributions {
                axes[axis as usize] += per_unit * weight;
            }
        }
    }

    let sweetness = clamp_axis(axes[TasteAxis::Sweetness as usize]);
    let umami = clamp_axis(axes[TasteAxis::Umami as usize]);
    let bitterness = clamp_axis(axes[TasteAxis::Bitterness as usize]);
    let saltiness = clamp_axis(axes[TasteAxis::Saltiness as usize]);
    let sourness = clamp_axis(axes[TasteAxis::Sourness as usize]);

    // Weighted blend over the clamped axis values; bitterness counts against.
    let overall_rating = clamp_axis(
        umami * 0.3
            + (10.0 - bitterness) * 0.25
            + saltiness * 0.2
            + sweetness * 0.15
            + sourness * 0.1,
    );

    let confidence = round2(
        (CONFIDENCE_FLOOR + formula.len() as f64 * CONFIDENCE_PER_INGREDIENT).min(CONFIDENCE_CAP),
    );

    TastePrediction {
        sweetness,
        umami,
        bitterness,
        saltiness,
        sourness,
        overall_rating,
        confidence,
    }
}

/// Threshold-based advisory rules, evaluated in fixed order.
fn generate_recommendations(predictions: &TastePrediction) -> Vec<Recommendation> {
    let mut recommendations = Vec::new();

    if predictions.bitterness > 6.0 {
        recommendations.push(Recommendation {
            kind: RecommendationKind::Add,
            ingredient: "Natural Sweetener".into(),
            reason: "Reduce perceived bitterness".into(),
            impact: 0.8,
        });
    }

    if predictions.umami < 5.0 {
        recommendations.push(Recommendation {
            kind: RecommendationKind::Add,
            ingredient: "Yeast Extract".into(),
            reason: "Enhance savory flavor profile".into(),
            impact: 1.2,
        });
    }

    if predictions.overall_rating < 6.0 {
        recommendations.push(Recommendation {
            kind: RecommendationKind::Add,
            ingredient: "Heme (Plant-Based)".into(),
            reason: "Improve overall taste and meatiness".into(),
            impact: 1.5,
        });
    }

    recommendations
}

#[cfg(test)]
mod tests {
    use super::*;

    fn share(name: &str, percentage: f64) -> FormulaIngredient {
        FormulaIngredient {
            id: None,
            name: name.into(),
            percentage,
        }
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn empty_formula_is_rejected() {
        assert_eq!(validate_formula(&[]), Err(ValidationError::EmptyFormula));
    }

    #[test]
    fn sums_within_tolerance_are_accepted() {
        assert!(validate_formula(&[share("Water", 99.95)]).is_ok());
        assert!(validate_formula(&[share("Water", 100.05)]).is_ok());
        assert!(validate_formula(&[share("Water", 60.0), share("Salt", 40.0)]).is_ok());
    }

    #[test]
    fn sums_outside_tolerance_are_rejected() {
        assert!(matches!(
            validate_formula(&[share("Water", 98.0)]),
            Err(ValidationError::PercentageSum { .. })
        ));
        assert!(matches!(
            validate_formula(&[share("Water", 102.0)]),
            Err(ValidationError::PercentageSum { .. })
        ));
    }

    #[test]
    fn protein_rule_scales_with_weight() {
        let prediction = predict_taste_profile(&[
            share("Soy Protein Isolate", 50.0),
            share("Water", 50.0),
        ]);
        assert!(close(prediction.umami, 3.25));
        assert!(close(prediction.bitterness, 1.6));
        assert!(close(prediction.sweetness, 0.0));
        assert!(close(prediction.sourness, 0.0));
    }

    #[test]
    fn multiple_rules_fire_for_one_name() {
        // "smoked yeast protein" hits the protein, yeast, and smoke rules.
        let prediction = predict_taste_profile(&[share("Smoked Yeast Protein", 100.0)]);
        assert!(close(prediction.umami, 6.5 + 9.2 + 3.2));
        assert!(close(prediction.bitterness, 3.2 + 4.5));
        assert!(close(prediction.saltiness, 6.5));
    }

    #[test]
    fn rule_match_is_case_insensitive() {
        let upper = predict_taste_profile(&[share("HEME (PLANT-BASED)", 100.0)]);
        let lower = predict_taste_profile(&[share("heme (plant-based)", 100.0)]);
        assert!(close(upper.umami, lower.umami));
        assert!(close(upper.umami, 9.5));
    }

    #[test]
    fn axes_are_clamped_to_ten() {
        // Two heme-heavy entries push raw umami past 10.
        let prediction = predict_taste_profile(&[
            share("Heme (Plant-Based)", 60.0),
            share("Yeast Extract", 40.0),
        ]);
        assert!(prediction.umami <= 10.0);
        assert!(prediction.overall_rating <= 10.0);
    }

    #[test]
    fn unmatched_formula_scores_zero_axes() {
        let prediction = predict_taste_profile(&[share("Water", 100.0)]);
        assert!(close(prediction.sweetness, 0.0));
        assert!(close(prediction.umami, 0.0));
        assert!(close(prediction.bitterness, 0.0));
        assert!(close(prediction.saltiness, 0.0));
        assert!(close(prediction.sourness, 0.0));
        // All-zero axes still earn the (10 - bitterness) term.
        assert!(close(prediction.overall_rating, 2.5));
    }

    #[test]
    fn confidence_grows_with_ingredient_count_and_caps() {
        let one = predict_taste_profile(&[share("Water", 100.0)]);
        assert!(close(one.confidence, 0.88));

        let two = predict_taste_profile(&[share("Water", 50.0), share("Salt", 50.0)]);
        assert!(close(two.confidence, 0.91));
        assert!(two.confidence >= one.confidence);

        let many: Vec<_> = (0..10).map(|i| share(&format!("Item {i}"), 10.0)).collect();
        let capped = predict_taste_profile(&many);
        assert!(close(capped.confidence, 0.98));
    }

    #[test]
    fn water_only_formula_triggers_umami_and_rating_recommendations() {
        let report = predict(&[share("Water", 100.0)]).unwrap();
        let ingredients: Vec<&str> = report
            .recommendations
            .iter()
            .map(|rec| rec.ingredient.as_str())
            .collect();
        assert_eq!(ingredients, vec!["Yeast Extract", "Heme (Plant-Based)"]);
        assert!(
            report
                .recommendations
                .iter()
                .all(|rec| rec.kind == RecommendationKind::Add)
        );
    }

    #[test]
    fn bitter_formula_leads_with_sweetener_recommendation() {
        // "Smoked Protein" fires both the smoke and protein rules:
        // bitterness 4.5 + 3.2 = 7.7, umami 3.2 + 6.5 = 9.7.
        let report = predict(&[share("Smoked Protein", 100.0)]).unwrap();
        assert!(close(report.predictions.bitterness, 7.7));

        let ingredients: Vec<&str> = report
            .recommendations
            .iter()
            .map(|rec| rec.ingredient.as_str())
            .collect();
        // Umami is high, so only the bitterness and rating rules fire, in
        // that order.
        assert_eq!(ingredients, vec!["Natural Sweetener", "Heme (Plant-Based)"]);
        assert!(close(report.recommendations[0].impact, 0.8));
    }

    #[test]
    fn predict_rejects_invalid_sums() {
        assert!(predict(&[share("Water", 90.0)]).is_err());
    }
}

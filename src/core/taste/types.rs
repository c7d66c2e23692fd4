use serde::{Deserialize, Serialize};
use strum::Display;

/// One ingredient share of a formula.
///
/// Percentages are parts of the whole formula; a valid formula sums to
/// 100 ± 0.1 across its entries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormulaIngredient {
    /// Client-side record id; opaque to the engine.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub percentage: f64,
}

/// Predicted taste vector: five axes clamped to [0, 10], plus the derived
/// overall rating and a model confidence in [0.85, 0.98].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TastePrediction {
    pub sweetness: f64,
    pub umami: f64,
    pub bitterness: f64,
    pub saltiness: f64,
    pub sourness: f64,
    pub overall_rating: f64,
    pub confidence: f64,
}

// RecommendationKind — what to do with the named ingredient
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum RecommendationKind {
    Increase,
    Decrease,
    Add,
    Remove,
}

/// Advisory formula adjustment with an estimated rating impact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    #[serde(rename = "type")]
    pub kind: RecommendationKind,
    pub ingredient: String,
    pub reason: String,
    pub impact: f64,
}

/// Per-ingredient share of the formula cost (USD per kg of product).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CostLine {
    pub ingredient: String,
    pub cost: f64,
    pub percentage: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CostAnalysis {
    pub total_cost_per_kg: f64,
    pub cost_breakdown: Vec<CostLine>,
}

/// Full predictor output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TasteReport {
    pub predictions: TastePrediction,
    pub recommendations: Vec<Recommendation>,
    pub cost_analysis: CostAnalysis,
}

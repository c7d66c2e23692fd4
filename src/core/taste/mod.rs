//! Taste-profile prediction: rule-driven axis scoring, advisory
//! recommendations, and formula cost analysis.

mod cost;
mod predictor;
mod rules;
mod types;

pub use cost::cost_analysis;
pub use predictor::{PERCENTAGE_TOLERANCE, predict, validate_formula};
pub use rules::{TASTE_RULES, TasteAxis, TasteRule};
pub use types::{
    CostAnalysis, CostLine, FormulaIngredient, Recommendation, RecommendationKind, TastePrediction,
    TasteReport,
};

//! Recipe analysis: free-text product descriptions classified into product
//! buckets, expanded into ingredient suggestion templates, then filtered by
//! dietary and budget constraints.

mod analyzer;
mod templates;
mod types;

pub use analyzer::analyze;
pub use templates::classify;
pub use types::{
    AnalysisConstraints, ComplianceNotes, DevelopmentTimeline, EstimatedProperties,
    IngredientSuggestion, PercentageRange, ProductBucket, RecipeAnalysis,
};

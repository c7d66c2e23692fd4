use crate::core::catalog;

use super::predictor::round2;
use super::types::{CostAnalysis, CostLine, FormulaIngredient};

/// Computes the per-ingredient and total formula cost from the catalog.
///
/// Each breakdown line is rounded to 2 decimals independently; the total is
/// the rounded sum of the *unrounded* line costs, so the lines need not sum
/// exactly to the total.
pub fn cost_analysis(formula: &[FormulaIngredient]) -> CostAnalysis {
    let mut total = 0.0_f64;

    let cost_breakdown = formula
        .iter()
        .map(|ingredient| {
            let unit_cost = catalog::cost_per_kg(&ingredient.name);
            let line_cost = unit_cost * ingredient.percentage / 100.0;
            total += line_cost;

            CostLine {
                ingredient: ingredient.name.clone(),
                cost: round2(line_cost),
                percentage: ingredient.percentage,
            }
        })
        .collect();

    CostAnalysis {
        total_cost_per_kg: round2(total),
        cost_breakdown,
    }
}

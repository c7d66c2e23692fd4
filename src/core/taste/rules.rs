//! Substring-match taste contribution rules.
//!
//! The mock model is an explicit ordered list of (needle, contributions)
//! records rather than ad hoc branching, so the heuristic stays auditable
//! and extending it is a data change, not a code change.

// TasteAxis — the five scored axes. Discriminants index the accumulator array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TasteAxis {
    Sweetness,
    Umami,
    Bitterness,
    Saltiness,
    Sourness,
}

pub const AXIS_COUNT: usize = 5;

/// One contribution rule: fires when the lowercased ingredient name contains
/// `needle`, adding `per_unit × weight` to each listed axis. Rules are
/// independent and additive; several may fire for the same name.
#[derive(Debug, Clone, Copy)]
pub struct TasteRule {
    pub needle: &'static str,
    pub contributions: &'static [(TasteAxis, f64)],
}

/// Base rule set. Sweetness and sourness have no base rules and stay 0
/// unless the set is extended.
pub const TASTE_RULES: &[TasteRule] = &[
    TasteRule {
        needle: "protein",
        contributions: &[(TasteAxis::Umami, 6.5), (TasteAxis::Bitterness, 3.2)],
    },
    TasteRule {
        needle: "yeast",
        contributions: &[(TasteAxis::Umami, 9.2), (TasteAxis::Saltiness, 6.5)],
    },
    TasteRule {
        needle: "heme",
        contributions: &[(TasteAxis::Umami, 9.5), (TasteAxis::Bitterness, 2.1)],
    },
    TasteRule {
        needle: "smoke",
        contributions: &[(TasteAxis::Bitterness, 4.5), (TasteAxis::Umami, 3.2)],
    },
];

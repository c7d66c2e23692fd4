//! Fixed suggestion templates and property estimates per product bucket.
//!
//! Templates are data, not logic: each bucket maps to a fixed ingredient
//! list and a fixed property estimate, mirroring the reference formulation
//! library.

use crate::core::catalog::IngredientCategory;

use super::types::{EstimatedProperties, IngredientSuggestion, PercentageRange, ProductBucket};

/// Keyword groups checked in order; the first group with a hit wins, no
/// fallthrough.
const MEAT_KEYWORDS: &[&str] = &["burger", "patty", "meat"];
const DAIRY_KEYWORDS: &[&str] = &["cheese", "dairy"];

/// Classifies a product description into a bucket (case-insensitive).
pub fn classify(description: &str) -> ProductBucket {
    let lower = description.to_lowercase();
    if MEAT_KEYWORDS.iter().any(|keyword| lower.contains(keyword)) {
        ProductBucket::MeatAnalog
    } else if DAIRY_KEYWORDS.iter().any(|keyword| lower.contains(keyword)) {
        ProductBucket::DairyAnalog
    } else {
        ProductBucket::Generic
    }
}

fn suggestion(
    name: &str,
    category: IngredientCategory,
    (min, max, recommended): (f64, f64, f64),
    role: &str,
    alternatives: &[&str],
) -> IngredientSuggestion {
    IngredientSuggestion {
        name: name.into(),
        category,
        percentage_range: PercentageRange {
            min,
            max,
            recommended,
        },
        role: role.into(),
        alternatives: alternatives.iter().map(|&alt| alt.into()).collect(),
    }
}

/// Fixed suggestion list for a bucket.
pub(super) fn suggestions_for(bucket: ProductBucket) -> Vec<IngredientSuggestion> {
    use IngredientCategory::{Binder, Fat, Flavoring, Protein, Texturizer};

    match bucket {
        ProductBucket::MeatAnalog => vec![
            suggestion(
                "Pea Protein Isolate",
                Protein,
                (15.0, 25.0, 20.0),
                "Primary protein source",
                &["Soy Protein Isolate", "Mycoprotein"],
            ),
            suggestion(
                "Heme (Plant-Based)",
                Flavoring,
                (0.5, 2.0, 1.0),
                "Meat-like flavor and color",
                &["Beet Extract", "Natural Smoke Flavor"],
            ),
            suggestion(
                "Methylcellulose",
                Binder,
                (1.0, 3.0, 2.0),
                "Binding and texture",
                &["Konjac Gum", "Transglutaminase"],
            ),
            suggestion(
                "Coconut Oil",
                Fat,
                (8.0, 15.0, 12.0),
                "Fat content and mouthfeel",
                &["Sunflower Oil", "Avocado Oil"],
            ),
            suggestion(
                "Yeast Extract",
                Flavoring,
                (1.0, 3.0, 2.0),
                "Umami enhancement",
                &["Mushroom Extract", "Soy Sauce Powder"],
            ),
        ],
        ProductBucket::DairyAnalog => vec![
            suggestion(
                "Cashew Base",
                Protein,
                (25.0, 40.0, 30.0),
                "Creamy texture base",
                &["Almond Base", "Coconut Cream"],
            ),
            suggestion(
                "Nutritional Yeast",
                Flavoring,
                (3.0, 8.0, 5.0),
                "Cheesy flavor",
                &["Yeast Extract", "Fermented Cashew"],
            ),
            suggestion(
                "Agar",
                Texturizer,
                (1.0, 3.0, 2.0),
                "Firmness and sliceability",
                &["Carrageenan", "Konjac Gum"],
            ),
            suggestion(
                "Lactic Acid",
                Flavoring,
                (0.5, 2.0, 1.0),
                "Tangy cheese flavor",
                &["Citric Acid", "Vinegar Powder"],
            ),
        ],
        ProductBucket::Generic => vec![
            suggestion(
                "Soy Protein Isolate",
                Protein,
                (20.0, 35.0, 25.0),
                "Primary protein source",
                &["Pea Protein", "Rice Protein"],
            ),
            suggestion(
                "Natural Flavoring",
                Flavoring,
                (2.0, 5.0, 3.0),
                "Taste enhancement",
                &["Yeast Extract", "Spice Blend"],
            ),
        ],
    }
}

/// Fixed physical property estimate for a bucket.
pub(super) fn properties_for(bucket: ProductBucket) -> EstimatedProperties {
    match bucket {
        ProductBucket::MeatAnalog => EstimatedProperties {
            texture: "firm, juicy".into(),
            color: "brown when cooked".into(),
            shelf_life_days: 10,
            cooking_behavior: "browns and firms when heated".into(),
        },
        ProductBucket::DairyAnalog => EstimatedProperties {
            texture: "smooth, sliceable".into(),
            color: "pale yellow".into(),
            shelf_life_days: 21,
            cooking_behavior: "melts when heated".into(),
        },
        ProductBucket::Generic => EstimatedProperties {
            texture: "firm".into(),
            color: "natural".into(),
            shelf_life_days: 14,
            cooking_behavior: "stable".into(),
        },
    }
}

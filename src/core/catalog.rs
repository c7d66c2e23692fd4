//! Reference ingredient catalog.
//!
//! Process-wide, immutable after first access. In the hosted platform this
//! data lives in the ingredients table; the engine carries its own copy so
//! both analysis operations stay pure functions of their inputs.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::LazyLock;
use strum::Display;

/// Functional category of a reference ingredient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum IngredientCategory {
    Protein,
    Flavoring,
    Binder,
    Fat,
    Base,
    Seasoning,
    Texturizer,
    Coating,
}

/// Unit cost assumed for ingredients missing from the catalog (USD/kg).
pub const DEFAULT_COST_PER_KG: f64 = 10.00;

/// Catalog record: functional category plus market cost in USD per kilogram.
#[derive(Debug, Clone, Copy)]
pub struct CatalogEntry {
    pub category: IngredientCategory,
    pub cost_per_kg: f64,
}

const fn entry(category: IngredientCategory, cost_per_kg: f64) -> CatalogEntry {
    CatalogEntry {
        category,
        cost_per_kg,
    }
}

/// Keys are lowercased; see [`lookup`] for the case-insensitive access path.
static CATALOG: LazyLock<HashMap<&'static str, CatalogEntry>> = LazyLock::new(|| {
    use IngredientCategory::{Binder, Flavoring, Protein};
    HashMap::from([
        ("soy protein isolate", entry(Protein, 8.50)),
        ("pea protein isolate", entry(Protein, 12.30)),
        ("mycoprotein", entry(Protein, 18.75)),
        ("lab-grown chicken protein", entry(Protein, 125.00)),
        ("methylcellulose", entry(Binder, 15.20)),
        ("heme (plant-based)", entry(Flavoring, 180.00)),
        ("yeast extract", entry(Flavoring, 8.90)),
        ("natural smoke flavor", entry(Flavoring, 35.20)),
    ])
});

/// Looks up a catalog record by name, case-insensitively.
pub fn lookup(name: &str) -> Option<CatalogEntry> {
    CATALOG.get(name.to_lowercase().as_str()).copied()
}

/// Unit cost for an ingredient, falling back to [`DEFAULT_COST_PER_KG`].
pub fn cost_per_kg(name: &str) -> f64 {
    lookup(name).map_or(DEFAULT_COST_PER_KG, |record| record.cost_per_kg)
}

//! Product catalogue entries as returned by the API.

use super::money;
use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

/// A product returned by search or product lookup.
///
/// Products are read-only snapshots of the catalogue. `hybrid_score` is only
/// present in search responses and is only comparable within one response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub sku: String,
    #[serde(default)]
    pub name: String,
    #[serde(with = "money")]
    pub unit_price: BigDecimal,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default, with = "money::optional", skip_serializing_if = "Option::is_none")]
    pub hybrid_score: Option<BigDecimal>,
}

impl Product {
    /// Brand for display, `N/A` when the catalogue has none.
    #[must_use]
    pub fn brand_label(&self) -> &str {
        self.brand.as_deref().filter(|b| !b.is_empty()).unwrap_or("N/A")
    }

    /// Category for display, `N/A` when the catalogue has none.
    #[must_use]
    pub fn category_label(&self) -> &str {
        self.category.as_deref().filter(|c| !c.is_empty()).unwrap_or("N/A")
    }
}

/// Body of a successful search response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SearchResults {
    #[serde(default)]
    pub results: Vec<Product>,
}

//! Quote lines being assembled before submission.
//!
//! [`QuoteLineCollection`] is the in-memory draft of a quote: one line per SKU,
//! kept in the order each SKU was first added. Quantities are always at least
//! one; asking for zero or less removes the line instead.

use super::money;
use super::product::Product;
use bigdecimal::{BigDecimal, Zero};
use serde::Serialize;
use std::collections::BTreeMap;

/// One pending line of a quote.
///
/// Serializes to the wire shape expected by `POST /quotes`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuoteLine {
    pub sku: String,
    pub name: String,
    /// Price snapshot taken when the product was first added.
    #[serde(with = "money::optional")]
    pub unit_price: Option<BigDecimal>,
    pub qty: u32,
    /// Reserved for per-line options; always empty today.
    pub attributes: BTreeMap<String, String>,
}

impl QuoteLine {
    fn from_product(product: &Product) -> Self {
        Self {
            sku: product.sku.clone(),
            name: product.name.clone(),
            unit_price: Some(product.unit_price.clone()),
            qty: 1,
            attributes: BTreeMap::new(),
        }
    }

    /// `unit_price × qty`, with a missing price counting as zero.
    #[must_use]
    pub fn line_total(&self) -> BigDecimal {
        self.unit_price
            .as_ref()
            .map_or_else(BigDecimal::zero, |price| price * BigDecimal::from(self.qty))
    }
}

/// Ordered, SKU-unique collection of pending quote lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuoteLineCollection {
    lines: Vec<QuoteLine>,
}

impl QuoteLineCollection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one unit of `product`.
    ///
    /// An existing line for the SKU only has its quantity bumped; the name and
    /// price recorded on first add are kept.
    pub fn add_or_increment(&mut self, product: &Product) {
        if let Some(line) = self.lines.iter_mut().find(|line| line.sku == product.sku) {
            line.qty = line.qty.saturating_add(1);
            tracing::debug!(sku = %product.sku, qty = line.qty, "quote line incremented");
        } else {
            self.lines.push(QuoteLine::from_product(product));
            tracing::debug!(sku = %product.sku, "quote line added");
        }
    }

    /// Sets the quantity of `sku`, removing the line when `new_qty <= 0`.
    ///
    /// Unknown SKUs are ignored. The line keeps its position.
    pub fn set_quantity(&mut self, sku: &str, new_qty: i64) {
        if new_qty <= 0 {
            self.remove(sku);
            return;
        }

        let qty = u32::try_from(new_qty).unwrap_or(u32::MAX);
        if let Some(line) = self.lines.iter_mut().find(|line| line.sku == sku) {
            line.qty = qty;
            tracing::debug!(sku = %sku, qty = qty, "quote line quantity set");
        }
    }

    /// Drops the line for `sku`, if any.
    pub fn remove(&mut self, sku: &str) {
        let before = self.lines.len();
        self.lines.retain(|line| line.sku != sku);
        if self.lines.len() != before {
            tracing::debug!(sku = %sku, "quote line removed");
        }
    }

    /// Sum of all line totals, computed from the current lines.
    #[must_use]
    pub fn total(&self) -> BigDecimal {
        self.lines.iter().map(QuoteLine::line_total).sum()
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    #[must_use]
    pub fn lines(&self) -> &[QuoteLine] {
        &self.lines
    }

    /// Lines in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, QuoteLine> {
        self.lines.iter()
    }

    #[must_use]
    pub fn get(&self, sku: &str) -> Option<&QuoteLine> {
        self.lines.iter().find(|line| line.sku == sku)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

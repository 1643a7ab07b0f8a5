//! Persisted quotes as computed and returned by the API.
//!
//! Pricing, totals and expiry are computed server-side; these types only carry
//! what the backend sent so the viewer can render it.

use super::money;
use bigdecimal::BigDecimal;
use chrono::{DateTime, NaiveDateTime};
use serde::Deserialize;

/// A quote fetched from `GET /quotes/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Quote {
    pub quote_id: String,
    #[serde(default)]
    pub customer_ref: String,
    #[serde(default)]
    pub valid_until: String,
    #[serde(with = "money")]
    pub list_total: BigDecimal,
    #[serde(with = "money")]
    pub transfer_total: BigDecimal,
    #[serde(with = "money")]
    pub installments_total: BigDecimal,
    #[serde(default)]
    pub notes: Option<Vec<String>>,
    #[serde(default)]
    pub lines: Vec<QuoteLineItem>,
}

/// One server-numbered line of a persisted quote.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct QuoteLineItem {
    pub line_number: u32,
    pub sku: String,
    #[serde(default)]
    pub name: String,
    pub qty: u32,
    #[serde(with = "money")]
    pub unit_price: BigDecimal,
    #[serde(with = "money")]
    pub line_total: BigDecimal,
}

/// Body of a successful `POST /quotes`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreatedQuote {
    #[serde(rename = "quoteId")]
    pub quote_id: String,
}

impl Quote {
    /// Notes to display; empty when the backend sent none.
    #[must_use]
    pub fn notes(&self) -> &[String] {
        self.notes.as_deref().unwrap_or_default()
    }

    /// Expiry formatted for humans.
    ///
    /// Accepts RFC 3339 timestamps and naive ISO 8601 date-times (with or
    /// without fractional seconds). Anything else is shown verbatim.
    #[must_use]
    pub fn valid_until_label(&self) -> String {
        const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M";

        if let Ok(parsed) = DateTime::parse_from_rfc3339(&self.valid_until) {
            return parsed.format(DISPLAY_FORMAT).to_string();
        }
        if let Ok(parsed) = NaiveDateTime::parse_from_str(&self.valid_until, "%Y-%m-%dT%H:%M:%S%.f") {
            return parsed.format(DISPLAY_FORMAT).to_string();
        }
        self.valid_until.clone()
    }
}

//! Typed builders for the storefront API endpoints.

use super::alpha::Alpha;
use super::request::{ApiOperation, ApiRequest, Method};
use crate::domain::error::{Result, StorefrontError};
use crate::domain::QuoteLine;
use serde::Serialize;
use url::Url;

/// API used when no usable base URL is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Builds requests against one API base URL.
///
/// The client never performs I/O itself: each method returns an
/// [`ApiRequest`] that the plugin runtime sends exactly once, with no retry,
/// caching or timeout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiClient {
    base_url: Url,
}

impl Default for ApiClient {
    /// Returns a client for [`DEFAULT_API_URL`].
    ///
    /// # Panics
    ///
    /// Panics if the built-in URL fails to parse (should never occur).
    fn default() -> Self {
        Self::new(DEFAULT_API_URL).expect("Built-in API URL should always parse")
    }
}

/// Body of `POST /quotes`.
#[derive(Serialize)]
struct CreateQuoteBody<'a> {
    #[serde(rename = "customerRef")]
    customer_ref: &'a str,
    lines: &'a [QuoteLine],
}

impl ApiClient {
    /// Creates a client for `base_url` (for example `http://localhost:8000`).
    ///
    /// # Errors
    ///
    /// Returns an error if the URL does not parse or cannot carry a path.
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url.trim())?;
        if base_url.cannot_be_a_base() {
            return Err(StorefrontError::Config(format!(
                "API URL cannot carry a path: {base_url}"
            )));
        }
        Ok(Self { base_url })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// `GET /search?q=..&limit=..&alpha=..`
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint URL cannot be built.
    pub fn search(&self, query: &str, limit: u32, alpha: Alpha) -> Result<ApiRequest> {
        let mut url = self.endpoint(&["search"])?;
        url.query_pairs_mut()
            .append_pair("q", query)
            .append_pair("limit", &limit.to_string())
            .append_pair("alpha", &alpha.to_string());
        Ok(ApiRequest::new(ApiOperation::Search, Method::Get, url.into()))
    }

    /// `GET /products/{sku}` with the SKU percent-encoded.
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint URL cannot be built.
    pub fn get_product(&self, sku: &str) -> Result<ApiRequest> {
        let url = self.endpoint(&["products", sku])?;
        Ok(ApiRequest::new(ApiOperation::GetProduct, Method::Get, url.into()))
    }

    /// `POST /quotes` with `{"customerRef": .., "lines": [..]}`.
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint URL cannot be built or the body fails
    /// to serialize.
    pub fn create_quote(&self, customer_ref: &str, lines: &[QuoteLine]) -> Result<ApiRequest> {
        let url = self.endpoint(&["quotes"])?;
        let body = serde_json::to_vec(&CreateQuoteBody { customer_ref, lines })?;
        Ok(ApiRequest::new(ApiOperation::CreateQuote, Method::Post, url.into()).with_json_body(body))
    }

    /// `GET /quotes/{quote_id}` with the id percent-encoded.
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint URL cannot be built.
    pub fn get_quote(&self, quote_id: &str) -> Result<ApiRequest> {
        let url = self.endpoint(&["quotes", quote_id])?;
        Ok(ApiRequest::new(ApiOperation::GetQuote, Method::Get, url.into()))
    }

    /// Appends path segments to the base URL, encoding each one.
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.set_query(None);
        url.path_segments_mut()
            .map_err(|()| {
                StorefrontError::Config(format!("API URL cannot carry a path: {}", self.base_url))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Product, QuoteLineCollection};
    use bigdecimal::BigDecimal;
    use std::str::FromStr;

    fn client() -> ApiClient {
        ApiClient::new("http://localhost:8000").unwrap()
    }

    #[test]
    fn search_encodes_query_parameters() {
        let request = client().search("drill & bits", 20, Alpha::default()).unwrap();

        assert_eq!(request.method, Method::Get);
        assert_eq!(
            request.url,
            "http://localhost:8000/search?q=drill+%26+bits&limit=20&alpha=0.6"
        );
        assert!(request.body.is_empty());
    }

    #[test]
    fn path_identifiers_are_percent_encoded() {
        let request = client().get_product("AB/12 X").unwrap();
        assert_eq!(request.url, "http://localhost:8000/products/AB%2F12%20X");

        let request = client().get_quote("CRQ-F6333605").unwrap();
        assert_eq!(request.url, "http://localhost:8000/quotes/CRQ-F6333605");
    }

    #[test]
    fn base_path_prefix_is_kept() {
        let client = ApiClient::new("https://shop.example.com/api/").unwrap();
        let request = client.get_quote("Q1").unwrap();
        assert_eq!(request.url, "https://shop.example.com/api/quotes/Q1");
    }

    #[test]
    fn create_quote_posts_json_lines() {
        let mut lines = QuoteLineCollection::new();
        lines.add_or_increment(&Product {
            sku: "A1".into(),
            name: "Drill".into(),
            unit_price: BigDecimal::from_str("10").unwrap(),
            brand: None,
            category: None,
            hybrid_score: None,
        });

        let request = client().create_quote("WEB_USER", lines.lines()).unwrap();
        assert_eq!(request.method, Method::Post);
        assert_eq!(request.url, "http://localhost:8000/quotes");

        let body: serde_json::Value = serde_json::from_slice(&request.body).unwrap();
        assert_eq!(body["customerRef"], "WEB_USER");
        assert_eq!(body["lines"][0]["sku"], "A1");
        assert_eq!(body["lines"][0]["qty"], 1);
    }

    #[test]
    fn unusable_base_urls_are_rejected() {
        assert!(ApiClient::new("not a url").is_err());
        assert!(ApiClient::new("mailto:sales@example.com").is_err());
    }
}

//! Decoding of API responses into domain values or user-facing failures.

use super::request::ApiOperation;
use crate::domain::error::{Result, StorefrontError};
use crate::domain::{CreatedQuote, Product, Quote, SearchResults};
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// A successfully decoded response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiResponse {
    /// Search matches; an empty list is a valid outcome.
    SearchResults(Vec<Product>),
    Product(Product),
    QuoteCreated(CreatedQuote),
    Quote(Quote),
}

/// FastAPI-style error body (`{"detail": "..."}`).
#[derive(Deserialize)]
struct ErrorBody {
    detail: Option<serde_json::Value>,
}

/// Whether `status` is a 2xx success.
#[must_use]
pub const fn is_success(status: u16) -> bool {
    status >= 200 && status < 300
}

/// Decodes the response to `operation`.
///
/// Non-2xx statuses become [`StorefrontError::Api`] carrying the operation's
/// generic message. Create-quote failures prefer a string `detail` field from
/// the body when the server supplies one.
///
/// # Errors
///
/// Returns [`StorefrontError::Api`] for rejected calls and
/// [`StorefrontError::Decode`] for success bodies of the wrong shape.
///
/// # Examples
///
/// ```
/// use zstorefront::api::{decode_response, ApiOperation};
///
/// let err = decode_response(ApiOperation::CreateQuote, 409, br#"{"detail": "duplicate customer ref"}"#)
///     .unwrap_err();
/// assert_eq!(err.to_string(), "duplicate customer ref");
/// ```
pub fn decode_response(operation: ApiOperation, status: u16, body: &[u8]) -> Result<ApiResponse> {
    let _span = tracing::debug_span!(
        "decode_response",
        operation = operation.as_str(),
        status = status,
        body_len = body.len()
    )
    .entered();

    if !is_success(status) {
        let message = match operation {
            ApiOperation::CreateQuote => server_detail(body)
                .unwrap_or_else(|| operation.failure_message().to_string()),
            _ => operation.failure_message().to_string(),
        };
        tracing::debug!(message = %message, "api call rejected");
        return Err(StorefrontError::Api(message));
    }

    let response = match operation {
        ApiOperation::Search => {
            ApiResponse::SearchResults(parse_json::<SearchResults>(body)?.results)
        }
        ApiOperation::GetProduct => ApiResponse::Product(parse_json(body)?),
        ApiOperation::CreateQuote => ApiResponse::QuoteCreated(parse_json(body)?),
        ApiOperation::GetQuote => ApiResponse::Quote(parse_json(body)?),
    };

    tracing::debug!("api response decoded");
    Ok(response)
}

fn parse_json<T: DeserializeOwned>(body: &[u8]) -> Result<T> {
    serde_json::from_slice(body).map_err(|e| StorefrontError::Decode(e.to_string()))
}

/// Extracts a non-empty string `detail` from an error body.
fn server_detail(body: &[u8]) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_slice(body).ok()?;
    match parsed.detail? {
        serde_json::Value::String(detail) if !detail.trim().is_empty() => Some(detail),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_quote_failure_uses_server_detail() {
        let err = decode_response(
            ApiOperation::CreateQuote,
            400,
            br#"{"detail": "duplicate customer ref"}"#,
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "duplicate customer ref");
    }

    #[test]
    fn create_quote_failure_without_usable_detail_is_generic() {
        let bodies: [&[u8]; 4] = [
            b"<html>bad gateway</html>",
            br#"{"detail": [{"loc": ["body"], "msg": "field required"}]}"#,
            br#"{"detail": ""}"#,
            b"",
        ];
        for body in bodies {
            let err = decode_response(ApiOperation::CreateQuote, 502, body).unwrap_err();
            assert_eq!(err.to_string(), "Quote creation failed");
        }
    }

    #[test]
    fn other_failures_ignore_the_body() {
        let body = br#"{"detail": "index offline"}"#;
        let cases = [
            (ApiOperation::Search, "Search failed"),
            (ApiOperation::GetProduct, "Product not found"),
            (ApiOperation::GetQuote, "Quote not found"),
        ];
        for (operation, expected) in cases {
            let err = decode_response(operation, 404, body).unwrap_err();
            assert_eq!(err.to_string(), expected);
        }
    }

    #[test]
    fn empty_search_is_success() {
        let response = decode_response(ApiOperation::Search, 200, br#"{"results": []}"#).unwrap();
        assert_eq!(response, ApiResponse::SearchResults(vec![]));
    }

    #[test]
    fn created_quote_is_decoded() {
        let response =
            decode_response(ApiOperation::CreateQuote, 201, br#"{"quoteId": "CRQ-9"}"#).unwrap();
        assert_eq!(
            response,
            ApiResponse::QuoteCreated(CreatedQuote { quote_id: "CRQ-9".into() })
        );
    }

    #[test]
    fn malformed_success_body_is_a_decode_error() {
        let err = decode_response(ApiOperation::GetProduct, 200, b"{\"sku\": 5}").unwrap_err();
        assert!(matches!(err, StorefrontError::Decode(_)));
        assert!(err.to_string().starts_with("Invalid response from server"));
    }
}

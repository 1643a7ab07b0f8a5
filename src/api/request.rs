//! Outgoing HTTP requests and the context used to route their results.
//!
//! Requests are plain data. The plugin shim hands them to the host's
//! `web_request` command together with [`ApiRequest::context`]; the host echoes
//! that context back on the matching `WebRequestResult` event, which is how a
//! result finds the screen that asked for it.

use std::collections::BTreeMap;

/// Context key carrying the operation name through the host.
const OPERATION_KEY: &str = "operation";

/// The four calls the storefront makes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiOperation {
    Search,
    GetProduct,
    CreateQuote,
    GetQuote,
}

impl ApiOperation {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Search => "search",
            Self::GetProduct => "get_product",
            Self::CreateQuote => "create_quote",
            Self::GetQuote => "get_quote",
        }
    }

    /// Recovers the operation from a result context.
    #[must_use]
    pub fn from_context(context: &BTreeMap<String, String>) -> Option<Self> {
        match context.get(OPERATION_KEY)?.as_str() {
            "search" => Some(Self::Search),
            "get_product" => Some(Self::GetProduct),
            "create_quote" => Some(Self::CreateQuote),
            "get_quote" => Some(Self::GetQuote),
            _ => None,
        }
    }

    /// Message shown when the server rejects the call without saying why.
    #[must_use]
    pub const fn failure_message(self) -> &'static str {
        match self {
            Self::Search => "Search failed",
            Self::GetProduct => "Product not found",
            Self::CreateQuote => "Quote creation failed",
            Self::GetQuote => "Quote not found",
        }
    }
}

/// HTTP method of a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// A fully built request, ready for the host to send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    pub operation: ApiOperation,
    pub method: Method,
    pub url: String,
    pub headers: BTreeMap<String, String>,
    pub body: Vec<u8>,
}

impl ApiRequest {
    pub(crate) fn new(operation: ApiOperation, method: Method, url: String) -> Self {
        let mut headers = BTreeMap::new();
        headers.insert("Accept".to_string(), "application/json".to_string());
        Self {
            operation,
            method,
            url,
            headers,
            body: Vec::new(),
        }
    }

    pub(crate) fn with_json_body(mut self, body: Vec<u8>) -> Self {
        self.headers
            .insert("Content-Type".to_string(), "application/json".to_string());
        self.body = body;
        self
    }

    /// Context map echoed back by the host with the response.
    #[must_use]
    pub fn context(&self) -> BTreeMap<String, String> {
        BTreeMap::from([(OPERATION_KEY.to_string(), self.operation.as_str().to_string())])
    }
}

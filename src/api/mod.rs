//! Client for the storefront HTTP API.
//!
//! The API exposes four endpoints (search, product lookup, quote creation and
//! quote lookup). This module splits a call into two pure halves:
//!
//! - [`ApiClient`] builds an [`ApiRequest`] (method, URL, headers, body)
//! - [`decode_response`] turns the status and body of the reply into an
//!   [`ApiResponse`] or a single human-readable failure
//!
//! The plugin shim sends requests with the host's `web_request` command and
//! feeds `WebRequestResult` events back through the application handler, so a
//! call never blocks rendering.
//!
//! # Modules
//!
//! - [`alpha`]: Search blend weight
//! - [`client`]: Endpoint request builders
//! - [`request`]: Request and routing-context types
//! - [`response`]: Response decoding and failure messages

pub mod alpha;
pub mod client;
pub mod request;
pub mod response;

pub use alpha::Alpha;
pub use client::ApiClient;
pub use request::{ApiOperation, ApiRequest, Method};
pub use response::{decode_response, is_success, ApiResponse};

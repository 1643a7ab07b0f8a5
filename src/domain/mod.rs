//! Domain layer for the storefront plugin.
//!
//! Core types independent of the Zellij runtime: catalogue products, the
//! pending quote-line collection, persisted quotes, money formatting and the
//! crate error type.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`money`]: Decimal serde helpers and display formatting
//! - [`product`]: Catalogue products and search payloads
//! - [`quote`]: Server-computed quotes
//! - [`quote_lines`]: The client-side quote-line model

pub mod error;
pub mod money;
pub mod product;
pub mod quote;
pub mod quote_lines;

pub use error::{Result, StorefrontError};
pub use product::{Product, SearchResults};
pub use quote::{CreatedQuote, Quote, QuoteLineItem};
pub use quote_lines::{QuoteLine, QuoteLineCollection};

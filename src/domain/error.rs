//! Error types for the storefront plugin.
//!
//! This module defines the centralized error type [`StorefrontError`] and a type
//! alias [`Result`] used throughout the crate. All errors are implemented with
//! the `thiserror` crate.
//!
//! Screens never show structured error codes: every failure is reduced to the
//! human-readable string produced by `Display`, which is why the API-facing
//! variants render their message verbatim.

use thiserror::Error;

/// The main error type for storefront operations.
///
/// # Examples
///
/// ```
/// use zstorefront::StorefrontError;
///
/// let err = StorefrontError::Api("Search failed".to_string());
/// assert_eq!(err.to_string(), "Search failed");
/// ```
#[derive(Debug, Error)]
pub enum StorefrontError {
    /// The API answered with a non-success status.
    ///
    /// The string is the exact message shown to the user, either supplied by
    /// the server or a generic per-operation message.
    #[error("{0}")]
    Api(String),

    /// A success response could not be decoded into the expected shape.
    #[error("Invalid response from server: {0}")]
    Decode(String),

    /// User input was rejected before any request was sent.
    #[error("{0}")]
    Validation(String),

    /// A request body could not be serialized.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A request URL could not be built from the configured base URL.
    #[error("Invalid API URL: {0}")]
    Url(#[from] url::ParseError),

    /// Configuration is invalid or missing.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Theme parsing or loading failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized `Result` type for storefront operations.
pub type Result<T> = std::result::Result<T, StorefrontError>;

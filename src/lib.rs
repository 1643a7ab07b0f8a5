//! Storefront: a Zellij plugin for searching a product catalogue, building
//! price quotes and viewing saved quotes over an HTTP API.
//!
//! The plugin provides:
//! - Product search with an adjustable keyword/semantic blend
//! - A client-side quote builder with per-line quantities and a running total
//! - Quote creation and lookup of previously created quotes
//! - Product details on demand

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! │  - Key mapping, web_request, WebRequestResult       │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │
//! │  - Session transitions                              │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                                    │
//! ┌───────────────────────┐        ┌───────────────────────┐
//! │ UI Layer (ui/)        │        │ API Layer (api/)      │
//! │ - Rendering           │        │ - Request builders    │
//! │ - Theming             │        │ - Response decoding   │
//! └───────────────────────┘        └───────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain & Infrastructure                            │
//! │  - Products, quotes, quote lines, money             │
//! │  - Error types, sandbox paths                       │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - OpenTelemetry tracing to an OTLP-JSON file       │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/zstorefront.wasm" {
//!         api_url "http://localhost:8000"
//!         search_limit "20"
//!         alpha "0.6"
//!         customer_ref "WEB_USER"
//!         theme "catppuccin-mocha"
//!         trace_level "info"
//!     }
//! }
//! ```
//!
//! # Example
//!
//! ```rust
//! use zstorefront::{handle_event, initialize, Config, Event, Field};
//!
//! let mut state = initialize(&Config::default());
//!
//! handle_event(&mut state, &Event::Edit(Field::SearchQuery))?;
//! for c in "drill".chars() {
//!     handle_event(&mut state, &Event::Char(c))?;
//! }
//! let (_, actions) = handle_event(&mut state, &Event::Submit)?;
//! assert_eq!(actions.len(), 1);
//! # Ok::<(), zstorefront::StorefrontError>(())
//! ```

pub mod api;
pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod ui;

pub use api::client::DEFAULT_API_URL;
pub use api::{Alpha, ApiClient, ApiOperation, ApiRequest};
pub use app::{handle_event, Action, AppState, Event, Field, InputMode, Screen};
pub use domain::{Result, StorefrontError};
pub use ui::Theme;

use app::screens::quote_editor::DEFAULT_CUSTOMER_REF;
use app::screens::{QuoteEditorState, SearchState};
use app::state::DEFAULT_SEARCH_LIMIT;
use std::collections::BTreeMap;

/// Plugin configuration parsed from Zellij's configuration system.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Base URL of the storefront API, without a trailing `/`.
    pub api_url: String,

    /// `limit` sent with each search. Default: 20
    pub search_limit: u32,

    /// Initial keyword/semantic blend. Default: 0.6
    pub alpha: Alpha,

    /// Initial customer reference for new quotes. Default: `WEB_USER`
    pub customer_ref: String,

    /// Built-in theme name. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file; `~` maps to the host home.
    pub theme_file: Option<String>,

    /// Tracing filter directive. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            search_limit: DEFAULT_SEARCH_LIMIT,
            alpha: Alpha::default(),
            customer_ref: DEFAULT_CUSTOMER_REF.to_string(),
            theme_name: None,
            theme_file: None,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Values that are missing, blank or fail to parse fall back to their
    /// defaults:
    ///
    /// - `api_url`: trimmed, trailing `/` removed
    /// - `search_limit`: positive integer
    /// - `alpha`: decimal, clamped to 0..=1 and snapped to tenths
    /// - `customer_ref`: trimmed
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use zstorefront::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("api_url".to_string(), "https://shop.example.com/api/".to_string());
    /// map.insert("search_limit".to_string(), "50".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.api_url, "https://shop.example.com/api");
    /// assert_eq!(config.search_limit, 50);
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let non_blank = |key: &str| {
            config
                .get(key)
                .map(|value| value.trim())
                .filter(|value| !value.is_empty())
        };

        let api_url = non_blank("api_url")
            .map(|url| url.trim_end_matches('/'))
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_API_URL)
            .to_string();

        let search_limit = non_blank("search_limit")
            .and_then(|s| s.parse::<u32>().ok())
            .filter(|limit| *limit > 0)
            .unwrap_or(DEFAULT_SEARCH_LIMIT);

        let alpha = non_blank("alpha").and_then(Alpha::parse).unwrap_or_default();

        Self {
            api_url,
            search_limit,
            alpha,
            customer_ref: non_blank("customer_ref").unwrap_or(DEFAULT_CUSTOMER_REF).to_string(),
            theme_name: non_blank("theme").map(String::from),
            theme_file: non_blank("theme_file").map(String::from),
            trace_level: non_blank("trace_level").map(String::from),
        }
    }
}

/// Builds the initial [`AppState`] from configuration.
///
/// Never fails: an unusable theme falls back to the default theme and an
/// unusable API URL falls back to [`DEFAULT_API_URL`], each with a warning.
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!(api_url = %config.api_url, "initializing storefront plugin");

    let theme = load_theme(config);

    let api = ApiClient::new(&config.api_url).unwrap_or_else(|e| {
        tracing::warn!(api_url = %config.api_url, error = %e, "invalid API URL, using default");
        ApiClient::default()
    });

    let mut state = AppState::new(api, theme);
    state.search_limit = config.search_limit;
    state.search = SearchState::new(config.alpha);
    state.editor = QuoteEditorState::new(&config.customer_ref);
    state
}

fn load_theme(config: &Config) -> Theme {
    if let Some(theme_file) = &config.theme_file {
        let path = infrastructure::expand_tilde(theme_file);
        return Theme::from_file(&path).unwrap_or_else(|e| {
            tracing::warn!(theme_file = %path, error = %e, "failed to load theme from file, using default");
            Theme::default()
        });
    }

    config.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
        Theme::from_name(theme_name).unwrap_or_else(|| {
            tracing::warn!(theme_name = %theme_name, "unknown theme, using default");
            Theme::default()
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn empty_config_uses_defaults() {
        assert_eq!(Config::from_zellij(&BTreeMap::new()), Config::default());
    }

    #[test]
    fn values_are_parsed_with_fallbacks() {
        let config = Config::from_zellij(&map(&[
            ("api_url", " http://api.internal:9000/ "),
            ("search_limit", "0"),
            ("alpha", "0.34"),
            ("customer_ref", "  ACME-7 "),
            ("theme", "catppuccin-latte"),
            ("trace_level", "debug"),
        ]));

        assert_eq!(config.api_url, "http://api.internal:9000");
        assert_eq!(config.search_limit, DEFAULT_SEARCH_LIMIT);
        assert_eq!(config.alpha.to_string(), "0.3");
        assert_eq!(config.customer_ref, "ACME-7");
        assert_eq!(config.theme_name.as_deref(), Some("catppuccin-latte"));
        assert_eq!(config.trace_level.as_deref(), Some("debug"));
    }

    #[test]
    fn unparsable_values_fall_back() {
        let config = Config::from_zellij(&map(&[
            ("search_limit", "lots"),
            ("alpha", "half"),
            ("customer_ref", "   "),
            ("api_url", "///"),
        ]));

        assert_eq!(config.search_limit, DEFAULT_SEARCH_LIMIT);
        assert_eq!(config.alpha, Alpha::default());
        assert_eq!(config.customer_ref, DEFAULT_CUSTOMER_REF);
        assert_eq!(config.api_url, DEFAULT_API_URL);
    }

    #[test]
    fn initialize_applies_config() {
        let config = Config {
            api_url: "https://shop.example.com/api".to_string(),
            search_limit: 5,
            alpha: Alpha::from_tenths(2),
            customer_ref: "ACME".to_string(),
            theme_name: Some("catppuccin-frappe".to_string()),
            ..Config::default()
        };

        let state = initialize(&config);

        assert_eq!(state.api.base_url(), "https://shop.example.com/api");
        assert_eq!(state.search_limit, 5);
        assert_eq!(state.search.alpha, Alpha::from_tenths(2));
        assert_eq!(state.editor.customer_ref, "ACME");
        assert_eq!(state.theme.name, "catppuccin-frappe");
    }

    #[test]
    fn bad_url_and_theme_fall_back() {
        let config = Config {
            api_url: "not a url".to_string(),
            theme_name: Some("solarized".to_string()),
            ..Config::default()
        };

        let state = initialize(&config);

        assert_eq!(state.api.base_url(), "http://localhost:8000/");
        assert_eq!(state.theme, Theme::default());
    }

    #[test]
    fn theme_file_wins_over_theme_name() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let contents = toml::to_string(&Theme::default()).unwrap().replace("catppuccin-mocha", "custom");
        file.write_all(contents.as_bytes()).unwrap();

        let config = Config {
            theme_name: Some("catppuccin-latte".to_string()),
            theme_file: Some(file.path().display().to_string()),
            ..Config::default()
        };

        assert_eq!(initialize(&config).theme.name, "custom");
    }
}

//! Zellij plugin wrapper and entry point.
//!
//! Thin integration layer between the storefront library and the Zellij
//! plugin system: it maps host events to library [`Event`]s, runs
//! [`handle_event`] and carries out the returned [`Action`]s.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, create `AppState`
//! 2. **Subscribe**: Register for `Key`, `WebRequestResult` and
//!    `PermissionRequestResult` events
//! 3. **Update**: Map events, delegate to the library, send web requests
//! 4. **Render**: Call the library render function
//!
//! # Requests
//!
//! [`Action::SendRequest`] becomes a host `web_request` whose context names
//! the API operation. The host answers with `WebRequestResult`, which is
//! routed back as `Event::ApiResponse` for that operation.
//!
//! # Keybindings
//!
//! All screens (normal mode):
//! - `1`/`2`/`3`: Search, Create Quote, View Quote
//! - `Tab`/`Shift+Tab`: Next/previous screen
//! - `j`/`Down`, `k`/`Up`: Move selection
//! - `q`: Close plugin
//!
//! Search:
//! - `/`: Type a query (`Enter` searches)
//! - `Enter`: Add highlighted product to the quote
//! - `i`: Details for highlighted product, `I`: look up a SKU
//! - `+`/`-`: Adjust search weight
//!
//! Create Quote:
//! - `+`/`-`: Change quantity, `e`/`Enter`: type a quantity
//! - `x`: Remove line, `D`: Discard all lines
//! - `c`: Edit customer reference, `s`: Submit quote
//!
//! View Quote:
//! - `/`: Type a quote ID, `Enter`: Load quote
//!
//! While typing: `Enter` commits, `Esc` cancels, `Backspace` deletes.

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;

use zstorefront::api::{ApiOperation, Method};
use zstorefront::infrastructure::{get_data_dir, strip_host_prefix};
use zstorefront::observability::{init_tracing, DEFAULT_TRACE_LEVEL};
use zstorefront::{handle_event, Action, AppState, Config, Event, Field, InputMode, Screen};

register_plugin!(State);

/// Plugin state wrapper around the library's `AppState`.
struct State {
    app: AppState,
}

impl Default for State {
    fn default() -> Self {
        Self {
            app: zstorefront::initialize(&Config::default()),
        }
    }
}

impl ZellijPlugin for State {
    /// Parses configuration, initializes tracing and state, requests
    /// permissions and subscribes to events.
    ///
    /// # Permissions
    ///
    /// - `WebAccess`: Call the storefront API
    /// - `ReadApplicationState`: Receive permission and request results
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        let trace_level = config.trace_level.as_deref().unwrap_or(DEFAULT_TRACE_LEVEL);
        match init_tracing(trace_level, &get_data_dir()) {
            Ok(trace_file) => {
                tracing::debug!(trace_file = %strip_host_prefix(&trace_file.to_string_lossy()), "tracing initialized");
            }
            Err(e) => eprintln!("storefront: failed to initialize tracing: {e}"),
        }

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        tracing::debug!(
            api_url = %config.api_url,
            search_limit = config.search_limit,
            alpha = %config.alpha,
            "parsed configuration"
        );
        self.app = zstorefront::initialize(&config);

        request_permission(&[PermissionType::WebAccess, PermissionType::ReadApplicationState]);
        subscribe(&[
            EventType::Key,
            EventType::WebRequestResult,
            EventType::PermissionRequestResult,
        ]);

        tracing::debug!("plugin load complete - waiting for permissions");
    }

    /// Maps the host event, delegates to `handle_event` and executes the
    /// resulting actions. Returns `true` if the UI should re-render.
    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let span = tracing::debug_span!("plugin_update_event", event_type = %event_name);
        let _guard = span.entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::WebRequestResult(status, _headers, body, context) => {
                match Self::map_web_request_result(status, body, &context) {
                    Some(event) => event,
                    None => return false,
                }
            }
            zellij_tile::prelude::Event::PermissionRequestResult(status) => Self::map_permission_result(status),
            _ => return false,
        };

        match handle_event(&mut self.app, &our_event) {
            Ok((should_render, actions)) => {
                tracing::debug!(action_count = actions.len(), should_render, "event handled");
                for action in actions {
                    Self::execute_action(&action);
                }
                should_render
            }
            Err(e) => {
                tracing::error!(error = %e, "error handling event");
                false
            }
        }
    }

    fn render(&mut self, rows: usize, cols: usize) {
        zstorefront::ui::render(&self.app, rows, cols);
    }
}

impl State {
    fn get_event_name(event: &zellij_tile::prelude::Event) -> &'static str {
        match event {
            zellij_tile::prelude::Event::Key(_) => "Key",
            zellij_tile::prelude::Event::WebRequestResult(..) => "WebRequestResult",
            zellij_tile::prelude::Event::PermissionRequestResult(_) => "PermissionRequestResult",
            _ => "Other",
        }
    }

    /// Maps a key press according to the input mode and active screen.
    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        if key.has_modifiers(&[KeyModifier::Ctrl]) || key.has_modifiers(&[KeyModifier::Alt]) {
            return None;
        }

        if let InputMode::Editing(_) = self.app.input_mode {
            return match key.bare_key {
                BareKey::Enter => Some(Event::Submit),
                BareKey::Esc => Some(Event::Cancel),
                BareKey::Backspace => Some(Event::Backspace),
                BareKey::Char(c) => Some(Event::Char(c)),
                _ => None,
            };
        }

        let screen = self.app.screen();
        Some(match key.bare_key {
            BareKey::Tab if key.has_modifiers(&[KeyModifier::Shift]) => Event::PreviousScreen,
            BareKey::Tab => Event::NextScreen,
            BareKey::Char('1') => Event::ShowScreen(Screen::Search),
            BareKey::Char('2') => Event::ShowScreen(Screen::Quote),
            BareKey::Char('3') => Event::ShowScreen(Screen::View),
            BareKey::Down | BareKey::Char('j') => Event::KeyDown,
            BareKey::Up | BareKey::Char('k') => Event::KeyUp,
            BareKey::Char('q') | BareKey::Esc => Event::CloseFocus,
            _ => return Self::map_screen_key(screen, key.bare_key),
        })
    }

    fn map_screen_key(screen: Screen, key: BareKey) -> Option<Event> {
        let event = match (screen, key) {
            (Screen::Search, BareKey::Char('/')) => Event::Edit(Field::SearchQuery),
            (Screen::Search, BareKey::Enter) => Event::AddSelected,
            (Screen::Search, BareKey::Char('i')) => Event::ShowDetails,
            (Screen::Search, BareKey::Char('I')) => Event::Edit(Field::Sku),
            (Screen::Search, BareKey::Char('+' | '=')) => Event::IncreaseAlpha,
            (Screen::Search, BareKey::Char('-')) => Event::DecreaseAlpha,

            (Screen::Quote, BareKey::Char('+' | '=')) => Event::IncrementQuantity,
            (Screen::Quote, BareKey::Char('-')) => Event::DecrementQuantity,
            (Screen::Quote, BareKey::Char('e') | BareKey::Enter) => Event::Edit(Field::Quantity),
            (Screen::Quote, BareKey::Char('x') | BareKey::Delete) => Event::RemoveLine,
            (Screen::Quote, BareKey::Char('D')) => Event::DiscardQuote,
            (Screen::Quote, BareKey::Char('c')) => Event::Edit(Field::CustomerRef),
            (Screen::Quote, BareKey::Char('s')) => Event::SubmitQuote,

            (Screen::View, BareKey::Char('/')) => Event::Edit(Field::QuoteId),
            (Screen::View, BareKey::Enter) => Event::LoadQuote,
            _ => return None,
        };
        Some(event)
    }

    fn map_web_request_result(status: u16, body: Vec<u8>, context: &BTreeMap<String, String>) -> Option<Event> {
        let Some(operation) = ApiOperation::from_context(context) else {
            tracing::debug!(context = ?context, "ignoring web request result without an operation");
            return None;
        };
        tracing::debug!(operation = operation.as_str(), status, body_len = body.len(), "web request result");
        Some(Event::ApiResponse {
            operation,
            status,
            body,
        })
    }

    fn map_permission_result(status: PermissionStatus) -> Event {
        let granted = match status {
            PermissionStatus::Granted => {
                tracing::debug!("permissions granted");
                vec![PermissionType::WebAccess, PermissionType::ReadApplicationState]
            }
            PermissionStatus::Denied => {
                tracing::warn!("permissions denied - API calls will fail");
                vec![]
            }
        };
        Event::PermissionsResult { granted }
    }

    /// Translates library actions to Zellij API calls.
    fn execute_action(action: &Action) {
        match action {
            Action::CloseFocus => {
                tracing::debug!("closing plugin focus");
                hide_self();
            }
            Action::SendRequest(request) => {
                tracing::debug!(
                    operation = request.operation.as_str(),
                    url = %request.url,
                    "sending web request"
                );
                let verb = match request.method {
                    Method::Get => HttpVerb::Get,
                    Method::Post => HttpVerb::Post,
                };
                web_request(
                    &request.url,
                    verb,
                    request.headers.clone(),
                    request.body.clone(),
                    request.context(),
                );
            }
        }
    }
}

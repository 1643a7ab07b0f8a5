//! Application state management and view model computation.
//!
//! [`AppState`] is the single source of truth for the plugin: the session
//! (active screen plus pending quote lines), the per-screen states, the input
//! mode and the API client used to build requests.
//!
//! # State Components
//!
//! - **Session**: Active screen and the quote being assembled, changed only by
//!   pure [`SessionAction`] transitions
//! - **Screens**: Inputs and request lifecycles of search, editor and viewer
//! - **Input Mode**: Whether keys are commands or text for a field
//!
//! # Example
//!
//! ```rust
//! use zstorefront::api::ApiClient;
//! use zstorefront::app::AppState;
//! use zstorefront::ui::Theme;
//!
//! let api = ApiClient::new("http://localhost:8000")?;
//! let state = AppState::new(api, Theme::default());
//! let viewmodel = state.compute_viewmodel(24);
//! assert_eq!(viewmodel.header.tabs.len(), 3);
//! # Ok::<(), zstorefront::domain::StorefrontError>(())
//! ```

use super::modes::{InputMode, Screen};
use super::screens::{QuoteEditorState, QuoteViewerState, SearchState};
use super::session::{Session, SessionAction};
use crate::api::ApiClient;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{FooterInfo, HeaderInfo, TabInfo, UIViewModel};

/// Default `limit` sent with each search.
pub const DEFAULT_SEARCH_LIMIT: u32 = 20;

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    pub session: Session,

    /// Current input handling mode.
    pub input_mode: InputMode,

    pub search: SearchState,
    pub editor: QuoteEditorState,
    pub viewer: QuoteViewerState,

    /// Builds requests against the configured API.
    pub api: ApiClient,

    /// `limit` sent with each search.
    pub search_limit: u32,

    /// Color scheme for UI rendering.
    pub theme: Theme,
}

impl AppState {
    /// Creates a new application state on the search screen with no lines.
    #[must_use]
    pub fn new(api: ApiClient, theme: Theme) -> Self {
        Self {
            session: Session::default(),
            input_mode: InputMode::Normal,
            search: SearchState::default(),
            editor: QuoteEditorState::default(),
            viewer: QuoteViewerState::default(),
            api,
            search_limit: DEFAULT_SEARCH_LIMIT,
            theme,
        }
    }

    #[must_use]
    pub const fn screen(&self) -> Screen {
        self.session.screen
    }

    /// Runs a session transition and keeps the editor selection in range.
    pub fn apply(&mut self, action: SessionAction) {
        let _span = tracing::debug_span!("session_transition", action = ?action).entered();

        self.session = std::mem::take(&mut self.session).transition(action);
        self.editor.clamp_selection(self.session.lines.len());

        tracing::debug!(
            screen = ?self.session.screen,
            line_count = self.session.lines.len(),
            "session updated"
        );
    }

    /// Computes a renderable UI view model for a terminal `rows` tall.
    ///
    /// The active screen supplies the body; its table is windowed around the
    /// selected row so it fits between the header and the footer.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize) -> UIViewModel {
        let body = match self.session.screen {
            Screen::Search => self.search.compute_body(self.input_mode),
            Screen::Quote => self.editor.compute_body(self.input_mode, &self.session.lines),
            Screen::View => self.viewer.compute_body(self.input_mode),
        };

        let mut viewmodel = UIViewModel {
            header: self.compute_header(),
            body,
            footer: self.compute_footer(),
        };
        viewmodel.fit_to_height(rows);
        viewmodel
    }

    fn compute_header(&self) -> HeaderInfo {
        let tabs = Screen::ALL
            .iter()
            .zip(['1', '2', '3'])
            .map(|(&screen, key)| TabInfo {
                key,
                label: match screen {
                    Screen::Quote if !self.session.lines.is_empty() => {
                        format!("{} ({})", screen.title(), self.session.lines.len())
                    }
                    _ => screen.title().to_string(),
                },
                is_active: screen == self.session.screen,
            })
            .collect();

        HeaderInfo {
            title: " Storefront ".to_string(),
            tabs,
        }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match (self.input_mode, self.session.screen) {
            (InputMode::Editing(_), _) => "Enter: confirm  Esc: cancel  Type to edit",
            (InputMode::Normal, Screen::Search) => {
                "/: search  j/k: navigate  Enter: add to quote  i: details  I: SKU lookup  +/-: alpha  Tab/1-3: screens  q: quit"
            }
            (InputMode::Normal, Screen::Quote) => {
                "j/k: navigate  +/-: qty  e: set qty  x: remove  c: customer  s: submit  D: discard  Tab/1-3: screens  q: quit"
            }
            (InputMode::Normal, Screen::View) => {
                "/: quote ID  Enter: load  j/k: scroll  Tab/1-3: screens  q: quit"
            }
        };

        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::modes::Field;

    fn state() -> AppState {
        AppState::new(ApiClient::new("http://localhost:8000").unwrap(), Theme::default())
    }

    #[test]
    fn header_marks_active_screen() {
        let mut state = state();
        state.apply(SessionAction::Navigate(Screen::View));

        let header = state.compute_viewmodel(24).header;
        let active: Vec<_> = header.tabs.iter().filter(|tab| tab.is_active).collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].label, "View Quote");
        assert_eq!(active[0].key, '3');
    }

    #[test]
    fn footer_follows_input_mode() {
        let mut state = state();
        state.input_mode = InputMode::Editing(Field::SearchQuery);
        let footer = state.compute_viewmodel(24).footer;
        assert!(footer.keybindings.starts_with("Enter: confirm"));
    }

    #[test]
    fn body_follows_active_screen() {
        let mut state = state();
        state.apply(SessionAction::Navigate(Screen::Quote));

        let vm = state.compute_viewmodel(24);
        assert_eq!(vm.body.inputs[0].label, "Customer Ref");
        assert_eq!(vm.body.inputs[0].value, "WEB_USER");
    }
}

//! Event handling and state transition logic.
//!
//! This module implements the core event handler that processes user input and
//! API responses, translating them into state changes and action sequences.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from the plugin runtime (keys, web request results)
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `AppState`, session transitions and screen states
//! 4. Actions (requests to send, closing the pane) are returned for execution
//!
//! # Event Types
//!
//! Events fall into several categories:
//! - **Navigation**: `KeyDown`, `KeyUp`, `NextScreen`, `PreviousScreen`, `ShowScreen`
//! - **Input**: `Edit`, `Char`, `Backspace`, `Submit`, `Cancel`
//! - **Search**: `AddSelected`, `ShowDetails`, `IncreaseAlpha`, `DecreaseAlpha`
//! - **Quote**: `IncrementQuantity`, `DecrementQuantity`, `RemoveLine`,
//!   `DiscardQuote`, `SubmitQuote`, `LoadQuote`
//! - **System**: `ApiResponse`, `PermissionsResult`
//!
//! # Example
//!
//! ```rust
//! use zstorefront::api::ApiClient;
//! use zstorefront::app::{handle_event, AppState, Event};
//! use zstorefront::ui::Theme;
//!
//! let mut state = AppState::new(ApiClient::new("http://localhost:8000")?, Theme::default());
//! let (should_render, actions) = handle_event(&mut state, &Event::NextScreen)?;
//! assert!(should_render && actions.is_empty());
//! # Ok::<(), zstorefront::domain::StorefrontError>(())
//! ```

use super::modes::{Field, InputMode, Screen};
use super::session::SessionAction;
use super::{Action, AppState};
use crate::api::{decode_response, ApiOperation, ApiRequest, ApiResponse};
use crate::domain::error::{Result, StorefrontError};
use zellij_tile::prelude::PermissionType;

/// Events triggered by user input or host responses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Moves the active screen's selection down (wraps to top).
    KeyDown,
    /// Moves the active screen's selection up (wraps to bottom).
    KeyUp,
    NextScreen,
    PreviousScreen,
    ShowScreen(Screen),
    /// Closes the floating pane and hides the plugin UI.
    CloseFocus,

    /// Starts typing into a field.
    Edit(Field),
    /// Appends a character to the field being edited.
    Char(char),
    /// Removes the last character from the field being edited.
    Backspace,
    /// Commits the field being edited.
    Submit,
    /// Leaves the field being edited.
    Cancel,

    /// Adds the highlighted search result to the quote and opens the editor.
    AddSelected,
    /// Fetches details for the highlighted search result.
    ShowDetails,
    IncreaseAlpha,
    DecreaseAlpha,

    IncrementQuantity,
    /// Lowers the highlighted line's quantity; at one the line is removed.
    DecrementQuantity,
    RemoveLine,
    /// Drops every pending quote line.
    DiscardQuote,
    SubmitQuote,
    /// Fetches the quote named in the viewer's id input.
    LoadQuote,

    /// Reports the outcome of a request sent with [`Action::SendRequest`].
    ApiResponse {
        operation: ApiOperation,
        status: u16,
        body: Vec<u8>,
    },

    /// Reports granted Zellij permissions after permission request.
    PermissionsResult {
        granted: Vec<PermissionType>,
    },
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// Returns whether the UI needs re-rendering along with the actions to run in
/// order. Events that do not apply to the active screen or input mode are
/// ignored without a render.
///
/// # Errors
///
/// Reserved for failures the state cannot absorb; request and validation
/// failures are recorded on the owning screen instead.
///
/// # Tracing
///
/// Each call creates a debug-level span with the event type.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!(
        "handle_event",
        event_type = ?event,
        screen = ?state.session.screen,
        input_mode = ?state.input_mode
    )
    .entered();

    match event {
        Event::KeyDown => {
            move_selection(state, true);
            Ok((true, vec![]))
        }
        Event::KeyUp => {
            move_selection(state, false);
            Ok((true, vec![]))
        }
        Event::NextScreen => {
            let next = state.screen().next();
            Ok(navigate(state, next))
        }
        Event::PreviousScreen => {
            let previous = state.screen().previous();
            Ok(navigate(state, previous))
        }
        Event::ShowScreen(screen) => Ok(navigate(state, *screen)),
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),

        Event::Edit(field) => Ok(begin_edit(state, *field)),
        Event::Char(c) => {
            let Some(buffer) = editing_buffer(state) else {
                return Ok((false, vec![]));
            };
            buffer.push(*c);
            Ok((true, vec![]))
        }
        Event::Backspace => {
            let Some(buffer) = editing_buffer(state) else {
                return Ok((false, vec![]));
            };
            buffer.pop();
            Ok((true, vec![]))
        }
        Event::Submit => Ok(commit_edit(state)),
        Event::Cancel => {
            let Some(field) = state.input_mode.field() else {
                return Ok((false, vec![]));
            };
            match field {
                Field::Quantity => state.editor.quantity_input.clear(),
                Field::Sku => state.search.sku_input.clear(),
                Field::SearchQuery | Field::CustomerRef | Field::QuoteId => {}
            }
            state.input_mode = InputMode::Normal;
            Ok((true, vec![]))
        }

        Event::AddSelected => {
            if state.screen() != Screen::Search || lines_locked(state) {
                return Ok((false, vec![]));
            }
            let Some(product) = state.search.selected_product().cloned() else {
                tracing::debug!("no product selected");
                return Ok((false, vec![]));
            };
            let sku = product.sku.clone();
            state.apply(SessionAction::SelectProduct(product));
            state.editor.select_sku(&state.session.lines, &sku);
            Ok((true, vec![]))
        }
        Event::ShowDetails => {
            if state.screen() != Screen::Search {
                return Ok((false, vec![]));
            }
            let Some(sku) = state.search.selected_product().map(|product| product.sku.clone()) else {
                tracing::debug!("no product selected");
                return Ok((false, vec![]));
            };
            let request = state.search.request_details(&state.api, &sku);
            Ok((true, send(request)))
        }
        Event::IncreaseAlpha | Event::DecreaseAlpha => {
            if state.screen() != Screen::Search {
                return Ok((false, vec![]));
            }
            state.search.alpha = if *event == Event::IncreaseAlpha {
                state.search.alpha.increase()
            } else {
                state.search.alpha.decrease()
            };
            tracing::debug!(alpha = %state.search.alpha, "alpha changed");
            Ok((true, vec![]))
        }

        Event::IncrementQuantity | Event::DecrementQuantity => {
            if state.screen() != Screen::Quote || lines_locked(state) {
                return Ok((false, vec![]));
            }
            let Some(line) = state.editor.selected_line(&state.session.lines) else {
                return Ok((false, vec![]));
            };
            let step = if *event == Event::IncrementQuantity { 1 } else { -1 };
            let action = SessionAction::SetQuantity {
                sku: line.sku.clone(),
                qty: i64::from(line.qty) + step,
            };
            state.apply(action);
            Ok((true, vec![]))
        }
        Event::RemoveLine => {
            if state.screen() != Screen::Quote || lines_locked(state) {
                return Ok((false, vec![]));
            }
            let Some(line) = state.editor.selected_line(&state.session.lines) else {
                return Ok((false, vec![]));
            };
            let sku = line.sku.clone();
            state.apply(SessionAction::RemoveLine(sku));
            Ok((true, vec![]))
        }
        Event::DiscardQuote => {
            if state.screen() != Screen::Quote
                || state.session.lines.is_empty()
                || lines_locked(state)
            {
                return Ok((false, vec![]));
            }
            state.apply(SessionAction::ClearLines);
            Ok((true, vec![]))
        }
        Event::SubmitQuote => {
            if state.screen() != Screen::Quote {
                return Ok((false, vec![]));
            }
            let request = state.editor.submit(&state.api, &state.session.lines);
            Ok((true, send(request)))
        }
        Event::LoadQuote => {
            if state.screen() != Screen::View {
                return Ok((false, vec![]));
            }
            let request = state.viewer.load(&state.api);
            Ok((true, send(request)))
        }

        Event::ApiResponse {
            operation,
            status,
            body,
        } => {
            apply_response(state, *operation, decode_response(*operation, *status, body));
            Ok((true, vec![]))
        }

        Event::PermissionsResult { granted } => {
            if !granted.contains(&PermissionType::WebAccess) {
                tracing::warn!("web access not granted, API calls will fail");
            }
            tracing::debug!(permissions = ?granted, "permissions updated");
            Ok((false, vec![]))
        }
    }
}

fn send(request: Option<ApiRequest>) -> Vec<Action> {
    request.map(Action::SendRequest).into_iter().collect()
}

/// Lines are frozen while a create-quote call is in flight; a successful
/// response clears them.
fn lines_locked(state: &AppState) -> bool {
    let locked = state.editor.submission.is_pending();
    if locked {
        tracing::debug!("quote submission pending, line edit ignored");
    }
    locked
}

fn navigate(state: &mut AppState, screen: Screen) -> (bool, Vec<Action>) {
    state.input_mode = InputMode::Normal;
    if state.screen() == screen {
        return (true, vec![]);
    }
    state.apply(SessionAction::Navigate(screen));
    (true, vec![])
}

fn move_selection(state: &mut AppState, down: bool) {
    let line_count = state.session.lines.len();
    match (state.screen(), down) {
        (Screen::Search, true) => state.search.move_selection_down(),
        (Screen::Search, false) => state.search.move_selection_up(),
        (Screen::Quote, true) => state.editor.move_selection_down(line_count),
        (Screen::Quote, false) => state.editor.move_selection_up(line_count),
        (Screen::View, true) => state.viewer.move_selection_down(),
        (Screen::View, false) => state.viewer.move_selection_up(),
    }
}

/// Enters editing mode for `field`, prefilling where it helps.
fn begin_edit(state: &mut AppState, field: Field) -> (bool, Vec<Action>) {
    if field.screen() != state.screen() {
        return (false, vec![]);
    }

    match field {
        Field::Quantity => {
            if lines_locked(state) {
                return (false, vec![]);
            }
            let Some(line) = state.editor.selected_line(&state.session.lines) else {
                return (false, vec![]);
            };
            state.editor.quantity_input = line.qty.to_string();
        }
        Field::Sku => {
            state.search.sku_input = state
                .search
                .selected_product()
                .map(|product| product.sku.clone())
                .unwrap_or_default();
        }
        Field::SearchQuery | Field::CustomerRef | Field::QuoteId => {}
    }

    state.input_mode = InputMode::Editing(field);
    (true, vec![])
}

fn editing_buffer(state: &mut AppState) -> Option<&mut String> {
    let buffer = match state.input_mode.field()? {
        Field::SearchQuery => &mut state.search.query,
        Field::Sku => &mut state.search.sku_input,
        Field::CustomerRef => &mut state.editor.customer_ref,
        Field::Quantity => &mut state.editor.quantity_input,
        Field::QuoteId => &mut state.viewer.quote_id_input,
    };
    Some(buffer)
}

/// Handles Enter: commits the edited field, or runs the screen's default
/// command in normal mode.
fn commit_edit(state: &mut AppState) -> (bool, Vec<Action>) {
    let Some(field) = state.input_mode.field() else {
        return match state.screen() {
            Screen::Search => (false, vec![]),
            Screen::Quote => begin_edit(state, Field::Quantity),
            Screen::View => {
                let request = state.viewer.load(&state.api);
                (true, send(request))
            }
        };
    };

    state.input_mode = InputMode::Normal;
    match field {
        Field::SearchQuery => {
            let request = state.search.submit_search(&state.api, state.search_limit);
            (true, send(request))
        }
        Field::Sku => {
            let sku = std::mem::take(&mut state.search.sku_input);
            let request = state.search.request_details(&state.api, &sku);
            (true, send(request))
        }
        Field::CustomerRef => (true, vec![]),
        Field::Quantity => {
            let qty = state.editor.parsed_quantity();
            state.editor.quantity_input.clear();
            if lines_locked(state) {
                return (true, vec![]);
            }
            let Some(sku) = state
                .editor
                .selected_line(&state.session.lines)
                .map(|line| line.sku.clone())
            else {
                return (true, vec![]);
            };
            state.apply(SessionAction::SetQuantity { sku, qty });
            (true, vec![])
        }
        Field::QuoteId => {
            let request = state.viewer.load(&state.api);
            (true, send(request))
        }
    }
}

/// Routes a decoded response to the screen that asked for it.
fn apply_response(state: &mut AppState, operation: ApiOperation, result: Result<ApiResponse>) {
    let _span = tracing::debug_span!("apply_response", operation = operation.as_str()).entered();

    if let Err(e) = &result {
        tracing::debug!(error = %e, "api call failed");
    }

    match operation {
        ApiOperation::Search => state.search.apply_results(result.and_then(|response| match response {
            ApiResponse::SearchResults(products) => Ok(products),
            other => Err(unexpected(operation, &other)),
        })),
        ApiOperation::GetProduct => state.search.apply_details(result.and_then(|response| match response {
            ApiResponse::Product(product) => Ok(product),
            other => Err(unexpected(operation, &other)),
        })),
        ApiOperation::CreateQuote => {
            let created = result.and_then(|response| match response {
                ApiResponse::QuoteCreated(created) => Ok(created.quote_id),
                other => Err(unexpected(operation, &other)),
            });
            if let Ok(quote_id) = &created {
                tracing::info!(quote_id = %quote_id, "quote created");
                state.viewer.quote_id_input.clone_from(quote_id);
                state.apply(SessionAction::ClearLines);
            }
            state.editor.apply_submission(created);
        }
        ApiOperation::GetQuote => state.viewer.apply_quote(result.and_then(|response| match response {
            ApiResponse::Quote(quote) => Ok(quote),
            other => Err(unexpected(operation, &other)),
        })),
    }
}

fn unexpected(operation: ApiOperation, response: &ApiResponse) -> StorefrontError {
    tracing::error!(operation = operation.as_str(), response = ?response, "response routed to wrong screen");
    StorefrontError::Decode(format!("unexpected payload for {}", operation.as_str()))
}

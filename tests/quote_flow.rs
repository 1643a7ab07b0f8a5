//! End-to-end flows through `handle_event`, with the host's web requests
//! answered by hand.

use zstorefront::api::{ApiOperation, Method};
use zstorefront::domain::money::format_money;
use zstorefront::ui::BannerKind;
use zstorefront::{handle_event, initialize, Action, AppState, Config, Event, Field, InputMode, Screen};

const SEARCH_BODY: &str = r#"{"results": [
    {"sku": "A1", "name": "Cordless Drill", "unit_price": 10.0, "brand": "Bosch", "hybrid_score": 0.91},
    {"sku": "B2", "name": "Drill Bits", "unit_price": 5.5, "hybrid_score": 0.44}
]}"#;

const QUOTE_BODY: &str = r#"{
    "quote_id": "CRQ-9",
    "customer_ref": "WEB_USER",
    "valid_until": "2026-11-01T12:30:00",
    "list_total": 26.5,
    "transfer_total": 25.18,
    "installments_total": 27.83,
    "lines": [
        {"line_number": 1, "sku": "A1", "name": "Cordless Drill", "qty": 1, "unit_price": 10.0, "line_total": 10.0},
        {"line_number": 2, "sku": "B2", "name": "Drill Bits", "qty": 3, "unit_price": 5.5, "line_total": 16.5}
    ]
}"#;

fn state() -> AppState {
    initialize(&Config::default())
}

fn send(state: &mut AppState, event: Event) -> Vec<Action> {
    handle_event(state, &event).unwrap().1
}

fn type_text(state: &mut AppState, field: Field, text: &str) {
    send(state, Event::Edit(field));
    for c in text.chars() {
        send(state, Event::Char(c));
    }
}

fn respond(state: &mut AppState, operation: ApiOperation, status: u16, body: &str) {
    send(
        state,
        Event::ApiResponse {
            operation,
            status,
            body: body.as_bytes().to_vec(),
        },
    );
}

fn request_of(actions: &[Action]) -> &zstorefront::ApiRequest {
    match actions {
        [Action::SendRequest(request)] => request,
        other => panic!("expected one request, got {other:?}"),
    }
}

/// Searches for "drill" and answers with two results.
fn searched_state() -> AppState {
    let mut state = state();
    type_text(&mut state, Field::SearchQuery, "drill");
    send(&mut state, Event::Submit);
    respond(&mut state, ApiOperation::Search, 200, SEARCH_BODY);
    state
}

/// Builds a quote of A1 x1 and B2 x3.
fn quote_state() -> AppState {
    let mut state = searched_state();
    send(&mut state, Event::AddSelected);
    send(&mut state, Event::ShowScreen(Screen::Search));
    send(&mut state, Event::KeyDown);
    send(&mut state, Event::AddSelected);
    send(&mut state, Event::IncrementQuantity);
    send(&mut state, Event::IncrementQuantity);
    state
}

#[test]
fn search_sends_one_request_and_shows_results() {
    let mut state = state();
    type_text(&mut state, Field::SearchQuery, "drill");

    let actions = send(&mut state, Event::Submit);
    let request = request_of(&actions);
    assert_eq!(request.method, Method::Get);
    assert_eq!(request.url, "http://localhost:8000/search?q=drill&limit=20&alpha=0.6");
    assert_eq!(state.input_mode, InputMode::Normal);

    let banners = state.compute_viewmodel(30).body.banners;
    assert_eq!(banners[0].kind, BannerKind::Info);
    assert_eq!(banners[0].message, "Searching...");

    respond(&mut state, ApiOperation::Search, 200, SEARCH_BODY);
    let table = state.compute_viewmodel(30).body.table.unwrap();
    assert_eq!(table.title, "Results (2)");
    assert_eq!(table.rows[0].cells[1], "Cordless Drill");
}

#[test]
fn second_submit_while_pending_is_ignored() {
    let mut state = state();
    type_text(&mut state, Field::SearchQuery, "drill");
    assert_eq!(send(&mut state, Event::Submit).len(), 1);

    send(&mut state, Event::Edit(Field::SearchQuery));
    assert!(send(&mut state, Event::Submit).is_empty());
}

#[test]
fn alpha_changes_are_sent_with_the_next_search() {
    let mut state = state();
    send(&mut state, Event::IncreaseAlpha);
    send(&mut state, Event::IncreaseAlpha);
    type_text(&mut state, Field::SearchQuery, "saw");

    let actions = send(&mut state, Event::Submit);
    assert!(request_of(&actions).url.ends_with("alpha=0.8"));
}

#[test]
fn selecting_a_result_opens_the_quote_editor() {
    let mut state = searched_state();

    send(&mut state, Event::AddSelected);

    assert_eq!(state.screen(), Screen::Quote);
    assert_eq!(state.session.lines.get("A1").map(|line| line.qty), Some(1));
}

#[test]
fn quote_total_follows_edits() {
    let mut state = quote_state();
    assert_eq!(state.screen(), Screen::Quote);
    assert_eq!(state.session.lines.len(), 2);
    assert_eq!(format_money(&state.session.lines.total()), "$26.50");

    send(&mut state, Event::KeyUp);
    send(&mut state, Event::RemoveLine);
    assert_eq!(state.session.lines.len(), 1);
    assert_eq!(format_money(&state.session.lines.total()), "$16.50");

    let table = state.compute_viewmodel(30).body.table.unwrap();
    assert_eq!(table.title, "Quote Lines (1)");
    assert_eq!(table.total.unwrap().cells[4], "$16.50");
}

#[test]
fn typed_quantity_replaces_the_line_quantity() {
    let mut state = quote_state();
    send(&mut state, Event::KeyUp);

    send(&mut state, Event::Submit);
    assert_eq!(state.input_mode, InputMode::Editing(Field::Quantity));
    assert_eq!(state.editor.quantity_input, "1");

    send(&mut state, Event::Backspace);
    type_text_in_place(&mut state, "4");
    send(&mut state, Event::Submit);

    assert_eq!(state.session.lines.get("A1").map(|line| line.qty), Some(4));
    assert_eq!(format_money(&state.session.lines.total()), "$56.50");
}

#[test]
fn unparsable_quantity_removes_the_line() {
    let mut state = quote_state();
    send(&mut state, Event::KeyUp);

    send(&mut state, Event::Edit(Field::Quantity));
    send(&mut state, Event::Backspace);
    type_text_in_place(&mut state, "lots");
    send(&mut state, Event::Submit);

    assert!(state.session.lines.get("A1").is_none());
    assert_eq!(state.session.lines.len(), 1);
}

#[test]
fn oversized_quantity_keeps_the_line() {
    let mut state = quote_state();
    send(&mut state, Event::KeyUp);

    send(&mut state, Event::Edit(Field::Quantity));
    send(&mut state, Event::Backspace);
    type_text_in_place(&mut state, "99999999999999999999");
    send(&mut state, Event::Submit);

    assert_eq!(state.session.lines.get("A1").map(|line| line.qty), Some(u32::MAX));
    assert_eq!(state.session.lines.len(), 2);
}

#[test]
fn decrementing_a_single_item_removes_it() {
    let mut state = searched_state();
    send(&mut state, Event::AddSelected);

    send(&mut state, Event::DecrementQuantity);

    assert!(state.session.lines.is_empty());
    let body = state.compute_viewmodel(30).body;
    assert_eq!(
        body.empty_state.unwrap().message,
        "No products added yet. Use the search to add products."
    );
}

#[test]
fn successful_submit_clears_lines_and_prefills_viewer() {
    let mut state = quote_state();

    let actions = send(&mut state, Event::SubmitQuote);
    let request = request_of(&actions);
    assert_eq!(request.method, Method::Post);
    assert_eq!(request.url, "http://localhost:8000/quotes");
    let body: serde_json::Value = serde_json::from_slice(&request.body).unwrap();
    assert_eq!(body["customerRef"], "WEB_USER");
    assert_eq!(body["lines"][1]["qty"], 3);

    assert_eq!(state.compute_viewmodel(30).body.banners[0].message, "Creating Quote...");

    respond(&mut state, ApiOperation::CreateQuote, 201, r#"{"quoteId": "CRQ-9"}"#);

    assert!(state.session.lines.is_empty());
    assert_eq!(state.viewer.quote_id_input, "CRQ-9");
    let banner = &state.compute_viewmodel(30).body.banners[0];
    assert_eq!(banner.kind, BannerKind::Success);
    assert_eq!(banner.message, "Quote created successfully! ID: CRQ-9");

    send(&mut state, Event::ShowScreen(Screen::View));
    let actions = send(&mut state, Event::LoadQuote);
    assert_eq!(request_of(&actions).url, "http://localhost:8000/quotes/CRQ-9");

    respond(&mut state, ApiOperation::GetQuote, 200, QUOTE_BODY);
    let body = state.compute_viewmodel(40).body;
    assert_eq!(body.details.unwrap().title, "Quote CRQ-9");
    assert_eq!(body.table.unwrap().title, "Line Items (2)");
}

#[test]
fn failed_submit_keeps_lines_and_shows_server_detail() {
    let mut state = quote_state();
    send(&mut state, Event::SubmitQuote);

    respond(
        &mut state,
        ApiOperation::CreateQuote,
        409,
        r#"{"detail": "duplicate customer ref"}"#,
    );

    assert_eq!(state.session.lines.len(), 2);
    assert_eq!(state.editor.submission.error(), Some("duplicate customer ref"));
    let banner = &state.compute_viewmodel(30).body.banners[0];
    assert_eq!(banner.kind, BannerKind::Error);
    assert_eq!(banner.message, "duplicate customer ref");
}

#[test]
fn lines_are_frozen_while_submit_is_pending() {
    let mut state = quote_state();
    send(&mut state, Event::SubmitQuote);

    send(&mut state, Event::IncrementQuantity);
    send(&mut state, Event::RemoveLine);
    send(&mut state, Event::DiscardQuote);
    send(&mut state, Event::Edit(Field::Quantity));
    assert_eq!(state.input_mode, InputMode::Normal);
    send(&mut state, Event::ShowScreen(Screen::Search));
    send(&mut state, Event::AddSelected);
    send(&mut state, Event::ShowScreen(Screen::Quote));

    assert_eq!(state.session.lines.len(), 2);
    assert_eq!(state.session.lines.get("B2").map(|line| line.qty), Some(3));

    respond(&mut state, ApiOperation::CreateQuote, 500, r#"{"detail": "down"}"#);
    send(&mut state, Event::IncrementQuantity);
    assert_eq!(state.session.lines.get("B2").map(|line| line.qty), Some(4));
}

#[test]
fn validation_messages_stay_on_their_screen() {
    let mut state = state();

    send(&mut state, Event::Edit(Field::SearchQuery));
    assert!(send(&mut state, Event::Submit).is_empty());
    assert_eq!(state.search.results.error(), Some("Please enter a search term"));

    send(&mut state, Event::ShowScreen(Screen::Quote));
    assert!(send(&mut state, Event::SubmitQuote).is_empty());
    assert_eq!(
        state.editor.submission.error(),
        Some("Add at least one product to create a quote")
    );

    send(&mut state, Event::ShowScreen(Screen::View));
    assert!(send(&mut state, Event::LoadQuote).is_empty());
    assert_eq!(state.viewer.quote.error(), Some("Please enter a quote ID"));

    assert!(state.compute_viewmodel(30).body.banners.iter().all(|banner| banner.message == "Please enter a quote ID"));
}

#[test]
fn blank_customer_ref_is_rejected() {
    let mut state = quote_state();
    send(&mut state, Event::Edit(Field::CustomerRef));
    for _ in 0.."WEB_USER".len() {
        send(&mut state, Event::Backspace);
    }
    send(&mut state, Event::Submit);

    assert!(send(&mut state, Event::SubmitQuote).is_empty());
    assert_eq!(state.editor.submission.error(), Some("Please enter a customer reference"));
}

#[test]
fn lines_survive_navigation_but_not_discard() {
    let mut state = quote_state();

    send(&mut state, Event::NextScreen);
    assert_eq!(state.screen(), Screen::View);
    send(&mut state, Event::NextScreen);
    assert_eq!(state.screen(), Screen::Search);
    send(&mut state, Event::PreviousScreen);
    assert_eq!(state.screen(), Screen::View);
    send(&mut state, Event::ShowScreen(Screen::Quote));
    assert_eq!(state.session.lines.len(), 2);

    send(&mut state, Event::DiscardQuote);
    assert!(state.session.lines.is_empty());
}

#[test]
fn product_details_for_highlighted_result() {
    let mut state = searched_state();

    let actions = send(&mut state, Event::ShowDetails);
    assert_eq!(request_of(&actions).url, "http://localhost:8000/products/A1");

    respond(
        &mut state,
        ApiOperation::GetProduct,
        200,
        r#"{"sku": "A1", "name": "Cordless Drill", "unit_price": 10.0}"#,
    );
    let details = state.compute_viewmodel(40).body.details.unwrap();
    assert_eq!(details.title, "Product Details");
    assert!(details.fields.contains(&("Brand".to_string(), "N/A".to_string())));

    respond(&mut state, ApiOperation::GetProduct, 404, "");
    assert_eq!(state.search.details.error(), Some("Product not found"));
}

#[test]
fn close_focus_is_passed_to_the_host() {
    let mut state = state();
    assert_eq!(send(&mut state, Event::CloseFocus), vec![Action::CloseFocus]);
}

fn type_text_in_place(state: &mut AppState, text: &str) {
    for c in text.chars() {
        send(state, Event::Char(c));
    }
}

//! Quote editor screen: pending lines, customer reference and submission.

use crate::api::{ApiClient, ApiRequest};
use crate::app::modes::{Field, InputMode};
use crate::app::request_state::RequestState;
use crate::domain::money::format_money;
use crate::domain::{QuoteLine, QuoteLineCollection, Result};
use crate::ui::viewmodel::{
    Banner, Column, ColumnWidth, EmptyState, InputBarInfo, ScreenBody, TableRow, TableView,
};

/// Customer reference used when none is configured.
pub const DEFAULT_CUSTOMER_REF: &str = "WEB_USER";

#[derive(Debug, Clone)]
pub struct QuoteEditorState {
    pub customer_ref: String,

    /// Highlighted line within the session's quote lines.
    pub selected_index: usize,

    /// Quantity being typed for the highlighted line.
    pub quantity_input: String,

    /// Outcome of the last submission; success carries the new quote id.
    pub submission: RequestState<String>,
}

impl Default for QuoteEditorState {
    fn default() -> Self {
        Self::new(DEFAULT_CUSTOMER_REF)
    }
}

impl QuoteEditorState {
    #[must_use]
    pub fn new(customer_ref: &str) -> Self {
        Self {
            customer_ref: customer_ref.to_string(),
            selected_index: 0,
            quantity_input: String::new(),
            submission: RequestState::Idle,
        }
    }

    pub fn move_selection_down(&mut self, line_count: usize) {
        if line_count == 0 {
            return;
        }
        self.selected_index = (self.selected_index + 1) % line_count;
    }

    pub fn move_selection_up(&mut self, line_count: usize) {
        if line_count == 0 {
            return;
        }
        if self.selected_index == 0 {
            self.selected_index = line_count - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    /// Keeps the selection inside `0..line_count` after lines change.
    pub fn clamp_selection(&mut self, line_count: usize) {
        self.selected_index = self.selected_index.min(line_count.saturating_sub(1));
    }

    /// Points the selection at `sku`, if it has a line.
    pub fn select_sku(&mut self, lines: &QuoteLineCollection, sku: &str) {
        if let Some(index) = lines.lines().iter().position(|line| line.sku == sku) {
            self.selected_index = index;
        }
    }

    #[must_use]
    pub fn selected_line<'a>(&self, lines: &'a QuoteLineCollection) -> Option<&'a QuoteLine> {
        lines.lines().get(self.selected_index)
    }

    /// Parses the typed quantity; anything that is not an integer counts as 0.
    ///
    /// Digit strings too long for `i64` saturate instead of failing.
    #[must_use]
    pub fn parsed_quantity(&self) -> i64 {
        let text = self.quantity_input.trim();
        if let Ok(qty) = text.parse() {
            return qty;
        }

        let (negative, digits) = match text.strip_prefix('-') {
            Some(digits) => (true, digits),
            None => (false, text.strip_prefix('+').unwrap_or(text)),
        };
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return 0;
        }
        if negative {
            i64::MIN
        } else {
            i64::MAX
        }
    }

    /// Starts submitting `lines` as a new quote.
    ///
    /// Returns `None` when a submission is in flight or validation fails.
    /// Validation failures are recorded as the submission's message.
    pub fn submit(&mut self, client: &ApiClient, lines: &QuoteLineCollection) -> Option<ApiRequest> {
        if self.submission.is_pending() {
            tracing::debug!("quote submission already pending");
            return None;
        }
        if lines.is_empty() {
            self.submission.reject("Add at least one product to create a quote");
            return None;
        }

        let customer_ref = self.customer_ref.trim();
        if customer_ref.is_empty() {
            self.submission.reject("Please enter a customer reference");
            return None;
        }

        tracing::debug!(
            customer_ref = %customer_ref,
            line_count = lines.len(),
            "submitting quote"
        );
        let request = client.create_quote(customer_ref, lines.lines());
        self.submission.begin(request)
    }

    pub fn apply_submission(&mut self, result: Result<String>) {
        self.submission.resolve(result);
    }

    pub(crate) fn compute_body(&self, mode: InputMode, lines: &QuoteLineCollection) -> ScreenBody {
        let mut inputs = vec![InputBarInfo {
            label: "Customer Ref".to_string(),
            value: self.customer_ref.clone(),
            is_editing: mode == InputMode::Editing(Field::CustomerRef),
        }];
        if mode == InputMode::Editing(Field::Quantity) {
            if let Some(line) = self.selected_line(lines) {
                inputs.push(InputBarInfo {
                    label: format!("Quantity for {}", line.sku),
                    value: self.quantity_input.clone(),
                    is_editing: true,
                });
            }
        }

        let banners = match &self.submission {
            RequestState::Idle => vec![],
            RequestState::Pending => vec![Banner::info("Creating Quote...")],
            RequestState::Succeeded(quote_id) => vec![Banner::success(format!(
                "Quote created successfully! ID: {quote_id}"
            ))],
            RequestState::Failed(message) => vec![Banner::error(message.clone())],
        };

        let rows: Vec<TableRow> = lines
            .iter()
            .enumerate()
            .map(|(index, line)| TableRow {
                cells: vec![
                    line.sku.clone(),
                    line.name.clone(),
                    line.unit_price.as_ref().map_or_else(|| "N/A".to_string(), format_money),
                    line.qty.to_string(),
                    format_money(&line.line_total()),
                ],
                is_selected: index == self.selected_index,
                highlight: None,
            })
            .collect();

        let empty_state = lines.is_empty().then(|| EmptyState {
            message: "No products added yet. Use the search to add products.".to_string(),
            subtitle: "Press 1 to search, Enter to add the highlighted product".to_string(),
        });

        let total = TableRow {
            cells: vec![
                String::new(),
                "Total".to_string(),
                String::new(),
                String::new(),
                format_money(&lines.total()),
            ],
            ..TableRow::default()
        };

        ScreenBody {
            inputs,
            status_line: None,
            banners,
            details: None,
            table: Some(TableView {
                title: format!("Quote Lines ({})", lines.len()),
                columns: vec![
                    Column::left("SKU", ColumnWidth::Fixed(14)),
                    Column::left("NAME", ColumnWidth::Fill),
                    Column::right("UNIT PRICE", ColumnWidth::Fixed(12)),
                    Column::right("QTY", ColumnWidth::Fixed(6)),
                    Column::right("LINE TOTAL", ColumnWidth::Fixed(12)),
                ],
                rows,
                total: (!lines.is_empty()).then_some(total),
            }),
            empty_state,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Product;
    use bigdecimal::BigDecimal;
    use std::str::FromStr;

    fn lines(skus: &[(&str, &str)]) -> QuoteLineCollection {
        let mut lines = QuoteLineCollection::new();
        for (sku, price) in skus {
            lines.add_or_increment(&Product {
                sku: (*sku).to_string(),
                name: format!("Product {sku}"),
                unit_price: BigDecimal::from_str(price).unwrap(),
                brand: None,
                category: None,
                hybrid_score: None,
            });
        }
        lines
    }

    fn client() -> ApiClient {
        ApiClient::new("http://localhost:8000").unwrap()
    }

    #[test]
    fn empty_quote_cannot_be_submitted() {
        let mut editor = QuoteEditorState::default();
        assert!(editor.submit(&client(), &QuoteLineCollection::new()).is_none());
        assert_eq!(
            editor.submission.error(),
            Some("Add at least one product to create a quote")
        );
    }

    #[test]
    fn blank_customer_ref_is_rejected() {
        let mut editor = QuoteEditorState::new("  ");
        assert!(editor.submit(&client(), &lines(&[("A1", "10")])).is_none());
        assert_eq!(editor.submission.error(), Some("Please enter a customer reference"));
    }

    #[test]
    fn submission_is_guarded_while_pending() {
        let mut editor = QuoteEditorState::default();
        let lines = lines(&[("A1", "10")]);

        let request = editor.submit(&client(), &lines).unwrap();
        assert_eq!(request.url, "http://localhost:8000/quotes");
        assert!(editor.submit(&client(), &lines).is_none());
    }

    #[test]
    fn unparsable_quantity_counts_as_zero() {
        let mut editor = QuoteEditorState::default();
        for (typed, expected) in [("3", 3), (" 12 ", 12), ("", 0), ("abc", 0), ("-2", -2)] {
            editor.quantity_input = typed.to_string();
            assert_eq!(editor.parsed_quantity(), expected, "input {typed:?}");
        }
    }

    #[test]
    fn oversized_quantity_saturates() {
        let mut editor = QuoteEditorState::default();
        for (typed, expected) in [
            ("99999999999999999999", i64::MAX),
            ("+99999999999999999999", i64::MAX),
            ("-99999999999999999999", i64::MIN),
            ("9999999999999999999x", 0),
            ("-", 0),
        ] {
            editor.quantity_input = typed.to_string();
            assert_eq!(editor.parsed_quantity(), expected, "input {typed:?}");
        }
    }

    #[test]
    fn body_lists_lines_with_total() {
        let mut lines = lines(&[("A1", "10.00"), ("B2", "5.50")]);
        lines.set_quantity("B2", 3);
        let editor = QuoteEditorState::default();

        let body = editor.compute_body(InputMode::Normal, &lines);
        let table = body.table.unwrap();
        assert_eq!(table.title, "Quote Lines (2)");
        assert_eq!(table.rows[1].cells[4], "$16.50");
        assert_eq!(table.total.unwrap().cells[4], "$26.50");
        assert!(body.empty_state.is_none());
    }

    #[test]
    fn success_banner_names_the_quote() {
        let mut editor = QuoteEditorState::default();
        editor.apply_submission(Ok("CRQ-1".to_string()));

        let body = editor.compute_body(InputMode::Normal, &QuoteLineCollection::new());
        assert_eq!(body.banners, vec![Banner::success("Quote created successfully! ID: CRQ-1")]);
        assert_eq!(
            body.empty_state.unwrap().message,
            "No products added yet. Use the search to add products."
        );
    }

    #[test]
    fn selection_follows_lines() {
        let lines = lines(&[("A1", "1"), ("B2", "2"), ("C3", "3")]);
        let mut editor = QuoteEditorState::default();

        editor.select_sku(&lines, "C3");
        assert_eq!(editor.selected_line(&lines).map(|l| l.sku.as_str()), Some("C3"));

        editor.clamp_selection(1);
        assert_eq!(editor.selected_index, 0);
        editor.move_selection_up(3);
        assert_eq!(editor.selected_index, 2);
    }
}

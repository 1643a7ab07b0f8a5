//! Quote viewer screen: look up a persisted quote by id.

use crate::api::{ApiClient, ApiRequest};
use crate::app::modes::{Field, InputMode};
use crate::app::request_state::RequestState;
use crate::domain::money::format_money;
use crate::domain::{Quote, Result};
use crate::ui::viewmodel::{
    Banner, Column, ColumnWidth, DetailsPanel, EmptyState, InputBarInfo, ScreenBody, TableRow,
    TableView,
};

#[derive(Debug, Clone, Default)]
pub struct QuoteViewerState {
    pub quote_id_input: String,
    pub quote: RequestState<Quote>,
    /// Highlighted line item, for scrolling long quotes.
    pub selected_index: usize,
}

impl QuoteViewerState {
    fn line_count(&self) -> usize {
        self.quote.value().map_or(0, |quote| quote.lines.len())
    }

    pub fn move_selection_down(&mut self) {
        let count = self.line_count();
        if count > 0 {
            self.selected_index = (self.selected_index + 1) % count;
        }
    }

    pub fn move_selection_up(&mut self) {
        let count = self.line_count();
        if count > 0 {
            self.selected_index = self.selected_index.checked_sub(1).unwrap_or(count - 1);
        }
    }

    /// Starts fetching the quote named by the id input.
    pub fn load(&mut self, client: &ApiClient) -> Option<ApiRequest> {
        if self.quote.is_pending() {
            tracing::debug!("quote lookup already pending");
            return None;
        }

        let quote_id = self.quote_id_input.trim();
        if quote_id.is_empty() {
            self.quote.reject("Please enter a quote ID");
            return None;
        }

        tracing::debug!(quote_id = %quote_id, "loading quote");
        let request = client.get_quote(quote_id);
        self.selected_index = 0;
        self.quote.begin(request)
    }

    pub fn apply_quote(&mut self, result: Result<Quote>) {
        self.selected_index = 0;
        self.quote.resolve(result);
    }

    pub(crate) fn compute_body(&self, mode: InputMode) -> ScreenBody {
        let inputs = vec![InputBarInfo {
            label: "Quote ID".to_string(),
            value: self.quote_id_input.clone(),
            is_editing: mode == InputMode::Editing(Field::QuoteId),
        }];

        let banners = match &self.quote {
            RequestState::Pending => vec![Banner::info("Loading quote...")],
            RequestState::Failed(message) => vec![Banner::error(message.clone())],
            RequestState::Idle | RequestState::Succeeded(_) => vec![],
        };

        let Some(quote) = self.quote.value() else {
            return ScreenBody {
                inputs,
                banners,
                empty_state: Some(EmptyState {
                    message: "No quote loaded".to_string(),
                    subtitle: "Press / to enter a quote ID, then Enter".to_string(),
                }),
                ..ScreenBody::default()
            };
        };

        ScreenBody {
            inputs,
            status_line: None,
            banners,
            details: Some(quote_panel(quote)),
            table: Some(self.line_items_table(quote)),
            empty_state: quote.lines.is_empty().then(|| EmptyState {
                message: "This quote has no line items".to_string(),
                subtitle: String::new(),
            }),
        }
    }

    fn line_items_table(&self, quote: &Quote) -> TableView {
        let rows = quote
            .lines
            .iter()
            .enumerate()
            .map(|(index, item)| TableRow {
                cells: vec![
                    item.line_number.to_string(),
                    item.sku.clone(),
                    item.name.clone(),
                    item.qty.to_string(),
                    format_money(&item.unit_price),
                    format_money(&item.line_total),
                ],
                is_selected: index == self.selected_index,
                highlight: None,
            })
            .collect();

        TableView {
            title: format!("Line Items ({})", quote.lines.len()),
            columns: vec![
                Column::right("#", ColumnWidth::Fixed(4)),
                Column::left("SKU", ColumnWidth::Fixed(14)),
                Column::left("NAME", ColumnWidth::Fill),
                Column::right("QTY", ColumnWidth::Fixed(6)),
                Column::right("UNIT PRICE", ColumnWidth::Fixed(12)),
                Column::right("LINE TOTAL", ColumnWidth::Fixed(12)),
            ],
            rows,
            total: None,
        }
    }
}

fn quote_panel(quote: &Quote) -> DetailsPanel {
    DetailsPanel {
        title: format!("Quote {}", quote.quote_id),
        fields: vec![
            ("Quote ID".to_string(), quote.quote_id.clone()),
            ("Customer".to_string(), quote.customer_ref.clone()),
            ("Valid Until".to_string(), quote.valid_until_label()),
            ("List Total".to_string(), format_money(&quote.list_total)),
            ("Transfer Total".to_string(), format_money(&quote.transfer_total)),
            ("Installments Total".to_string(), format_money(&quote.installments_total)),
        ],
        notes: quote.notes().to_vec(),
    }
}

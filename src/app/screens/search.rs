//! Product search screen: query, alpha weight, results and product details.

use crate::api::{Alpha, ApiClient, ApiRequest};
use crate::app::modes::{Field, InputMode};
use crate::app::request_state::RequestState;
use crate::domain::money::{format_money, format_score};
use crate::domain::{Product, Result};
use crate::ui::viewmodel::{
    Banner, Column, ColumnWidth, DetailsPanel, EmptyState, InputBarInfo, ScreenBody, TableRow,
    TableView,
};
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

/// Index of the name column in the results table.
const NAME_COLUMN: usize = 1;

#[derive(Debug, Clone, Default)]
pub struct SearchState {
    /// Query being typed.
    pub query: String,

    /// SKU typed for a direct product lookup.
    pub sku_input: String,

    /// Keyword/semantic blend sent with the next search.
    pub alpha: Alpha,

    pub results: RequestState<Vec<Product>>,

    /// Highlighted row within the results.
    pub selected_index: usize,

    pub details: RequestState<Product>,

    /// Query the current results were fetched for, used for highlighting.
    searched_query: String,
}

impl SearchState {
    #[must_use]
    pub fn new(alpha: Alpha) -> Self {
        Self { alpha, ..Self::default() }
    }

    fn result_count(&self) -> usize {
        self.results.value().map_or(0, Vec::len)
    }

    pub fn move_selection_down(&mut self) {
        let count = self.result_count();
        if count == 0 {
            return;
        }
        self.selected_index = (self.selected_index + 1) % count;
    }

    pub fn move_selection_up(&mut self) {
        let count = self.result_count();
        if count == 0 {
            return;
        }
        if self.selected_index == 0 {
            self.selected_index = count - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    #[must_use]
    pub fn selected_product(&self) -> Option<&Product> {
        self.results.value()?.get(self.selected_index)
    }

    /// Starts a search for the current query.
    ///
    /// Returns `None` when a search is already running or the query is blank
    /// (the latter records a validation message).
    pub fn submit_search(&mut self, client: &ApiClient, limit: u32) -> Option<ApiRequest> {
        if self.results.is_pending() {
            tracing::debug!("search already pending");
            return None;
        }

        let query = self.query.trim();
        if query.is_empty() {
            self.results.reject("Please enter a search term");
            return None;
        }

        tracing::debug!(query = %query, alpha = %self.alpha, limit = limit, "starting search");
        let request = client.search(query, limit, self.alpha);
        self.searched_query = query.to_string();
        self.selected_index = 0;
        self.details = RequestState::Idle;
        self.results.begin(request)
    }

    /// Starts a product lookup for `sku`.
    pub fn request_details(&mut self, client: &ApiClient, sku: &str) -> Option<ApiRequest> {
        if self.details.is_pending() {
            tracing::debug!("product lookup already pending");
            return None;
        }

        let sku = sku.trim();
        if sku.is_empty() {
            self.details.reject("Please enter a SKU");
            return None;
        }

        tracing::debug!(sku = %sku, "starting product lookup");
        self.details.begin(client.get_product(sku))
    }

    pub fn apply_results(&mut self, result: Result<Vec<Product>>) {
        self.selected_index = 0;
        if let Ok(products) = &result {
            tracing::debug!(count = products.len(), "search results received");
        }
        self.results.resolve(result);
    }

    pub fn apply_details(&mut self, result: Result<Product>) {
        self.details.resolve(result);
    }

    pub(crate) fn compute_body(&self, mode: InputMode) -> ScreenBody {
        let mut inputs = vec![InputBarInfo {
            label: "Search".to_string(),
            value: self.query.clone(),
            is_editing: mode == InputMode::Editing(Field::SearchQuery),
        }];
        if mode == InputMode::Editing(Field::Sku) {
            inputs.push(InputBarInfo {
                label: "Product SKU".to_string(),
                value: self.sku_input.clone(),
                is_editing: true,
            });
        }

        let mut banners = Vec::new();
        match &self.results {
            RequestState::Pending => banners.push(Banner::info("Searching...")),
            RequestState::Failed(message) => banners.push(Banner::error(message.clone())),
            RequestState::Idle | RequestState::Succeeded(_) => {}
        }
        match &self.details {
            RequestState::Pending => banners.push(Banner::info("Loading product...")),
            RequestState::Failed(message) => banners.push(Banner::error(message.clone())),
            RequestState::Idle | RequestState::Succeeded(_) => {}
        }

        let (table, empty_state) = match self.results.value() {
            Some(products) if products.is_empty() => (
                None,
                Some(EmptyState {
                    message: "No products found".to_string(),
                    subtitle: "Try a different search term".to_string(),
                }),
            ),
            Some(products) => (Some(self.results_table(products)), None),
            None => (
                None,
                Some(EmptyState {
                    message: "Search the catalogue".to_string(),
                    subtitle: "Press / to type a query, then Enter".to_string(),
                }),
            ),
        };

        ScreenBody {
            inputs,
            status_line: Some(format!(
                "Search Weight (Alpha): {}   0 = keyword only, 1 = semantic only",
                self.alpha
            )),
            banners,
            details: self.details.value().map(details_panel),
            table,
            empty_state,
        }
    }

    fn results_table(&self, products: &[Product]) -> TableView {
        let matcher = SkimMatcherV2::default();

        let rows = products
            .iter()
            .enumerate()
            .map(|(index, product)| {
                let ranges = highlight_ranges(&matcher, &product.name, &self.searched_query);
                TableRow {
                    cells: vec![
                        product.sku.clone(),
                        product.name.clone(),
                        product.brand_label().to_string(),
                        format_money(&product.unit_price),
                        product.hybrid_score.as_ref().map_or_else(String::new, format_score),
                    ],
                    is_selected: index == self.selected_index,
                    highlight: (!ranges.is_empty()).then_some((NAME_COLUMN, ranges)),
                }
            })
            .collect();

        TableView {
            title: format!("Results ({})", products.len()),
            columns: vec![
                Column::left("SKU", ColumnWidth::Fixed(14)),
                Column::left("NAME", ColumnWidth::Fill),
                Column::left("BRAND", ColumnWidth::Fixed(14)),
                Column::right("PRICE", ColumnWidth::Fixed(12)),
                Column::right("SCORE", ColumnWidth::Fixed(7)),
            ],
            rows,
            total: None,
        }
    }
}

fn details_panel(product: &Product) -> DetailsPanel {
    DetailsPanel {
        title: "Product Details".to_string(),
        fields: vec![
            ("SKU".to_string(), product.sku.clone()),
            ("Name".to_string(), product.name.clone()),
            ("Brand".to_string(), product.brand_label().to_string()),
            ("Price".to_string(), format_money(&product.unit_price)),
            ("Category".to_string(), product.category_label().to_string()),
        ],
        notes: vec![],
    }
}

/// Character ranges of `text` matched by `query`, coalesced into runs.
fn highlight_ranges(matcher: &SkimMatcherV2, text: &str, query: &str) -> Vec<(usize, usize)> {
    if query.is_empty() {
        return vec![];
    }
    let Some((_score, indices)) = matcher.fuzzy_indices(text, query) else {
        return vec![];
    };

    let mut ranges: Vec<(usize, usize)> = Vec::new();
    for idx in indices {
        match ranges.last_mut() {
            Some((_, end)) if *end == idx => *end = idx + 1,
            _ => ranges.push((idx, idx + 1)),
        }
    }
    ranges
}

//! View model types representing renderable UI state.
//!
//! View models are computed from application state by
//! `AppState::compute_viewmodel()` and consumed by the renderer. They hold
//! display-ready strings (prices already formatted, labels already resolved)
//! so the renderer only lays out and colours text.
//!
//! # Layout
//!
//! ```text
//! [Header: title + screen tabs]
//! [Input boxes]
//! [Status line]
//! [Banners]
//! [Details panel]
//! [Table title / column headers / rows / total]
//! [Footer]
//! ```

use std::ops::Range;

/// Complete UI view model for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UIViewModel {
    pub header: HeaderInfo,

    /// Screen-specific content between header and footer.
    pub body: ScreenBody,

    pub footer: FooterInfo,
}

/// Header display information: plugin title and one tab per screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    pub title: String,
    pub tabs: Vec<TabInfo>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabInfo {
    /// Key that jumps to the screen.
    pub key: char,
    pub label: String,
    pub is_active: bool,
}

/// Footer display information (keybinding hints).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    pub keybindings: String,
}

/// Everything a screen contributes to the frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScreenBody {
    pub inputs: Vec<InputBarInfo>,

    /// One line of extra controls (for example the alpha weight).
    pub status_line: Option<String>,

    pub banners: Vec<Banner>,

    pub details: Option<DetailsPanel>,

    pub table: Option<TableView>,

    /// Shown in place of the table when there is nothing to list.
    pub empty_state: Option<EmptyState>,
}

/// A labelled single-line text input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputBarInfo {
    pub label: String,
    pub value: String,
    /// Whether keystrokes currently go into this input.
    pub is_editing: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    /// Request in flight.
    Info,
    Success,
    Error,
}

/// One-line status message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub kind: BannerKind,
    pub message: String,
}

impl Banner {
    pub fn info(message: impl Into<String>) -> Self {
        Self { kind: BannerKind::Info, message: message.into() }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self { kind: BannerKind::Success, message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { kind: BannerKind::Error, message: message.into() }
    }
}

/// Key/value panel with optional bullet notes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailsPanel {
    pub title: String,
    pub fields: Vec<(String, String)>,
    pub notes: Vec<String>,
}

impl DetailsPanel {
    /// Rows the panel occupies on screen.
    #[must_use]
    pub fn height(&self) -> usize {
        let notes = if self.notes.is_empty() { 0 } else { self.notes.len() + 1 };
        1 + self.fields.len() + notes
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnWidth {
    Fixed(usize),
    /// Takes whatever width the fixed columns leave.
    Fill,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub title: &'static str,
    pub width: ColumnWidth,
    pub align: Align,
}

impl Column {
    #[must_use]
    pub const fn left(title: &'static str, width: ColumnWidth) -> Self {
        Self { title, width, align: Align::Left }
    }

    #[must_use]
    pub const fn right(title: &'static str, width: ColumnWidth) -> Self {
        Self { title, width, align: Align::Right }
    }
}

/// One table row; `cells` lines up with the table's columns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableRow {
    pub cells: Vec<String>,
    pub is_selected: bool,
    /// Column index and character ranges to highlight in that cell.
    pub highlight: Option<(usize, Vec<(usize, usize)>)>,
}

/// A titled table with an optional emphasised total row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView {
    pub title: String,
    pub columns: Vec<Column>,
    pub rows: Vec<TableRow>,
    pub total: Option<TableRow>,
}

/// Message shown when a screen has nothing to list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    pub message: String,
    pub subtitle: String,
}

/// Rows used by everything except table rows: the leading blank line,
/// header, two borders and the footer.
const FRAME_ROWS: usize = 5;

impl UIViewModel {
    /// Rows taken by everything except the table's data rows.
    #[must_use]
    pub fn chrome_rows(&self) -> usize {
        let body = &self.body;
        let table = body.table.as_ref().map_or(0, |table| {
            // title + column headers + optional total row
            2 + usize::from(table.total.is_some())
        });
        FRAME_ROWS
            + body.inputs.len() * 3
            + usize::from(body.status_line.is_some())
            + body.banners.len()
            + body.details.as_ref().map_or(0, DetailsPanel::height)
            + table
    }

    /// Trims the table rows to the terminal height, keeping the selected row
    /// in view.
    pub fn fit_to_height(&mut self, rows: usize) {
        let available = rows.saturating_sub(self.chrome_rows());
        if let Some(table) = self.body.table.as_mut() {
            let selected = table.rows.iter().position(|row| row.is_selected).unwrap_or(0);
            let window = visible_window(selected, table.rows.len(), available);
            table.rows.truncate(window.end);
            table.rows.drain(..window.start);
        }
    }
}

/// Window of `available` items centred on `selected`, shifted to stay
/// within `0..total`.
#[must_use]
pub fn visible_window(selected: usize, total: usize, available: usize) -> Range<usize> {
    let mut start = selected.saturating_sub(available / 2);
    let end = (start + available).min(total);

    if end.saturating_sub(start) < available && total >= available {
        start = end.saturating_sub(available);
    }

    start..end
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(count: usize, selected: usize) -> Vec<TableRow> {
        (0..count)
            .map(|i| TableRow {
                cells: vec![i.to_string()],
                is_selected: i == selected,
                highlight: None,
            })
            .collect()
    }

    fn viewmodel(table_rows: Vec<TableRow>) -> UIViewModel {
        UIViewModel {
            header: HeaderInfo { title: "Storefront".into(), tabs: vec![] },
            body: ScreenBody {
                table: Some(TableView {
                    title: "Results".into(),
                    columns: vec![Column::left("SKU", ColumnWidth::Fill)],
                    rows: table_rows,
                    total: None,
                }),
                ..ScreenBody::default()
            },
            footer: FooterInfo { keybindings: String::new() },
        }
    }

    #[test]
    fn window_centres_on_selection() {
        assert_eq!(visible_window(0, 100, 10), 0..10);
        assert_eq!(visible_window(50, 100, 10), 45..55);
        assert_eq!(visible_window(99, 100, 10), 90..100);
        assert_eq!(visible_window(2, 3, 10), 0..3);
    }

    #[test]
    fn fit_keeps_selected_row_visible() {
        let mut vm = viewmodel(rows(40, 30));
        let chrome = vm.chrome_rows();
        vm.fit_to_height(chrome + 6);

        let table = vm.body.table.unwrap();
        assert_eq!(table.rows.len(), 6);
        assert!(table.rows.iter().any(|row| row.is_selected));
    }

    #[test]
    fn details_panel_height_counts_notes_heading() {
        let panel = DetailsPanel {
            title: "Quote".into(),
            fields: vec![("A".into(), "1".into()), ("B".into(), "2".into())],
            notes: vec!["note".into()],
        };
        assert_eq!(panel.height(), 5);
    }
}

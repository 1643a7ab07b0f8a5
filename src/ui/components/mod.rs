//! Building blocks of the plugin frame.
//!
//! Each component prints at a given row and returns the next free row, so the
//! screen layout is a simple top-to-bottom sequence.

mod empty;
mod footer;
mod header;
mod input;
mod panel;
mod table;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

use empty::render_empty_state;
use footer::render_footer;
use header::render_header;
use input::render_input;
use panel::{render_banners, render_details, render_status_line};
use table::render_table;

/// Renders a horizontal border line at `row`.
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders a full frame.
///
/// Layout structure:
/// ```text
/// [blank line]
/// [Header + tabs]
/// [Border]
/// [Input boxes, 3 lines each]
/// [Status line]
/// [Banners]
/// [Details panel]
/// [Table or empty state]
/// [Blank padding to fill screen]
/// [Border]
/// [Footer]
/// ```
pub fn render_frame(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let body = &vm.body;
    let mut current_row = 2;

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);

    for input in &body.inputs {
        current_row = render_input(current_row, input, theme, cols);
    }
    if let Some(status) = &body.status_line {
        current_row = render_status_line(current_row, status, theme, cols);
    }
    current_row = render_banners(current_row, &body.banners, theme, cols);
    if let Some(details) = &body.details {
        current_row = render_details(current_row, details, theme, cols);
    }
    if let Some(table) = &body.table {
        current_row = render_table(current_row, table, theme, cols);
    }
    if let Some(empty) = &body.empty_state {
        render_empty_state(current_row + 1, empty, theme, cols);
    }

    let footer_start = rows.saturating_sub(1);
    let border_row = footer_start.saturating_sub(1);

    render_border(border_row, &theme.colors.border, cols);
    render_footer(footer_start, &vm.footer, theme, cols);
}

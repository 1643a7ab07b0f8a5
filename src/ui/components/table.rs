use crate::ui::helpers::{self, display_len, fit_cell, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{Align, Column, ColumnWidth, TableRow, TableView};

/// Spaces between adjacent columns.
const COLUMN_GAP: usize = 1;

/// Narrowest a fill column is allowed to become.
const MIN_FILL_WIDTH: usize = 4;

/// Resolves column widths for a terminal `cols` wide.
///
/// Fixed columns keep their width; fill columns share what remains after
/// fixed columns, gaps and the one-space left margin.
#[must_use]
pub fn column_widths(columns: &[Column], cols: usize) -> Vec<usize> {
    let fixed: usize = columns
        .iter()
        .map(|column| match column.width {
            ColumnWidth::Fixed(width) => width,
            ColumnWidth::Fill => 0,
        })
        .sum();
    let gaps = columns.len().saturating_sub(1) * COLUMN_GAP + 1;
    let fill_count = columns
        .iter()
        .filter(|column| column.width == ColumnWidth::Fill)
        .count()
        .max(1);
    let fill_width = (cols.saturating_sub(fixed + gaps) / fill_count).max(MIN_FILL_WIDTH);

    columns
        .iter()
        .map(|column| match column.width {
            ColumnWidth::Fixed(width) => width,
            ColumnWidth::Fill => fill_width,
        })
        .collect()
}

/// Renders the table title, column headers, rows and total row.
///
/// Returns the next available row position.
///
/// # Styling Precedence
///
/// 1. Selection background (if `is_selected`)
/// 2. Query match highlights (unless selected)
/// 3. Normal text color
pub fn render_table(row: usize, table: &TableView, theme: &Theme, cols: usize) -> usize {
    let widths = column_widths(&table.columns, cols);
    let mut current_row = row;

    position_cursor(current_row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.text_normal));
    print!("{}", helpers::truncate(&format!(" {}", table.title), cols));
    print!("{}", Theme::reset());
    current_row += 1;

    position_cursor(current_row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.text_dim));
    let headers: Vec<String> = table
        .columns
        .iter()
        .zip(&widths)
        .map(|(column, &width)| fit_cell(column.title, width, column.align))
        .collect();
    print!("{}", pad_line(&format!(" {}", headers.join(" ")), cols));
    print!("{}", Theme::reset());
    current_row += 1;

    for table_row in &table.rows {
        current_row = render_row(current_row, table_row, &table.columns, &widths, theme, cols, RowStyle::Body);
    }

    if let Some(total) = &table.total {
        current_row = render_row(current_row, total, &table.columns, &widths, theme, cols, RowStyle::Total);
    }

    current_row
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum RowStyle {
    Body,
    Total,
}

fn render_row(
    row: usize,
    table_row: &TableRow,
    columns: &[Column],
    widths: &[usize],
    theme: &Theme,
    cols: usize,
    style: RowStyle,
) -> usize {
    position_cursor(row, 1);

    let base_style = if table_row.is_selected {
        format!(
            "{}{}",
            Theme::fg(&theme.colors.selection_fg),
            Theme::bg(&theme.colors.selection_bg)
        )
    } else if style == RowStyle::Total {
        format!("{}{}", Theme::bold(), Theme::fg(&theme.colors.total_fg))
    } else {
        Theme::fg(&theme.colors.text_normal)
    };
    print!("{base_style}");
    print!(" ");

    let mut used = 1;
    for (index, ((column, &width), cell)) in columns.iter().zip(widths).zip(&table_row.cells).enumerate() {
        if index > 0 {
            print!("{}", " ".repeat(COLUMN_GAP));
            used += COLUMN_GAP;
        }

        let text = fit_cell(cell, width, column.align);
        match &table_row.highlight {
            Some((highlight_column, ranges)) if *highlight_column == index && column.align == Align::Left => {
                helpers::render_highlighted_text(&text, ranges, theme, table_row.is_selected);
                print!("{base_style}");
            }
            _ => print!("{text}"),
        }
        used += width;
    }

    print!("{}", " ".repeat(cols.saturating_sub(used)));
    print!("{}", Theme::reset());
    row + 1
}

fn pad_line(text: &str, cols: usize) -> String {
    let text = helpers::truncate(text, cols);
    let padding = cols.saturating_sub(display_len(&text));
    format!("{text}{}", " ".repeat(padding))
}

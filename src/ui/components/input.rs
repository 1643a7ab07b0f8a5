use crate::ui::helpers::{display_len, position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::InputBarInfo;

/// Horizontal margin for input boxes (spaces on left and right).
const INPUT_BOX_MARGIN: usize = 2;

/// Renders a 3-line bordered input box at `row`.
///
/// Returns the next available row position (row + 3).
///
/// # Layout
///
/// ```text
/// [margin] ┌──────────────────┐ [margin]
/// [margin] │ Search: drill▏   │ [margin]
/// [margin] └──────────────────┘ [margin]
/// ```
///
/// The box being edited uses `input_active_border` and shows a cursor after
/// the value. Long values keep their tail visible.
pub fn render_input(row: usize, input: &InputBarInfo, theme: &Theme, cols: usize) -> usize {
    let box_width = cols.saturating_sub(INPUT_BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);
    let border = if input.is_editing {
        &theme.colors.input_active_border
    } else {
        &theme.colors.input_border
    };

    position_cursor(row, 1);
    print!("{}", " ".repeat(INPUT_BOX_MARGIN));
    print!("{}", Theme::fg(border));
    print!("┌{}┐", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    let prefix = format!(" {}: ", input.label);
    let cursor = if input.is_editing { "▏" } else { "" };
    let room = inner_width.saturating_sub(display_len(&prefix) + display_len(cursor));
    let value = tail(&input.value, room);
    let text = truncate(&format!("{prefix}{value}{cursor}"), inner_width);
    let padding = inner_width.saturating_sub(display_len(&text));

    position_cursor(row + 1, 1);
    print!("{}", " ".repeat(INPUT_BOX_MARGIN));
    print!("{}", Theme::fg(border));
    print!("│");
    print!("{}", Theme::fg(&theme.colors.text_normal));
    print!("{text}");
    print!("{}", " ".repeat(padding));
    print!("{}", Theme::fg(border));
    print!("│");
    print!("{}", Theme::reset());

    position_cursor(row + 2, 1);
    print!("{}", " ".repeat(INPUT_BOX_MARGIN));
    print!("{}", Theme::fg(border));
    print!("└{}┘", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    row + 3
}

/// Last `width` characters of `text`.
fn tail(text: &str, width: usize) -> String {
    let len = display_len(text);
    text.chars().skip(len.saturating_sub(width)).collect()
}

//! Shared rendering helpers: cursor positioning, cell fitting and match
//! highlighting.

use crate::ui::theme::Theme;
use crate::ui::viewmodel::Align;

/// Positions the cursor at a 1-indexed row and column.
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Number of terminal cells `text` takes, counting one per `char`.
#[must_use]
pub fn display_len(text: &str) -> usize {
    text.chars().count()
}

/// Cuts `text` to `width` characters, ending with `…` when shortened.
#[must_use]
pub fn truncate(text: &str, width: usize) -> String {
    if display_len(text) <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut cut: String = text.chars().take(width - 1).collect();
    cut.push('…');
    cut
}

/// Truncates and pads `text` to exactly `width` characters.
#[must_use]
pub fn fit_cell(text: &str, width: usize, align: Align) -> String {
    let text = truncate(text, width);
    match align {
        Align::Left => format!("{text:<width$}"),
        Align::Right => format!("{text:>width$}"),
    }
}

/// Renders text with highlighted character ranges for query matches.
///
/// Ranges are `(start, end)` character indices with exclusive end; parts
/// beyond the text are ignored. Selected rows skip highlighting so the
/// selection colors stay intact.
pub fn render_highlighted_text(text: &str, ranges: &[(usize, usize)], theme: &Theme, is_selected: bool) {
    if ranges.is_empty() || is_selected {
        print!("{text}");
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        let start = start.clamp(current_pos, chars.len());
        let end = end.clamp(start, chars.len());

        let normal_section: String = chars[current_pos..start].iter().collect();
        print!("{normal_section}");

        print!("{}", Theme::fg(&theme.colors.match_highlight_fg));
        print!("{}", Theme::bg(&theme.colors.match_highlight_bg));
        let highlighted_section: String = chars[start..end].iter().collect();
        print!("{highlighted_section}");
        print!("{}", Theme::reset());
        print!("{}", Theme::fg(&theme.colors.text_normal));

        current_pos = end;
    }

    let remaining: String = chars[current_pos..].iter().collect();
    print!("{remaining}");
}

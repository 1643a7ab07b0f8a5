use crate::ui::helpers::{display_len, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the title and screen tabs on one line at `row`.
///
/// Returns the next available row position (row + 1).
///
/// # Layout
///
/// ```text
///  Storefront  [1 Search Products] 2 Create Quote  3 View Quote [padding]
/// ```
pub fn render_header(row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    if let Some(bg) = &theme.colors.header_bg {
        print!("{}", Theme::bg(bg));
    }
    print!("{}", header.title);
    print!("{}", Theme::reset());

    let mut used = display_len(&header.title);
    for tab in &header.tabs {
        let label = format!(" {} {} ", tab.key, tab.label);
        let label_len = display_len(&label);
        if used + label_len + 1 > cols {
            break;
        }

        print!(" ");
        if tab.is_active {
            print!("{}", Theme::bold());
            print!("{}", Theme::fg(&theme.colors.tab_active_fg));
            print!("{}", Theme::bg(&theme.colors.tab_active_bg));
        } else {
            print!("{}", Theme::fg(&theme.colors.text_dim));
        }
        print!("{label}");
        print!("{}", Theme::reset());
        used += label_len + 1;
    }

    print!("{}", " ".repeat(cols.saturating_sub(used)));
    row + 1
}

use crate::ui::helpers::{display_len, position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{Banner, BannerKind, DetailsPanel};

/// Width of the label column in details panels.
const LABEL_WIDTH: usize = 20;

/// Renders a dimmed one-line status at `row`.
pub fn render_status_line(row: usize, text: &str, theme: &Theme, cols: usize) -> usize {
    let text = truncate(&format!(" {text}"), cols);
    position_cursor(row, 1);
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{text}");
    print!("{}", " ".repeat(cols.saturating_sub(display_len(&text))));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders one banner per line, coloured by outcome.
pub fn render_banners(row: usize, banners: &[Banner], theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    for banner in banners {
        let (marker, color) = match banner.kind {
            BannerKind::Info => ("…", &theme.colors.info_fg),
            BannerKind::Success => ("✓", &theme.colors.success_fg),
            BannerKind::Error => ("✗", &theme.colors.error_fg),
        };
        let text = truncate(&format!(" {marker} {}", banner.message), cols);

        position_cursor(current_row, 1);
        print!("{}", Theme::bold());
        print!("{}", Theme::fg(color));
        print!("{text}");
        print!("{}", " ".repeat(cols.saturating_sub(display_len(&text))));
        print!("{}", Theme::reset());
        current_row += 1;
    }
    current_row
}

/// Renders a titled label/value list followed by bullet notes.
///
/// ```text
///  Quote CRQ-F6333605
///    Customer            WEB_USER
///    List Total          $26.50
///  Notes
///    • Prices valid for 7 days
/// ```
pub fn render_details(row: usize, panel: &DetailsPanel, theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;

    position_cursor(current_row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.info_fg));
    print!("{}", truncate(&format!(" {}", panel.title), cols));
    print!("{}", Theme::reset());
    current_row += 1;

    let value_width = cols.saturating_sub(LABEL_WIDTH + 3);
    for (label, value) in &panel.fields {
        position_cursor(current_row, 1);
        print!("{}", Theme::fg(&theme.colors.text_dim));
        print!("   {:<LABEL_WIDTH$}", truncate(label, LABEL_WIDTH));
        print!("{}", Theme::fg(&theme.colors.text_normal));
        print!("{}", truncate(value, value_width));
        print!("{}", Theme::reset());
        current_row += 1;
    }

    if !panel.notes.is_empty() {
        position_cursor(current_row, 1);
        print!("{}", Theme::bold());
        print!("{}", Theme::fg(&theme.colors.text_normal));
        print!(" Notes");
        print!("{}", Theme::reset());
        current_row += 1;

        for note in &panel.notes {
            position_cursor(current_row, 1);
            print!("{}", Theme::fg(&theme.colors.text_normal));
            print!("{}", truncate(&format!("   • {note}"), cols));
            print!("{}", Theme::reset());
            current_row += 1;
        }
    }

    current_row
}

//! Screen and input mode types for the application.
//!
//! # State Machine
//!
//! The storefront shows one of three screens:
//! - **Search**: query the catalogue and pick products
//! - **Quote**: edit the pending quote lines and submit them
//! - **View**: look up a previously created quote
//!
//! Independently, input is either in **Normal** mode (single-key commands) or
//! **Editing** one text [`Field`], where printable keys are typed into that field.
//!
//! # Example
//!
//! ```rust
//! use zstorefront::app::modes::{Field, InputMode, Screen};
//!
//! assert_eq!(Screen::Search.next(), Screen::Quote);
//! let mode = InputMode::Editing(Field::SearchQuery);
//! assert!(mode.is_editing());
//! ```

/// The three storefront screens, in navigation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// Product search with results table.
    #[default]
    Search,

    /// Quote editor over the pending quote lines.
    Quote,

    /// Viewer for an existing quote.
    View,
}

impl Screen {
    /// All screens in tab order.
    pub const ALL: [Self; 3] = [Self::Search, Self::Quote, Self::View];

    /// Tab label shown in the header.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Search => "Search Products",
            Self::Quote => "Create Quote",
            Self::View => "View Quote",
        }
    }

    /// The screen to the right, wrapping around.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Search => Self::Quote,
            Self::Quote => Self::View,
            Self::View => Self::Search,
        }
    }

    /// The screen to the left, wrapping around.
    #[must_use]
    pub const fn previous(self) -> Self {
        match self {
            Self::Search => Self::View,
            Self::Quote => Self::Search,
            Self::View => Self::Quote,
        }
    }
}

/// Text fields that can receive typed input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// Search query on the search screen.
    SearchQuery,

    /// SKU for a product details lookup on the search screen.
    Sku,

    /// Customer reference on the quote screen.
    CustomerRef,

    /// New quantity for the selected quote line.
    Quantity,

    /// Quote id on the view screen.
    QuoteId,
}

impl Field {
    /// The screen a field lives on.
    #[must_use]
    pub const fn screen(self) -> Screen {
        match self {
            Self::SearchQuery | Self::Sku => Screen::Search,
            Self::CustomerRef | Self::Quantity => Screen::Quote,
            Self::QuoteId => Screen::View,
        }
    }
}

/// Current input handling mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Single-key commands and navigation.
    #[default]
    Normal,

    /// Printable keys go into the given field; Enter commits, Esc leaves.
    Editing(Field),
}

impl InputMode {
    #[must_use]
    pub const fn is_editing(self) -> bool {
        matches!(self, Self::Editing(_))
    }

    /// The field being edited, if any.
    #[must_use]
    pub const fn field(self) -> Option<Field> {
        match self {
            Self::Editing(field) => Some(field),
            Self::Normal => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navigation_wraps_both_ways() {
        for screen in Screen::ALL {
            assert_eq!(screen.next().previous(), screen);
        }
        assert_eq!(Screen::View.next(), Screen::Search);
        assert_eq!(Screen::Search.previous(), Screen::View);
    }

    #[test]
    fn fields_belong_to_their_screen() {
        assert_eq!(Field::Sku.screen(), Screen::Search);
        assert_eq!(Field::Quantity.screen(), Screen::Quote);
        assert_eq!(Field::QuoteId.screen(), Screen::View);
    }
}

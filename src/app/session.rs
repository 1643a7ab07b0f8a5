//! Session state: the active screen plus the pending quote lines.
//!
//! A [`Session`] only changes through [`Session::transition`], a pure function
//! from the old session and a [`SessionAction`] to the new session. The handler
//! owns the session inside `AppState` and swaps in each transition's result.

use super::modes::Screen;
use crate::domain::{Product, QuoteLineCollection};

/// Screen plus the quote being assembled.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub screen: Screen,
    pub lines: QuoteLineCollection,
}

/// Everything that can change a [`Session`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionAction {
    /// Show another screen. Lines are kept.
    Navigate(Screen),

    /// Add one unit of a product and open the quote editor.
    SelectProduct(Product),

    /// Set a line's quantity; zero or less removes it.
    SetQuantity { sku: String, qty: i64 },

    RemoveLine(String),

    /// Drop every pending line (explicit discard or successful submit).
    ClearLines,
}

impl Session {
    /// Applies `action` and returns the resulting session.
    ///
    /// # Example
    ///
    /// ```rust
    /// use zstorefront::app::modes::Screen;
    /// use zstorefront::app::session::{Session, SessionAction};
    ///
    /// let session = Session::default().transition(SessionAction::Navigate(Screen::View));
    /// assert_eq!(session.screen, Screen::View);
    /// ```
    #[must_use]
    pub fn transition(self, action: SessionAction) -> Self {
        let Self { mut screen, mut lines } = self;

        match action {
            SessionAction::Navigate(target) => screen = target,
            SessionAction::SelectProduct(product) => {
                lines.add_or_increment(&product);
                screen = Screen::Quote;
            }
            SessionAction::SetQuantity { sku, qty } => lines.set_quantity(&sku, qty),
            SessionAction::RemoveLine(sku) => lines.remove(&sku),
            SessionAction::ClearLines => lines.clear(),
        }

        Self { screen, lines }
    }
}

//! Terminal UI: view models, themes and ANSI rendering.
//!
//! # Modules
//!
//! - [`viewmodel`]: Display-ready state computed from `AppState`
//! - [`renderer`]: Entry point printing a frame
//! - [`helpers`]: Cursor positioning, cell fitting and highlighting
//! - [`theme`]: Color schemes and escape sequences

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::render;
pub use theme::Theme;
pub use viewmodel::{
    Banner, BannerKind, DetailsPanel, EmptyState, FooterInfo, HeaderInfo, InputBarInfo,
    ScreenBody, TableRow, TableView, UIViewModel,
};

//! Per-screen state.
//!
//! Each screen keeps its own inputs and one [`RequestState`] per API call it
//! can trigger, so messages never leak from one screen to another.
//!
//! [`RequestState`]: crate::app::request_state::RequestState

pub mod quote_editor;
pub mod quote_viewer;
pub mod search;

pub use quote_editor::QuoteEditorState;
pub use quote_viewer::QuoteViewerState;
pub use search::SearchState;

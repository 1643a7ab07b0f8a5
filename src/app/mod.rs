//! Application layer coordinating state, events, and actions.
//!
//! This module sits between the plugin runtime (main.rs) and the domain and
//! API layers. It implements the event-driven architecture that powers the
//! interactive UI.
//!
//! # Architecture
//!
//! ```text
//! User Input → Events → Event Handler → State Mutations → Actions → Side Effects
//!                           ↑                                  ↓
//!                           └──────── API Responses ───────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`modes`]: Screen and input mode types
//! - [`request_state`]: Lifecycle of one outstanding API call
//! - [`screens`]: Search, quote editor and quote viewer state
//! - [`session`]: Active screen plus pending quote lines, with pure transitions
//! - [`state`]: Central application state container and view model computation

pub mod actions;
pub mod handler;
pub mod modes;
pub mod request_state;
pub mod screens;
pub mod session;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::{Field, InputMode, Screen};
pub use request_state::RequestState;
pub use session::{Session, SessionAction};
pub use state::AppState;

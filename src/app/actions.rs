//! Actions representing side effects to be executed by the plugin runtime.
//!
//! The event handler returns a `Vec<Action>` after processing each event. The
//! plugin shim executes them in order; everything else the handler does is a
//! plain state change.
//!
//! # Example
//!
//! ```rust
//! use zstorefront::api::ApiClient;
//! use zstorefront::app::Action;
//!
//! let client = ApiClient::new("http://localhost:8000")?;
//! let actions = vec![Action::SendRequest(client.get_quote("CRQ-1")?)];
//! # Ok::<(), zstorefront::domain::StorefrontError>(())
//! ```

use crate::api::ApiRequest;

/// Commands representing side effects to be executed by the plugin runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Closes the focused floating pane, hiding the plugin UI.
    ///
    /// Pending quote lines are discarded with the plugin instance.
    CloseFocus,

    /// Sends an HTTP request through the host.
    ///
    /// The host answers with a `WebRequestResult` event carrying the request's
    /// context, which the shim turns back into [`Event::ApiResponse`].
    ///
    /// [`Event::ApiResponse`]: crate::app::Event::ApiResponse
    SendRequest(ApiRequest),
}

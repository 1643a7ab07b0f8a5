//! Explicit lifecycle of one outstanding API call.

use crate::domain::error::StorefrontError;
use std::fmt::Display;

/// Lifecycle of a screen's API call.
///
/// Each screen owns one `RequestState` per operation it can trigger. While a
/// call is [`Pending`](Self::Pending) the triggering command is ignored, which
/// is the only duplicate-submission guard: there is no queue, cancellation or
/// timeout. Starting a new attempt drops the previous result or message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestState<T> {
    /// Nothing requested yet.
    Idle,

    /// A request is in flight.
    Pending,

    /// The last request succeeded with this payload.
    Succeeded(T),

    /// The last attempt failed with this user-facing message.
    Failed(String),
}

impl<T> Default for RequestState<T> {
    fn default() -> Self {
        Self::Idle
    }
}

impl<T> RequestState<T> {
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    /// The success payload, if the last request succeeded.
    #[must_use]
    pub const fn value(&self) -> Option<&T> {
        match self {
            Self::Succeeded(value) => Some(value),
            _ => None,
        }
    }

    /// The failure message, if the last attempt failed.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Records the outcome of the in-flight request.
    pub fn resolve<E: Display>(&mut self, result: Result<T, E>) {
        *self = match result {
            Ok(value) => Self::Succeeded(value),
            Err(e) => Self::Failed(e.to_string()),
        };
    }

    /// Starts a new attempt from a freshly built request.
    ///
    /// A built request moves the state to `Pending` and is handed back for
    /// sending; a build error becomes the failure message instead.
    pub fn begin<R, E: Display>(&mut self, request: Result<R, E>) -> Option<R> {
        match request {
            Ok(request) => {
                *self = Self::Pending;
                Some(request)
            }
            Err(e) => {
                *self = Self::Failed(e.to_string());
                None
            }
        }
    }

    /// Records a failure detected before any request was sent.
    pub fn reject(&mut self, message: impl Into<String>) {
        let error = StorefrontError::Validation(message.into());
        tracing::debug!(error = %error, "input rejected");
        *self = Self::Failed(error.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_records_terminal_state() {
        let mut state: RequestState<u32> = RequestState::Pending;
        assert!(state.is_pending());

        state.resolve::<String>(Ok(7));
        assert_eq!(state.value(), Some(&7));
        assert_eq!(state.error(), None);

        state.resolve(Err("Search failed"));
        assert_eq!(state, RequestState::Failed("Search failed".to_string()));
        assert_eq!(state.value(), None);
    }

    #[test]
    fn begin_hands_back_built_requests() {
        let mut state: RequestState<u32> = RequestState::Failed("old".into());
        assert_eq!(state.begin::<_, String>(Ok("GET /search")), Some("GET /search"));
        assert!(state.is_pending());

        assert_eq!(state.begin::<&str, _>(Err("Invalid API URL")), None);
        assert_eq!(state.error(), Some("Invalid API URL"));
    }

    #[test]
    fn reject_replaces_previous_result() {
        let mut state = RequestState::Succeeded(vec![1, 2]);
        state.reject("Please enter a search term");
        assert_eq!(state.error(), Some("Please enter a search term"));
    }
}

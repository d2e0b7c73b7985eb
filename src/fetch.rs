//! Fetch lifecycle: page state, cancellation, and scoped teardown.
//!
//! Every page in the dashboard follows the same pattern: issue one GET on
//! entry, hold a [`PageState`] that is always exactly one of loading, error,
//! or success, and cancel the in-flight request when the page is torn down.
//!
//! # Key Pieces
//!
//! - [`PageState`]: the three mutually exclusive render states, updated
//!   through a single transition function ([`PageState::resolve`])
//! - [`CancelToken`]: a cloneable handle marking a request no-longer-relevant;
//!   checked by the HTTP layer before the request is sent and again before
//!   the decoded result is handed back
//! - [`FetchScope`]: owns a token and cancels it on drop, so teardown cannot
//!   forget to cancel
//!
//! Cancellation is not an error from the page's point of view: a cancelled
//! fetch leaves the state exactly as it was.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tracing::debug;

use crate::error::CourtsideError;

/// Handle allowing an in-flight request to be marked no-longer-relevant.
///
/// Clones share the same flag, so the page can keep one end while the fetch
/// carries the other.
///
/// # Examples
///
/// ```rust
/// use courtside::fetch::CancelToken;
///
/// let token = CancelToken::new();
/// assert!(!token.is_cancelled());
/// token.cancel();
/// assert!(token.is_cancelled());
/// ```
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the request as no-longer-relevant. Idempotent.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    /// Error out early if the token has been cancelled.
    ///
    /// The HTTP layer calls this before sending and again before returning
    /// the decoded body, so a response that arrives after teardown surfaces
    /// as [`CourtsideError::Cancelled`] instead of data.
    pub fn ensure_live(&self) -> crate::Result<()> {
        if self.is_cancelled() {
            return Err(CourtsideError::Cancelled);
        }
        Ok(())
    }
}

/// Scoped owner of a [`CancelToken`]: cancels on drop.
///
/// The explicit replacement for "component unmount": tie the scope's
/// lifetime to the page visit and cancellation on teardown is guaranteed
/// rather than remembered.
#[derive(Debug, Default)]
pub struct FetchScope {
    token: CancelToken,
}

impl FetchScope {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn token(&self) -> &CancelToken {
        &self.token
    }
}

impl Drop for FetchScope {
    fn drop(&mut self) {
        self.token.cancel();
    }
}

/// The three mutually exclusive render states of a page.
#[derive(Debug, Clone, PartialEq)]
pub enum PageState<T> {
    /// Initial state, shown until the fetch settles.
    Loading,
    /// The fetch failed for a reason other than cancellation.
    Error(String),
    /// Data arrived; the page renders it.
    Success(T),
}

impl<T> PageState<T> {
    pub fn new() -> Self {
        PageState::Loading
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, PageState::Loading)
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            PageState::Error(msg) => Some(msg),
            _ => None,
        }
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            PageState::Success(data) => Some(data),
            _ => None,
        }
    }

    /// Apply a settled fetch result to the state.
    ///
    /// This is the page's single transition function:
    ///
    /// - `Ok(data)` → `Success`
    /// - cancellation → no transition at all (the page was torn down; its
    ///   state must not change underneath a new visit)
    /// - a non-2xx status → `Error(http_message)`, the page's fixed string
    /// - anything else (transport, decode) → `Error` with that failure's
    ///   own display string
    pub fn resolve(&mut self, result: crate::Result<T>, http_message: &str) {
        match result {
            Ok(data) => *self = PageState::Success(data),
            Err(err) if err.is_cancelled() => {
                debug!("fetch cancelled; leaving page state untouched");
            }
            Err(err) if err.status().is_some() => {
                *self = PageState::Error(http_message.to_string());
            }
            Err(err) => *self = PageState::Error(err.to_string()),
        }
    }
}

impl<T> Default for PageState<T> {
    fn default() -> Self {
        PageState::Loading
    }
}

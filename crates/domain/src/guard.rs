//! Route guard decision function.
//!
//! A pure function from session state and target location to an
//! admit-or-redirect decision. It holds no state and caches nothing:
//! callers re-evaluate it on every session change and on every
//! navigation attempt.

use crate::session::Session;

/// Path of the login view, the target of every redirect decision.
pub const LOGIN_PATH: &str = "/login";

/// Outcome of evaluating a navigation attempt against the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteDecision {
    /// The caller may proceed to the requested location.
    Admit,
    /// The caller must be sent to the login view.
    RedirectToLogin {
        /// The originally requested path, so the caller can be
        /// returned there after a successful login.
        return_to: String,
    },
}

impl RouteDecision {
    /// Returns true if navigation was admitted.
    #[must_use]
    pub const fn is_admitted(&self) -> bool {
        matches!(self, Self::Admit)
    }
}

/// Decides whether the session may navigate to `target`.
///
/// Admits iff [`Session::is_authenticated`] is true at evaluation time;
/// the token alone is never consulted.
#[must_use]
pub fn evaluate(session: &Session, target: &str) -> RouteDecision {
    if session.is_authenticated() {
        RouteDecision::Admit
    } else {
        RouteDecision::RedirectToLogin {
            return_to: target.to_string(),
        }
    }
}

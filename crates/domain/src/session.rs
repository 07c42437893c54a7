//! Session state for the authentication core.
//!
//! This module defines the process-wide session record: who is logged
//! in, the bearer token proving it, and the loading/error status of the
//! most recent authentication operation.

use serde::{Deserialize, Serialize};

use crate::user::User;

/// The process-wide record of current authentication status.
///
/// Exactly one session exists per process, held by the session store
/// and mutated only by the session controller. Views read snapshots and
/// subscribe to changes; the route guard consults
/// [`Session::is_authenticated`] and nothing else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Session {
    /// The authenticated user, if one is loaded.
    pub user: Option<User>,
    /// The bearer token, if one is held.
    pub token: Option<String>,
    /// Whether an authentication operation is in flight.
    pub is_loading: bool,
    /// Human-readable message from the last failed operation.
    pub error: Option<String>,
}

impl Session {
    /// Creates an empty, unauthenticated session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// True iff both token and user are present.
    ///
    /// A token alone (e.g. restored from storage but not yet verified
    /// against the server) does not authenticate the session.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.token.is_some() && self.user.is_some()
    }

    /// Marks an operation as started: loading set, previous error gone.
    pub fn begin_loading(&mut self) {
        self.is_loading = true;
        self.error = None;
    }

    /// Commits a successful authentication: token and user together.
    pub fn authenticate(&mut self, token: String, user: User) {
        self.token = Some(token);
        self.user = Some(user);
        self.is_loading = false;
        self.error = None;
    }

    /// Records a failed operation, leaving token and user untouched.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.is_loading = false;
        self.error = Some(message.into());
    }

    /// Resets the session to the unauthenticated state.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

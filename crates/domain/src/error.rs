//! Session error taxonomy

use thiserror::Error;

/// Errors surfaced by authentication operations.
///
/// Every variant collapses to a human-readable message via `Display`;
/// that message is what gets written to [`crate::Session::error`]. The
/// distinct variants exist so diagnostic logging can retain the kind
/// while the UI reacts identically (redirect to login) regardless of
/// which kind occurred.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Input rejected before any network call (e.g. empty fields).
    #[error("{0}")]
    Validation(String),

    /// The server rejected the supplied credentials.
    #[error("{0}")]
    InvalidCredentials(String),

    /// The server answered with a non-success, non-401 status.
    #[error("{message}")]
    ServerError {
        /// HTTP status code returned by the server.
        status: u16,
        /// Message extracted from the response body, or a fallback.
        message: String,
    },

    /// No response could be obtained (connectivity, DNS, timeout).
    #[error("Network error: {0}")]
    Network(String),

    /// A 401 on an authenticated call; the session is no longer valid.
    #[error("Session expired")]
    SessionExpired,
}

impl AuthError {
    /// Stable label for diagnostic logging.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Validation(_) => "validation",
            Self::InvalidCredentials(_) => "invalid_credentials",
            Self::ServerError { .. } => "server_error",
            Self::Network(_) => "network",
            Self::SessionExpired => "session_expired",
        }
    }

    /// Returns true if this error invalidates the current session.
    #[must_use]
    pub const fn is_session_expired(&self) -> bool {
        matches!(self, Self::SessionExpired)
    }
}

/// Result type alias for authentication operations.
pub type AuthResult<T> = Result<T, AuthError>;

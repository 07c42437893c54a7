//! Transport-level errors.

use thiserror::Error;

/// Errors produced by the [`super::ApiClient`] pipeline.
///
/// These classify what the wire did; the per-operation translation
/// into the session-facing [`gatehouse_domain::AuthError`] taxonomy
/// happens in the adapters built on top of the client.
#[derive(Debug, Error)]
pub enum HttpError {
    /// The server answered 401. The de-authentication side effect has
    /// already run by the time this error reaches the caller.
    #[error("{message}")]
    Unauthorized {
        /// Message extracted from the response body, or a fallback.
        message: String,
    },

    /// The server answered a non-success, non-401 status.
    #[error("{message}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Message extracted from the response body, or a fallback.
        message: String,
    },

    /// The request exceeded the timeout budget.
    #[error("request timed out")]
    Timeout,

    /// No response could be obtained (connectivity, DNS).
    #[error("{0}")]
    Network(String),

    /// The endpoint URL could not be constructed.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// The response body was not the expected JSON shape.
    #[error("failed to decode response: {0}")]
    Decode(String),
}

impl HttpError {
    /// Maps a reqwest send failure to the transport taxonomy.
    pub(crate) fn from_send(error: &reqwest::Error) -> Self {
        if error.is_timeout() {
            return Self::Timeout;
        }
        Self::Network(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_carries_the_server_message() {
        let err = HttpError::Unauthorized {
            message: "Invalid credentials".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid credentials");

        let err = HttpError::Status {
            status: 500,
            message: "Internal Server Error".to_string(),
        };
        assert_eq!(err.to_string(), "Internal Server Error");
    }
}

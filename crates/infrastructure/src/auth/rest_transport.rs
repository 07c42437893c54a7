//! REST implementation of the `AuthTransport` port.
//!
//! Talks to the five authentication endpoints through the shared
//! [`ApiClient`] pipeline and translates transport failures into the
//! session-facing error taxonomy, per operation: a 401 on login or
//! register means the credentials were rejected, a 401 anywhere else
//! means the session is no longer valid.

use std::sync::Arc;

use async_trait::async_trait;
use gatehouse_application::ports::{AuthSuccess, AuthTransport};
use gatehouse_domain::{AuthError, AuthResult, Credentials, Registration, User};
use serde::Deserialize;

use crate::http::{ApiClient, HttpError};

/// `{token, user}` grant returned by login and register.
#[derive(Debug, Deserialize)]
struct TokenGrant {
    token: String,
    user: User,
}

/// `{user}` envelope returned by the current-user endpoint.
#[derive(Debug, Deserialize)]
struct CurrentUser {
    user: User,
}

/// `{token}` envelope returned by the refresh endpoint.
#[derive(Debug, Deserialize)]
struct RefreshedToken {
    token: String,
}

/// Credential transport over the REST API.
pub struct RestAuthTransport {
    client: Arc<ApiClient>,
}

impl RestAuthTransport {
    /// Creates a transport sharing the application-wide [`ApiClient`].
    #[must_use]
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// Error translation for the unauthenticated credential exchanges
    /// (login, register): a 4xx means the credentials were rejected.
    fn credential_error(err: &HttpError) -> AuthError {
        match err {
            HttpError::Unauthorized { message } => AuthError::InvalidCredentials(message.clone()),
            HttpError::Status { status, message } if (400..500).contains(status) => {
                AuthError::InvalidCredentials(message.clone())
            }
            HttpError::Status { status, message } => AuthError::ServerError {
                status: *status,
                message: message.clone(),
            },
            HttpError::Timeout
            | HttpError::Network(_)
            | HttpError::InvalidUrl(_)
            | HttpError::Decode(_) => AuthError::Network(err.to_string()),
        }
    }

    /// Error translation for token-authenticated calls: a 401 means
    /// the session expired (the client already ran the de-auth side
    /// effect).
    fn session_error(err: &HttpError) -> AuthError {
        match err {
            HttpError::Unauthorized { .. } => AuthError::SessionExpired,
            HttpError::Status { status, message } => AuthError::ServerError {
                status: *status,
                message: message.clone(),
            },
            HttpError::Timeout
            | HttpError::Network(_)
            | HttpError::InvalidUrl(_)
            | HttpError::Decode(_) => AuthError::Network(err.to_string()),
        }
    }
}

#[async_trait]
impl AuthTransport for RestAuthTransport {
    async fn login(&self, credentials: &Credentials) -> AuthResult<AuthSuccess> {
        let grant: TokenGrant = self
            .client
            .post_json("/auth/login", credentials)
            .await
            .map_err(|e| Self::credential_error(&e))?;
        Ok(AuthSuccess {
            token: grant.token,
            user: grant.user,
        })
    }

    async fn register(&self, registration: &Registration) -> AuthResult<AuthSuccess> {
        let grant: TokenGrant = self
            .client
            .post_json("/auth/register", registration)
            .await
            .map_err(|e| Self::credential_error(&e))?;
        Ok(AuthSuccess {
            token: grant.token,
            user: grant.user,
        })
    }

    async fn current_user(&self) -> AuthResult<User> {
        let current: CurrentUser = self
            .client
            .get_json("/auth/me")
            .await
            .map_err(|e| Self::session_error(&e))?;
        Ok(current.user)
    }

    async fn refresh(&self) -> AuthResult<String> {
        let refreshed: RefreshedToken = self
            .client
            .post_for_json("/auth/refresh")
            .await
            .map_err(|e| Self::session_error(&e))?;
        Ok(refreshed.token)
    }

    async fn logout(&self) -> AuthResult<()> {
        self.client
            .post_for_status("/auth/logout")
            .await
            .map_err(|e| Self::session_error(&e))
    }
}

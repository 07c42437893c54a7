//! Credential transport port

use async_trait::async_trait;
use gatehouse_domain::{AuthResult, Credentials, Registration, User};

/// A successful token grant: token and user arrive together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthSuccess {
    /// The bearer token to persist and attach to subsequent calls.
    pub token: String,
    /// The user the token belongs to.
    pub user: User,
}

/// Port for the five authentication network operations.
///
/// Implementations perform the actual HTTP calls and translate
/// transport failures into the [`gatehouse_domain::AuthError`]
/// taxonomy. They never swallow errors: the 401 de-authentication side
/// effect happens inside the transport, but the failure is still
/// returned to the caller.
#[async_trait]
pub trait AuthTransport: Send + Sync {
    /// Exchanges credentials for a token and user.
    ///
    /// # Errors
    ///
    /// `InvalidCredentials` when the server rejects the credentials,
    /// `ServerError` for other failure statuses, `Network` when no
    /// response could be obtained.
    async fn login(&self, credentials: &Credentials) -> AuthResult<AuthSuccess>;

    /// Creates an account and returns its first token grant.
    ///
    /// # Errors
    ///
    /// Same taxonomy as [`AuthTransport::login`].
    async fn register(&self, registration: &Registration) -> AuthResult<AuthSuccess>;

    /// Fetches the user the stored token belongs to.
    ///
    /// # Errors
    ///
    /// `SessionExpired` when the token is invalid or expired.
    async fn current_user(&self) -> AuthResult<User>;

    /// Exchanges the stored token for a fresh one.
    ///
    /// # Errors
    ///
    /// `SessionExpired` when the token can no longer be refreshed.
    async fn refresh(&self) -> AuthResult<String>;

    /// Invalidates the session server-side.
    ///
    /// # Errors
    ///
    /// Failures are reported but callers treat them as advisory; local
    /// de-authentication proceeds regardless.
    async fn logout(&self) -> AuthResult<()>;
}

//! Session controller: the state machine over [`Session`].
//!
//! The controller is the single writer of the session store and the
//! durable token storage. It drives the credential transport and
//! translates transport failures into session state; it never leaves
//! the session half-authenticated (token and user are set together or
//! not at all).

use std::sync::{Arc, Mutex, PoisonError};

use gatehouse_domain::{AuthResult, Credentials, Registration, Session, User};
use tracing::{debug, warn};

use crate::ports::{AuthSuccess, AuthTransport, TokenStorage};
use crate::session_store::SessionStore;

/// Orchestrates login, logout, and rehydration against the credential
/// transport, updating the session store as each operation settles.
///
/// Concurrent login attempts are not coalesced: a second call while one
/// is in flight starts its own request, and the session reflects
/// whichever response resolves last. Callers avoid the race by
/// disabling the action while `Session::is_loading` is true.
pub struct SessionController<T, S> {
    transport: T,
    storage: S,
    store: Arc<SessionStore>,
    /// Token value already rehydrated, so repeated state observation
    /// cannot trigger duplicate `current_user` calls for it.
    rehydrated: Mutex<Option<String>>,
}

impl<T: AuthTransport, S: TokenStorage> SessionController<T, S> {
    /// Creates a controller writing to `store`.
    pub fn new(transport: T, storage: S, store: Arc<SessionStore>) -> Self {
        Self {
            transport,
            storage,
            store,
            rehydrated: Mutex::new(None),
        }
    }

    /// The store this controller writes to.
    #[must_use]
    pub const fn store(&self) -> &Arc<SessionStore> {
        &self.store
    }

    /// Attempts a login with the supplied credentials.
    ///
    /// Empty fields are rejected before any network call. On success
    /// the token is persisted and the session holds token and user; on
    /// failure the session carries the error message and stays
    /// unauthenticated.
    ///
    /// # Errors
    ///
    /// Returns the [`gatehouse_domain::AuthError`] that was also
    /// written to `Session::error`, so the caller can notify.
    pub async fn login(&self, credentials: &Credentials) -> AuthResult<User> {
        if let Err(err) = credentials.validate() {
            self.store.update(|s| s.fail(err.to_string()));
            return Err(err);
        }
        self.store.update(Session::begin_loading);
        debug!(email = %credentials.email, "login attempt");
        let result = self.transport.login(credentials).await;
        self.settle_grant(result).await
    }

    /// Creates an account and logs it in.
    ///
    /// # Errors
    ///
    /// Same contract as [`SessionController::login`].
    pub async fn register(&self, registration: &Registration) -> AuthResult<User> {
        if let Err(err) = registration.validate() {
            self.store.update(|s| s.fail(err.to_string()));
            return Err(err);
        }
        self.store.update(Session::begin_loading);
        debug!(email = %registration.email, "registration attempt");
        let result = self.transport.register(registration).await;
        self.settle_grant(result).await
    }

    /// Reconstructs user identity from a persisted token.
    ///
    /// Runs only when a durable token exists, no user is loaded, no
    /// load is in flight, and the token has not already been
    /// rehydrated; otherwise it returns `Ok(None)` without touching
    /// the network. On failure (e.g. an expired token) both the
    /// session and the durable storage end cleared.
    ///
    /// # Errors
    ///
    /// Propagates the transport failure after de-authenticating.
    pub async fn rehydrate(&self) -> AuthResult<Option<User>> {
        let session = self.store.get();
        if session.user.is_some() || session.is_loading {
            return Ok(None);
        }

        let token = match self.storage.load().await {
            Ok(Some(token)) => token,
            Ok(None) => return Ok(None),
            Err(err) => {
                warn!(error = %err, "token storage unreadable, treating as logged out");
                return Ok(None);
            }
        };

        {
            let mut rehydrated = self
                .rehydrated
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            if rehydrated.as_deref() == Some(token.as_str()) {
                return Ok(None);
            }
            *rehydrated = Some(token.clone());
        }

        self.store.update(|s| {
            s.token = Some(token);
            s.begin_loading();
        });

        match self.transport.current_user().await {
            Ok(user) => {
                debug!(user = %user.email, "session rehydrated");
                self.store.update(|s| {
                    s.user = Some(user.clone());
                    s.is_loading = false;
                });
                Ok(Some(user))
            }
            Err(err) => {
                warn!(kind = err.kind(), "rehydration failed, clearing session");
                self.clear_storage().await;
                self.store.update(Session::clear);
                Err(err)
            }
        }
    }

    /// Exchanges the stored token for a fresh one, keeping session and
    /// durable storage consistent within the same operation.
    ///
    /// # Errors
    ///
    /// Propagates the transport failure; a 401 has already triggered
    /// the transport's global de-authentication side effect.
    pub async fn refresh(&self) -> AuthResult<()> {
        let token = self.transport.refresh().await?;
        self.persist_token(&token).await;
        self.store.update(|s| s.token = Some(token));
        Ok(())
    }

    /// Logs out: best-effort server call, then clears token, user, and
    /// durable storage.
    ///
    /// Idempotent: when already logged out this performs no network
    /// call and leaves the session unauthenticated.
    pub async fn logout(&self) {
        if self.store.get().token.is_some() {
            if let Err(err) = self.transport.logout().await {
                warn!(kind = err.kind(), "server logout failed, clearing locally");
            }
        }
        self.clear_storage().await;
        self.store.update(Session::clear);
        *self
            .rehydrated
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = None;
    }

    /// Clears the last error message, e.g. when the login view mounts.
    pub fn clear_error(&self) {
        self.store.update(|s| s.error = None);
    }

    /// Commits a settled token grant to storage and store.
    async fn settle_grant(&self, result: AuthResult<AuthSuccess>) -> AuthResult<User> {
        match result {
            Ok(AuthSuccess { token, user }) => {
                self.persist_token(&token).await;
                self.store
                    .update(|s| s.authenticate(token, user.clone()));
                Ok(user)
            }
            Err(err) => {
                debug!(kind = err.kind(), "authentication failed");
                self.store.update(|s| s.fail(err.to_string()));
                Err(err)
            }
        }
    }

    async fn persist_token(&self, token: &str) {
        if let Err(err) = self.storage.store(token).await {
            warn!(error = %err, "failed to persist token");
        }
    }

    async fn clear_storage(&self) {
        if let Err(err) = self.storage.clear().await {
            warn!(error = %err, "failed to clear token storage");
        }
    }
}

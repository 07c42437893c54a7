//! User identity and credential types

use serde::{Deserialize, Serialize};

use crate::error::{AuthError, AuthResult};

/// A user record as returned by the server.
///
/// The core does not interpret these fields beyond existence; they are
/// carried for display by the views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Server-assigned identifier.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Account email address.
    pub email: String,
}

/// Login credentials.
///
/// Transient: held only for the duration of a login attempt, never
/// persisted. `Debug` redacts the password.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    /// Account email address.
    pub email: String,
    /// Plaintext password, sent only over the login call.
    pub password: String,
}

impl Credentials {
    /// Creates credentials from the login form fields.
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Rejects empty fields before any network call is made.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Validation`] if either field is empty.
    pub fn validate(&self) -> AuthResult<()> {
        if self.email.trim().is_empty() || self.password.is_empty() {
            return Err(AuthError::Validation(
                "Please fill in all fields".to_string(),
            ));
        }
        Ok(())
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Registration form fields.
///
/// Same transience rules as [`Credentials`].
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Registration {
    /// Display name for the new account.
    pub name: String,
    /// Account email address.
    pub email: String,
    /// Plaintext password, sent only over the register call.
    pub password: String,
}

impl Registration {
    /// Creates a registration from the sign-up form fields.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
        }
    }

    /// Rejects empty fields before any network call is made.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Validation`] if any field is empty.
    pub fn validate(&self) -> AuthResult<()> {
        if self.name.trim().is_empty()
            || self.email.trim().is_empty()
            || self.password.is_empty()
        {
            return Err(AuthError::Validation(
                "Please fill in all fields".to_string(),
            ));
        }
        Ok(())
    }
}

impl std::fmt::Debug for Registration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registration")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

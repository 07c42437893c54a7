//! Durable token storage port

use async_trait::async_trait;
use thiserror::Error;

/// Errors from the durable token store.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The underlying storage could not be read or written.
    #[error("token storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// No storage location is available on this platform.
    #[error("no token storage location available")]
    NoLocation,
}

/// Port for the single durable key holding the raw token string.
///
/// Absence of a stored token means logged out at process start. The
/// session controller is the only writer; the credential transport
/// reads it before every outbound request and clears it on 401.
#[async_trait]
pub trait TokenStorage: Send + Sync {
    /// Reads the stored token, or `None` if absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage exists but cannot be read.
    async fn load(&self) -> Result<Option<String>, StorageError>;

    /// Persists the token, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the token cannot be written.
    async fn store(&self, token: &str) -> Result<(), StorageError>;

    /// Removes the stored token. Clearing an absent token is a no-op.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage cannot be removed.
    async fn clear(&self) -> Result<(), StorageError>;
}

// The controller and the transport share one storage instance.
#[async_trait]
impl<T: TokenStorage + ?Sized> TokenStorage for std::sync::Arc<T> {
    async fn load(&self) -> Result<Option<String>, StorageError> {
        (**self).load().await
    }

    async fn store(&self, token: &str) -> Result<(), StorageError> {
        (**self).store(token).await
    }

    async fn clear(&self) -> Result<(), StorageError> {
        (**self).clear().await
    }
}

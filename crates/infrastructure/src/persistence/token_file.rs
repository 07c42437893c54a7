//! File-backed token storage.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use gatehouse_application::ports::{StorageError, TokenStorage};
use tokio::fs;

/// `TokenStorage` backed by a single file holding the raw token.
///
/// An absent file means logged out. The default location lives under
/// the platform config directory; tests inject a temporary path.
#[derive(Debug, Clone)]
pub struct FileTokenStorage {
    path: PathBuf,
}

impl FileTokenStorage {
    /// Creates a store reading and writing the given file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Creates a store at the platform default location,
    /// `<config_dir>/gatehouse/token`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::NoLocation`] when the platform exposes
    /// no config directory.
    pub fn default_location() -> Result<Self, StorageError> {
        let base = dirs::config_dir().ok_or(StorageError::NoLocation)?;
        Ok(Self::new(base.join("gatehouse").join("token")))
    }

    /// The file this store reads and writes.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl TokenStorage for FileTokenStorage {
    async fn load(&self) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(&self.path).await {
            Ok(contents) => {
                let token = contents.trim();
                if token.is_empty() {
                    Ok(None)
                } else {
                    Ok(Some(token.to_string()))
                }
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::Io(e)),
        }
    }

    async fn store(&self, token: &str) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await?;
        }
        fs::write(&self.path, token).await?;
        Ok(())
    }

    async fn clear(&self) -> Result<(), StorageError> {
        match fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::Io(e)),
        }
    }
}

//! Identity persistence seam.
//!
//! The session manager persists the signed identity envelope through the
//! [`IdentityStore`] trait: one string value in one slot, where absence
//! means logged out. [`MemoryStore`] backs tests and ephemeral sessions;
//! [`FileStore`] keeps the envelope on disk across restarts.

use std::io::ErrorKind;
use std::path::PathBuf;

use thiserror::Error;

/// Errors from the persistence collaborator.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Underlying I/O failure.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Durable single-slot storage for the serialized identity.
pub trait IdentityStore {
    /// Read the stored value, if any.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the backing storage cannot be read.
    fn load(&self) -> Result<Option<String>, StorageError>;

    /// Replace the stored value.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the backing storage cannot be written.
    fn save(&mut self, value: &str) -> Result<(), StorageError>;

    /// Remove the stored value.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the backing storage cannot be written.
    fn clear(&mut self) -> Result<(), StorageError>;
}

/// In-memory store: lives exactly as long as the owning context.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    value: Option<String>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub const fn new() -> Self {
        Self { value: None }
    }
}

impl IdentityStore for MemoryStore {
    fn load(&self) -> Result<Option<String>, StorageError> {
        Ok(self.value.clone())
    }

    fn save(&mut self, value: &str) -> Result<(), StorageError> {
        self.value = Some(value.to_owned());
        Ok(())
    }

    fn clear(&mut self) -> Result<(), StorageError> {
        self.value = None;
        Ok(())
    }
}

/// File-backed store: one file holding the envelope verbatim.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Create a store at the given path. The file is created on first save.
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl IdentityStore for FileStore {
    fn load(&self) -> Result<Option<String>, StorageError> {
        match std::fs::read_to_string(&self.path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&mut self, value: &str) -> Result<(), StorageError> {
        std::fs::write(&self.path, value)?;
        Ok(())
    }

    fn clear(&mut self) -> Result<(), StorageError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

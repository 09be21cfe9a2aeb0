//! Contract for the named key-value slot that holds the persisted directory.

use async_trait::async_trait;
use thiserror::Error;

/// Errors raised by slot backends.
///
/// These never reach users: the store logs them and keeps working from
/// memory.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("slot I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid slot name '{0}'")]
    InvalidSlot(String),

    #[error("slot backend error: {0}")]
    Backend(String),
}

/// Result type for slot operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// A durable string slot addressed by name.
///
/// The payload is opaque to the backend; the store writes a JSON document of
/// the form `{"websites": [...]}`.
///
/// # Implementations
///
/// - [`crate::infrastructure::storage::FileSlot`] - one JSON file per slot
/// - [`crate::infrastructure::storage::MemorySlot`] - process-local map
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SlotStorage: Send + Sync {
    /// Reads the slot.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(payload))` if the slot has been written
    /// - `Ok(None)` if it does not exist yet
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the backend cannot be read.
    async fn load(&self, slot: &str) -> StorageResult<Option<String>>;

    /// Replaces the slot contents with `payload`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the write fails; the previous contents
    /// are left intact.
    async fn save(&self, slot: &str, payload: &str) -> StorageResult<()>;
}

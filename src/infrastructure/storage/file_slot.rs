//! File-backed slot storage.

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::PathBuf;
use tokio::fs;
use tracing::{debug, info};

use crate::domain::repositories::{SlotStorage, StorageError, StorageResult};

/// Stores each slot as `<dir>/<slot>.json`.
///
/// Writes go to a temporary sibling file that is then renamed over the
/// target, so a crash mid-write leaves the previous contents readable.
/// The directory is created on first save.
#[derive(Debug, Clone)]
pub struct FileSlot {
    dir: PathBuf,
}

impl FileSlot {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        info!("Using FileSlot storage in {}", dir.display());
        Self { dir }
    }

    /// Path of the file backing `slot`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::InvalidSlot`] unless the name is non-empty and
    /// made of ASCII letters, digits, `-` and `_`.
    pub fn slot_path(&self, slot: &str) -> StorageResult<PathBuf> {
        let valid = !slot.is_empty()
            && slot
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');

        if !valid {
            return Err(StorageError::InvalidSlot(slot.to_string()));
        }

        Ok(self.dir.join(format!("{slot}.json")))
    }
}

#[async_trait]
impl SlotStorage for FileSlot {
    async fn load(&self, slot: &str) -> StorageResult<Option<String>> {
        let path = self.slot_path(slot)?;

        match fs::read_to_string(&path).await {
            Ok(payload) => {
                debug!("Loaded slot '{}' ({} bytes)", slot, payload.len());
                Ok(Some(payload))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("Slot '{}' not found at {}", slot, path.display());
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn save(&self, slot: &str, payload: &str) -> StorageResult<()> {
        let path = self.slot_path(slot)?;
        let tmp = path.with_extension("json.tmp");

        fs::create_dir_all(&self.dir).await?;
        fs::write(&tmp, payload).await?;
        fs::rename(&tmp, &path).await?;

        debug!("Saved slot '{}' ({} bytes)", slot, payload.len());
        Ok(())
    }
}

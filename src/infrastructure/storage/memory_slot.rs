//! In-memory slot storage.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use tracing::debug;

use crate::domain::repositories::{SlotStorage, StorageError, StorageResult};

/// Slot storage that lives only as long as the process.
///
/// Used when `DIRECTORY_STORAGE=memory` and in tests.
#[derive(Debug, Default)]
pub struct MemorySlot {
    slots: Mutex<HashMap<String, String>>,
}

impl MemorySlot {
    pub fn new() -> Self {
        debug!("Using MemorySlot (nothing is written to disk)");
        Self::default()
    }

    /// Creates storage with `slot` already holding `payload`.
    pub fn with_payload(slot: &str, payload: impl Into<String>) -> Self {
        let storage = Self::new();
        if let Ok(mut slots) = storage.slots.lock() {
            slots.insert(slot.to_string(), payload.into());
        }
        storage
    }

    fn poisoned() -> StorageError {
        StorageError::Backend("memory slot lock poisoned".to_string())
    }
}

#[async_trait]
impl SlotStorage for MemorySlot {
    async fn load(&self, slot: &str) -> StorageResult<Option<String>> {
        let slots = self.slots.lock().map_err(|_| Self::poisoned())?;
        Ok(slots.get(slot).cloned())
    }

    async fn save(&self, slot: &str, payload: &str) -> StorageResult<()> {
        let mut slots = self.slots.lock().map_err(|_| Self::poisoned())?;
        slots.insert(slot.to_string(), payload.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_save_then_load() {
        let storage = MemorySlot::new();

        assert_eq!(storage.load("website-store").await.unwrap(), None);

        storage.save("website-store", "{}").await.unwrap();
        assert_eq!(
            storage.load("website-store").await.unwrap().as_deref(),
            Some("{}")
        );
    }

    #[tokio::test]
    async fn test_slots_are_independent() {
        let storage = MemorySlot::with_payload("a", "1");
        storage.save("b", "2").await.unwrap();

        assert_eq!(storage.load("a").await.unwrap().as_deref(), Some("1"));
        assert_eq!(storage.load("b").await.unwrap().as_deref(), Some("2"));
        assert_eq!(storage.load("c").await.unwrap(), None);
    }
}

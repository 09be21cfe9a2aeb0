//! Storage trait definitions for the domain layer.
//!
//! The directory is persisted as a single document in a named slot. The
//! [`SlotStorage`] trait abstracts where that slot lives; implementations
//! are in `crate::infrastructure::storage`.
//!
//! Mock implementations are auto-generated via `mockall` for unit tests.

pub mod slot_storage;

pub use slot_storage::{SlotStorage, StorageError, StorageResult};

#[cfg(test)]
pub use slot_storage::MockSlotStorage;

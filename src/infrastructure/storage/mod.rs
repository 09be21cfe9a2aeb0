//! Slot storage backends.
//!
//! Provides two [`SlotStorage`](crate::domain::repositories::SlotStorage)
//! implementations:
//! - [`FileSlot`] - Durable, one JSON file per slot
//! - [`MemorySlot`] - Process-local, for tests and `DIRECTORY_STORAGE=memory`

mod file_slot;
mod memory_slot;

pub use file_slot::FileSlot;
pub use memory_slot::MemorySlot;

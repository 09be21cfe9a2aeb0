//! Infrastructure layer for external integrations.
//!
//! This layer implements the storage contract defined by the domain layer.
//!
//! # Modules
//!
//! - [`storage`] - Slot backends (JSON files on disk and an in-memory map)

pub mod storage;

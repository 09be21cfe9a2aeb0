//! Wiring of storage, store and services from [`Config`].

use std::sync::Arc;
use tracing::info;

use crate::application::services::{SubmissionService, WebsiteStore};
use crate::config::Config;
use crate::domain::repositories::SlotStorage;
use crate::infrastructure::storage::{FileSlot, MemorySlot};

/// Selects the slot backend named by `config.storage`.
pub fn build_storage(config: &Config) -> Arc<dyn SlotStorage> {
    if config.is_memory_storage() {
        Arc::new(MemorySlot::new())
    } else {
        Arc::new(FileSlot::new(config.data_dir.clone()))
    }
}

/// Opens the store on the configured backend and slot.
pub async fn open_store(config: &Config) -> Arc<WebsiteStore> {
    let storage = build_storage(config);
    let store = WebsiteStore::open(storage, config.slot.clone(), config.seed_policy()).await;

    info!(
        "Directory ready: {} websites in slot '{}'",
        store.len().await,
        store.slot()
    );
    Arc::new(store)
}

/// Builds the submission service over `store` with the configured latency.
pub fn submission_service(config: &Config, store: Arc<WebsiteStore>) -> SubmissionService {
    SubmissionService::new(store, config.submit_delay())
}

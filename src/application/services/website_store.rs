//! In-memory website collection with write-through slot persistence.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::domain::entities::{Website, WebsiteFormData, WebsiteId};
use crate::domain::repositories::SlotStorage;
use crate::domain::seed::seed_websites;
use crate::utils::id_generator::generate_unique_id;

/// Slot used when none is configured.
pub const DEFAULT_SLOT: &str = "website-store";

/// What the store starts with when the slot holds no usable collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SeedPolicy {
    /// Start with the sample records from [`crate::domain::seed`].
    #[default]
    SeedOnFirstRun,
    /// Start with an empty collection.
    StartEmpty,
}

/// Persisted form of the collection.
///
/// The current selection and the busy flag are never persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoreSnapshot {
    pub websites: Vec<Website>,
}

#[derive(Serialize)]
struct SnapshotRef<'a> {
    websites: &'a [Website],
}

#[derive(Debug, Default)]
struct StoreState {
    websites: Vec<Website>,
    current: Option<WebsiteId>,
}

/// Owner of the website collection.
///
/// Readers get clones; the collection only changes through [`create`],
/// [`update`], [`delete`] and [`reset`]. Each successful mutation is saved
/// to the slot before the method returns, under the same write lock, so
/// saves land in mutation order. A failed save is logged and the in-memory
/// change is kept.
///
/// [`create`]: Self::create
/// [`update`]: Self::update
/// [`delete`]: Self::delete
/// [`reset`]: Self::reset
pub struct WebsiteStore {
    storage: Arc<dyn SlotStorage>,
    slot: String,
    state: RwLock<StoreState>,
    busy: AtomicBool,
}

impl WebsiteStore {
    /// Loads the collection from `slot`.
    ///
    /// Falls back to the [`SeedPolicy`] collection when the slot is absent,
    /// unreadable or does not parse. Records with an already-seen id are
    /// dropped on load.
    pub async fn open(
        storage: Arc<dyn SlotStorage>,
        slot: impl Into<String>,
        seed_policy: SeedPolicy,
    ) -> Self {
        let slot = slot.into();

        let websites = match storage.load(&slot).await {
            Ok(Some(payload)) => match serde_json::from_str::<StoreSnapshot>(&payload) {
                Ok(snapshot) => {
                    let websites = dedupe_ids(snapshot.websites);
                    info!("Loaded {} websites from slot '{}'", websites.len(), slot);
                    websites
                }
                Err(e) => {
                    warn!("Slot '{}' is malformed, starting from defaults: {}", slot, e);
                    initial_websites(seed_policy)
                }
            },
            Ok(None) => {
                info!("Slot '{}' is empty, starting from defaults", slot);
                initial_websites(seed_policy)
            }
            Err(e) => {
                warn!("Failed to read slot '{}', starting from defaults: {}", slot, e);
                initial_websites(seed_policy)
            }
        };

        Self {
            storage,
            slot,
            state: RwLock::new(StoreState {
                websites,
                current: None,
            }),
            busy: AtomicBool::new(false),
        }
    }

    pub fn slot(&self) -> &str {
        &self.slot
    }

    /// All records in stored order (newest creation first).
    pub async fn list(&self) -> Vec<Website> {
        self.state.read().await.websites.clone()
    }

    pub async fn len(&self) -> usize {
        self.state.read().await.websites.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.state.read().await.websites.is_empty()
    }

    /// Returns the record with `id`, if any. Malformed ids are simply absent.
    pub async fn get(&self, id: &str) -> Option<Website> {
        self.state
            .read()
            .await
            .websites
            .iter()
            .find(|w| w.id == id)
            .cloned()
    }

    /// Adds a record at the front of the collection.
    ///
    /// Assigns a fresh id and sets both timestamps to the current time.
    /// The data is stored as given; callers validate it first.
    pub async fn create(&self, data: WebsiteFormData) -> Website {
        let mut state = self.state.write().await;
        let now = Utc::now();

        let id = generate_unique_id(now, |candidate| {
            state.websites.iter().any(|w| w.id == candidate)
        });
        let website = Website::from_form(id, data, now);
        state.websites.insert(0, website.clone());

        info!("Created website {} ({})", website.id, website.name);
        self.persist(&state.websites).await;

        website
    }

    /// Replaces every editable field of the record with `id`.
    ///
    /// Returns `None` and leaves the collection untouched when no record
    /// has that id.
    pub async fn update(&self, id: &str, data: WebsiteFormData) -> Option<Website> {
        let mut state = self.state.write().await;

        let Some(website) = state.websites.iter_mut().find(|w| w.id == id) else {
            debug!("Update skipped, website {} not found", id);
            return None;
        };
        website.apply_form(data, Utc::now());
        let updated = website.clone();

        info!("Updated website {} ({})", updated.id, updated.name);
        self.persist(&state.websites).await;

        Some(updated)
    }

    /// Removes the record with `id`. Returns `false` if there was none.
    ///
    /// Deleting the selected record clears the selection.
    pub async fn delete(&self, id: &str) -> bool {
        let mut state = self.state.write().await;

        let before = state.websites.len();
        state.websites.retain(|w| w.id != id);
        if state.websites.len() == before {
            debug!("Delete skipped, website {} not found", id);
            return false;
        }

        if state.current.as_deref() == Some(id) {
            state.current = None;
        }

        info!("Deleted website {}", id);
        self.persist(&state.websites).await;

        true
    }

    /// Replaces the collection with the sample records and saves it.
    ///
    /// Returns the number of records after the reset.
    pub async fn reset(&self) -> usize {
        let mut state = self.state.write().await;

        state.websites = seed_websites();
        state.current = None;

        info!("Reset slot '{}' to {} sample websites", self.slot, state.websites.len());
        self.persist(&state.websites).await;

        state.websites.len()
    }

    /// The currently selected record.
    pub async fn current(&self) -> Option<Website> {
        let state = self.state.read().await;
        let id = state.current.as_deref()?;
        state.websites.iter().find(|w| w.id == id).cloned()
    }

    /// Selects the record with `id`, or clears the selection with `None`.
    ///
    /// Selecting an unknown id clears the selection. Returns the selected
    /// record.
    pub async fn set_current(&self, id: Option<&str>) -> Option<Website> {
        let mut state = self.state.write().await;

        let selected = id.and_then(|id| state.websites.iter().find(|w| w.id == id).cloned());
        state.current = selected.as_ref().map(|w| w.id.clone());

        selected
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::SeqCst)
    }

    /// Sets the advisory busy flag. Never touches the collection.
    pub fn set_busy(&self, busy: bool) {
        self.busy.store(busy, Ordering::SeqCst);
    }

    /// Raises the busy flag if it is not already raised.
    ///
    /// The flag is lowered when the returned guard is dropped, however the
    /// holder exits.
    pub fn try_acquire_busy(&self) -> Option<BusyGuard<'_>> {
        self.busy
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .ok()
            .map(|_| BusyGuard { busy: &self.busy })
    }

    async fn persist(&self, websites: &[Website]) {
        let payload = match serde_json::to_string(&SnapshotRef { websites }) {
            Ok(payload) => payload,
            Err(e) => {
                warn!("Failed to serialize slot '{}': {}", self.slot, e);
                return;
            }
        };

        if let Err(e) = self.storage.save(&self.slot, &payload).await {
            warn!("Failed to save slot '{}', keeping changes in memory: {}", self.slot, e);
        }
    }
}

/// Lowers the store's busy flag on drop.
#[must_use = "the busy flag is lowered as soon as the guard is dropped"]
pub struct BusyGuard<'a> {
    busy: &'a AtomicBool,
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.busy.store(false, Ordering::SeqCst);
    }
}

fn initial_websites(policy: SeedPolicy) -> Vec<Website> {
    match policy {
        SeedPolicy::SeedOnFirstRun => seed_websites(),
        SeedPolicy::StartEmpty => Vec::new(),
    }
}

fn dedupe_ids(websites: Vec<Website>) -> Vec<Website> {
    let mut seen = HashSet::new();
    websites
        .into_iter()
        .filter(|w| {
            let fresh = seen.insert(w.id.clone());
            if !fresh {
                warn!("Dropping duplicate website id {} from slot", w.id);
            }
            fresh
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::{MockSlotStorage, StorageError};
    use crate::domain::schema::validate_form;
    use crate::infrastructure::storage::MemorySlot;

    fn sample_form(name: &str) -> WebsiteFormData {
        let mut form = seed_websites()[0].to_form_data();
        form.name = name.to_string();
        form
    }

    async fn empty_store() -> WebsiteStore {
        WebsiteStore::open(Arc::new(MemorySlot::new()), DEFAULT_SLOT, SeedPolicy::StartEmpty).await
    }

    #[tokio::test]
    async fn test_open_missing_slot_seeds() {
        let store = WebsiteStore::open(
            Arc::new(MemorySlot::new()),
            DEFAULT_SLOT,
            SeedPolicy::SeedOnFirstRun,
        )
        .await;

        assert_eq!(store.len().await, 8);
        assert!(!store.is_busy());
        assert!(store.current().await.is_none());
    }

    #[tokio::test]
    async fn test_open_read_error_falls_back() {
        let mut storage = MockSlotStorage::new();
        storage
            .expect_load()
            .times(1)
            .returning(|_| Err(StorageError::Backend("disk on fire".to_string())));

        let store = WebsiteStore::open(Arc::new(storage), DEFAULT_SLOT, SeedPolicy::SeedOnFirstRun).await;

        assert_eq!(store.len().await, 8);
    }

    #[tokio::test]
    async fn test_open_malformed_slot_falls_back() {
        let storage = MemorySlot::with_payload(DEFAULT_SLOT, "{ not json");

        let store = WebsiteStore::open(Arc::new(storage), DEFAULT_SLOT, SeedPolicy::StartEmpty).await;

        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_open_drops_duplicate_ids() {
        let mut websites = seed_websites();
        websites.push(websites[0].clone());
        let payload = serde_json::to_string(&StoreSnapshot { websites }).unwrap();

        let store = WebsiteStore::open(
            Arc::new(MemorySlot::with_payload(DEFAULT_SLOT, payload)),
            DEFAULT_SLOT,
            SeedPolicy::StartEmpty,
        )
        .await;

        assert_eq!(store.len().await, 8);
    }

    #[tokio::test]
    async fn test_create_prepends_and_stamps() {
        let store = empty_store().await;

        let first = store.create(sample_form("First")).await;
        let second = store.create(sample_form("Second")).await;

        assert_ne!(first.id, second.id);
        assert!(second.id.starts_with("website-"));
        assert_eq!(second.created_at, second.updated_at);

        let names: Vec<_> = store.list().await.into_iter().map(|w| w.name).collect();
        assert_eq!(names, vec!["Second", "First"]);
    }

    #[tokio::test]
    async fn test_create_then_get_round_trip() {
        let store = empty_store().await;
        let form = sample_form("Round Trip");

        let created = store.create(form.clone()).await;
        let fetched = store.get(&created.id).await.unwrap();

        assert_eq!(fetched.to_form_data(), form);
        assert_eq!(store.get(&created.id).await, Some(fetched));
    }

    #[tokio::test]
    async fn test_update_preserves_identity() {
        let store = empty_store().await;
        let created = store.create(sample_form("Before")).await;

        let updated = store
            .update(&created.id, sample_form("After"))
            .await
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at >= created.updated_at);
        assert_eq!(updated.name, "After");
    }

    #[tokio::test]
    async fn test_update_unknown_id() {
        let store = WebsiteStore::open(
            Arc::new(MemorySlot::new()),
            DEFAULT_SLOT,
            SeedPolicy::SeedOnFirstRun,
        )
        .await;
        let before = store.list().await;

        assert!(store.update("website-404", sample_form("Ghost")).await.is_none());
        assert!(store.update("", sample_form("Ghost")).await.is_none());
        assert_eq!(store.list().await, before);
    }

    #[tokio::test]
    async fn test_delete() {
        let store = empty_store().await;
        let created = store.create(sample_form("Doomed")).await;

        assert!(!store.delete("website-404").await);
        assert_eq!(store.len().await, 1);

        assert!(store.delete(&created.id).await);
        assert!(store.get(&created.id).await.is_none());
        assert!(!store.delete(&created.id).await);
    }

    #[tokio::test]
    async fn test_selection_cleared_on_delete() {
        let store = empty_store().await;
        let created = store.create(sample_form("Selected")).await;

        assert_eq!(store.set_current(Some(&created.id)).await, Some(created.clone()));
        assert_eq!(store.current().await.map(|w| w.id), Some(created.id.clone()));

        store.delete(&created.id).await;
        assert!(store.current().await.is_none());

        assert!(store.set_current(Some("website-404")).await.is_none());
    }

    #[tokio::test]
    async fn test_busy_flag_leaves_collection_alone() {
        let store = empty_store().await;
        store.create(sample_form("Stable")).await;
        let before = store.list().await;

        store.set_busy(true);
        assert!(store.is_busy());
        store.set_busy(false);

        assert_eq!(store.list().await, before);
    }

    #[tokio::test]
    async fn test_busy_guard() {
        let store = empty_store().await;

        let guard = store.try_acquire_busy().unwrap();
        assert!(store.is_busy());
        assert!(store.try_acquire_busy().is_none());

        drop(guard);
        assert!(!store.is_busy());
    }

    #[tokio::test]
    async fn test_mutations_write_through() {
        let mut storage = MockSlotStorage::new();
        storage.expect_load().times(1).returning(|_| Ok(None));
        storage
            .expect_save()
            .withf(|slot, payload| slot == "custom-slot" && payload.contains("\"name\":\"Persisted\""))
            .times(1)
            .returning(|_, _| Ok(()));

        let store = WebsiteStore::open(Arc::new(storage), "custom-slot", SeedPolicy::StartEmpty).await;
        store.create(sample_form("Persisted")).await;
    }

    #[tokio::test]
    async fn test_save_failure_keeps_change() {
        let mut storage = MockSlotStorage::new();
        storage.expect_load().times(1).returning(|_| Ok(None));
        storage
            .expect_save()
            .times(2)
            .returning(|_, _| Err(StorageError::Backend("read-only".to_string())));

        let store = WebsiteStore::open(Arc::new(storage), DEFAULT_SLOT, SeedPolicy::StartEmpty).await;

        let created = store.create(sample_form("Volatile")).await;
        assert_eq!(store.get(&created.id).await.map(|w| w.name), Some("Volatile".to_string()));

        assert!(store.delete(&created.id).await);
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_reset_restores_seed() {
        let store = empty_store().await;
        store.create(sample_form("Temporary")).await;

        assert_eq!(store.reset().await, 8);
        for website in store.list().await {
            assert!(validate_form(&website.to_form_data()).is_ok());
        }
    }
}

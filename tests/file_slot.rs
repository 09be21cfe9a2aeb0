mod common;

use common::TEST_SLOT;
use site_directory::application::services::{SeedPolicy, WebsiteStore};
use site_directory::domain::repositories::{SlotStorage, StorageError};
use site_directory::domain::schema::validate;
use site_directory::infrastructure::storage::FileSlot;
use std::sync::Arc;
use tempfile::TempDir;

#[tokio::test]
async fn test_missing_slot_loads_none() {
    let dir = TempDir::new().unwrap();
    let storage = FileSlot::new(dir.path());

    assert_eq!(storage.load(TEST_SLOT).await.unwrap(), None);
}

#[tokio::test]
async fn test_save_creates_directory_and_file() {
    let dir = TempDir::new().unwrap();
    let nested = dir.path().join("data").join("directory");
    let storage = FileSlot::new(&nested);

    storage.save(TEST_SLOT, r#"{"websites":[]}"#).await.unwrap();

    let on_disk = std::fs::read_to_string(nested.join("website-store.json")).unwrap();
    assert_eq!(on_disk, r#"{"websites":[]}"#);
    assert!(!nested.join("website-store.json.tmp").exists());
}

#[tokio::test]
async fn test_save_overwrites() {
    let dir = TempDir::new().unwrap();
    let storage = FileSlot::new(dir.path());

    storage.save(TEST_SLOT, "first").await.unwrap();
    storage.save(TEST_SLOT, "second").await.unwrap();

    assert_eq!(
        storage.load(TEST_SLOT).await.unwrap().as_deref(),
        Some("second")
    );
}

#[tokio::test]
async fn test_invalid_slot_name() {
    let dir = TempDir::new().unwrap();
    let storage = FileSlot::new(dir.path());

    let result = storage.save("../outside", "payload").await;

    assert!(matches!(result, Err(StorageError::InvalidSlot(_))));
}

#[tokio::test]
async fn test_store_round_trip_on_disk() {
    let dir = TempDir::new().unwrap();

    let created = {
        let store = WebsiteStore::open(
            Arc::new(FileSlot::new(dir.path())),
            TEST_SLOT,
            SeedPolicy::StartEmpty,
        )
        .await;
        store
            .create(validate(&common::acme_form_json()).unwrap())
            .await
    };

    let reopened = WebsiteStore::open(
        Arc::new(FileSlot::new(dir.path())),
        TEST_SLOT,
        SeedPolicy::SeedOnFirstRun,
    )
    .await;

    assert_eq!(reopened.list().await, vec![created]);
}

#[tokio::test]
async fn test_corrupt_file_falls_back_to_seed() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("website-store.json"), "not json at all").unwrap();

    let store = WebsiteStore::open(
        Arc::new(FileSlot::new(dir.path())),
        TEST_SLOT,
        SeedPolicy::SeedOnFirstRun,
    )
    .await;

    assert_eq!(store.len().await, 8);
}

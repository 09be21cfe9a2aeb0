mod common;

use site_directory::bootstrap::{open_store, submission_service};
use site_directory::config::Config;
use std::time::Duration;
use tempfile::TempDir;

#[tokio::test]
async fn test_memory_config_seeds_store() {
    let config = Config {
        storage: "memory".to_string(),
        ..Config::default()
    };

    let store = open_store(&config).await;

    assert_eq!(store.len().await, 8);
    assert_eq!(store.slot(), "website-store");
}

#[tokio::test]
async fn test_unseeded_file_config() {
    let dir = TempDir::new().unwrap();
    let config = Config {
        data_dir: dir.path().to_path_buf(),
        slot: "partners".to_string(),
        seed: false,
        submit_delay_ms: 0,
        ..Config::default()
    };

    let store = open_store(&config).await;
    assert!(store.is_empty().await);

    let service = submission_service(&config, store.clone());
    service
        .submit_create(&common::acme_form_json())
        .await
        .unwrap();

    assert!(dir.path().join("partners.json").exists());
    assert_eq!(config.submit_delay(), Duration::ZERO);
}

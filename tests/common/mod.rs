#![allow(dead_code)]

use async_trait::async_trait;
use serde_json::{Value, json};
use site_directory::application::services::{SeedPolicy, WebsiteStore};
use site_directory::domain::repositories::{SlotStorage, StorageError, StorageResult};
use site_directory::infrastructure::storage::MemorySlot;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

pub const TEST_SLOT: &str = "website-store";

/// The minimal valid form used throughout the tests.
pub fn acme_form_json() -> Value {
    json!({
        "name": "Acme",
        "url": "https://acme.io",
        "description": "A test site for acme products.",
        "category": "SaaS",
        "status": "active",
        "offers": {
            "pricing": { "type": "free" },
            "features": ["X"],
            "targetAudience": ["Y"],
            "uniqueSellingPoints": ["Z"]
        },
        "articleSpecs": {
            "contentTypes": ["Blog"],
            "wordCountRange": { "min": 500, "max": 1000 },
            "toneOfVoice": ["Casual"],
            "requiredSections": ["Intro"],
            "seoRequirements": {
                "metaDescription": false,
                "keywords": false,
                "headingStructure": false
            },
            "submissionGuidelines": "Write clearly and simply."
        }
    })
}

pub async fn empty_store() -> WebsiteStore {
    WebsiteStore::open(Arc::new(MemorySlot::new()), TEST_SLOT, SeedPolicy::StartEmpty).await
}

pub async fn seeded_store() -> WebsiteStore {
    WebsiteStore::open(
        Arc::new(MemorySlot::new()),
        TEST_SLOT,
        SeedPolicy::SeedOnFirstRun,
    )
    .await
}

/// Slot backend whose reads and writes always fail; counts save attempts.
#[derive(Default)]
pub struct FailingSlot {
    pub saves: AtomicUsize,
}

impl FailingSlot {
    pub fn save_attempts(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SlotStorage for FailingSlot {
    async fn load(&self, _slot: &str) -> StorageResult<Option<String>> {
        Err(StorageError::Backend("storage unavailable".to_string()))
    }

    async fn save(&self, _slot: &str, _payload: &str) -> StorageResult<()> {
        self.saves.fetch_add(1, Ordering::SeqCst);
        Err(StorageError::Backend("storage unavailable".to_string()))
    }
}

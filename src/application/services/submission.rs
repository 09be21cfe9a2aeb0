//! Form submission boundary: validate, mark busy, then hand off to the store.

use serde_json::{Value, json};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

use super::website_store::{BusyGuard, WebsiteStore};
use crate::domain::entities::{Website, WebsiteFormData};
use crate::domain::schema::validate;
use crate::error::AppError;

/// Runs create and edit submissions against a [`WebsiteStore`].
///
/// Input is validated before the busy flag is touched. While a submission
/// is in flight a second one is refused with [`AppError::Conflict`]. The
/// busy flag is lowered however the submission ends, including when the
/// future is dropped mid-way.
pub struct SubmissionService {
    store: Arc<WebsiteStore>,
    delay: Duration,
}

impl SubmissionService {
    /// Creates a service that waits `delay` before each store call.
    pub fn new(store: Arc<WebsiteStore>, delay: Duration) -> Self {
        Self { store, delay }
    }

    pub fn store(&self) -> &Arc<WebsiteStore> {
        &self.store
    }

    /// Validates `input` and adds it as a new record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidForm`] if validation fails.
    /// Returns [`AppError::Conflict`] if another submission is in flight.
    pub async fn submit_create(&self, input: &Value) -> Result<Website, AppError> {
        let form = validate(input)?;
        let _busy = self.begin()?;

        self.wait().await;
        let website = self.store.create(form).await;

        info!("Submission created website {}", website.id);
        Ok(website)
    }

    /// Validates `input` and replaces the record with `id`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidForm`] if validation fails.
    /// Returns [`AppError::Conflict`] if another submission is in flight.
    /// Returns [`AppError::NotFound`] if no record has that id.
    pub async fn submit_update(&self, id: &str, input: &Value) -> Result<Website, AppError> {
        let form = validate(input)?;
        let _busy = self.begin()?;

        self.wait().await;
        let website = self
            .store
            .update(id, form)
            .await
            .ok_or_else(|| AppError::not_found("Website not found", json!({ "id": id })))?;

        info!("Submission updated website {}", website.id);
        Ok(website)
    }

    fn begin(&self) -> Result<BusyGuard<'_>, AppError> {
        self.store.try_acquire_busy().ok_or_else(|| {
            AppError::conflict(
                "Another submission is in progress",
                json!({ "slot": self.store.slot() }),
            )
        })
    }

    async fn wait(&self) {
        if !self.delay.is_zero() {
            debug!("Simulating submission latency of {:?}", self.delay);
            tokio::time::sleep(self.delay).await;
        }
    }
}

/// Overlays `patch` on the form data of an existing record.
///
/// Objects are merged key by key; any other patch value, arrays included,
/// replaces the base value. A `null` in the patch removes the key, which
/// validation then reports as missing.
pub fn merge_form_patch(base: &WebsiteFormData, patch: &Value) -> Value {
    let mut merged = serde_json::to_value(base).unwrap_or(Value::Null);
    merge_into(&mut merged, patch);
    merged
}

fn merge_into(target: &mut Value, patch: &Value) {
    match (target, patch) {
        (Value::Object(target), Value::Object(patch)) => {
            for (key, value) in patch {
                if value.is_null() {
                    target.remove(key);
                } else {
                    merge_into(target.entry(key.clone()).or_insert(Value::Null), value);
                }
            }
        }
        (target, patch) => *target = patch.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::SeedPolicy;
    use crate::domain::seed::seed_websites;
    use crate::infrastructure::storage::MemorySlot;

    async fn service(delay: Duration) -> SubmissionService {
        let store = WebsiteStore::open(
            Arc::new(MemorySlot::new()),
            "test-slot",
            SeedPolicy::SeedOnFirstRun,
        )
        .await;
        SubmissionService::new(Arc::new(store), delay)
    }

    fn valid_input() -> Value {
        serde_json::to_value(seed_websites()[1].to_form_data()).unwrap()
    }

    #[tokio::test]
    async fn test_submit_create() {
        let service = service(Duration::ZERO).await;

        let website = service.submit_create(&valid_input()).await.unwrap();

        assert_eq!(service.store().list().await[0].id, website.id);
        assert!(!service.store().is_busy());
    }

    #[tokio::test]
    async fn test_invalid_input_never_sets_busy() {
        let service = service(Duration::ZERO).await;
        let mut input = valid_input();
        input["description"] = json!("Too short");

        let err = service.submit_create(&input).await.unwrap_err();

        assert!(err.report().unwrap().has_error_at("description"));
        assert!(!service.store().is_busy());
        assert_eq!(service.store().len().await, 8);
    }

    #[tokio::test]
    async fn test_busy_store_refuses_submission() {
        let service = service(Duration::ZERO).await;
        let _held = service.store().try_acquire_busy().unwrap();

        let err = service.submit_create(&valid_input()).await.unwrap_err();

        assert!(matches!(err, AppError::Conflict { .. }));
        assert_eq!(service.store().len().await, 8);
    }

    #[tokio::test]
    async fn test_submit_update_unknown_id() {
        let service = service(Duration::ZERO).await;

        let err = service
            .submit_update("website-404", &valid_input())
            .await
            .unwrap_err();

        assert!(err.is_not_found());
        assert!(!service.store().is_busy());
    }

    #[tokio::test(start_paused = true)]
    async fn test_busy_during_latency_and_cleared_on_cancel() {
        let service = service(Duration::from_secs(5)).await;
        let input = valid_input();

        let submission = service.submit_create(&input);
        let timed_out = tokio::time::timeout(Duration::from_secs(1), submission).await;

        assert!(timed_out.is_err());
        assert!(!service.store().is_busy());
        assert_eq!(service.store().len().await, 8);
    }

    #[test]
    fn test_merge_form_patch() {
        let base = seed_websites()[0].to_form_data();
        let patch = json!({
            "name": "Renamed",
            "offers": { "pricing": { "type": "paid", "amount": 10 } },
            "articleSpecs": { "toneOfVoice": ["Dry"] }
        });

        let merged = merge_form_patch(&base, &patch);

        assert_eq!(merged["name"], "Renamed");
        assert_eq!(merged["offers"]["pricing"]["amount"], 10);
        assert_eq!(merged["offers"]["features"], json!(base.offers.features));
        assert_eq!(merged["articleSpecs"]["toneOfVoice"], json!(["Dry"]));
        assert_eq!(merged["url"], base.url);
    }

    #[test]
    fn test_merge_null_removes_key() {
        let base = seed_websites()[0].to_form_data();
        let merged = merge_form_patch(&base, &json!({ "category": null }));

        assert!(merged.get("category").is_none());
        assert!(validate(&merged).unwrap_err().has_error_at("category"));
    }
}

//! Services built on top of the domain layer.

pub mod directory_view;
pub mod submission;
pub mod website_store;

pub use directory_view::{
    DirectorySummary, ListQuery, SortDirection, SortKey, apply_query, pricing_label,
};
pub use submission::{SubmissionService, merge_form_patch};
pub use website_store::{BusyGuard, DEFAULT_SLOT, SeedPolicy, StoreSnapshot, WebsiteStore};

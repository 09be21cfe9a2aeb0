//! Application layer services.
//!
//! Services own the website collection and coordinate validation and
//! persistence. Callers (the CLI, tests) go through them rather than touching
//! storage directly.
//!
//! # Available Services
//!
//! - [`services::website_store::WebsiteStore`] - Collection owner with write-through persistence
//! - [`services::submission::SubmissionService`] - Validated create/edit submissions with a busy flag
//! - [`services::directory_view`] - Summary counters, search, filters and sorting for the list

pub mod services;

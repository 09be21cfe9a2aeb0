//! # Site Directory
//!
//! A directory of partner websites: their metadata, monetization offers and
//! article submission requirements.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Records, validation schema, seed data and the storage contract
//! - **Application Layer** ([`application`]) - The website store, form submissions and list projections
//! - **Infrastructure Layer** ([`infrastructure`]) - File and in-memory slot backends
//!
//! ## Quick Start
//!
//! ```bash
//! # List the directory (seeded with sample records on first run)
//! cargo run -- list
//!
//! # Validate a payload without saving it
//! cargo run -- validate --file website.json
//!
//! # Create a record from a JSON payload
//! cargo run -- create --file website.json
//! ```
//!
//! ## Configuration
//!
//! Configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod application;
pub mod bootstrap;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod utils;

pub use error::AppError;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{
        DirectorySummary, ListQuery, SeedPolicy, SubmissionService, WebsiteStore,
    };
    pub use crate::domain::entities::{Pricing, Website, WebsiteFormData, WebsiteStatus};
    pub use crate::domain::schema::{ValidationReport, validate, validate_form};
    pub use crate::error::AppError;
}

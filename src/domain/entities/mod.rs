//! Core domain entities of the website directory.
//!
//! Entities are plain data structures that serialize to the persisted JSON
//! layout (camelCase keys, RFC 3339 timestamps).
//!
//! # Entity Types
//!
//! - [`Website`] - A directory record with identity and timestamps
//! - [`WebsiteFormData`] - The editable payload of a record
//! - [`Offers`] / [`Pricing`] - Monetization details
//! - [`ArticleSpecs`] - Content-submission requirements

pub mod article_specs;
pub mod offers;
pub mod website;

pub use article_specs::{ArticleSpecs, SeoRequirements, WordCountRange};
pub use offers::{BillingCycle, CURRENCIES, Offers, Pricing, PricingKind};
pub use website::{CATEGORIES, Website, WebsiteFormData, WebsiteId, WebsiteStatus};

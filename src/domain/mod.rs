//! Domain layer containing the directory's records and rules.
//!
//! Nothing here depends on the infrastructure layer: storage is reached only
//! through the traits in [`repositories`].
//!
//! # Modules
//!
//! - [`entities`] - Website records and their nested offer/article structures
//! - [`schema`] - Validation of untrusted form input
//! - [`repositories`] - Slot storage contract
//! - [`seed`] - Sample records installed on first run

pub mod entities;
pub mod repositories;
pub mod schema;
pub mod seed;

//! Utility functions shared across layers.
//!
//! - [`id_generator`] - Website identifier generation
//! - [`url_check`] - Absolute URL checks and display helpers

pub mod id_generator;
pub mod url_check;

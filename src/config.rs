//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the store is
//! opened.
//!
//! ```bash
//! export DIRECTORY_STORAGE="file"
//! export DIRECTORY_DATA_DIR=".site-directory"
//! export DIRECTORY_SLOT="website-store"
//! ```
//!
//! ## Optional Variables
//!
//! - `DIRECTORY_STORAGE` - Slot backend: `file` or `memory` (default: `file`)
//! - `DIRECTORY_DATA_DIR` - Directory holding slot files (default: `.site-directory`)
//! - `DIRECTORY_SLOT` - Slot name (default: `website-store`)
//! - `DIRECTORY_SEED` - Install sample records on first run (default: `true`)
//! - `SUBMIT_DELAY_MS` - Artificial submission latency (default: 0, max: 60000)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::application::services::{DEFAULT_SLOT, SeedPolicy};

/// Upper bound for `SUBMIT_DELAY_MS`.
pub const MAX_SUBMIT_DELAY_MS: u64 = 60_000;

/// Directory configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// `file` or `memory`.
    pub storage: String,
    pub data_dir: PathBuf,
    pub slot: String,
    /// When false, a missing or unreadable slot starts an empty directory.
    pub seed: bool,
    pub submit_delay_ms: u64,
    pub log_level: String,
    pub log_format: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage: "file".to_string(),
            data_dir: PathBuf::from(".site-directory"),
            slot: DEFAULT_SLOT.to_string(),
            seed: true,
            submit_delay_ms: 0,
            log_level: "info".to_string(),
            log_format: "text".to_string(),
        }
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// Unset variables take their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if `SUBMIT_DELAY_MS` is set but is not a number.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let storage = env::var("DIRECTORY_STORAGE")
            .map(|v| v.to_ascii_lowercase())
            .unwrap_or(defaults.storage);

        let data_dir = env::var("DIRECTORY_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.data_dir);

        let slot = env::var("DIRECTORY_SLOT").unwrap_or(defaults.slot);

        let seed = env::var("DIRECTORY_SEED")
            .map(|v| !(v.eq_ignore_ascii_case("false") || v == "0"))
            .unwrap_or(defaults.seed);

        let submit_delay_ms = match env::var("SUBMIT_DELAY_MS") {
            Ok(v) => v
                .trim()
                .parse()
                .with_context(|| format!("SUBMIT_DELAY_MS must be a number, got '{v}'"))?,
            Err(_) => defaults.submit_delay_ms,
        };

        let log_level = env::var("RUST_LOG").unwrap_or(defaults.log_level);
        let log_format = env::var("LOG_FORMAT").unwrap_or(defaults.log_format);

        Ok(Self {
            storage,
            data_dir,
            slot,
            seed,
            submit_delay_ms,
            log_level,
            log_format,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `storage` is not `file` or `memory`
    /// - `slot` is empty or contains characters other than ASCII letters, digits, `-` and `_`
    /// - `data_dir` is empty while file storage is selected
    /// - `submit_delay_ms` exceeds [`MAX_SUBMIT_DELAY_MS`]
    /// - `log_format` is not `text` or `json`
    pub fn validate(&self) -> Result<()> {
        if self.storage != "file" && self.storage != "memory" {
            anyhow::bail!(
                "DIRECTORY_STORAGE must be 'file' or 'memory', got '{}'",
                self.storage
            );
        }

        let slot_ok = !self.slot.is_empty()
            && self
                .slot
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !slot_ok {
            anyhow::bail!(
                "DIRECTORY_SLOT may only contain letters, digits, '-' and '_', got '{}'",
                self.slot
            );
        }

        if !self.is_memory_storage() && self.data_dir.as_os_str().is_empty() {
            anyhow::bail!("DIRECTORY_DATA_DIR must not be empty");
        }

        if self.submit_delay_ms > MAX_SUBMIT_DELAY_MS {
            anyhow::bail!(
                "SUBMIT_DELAY_MS is too large (max: {}), got {}",
                MAX_SUBMIT_DELAY_MS,
                self.submit_delay_ms
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        Ok(())
    }

    /// Returns whether the in-memory slot backend is selected.
    pub fn is_memory_storage(&self) -> bool {
        self.storage == "memory"
    }

    pub fn seed_policy(&self) -> SeedPolicy {
        if self.seed {
            SeedPolicy::SeedOnFirstRun
        } else {
            SeedPolicy::StartEmpty
        }
    }

    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        if self.is_memory_storage() {
            tracing::info!("  Storage: memory (changes are lost on exit)");
        } else {
            tracing::info!("  Storage: file ({})", self.data_dir.display());
        }
        tracing::info!("  Slot: {}", self.slot);
        tracing::info!("  Seed on first run: {}", self.seed);
        tracing::info!("  Submit delay: {}ms", self.submit_delay_ms);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable cannot be parsed or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}

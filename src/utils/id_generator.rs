//! Website identifier generation.
//!
//! Identifiers follow the `website-<unix-millis>` form; a random suffix is
//! appended when the timestamp-based candidate is already taken.

use chrono::{DateTime, Utc};
use rand::Rng;

/// Prefix shared by every generated identifier.
pub const ID_PREFIX: &str = "website-";

/// Length of the random suffix added on collision.
const SUFFIX_LEN: usize = 6;

const CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Returns the timestamp-based identifier for `now`.
pub fn timestamp_id(now: DateTime<Utc>) -> String {
    format!("{}{}", ID_PREFIX, now.timestamp_millis())
}

/// Returns `base` followed by a random lowercase alphanumeric suffix.
pub fn with_random_suffix(base: &str) -> String {
    let mut rng = rand::rng();

    let suffix: String = (0..SUFFIX_LEN)
        .map(|_| {
            let idx = rng.random_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect();

    format!("{base}-{suffix}")
}

/// Generates an identifier for which `is_taken` returns `false`.
///
/// Tries the timestamp-based candidate first, then suffixed variants until a
/// free one is found.
pub fn generate_unique_id(now: DateTime<Utc>, is_taken: impl Fn(&str) -> bool) -> String {
    let base = timestamp_id(now);
    if !is_taken(&base) {
        return base;
    }

    loop {
        let candidate = with_random_suffix(&base);
        if !is_taken(&candidate) {
            return candidate;
        }
    }
}

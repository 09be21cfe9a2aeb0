//! Absolute URL checks for website addresses.

use url::Url;

/// Reasons a string is not an acceptable website address.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum UrlCheckError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("URL must include a host")]
    MissingHost,
}

/// Parses `input` as an absolute URL with at least a scheme and a host.
///
/// The input is not rewritten: callers keep the original string and only use
/// the parsed value for inspection.
///
/// # Errors
///
/// Returns [`UrlCheckError::InvalidFormat`] for unparseable or relative URLs.
/// Returns [`UrlCheckError::MissingHost`] for host-less URLs such as `mailto:`.
///
/// # Examples
///
/// ```ignore
/// assert!(check_absolute_url("https://acme.io").is_ok());
/// assert!(check_absolute_url("acme.io").is_err());
/// ```
pub fn check_absolute_url(input: &str) -> Result<Url, UrlCheckError> {
    let url = Url::parse(input).map_err(|e| UrlCheckError::InvalidFormat(e.to_string()))?;

    match url.host_str() {
        Some(host) if !host.is_empty() => Ok(url),
        _ => Err(UrlCheckError::MissingHost),
    }
}

/// Returns the URL without its scheme prefix, for compact display.
pub fn display_host_path(input: &str) -> &str {
    input
        .strip_prefix("https://")
        .or_else(|| input.strip_prefix("http://"))
        .unwrap_or(input)
}

//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs.

/// Build a full API URL from a path
///
/// # Arguments
/// * `api_base` - Origin prefix like "http://localhost:5000"; `None` keeps the
///   path relative to the page origin
/// * `path` - The API path (should start with "/api/") or an absolute URL
///
/// # Example
/// ```rust
/// use frontend::shared::api_utils::api_url;
///
/// let url = api_url(None, "/api/row-counts");
/// assert_eq!(url, "/api/row-counts");
/// ```
pub fn api_url(api_base: Option<&str>, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }

    let base = match api_base {
        Some(base) => base.trim_end_matches('/'),
        None => "",
    };

    if path.starts_with('/') {
        format!("{}{}", base, path)
    } else {
        format!("{}/{}", base, path)
    }
}

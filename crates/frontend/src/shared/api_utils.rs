//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs.

use contracts::config::API_PORT;

/// Get the base URL for API requests
///
/// Constructs the API base URL from the current window location,
/// using the backend port from `contracts::config`.
///
/// # Returns
/// - API base URL like "http://localhost:5000"
/// - Empty string if window is not available
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "localhost".to_string());
    base_url(&protocol, &hostname)
}

fn base_url(protocol: &str, hostname: &str) -> String {
    format!("{}//{}:{}", protocol, hostname, API_PORT)
}

/// Build a full API URL from a path starting with "/api/"
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url() {
        assert_eq!(base_url("https:", "erp.example.com"), "https://erp.example.com:5000");
    }
}

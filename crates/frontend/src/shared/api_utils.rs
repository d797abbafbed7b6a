//! API utilities for frontend-backend communication
//!
//! Resolves the origin API requests are sent to.

use crate::shared::config::{config, ApiConfig};

/// Get the base URL for API requests
///
/// Resolution order:
/// 1. `api.base_url` from the configuration, when set
/// 2. The current window location with `api.port`, when a port is configured
/// 3. Empty string, so requests go to the page's own origin
///
/// # Example
/// ```rust,ignore
/// let url = format!("{}/api/user/changeUsername", api_base());
/// ```
pub fn api_base() -> String {
    resolve_api_base(&config().api, window_origin_parts())
}

fn window_origin_parts() -> Option<(String, String)> {
    let location = web_sys::window()?.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    Some((protocol, hostname))
}

fn resolve_api_base(api: &ApiConfig, origin: Option<(String, String)>) -> String {
    let base_url = api.base_url.trim().trim_end_matches('/');
    if !base_url.is_empty() {
        return base_url.to_string();
    }

    match (api.port, origin) {
        (Some(port), Some((protocol, hostname))) => format!("{}//{}:{}", protocol, hostname, port),
        _ => String::new(),
    }
}

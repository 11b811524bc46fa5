//! Utility functions

use crate::api::{self, endpoint, ApiClient};
use crate::constants::{APP_NAME, DEFAULT_PAGE_ORIGIN};
use reqwest::Url;
use std::path::PathBuf;
use tracing::{info, warn};

/// Get the app data directory (settings, logs)
pub fn get_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_NAME)
}

/// API base for the configured origin, falling back to the default origin.
pub fn resolve_api_base(page_origin: &str) -> api::Result<Url> {
    match endpoint::resolve_base_url(page_origin) {
        Ok(url) => Ok(url),
        Err(e) => {
            warn!(error = %e, fallback = DEFAULT_PAGE_ORIGIN, "Invalid page origin");
            endpoint::resolve_base_url(DEFAULT_PAGE_ORIGIN)
        }
    }
}

/// Build the shared API client for the configured page origin.
pub fn build_client(page_origin: &str) -> api::Result<ApiClient> {
    let base = resolve_api_base(page_origin)?;
    info!(base = %base, origin = page_origin, "API endpoint resolved");
    Ok(ApiClient::new(base))
}

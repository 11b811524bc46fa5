//! API base resolution from the page origin

use super::error::{Error, Result};
use crate::constants::{LOCAL_API_ROOT, LOCAL_HOSTNAME, RELATIVE_API_ROOT};
use reqwest::Url;

/// API root for the given page hostname. `None` means no page context.
pub fn api_root(hostname: Option<&str>) -> &'static str {
    match hostname {
        Some(LOCAL_HOSTNAME) => LOCAL_API_ROOT,
        _ => RELATIVE_API_ROOT,
    }
}

/// Absolute API base URL for a page origin such as `http://localhost:3000`.
pub fn resolve_base_url(origin: &str) -> Result<Url> {
    let origin_url = Url::parse(origin).map_err(|e| Error::InvalidOrigin {
        origin: origin.to_string(),
        message: e.to_string(),
    })?;
    let root = api_root(origin_url.host_str());

    origin_url.join(root).map_err(|e| Error::InvalidOrigin {
        origin: origin.to_string(),
        message: e.to_string(),
    })
}

//! Application constants and configuration

pub const APP_NAME: &str = "Note CRUD Tester";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// API root used when the page origin is the loopback dev host
pub const LOCAL_API_ROOT: &str = "http://localhost:8000/api";
/// API root resolved against the page origin (reverse proxy / rewrite rule)
pub const RELATIVE_API_ROOT: &str = "/api";
/// Hostname that selects the local dev API
pub const LOCAL_HOSTNAME: &str = "localhost";
pub const DEFAULT_PAGE_ORIGIN: &str = "http://localhost:3000";

pub const NOTES_PATH: &str = "/notes";
pub const HELLO_PATH: &str = "/hello";

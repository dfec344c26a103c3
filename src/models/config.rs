//! Configuration model loaded from external sources.

use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    pub domain: String,
    pub address: String,
    pub port: u16,
    /// Base URL of the platform REST backend, without a trailing slash.
    pub api_base_url: String,
    /// Service token attached as a bearer header to backend calls.
    pub api_token: Option<String>,
    pub templates_dir: String,
    pub secret: String,
    pub auth_service_url: String,
    /// Default cache TTL in seconds for queries without a dedicated interval.
    #[serde(default = "default_cache_ttl_secs")]
    pub cache_ttl_secs: u64,
}

fn default_cache_ttl_secs() -> u64 {
    60
}

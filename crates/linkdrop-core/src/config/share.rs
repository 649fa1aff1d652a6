//! Share link configuration.

use serde::{Deserialize, Serialize};

/// Settings governing how share links are minted and bounded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShareConfig {
    /// Externally reachable base URL; share links are `{base}/{token}`.
    #[serde(default = "default_public_base_url")]
    pub public_base_url: String,
    /// Number of alphanumeric characters in a generated token.
    #[serde(default = "default_token_length")]
    pub token_length: usize,
    /// TTL applied when a registration omits `ttl`.
    #[serde(default = "default_ttl_minutes")]
    pub default_ttl_minutes: u32,
    /// Quota applied when a registration omits `maxDownloads`.
    #[serde(default = "default_max_downloads")]
    pub default_max_downloads: u32,
    /// Upper bound for a requested TTL.
    #[serde(default = "default_max_ttl_minutes")]
    pub max_ttl_minutes: u32,
    /// Base directory scanned by `GET /listRoots`.
    #[serde(default = "default_roots_base")]
    pub roots_base: String,
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self {
            public_base_url: default_public_base_url(),
            token_length: default_token_length(),
            default_ttl_minutes: default_ttl_minutes(),
            default_max_downloads: default_max_downloads(),
            max_ttl_minutes: default_max_ttl_minutes(),
            roots_base: default_roots_base(),
        }
    }
}

impl ShareConfig {
    /// Builds the public share URL for a token.
    pub fn share_url(&self, token: &str) -> String {
        format!("{}/{}", self.public_base_url.trim_end_matches('/'), token)
    }
}

fn default_public_base_url() -> String {
    "http://127.0.0.1:8080".to_string()
}

fn default_token_length() -> usize {
    24
}

fn default_ttl_minutes() -> u32 {
    20
}

fn default_max_downloads() -> u32 {
    1
}

fn default_max_ttl_minutes() -> u32 {
    7 * 24 * 60
}

fn default_roots_base() -> String {
    "/srv".to_string()
}

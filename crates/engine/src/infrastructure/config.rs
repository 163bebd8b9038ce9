//! Runtime configuration from environment variables.

use std::path::PathBuf;

use url::Url;
use zonedex_domain::{SpriteUrls, DEFAULT_ANIMATED_SPRITE_BASE_URL, DEFAULT_SPRITE_BASE_URL};

use crate::infrastructure::catalog_file::DEFAULT_CATALOG_PATH;
use crate::infrastructure::pokeapi::{DEFAULT_HTTP_TIMEOUT_SECS, DEFAULT_POKEAPI_BASE_URL};
use crate::infrastructure::storage::FileStorage;

/// Engine configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub sprite_base_url: String,
    pub animated_sprite_base_url: String,
    pub catalog_path: PathBuf,
    pub storage_path: PathBuf,
    pub http_timeout_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_POKEAPI_BASE_URL.to_string(),
            sprite_base_url: DEFAULT_SPRITE_BASE_URL.to_string(),
            animated_sprite_base_url: DEFAULT_ANIMATED_SPRITE_BASE_URL.to_string(),
            catalog_path: PathBuf::from(DEFAULT_CATALOG_PATH),
            storage_path: FileStorage::default_path(),
            http_timeout_secs: DEFAULT_HTTP_TIMEOUT_SECS,
        }
    }
}

impl AppConfig {
    /// Create configuration from environment variables.
    ///
    /// Uses the `ZONEDEX_*` variables, falling back to defaults if not set.
    /// Invalid URLs and timeouts are logged and replaced by their defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let var = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let http_timeout_secs = match var("ZONEDEX_HTTP_TIMEOUT_SECS") {
            Some(raw) => match raw.parse::<u64>() {
                Ok(secs) if secs > 0 => secs,
                _ => {
                    tracing::warn!(value = %raw, "Invalid ZONEDEX_HTTP_TIMEOUT_SECS, using default");
                    defaults.http_timeout_secs
                }
            },
            None => defaults.http_timeout_secs,
        };

        Self {
            api_base_url: url_or_default(
                "ZONEDEX_API_BASE_URL",
                var("ZONEDEX_API_BASE_URL"),
                defaults.api_base_url,
            ),
            sprite_base_url: url_or_default(
                "ZONEDEX_SPRITE_BASE_URL",
                var("ZONEDEX_SPRITE_BASE_URL"),
                defaults.sprite_base_url,
            ),
            animated_sprite_base_url: url_or_default(
                "ZONEDEX_ANIMATED_SPRITE_BASE_URL",
                var("ZONEDEX_ANIMATED_SPRITE_BASE_URL"),
                defaults.animated_sprite_base_url,
            ),
            catalog_path: var("ZONEDEX_CATALOG_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.catalog_path),
            storage_path: var("ZONEDEX_STORAGE_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.storage_path),
            http_timeout_secs,
        }
    }

    pub fn sprite_urls(&self) -> SpriteUrls {
        SpriteUrls::new(&self.sprite_base_url, &self.animated_sprite_base_url)
    }
}

fn url_or_default(key: &str, value: Option<String>, default: String) -> String {
    match value {
        Some(raw) => match Url::parse(&raw) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => raw,
            _ => {
                tracing::warn!(variable = key, value = %raw, "Invalid URL, using default");
                default
            }
        },
        None => default,
    }
}

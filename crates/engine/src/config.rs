//! Engine configuration loaded from the environment.

use std::env;
use std::path::PathBuf;

use chrono::Duration;

use crate::infrastructure::pokeapi::{DEFAULT_HTTP_TIMEOUT_SECS, DEFAULT_POKEAPI_BASE_URL};
use crate::infrastructure::resources::DEFAULT_CACHE_TTL_DAYS;
use crate::use_cases::name_index::DEFAULT_LIST_PAGE_SIZE;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Remote data source base URL
    pub base_url: String,
    /// SQLite file for the durable cache tier; `None` keeps it in memory
    pub cache_db: Option<PathBuf>,
    /// Durable and fast tier time-to-live (days)
    pub cache_ttl_days: i64,
    /// Per-request HTTP timeout (seconds)
    pub http_timeout_secs: u64,
    /// Page size when walking the creature listing
    pub list_page_size: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_POKEAPI_BASE_URL.to_string(),
            cache_db: None,
            cache_ttl_days: DEFAULT_CACHE_TTL_DAYS,
            http_timeout_secs: DEFAULT_HTTP_TIMEOUT_SECS,
            list_page_size: DEFAULT_LIST_PAGE_SIZE,
        }
    }
}

impl EngineConfig {
    /// Cache time-to-live, `None` when `cache_ttl_days` is out of range.
    pub fn cache_ttl(&self) -> Option<Duration> {
        Duration::try_days(self.cache_ttl_days).filter(|ttl| *ttl > Duration::zero())
    }

    /// Load configuration from environment variables. Unset or unparsable
    /// values fall back to the defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let var = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        Self {
            base_url: var("DEXERA_BASE_URL").unwrap_or(defaults.base_url),
            cache_db: var("DEXERA_CACHE_DB").map(PathBuf::from),
            cache_ttl_days: var("DEXERA_CACHE_TTL_DAYS")
                .and_then(|v| v.parse().ok())
                .filter(|days| *days > 0 && Duration::try_days(*days).is_some())
                .unwrap_or(defaults.cache_ttl_days),
            http_timeout_secs: var("DEXERA_HTTP_TIMEOUT_SECS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.http_timeout_secs),
            list_page_size: var("DEXERA_LIST_PAGE_SIZE")
                .and_then(|v| v.parse().ok())
                .filter(|size| *size > 0)
                .unwrap_or(defaults.list_page_size),
        }
    }
}

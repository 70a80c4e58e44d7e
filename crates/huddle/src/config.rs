use std::{env, str::FromStr, time::Duration};

use huddle_core::cache::CacheFaultPolicy;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Cache TTL in seconds (default: 300)
    pub cache_ttl_seconds: u64,
    /// Maximum number of cache entries (default: 10,000)
    pub cache_max_entries: usize,
    /// What a cache fault does to the request (default: degrade)
    pub cache_fault_policy: CacheFaultPolicy,
    /// Path to SQLite database file (default: "huddle.db")
    /// Note: Only used when the `sqlite` feature is enabled.
    #[allow(dead_code)]
    pub sqlite_path: String,
    /// Redis connection URL (default: "redis://localhost:6379")
    /// Note: Only used when the `redis` feature is enabled.
    #[allow(dead_code)]
    pub redis_url: String,
    /// Requests allowed per client IP within one window (default: 100)
    pub rate_limit_max: u32,
    /// Rate limit window in seconds (default: 900)
    pub rate_limit_window_seconds: u64,
    /// Per-request timeout in seconds (default: 10)
    pub request_timeout_seconds: u64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `CACHE_TTL_SECONDS` - Cache TTL in seconds (default: 300)
    /// - `CACHE_MAX_ENTRIES` - Maximum cache entries (default: 10,000)
    /// - `CACHE_FAULT_POLICY` - `degrade` or `fail` (default: degrade)
    /// - `SQLITE_PATH` - SQLite database path (default: "huddle.db")
    /// - `REDIS_URL` - Redis connection URL (default: "redis://localhost:6379")
    /// - `RATE_LIMIT_MAX` - Requests per window and client (default: 100)
    /// - `RATE_LIMIT_WINDOW_SECONDS` - Rate limit window (default: 900)
    /// - `REQUEST_TIMEOUT_SECONDS` - Request timeout (default: 10)
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// Unparseable values fall back to their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        fn parsed<T: FromStr>(value: Option<String>, default: T) -> T {
            value.and_then(|v| v.parse().ok()).unwrap_or(default)
        }

        Self {
            cache_ttl_seconds: parsed(lookup("CACHE_TTL_SECONDS"), 300),
            cache_max_entries: parsed(lookup("CACHE_MAX_ENTRIES"), 10_000),
            cache_fault_policy: parsed(lookup("CACHE_FAULT_POLICY"), CacheFaultPolicy::default()),
            sqlite_path: lookup("SQLITE_PATH").unwrap_or_else(|| "huddle.db".to_string()),
            redis_url: lookup("REDIS_URL")
                .unwrap_or_else(|| "redis://localhost:6379".to_string()),
            rate_limit_max: parsed(lookup("RATE_LIMIT_MAX"), 100),
            rate_limit_window_seconds: parsed(lookup("RATE_LIMIT_WINDOW_SECONDS"), 900),
            request_timeout_seconds: parsed(lookup("REQUEST_TIMEOUT_SECONDS"), 10),
        }
    }

    /// Get cache TTL as a Duration.
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_seconds)
    }

    /// Get the rate limit window as a Duration (at least one second).
    pub fn rate_limit_window(&self) -> Duration {
        Duration::from_secs(self.rate_limit_window_seconds.max(1))
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

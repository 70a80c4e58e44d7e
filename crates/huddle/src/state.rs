//! Application state.
//!
//! Holds the event service and the rate limiter shared by every request
//! handler. The storage and cache backends behind the service are chosen at
//! compile time via feature flags.

use std::sync::Arc;

use huddle_core::cache::Cache;
use huddle_core::storage::Store;

use crate::{
    cache::ReadThroughCache, config::Config, rate_limit::RateLimiter, service::EventService,
};

/// Shared application state.
///
/// Cloned for each request handler; everything inside is reference counted.
#[derive(Clone)]
pub struct AppState {
    /// Event and RSVP operations.
    pub events: Arc<EventService>,
    /// Per-client limiter for the `/api` routes.
    pub rate_limiter: RateLimiter,
}

impl AppState {
    /// Wires the service over the given store and cache.
    fn build(store: Arc<dyn Store>, cache: Arc<dyn Cache>, config: &Config) -> Self {
        let read_through =
            ReadThroughCache::new(cache, config.cache_ttl(), config.cache_fault_policy);

        tracing::debug!(
            ttl_seconds = config.cache_ttl_seconds,
            fault_policy = %config.cache_fault_policy,
            "Cache layer configured"
        );

        Self {
            events: Arc::new(EventService::new(store, read_through)),
            rate_limiter: RateLimiter::from_config(config),
        }
    }
}

/// Creates the Redis cache and checks that it answers.
///
/// Under the `degrade` policy an unreachable server is logged and the cache
/// keeps retrying on later calls. Under `fail` it aborts start-up.
#[cfg(feature = "redis")]
async fn connect_redis(config: &Config) -> Result<Arc<crate::cache::RedisCache>, anyhow::Error> {
    use huddle_core::cache::CacheFaultPolicy;

    let cache = crate::cache::RedisCache::new(&config.redis_url)?;
    if let Err(e) = cache.ping().await {
        match config.cache_fault_policy {
            CacheFaultPolicy::Degrade => {
                tracing::warn!(error = %e, url = %config.redis_url, "Redis unreachable, starting without cache");
            }
            CacheFaultPolicy::Fail => return Err(e.into()),
        }
    }
    Ok(Arc::new(cache))
}

// ============================================================================
// Factory functions for different backend combinations
// ============================================================================

#[cfg(all(feature = "sqlite", feature = "memory"))]
mod sqlite_memory {
    use super::*;
    use crate::cache::MemoryCache;
    use crate::storage::SqliteRepository;

    impl AppState {
        /// Creates AppState with SQLite storage and in-memory cache.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let store = Arc::new(SqliteRepository::new(&config.sqlite_path).await?);
            let cache = Arc::new(MemoryCache::new(config.cache_max_entries));

            tracing::info!(path = %config.sqlite_path, "Using SQLite storage with in-memory cache");
            Ok(Self::build(store, cache, config))
        }
    }
}

#[cfg(all(feature = "sqlite", feature = "redis"))]
mod sqlite_redis {
    use super::*;
    use crate::storage::SqliteRepository;

    impl AppState {
        /// Creates AppState with SQLite storage and Redis cache.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let store = Arc::new(SqliteRepository::new(&config.sqlite_path).await?);
            let cache = connect_redis(config).await?;

            tracing::info!(path = %config.sqlite_path, "Using SQLite storage with Redis cache");
            Ok(Self::build(store, cache, config))
        }
    }
}

#[cfg(all(feature = "inmemory", feature = "memory"))]
mod inmemory_memory {
    use super::*;
    use crate::cache::MemoryCache;
    use crate::storage::InMemoryRepository;

    impl AppState {
        /// Creates AppState with in-memory storage and cache.
        /// Useful for local development without any external dependencies.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let store = Arc::new(InMemoryRepository::new());
            let cache = Arc::new(MemoryCache::new(config.cache_max_entries));

            tracing::info!("Using in-memory storage with in-memory cache");
            Ok(Self::build(store, cache, config))
        }
    }
}

#[cfg(all(feature = "inmemory", feature = "redis"))]
mod inmemory_redis {
    use super::*;
    use crate::storage::InMemoryRepository;

    impl AppState {
        /// Creates AppState with in-memory storage and Redis cache.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let store = Arc::new(InMemoryRepository::new());
            let cache = connect_redis(config).await?;

            tracing::info!("Using in-memory storage with Redis cache");
            Ok(Self::build(store, cache, config))
        }
    }
}

// ============================================================================
// Test support
// ============================================================================

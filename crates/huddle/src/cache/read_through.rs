//! Read-through caching and mutation-driven invalidation.
//!
//! Reads check the cache first and fill it from the store on a miss. Writes
//! delete the keys their [`Mutation`] declares once the store has committed.
//! What a cache fault does is decided by the configured [`CacheFaultPolicy`].

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Serialize;

use huddle_core::cache::{deserialize, serialize, Cache, CacheError, CacheFaultPolicy, Mutation};

#[derive(Clone)]
pub struct ReadThroughCache {
    cache: Arc<dyn Cache>,
    ttl: Duration,
    policy: CacheFaultPolicy,
}

impl ReadThroughCache {
    pub fn new(cache: Arc<dyn Cache>, ttl: Duration, policy: CacheFaultPolicy) -> Self {
        Self { cache, ttl, policy }
    }

    /// Returns the cached value for `key`, or runs `fetch` and caches its result.
    ///
    /// Errors from `fetch` are returned as-is and never cached. A cached value
    /// that no longer deserializes counts as a miss.
    pub async fn get_or_fetch<T, E, F, Fut>(&self, key: &str, fetch: F) -> Result<T, E>
    where
        T: Serialize + DeserializeOwned,
        E: From<CacheError>,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        match self.cache.get(key).await {
            Ok(Some(bytes)) => match deserialize::<T>(&bytes) {
                Ok(value) => {
                    tracing::trace!(key, "Cache hit");
                    return Ok(value);
                }
                Err(err) => {
                    tracing::warn!(key, error = %err, "Cached value unreadable, treating as miss");
                }
            },
            Ok(None) => tracing::trace!(key, "Cache miss"),
            Err(err) => self.on_fault("get", key, err)?,
        }

        let value = fetch().await?;

        match serialize(&value) {
            Ok(bytes) => {
                if let Err(err) = self.cache.set(key, &bytes, Some(self.ttl)).await {
                    self.on_fault("set", key, err)?;
                }
            }
            Err(err) => tracing::warn!(key, error = %err, "Failed to serialize value for cache"),
        }

        Ok(value)
    }

    /// Deletes every key made stale by `mutation`.
    ///
    /// All keys are attempted even when one delete fails; the first failure is
    /// returned under the `fail` policy.
    pub async fn invalidate(&self, mutation: Mutation) -> Result<(), CacheError> {
        let mut first_error = None;

        for key in mutation.invalidated_keys() {
            if let Err(err) = self.cache.delete(&key).await {
                if let Err(err) = self.on_fault("delete", &key, err) {
                    first_error.get_or_insert(err);
                }
            }
        }

        match first_error {
            Some(err) => Err(err),
            None => {
                tracing::trace!(?mutation, "Cache invalidated");
                Ok(())
            }
        }
    }

    pub async fn ping(&self) -> Result<(), CacheError> {
        self.cache.ping().await
    }

    fn on_fault(&self, operation: &'static str, key: &str, err: CacheError) -> Result<(), CacheError> {
        if self.policy.is_fatal() {
            tracing::error!(operation, key, error = %err, "Cache fault");
            Err(err)
        } else {
            tracing::warn!(operation, key, error = %err, "Cache fault, bypassing cache");
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use huddle_core::cache::{event_key, event_rsvp_count_key, events_list_key};
    use uuid::Uuid;

    use crate::cache::testing::MockCache;

    #[derive(Debug, PartialEq, thiserror::Error)]
    enum TestError {
        #[error("store down")]
        Store,
        #[error(transparent)]
        Cache(#[from] CacheError),
    }

    fn layer(cache: Arc<MockCache>, policy: CacheFaultPolicy) -> ReadThroughCache {
        ReadThroughCache::new(cache, Duration::from_secs(300), policy)
    }

    #[tokio::test]
    async fn test_miss_fetches_and_populates() {
        let cache = Arc::new(MockCache::new());
        let rtc = layer(cache.clone(), CacheFaultPolicy::Degrade);
        let fetches = AtomicUsize::new(0);
        let counter = &fetches;

        let value: Vec<u32> = rtc
            .get_or_fetch("events:list", move || async move {
                counter.fetch_add(1, Ordering::SeqCst);
                Ok::<_, TestError>(vec![1, 2, 3])
            })
            .await
            .unwrap();

        assert_eq!(value, vec![1, 2, 3]);
        assert_eq!(fetches.load(Ordering::SeqCst), 1);
        assert!(cache.contains("events:list").await);
    }

    #[tokio::test]
    async fn test_hit_skips_fetch() {
        let cache = Arc::new(MockCache::new());
        cache.insert_raw("events:list", b"[7]").await;
        let rtc = layer(cache.clone(), CacheFaultPolicy::Degrade);
        let fetches = AtomicUsize::new(0);
        let counter = &fetches;

        let value: Vec<u32> = rtc
            .get_or_fetch("events:list", move || async move {
                counter.fetch_add(1, Ordering::SeqCst);
                Ok::<_, TestError>(vec![])
            })
            .await
            .unwrap();

        assert_eq!(value, vec![7]);
        assert_eq!(fetches.load(Ordering::SeqCst), 0);
        assert_eq!(MockCache::count(&cache.sets), 0);
    }

    #[tokio::test]
    async fn test_unreadable_entry_is_a_miss() {
        let cache = Arc::new(MockCache::new());
        cache.insert_raw("events:list", b"not json").await;
        let rtc = layer(cache.clone(), CacheFaultPolicy::Fail);

        let value: Vec<u32> = rtc
            .get_or_fetch("events:list", || async { Ok::<_, TestError>(vec![4]) })
            .await
            .unwrap();

        assert_eq!(value, vec![4]);
        assert_eq!(MockCache::count(&cache.sets), 1);
    }

    #[tokio::test]
    async fn test_fetch_error_is_not_cached() {
        let cache = Arc::new(MockCache::new());
        let rtc = layer(cache.clone(), CacheFaultPolicy::Degrade);

        let result: Result<Vec<u32>, _> = rtc
            .get_or_fetch("events:list", || async { Err(TestError::Store) })
            .await;

        assert_eq!(result, Err(TestError::Store));
        assert!(!cache.contains("events:list").await);
    }

    #[tokio::test]
    async fn test_degrade_policy_bypasses_failing_cache() {
        let cache = Arc::new(MockCache::failing());
        let rtc = layer(cache.clone(), CacheFaultPolicy::Degrade);

        let value: Vec<u32> = rtc
            .get_or_fetch("events:list", || async { Ok::<_, TestError>(vec![1]) })
            .await
            .unwrap();

        assert_eq!(value, vec![1]);
        assert_eq!(MockCache::count(&cache.gets), 1);
        assert_eq!(MockCache::count(&cache.sets), 1);
    }

    #[tokio::test]
    async fn test_fail_policy_surfaces_cache_fault_on_read() {
        let cache = Arc::new(MockCache::failing());
        let rtc = layer(cache, CacheFaultPolicy::Fail);

        let result: Result<Vec<u32>, _> = rtc
            .get_or_fetch("events:list", || async { Ok::<_, TestError>(vec![1]) })
            .await;

        assert!(matches!(result, Err(TestError::Cache(CacheError::ConnectionFailed(_)))));
    }

    #[tokio::test]
    async fn test_store_error_wins_over_cache_fault() {
        let cache = Arc::new(MockCache::failing());
        let rtc = layer(cache, CacheFaultPolicy::Degrade);

        let result: Result<Vec<u32>, _> = rtc
            .get_or_fetch("events:list", || async { Err(TestError::Store) })
            .await;

        assert_eq!(result, Err(TestError::Store));
    }

    #[tokio::test]
    async fn test_invalidate_deletes_declared_keys() {
        let cache = Arc::new(MockCache::new());
        let rtc = layer(cache.clone(), CacheFaultPolicy::Degrade);
        let id = Uuid::new_v4();

        rtc.invalidate(Mutation::EventDeleted { event_id: id })
            .await
            .unwrap();

        assert_eq!(
            cache.deleted_keys().await,
            vec![event_key(id), events_list_key(), event_rsvp_count_key(id)]
        );
    }

    #[tokio::test]
    async fn test_invalidate_degrades_on_fault() {
        let cache = Arc::new(MockCache::failing());
        let rtc = layer(cache.clone(), CacheFaultPolicy::Degrade);

        assert!(rtc.invalidate(Mutation::EventCreated).await.is_ok());
    }

    #[tokio::test]
    async fn test_invalidate_fail_policy_attempts_every_key() {
        let cache = Arc::new(MockCache::failing());
        let rtc = layer(cache.clone(), CacheFaultPolicy::Fail);

        let result = rtc
            .invalidate(Mutation::RsvpSubmitted {
                event_id: Uuid::new_v4(),
            })
            .await;

        assert!(result.is_err());
        assert_eq!(MockCache::count(&cache.deletes), 3);
    }
}

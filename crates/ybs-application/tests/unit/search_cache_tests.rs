//! Tests for the failure-isolating cache gateway

use std::sync::Arc;
use std::time::{Duration, Instant};

use ybs_application::{CacheLookup, InvalidationOutcome, SearchCache};
use ybs_domain::ports::{CacheEntryConfig, CacheProvider};
use ybs_domain::value_objects::{CachedResults, SearchResult};
use ybs_providers::cache::MokaCacheProvider;

use crate::test_utils::{FailingCache, HangingCache};

fn cached(n: usize) -> CachedResults {
    CachedResults {
        limit: n,
        results: (0..n)
            .map(|rank| SearchResult {
                id: format!("id-{rank}"),
                name: format!("Name {rank}"),
                summary: String::new(),
                similarity: 1.0 - rank as f64 / 10.0,
                rank,
            })
            .collect(),
    }
}

#[tokio::test]
async fn disabled_cache_misses_and_reports_disabled() {
    let cache = SearchCache::disabled();

    assert!(!cache.is_enabled());
    assert_eq!(cache.provider_name(), None);
    assert_eq!(cache.lookup("ai-search:x").await, CacheLookup::Miss);
    cache.store("ai-search:x", &cached(1)).await;

    let outcome = cache.invalidate(None).await;
    assert_eq!(outcome, InvalidationOutcome::Disabled);
    assert!(outcome.message().contains("disabled"));
}

#[tokio::test]
async fn store_then_lookup_hits() {
    let cache = SearchCache::new(Arc::new(MokaCacheProvider::new()));
    let value = cached(3);

    cache.store("ai-search:coffee", &value).await;

    assert_eq!(cache.lookup("ai-search:coffee").await, CacheLookup::Hit(value));
    assert_eq!(cache.provider_name(), Some("moka"));
}

#[tokio::test]
async fn undecodable_entry_is_a_miss() {
    let provider = Arc::new(MokaCacheProvider::new());
    provider
        .set("ai-search:bad", "not json", CacheEntryConfig::default())
        .await
        .expect("set");
    let cache = SearchCache::new(provider);

    assert_eq!(cache.lookup("ai-search:bad").await, CacheLookup::Miss);
}

#[tokio::test]
async fn failing_backend_is_unavailable_not_an_error() {
    let cache = SearchCache::new(Arc::new(FailingCache));

    assert_eq!(cache.lookup("ai-search:x").await, CacheLookup::Unavailable);
    cache.store("ai-search:x", &cached(1)).await;
    assert_eq!(
        cache.invalidate(Some("x")).await,
        InvalidationOutcome::Unavailable
    );
    assert_eq!(cache.invalidate(None).await, InvalidationOutcome::Unavailable);
}

#[tokio::test]
async fn hanging_backend_is_bounded_by_timeout() {
    let cache =
        SearchCache::new(Arc::new(HangingCache)).with_timeout(Duration::from_millis(50));
    let started = Instant::now();

    assert_eq!(cache.lookup("ai-search:x").await, CacheLookup::Unavailable);
    cache.store("ai-search:x", &cached(1)).await;
    assert_eq!(cache.invalidate(None).await, InvalidationOutcome::Unavailable);

    assert!(started.elapsed() < Duration::from_secs(5));
}

#[tokio::test]
async fn entries_expire_with_configured_ttl() {
    let cache = SearchCache::new(Arc::new(MokaCacheProvider::new()))
        .with_ttl(Duration::from_millis(50));

    cache.store("ai-search:tea", &cached(1)).await;
    tokio::time::sleep(Duration::from_millis(150)).await;

    assert_eq!(cache.lookup("ai-search:tea").await, CacheLookup::Miss);
}

#[tokio::test]
async fn single_query_invalidation_uses_trimmed_key() {
    let provider = Arc::new(MokaCacheProvider::new());
    let cache = SearchCache::new(provider.clone());
    cache.store("ai-search:coffee", &cached(1)).await;

    let outcome = cache.invalidate(Some("  coffee  ")).await;

    assert_eq!(
        outcome,
        InvalidationOutcome::KeyCleared {
            query: "coffee".to_string(),
            removed: true
        }
    );
    assert_eq!(outcome.message(), "Cache cleared for query: coffee");
    assert_eq!(provider.get("ai-search:coffee").await.expect("get"), None);
}

#[tokio::test]
async fn invalidating_absent_query_still_succeeds() {
    let cache = SearchCache::new(Arc::new(MokaCacheProvider::new()));

    let outcome = cache.invalidate(Some("never searched")).await;

    assert_eq!(
        outcome,
        InvalidationOutcome::KeyCleared {
            query: "never searched".to_string(),
            removed: false
        }
    );
}

#[tokio::test]
async fn clearing_all_only_touches_search_keys() {
    let provider = Arc::new(MokaCacheProvider::new());
    let config = CacheEntryConfig::default();
    provider.set("session:abc", "keep", config).await.expect("set");
    let cache = SearchCache::new(provider.clone());
    cache.store("ai-search:a", &cached(1)).await;
    cache.store("ai-search:b", &cached(2)).await;

    let outcome = cache.invalidate(Some("   ")).await;

    assert_eq!(outcome, InvalidationOutcome::AllCleared { removed: 2 });
    assert_eq!(outcome.message(), "All cache cleared (2 entries)");
    assert_eq!(
        provider.get("session:abc").await.expect("get").as_deref(),
        Some("keep")
    );
}

#[tokio::test]
async fn clearing_empty_cache_reports_zero() {
    let cache = SearchCache::new(Arc::new(MokaCacheProvider::new()));
    assert_eq!(
        cache.invalidate(None).await,
        InvalidationOutcome::AllCleared { removed: 0 }
    );
}

#[test]
fn from_option_respects_absence() {
    assert!(!SearchCache::from_option(None).is_enabled());
    let provider: Arc<dyn CacheProvider> = Arc::new(MokaCacheProvider::new());
    assert!(SearchCache::from_option(Some(provider)).is_enabled());
}

//! Tests for the Moka in-memory cache provider

use std::time::Duration;

use ybs_domain::ports::{CacheEntryConfig, CacheProvider};
use ybs_providers::cache::MokaCacheProvider;

#[tokio::test]
async fn set_then_get_returns_value() {
    let cache = MokaCacheProvider::new();
    cache
        .set("ai-search:coffee", "[1]", CacheEntryConfig::default())
        .await
        .expect("set");

    assert_eq!(
        cache.get("ai-search:coffee").await.expect("get").as_deref(),
        Some("[1]")
    );
    assert_eq!(cache.get("ai-search:tea").await.expect("get"), None);
}

#[tokio::test]
async fn overwrite_replaces_value() {
    let cache = MokaCacheProvider::new();
    let config = CacheEntryConfig::default();
    cache.set("k", "old", config).await.expect("set");
    cache.set("k", "new", config).await.expect("set");

    assert_eq!(cache.get("k").await.expect("get").as_deref(), Some("new"));
}

#[tokio::test]
async fn entries_expire_after_their_ttl() {
    let cache = MokaCacheProvider::new();
    cache
        .set(
            "short",
            "v",
            CacheEntryConfig::new().with_ttl(Duration::from_millis(50)),
        )
        .await
        .expect("set");
    cache
        .set("long", "v", CacheEntryConfig::new().with_ttl_secs(60))
        .await
        .expect("set");

    tokio::time::sleep(Duration::from_millis(150)).await;

    assert_eq!(cache.get("short").await.expect("get"), None);
    assert_eq!(cache.get("long").await.expect("get").as_deref(), Some("v"));
}

#[tokio::test]
async fn delete_reports_whether_key_existed() {
    let cache = MokaCacheProvider::new();
    cache
        .set("k", "v", CacheEntryConfig::default())
        .await
        .expect("set");

    assert!(cache.delete("k").await.expect("delete"));
    assert!(!cache.delete("k").await.expect("delete"));
    assert_eq!(cache.get("k").await.expect("get"), None);
}

#[tokio::test]
async fn delete_by_prefix_leaves_other_keys() {
    let cache = MokaCacheProvider::new();
    let config = CacheEntryConfig::default();
    cache.set("ai-search:a", "1", config).await.expect("set");
    cache.set("ai-search:b", "2", config).await.expect("set");
    cache.set("session:a", "3", config).await.expect("set");

    let removed = cache.delete_by_prefix("ai-search:").await.expect("clear");

    assert_eq!(removed, 2);
    assert_eq!(cache.get("ai-search:a").await.expect("get"), None);
    assert_eq!(cache.get("ai-search:b").await.expect("get"), None);
    assert_eq!(
        cache.get("session:a").await.expect("get").as_deref(),
        Some("3")
    );
}

#[tokio::test]
async fn delete_by_prefix_on_empty_cache_is_zero() {
    let cache = MokaCacheProvider::with_capacity(10);
    assert_eq!(cache.delete_by_prefix("ai-search:").await.expect("clear"), 0);
    assert_eq!(cache.max_entries(), 10);
}

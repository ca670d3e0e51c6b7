//! Tests for the null cache provider

use ybs_domain::ports::{CacheEntryConfig, CacheProvider};
use ybs_providers::cache::NullCacheProvider;

#[tokio::test]
async fn writes_are_forgotten() {
    let cache = NullCacheProvider::new();
    cache
        .set("ai-search:x", "[]", CacheEntryConfig::default())
        .await
        .expect("set");

    assert_eq!(cache.get("ai-search:x").await.expect("get"), None);
    assert!(!cache.delete("ai-search:x").await.expect("delete"));
    assert_eq!(cache.delete_by_prefix("ai-search:").await.expect("clear"), 0);
    assert_eq!(cache.provider_name(), "null");
}

//! Tests for MemoryCache

use std::time::Duration;

use crate::services::memory_cache::MemoryCache;
use crate::traits::KvCache;

#[tokio::test(start_paused = true)]
async fn test_entries_expire() {
    let cache = MemoryCache::new();
    cache.set("art:pool:tv:all", "[]".to_string(), Duration::from_secs(10)).await;
    assert_eq!(cache.get("art:pool:tv:all").await, Some("[]".to_string()));

    tokio::time::advance(Duration::from_secs(11)).await;
    assert_eq!(cache.get("art:pool:tv:all").await, None);
    assert!(cache.is_empty().await);
}

#[tokio::test]
async fn test_set_replaces_value() {
    let cache = MemoryCache::new();
    cache.set("k", "one".to_string(), Duration::from_secs(60)).await;
    cache.set("k", "two".to_string(), Duration::from_secs(60)).await;
    assert_eq!(cache.get("k").await, Some("two".to_string()));
    assert_eq!(cache.len().await, 1);
}

#[tokio::test]
async fn test_zero_ttl_removes_entry() {
    let cache = MemoryCache::new();
    cache.set("k", "v".to_string(), Duration::from_secs(60)).await;
    cache.set("k", "v".to_string(), Duration::ZERO).await;
    assert_eq!(cache.get("k").await, None);
}

#[tokio::test(start_paused = true)]
async fn test_del_counts_live_entries() {
    let cache = MemoryCache::new();
    cache.set("a", "1".to_string(), Duration::from_secs(5)).await;
    cache.set("b", "2".to_string(), Duration::from_secs(60)).await;
    tokio::time::advance(Duration::from_secs(6)).await;

    let removed = cache
        .del(&["a".to_string(), "b".to_string(), "missing".to_string()])
        .await;
    assert_eq!(removed, 1);
    assert!(cache.is_empty().await);
}

#[tokio::test(start_paused = true)]
async fn test_keys_are_sorted_and_live() {
    let cache = MemoryCache::new();
    cache.set("art:rotation:tv:all:1", "{}".to_string(), Duration::from_secs(1)).await;
    cache.set("art:pool:tv:all", "[]".to_string(), Duration::from_secs(60)).await;
    cache.set("art:pool:landscape:all", "[]".to_string(), Duration::from_secs(60)).await;

    tokio::time::advance(Duration::from_secs(2)).await;
    assert_eq!(cache.keys().await, vec!["art:pool:landscape:all", "art:pool:tv:all"]);
    assert_eq!(cache.purge_expired().await, 1);
}

#[tokio::test]
async fn test_clones_share_storage() {
    let cache = MemoryCache::new();
    let other = cache.clone();
    other.set("shared", "yes".to_string(), Duration::from_secs(60)).await;
    assert_eq!(cache.get("shared").await, Some("yes".to_string()));
}

#[tokio::test(start_paused = true)]
async fn test_janitor_purges_in_background() {
    let cache = MemoryCache::new();
    cache.set("short", "v".to_string(), Duration::from_secs(1)).await;
    let janitor = cache.spawn_janitor(Duration::from_secs(5));

    tokio::time::sleep(Duration::from_secs(6)).await;
    tokio::task::yield_now().await;

    let removed = cache.purge_expired().await;
    assert_eq!(removed, 0, "janitor should already have purged the entry");
    janitor.abort();
}

#[tokio::test(start_paused = true)]
async fn test_huge_ttl_is_clamped() {
    let cache = MemoryCache::new();
    cache.set("art:pool:tv:all", "[]".to_string(), Duration::MAX).await;
    cache.set("art:pool:portrait:all", "[]".to_string(), Duration::from_secs(u64::MAX)).await;

    tokio::time::advance(Duration::from_secs(365 * 24 * 60 * 60)).await;
    assert_eq!(cache.get("art:pool:tv:all").await, Some("[]".to_string()));
    assert_eq!(cache.get("art:pool:portrait:all").await, Some("[]".to_string()));
}

// ABOUTME: Tests for the TTL cache and the named server caches
// ABOUTME: Uses a paused tokio clock to move past TTL boundaries deterministically
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(missing_docs, clippy::unwrap_used)]

mod common;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use contrast_mcp_server::cache::{CacheConfig, CacheKey, CacheName, ServerCaches, TtlCache};

use common::{application, context_for, MockContrastApi, APP_ID, ORG_ID};

fn cache(ttl_secs: u64) -> TtlCache<CacheKey, Vec<String>> {
    TtlCache::new("test", Duration::from_secs(ttl_secs), 100)
}

async fn compute_counting(
    cache: &TtlCache<CacheKey, Vec<String>>,
    calls: &AtomicUsize,
) -> Result<Vec<String>, String> {
    cache
        .get_or_try_compute(CacheKey::org(ORG_ID), || async move {
            calls.fetch_add(1, Ordering::SeqCst);
            Ok(vec!["webgoat".to_owned()])
        })
        .await
}

#[tokio::test(start_paused = true)]
async fn test_compute_runs_once_within_ttl() {
    let cache = cache(300);
    let calls = AtomicUsize::new(0);

    let first = compute_counting(&cache, &calls).await.unwrap();
    tokio::time::advance(Duration::from_secs(299)).await;
    let second = compute_counting(&cache, &calls).await.unwrap();

    assert_eq!(first, second);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test(start_paused = true)]
async fn test_expired_entry_is_recomputed() {
    let cache = cache(300);
    let calls = AtomicUsize::new(0);

    compute_counting(&cache, &calls).await.unwrap();
    tokio::time::advance(Duration::from_secs(300)).await;
    assert!(cache.get(&CacheKey::org(ORG_ID)).await.is_none());

    compute_counting(&cache, &calls).await.unwrap();
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_invalidate_forces_recompute() {
    let cache = cache(300);
    let calls = AtomicUsize::new(0);

    compute_counting(&cache, &calls).await.unwrap();
    assert!(cache.invalidate(&CacheKey::org(ORG_ID)).await);
    assert!(!cache.invalidate(&CacheKey::org(ORG_ID)).await);

    compute_counting(&cache, &calls).await.unwrap();
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_failures_are_not_cached() {
    let cache = cache(300);
    let failed: Result<Vec<String>, String> = cache
        .get_or_try_compute(CacheKey::org(ORG_ID), || async { Err("boom".to_owned()) })
        .await;
    assert_eq!(failed, Err("boom".to_owned()));
    assert!(cache.is_empty().await);

    let calls = AtomicUsize::new(0);
    compute_counting(&cache, &calls).await.unwrap();
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_keys_are_independent() {
    let cache = cache(300);
    cache
        .insert(CacheKey::entity(ORG_ID, APP_ID), vec!["a".to_owned()])
        .await;
    cache
        .insert(CacheKey::entity(ORG_ID, "other"), vec!["b".to_owned()])
        .await;

    assert_eq!(cache.len().await, 2);
    assert_eq!(
        cache.get(&CacheKey::entity(ORG_ID, APP_ID)).await,
        Some(vec!["a".to_owned()])
    );
    assert!(cache.get(&CacheKey::org(ORG_ID)).await.is_none());
}

#[tokio::test]
async fn test_capacity_evicts_least_recently_used() {
    let cache: TtlCache<CacheKey, u32> = TtlCache::new("bounded", Duration::from_secs(60), 2);
    cache.insert(CacheKey::org("a"), 1).await;
    cache.insert(CacheKey::org("b"), 2).await;
    assert_eq!(cache.get(&CacheKey::org("a")).await, Some(1));
    cache.insert(CacheKey::org("c"), 3).await;

    assert_eq!(cache.len().await, 2);
    assert!(cache.get(&CacheKey::org("b")).await.is_none());
    assert_eq!(cache.get(&CacheKey::org("a")).await, Some(1));
}

#[tokio::test]
async fn test_concurrent_computes_do_not_corrupt_entries() {
    let cache = Arc::new(cache(300));
    let calls = Arc::new(AtomicUsize::new(0));

    let tasks: Vec<_> = (0..16)
        .map(|_| {
            let cache = cache.clone();
            let calls = calls.clone();
            tokio::spawn(async move { compute_counting(&cache, &calls).await })
        })
        .collect();

    for task in tasks {
        assert_eq!(task.await.unwrap().unwrap(), vec!["webgoat".to_owned()]);
    }
    assert!(calls.load(Ordering::SeqCst) >= 1);
    assert_eq!(cache.len().await, 1);
}

#[tokio::test]
async fn test_server_caches_invalidate_by_name() {
    let api = Arc::new(MockContrastApi::new().with_applications(vec![application(APP_ID, "WebGoat")]));
    let context = context_for(&api);

    context.applications().await.unwrap();
    context.applications().await.unwrap();
    assert_eq!(api.calls.list_applications.load(Ordering::SeqCst), 1);

    assert_eq!(context.caches().invalidate(CacheName::Applications).await, 1);
    assert_eq!(context.caches().invalidate(CacheName::Libraries).await, 0);

    context.applications().await.unwrap();
    assert_eq!(api.calls.list_applications.load(Ordering::SeqCst), 2);
}

#[test]
fn test_cache_names_parse() {
    assert_eq!("applications".parse::<CacheName>().unwrap(), CacheName::Applications);
    assert_eq!(
        " Library_Observations ".parse::<CacheName>().unwrap(),
        CacheName::LibraryObservations
    );
    assert!("vulnerabilities".parse::<CacheName>().is_err());
}

#[test]
fn test_default_cache_config() {
    let config = CacheConfig::default();
    assert_eq!(config.applications_ttl, Duration::from_secs(300));
    assert_eq!(config.libraries_ttl, Duration::from_secs(600));
    assert_eq!(config.max_entries, 500_000);

    let caches = ServerCaches::new(&config);
    assert_eq!(caches.applications.ttl(), Duration::from_secs(300));
    assert_eq!(caches.library_observations.name(), "library_observations");
}

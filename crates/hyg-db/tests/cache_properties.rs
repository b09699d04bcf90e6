//! Read-through cache behaviour observed through the service.
//!
//! - Repeated reads within the TTL hit the backend once
//! - Writes and deletes force a refetch regardless of TTL
//! - TTL expiry forces a refetch
//! - Backend failures degrade the listing without touching the cache

mod common;

use chrono::Duration;
use pretty_assertions::assert_eq;

use hyg_core::enums::Collection;
use hyg_db::cache::{CacheKey, CacheLookup};

use common::{fake_service, inspector_session};

#[tokio::test]
async fn reads_within_ttl_query_once() {
    let (svc, clock) = fake_service();
    let mut ctx = inspector_session();
    svc.add_journal_entry(&mut ctx, "Relève").await.unwrap();

    let first = svc.list_recent(&mut ctx, Collection::Journal, Some(10)).await;
    clock.advance(Duration::seconds(29));
    let second = svc.list_recent(&mut ctx, Collection::Journal, Some(10)).await;

    assert_eq!(svc.repo().top_queries(), 1);
    assert_eq!(first.records, second.records);
}

#[tokio::test]
async fn write_between_reads_forces_refetch() {
    let (svc, _) = fake_service();
    let mut ctx = inspector_session();

    let empty = svc.list_recent(&mut ctx, Collection::Journal, Some(10)).await;
    assert!(empty.records.is_empty());

    svc.add_journal_entry(&mut ctx, "Gants commandés").await.unwrap();
    let after = svc.list_recent(&mut ctx, Collection::Journal, Some(10)).await;

    assert_eq!(svc.repo().top_queries(), 2);
    assert_eq!(after.records.len(), 1);
}

#[tokio::test]
async fn write_invalidates_every_limit_of_the_collection() {
    let (svc, _) = fake_service();
    let mut ctx = inspector_session();

    svc.list_recent(&mut ctx, Collection::Journal, Some(5)).await;
    svc.list_recent(&mut ctx, Collection::Journal, Some(50)).await;
    svc.list_recent(&mut ctx, Collection::Checklists, Some(5)).await;
    assert_eq!(svc.repo().top_queries(), 3);

    svc.add_journal_entry(&mut ctx, "Note").await.unwrap();
    assert_eq!(ctx.cache.registry().current(Collection::Journal), 1);
    assert_eq!(ctx.cache.registry().current(Collection::Checklists), 0);

    svc.list_recent(&mut ctx, Collection::Journal, Some(5)).await;
    svc.list_recent(&mut ctx, Collection::Journal, Some(50)).await;
    svc.list_recent(&mut ctx, Collection::Checklists, Some(5)).await;
    assert_eq!(svc.repo().top_queries(), 5);
}

#[tokio::test]
async fn ttl_expiry_forces_refetch() {
    let (svc, clock) = fake_service();
    let mut ctx = inspector_session();

    svc.list_recent(&mut ctx, Collection::Checklists, None).await;
    clock.advance(Duration::seconds(30));
    svc.list_recent(&mut ctx, Collection::Checklists, None).await;

    assert_eq!(svc.repo().top_queries(), 2);
}

#[tokio::test]
async fn failed_read_is_degraded_and_not_cached() {
    let (svc, _) = fake_service();
    let mut ctx = inspector_session();

    svc.repo().fail_reads(true);
    let listing = svc.list_recent(&mut ctx, Collection::Journal, Some(10)).await;
    assert!(listing.is_degraded());
    assert!(listing.records.is_empty());
    assert!(ctx.cache.is_empty());

    svc.repo().fail_reads(false);
    let listing = svc.list_recent(&mut ctx, Collection::Journal, Some(10)).await;
    assert!(!listing.is_degraded());
    assert_eq!(svc.repo().top_queries(), 2);
}

#[tokio::test]
async fn failed_refetch_leaves_previous_entry_in_place() {
    let (svc, clock) = fake_service();
    let mut ctx = inspector_session();
    svc.add_journal_entry(&mut ctx, "Relève").await.unwrap();
    svc.list_recent(&mut ctx, Collection::Journal, Some(10)).await;

    clock.advance(Duration::seconds(31));
    svc.repo().fail_reads(true);
    let listing = svc.list_recent(&mut ctx, Collection::Journal, Some(10)).await;
    assert!(listing.is_degraded());

    let key = CacheKey {
        collection: Collection::Journal,
        limit: 10,
    };
    assert!(matches!(ctx.cache.lookup(key, svc.now()), CacheLookup::Stale));
    assert_eq!(ctx.cache.len(), 1);
}

#[tokio::test]
async fn failed_write_does_not_bump_or_invalidate() {
    let (svc, _) = fake_service();
    let mut ctx = inspector_session();
    svc.list_recent(&mut ctx, Collection::Journal, Some(10)).await;

    svc.repo().fail_writes(true);
    assert!(svc.add_journal_entry(&mut ctx, "Perdu").await.is_err());

    assert_eq!(ctx.cache.registry().current(Collection::Journal), 0);
    svc.list_recent(&mut ctx, Collection::Journal, Some(10)).await;
    assert_eq!(svc.repo().top_queries(), 1);
}

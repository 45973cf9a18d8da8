use crate::tests::MemoryIdentityStore;
use crate::{CoreError, ProfileLifecycle, ProvisionOutcome, UserId};

use std::sync::Arc;

use googletest::prelude::*;

fn lifecycle() -> (Arc<MemoryIdentityStore>, ProfileLifecycle) {
    let store = Arc::new(MemoryIdentityStore::default());
    let lifecycle = ProfileLifecycle::new(store.clone());
    (store, lifecycle)
}

fn dev_id() -> UserId {
    UserId::parse("dev-123").unwrap()
}

#[tokio::test]
async fn given_new_id_when_checked_then_does_not_exist() {
    let (_, lifecycle) = lifecycle();

    let exists = lifecycle.exists(&dev_id()).await.unwrap();

    assert_that!(exists, eq(false));
}

#[tokio::test]
async fn given_new_id_when_get_or_create_then_exists() {
    let (_, lifecycle) = lifecycle();

    let outcome = lifecycle.get_or_create(&dev_id()).await.unwrap();

    assert_that!(outcome, eq(ProvisionOutcome::Created));
    assert_that!(lifecycle.exists(&dev_id()).await.unwrap(), eq(true));
}

#[tokio::test]
async fn given_existing_profile_when_get_or_create_again_then_no_change() {
    let (store, lifecycle) = lifecycle();
    lifecycle.get_or_create(&dev_id()).await.unwrap();

    let outcome = lifecycle.get_or_create(&dev_id()).await.unwrap();

    assert_that!(outcome, eq(ProvisionOutcome::AlreadyPresent));
    assert_that!(store.row_count(), eq(1));
}

#[tokio::test]
async fn given_existing_profile_when_deleted_then_gone_and_second_delete_is_false() {
    let (_, lifecycle) = lifecycle();
    lifecycle.get_or_create(&dev_id()).await.unwrap();

    let first = lifecycle.delete(&dev_id()).await.unwrap();
    let second = lifecycle.delete(&dev_id()).await.unwrap();

    assert_that!(first, eq(true));
    assert_that!(second, eq(false));
    assert_that!(lifecycle.exists(&dev_id()).await.unwrap(), eq(false));
}

#[tokio::test]
async fn given_unknown_id_when_deleted_then_false_not_error() {
    let (_, lifecycle) = lifecycle();

    let deleted = lifecycle.delete(&dev_id()).await.unwrap();

    assert_that!(deleted, eq(false));
}

#[tokio::test]
async fn given_deleted_profile_when_get_or_create_then_conflict_and_stays_absent() {
    let (_, lifecycle) = lifecycle();
    lifecycle.get_or_create(&dev_id()).await.unwrap();
    lifecycle.delete(&dev_id()).await.unwrap();

    let result = lifecycle.get_or_create(&dev_id()).await;

    assert!(matches!(result, Err(CoreError::Conflict { .. })));
    assert_that!(lifecycle.exists(&dev_id()).await.unwrap(), eq(false));
}

#[tokio::test]
async fn given_concurrent_get_or_create_when_same_id_then_single_row() {
    let (store, lifecycle) = lifecycle();

    let calls = (0..16).map(|_| {
        let lifecycle = lifecycle.clone();
        async move { lifecycle.get_or_create(&dev_id()).await }
    });
    let results = futures::future::join_all(calls).await;

    assert!(results.iter().all(|r| r.is_ok()));
    let created = results
        .iter()
        .filter(|r| matches!(r, Ok(ProvisionOutcome::Created)))
        .count();
    assert_that!(created, eq(1));
    assert_that!(store.row_count(), eq(1));
}

#[tokio::test]
async fn given_failing_store_when_any_operation_then_generic_store_error() {
    let lifecycle = ProfileLifecycle::new(Arc::new(MemoryIdentityStore::failing()));

    let results = [
        lifecycle.exists(&dev_id()).await.map(|_| ()),
        lifecycle.get_or_create(&dev_id()).await.map(|_| ()),
        lifecycle.delete(&dev_id()).await.map(|_| ()),
    ];

    for result in results {
        match result {
            Err(CoreError::Store { message, .. }) => {
                assert!(!message.contains("disk I/O"), "store details leaked: {message}");
            }
            other => panic!("Expected store error, got {other:?}"),
        }
    }
}

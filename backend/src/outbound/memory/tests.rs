//! Tests for the in-memory account store.

use std::sync::Arc;

use super::*;
use crate::domain::{Amount, OperationKind};
use chrono::{TimeZone, Utc};
use rstest::{fixture, rstest};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn tax_id(raw: &str) -> TaxId {
    TaxId::new(raw).expect("valid tax id")
}

fn customer(raw_tax_id: &str, name: &str) -> Customer {
    Customer::open(tax_id(raw_tax_id), CustomerName::new(name).expect("valid name"))
}

/// Just under `Decimal::MAX`; two of these overflow.
fn large_value() -> Decimal {
    Decimal::from_i128_with_scale(70_000_000_000_000_000_000_000_000_000, 0)
}

fn credit(value: Decimal) -> Operation {
    let at = Utc
        .with_ymd_and_hms(2026, 3, 1, 12, 0, 0)
        .single()
        .expect("valid timestamp");
    Operation::credit(Amount::new(value).expect("positive"), None, at)
}

fn debit(value: Decimal) -> Operation {
    let at = Utc
        .with_ymd_and_hms(2026, 3, 1, 13, 0, 0)
        .single()
        .expect("valid timestamp");
    Operation::debit(Amount::new(value).expect("positive"), None, at)
}

#[fixture]
fn repository() -> InMemoryAccountRepository {
    InMemoryAccountRepository::new()
}

#[rstest]
#[tokio::test]
async fn insert_then_find_returns_customer(repository: InMemoryAccountRepository) {
    let alice = customer("111", "Alice");
    repository.insert(alice.clone()).await.expect("insert");

    let found = repository
        .find_by_tax_id(&tax_id("111"))
        .await
        .expect("lookup");
    assert_eq!(found, Some(alice));
}

#[rstest]
#[tokio::test]
async fn find_unknown_tax_id_returns_none(repository: InMemoryAccountRepository) {
    let found = repository
        .find_by_tax_id(&tax_id("999"))
        .await
        .expect("lookup");
    assert!(found.is_none());
}

#[rstest]
#[tokio::test]
async fn duplicate_insert_is_rejected_and_original_kept(repository: InMemoryAccountRepository) {
    let original = customer("111", "Alice");
    repository.insert(original.clone()).await.expect("insert");

    let err = repository
        .insert(customer("111", "Mallory"))
        .await
        .expect_err("duplicate rejected");
    assert_eq!(err, AccountRepositoryError::already_exists("111"));

    let stored = repository
        .find_by_tax_id(&tax_id("111"))
        .await
        .expect("lookup")
        .expect("still present");
    assert_eq!(stored, original);
}

#[rstest]
#[tokio::test]
async fn rename_mutates_in_place(repository: InMemoryAccountRepository) {
    repository
        .insert(customer("111", "Alice"))
        .await
        .expect("insert");
    repository
        .rename(&tax_id("111"), CustomerName::new("Alicia").expect("name"))
        .await
        .expect("rename");

    let stored = repository
        .find_by_tax_id(&tax_id("111"))
        .await
        .expect("lookup")
        .expect("present");
    assert_eq!(stored.name().as_ref(), "Alicia");
}

#[rstest]
#[tokio::test]
async fn operations_on_unknown_tax_id_are_not_found(repository: InMemoryAccountRepository) {
    let unknown = tax_id("999");
    let expected = AccountRepositoryError::not_found("999");

    let rename = repository
        .rename(&unknown, CustomerName::new("Nobody").expect("name"))
        .await;
    let append = repository.append_operation(&unknown, credit(dec!(1))).await;
    let remove = repository.remove(&unknown).await;

    assert_eq!(rename, Err(expected.clone()));
    assert_eq!(append, Err(expected.clone()));
    assert_eq!(remove, Err(expected));
}

#[rstest]
#[tokio::test]
async fn append_enforces_overdraft_guard(repository: InMemoryAccountRepository) {
    let alice = tax_id("111");
    repository
        .insert(customer("111", "Alice"))
        .await
        .expect("insert");
    repository
        .append_operation(&alice, credit(dec!(100)))
        .await
        .expect("credit");

    let err = repository
        .append_operation(&alice, debit(dec!(150)))
        .await
        .expect_err("overdraft rejected");
    assert_eq!(
        err,
        AccountRepositoryError::insufficient_funds(dec!(100), dec!(150))
    );

    repository
        .append_operation(&alice, debit(dec!(50)))
        .await
        .expect("covered debit");

    let stored = repository
        .find_by_tax_id(&alice)
        .await
        .expect("lookup")
        .expect("present");
    let kinds: Vec<_> = stored
        .statement()
        .operations()
        .iter()
        .map(|operation| operation.kind)
        .collect();
    assert_eq!(kinds, vec![OperationKind::Credit, OperationKind::Debit]);
    assert_eq!(stored.balance(), dec!(50));
}

#[rstest]
#[tokio::test]
async fn overflowing_credit_is_rejected_and_store_stays_usable(
    repository: InMemoryAccountRepository,
) {
    let alice = tax_id("111");
    repository
        .insert(customer("111", "Alice"))
        .await
        .expect("insert");
    repository
        .append_operation(&alice, credit(large_value()))
        .await
        .expect("credit");

    let err = repository
        .append_operation(&alice, credit(large_value()))
        .await
        .expect_err("overflow rejected");
    assert_eq!(
        err,
        AccountRepositoryError::balance_overflow(large_value(), large_value())
    );

    repository
        .append_operation(&alice, debit(dec!(1)))
        .await
        .expect("debit after rejected credit");
    repository
        .insert(customer("222", "Bob"))
        .await
        .expect("other customers unaffected");
}

#[rstest]
#[tokio::test]
async fn remove_deletes_only_the_matching_customer(repository: InMemoryAccountRepository) {
    for (raw, name) in [("111", "Alice"), ("222", "Bob"), ("333", "Carol")] {
        repository.insert(customer(raw, name)).await.expect("insert");
    }

    let removed = repository.remove(&tax_id("222")).await.expect("remove");
    assert_eq!(removed.tax_id().as_ref(), "222");

    for raw in ["111", "333"] {
        let found = repository.find_by_tax_id(&tax_id(raw)).await.expect("lookup");
        assert!(found.is_some(), "{raw} should survive deletion of 222");
    }
    let gone = repository
        .find_by_tax_id(&tax_id("222"))
        .await
        .expect("lookup");
    assert!(gone.is_none());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_withdrawals_never_overdraw() {
    let repository = Arc::new(InMemoryAccountRepository::new());
    let alice = tax_id("111");
    repository
        .insert(customer("111", "Alice"))
        .await
        .expect("insert");
    repository
        .append_operation(&alice, credit(dec!(100)))
        .await
        .expect("credit");

    let handles: Vec<_> = (0..20)
        .map(|_| {
            let repository = Arc::clone(&repository);
            let alice = alice.clone();
            tokio::spawn(async move { repository.append_operation(&alice, debit(dec!(10))).await })
        })
        .collect();

    let mut accepted = 0;
    for handle in handles {
        if handle.await.expect("task completes").is_ok() {
            accepted += 1;
        }
    }

    let stored = repository
        .find_by_tax_id(&alice)
        .await
        .expect("lookup")
        .expect("present");
    assert_eq!(accepted, 10);
    assert_eq!(stored.balance(), Decimal::ZERO);
}

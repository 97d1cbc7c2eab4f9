//! Settlement suite and write-serialization tests against the real
//! SQLite provider.

use std::sync::Arc;

use rust_decimal_macros::dec;

use tallybook_core::receivables::{
    NewReceivable, NewReceivablePayment, ReceivableRepositoryTrait,
};
use tallybook_core::testkit;
use tallybook_storage_sqlite::db::{create_pool, init, run_migrations, spawn_writer, DbPool};
use tallybook_storage_sqlite::receivables::ReceivableRepository;
use tallybook_storage_sqlite::WriteHandle;

fn open_database(dir: &tempfile::TempDir) -> (Arc<DbPool>, WriteHandle) {
    let db_path = dir.path().join("tallybook.db").display().to_string();
    init(&db_path).unwrap();
    let pool = create_pool(&db_path).unwrap();
    run_migrations(&pool).unwrap();
    let writer = spawn_writer(&pool).unwrap();
    (pool, writer)
}

#[tokio::test]
async fn sqlite_provider_passes_the_settlement_suite() {
    let dir = tempfile::tempdir().unwrap();
    let (pool, writer) = open_database(&dir);
    let repository = ReceivableRepository::new(pool, writer);

    testkit::run_settlement_suite(&repository).await;
}

#[tokio::test(flavor = "multi_thread")]
async fn concurrent_payments_serialize_instead_of_losing_updates() {
    let dir = tempfile::tempdir().unwrap();
    let (pool, writer) = open_database(&dir);
    let repository = Arc::new(ReceivableRepository::new(pool, writer));

    let new_receivable =
        NewReceivable::from_deposit(None, None, dec!(30000), Some(dec!(100000)), None).unwrap();
    let activity = new_receivable.opened_activity();
    let receivable = repository.create(new_receivable, activity).await.unwrap();

    // Both payments read a remaining balance of 70000; serialized, only one
    // of them can fit.
    let repo_a = repository.clone();
    let repo_b = repository.clone();
    let id_a = receivable.id.clone();
    let id_b = receivable.id.clone();

    let handle_a = tokio::spawn(async move {
        repo_a
            .settle_payment(NewReceivablePayment {
                receivable_id: id_a,
                amount: dec!(50000),
                description: None,
                receipt_ref: None,
            })
            .await
    });
    let handle_b = tokio::spawn(async move {
        repo_b
            .settle_payment(NewReceivablePayment {
                receivable_id: id_b,
                amount: dec!(40000),
                description: None,
                receipt_ref: None,
            })
            .await
    });

    let result_a = handle_a.await.unwrap();
    let result_b = handle_b.await.unwrap();
    assert!(
        result_a.is_ok() != result_b.is_ok(),
        "exactly one of two overlapping payments must be accepted"
    );

    let accepted = if result_a.is_ok() { dec!(50000) } else { dec!(40000) };
    let after = repository.get_by_id(&receivable.id).unwrap();
    assert_eq!(after.paid_amount, dec!(30000) + accepted);
    assert_eq!(after.paid_amount + after.remaining_amount, after.total_amount);
    assert_eq!(repository.list_payments(&receivable.id).unwrap().len(), 1);
}

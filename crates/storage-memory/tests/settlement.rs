//! The shared settlement suite run against the ephemeral provider. The
//! same suite runs against the SQLite provider, which is what keeps the
//! two implementations from drifting apart in invariant enforcement.

use std::sync::Arc;

use rust_decimal_macros::dec;

use tallybook_core::receivables::{
    NewReceivable, NewReceivablePayment, ReceivableRepositoryTrait,
};
use tallybook_core::testkit;
use tallybook_storage_memory::{MemoryReceivableRepository, MemoryStore};

#[tokio::test]
async fn memory_provider_passes_the_settlement_suite() {
    let store = Arc::new(MemoryStore::new());
    let repository = MemoryReceivableRepository::new(store);

    testkit::run_settlement_suite(&repository).await;
}

#[tokio::test(flavor = "multi_thread")]
async fn concurrent_payments_serialize_instead_of_losing_updates() {
    let store = Arc::new(MemoryStore::new());
    let repository = Arc::new(MemoryReceivableRepository::new(store));

    let new_receivable =
        NewReceivable::from_deposit(None, None, dec!(30000), Some(dec!(100000)), None).unwrap();
    let activity = new_receivable.opened_activity();
    let receivable = repository.create(new_receivable, activity).await.unwrap();

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

    let after = repository.get_by_id(&receivable.id).unwrap();
    assert_eq!(after.paid_amount + after.remaining_amount, after.total_amount);
    assert_eq!(repository.list_payments(&receivable.id).unwrap().len(), 1);
}

//! Shared settlement scenario suite.
//!
//! Every persistence provider runs this same suite from its integration
//! tests, so the two implementations of the repository contract cannot
//! drift apart in how they enforce the settlement invariants. The functions
//! here panic on violation, like any test assertion.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::errors::Error;
use crate::receivables::{
    NewReceivable, NewReceivablePayment, Receivable, ReceivableError, ReceivableRepositoryTrait,
    ReceivableStatus,
};

fn assert_balanced(r: &Receivable) {
    assert_eq!(
        r.paid_amount + r.remaining_amount,
        r.total_amount,
        "paid + remaining must equal total exactly"
    );
    assert!(r.remaining_amount >= Decimal::ZERO, "remaining went negative");
    assert_eq!(
        r.status,
        ReceivableStatus::from_balances(r.paid_amount, r.remaining_amount),
        "status does not match balances"
    );
}

async fn open(
    repo: &dyn ReceivableRepositoryTrait,
    amount: Decimal,
    total: Decimal,
) -> Receivable {
    let new_receivable =
        NewReceivable::from_deposit(None, None, amount, Some(total), None).unwrap();
    let activity = new_receivable.opened_activity();
    repo.create(new_receivable, activity).await.unwrap()
}

fn payment(receivable_id: &str, amount: Decimal) -> NewReceivablePayment {
    NewReceivablePayment {
        receivable_id: receivable_id.to_string(),
        amount,
        description: None,
        receipt_ref: None,
    }
}

/// A deposit of 30000 against a 100000 sale opens a partial receivable.
pub async fn scenario_deposit_opens_partial(repo: &dyn ReceivableRepositoryTrait) {
    let r = open(repo, dec!(30000), dec!(100000)).await;
    assert_eq!(r.paid_amount, dec!(30000));
    assert_eq!(r.remaining_amount, dec!(70000));
    assert_eq!(r.status, ReceivableStatus::Partial);
    assert_balanced(&r);

    // Reads are idempotent and reflect stored state.
    let read_once = repo.get_by_id(&r.id).unwrap();
    let read_twice = repo.get_by_id(&r.id).unwrap();
    assert_eq!(read_once.paid_amount, read_twice.paid_amount);
    assert_eq!(read_once.remaining_amount, read_twice.remaining_amount);
    assert_eq!(read_once.status, read_twice.status);
    assert_balanced(&read_once);
}

/// Settling the exact remainder closes the receivable; one more unit is
/// rejected and leaves the stored state untouched.
pub async fn scenario_settle_then_reject_overpayment(repo: &dyn ReceivableRepositoryTrait) {
    let r = open(repo, dec!(30000), dec!(100000)).await;

    repo.settle_payment(payment(&r.id, dec!(70000))).await.unwrap();

    let settled = repo.get_by_id(&r.id).unwrap();
    assert_eq!(settled.paid_amount, dec!(100000));
    assert_eq!(settled.remaining_amount, Decimal::ZERO);
    assert_eq!(settled.status, ReceivableStatus::Paid);
    assert_balanced(&settled);

    let rejected = repo.settle_payment(payment(&r.id, dec!(1))).await;
    assert!(matches!(
        rejected,
        Err(Error::Receivable(ReceivableError::Overpayment { .. }))
    ));

    let after = repo.get_by_id(&r.id).unwrap();
    assert_eq!(after.paid_amount, dec!(100000));
    assert_eq!(after.remaining_amount, Decimal::ZERO);
    assert_eq!(repo.list_payments(&r.id).unwrap().len(), 1);
}

/// Collecting the full price at sale time opens an already-paid receivable.
pub async fn scenario_full_payment_at_sale(repo: &dyn ReceivableRepositoryTrait) {
    let r = open(repo, dec!(100000), dec!(100000)).await;
    assert_eq!(r.paid_amount, dec!(100000));
    assert_eq!(r.remaining_amount, Decimal::ZERO);
    assert_eq!(r.status, ReceivableStatus::Paid);
}

/// Non-positive amounts are rejected and no payment row is written.
pub async fn scenario_invalid_amount(repo: &dyn ReceivableRepositoryTrait) {
    let r = open(repo, dec!(30000), dec!(100000)).await;

    let rejected = repo.settle_payment(payment(&r.id, dec!(-5))).await;
    assert!(matches!(
        rejected,
        Err(Error::Receivable(ReceivableError::InvalidAmount(_)))
    ));
    assert!(repo.list_payments(&r.id).unwrap().is_empty());
}

/// Payments against an unknown receivable report NotFound.
pub async fn scenario_unknown_receivable(repo: &dyn ReceivableRepositoryTrait) {
    let rejected = repo
        .settle_payment(payment("does-not-exist", dec!(100)))
        .await;
    assert!(matches!(rejected, Err(Error::NotFound(_))));
}

/// A deposit collecting more than its total never opens a receivable.
pub async fn scenario_invalid_deposit(_repo: &dyn ReceivableRepositoryTrait) {
    let result = NewReceivable::from_deposit(None, None, dec!(60000), Some(dec!(50000)), None);
    assert!(matches!(
        result,
        Err(Error::Receivable(ReceivableError::InvalidDeposit(_)))
    ));
}

/// A sequence of partial payments keeps the books balanced at every step,
/// paid never decreases, and the payment rows sum back to the paid amount.
pub async fn scenario_payment_sequence_reconciles(repo: &dyn ReceivableRepositoryTrait) {
    let r = open(repo, dec!(100), dec!(1000)).await;
    let initial_paid = r.paid_amount;
    let mut previous_paid = r.paid_amount;

    for amount in [dec!(50), dec!(200), dec!(0.5), dec!(649.5)] {
        repo.settle_payment(payment(&r.id, amount)).await.unwrap();
        let current = repo.get_by_id(&r.id).unwrap();
        assert!(current.paid_amount > previous_paid, "paid must not decrease");
        assert_balanced(&current);
        previous_paid = current.paid_amount;
    }

    let final_state = repo.get_by_id(&r.id).unwrap();
    assert_eq!(final_state.status, ReceivableStatus::Paid);

    let applied: Decimal = repo
        .list_payments(&r.id)
        .unwrap()
        .iter()
        .map(|p| p.amount)
        .sum();
    assert_eq!(initial_paid + applied, final_state.paid_amount);
}

/// Deleting a receivable removes it and its payment rows.
pub async fn scenario_delete_cascades(repo: &dyn ReceivableRepositoryTrait) {
    let r = open(repo, dec!(30000), dec!(100000)).await;
    repo.settle_payment(payment(&r.id, dec!(10000))).await.unwrap();

    repo.delete(&r.id).await.unwrap();

    assert!(matches!(repo.get_by_id(&r.id), Err(Error::NotFound(_))));
    assert!(repo.list_payments(&r.id).unwrap().is_empty());
    assert!(matches!(repo.delete(&r.id).await, Err(Error::NotFound(_))));
}

/// Runs the whole suite against a fresh provider.
pub async fn run_settlement_suite(repo: &dyn ReceivableRepositoryTrait) {
    scenario_deposit_opens_partial(repo).await;
    scenario_settle_then_reject_overpayment(repo).await;
    scenario_full_payment_at_sale(repo).await;
    scenario_invalid_amount(repo).await;
    scenario_unknown_receivable(repo).await;
    scenario_invalid_deposit(repo).await;
    scenario_payment_sequence_reconciles(repo).await;
    scenario_delete_cascades(repo).await;
}

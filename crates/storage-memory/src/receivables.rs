use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::Decimal;

use tallybook_core::activities::NewActivity;
use tallybook_core::receivables::{
    NewReceivable, NewReceivablePayment, Receivable, ReceivablePayment,
    ReceivableRepositoryTrait, ReceivableStatus,
};
use tallybook_core::{Error, Result};

use crate::store::{materialize_activity, next_id, MemoryStore};

/// In-memory repository for the receivable settlement workflow.
///
/// Write methods hold the receivable, payment, and activity write guards
/// for their whole read-compute-write span, so overlapping settlements
/// against the same receivable serialize just like they do behind the
/// SQLite writer actor.
pub struct MemoryReceivableRepository {
    store: Arc<MemoryStore>,
}

impl MemoryReceivableRepository {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ReceivableRepositoryTrait for MemoryReceivableRepository {
    async fn create(
        &self,
        new_receivable: NewReceivable,
        activity: NewActivity,
    ) -> Result<Receivable> {
        let now = Utc::now();
        let receivable = Receivable {
            id: next_id(),
            customer_id: new_receivable.customer_id.clone(),
            income_entry_id: new_receivable.income_entry_id.clone(),
            total_amount: new_receivable.total_amount,
            paid_amount: new_receivable.paid_amount,
            remaining_amount: new_receivable.remaining_amount,
            status: new_receivable.status,
            description: new_receivable.description.clone(),
            created_at: now,
            updated_at: now,
        };

        let mut receivables = self.store.receivables.write().unwrap();
        let mut activities = self.store.activities.write().unwrap();
        receivables.push(receivable.clone());
        activities.push(materialize_activity(activity, Some(&receivable.id)));

        Ok(receivable)
    }

    async fn settle_payment(
        &self,
        new_payment: NewReceivablePayment,
    ) -> Result<ReceivablePayment> {
        let mut receivables = self.store.receivables.write().unwrap();
        let mut payments = self.store.receivable_payments.write().unwrap();
        let mut activities = self.store.activities.write().unwrap();

        let row = receivables
            .iter_mut()
            .find(|r| r.id == new_payment.receivable_id)
            .ok_or_else(|| {
                Error::NotFound(format!(
                    "Receivable with id {} not found",
                    new_payment.receivable_id
                ))
            })?;

        // Same pure arithmetic the SQLite provider runs; nothing below this
        // line is written unless it succeeds.
        let updated = row.settle(new_payment.amount, Utc::now())?;

        let payment = ReceivablePayment {
            id: next_id(),
            receivable_id: new_payment.receivable_id.clone(),
            amount: new_payment.amount,
            description: new_payment.description.clone(),
            receipt_ref: new_payment.receipt_ref.clone(),
            created_at: Utc::now(),
        };

        activities.push(materialize_activity(
            updated.payment_activity(new_payment.amount),
            None,
        ));
        *row = updated;
        payments.push(payment.clone());

        Ok(payment)
    }

    async fn delete(&self, receivable_id: &str) -> Result<()> {
        let mut receivables = self.store.receivables.write().unwrap();
        let mut payments = self.store.receivable_payments.write().unwrap();
        let mut activities = self.store.activities.write().unwrap();

        let position = receivables
            .iter()
            .position(|r| r.id == receivable_id)
            .ok_or_else(|| {
                Error::NotFound(format!("Receivable with id {} not found", receivable_id))
            })?;

        let receivable = receivables.remove(position);
        payments.retain(|p| p.receivable_id != receivable.id);
        activities.push(materialize_activity(receivable.deleted_activity(), None));

        Ok(())
    }

    fn get_by_id(&self, receivable_id: &str) -> Result<Receivable> {
        self.store
            .receivables
            .read()
            .unwrap()
            .iter()
            .find(|r| r.id == receivable_id)
            .cloned()
            .ok_or_else(|| {
                Error::NotFound(format!("Receivable with id {} not found", receivable_id))
            })
    }

    fn list(&self) -> Result<Vec<Receivable>> {
        let receivables = self.store.receivables.read().unwrap();
        let mut rows = receivables.clone();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(rows)
    }

    fn list_payments(&self, receivable_id: &str) -> Result<Vec<ReceivablePayment>> {
        let payments = self.store.receivable_payments.read().unwrap();
        let mut rows: Vec<ReceivablePayment> = payments
            .iter()
            .filter(|p| p.receivable_id == receivable_id)
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(rows)
    }

    fn outstanding_total(&self) -> Result<Decimal> {
        let receivables = self.store.receivables.read().unwrap();
        Ok(receivables
            .iter()
            .filter(|r| r.status != ReceivableStatus::Paid)
            .map(|r| r.remaining_amount)
            .sum())
    }
}

//! Receivable repository and service traits.
//!
//! The repository trait is the persistence-provider contract for the
//! settlement workflow. Implementations handle transaction management
//! internally: every multi-row operation below is one atomic unit, and
//! concurrent writes against the same receivable serialize.

use async_trait::async_trait;
use rust_decimal::Decimal;

use super::receivables_model::{
    NewReceivable, NewReceivablePayment, Receivable, ReceivablePayment,
};
use crate::activities::NewActivity;
use crate::errors::Result;
use crate::income::IncomeEntry;

/// Trait defining the contract for receivable persistence.
#[async_trait]
pub trait ReceivableRepositoryTrait: Send + Sync {
    /// Inserts the receivable and its audit activity in one transaction.
    /// Neither row exists if either write fails.
    async fn create(&self, new_receivable: NewReceivable, activity: NewActivity)
        -> Result<Receivable>;

    /// Atomically applies a payment: loads the current receivable
    /// (`NotFound` when absent), runs [`Receivable::settle`], inserts the
    /// payment row, updates the balances, and appends the audit activity.
    /// Nothing is written when any step fails.
    ///
    /// [`Receivable::settle`]: super::Receivable::settle
    async fn settle_payment(&self, new_payment: NewReceivablePayment)
        -> Result<ReceivablePayment>;

    /// Deletes the receivable, cascades its payment rows, and appends the
    /// audit activity in one transaction.
    async fn delete(&self, receivable_id: &str) -> Result<()>;

    /// Retrieves a receivable by its ID.
    fn get_by_id(&self, receivable_id: &str) -> Result<Receivable>;

    /// Lists all receivables, newest first.
    fn list(&self) -> Result<Vec<Receivable>>;

    /// Lists the payments applied to a receivable, newest first.
    fn list_payments(&self, receivable_id: &str) -> Result<Vec<ReceivablePayment>>;

    /// Sum of the remaining balance over all receivables not yet settled.
    fn outstanding_total(&self) -> Result<Decimal>;
}

/// Trait defining the contract for the receivable settlement service.
#[async_trait]
pub trait ReceivableServiceTrait: Send + Sync {
    /// Opens a receivable for a recorded deposit sale and writes its audit
    /// activity as one unit. Re-validates the deposit invariant even though
    /// the sale was validated upstream.
    async fn create_from_deposit(&self, sale: &IncomeEntry) -> Result<Receivable>;

    /// Applies a payment against a receivable's remaining balance. Rejects
    /// non-positive amounts before touching storage; overpayment is rejected
    /// in full, never partially accepted.
    async fn apply_payment(
        &self,
        receivable_id: &str,
        amount: Decimal,
        description: Option<String>,
    ) -> Result<ReceivablePayment>;

    /// Administrative hard delete; payment rows are removed with it.
    async fn delete_receivable(&self, receivable_id: &str) -> Result<()>;

    /// Retrieves a receivable by ID.
    fn get_receivable(&self, receivable_id: &str) -> Result<Receivable>;

    /// Lists all receivables, newest first.
    fn list_receivables(&self) -> Result<Vec<Receivable>>;

    /// Lists the payments applied to a receivable, newest first.
    fn list_payments(&self, receivable_id: &str) -> Result<Vec<ReceivablePayment>>;
}

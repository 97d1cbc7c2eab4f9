use log::debug;
use std::sync::Arc;

use rust_decimal::Decimal;

use super::receivables_errors::ReceivableError;
use super::receivables_model::{
    NewReceivable, NewReceivablePayment, Receivable, ReceivablePayment,
};
use super::receivables_traits::{ReceivableRepositoryTrait, ReceivableServiceTrait};
use crate::errors::Result;
use crate::income::IncomeEntry;

/// Service enforcing the deposit settlement workflow.
///
/// The single entry point through which receivable balances change: it
/// validates input, derives the audit notes, and hands the repository one
/// atomic operation at a time.
pub struct ReceivableService {
    repository: Arc<dyn ReceivableRepositoryTrait>,
}

impl ReceivableService {
    pub fn new(repository: Arc<dyn ReceivableRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait::async_trait]
impl ReceivableServiceTrait for ReceivableService {
    async fn create_from_deposit(&self, sale: &IncomeEntry) -> Result<Receivable> {
        if !sale.is_deposit {
            return Err(ReceivableError::InvalidDeposit(format!(
                "income entry {} is not a deposit",
                sale.id
            ))
            .into());
        }

        let new_receivable = NewReceivable::from_deposit(
            sale.customer_id.clone(),
            Some(sale.id.clone()),
            sale.amount,
            sale.total_amount,
            sale.description.clone(),
        )?;

        debug!(
            "Opening receivable from deposit sale {}: total {}, paid {}",
            sale.id, new_receivable.total_amount, new_receivable.paid_amount
        );

        let activity = new_receivable.opened_activity();
        self.repository.create(new_receivable, activity).await
    }

    async fn apply_payment(
        &self,
        receivable_id: &str,
        amount: Decimal,
        description: Option<String>,
    ) -> Result<ReceivablePayment> {
        let new_payment = NewReceivablePayment {
            receivable_id: receivable_id.to_string(),
            amount,
            description,
            receipt_ref: None,
        };
        // Reject malformed input before any storage access; the overpayment
        // check needs the current balance and runs inside the repository's
        // transaction.
        new_payment.validate()?;

        debug!("Applying payment of {} to receivable {}", amount, receivable_id);
        self.repository.settle_payment(new_payment).await
    }

    async fn delete_receivable(&self, receivable_id: &str) -> Result<()> {
        debug!("Deleting receivable {}", receivable_id);
        self.repository.delete(receivable_id).await
    }

    fn get_receivable(&self, receivable_id: &str) -> Result<Receivable> {
        self.repository.get_by_id(receivable_id)
    }

    fn list_receivables(&self) -> Result<Vec<Receivable>> {
        self.repository.list()
    }

    fn list_payments(&self, receivable_id: &str) -> Result<Vec<ReceivablePayment>> {
        self.repository.list_payments(receivable_id)
    }
}

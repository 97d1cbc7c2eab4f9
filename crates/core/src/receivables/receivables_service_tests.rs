#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use chrono::Utc;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    use crate::activities::NewActivity;
    use crate::errors::{Error, Result};
    use crate::income::IncomeEntry;
    use crate::receivables::{
        NewReceivable, NewReceivablePayment, Receivable, ReceivableError,
        ReceivableRepositoryTrait, ReceivableService, ReceivableServiceTrait, ReceivableStatus,
    };

    // --- Mock ReceivableRepository ---
    //
    // Records what the service hands it; storage behavior itself is covered
    // by the provider integration tests.
    #[derive(Default)]
    struct MockReceivableRepository {
        created: Mutex<Vec<(NewReceivable, NewActivity)>>,
        settled: Mutex<Vec<NewReceivablePayment>>,
        calls: AtomicUsize,
    }

    impl MockReceivableRepository {
        fn write_calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl ReceivableRepositoryTrait for MockReceivableRepository {
        async fn create(
            &self,
            new_receivable: NewReceivable,
            activity: NewActivity,
        ) -> Result<Receivable> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let now = Utc::now();
            let created = Receivable {
                id: "rcv-1".to_string(),
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
            self.created.lock().unwrap().push((new_receivable, activity));
            Ok(created)
        }

        async fn settle_payment(
            &self,
            new_payment: NewReceivablePayment,
        ) -> Result<crate::receivables::ReceivablePayment> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let payment = crate::receivables::ReceivablePayment {
                id: "pay-1".to_string(),
                receivable_id: new_payment.receivable_id.clone(),
                amount: new_payment.amount,
                description: new_payment.description.clone(),
                receipt_ref: new_payment.receipt_ref.clone(),
                created_at: Utc::now(),
            };
            self.settled.lock().unwrap().push(new_payment);
            Ok(payment)
        }

        async fn delete(&self, _receivable_id: &str) -> Result<()> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }

        fn get_by_id(&self, receivable_id: &str) -> Result<Receivable> {
            Err(Error::NotFound(format!(
                "Receivable with id {} not found",
                receivable_id
            )))
        }

        fn list(&self) -> Result<Vec<Receivable>> {
            Ok(Vec::new())
        }

        fn list_payments(
            &self,
            _receivable_id: &str,
        ) -> Result<Vec<crate::receivables::ReceivablePayment>> {
            Ok(Vec::new())
        }

        fn outstanding_total(&self) -> Result<Decimal> {
            Ok(Decimal::ZERO)
        }
    }

    fn deposit_sale(amount: Decimal, total: Option<Decimal>, is_deposit: bool) -> IncomeEntry {
        let now = Utc::now();
        IncomeEntry {
            id: "inc-1".to_string(),
            customer_id: Some("cus-1".to_string()),
            entry_type: "deposit".to_string(),
            amount,
            is_deposit,
            total_amount: total,
            receipt_ref: None,
            description: Some("storefront signage".to_string()),
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn create_from_deposit_passes_computed_balances_to_the_repository() {
        let repository = Arc::new(MockReceivableRepository::default());
        let service = ReceivableService::new(repository.clone());

        let sale = deposit_sale(dec!(30000), Some(dec!(100000)), true);
        let receivable = service.create_from_deposit(&sale).await.unwrap();

        assert_eq!(receivable.paid_amount, dec!(30000));
        assert_eq!(receivable.remaining_amount, dec!(70000));
        assert_eq!(receivable.status, ReceivableStatus::Partial);

        let created = repository.created.lock().unwrap();
        let (new_receivable, activity) = &created[0];
        assert_eq!(new_receivable.income_entry_id.as_deref(), Some("inc-1"));
        assert_eq!(new_receivable.customer_id.as_deref(), Some("cus-1"));
        assert_eq!(activity.activity_type, "receivable_added");
        assert_eq!(activity.related_id.as_deref(), Some("inc-1"));
    }

    #[tokio::test]
    async fn create_from_deposit_rejects_a_non_deposit_sale() {
        let repository = Arc::new(MockReceivableRepository::default());
        let service = ReceivableService::new(repository.clone());

        let sale = deposit_sale(dec!(30000), Some(dec!(100000)), false);
        let result = service.create_from_deposit(&sale).await;

        assert!(matches!(
            result,
            Err(Error::Receivable(ReceivableError::InvalidDeposit(_)))
        ));
        assert_eq!(repository.write_calls(), 0);
    }

    #[tokio::test]
    async fn create_from_deposit_revalidates_the_totals() {
        let repository = Arc::new(MockReceivableRepository::default());
        let service = ReceivableService::new(repository.clone());

        let sale = deposit_sale(dec!(60000), Some(dec!(50000)), true);
        let result = service.create_from_deposit(&sale).await;

        assert!(matches!(
            result,
            Err(Error::Receivable(ReceivableError::InvalidDeposit(_)))
        ));
        assert_eq!(repository.write_calls(), 0);
    }

    #[tokio::test]
    async fn apply_payment_forwards_the_payment_to_the_repository() {
        let repository = Arc::new(MockReceivableRepository::default());
        let service = ReceivableService::new(repository.clone());

        let payment = service
            .apply_payment("rcv-1", dec!(70000), Some("final installment".to_string()))
            .await
            .unwrap();

        assert_eq!(payment.receivable_id, "rcv-1");
        assert_eq!(payment.amount, dec!(70000));

        let settled = repository.settled.lock().unwrap();
        assert_eq!(settled.len(), 1);
        assert_eq!(settled[0].description.as_deref(), Some("final installment"));
    }

    #[tokio::test]
    async fn apply_payment_rejects_non_positive_amounts_before_any_write() {
        let repository = Arc::new(MockReceivableRepository::default());
        let service = ReceivableService::new(repository.clone());

        for amount in [Decimal::ZERO, dec!(-5)] {
            let result = service.apply_payment("rcv-1", amount, None).await;
            assert!(matches!(
                result,
                Err(Error::Receivable(ReceivableError::InvalidAmount(_)))
            ));
        }

        assert_eq!(repository.write_calls(), 0);
    }

    #[tokio::test]
    async fn lookups_pass_through_to_the_repository() {
        let repository = Arc::new(MockReceivableRepository::default());
        let service = ReceivableService::new(repository);

        let result = service.get_receivable("missing");
        assert!(matches!(result, Err(Error::NotFound(_))));
        assert!(service.list_receivables().unwrap().is_empty());
    }
}

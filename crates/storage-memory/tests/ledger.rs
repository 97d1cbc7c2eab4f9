//! The deposit flow wired through the core services over the ephemeral
//! provider, mirroring the SQLite end-to-end test.

use std::sync::Arc;

use chrono::{Days, NaiveDate, Utc};
use rust_decimal_macros::dec;

use tallybook_core::activities::ActivityRepositoryTrait;
use tallybook_core::customers::{
    CustomerService, CustomerServiceTrait, NewCustomer, SubscriptionType,
};
use tallybook_core::expenses::{ExpenseService, ExpenseServiceTrait, NewExpenseEntry};
use tallybook_core::income::{
    IncomeService, IncomeServiceTrait, NewIncomeEntry, INCOME_TYPE_DEPOSIT, INCOME_TYPE_SALES,
};
use tallybook_core::receivables::{ReceivableService, ReceivableServiceTrait, ReceivableStatus};
use tallybook_core::reports::{ReportService, ReportServiceTrait};
use tallybook_storage_memory::{
    MemoryActivityRepository, MemoryCustomerRepository, MemoryExpenseRepository,
    MemoryIncomeRepository, MemoryReceivableRepository, MemoryStore,
};

#[tokio::test]
async fn recording_a_deposit_sale_opens_an_audited_receivable() {
    let store = Arc::new(MemoryStore::new());
    let receivable_service = Arc::new(ReceivableService::new(Arc::new(
        MemoryReceivableRepository::new(store.clone()),
    )));
    let income_service = IncomeService::new(
        Arc::new(MemoryIncomeRepository::new(store.clone())),
        receivable_service.clone(),
    );
    let activities = MemoryActivityRepository::new(store.clone());

    let entry = income_service
        .record_income(NewIncomeEntry {
            customer_id: None,
            entry_type: INCOME_TYPE_DEPOSIT.to_string(),
            amount: dec!(30000),
            is_deposit: true,
            total_amount: Some(dec!(100000)),
            receipt_ref: None,
            description: None,
        })
        .await
        .unwrap();

    let receivables = receivable_service.list_receivables().unwrap();
    assert_eq!(receivables.len(), 1);
    assert_eq!(
        receivables[0].income_entry_id.as_deref(),
        Some(entry.id.as_str())
    );
    assert_eq!(receivables[0].status, ReceivableStatus::Partial);

    let tags: Vec<String> = activities
        .recent(10)
        .unwrap()
        .into_iter()
        .map(|a| a.activity_type)
        .collect();
    assert!(tags.contains(&"income_added".to_string()));
    assert!(tags.contains(&"receivable_added".to_string()));
}

#[tokio::test]
async fn renewing_a_lapsed_subscription_reactivates_the_customer() {
    let store = Arc::new(MemoryStore::new());
    let service = CustomerService::new(Arc::new(MemoryCustomerRepository::new(store.clone())));

    let created = service
        .create_customer(NewCustomer {
            name: "Blue Fig Cafe".to_string(),
            join_date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            subscription_type: SubscriptionType::Quarterly,
        })
        .await
        .unwrap();
    assert_eq!(
        created.expiry_date,
        NaiveDate::from_ymd_opt(2024, 9, 1).unwrap()
    );

    let renewed = service.renew_subscription(&created.id).await.unwrap();
    assert_eq!(
        renewed.expiry_date,
        NaiveDate::from_ymd_opt(2025, 9, 1).unwrap()
    );
    assert!(renewed.is_active);

    let activities = MemoryActivityRepository::new(store);
    assert_eq!(
        activities.recent(1).unwrap()[0].activity_type,
        "subscription_renewed"
    );
}

#[tokio::test]
async fn the_financial_report_reconciles_income_against_expenses() {
    let store = Arc::new(MemoryStore::new());
    let income_repository = Arc::new(MemoryIncomeRepository::new(store.clone()));
    let expense_repository = Arc::new(MemoryExpenseRepository::new(store.clone()));

    let receivable_service = Arc::new(ReceivableService::new(Arc::new(
        MemoryReceivableRepository::new(store.clone()),
    )));
    let income_service = IncomeService::new(income_repository.clone(), receivable_service);
    let expense_service = ExpenseService::new(expense_repository.clone());

    income_service
        .record_income(NewIncomeEntry {
            customer_id: None,
            entry_type: INCOME_TYPE_SALES.to_string(),
            amount: dec!(90000),
            is_deposit: false,
            total_amount: None,
            receipt_ref: None,
            description: None,
        })
        .await
        .unwrap();
    expense_service
        .record_expense(NewExpenseEntry {
            amount: dec!(20000),
            reason: "paper stock".to_string(),
            description: None,
        })
        .await
        .unwrap();

    let reports = ReportService::new(income_repository, expense_repository);
    let start = Utc::now().checked_sub_days(Days::new(1)).unwrap();
    let end = Utc::now().checked_add_days(Days::new(1)).unwrap();
    let report = reports.financial_report(start, end).unwrap();

    assert_eq!(report.total_income, dec!(90000));
    assert_eq!(report.total_expenses, dec!(20000));
    assert_eq!(report.net_profit, dec!(70000));
    assert_eq!(report.income_entries.len(), 1);
    assert_eq!(report.expense_entries.len(), 1);
}

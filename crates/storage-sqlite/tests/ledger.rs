//! End-to-end ledger flows over the SQLite provider, wired through the
//! core services exactly as an application would.

use std::sync::Arc;

use chrono::NaiveDate;
use rust_decimal_macros::dec;

use tallybook_core::activities::{ActivityRepositoryTrait, ActivityService, ActivityServiceTrait};
use tallybook_core::customers::{
    CustomerRepositoryTrait, CustomerService, CustomerServiceTrait, NewCustomer, SubscriptionType,
};
use tallybook_core::dashboard::{DashboardService, DashboardServiceTrait, FinancialStatus};
use tallybook_core::employees::{EmployeeService, EmployeeServiceTrait, NewEmployee};
use tallybook_core::expenses::{ExpenseService, ExpenseServiceTrait, NewExpenseEntry};
use tallybook_core::income::{
    IncomeService, IncomeServiceTrait, NewIncomeEntry, INCOME_TYPE_DEPOSIT, INCOME_TYPE_SALES,
};
use tallybook_core::receivables::{ReceivableService, ReceivableServiceTrait, ReceivableStatus};
use tallybook_storage_sqlite::activities::ActivityRepository;
use tallybook_storage_sqlite::customers::CustomerRepository;
use tallybook_storage_sqlite::db::{create_pool, init, run_migrations, spawn_writer, DbPool};
use tallybook_storage_sqlite::employees::EmployeeRepository;
use tallybook_storage_sqlite::expenses::ExpenseRepository;
use tallybook_storage_sqlite::income::IncomeRepository;
use tallybook_storage_sqlite::receivables::ReceivableRepository;
use tallybook_storage_sqlite::WriteHandle;

struct Ledger {
    customers: Arc<CustomerRepository>,
    income: Arc<IncomeRepository>,
    expenses: Arc<ExpenseRepository>,
    employees: Arc<EmployeeRepository>,
    receivables: Arc<ReceivableRepository>,
    activities: Arc<ActivityRepository>,
}

fn open_ledger(dir: &tempfile::TempDir) -> Ledger {
    let db_path = dir.path().join("tallybook.db").display().to_string();
    init(&db_path).unwrap();
    let pool: Arc<DbPool> = create_pool(&db_path).unwrap();
    run_migrations(&pool).unwrap();
    let writer: WriteHandle = spawn_writer(&pool).unwrap();

    Ledger {
        customers: Arc::new(CustomerRepository::new(pool.clone(), writer.clone())),
        income: Arc::new(IncomeRepository::new(pool.clone(), writer.clone())),
        expenses: Arc::new(ExpenseRepository::new(pool.clone(), writer.clone())),
        employees: Arc::new(EmployeeRepository::new(pool.clone(), writer.clone())),
        receivables: Arc::new(ReceivableRepository::new(pool.clone(), writer.clone())),
        activities: Arc::new(ActivityRepository::new(pool, writer)),
    }
}

#[tokio::test]
async fn recording_a_deposit_sale_opens_an_audited_receivable() {
    let dir = tempfile::tempdir().unwrap();
    let ledger = open_ledger(&dir);

    let receivable_service = Arc::new(ReceivableService::new(ledger.receivables.clone()));
    let income_service = IncomeService::new(ledger.income.clone(), receivable_service.clone());

    let entry = income_service
        .record_income(NewIncomeEntry {
            customer_id: None,
            entry_type: INCOME_TYPE_DEPOSIT.to_string(),
            amount: dec!(30000),
            is_deposit: true,
            total_amount: Some(dec!(100000)),
            receipt_ref: None,
            description: Some("storefront signage".to_string()),
        })
        .await
        .unwrap();

    let receivables = receivable_service.list_receivables().unwrap();
    assert_eq!(receivables.len(), 1);
    let receivable = &receivables[0];
    assert_eq!(receivable.income_entry_id.as_deref(), Some(entry.id.as_str()));
    assert_eq!(receivable.paid_amount, dec!(30000));
    assert_eq!(receivable.remaining_amount, dec!(70000));
    assert_eq!(receivable.status, ReceivableStatus::Partial);

    // Both the sale and the receivable left audit notes.
    let notes = ledger.activities.recent(10).unwrap();
    let tags: Vec<&str> = notes.iter().map(|a| a.activity_type.as_str()).collect();
    assert!(tags.contains(&"income_added"));
    assert!(tags.contains(&"receivable_added"));

    // Settle the remainder and confirm the audit trail follows.
    receivable_service
        .apply_payment(&receivable.id, dec!(70000), None)
        .await
        .unwrap();
    let settled = receivable_service.get_receivable(&receivable.id).unwrap();
    assert_eq!(settled.status, ReceivableStatus::Paid);

    let notes = ledger.activities.recent(10).unwrap();
    assert_eq!(notes[0].activity_type, "payment_received");
    assert!(notes[0].description.contains("70000"));
}

#[tokio::test]
async fn customer_expiry_dates_survive_the_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let ledger = open_ledger(&dir);
    let service = CustomerService::new(ledger.customers.clone());

    let created = service
        .create_customer(NewCustomer {
            name: "Blue Fig Cafe".to_string(),
            join_date: NaiveDate::from_ymd_opt(2025, 1, 31).unwrap(),
            subscription_type: SubscriptionType::Quarterly,
        })
        .await
        .unwrap();

    assert_eq!(
        created.expiry_date,
        NaiveDate::from_ymd_opt(2025, 4, 30).unwrap()
    );

    let reread = service.get_customer(&created.id).unwrap();
    assert_eq!(reread.expiry_date, created.expiry_date);
    assert!(reread.is_active);

    // An already-lapsed subscription shows up in the expiring query.
    let expiring = ledger
        .customers
        .list_expiring_before(NaiveDate::from_ymd_opt(2025, 5, 1).unwrap())
        .unwrap();
    assert_eq!(expiring.len(), 1);
}

#[tokio::test]
async fn dashboard_aggregates_reconcile_with_the_ledger() {
    let dir = tempfile::tempdir().unwrap();
    let ledger = open_ledger(&dir);

    let receivable_service = Arc::new(ReceivableService::new(ledger.receivables.clone()));
    let income_service = IncomeService::new(ledger.income.clone(), receivable_service.clone());
    let expense_service = ExpenseService::new(ledger.expenses.clone());
    let employee_service = EmployeeService::new(ledger.employees.clone());

    income_service
        .record_income(NewIncomeEntry {
            customer_id: None,
            entry_type: INCOME_TYPE_SALES.to_string(),
            amount: dec!(60000),
            is_deposit: false,
            total_amount: None,
            receipt_ref: None,
            description: None,
        })
        .await
        .unwrap();
    income_service
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
    expense_service
        .record_expense(NewExpenseEntry {
            amount: dec!(20000),
            reason: "paper stock".to_string(),
            description: None,
        })
        .await
        .unwrap();
    employee_service
        .create_employee(NewEmployee {
            name: "Rami".to_string(),
            position: Some("printer".to_string()),
            salary: dec!(50000),
        })
        .await
        .unwrap();

    let dashboard = DashboardService::new(
        ledger.customers.clone(),
        ledger.income.clone(),
        ledger.expenses.clone(),
        ledger.employees.clone(),
        ledger.receivables.clone(),
    );
    let stats = dashboard.get_stats().unwrap();

    // Income counts what was collected (60000 + 30000), not the face value
    // of the deposit sale.
    assert_eq!(stats.monthly_income, dec!(90000));
    assert_eq!(stats.current_inventory, dec!(70000));
    assert_eq!(stats.total_salaries, dec!(50000));
    assert_eq!(stats.outstanding_receivables, dec!(70000));
    // Inventory of 70000 sits below one and a half months of payroll.
    assert_eq!(stats.financial_status, FinancialStatus::Warning);
}

#[tokio::test]
async fn the_activity_feed_is_ordered_and_bounded() {
    let dir = tempfile::tempdir().unwrap();
    let ledger = open_ledger(&dir);
    let expense_service = ExpenseService::new(ledger.expenses.clone());

    for i in 0..12 {
        expense_service
            .record_expense(NewExpenseEntry {
                amount: dec!(100),
                reason: format!("supplies batch {}", i),
                description: None,
            })
            .await
            .unwrap();
    }

    let feed = ActivityService::new(ledger.activities.clone());
    let recent = feed.recent_activities(None).unwrap();
    assert_eq!(recent.len(), 10);
    assert!(recent[0].description.contains("batch 11"));

    let recent_five = feed.recent_activities(Some(5)).unwrap();
    assert_eq!(recent_five.len(), 5);
}

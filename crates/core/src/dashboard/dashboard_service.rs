use std::sync::Arc;

use chrono::{Datelike, Months, TimeZone, Utc};

use super::dashboard_model::{DashboardStats, FinancialStatus};
use super::dashboard_traits::DashboardServiceTrait;
use crate::customers::CustomerRepositoryTrait;
use crate::employees::EmployeeRepositoryTrait;
use crate::errors::Result;
use crate::expenses::ExpenseRepositoryTrait;
use crate::income::IncomeRepositoryTrait;
use crate::receivables::ReceivableRepositoryTrait;

/// Read-only projection over the whole ledger.
pub struct DashboardService {
    customers: Arc<dyn CustomerRepositoryTrait>,
    income: Arc<dyn IncomeRepositoryTrait>,
    expenses: Arc<dyn ExpenseRepositoryTrait>,
    employees: Arc<dyn EmployeeRepositoryTrait>,
    receivables: Arc<dyn ReceivableRepositoryTrait>,
}

impl DashboardService {
    pub fn new(
        customers: Arc<dyn CustomerRepositoryTrait>,
        income: Arc<dyn IncomeRepositoryTrait>,
        expenses: Arc<dyn ExpenseRepositoryTrait>,
        employees: Arc<dyn EmployeeRepositoryTrait>,
        receivables: Arc<dyn ReceivableRepositoryTrait>,
    ) -> Self {
        Self {
            customers,
            income,
            expenses,
            employees,
            receivables,
        }
    }
}

impl DashboardServiceTrait for DashboardService {
    fn get_stats(&self) -> Result<DashboardStats> {
        let today = Utc::now().date_naive();
        let month_start = today.with_day(1).unwrap_or(today);
        let next_month_start = month_start
            .checked_add_months(Months::new(1))
            .unwrap_or(month_start);

        let start = Utc.from_utc_datetime(&month_start.and_hms_opt(0, 0, 0).unwrap_or_default());
        let end =
            Utc.from_utc_datetime(&next_month_start.and_hms_opt(0, 0, 0).unwrap_or_default());

        let total_customers = self.customers.count_active()?;
        let expired_subscriptions = self.customers.count_expired(today)?;
        let monthly_income = self.income.sum_between(start, end)?;
        let current_inventory = self.income.sum_total()? - self.expenses.sum_total()?;
        let total_salaries = self.employees.total_active_salaries()?;
        let outstanding_receivables = self.receivables.outstanding_total()?;

        Ok(DashboardStats {
            total_customers,
            monthly_income,
            expired_subscriptions,
            current_inventory,
            total_salaries,
            outstanding_receivables,
            financial_status: FinancialStatus::from_position(current_inventory, total_salaries),
        })
    }
}

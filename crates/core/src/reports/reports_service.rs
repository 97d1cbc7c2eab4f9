use std::sync::Arc;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use super::reports_model::FinancialReport;
use super::reports_traits::ReportServiceTrait;
use crate::errors::Result;
use crate::expenses::ExpenseRepositoryTrait;
use crate::income::IncomeRepositoryTrait;

/// Assembles period reports from the ledger.
pub struct ReportService {
    income: Arc<dyn IncomeRepositoryTrait>,
    expenses: Arc<dyn ExpenseRepositoryTrait>,
}

impl ReportService {
    pub fn new(
        income: Arc<dyn IncomeRepositoryTrait>,
        expenses: Arc<dyn ExpenseRepositoryTrait>,
    ) -> Self {
        Self { income, expenses }
    }
}

impl ReportServiceTrait for ReportService {
    fn financial_report(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<FinancialReport> {
        let income_entries = self.income.list(Some((start, end)))?;
        let expense_entries = self.expenses.list(Some((start, end)))?;

        let total_income: Decimal = income_entries.iter().map(|e| e.amount).sum();
        let total_expenses: Decimal = expense_entries.iter().map(|e| e.amount).sum();

        Ok(FinancialReport {
            period_start: start,
            period_end: end,
            total_income,
            total_expenses,
            net_profit: total_income - total_expenses,
            income_entries,
            expense_entries,
        })
    }
}

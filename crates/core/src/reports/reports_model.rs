//! Report read models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::expenses::ExpenseEntry;
use crate::income::IncomeEntry;

/// Income and expenses over a period, with their totals. Assembled on
/// demand for the exporting layer; rendering is not this crate's concern.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialReport {
    pub period_start: DateTime<Utc>,
    pub period_end: DateTime<Utc>,
    pub total_income: Decimal,
    pub total_expenses: Decimal,
    pub net_profit: Decimal,
    pub income_entries: Vec<IncomeEntry>,
    pub expense_entries: Vec<ExpenseEntry>,
}

//! Dashboard read model.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Aggregate figures for the landing dashboard, assembled on demand from
/// the ledger. Purely a projection; nothing here feeds back into writes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_customers: i64,
    /// Income collected in the current calendar month.
    pub monthly_income: Decimal,
    /// Active customers whose subscription has lapsed.
    pub expired_subscriptions: i64,
    /// All-time income minus all-time expenses.
    pub current_inventory: Decimal,
    /// Monthly salary commitment over active employees.
    pub total_salaries: Decimal,
    /// Unsettled receivable balance across the ledger.
    pub outstanding_receivables: Decimal,
    pub financial_status: FinancialStatus,
}

/// Coarse health signal derived from cash on hand versus payroll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FinancialStatus {
    Healthy,
    Warning,
    Critical,
}

impl FinancialStatus {
    /// Policy: cash below one month of salaries is critical, below one and
    /// a half months is a warning.
    pub fn from_position(inventory: Decimal, salaries: Decimal) -> Self {
        if inventory < salaries {
            FinancialStatus::Critical
        } else if inventory < salaries * dec!(1.5) {
            FinancialStatus::Warning
        } else {
            FinancialStatus::Healthy
        }
    }
}

//! Report service trait.

use chrono::{DateTime, Utc};

use super::reports_model::FinancialReport;
use crate::errors::Result;

/// Trait defining the contract for report assembly.
pub trait ReportServiceTrait: Send + Sync {
    /// Collects the ledger entries of a period and their totals.
    fn financial_report(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<FinancialReport>;
}

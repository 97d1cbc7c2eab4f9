//! Dashboard service trait.

use super::dashboard_model::DashboardStats;
use crate::errors::Result;

/// Trait defining the contract for the dashboard read surface.
pub trait DashboardServiceTrait: Send + Sync {
    /// Assembles the current dashboard figures from the ledger.
    fn get_stats(&self) -> Result<DashboardStats>;
}

//! Income repository and service traits.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use super::income_model::{IncomeEntry, IncomeEntryUpdate, NewIncomeEntry};
use crate::activities::NewActivity;
use crate::errors::Result;

/// Trait defining the contract for income entry persistence.
///
/// Implementations handle transaction management internally: the entry and
/// its audit activity are written as one unit.
#[async_trait]
pub trait IncomeRepositoryTrait: Send + Sync {
    /// Inserts the entry and its audit activity in one transaction.
    async fn create(&self, new_entry: NewIncomeEntry, activity: NewActivity)
        -> Result<IncomeEntry>;

    /// Updates an entry and appends the audit activity in one transaction.
    async fn update(&self, update: IncomeEntryUpdate, activity: NewActivity)
        -> Result<IncomeEntry>;

    /// Deletes an entry and appends the audit activity in one transaction.
    async fn delete(&self, entry_id: &str, activity: NewActivity) -> Result<()>;

    /// Retrieves an entry by its ID.
    fn get_by_id(&self, entry_id: &str) -> Result<IncomeEntry>;

    /// Lists entries, newest first, optionally bounded to a creation range.
    fn list(&self, range: Option<(DateTime<Utc>, DateTime<Utc>)>) -> Result<Vec<IncomeEntry>>;

    /// Sum of collected amounts over a creation range.
    fn sum_between(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Decimal>;

    /// All-time sum of collected amounts.
    fn sum_total(&self) -> Result<Decimal>;
}

/// Trait defining the contract for income service operations.
#[async_trait]
pub trait IncomeServiceTrait: Send + Sync {
    /// Validates and records an income entry. A deposit entry additionally
    /// opens a receivable for the uncollected remainder.
    async fn record_income(&self, new_entry: NewIncomeEntry) -> Result<IncomeEntry>;

    /// Validates and applies an edit to an existing entry.
    async fn update_income(&self, update: IncomeEntryUpdate) -> Result<IncomeEntry>;

    /// Removes an entry.
    async fn delete_income(&self, entry_id: &str) -> Result<()>;

    /// Retrieves an entry by ID.
    fn get_income_entry(&self, entry_id: &str) -> Result<IncomeEntry>;

    /// Lists entries, newest first, optionally bounded to a creation range.
    fn list_income_entries(
        &self,
        range: Option<(DateTime<Utc>, DateTime<Utc>)>,
    ) -> Result<Vec<IncomeEntry>>;
}

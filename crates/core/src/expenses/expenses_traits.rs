//! Expense repository and service traits.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use super::expenses_model::{ExpenseEntry, ExpenseEntryUpdate, NewExpenseEntry};
use crate::activities::NewActivity;
use crate::errors::Result;

/// Trait defining the contract for expense entry persistence.
#[async_trait]
pub trait ExpenseRepositoryTrait: Send + Sync {
    /// Inserts the entry and its audit activity in one transaction.
    async fn create(&self, new_entry: NewExpenseEntry, activity: NewActivity)
        -> Result<ExpenseEntry>;

    /// Updates an entry and appends the audit activity in one transaction.
    async fn update(&self, update: ExpenseEntryUpdate, activity: NewActivity)
        -> Result<ExpenseEntry>;

    /// Deletes an entry and appends the audit activity in one transaction.
    async fn delete(&self, entry_id: &str, activity: NewActivity) -> Result<()>;

    /// Retrieves an entry by its ID.
    fn get_by_id(&self, entry_id: &str) -> Result<ExpenseEntry>;

    /// Lists entries, newest first, optionally bounded to a creation range.
    fn list(&self, range: Option<(DateTime<Utc>, DateTime<Utc>)>) -> Result<Vec<ExpenseEntry>>;

    /// All-time sum of expense amounts.
    fn sum_total(&self) -> Result<Decimal>;
}

/// Trait defining the contract for expense service operations.
#[async_trait]
pub trait ExpenseServiceTrait: Send + Sync {
    /// Validates and records an expense.
    async fn record_expense(&self, new_entry: NewExpenseEntry) -> Result<ExpenseEntry>;

    /// Validates and applies an edit to an existing expense.
    async fn update_expense(&self, update: ExpenseEntryUpdate) -> Result<ExpenseEntry>;

    /// Removes an expense.
    async fn delete_expense(&self, entry_id: &str) -> Result<()>;

    /// Retrieves an expense by ID.
    fn get_expense_entry(&self, entry_id: &str) -> Result<ExpenseEntry>;

    /// Lists expenses, newest first, optionally bounded to a creation range.
    fn list_expense_entries(
        &self,
        range: Option<(DateTime<Utc>, DateTime<Utc>)>,
    ) -> Result<Vec<ExpenseEntry>>;
}

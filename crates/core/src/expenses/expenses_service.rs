use std::sync::Arc;

use chrono::{DateTime, Utc};

use super::expenses_model::{ExpenseEntry, ExpenseEntryUpdate, NewExpenseEntry};
use super::expenses_traits::{ExpenseRepositoryTrait, ExpenseServiceTrait};
use crate::errors::Result;

/// Service for the outgoing side of the ledger.
pub struct ExpenseService {
    repository: Arc<dyn ExpenseRepositoryTrait>,
}

impl ExpenseService {
    pub fn new(repository: Arc<dyn ExpenseRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait::async_trait]
impl ExpenseServiceTrait for ExpenseService {
    async fn record_expense(&self, new_entry: NewExpenseEntry) -> Result<ExpenseEntry> {
        new_entry.validate()?;
        let activity = new_entry.recorded_activity();
        self.repository.create(new_entry, activity).await
    }

    async fn update_expense(&self, update: ExpenseEntryUpdate) -> Result<ExpenseEntry> {
        update.validate()?;
        let activity = update.updated_activity();
        self.repository.update(update, activity).await
    }

    async fn delete_expense(&self, entry_id: &str) -> Result<()> {
        let entry = self.repository.get_by_id(entry_id)?;
        self.repository
            .delete(entry_id, entry.deleted_activity())
            .await
    }

    fn get_expense_entry(&self, entry_id: &str) -> Result<ExpenseEntry> {
        self.repository.get_by_id(entry_id)
    }

    fn list_expense_entries(
        &self,
        range: Option<(DateTime<Utc>, DateTime<Utc>)>,
    ) -> Result<Vec<ExpenseEntry>> {
        self.repository.list(range)
    }
}

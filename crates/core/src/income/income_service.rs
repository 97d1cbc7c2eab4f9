use log::debug;
use std::sync::Arc;

use chrono::{DateTime, Utc};

use super::income_model::{IncomeEntry, IncomeEntryUpdate, NewIncomeEntry};
use super::income_traits::{IncomeRepositoryTrait, IncomeServiceTrait};
use crate::errors::Result;
use crate::receivables::ReceivableServiceTrait;

/// Service for recording sales and deposits.
pub struct IncomeService {
    repository: Arc<dyn IncomeRepositoryTrait>,
    receivable_service: Arc<dyn ReceivableServiceTrait>,
}

impl IncomeService {
    pub fn new(
        repository: Arc<dyn IncomeRepositoryTrait>,
        receivable_service: Arc<dyn ReceivableServiceTrait>,
    ) -> Self {
        Self {
            repository,
            receivable_service,
        }
    }
}

#[async_trait::async_trait]
impl IncomeServiceTrait for IncomeService {
    async fn record_income(&self, new_entry: NewIncomeEntry) -> Result<IncomeEntry> {
        new_entry.validate()?;

        let activity = new_entry.recorded_activity();
        let entry = self.repository.create(new_entry, activity).await?;

        if entry.is_deposit {
            debug!("Entry {} is a deposit, opening a receivable", entry.id);
            self.receivable_service.create_from_deposit(&entry).await?;
        }

        Ok(entry)
    }

    async fn update_income(&self, update: IncomeEntryUpdate) -> Result<IncomeEntry> {
        update.validate()?;
        let activity = update.updated_activity();
        self.repository.update(update, activity).await
    }

    async fn delete_income(&self, entry_id: &str) -> Result<()> {
        let entry = self.repository.get_by_id(entry_id)?;
        self.repository
            .delete(entry_id, entry.deleted_activity())
            .await
    }

    fn get_income_entry(&self, entry_id: &str) -> Result<IncomeEntry> {
        self.repository.get_by_id(entry_id)
    }

    fn list_income_entries(
        &self,
        range: Option<(DateTime<Utc>, DateTime<Utc>)>,
    ) -> Result<Vec<IncomeEntry>> {
        self.repository.list(range)
    }
}

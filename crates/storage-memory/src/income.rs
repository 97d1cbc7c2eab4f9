use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use tallybook_core::activities::NewActivity;
use tallybook_core::income::{
    IncomeEntry, IncomeEntryUpdate, IncomeRepositoryTrait, NewIncomeEntry,
};
use tallybook_core::{Error, Result};

use crate::store::{materialize_activity, next_id, MemoryStore};

/// In-memory repository for income entries.
pub struct MemoryIncomeRepository {
    store: Arc<MemoryStore>,
}

impl MemoryIncomeRepository {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl IncomeRepositoryTrait for MemoryIncomeRepository {
    async fn create(
        &self,
        new_entry: NewIncomeEntry,
        activity: NewActivity,
    ) -> Result<IncomeEntry> {
        let now = Utc::now();
        let entry = IncomeEntry {
            id: next_id(),
            customer_id: new_entry.customer_id.clone(),
            entry_type: new_entry.entry_type.clone(),
            amount: new_entry.amount,
            is_deposit: new_entry.is_deposit,
            total_amount: new_entry.total_amount,
            receipt_ref: new_entry.receipt_ref.clone(),
            description: new_entry.description.clone(),
            created_at: now,
            updated_at: now,
        };

        let mut entries = self.store.income_entries.write().unwrap();
        let mut activities = self.store.activities.write().unwrap();
        entries.push(entry.clone());
        activities.push(materialize_activity(activity, Some(&entry.id)));

        Ok(entry)
    }

    async fn update(
        &self,
        update: IncomeEntryUpdate,
        activity: NewActivity,
    ) -> Result<IncomeEntry> {
        let mut entries = self.store.income_entries.write().unwrap();
        let mut activities = self.store.activities.write().unwrap();

        let row = entries
            .iter_mut()
            .find(|e| e.id == update.id)
            .ok_or_else(|| {
                Error::NotFound(format!("Income entry with id {} not found", update.id))
            })?;

        row.customer_id = update.customer_id.clone();
        row.entry_type = update.entry_type.clone();
        row.amount = update.amount;
        row.is_deposit = update.is_deposit;
        row.total_amount = update.total_amount;
        row.receipt_ref = update.receipt_ref.clone();
        row.description = update.description.clone();
        row.updated_at = Utc::now();
        let updated = row.clone();

        activities.push(materialize_activity(activity, Some(&updated.id)));

        Ok(updated)
    }

    async fn delete(&self, entry_id: &str, activity: NewActivity) -> Result<()> {
        let mut entries = self.store.income_entries.write().unwrap();
        let mut activities = self.store.activities.write().unwrap();

        let before = entries.len();
        entries.retain(|e| e.id != entry_id);
        if entries.len() == before {
            return Err(Error::NotFound(format!(
                "Income entry with id {} not found",
                entry_id
            )));
        }

        activities.push(materialize_activity(activity, Some(entry_id)));
        Ok(())
    }

    fn get_by_id(&self, entry_id: &str) -> Result<IncomeEntry> {
        self.store
            .income_entries
            .read()
            .unwrap()
            .iter()
            .find(|e| e.id == entry_id)
            .cloned()
            .ok_or_else(|| Error::NotFound(format!("Income entry with id {} not found", entry_id)))
    }

    fn list(&self, range: Option<(DateTime<Utc>, DateTime<Utc>)>) -> Result<Vec<IncomeEntry>> {
        let entries = self.store.income_entries.read().unwrap();
        let mut rows: Vec<IncomeEntry> = entries
            .iter()
            .filter(|e| match range {
                Some((start, end)) => e.created_at >= start && e.created_at <= end,
                None => true,
            })
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(rows)
    }

    fn sum_between(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Decimal> {
        let entries = self.store.income_entries.read().unwrap();
        Ok(entries
            .iter()
            .filter(|e| e.created_at >= start && e.created_at < end)
            .map(|e| e.amount)
            .sum())
    }

    fn sum_total(&self) -> Result<Decimal> {
        let entries = self.store.income_entries.read().unwrap();
        Ok(entries.iter().map(|e| e.amount).sum())
    }
}

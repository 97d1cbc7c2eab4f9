use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use tallybook_core::activities::NewActivity;
use tallybook_core::expenses::{
    ExpenseEntry, ExpenseEntryUpdate, ExpenseRepositoryTrait, NewExpenseEntry,
};
use tallybook_core::{Error, Result};

use crate::store::{materialize_activity, next_id, MemoryStore};

/// In-memory repository for expense entries.
pub struct MemoryExpenseRepository {
    store: Arc<MemoryStore>,
}

impl MemoryExpenseRepository {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ExpenseRepositoryTrait for MemoryExpenseRepository {
    async fn create(
        &self,
        new_entry: NewExpenseEntry,
        activity: NewActivity,
    ) -> Result<ExpenseEntry> {
        let now = Utc::now();
        let entry = ExpenseEntry {
            id: next_id(),
            amount: new_entry.amount,
            reason: new_entry.reason.clone(),
            description: new_entry.description.clone(),
            created_at: now,
            updated_at: now,
        };

        let mut entries = self.store.expense_entries.write().unwrap();
        let mut activities = self.store.activities.write().unwrap();
        entries.push(entry.clone());
        activities.push(materialize_activity(activity, Some(&entry.id)));

        Ok(entry)
    }

    async fn update(
        &self,
        update: ExpenseEntryUpdate,
        activity: NewActivity,
    ) -> Result<ExpenseEntry> {
        let mut entries = self.store.expense_entries.write().unwrap();
        let mut activities = self.store.activities.write().unwrap();

        let row = entries
            .iter_mut()
            .find(|e| e.id == update.id)
            .ok_or_else(|| {
                Error::NotFound(format!("Expense entry with id {} not found", update.id))
            })?;

        row.amount = update.amount;
        row.reason = update.reason.clone();
        row.description = update.description.clone();
        row.updated_at = Utc::now();
        let updated = row.clone();

        activities.push(materialize_activity(activity, Some(&updated.id)));

        Ok(updated)
    }

    async fn delete(&self, entry_id: &str, activity: NewActivity) -> Result<()> {
        let mut entries = self.store.expense_entries.write().unwrap();
        let mut activities = self.store.activities.write().unwrap();

        let before = entries.len();
        entries.retain(|e| e.id != entry_id);
        if entries.len() == before {
            return Err(Error::NotFound(format!(
                "Expense entry with id {} not found",
                entry_id
            )));
        }

        activities.push(materialize_activity(activity, Some(entry_id)));
        Ok(())
    }

    fn get_by_id(&self, entry_id: &str) -> Result<ExpenseEntry> {
        self.store
            .expense_entries
            .read()
            .unwrap()
            .iter()
            .find(|e| e.id == entry_id)
            .cloned()
            .ok_or_else(|| {
                Error::NotFound(format!("Expense entry with id {} not found", entry_id))
            })
    }

    fn list(&self, range: Option<(DateTime<Utc>, DateTime<Utc>)>) -> Result<Vec<ExpenseEntry>> {
        let entries = self.store.expense_entries.read().unwrap();
        let mut rows: Vec<ExpenseEntry> = entries
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

    fn sum_total(&self) -> Result<Decimal> {
        let entries = self.store.expense_entries.read().unwrap();
        Ok(entries.iter().map(|e| e.amount).sum())
    }
}

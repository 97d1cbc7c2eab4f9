use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use rust_decimal::Decimal;

use tallybook_core::activities::NewActivity;
use tallybook_core::expenses::{
    ExpenseEntry, ExpenseEntryUpdate, ExpenseRepositoryTrait, NewExpenseEntry,
};
use tallybook_core::{Error, Result};

use super::model::ExpenseEntryDB;
use crate::activities::ActivityDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::{activities, expense_entries};
use crate::utils::parse_decimal;

/// Repository for managing expense entries in the database.
pub struct ExpenseRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl ExpenseRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

#[async_trait]
impl ExpenseRepositoryTrait for ExpenseRepository {
    async fn create(
        &self,
        new_entry: NewExpenseEntry,
        activity: NewActivity,
    ) -> Result<ExpenseEntry> {
        self.writer
            .exec(move |conn| {
                let row = ExpenseEntryDB::from_new(&new_entry);
                diesel::insert_into(expense_entries::table)
                    .values(&row)
                    .execute(conn)
                    .into_core()?;

                let note = ActivityDB::from_new(activity, Some(&row.id));
                diesel::insert_into(activities::table)
                    .values(&note)
                    .execute(conn)
                    .into_core()?;

                Ok(ExpenseEntry::from(row))
            })
            .await
    }

    async fn update(
        &self,
        update: ExpenseEntryUpdate,
        activity: NewActivity,
    ) -> Result<ExpenseEntry> {
        self.writer
            .exec(move |conn| {
                let existing = expense_entries::table
                    .select(ExpenseEntryDB::as_select())
                    .find(&update.id)
                    .first::<ExpenseEntryDB>(conn)
                    .optional()
                    .into_core()?
                    .ok_or_else(|| {
                        Error::NotFound(format!("Expense entry with id {} not found", update.id))
                    })?;

                let row = ExpenseEntryDB::from_update(&update, &existing);
                diesel::update(expense_entries::table.find(&row.id))
                    .set(&row)
                    .execute(conn)
                    .into_core()?;

                let note = ActivityDB::from_new(activity, Some(&row.id));
                diesel::insert_into(activities::table)
                    .values(&note)
                    .execute(conn)
                    .into_core()?;

                Ok(ExpenseEntry::from(row))
            })
            .await
    }

    async fn delete(&self, entry_id: &str, activity: NewActivity) -> Result<()> {
        let entry_id = entry_id.to_string();
        self.writer
            .exec(move |conn| {
                let affected = diesel::delete(expense_entries::table.find(&entry_id))
                    .execute(conn)
                    .into_core()?;
                if affected == 0 {
                    return Err(Error::NotFound(format!(
                        "Expense entry with id {} not found",
                        entry_id
                    )));
                }

                let note = ActivityDB::from_new(activity, Some(&entry_id));
                diesel::insert_into(activities::table)
                    .values(&note)
                    .execute(conn)
                    .into_core()?;

                Ok(())
            })
            .await
    }

    fn get_by_id(&self, entry_id: &str) -> Result<ExpenseEntry> {
        let mut conn = get_connection(&self.pool)?;

        let row = expense_entries::table
            .select(ExpenseEntryDB::as_select())
            .find(entry_id)
            .first::<ExpenseEntryDB>(&mut conn)
            .optional()
            .into_core()?
            .ok_or_else(|| {
                Error::NotFound(format!("Expense entry with id {} not found", entry_id))
            })?;

        Ok(row.into())
    }

    fn list(&self, range: Option<(DateTime<Utc>, DateTime<Utc>)>) -> Result<Vec<ExpenseEntry>> {
        let mut conn = get_connection(&self.pool)?;

        let mut query = expense_entries::table.into_boxed();
        if let Some((start, end)) = range {
            query = query
                .filter(expense_entries::created_at.ge(start.naive_utc()))
                .filter(expense_entries::created_at.le(end.naive_utc()));
        }

        let rows = query
            .select(ExpenseEntryDB::as_select())
            .order(expense_entries::created_at.desc())
            .load::<ExpenseEntryDB>(&mut conn)
            .into_core()?;

        Ok(rows.into_iter().map(ExpenseEntry::from).collect())
    }

    fn sum_total(&self) -> Result<Decimal> {
        let mut conn = get_connection(&self.pool)?;

        let amounts: Vec<String> = expense_entries::table
            .select(expense_entries::amount)
            .load::<String>(&mut conn)
            .into_core()?;

        Ok(amounts
            .iter()
            .map(|s| parse_decimal(s, "amount"))
            .sum())
    }
}

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use rust_decimal::Decimal;

use tallybook_core::activities::NewActivity;
use tallybook_core::income::{
    IncomeEntry, IncomeEntryUpdate, IncomeRepositoryTrait, NewIncomeEntry,
};
use tallybook_core::{Error, Result};

use super::model::IncomeEntryDB;
use crate::activities::ActivityDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::{activities, income_entries};
use crate::utils::parse_decimal;

/// Repository for managing income entries in the database.
pub struct IncomeRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl IncomeRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

#[async_trait]
impl IncomeRepositoryTrait for IncomeRepository {
    async fn create(
        &self,
        new_entry: NewIncomeEntry,
        activity: NewActivity,
    ) -> Result<IncomeEntry> {
        self.writer
            .exec(move |conn| {
                let row = IncomeEntryDB::from_new(&new_entry);
                diesel::insert_into(income_entries::table)
                    .values(&row)
                    .execute(conn)
                    .into_core()?;

                let note = ActivityDB::from_new(activity, Some(&row.id));
                diesel::insert_into(activities::table)
                    .values(&note)
                    .execute(conn)
                    .into_core()?;

                Ok(IncomeEntry::from(row))
            })
            .await
    }

    async fn update(
        &self,
        update: IncomeEntryUpdate,
        activity: NewActivity,
    ) -> Result<IncomeEntry> {
        self.writer
            .exec(move |conn| {
                let existing = income_entries::table
                    .select(IncomeEntryDB::as_select())
                    .find(&update.id)
                    .first::<IncomeEntryDB>(conn)
                    .optional()
                    .into_core()?
                    .ok_or_else(|| {
                        Error::NotFound(format!("Income entry with id {} not found", update.id))
                    })?;

                let row = IncomeEntryDB::from_update(&update, &existing);
                diesel::update(income_entries::table.find(&row.id))
                    .set(&row)
                    .execute(conn)
                    .into_core()?;

                let note = ActivityDB::from_new(activity, Some(&row.id));
                diesel::insert_into(activities::table)
                    .values(&note)
                    .execute(conn)
                    .into_core()?;

                Ok(IncomeEntry::from(row))
            })
            .await
    }

    async fn delete(&self, entry_id: &str, activity: NewActivity) -> Result<()> {
        let entry_id = entry_id.to_string();
        self.writer
            .exec(move |conn| {
                let affected = diesel::delete(income_entries::table.find(&entry_id))
                    .execute(conn)
                    .into_core()?;
                if affected == 0 {
                    return Err(Error::NotFound(format!(
                        "Income entry with id {} not found",
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

    fn get_by_id(&self, entry_id: &str) -> Result<IncomeEntry> {
        let mut conn = get_connection(&self.pool)?;

        let row = income_entries::table
            .select(IncomeEntryDB::as_select())
            .find(entry_id)
            .first::<IncomeEntryDB>(&mut conn)
            .optional()
            .into_core()?
            .ok_or_else(|| {
                Error::NotFound(format!("Income entry with id {} not found", entry_id))
            })?;

        Ok(row.into())
    }

    fn list(&self, range: Option<(DateTime<Utc>, DateTime<Utc>)>) -> Result<Vec<IncomeEntry>> {
        let mut conn = get_connection(&self.pool)?;

        let mut query = income_entries::table.into_boxed();
        if let Some((start, end)) = range {
            query = query
                .filter(income_entries::created_at.ge(start.naive_utc()))
                .filter(income_entries::created_at.le(end.naive_utc()));
        }

        let rows = query
            .select(IncomeEntryDB::as_select())
            .order(income_entries::created_at.desc())
            .load::<IncomeEntryDB>(&mut conn)
            .into_core()?;

        Ok(rows.into_iter().map(IncomeEntry::from).collect())
    }

    fn sum_between(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Decimal> {
        let mut conn = get_connection(&self.pool)?;

        // Decimal columns are TEXT; sum in decimal space rather than
        // handing the arithmetic to SQLite's floating point.
        let amounts: Vec<String> = income_entries::table
            .filter(income_entries::created_at.ge(start.naive_utc()))
            .filter(income_entries::created_at.lt(end.naive_utc()))
            .select(income_entries::amount)
            .load::<String>(&mut conn)
            .into_core()?;

        Ok(amounts
            .iter()
            .map(|s| parse_decimal(s, "amount"))
            .sum())
    }

    fn sum_total(&self) -> Result<Decimal> {
        let mut conn = get_connection(&self.pool)?;

        let amounts: Vec<String> = income_entries::table
            .select(income_entries::amount)
            .load::<String>(&mut conn)
            .into_core()?;

        Ok(amounts
            .iter()
            .map(|s| parse_decimal(s, "amount"))
            .sum())
    }
}

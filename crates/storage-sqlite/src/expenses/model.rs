//! Database models for expense entries.

use chrono::{NaiveDateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use tallybook_core::expenses::{ExpenseEntry, ExpenseEntryUpdate, NewExpenseEntry};

use crate::utils::{parse_decimal, to_utc};

/// Database model for expense entries.
#[derive(Queryable, Selectable, Identifiable, Insertable, AsChangeset, Debug, Clone)]
#[diesel(table_name = crate::schema::expense_entries)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[diesel(treat_none_as_null = true)]
pub struct ExpenseEntryDB {
    pub id: String,
    pub amount: String,
    pub reason: String,
    pub description: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl ExpenseEntryDB {
    pub fn from_new(new: &NewExpenseEntry) -> Self {
        let now = Utc::now().naive_utc();
        Self {
            id: Uuid::new_v4().to_string(),
            amount: new.amount.to_string(),
            reason: new.reason.clone(),
            description: new.description.clone(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn from_update(update: &ExpenseEntryUpdate, existing: &ExpenseEntryDB) -> Self {
        Self {
            id: existing.id.clone(),
            amount: update.amount.to_string(),
            reason: update.reason.clone(),
            description: update.description.clone(),
            created_at: existing.created_at,
            updated_at: Utc::now().naive_utc(),
        }
    }
}

impl From<ExpenseEntryDB> for ExpenseEntry {
    fn from(db: ExpenseEntryDB) -> Self {
        Self {
            id: db.id,
            amount: parse_decimal(&db.amount, "amount"),
            reason: db.reason,
            description: db.description,
            created_at: to_utc(db.created_at),
            updated_at: to_utc(db.updated_at),
        }
    }
}

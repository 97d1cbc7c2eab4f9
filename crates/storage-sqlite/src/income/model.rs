//! Database models for income entries.

use chrono::{NaiveDateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use tallybook_core::income::{IncomeEntry, IncomeEntryUpdate, NewIncomeEntry};

use crate::utils::{parse_decimal, to_utc};

/// Database model for income entries. Monetary columns are TEXT-encoded
/// decimals; binary floating point never touches the ledger.
#[derive(Queryable, Selectable, Identifiable, Insertable, AsChangeset, Debug, Clone)]
#[diesel(table_name = crate::schema::income_entries)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[diesel(treat_none_as_null = true)]
pub struct IncomeEntryDB {
    pub id: String,
    pub customer_id: Option<String>,
    pub entry_type: String,
    pub amount: String,
    pub is_deposit: bool,
    pub total_amount: Option<String>,
    pub receipt_ref: Option<String>,
    pub description: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl IncomeEntryDB {
    pub fn from_new(new: &NewIncomeEntry) -> Self {
        let now = Utc::now().naive_utc();
        Self {
            id: Uuid::new_v4().to_string(),
            customer_id: new.customer_id.clone(),
            entry_type: new.entry_type.clone(),
            amount: new.amount.to_string(),
            is_deposit: new.is_deposit,
            total_amount: new.total_amount.map(|d| d.to_string()),
            receipt_ref: new.receipt_ref.clone(),
            description: new.description.clone(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Applies an edit on top of an existing row, preserving creation data.
    pub fn from_update(update: &IncomeEntryUpdate, existing: &IncomeEntryDB) -> Self {
        Self {
            id: existing.id.clone(),
            customer_id: update.customer_id.clone(),
            entry_type: update.entry_type.clone(),
            amount: update.amount.to_string(),
            is_deposit: update.is_deposit,
            total_amount: update.total_amount.map(|d| d.to_string()),
            receipt_ref: update.receipt_ref.clone(),
            description: update.description.clone(),
            created_at: existing.created_at,
            updated_at: Utc::now().naive_utc(),
        }
    }
}

impl From<IncomeEntryDB> for IncomeEntry {
    fn from(db: IncomeEntryDB) -> Self {
        Self {
            id: db.id,
            customer_id: db.customer_id,
            entry_type: db.entry_type,
            amount: parse_decimal(&db.amount, "amount"),
            is_deposit: db.is_deposit,
            total_amount: db
                .total_amount
                .as_deref()
                .map(|s| parse_decimal(s, "total_amount")),
            receipt_ref: db.receipt_ref,
            description: db.description,
            created_at: to_utc(db.created_at),
            updated_at: to_utc(db.updated_at),
        }
    }
}

//! Database models for receivables and their payments.

use chrono::{NaiveDateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use tallybook_core::receivables::{
    NewReceivable, NewReceivablePayment, Receivable, ReceivablePayment, ReceivableStatus,
};

use crate::utils::{parse_decimal, to_utc};

/// Database model for receivables. Balance columns are TEXT-encoded
/// decimals so settlement arithmetic round-trips exactly.
#[derive(Queryable, Selectable, Identifiable, Insertable, AsChangeset, Debug, Clone)]
#[diesel(table_name = crate::schema::receivables)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[diesel(treat_none_as_null = true)]
pub struct ReceivableDB {
    pub id: String,
    pub customer_id: Option<String>,
    pub income_entry_id: Option<String>,
    pub total_amount: String,
    pub paid_amount: String,
    pub remaining_amount: String,
    pub status: String,
    pub description: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl ReceivableDB {
    pub fn from_new(new: &NewReceivable) -> Self {
        let now = Utc::now().naive_utc();
        Self {
            id: Uuid::new_v4().to_string(),
            customer_id: new.customer_id.clone(),
            income_entry_id: new.income_entry_id.clone(),
            total_amount: new.total_amount.to_string(),
            paid_amount: new.paid_amount.to_string(),
            remaining_amount: new.remaining_amount.to_string(),
            status: new.status.as_str().to_string(),
            description: new.description.clone(),
            created_at: now,
            updated_at: now,
        }
    }
}

impl From<ReceivableDB> for Receivable {
    fn from(db: ReceivableDB) -> Self {
        let status = db.status.parse().unwrap_or_else(|_| {
            log::error!("Unknown status '{}' on receivable {}", db.status, db.id);
            ReceivableStatus::Pending
        });
        Self {
            id: db.id,
            customer_id: db.customer_id,
            income_entry_id: db.income_entry_id,
            total_amount: parse_decimal(&db.total_amount, "total_amount"),
            paid_amount: parse_decimal(&db.paid_amount, "paid_amount"),
            remaining_amount: parse_decimal(&db.remaining_amount, "remaining_amount"),
            status,
            description: db.description,
            created_at: to_utc(db.created_at),
            updated_at: to_utc(db.updated_at),
        }
    }
}

/// Database model for receivable payments.
#[derive(Queryable, Selectable, Identifiable, Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::receivable_payments)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ReceivablePaymentDB {
    pub id: String,
    pub receivable_id: String,
    pub amount: String,
    pub description: Option<String>,
    pub receipt_ref: Option<String>,
    pub created_at: NaiveDateTime,
}

impl ReceivablePaymentDB {
    pub fn from_new(new: &NewReceivablePayment) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            receivable_id: new.receivable_id.clone(),
            amount: new.amount.to_string(),
            description: new.description.clone(),
            receipt_ref: new.receipt_ref.clone(),
            created_at: Utc::now().naive_utc(),
        }
    }
}

impl From<ReceivablePaymentDB> for ReceivablePayment {
    fn from(db: ReceivablePaymentDB) -> Self {
        Self {
            id: db.id,
            receivable_id: db.receivable_id,
            amount: parse_decimal(&db.amount, "amount"),
            description: db.description,
            receipt_ref: db.receipt_ref,
            created_at: to_utc(db.created_at),
        }
    }
}

//! Database models for customers.

use chrono::{NaiveDate, NaiveDateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use tallybook_core::customers::{Customer, NewCustomer, SubscriptionType};

use crate::utils::to_utc;

/// Database model for customers.
#[derive(Queryable, Selectable, Identifiable, Insertable, AsChangeset, Debug, Clone)]
#[diesel(table_name = crate::schema::customers)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct CustomerDB {
    pub id: String,
    pub name: String,
    pub join_date: NaiveDate,
    pub subscription_type: String,
    pub expiry_date: NaiveDate,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl CustomerDB {
    /// Builds an insertable row; the subscription expiry is derived here
    /// through the core model so every provider computes it the same way.
    pub fn from_new(new: &NewCustomer) -> Self {
        let now = Utc::now().naive_utc();
        Self {
            id: Uuid::new_v4().to_string(),
            name: new.name.clone(),
            join_date: new.join_date,
            subscription_type: new.subscription_type.as_str().to_string(),
            expiry_date: new.expiry_date(),
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }
}

impl From<CustomerDB> for Customer {
    fn from(db: CustomerDB) -> Self {
        let subscription_type = db.subscription_type.parse().unwrap_or_else(|_| {
            log::error!(
                "Unknown subscription type '{}' on customer {}",
                db.subscription_type,
                db.id
            );
            SubscriptionType::Annual
        });
        Self {
            id: db.id,
            name: db.name,
            join_date: db.join_date,
            subscription_type,
            expiry_date: db.expiry_date,
            is_active: db.is_active,
            created_at: to_utc(db.created_at),
            updated_at: to_utc(db.updated_at),
        }
    }
}

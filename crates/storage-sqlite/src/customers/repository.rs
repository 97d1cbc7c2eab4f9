use std::sync::Arc;

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use diesel::prelude::*;

use tallybook_core::activities::NewActivity;
use tallybook_core::customers::{Customer, CustomerRepositoryTrait, CustomerUpdate, NewCustomer};
use tallybook_core::{Error, Result};

use super::model::CustomerDB;
use crate::activities::ActivityDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::{activities, customers};

/// Repository for managing customer data in the database.
pub struct CustomerRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl CustomerRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

#[async_trait]
impl CustomerRepositoryTrait for CustomerRepository {
    async fn create(&self, new_customer: NewCustomer, activity: NewActivity) -> Result<Customer> {
        self.writer
            .exec(move |conn| {
                let row = CustomerDB::from_new(&new_customer);
                diesel::insert_into(customers::table)
                    .values(&row)
                    .execute(conn)
                    .into_core()?;

                let note = ActivityDB::from_new(activity, Some(&row.id));
                diesel::insert_into(activities::table)
                    .values(&note)
                    .execute(conn)
                    .into_core()?;

                Ok(Customer::from(row))
            })
            .await
    }

    async fn update(&self, update: CustomerUpdate, activity: NewActivity) -> Result<Customer> {
        self.writer
            .exec(move |conn| {
                let existing = customers::table
                    .select(CustomerDB::as_select())
                    .find(&update.id)
                    .first::<CustomerDB>(conn)
                    .optional()
                    .into_core()?
                    .ok_or_else(|| {
                        Error::NotFound(format!("Customer with id {} not found", update.id))
                    })?;

                let row = CustomerDB {
                    id: existing.id,
                    name: update.name.clone(),
                    join_date: update.join_date,
                    subscription_type: update.subscription_type.as_str().to_string(),
                    expiry_date: update.expiry_date(),
                    is_active: update.is_active,
                    created_at: existing.created_at,
                    updated_at: Utc::now().naive_utc(),
                };

                diesel::update(customers::table.find(&row.id))
                    .set(&row)
                    .execute(conn)
                    .into_core()?;

                let note = ActivityDB::from_new(activity, Some(&row.id));
                diesel::insert_into(activities::table)
                    .values(&note)
                    .execute(conn)
                    .into_core()?;

                Ok(Customer::from(row))
            })
            .await
    }

    async fn renew(
        &self,
        customer_id: &str,
        new_expiry: NaiveDate,
        activity: NewActivity,
    ) -> Result<Customer> {
        let customer_id = customer_id.to_string();
        self.writer
            .exec(move |conn| {
                let affected = diesel::update(customers::table.find(&customer_id))
                    .set((
                        customers::expiry_date.eq(new_expiry),
                        customers::is_active.eq(true),
                        customers::updated_at.eq(Utc::now().naive_utc()),
                    ))
                    .execute(conn)
                    .into_core()?;
                if affected == 0 {
                    return Err(Error::NotFound(format!(
                        "Customer with id {} not found",
                        customer_id
                    )));
                }

                let note = ActivityDB::from_new(activity, Some(&customer_id));
                diesel::insert_into(activities::table)
                    .values(&note)
                    .execute(conn)
                    .into_core()?;

                let row = customers::table
                    .select(CustomerDB::as_select())
                    .find(&customer_id)
                    .first::<CustomerDB>(conn)
                    .into_core()?;
                Ok(Customer::from(row))
            })
            .await
    }

    async fn delete(&self, customer_id: &str, activity: NewActivity) -> Result<()> {
        let customer_id = customer_id.to_string();
        self.writer
            .exec(move |conn| {
                let affected = diesel::delete(customers::table.find(&customer_id))
                    .execute(conn)
                    .into_core()?;
                if affected == 0 {
                    return Err(Error::NotFound(format!(
                        "Customer with id {} not found",
                        customer_id
                    )));
                }

                let note = ActivityDB::from_new(activity, Some(&customer_id));
                diesel::insert_into(activities::table)
                    .values(&note)
                    .execute(conn)
                    .into_core()?;

                Ok(())
            })
            .await
    }

    fn get_by_id(&self, customer_id: &str) -> Result<Customer> {
        let mut conn = get_connection(&self.pool)?;

        let row = customers::table
            .select(CustomerDB::as_select())
            .find(customer_id)
            .first::<CustomerDB>(&mut conn)
            .optional()
            .into_core()?
            .ok_or_else(|| {
                Error::NotFound(format!("Customer with id {} not found", customer_id))
            })?;

        Ok(row.into())
    }

    fn list(&self) -> Result<Vec<Customer>> {
        let mut conn = get_connection(&self.pool)?;

        let rows = customers::table
            .select(CustomerDB::as_select())
            .order(customers::created_at.desc())
            .load::<CustomerDB>(&mut conn)
            .into_core()?;

        Ok(rows.into_iter().map(Customer::from).collect())
    }

    fn list_expiring_before(&self, cutoff: NaiveDate) -> Result<Vec<Customer>> {
        let mut conn = get_connection(&self.pool)?;

        let rows = customers::table
            .select(CustomerDB::as_select())
            .filter(customers::is_active.eq(true))
            .filter(customers::expiry_date.le(cutoff))
            .order(customers::expiry_date.asc())
            .load::<CustomerDB>(&mut conn)
            .into_core()?;

        Ok(rows.into_iter().map(Customer::from).collect())
    }

    fn count_active(&self) -> Result<i64> {
        let mut conn = get_connection(&self.pool)?;

        customers::table
            .filter(customers::is_active.eq(true))
            .count()
            .get_result(&mut conn)
            .into_core()
    }

    fn count_expired(&self, as_of: NaiveDate) -> Result<i64> {
        let mut conn = get_connection(&self.pool)?;

        customers::table
            .filter(customers::is_active.eq(true))
            .filter(customers::expiry_date.lt(as_of))
            .count()
            .get_result(&mut conn)
            .into_core()
    }
}

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};

use tallybook_core::activities::NewActivity;
use tallybook_core::customers::{Customer, CustomerRepositoryTrait, CustomerUpdate, NewCustomer};
use tallybook_core::{Error, Result};

use crate::store::{materialize_activity, next_id, MemoryStore};

/// In-memory repository for customer data.
pub struct MemoryCustomerRepository {
    store: Arc<MemoryStore>,
}

impl MemoryCustomerRepository {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl CustomerRepositoryTrait for MemoryCustomerRepository {
    async fn create(&self, new_customer: NewCustomer, activity: NewActivity) -> Result<Customer> {
        let now = Utc::now();
        let customer = Customer {
            id: next_id(),
            name: new_customer.name.clone(),
            join_date: new_customer.join_date,
            subscription_type: new_customer.subscription_type,
            expiry_date: new_customer.expiry_date(),
            is_active: true,
            created_at: now,
            updated_at: now,
        };

        let mut customers = self.store.customers.write().unwrap();
        let mut activities = self.store.activities.write().unwrap();
        customers.push(customer.clone());
        activities.push(materialize_activity(activity, Some(&customer.id)));

        Ok(customer)
    }

    async fn update(&self, update: CustomerUpdate, activity: NewActivity) -> Result<Customer> {
        let mut customers = self.store.customers.write().unwrap();
        let mut activities = self.store.activities.write().unwrap();

        let row = customers
            .iter_mut()
            .find(|c| c.id == update.id)
            .ok_or_else(|| Error::NotFound(format!("Customer with id {} not found", update.id)))?;

        row.name = update.name.clone();
        row.join_date = update.join_date;
        row.subscription_type = update.subscription_type;
        row.expiry_date = update.expiry_date();
        row.is_active = update.is_active;
        row.updated_at = Utc::now();
        let updated = row.clone();

        activities.push(materialize_activity(activity, Some(&updated.id)));

        Ok(updated)
    }

    async fn renew(
        &self,
        customer_id: &str,
        new_expiry: NaiveDate,
        activity: NewActivity,
    ) -> Result<Customer> {
        let mut customers = self.store.customers.write().unwrap();
        let mut activities = self.store.activities.write().unwrap();

        let row = customers
            .iter_mut()
            .find(|c| c.id == customer_id)
            .ok_or_else(|| {
                Error::NotFound(format!("Customer with id {} not found", customer_id))
            })?;

        row.expiry_date = new_expiry;
        row.is_active = true;
        row.updated_at = Utc::now();
        let renewed = row.clone();

        activities.push(materialize_activity(activity, Some(&renewed.id)));

        Ok(renewed)
    }

    async fn delete(&self, customer_id: &str, activity: NewActivity) -> Result<()> {
        let mut customers = self.store.customers.write().unwrap();
        let mut activities = self.store.activities.write().unwrap();

        let before = customers.len();
        customers.retain(|c| c.id != customer_id);
        if customers.len() == before {
            return Err(Error::NotFound(format!(
                "Customer with id {} not found",
                customer_id
            )));
        }

        activities.push(materialize_activity(activity, Some(customer_id)));
        Ok(())
    }

    fn get_by_id(&self, customer_id: &str) -> Result<Customer> {
        self.store
            .customers
            .read()
            .unwrap()
            .iter()
            .find(|c| c.id == customer_id)
            .cloned()
            .ok_or_else(|| Error::NotFound(format!("Customer with id {} not found", customer_id)))
    }

    fn list(&self) -> Result<Vec<Customer>> {
        let customers = self.store.customers.read().unwrap();
        let mut rows = customers.clone();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(rows)
    }

    fn list_expiring_before(&self, cutoff: NaiveDate) -> Result<Vec<Customer>> {
        let customers = self.store.customers.read().unwrap();
        let mut rows: Vec<Customer> = customers
            .iter()
            .filter(|c| c.is_active && c.expiry_date <= cutoff)
            .cloned()
            .collect();
        rows.sort_by(|a, b| a.expiry_date.cmp(&b.expiry_date));
        Ok(rows)
    }

    fn count_active(&self) -> Result<i64> {
        let customers = self.store.customers.read().unwrap();
        Ok(customers.iter().filter(|c| c.is_active).count() as i64)
    }

    fn count_expired(&self, as_of: NaiveDate) -> Result<i64> {
        let customers = self.store.customers.read().unwrap();
        Ok(customers
            .iter()
            .filter(|c| c.is_active && c.expiry_date < as_of)
            .count() as i64)
    }
}

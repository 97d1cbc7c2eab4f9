use log::debug;
use std::sync::Arc;

use chrono::{Days, Utc};

use super::customers_model::{Customer, CustomerUpdate, NewCustomer};
use super::customers_traits::{CustomerRepositoryTrait, CustomerServiceTrait};
use crate::errors::Result;

/// Service for managing subscription customers.
pub struct CustomerService {
    repository: Arc<dyn CustomerRepositoryTrait>,
}

impl CustomerService {
    pub fn new(repository: Arc<dyn CustomerRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait::async_trait]
impl CustomerServiceTrait for CustomerService {
    async fn create_customer(&self, new_customer: NewCustomer) -> Result<Customer> {
        new_customer.validate()?;
        debug!(
            "Creating customer '{}' on a {} subscription",
            new_customer.name, new_customer.subscription_type
        );
        let activity = new_customer.created_activity();
        self.repository.create(new_customer, activity).await
    }

    async fn update_customer(&self, update: CustomerUpdate) -> Result<Customer> {
        update.validate()?;
        let activity = update.updated_activity();
        self.repository.update(update, activity).await
    }

    async fn renew_subscription(&self, customer_id: &str) -> Result<Customer> {
        let customer = self.repository.get_by_id(customer_id)?;
        debug!(
            "Renewing subscription for customer '{}' until {}",
            customer.name,
            customer.renewed_expiry()
        );
        self.repository
            .renew(
                customer_id,
                customer.renewed_expiry(),
                customer.renewed_activity(),
            )
            .await
    }

    async fn delete_customer(&self, customer_id: &str) -> Result<()> {
        let customer = self.repository.get_by_id(customer_id)?;
        self.repository
            .delete(customer_id, customer.deleted_activity())
            .await
    }

    fn get_customer(&self, customer_id: &str) -> Result<Customer> {
        self.repository.get_by_id(customer_id)
    }

    fn list_customers(&self) -> Result<Vec<Customer>> {
        self.repository.list()
    }

    fn list_expiring_customers(&self, days: i64) -> Result<Vec<Customer>> {
        let cutoff = Utc::now()
            .date_naive()
            .checked_add_days(Days::new(days.max(0) as u64))
            .unwrap_or_else(|| Utc::now().date_naive());
        self.repository.list_expiring_before(cutoff)
    }
}

//! Customer repository and service traits.

use async_trait::async_trait;
use chrono::NaiveDate;

use super::customers_model::{Customer, CustomerUpdate, NewCustomer};
use crate::activities::NewActivity;
use crate::errors::Result;

/// Trait defining the contract for customer persistence.
#[async_trait]
pub trait CustomerRepositoryTrait: Send + Sync {
    /// Inserts the customer and its audit activity in one transaction. When
    /// the activity template has no related id, the implementation fills in
    /// the id of the created row.
    async fn create(&self, new_customer: NewCustomer, activity: NewActivity) -> Result<Customer>;

    /// Updates a customer and appends the audit activity in one transaction.
    async fn update(&self, update: CustomerUpdate, activity: NewActivity) -> Result<Customer>;

    /// Extends a customer's subscription to `new_expiry`, reactivating the
    /// row, and appends the audit activity in one transaction.
    async fn renew(
        &self,
        customer_id: &str,
        new_expiry: NaiveDate,
        activity: NewActivity,
    ) -> Result<Customer>;

    /// Deletes a customer and appends the audit activity in one transaction.
    async fn delete(&self, customer_id: &str, activity: NewActivity) -> Result<()>;

    /// Retrieves a customer by its ID.
    fn get_by_id(&self, customer_id: &str) -> Result<Customer>;

    /// Lists all customers, newest first.
    fn list(&self) -> Result<Vec<Customer>>;

    /// Active customers whose subscription expires on or before `cutoff`.
    fn list_expiring_before(&self, cutoff: NaiveDate) -> Result<Vec<Customer>>;

    /// Number of active customers.
    fn count_active(&self) -> Result<i64>;

    /// Number of active customers whose subscription expired before `as_of`.
    fn count_expired(&self, as_of: NaiveDate) -> Result<i64>;
}

/// Trait defining the contract for customer service operations.
#[async_trait]
pub trait CustomerServiceTrait: Send + Sync {
    /// Creates a customer, deriving the subscription expiry date.
    async fn create_customer(&self, new_customer: NewCustomer) -> Result<Customer>;

    /// Updates a customer, re-deriving the expiry date.
    async fn update_customer(&self, update: CustomerUpdate) -> Result<Customer>;

    /// Extends a subscription by one year from its current expiry and
    /// reactivates the customer.
    async fn renew_subscription(&self, customer_id: &str) -> Result<Customer>;

    /// Deletes a customer.
    async fn delete_customer(&self, customer_id: &str) -> Result<()>;

    /// Retrieves a customer by ID.
    fn get_customer(&self, customer_id: &str) -> Result<Customer>;

    /// Lists all customers, newest first.
    fn list_customers(&self) -> Result<Vec<Customer>>;

    /// Active customers expiring within the next `days` days.
    fn list_expiring_customers(&self, days: i64) -> Result<Vec<Customer>>;
}

//! Customers module - subscription customers.

mod customers_model;
mod customers_service;
mod customers_traits;

#[cfg(test)]
mod customers_model_tests;

pub use customers_model::{Customer, CustomerUpdate, NewCustomer, SubscriptionType};
pub use customers_service::CustomerService;
pub use customers_traits::{CustomerRepositoryTrait, CustomerServiceTrait};

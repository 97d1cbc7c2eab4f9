//! Receivables module - deposit settlement workflow.
//!
//! A receivable tracks the outstanding balance of a deposit-based sale: the
//! customer pays part of the total up front and the remainder is settled
//! over time through individual payments. The balance arithmetic lives in
//! pure functions on the models here so every persistence provider runs the
//! identical computation inside its transaction.

mod receivables_errors;
mod receivables_model;
mod receivables_service;
mod receivables_traits;

#[cfg(test)]
mod receivables_model_tests;

#[cfg(test)]
mod receivables_service_tests;

pub use receivables_errors::ReceivableError;
pub use receivables_model::{
    NewReceivable, NewReceivablePayment, Receivable, ReceivablePayment, ReceivableStatus,
};
pub use receivables_service::ReceivableService;
pub use receivables_traits::{ReceivableRepositoryTrait, ReceivableServiceTrait};

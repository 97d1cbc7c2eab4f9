//! Expenses module - outgoing ledger entries.

mod expenses_model;
mod expenses_service;
mod expenses_traits;

pub use expenses_model::{ExpenseEntry, ExpenseEntryUpdate, NewExpenseEntry};
pub use expenses_service::ExpenseService;
pub use expenses_traits::{ExpenseRepositoryTrait, ExpenseServiceTrait};

//! Tallybook domain core.
//!
//! This crate holds the business rules of the back-office ledger: customers
//! and their subscriptions, income and expense entries, deposit receivables
//! with their settlement arithmetic, employees, the audit activity feed, and
//! the dashboard read model.
//!
//! The crate is completely storage-agnostic. Persistence is reached through
//! the repository traits defined per module; concrete providers live in
//! `tallybook-storage-sqlite` (durable) and `tallybook-storage-memory`
//! (ephemeral, for tests and offline use). All balance arithmetic is done in
//! pure model functions so that every provider executes the exact same
//! computation inside its transaction.

pub mod activities;
pub mod customers;
pub mod dashboard;
pub mod employees;
pub mod errors;
pub mod expenses;
pub mod income;
pub mod receivables;
pub mod reports;

#[cfg(feature = "testkit")]
pub mod testkit;

pub use errors::Error;
pub use errors::Result;

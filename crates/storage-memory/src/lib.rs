//! Ephemeral in-memory storage implementation for Tallybook.
//!
//! The second persistence provider: the same repository traits as
//! `tallybook-storage-sqlite`, backed by `RwLock`-guarded tables. Used for
//! tests and for running without a database; everything is lost when the
//! process exits.
//!
//! There is deliberately no business logic here. Balance arithmetic,
//! validation, and audit-note construction all come from the
//! `tallybook-core` model functions, so this provider cannot drift from
//! the durable one; the shared settlement suite in `tallybook_core::testkit`
//! runs against both to keep it that way.
//!
//! Write methods take the relevant table write guards for their whole
//! read-compute-write span, which serializes concurrent writers. Guards
//! are always acquired in the declaration order of [`MemoryStore`]'s
//! fields to keep lock ordering consistent.

mod store;

mod activities;
mod customers;
mod employees;
mod expenses;
mod income;
mod receivables;

pub use store::MemoryStore;

pub use activities::MemoryActivityRepository;
pub use customers::MemoryCustomerRepository;
pub use employees::MemoryEmployeeRepository;
pub use expenses::MemoryExpenseRepository;
pub use income::MemoryIncomeRepository;
pub use receivables::MemoryReceivableRepository;

// Re-export from tallybook-core for convenience
pub use tallybook_core::errors::{Error, Result};

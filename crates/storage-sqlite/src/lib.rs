//! SQLite storage implementation for Tallybook.
//!
//! This crate is the durable persistence provider: it implements the
//! repository traits defined in `tallybook-core` with Diesel over SQLite
//! and is the only place in the workspace where Diesel types exist.
//!
//! ```text
//!   core (domain, traits)
//!          │
//!          ▼
//!   storage-sqlite (this crate)      storage-memory (ephemeral twin)
//!          │
//!          ▼
//!      SQLite DB
//! ```
//!
//! Reads go through an r2d2 pool; every write is a job on a single-writer
//! actor that wraps it in one immediate transaction, which is what makes
//! multi-row operations atomic and serializes concurrent writers.

pub mod db;
pub mod errors;
pub mod schema;

mod utils;

// Repository implementations
pub mod activities;
pub mod customers;
pub mod employees;
pub mod expenses;
pub mod income;
pub mod receivables;

// Re-export database utilities
pub use db::{
    create_pool, get_connection, get_db_path, init, run_migrations, spawn_writer, DbConnection,
    DbPool, WriteHandle,
};

// Re-export storage errors and conversion helpers
pub use errors::{IntoCore, StorageError};

// Re-export from tallybook-core for convenience
pub use tallybook_core::errors::{DatabaseError, Error, Result};

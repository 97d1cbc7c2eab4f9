//! Shared in-process tables.

use std::sync::RwLock;

use chrono::Utc;
use uuid::Uuid;

use tallybook_core::activities::{Activity, NewActivity};
use tallybook_core::customers::Customer;
use tallybook_core::employees::Employee;
use tallybook_core::expenses::ExpenseEntry;
use tallybook_core::income::IncomeEntry;
use tallybook_core::receivables::{Receivable, ReceivablePayment};

/// The in-process database: one `RwLock`-guarded table per entity, shared
/// by all repositories through an `Arc`.
#[derive(Default)]
pub struct MemoryStore {
    pub(crate) customers: RwLock<Vec<Customer>>,
    pub(crate) income_entries: RwLock<Vec<IncomeEntry>>,
    pub(crate) expense_entries: RwLock<Vec<ExpenseEntry>>,
    pub(crate) employees: RwLock<Vec<Employee>>,
    pub(crate) receivables: RwLock<Vec<Receivable>>,
    pub(crate) receivable_payments: RwLock<Vec<ReceivablePayment>>,
    pub(crate) activities: RwLock<Vec<Activity>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        log::info!("Using in-memory storage; data will be lost on exit");
        Self::default()
    }
}

pub(crate) fn next_id() -> String {
    Uuid::new_v4().to_string()
}

/// Materializes an audit note, filling the related id with `fallback` when
/// the template left it empty.
pub(crate) fn materialize_activity(new: NewActivity, fallback_related: Option<&str>) -> Activity {
    Activity {
        id: next_id(),
        activity_type: new.activity_type,
        description: new.description,
        related_id: new
            .related_id
            .or_else(|| fallback_related.map(str::to_string)),
        created_at: Utc::now(),
    }
}

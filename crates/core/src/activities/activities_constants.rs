/// Audit activity type tags.
///
/// Each constant tags one kind of state-changing event in the ledger. The
/// tag is stored verbatim on the activity row and is part of the read
/// surface, so the set is closed and values never change.

/// A customer record was created.
pub const ACTIVITY_TYPE_CUSTOMER_ADDED: &str = "customer_added";

/// A customer record was edited.
pub const ACTIVITY_TYPE_CUSTOMER_UPDATED: &str = "customer_updated";

/// A customer record was removed.
pub const ACTIVITY_TYPE_CUSTOMER_DELETED: &str = "customer_deleted";

/// A customer's subscription was extended by another year.
pub const ACTIVITY_TYPE_SUBSCRIPTION_RENEWED: &str = "subscription_renewed";

/// An income entry was recorded.
pub const ACTIVITY_TYPE_INCOME_ADDED: &str = "income_added";

/// An income entry was edited.
pub const ACTIVITY_TYPE_INCOME_UPDATED: &str = "income_updated";

/// An income entry was removed.
pub const ACTIVITY_TYPE_INCOME_DELETED: &str = "income_deleted";

/// An expense entry was recorded.
pub const ACTIVITY_TYPE_EXPENSE_ADDED: &str = "expense_added";

/// An expense entry was edited.
pub const ACTIVITY_TYPE_EXPENSE_UPDATED: &str = "expense_updated";

/// An expense entry was removed.
pub const ACTIVITY_TYPE_EXPENSE_DELETED: &str = "expense_deleted";

/// An employee record was created.
pub const ACTIVITY_TYPE_EMPLOYEE_ADDED: &str = "employee_added";

/// A receivable was opened from a deposit sale.
pub const ACTIVITY_TYPE_RECEIVABLE_ADDED: &str = "receivable_added";

/// A payment was applied against a receivable.
pub const ACTIVITY_TYPE_PAYMENT_RECEIVED: &str = "payment_received";

/// A receivable was removed by an administrator.
pub const ACTIVITY_TYPE_RECEIVABLE_DELETED: &str = "receivable_deleted";

/// Default number of rows returned by the recent-activities feed.
pub const RECENT_ACTIVITIES_DEFAULT_LIMIT: i64 = 10;

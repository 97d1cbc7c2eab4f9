/// Income entry types.

/// Over-the-counter sale of goods.
pub const INCOME_TYPE_SALES: &str = "sales";

/// Recurring subscription fee.
pub const INCOME_TYPE_SUBSCRIPTION: &str = "subscription";

/// Deposit-based sale: part of the total collected now, the remainder
/// tracked as a receivable.
pub const INCOME_TYPE_DEPOSIT: &str = "deposit";

/// The closed set of valid entry types.
pub const INCOME_ENTRY_TYPES: [&str; 3] =
    [INCOME_TYPE_SALES, INCOME_TYPE_SUBSCRIPTION, INCOME_TYPE_DEPOSIT];

//! Small conversion helpers shared by the database models.

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use rust_decimal::Decimal;
use std::str::FromStr;

/// Parses a TEXT-encoded decimal column. Stored values are always written
/// by us via `Decimal::to_string`, so a parse failure means a corrupted
/// row; it is logged and read as zero rather than poisoning the whole
/// result set.
pub(crate) fn parse_decimal(value: &str, field: &str) -> Decimal {
    Decimal::from_str(value).unwrap_or_else(|e| {
        log::error!(
            "Failed to parse {} '{}': {}. Falling back to zero.",
            field,
            value,
            e
        );
        Decimal::ZERO
    })
}

/// Re-attaches the UTC zone to a naive database timestamp.
pub(crate) fn to_utc(naive: NaiveDateTime) -> DateTime<Utc> {
    Utc.from_utc_datetime(&naive)
}

//! Errors raised by the receivable settlement workflow.

use rust_decimal::Decimal;
use thiserror::Error;

/// Settlement errors. Every variant is detected before any row is written,
/// so a failed operation leaves no partial state behind.
#[derive(Error, Debug)]
pub enum ReceivableError {
    /// A deposit sale lacks a total amount, or collected more than the total.
    #[error("Invalid deposit: {0}")]
    InvalidDeposit(String),

    /// A payment amount is zero or negative.
    #[error("Invalid payment amount: {0}")]
    InvalidAmount(Decimal),

    /// A payment would drive the remaining balance below zero. The whole
    /// payment is rejected; the caller must resubmit a smaller amount.
    #[error("Payment of {attempted} exceeds remaining balance of {remaining}")]
    Overpayment {
        attempted: Decimal,
        remaining: Decimal,
    },
}

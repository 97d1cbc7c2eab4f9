//! Receivable domain models and settlement arithmetic.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::receivables_errors::ReceivableError;
use crate::activities::{
    NewActivity, ACTIVITY_TYPE_PAYMENT_RECEIVED, ACTIVITY_TYPE_RECEIVABLE_ADDED,
    ACTIVITY_TYPE_RECEIVABLE_DELETED,
};
use crate::errors::{Error, Result, ValidationError};

/// Settlement state of a receivable, implied entirely by its balances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ReceivableStatus {
    /// No payment recorded yet. The deposit flow never produces this state
    /// (a deposit has collected something by definition); it is the column
    /// default so historical rows round-trip.
    #[default]
    Pending,
    /// Partially settled: 0 < paid < total.
    Partial,
    /// Fully settled: the remaining balance is zero. Terminal, because any
    /// further positive payment exceeds a zero remainder and is rejected.
    Paid,
}

impl ReceivableStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReceivableStatus::Pending => "pending",
            ReceivableStatus::Partial => "partial",
            ReceivableStatus::Paid => "paid",
        }
    }

    /// Status implied by a paid amount and a remaining balance.
    pub fn from_balances(paid: Decimal, remaining: Decimal) -> Self {
        if remaining.is_zero() {
            ReceivableStatus::Paid
        } else if paid.is_zero() {
            ReceivableStatus::Pending
        } else {
            ReceivableStatus::Partial
        }
    }
}

impl fmt::Display for ReceivableStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReceivableStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "pending" => Ok(ReceivableStatus::Pending),
            "partial" => Ok(ReceivableStatus::Partial),
            "paid" => Ok(ReceivableStatus::Paid),
            other => Err(ValidationError::InvalidInput(format!(
                "unknown receivable status '{}'",
                other
            ))
            .into()),
        }
    }
}

/// A tracked outstanding balance owed by a customer after a deposit sale.
///
/// Invariants, upheld by [`NewReceivable::from_deposit`] and
/// [`Receivable::settle`] and re-checked by the settlement tests:
/// `paid_amount + remaining_amount == total_amount` exactly,
/// `0 <= paid_amount <= total_amount`, and the status always matches the
/// balances.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receivable {
    pub id: String,
    pub customer_id: Option<String>,
    /// The deposit sale this receivable was opened from.
    pub income_entry_id: Option<String>,
    /// Full sale price, fixed at creation.
    pub total_amount: Decimal,
    /// Sum of the deposit and all applied payments. Never decreases.
    pub paid_amount: Decimal,
    /// `total_amount - paid_amount`, kept stored so reads need no arithmetic.
    pub remaining_amount: Decimal,
    pub status: ReceivableStatus,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Receivable {
    /// Applies one payment and returns the updated receivable.
    ///
    /// This is the only place settlement balances change. Rejects
    /// non-positive amounts with `InvalidAmount` and amounts above the
    /// remaining balance with `Overpayment`; a fully settled receivable
    /// therefore rejects every further payment.
    pub fn settle(&self, amount: Decimal, at: DateTime<Utc>) -> Result<Receivable> {
        if amount <= Decimal::ZERO {
            return Err(ReceivableError::InvalidAmount(amount).into());
        }
        if amount > self.remaining_amount {
            return Err(ReceivableError::Overpayment {
                attempted: amount,
                remaining: self.remaining_amount,
            }
            .into());
        }

        let paid = self.paid_amount + amount;
        let remaining = self.remaining_amount - amount;

        Ok(Receivable {
            paid_amount: paid,
            remaining_amount: remaining,
            status: ReceivableStatus::from_balances(paid, remaining),
            updated_at: at,
            ..self.clone()
        })
    }

    /// Audit note for a payment that produced this (already updated)
    /// receivable state.
    pub fn payment_activity(&self, amount: Decimal) -> NewActivity {
        NewActivity::new(
            ACTIVITY_TYPE_PAYMENT_RECEIVED,
            format!(
                "Received payment of {} on receivable, {} remaining",
                amount, self.remaining_amount
            ),
            Some(self.id.clone()),
        )
    }

    /// Audit note for the administrative deletion of this receivable.
    pub fn deleted_activity(&self) -> NewActivity {
        NewActivity::new(
            ACTIVITY_TYPE_RECEIVABLE_DELETED,
            format!(
                "Deleted receivable of {} with {} outstanding",
                self.total_amount, self.remaining_amount
            ),
            Some(self.id.clone()),
        )
    }
}

/// Input model for a receivable opened by a deposit sale.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewReceivable {
    pub customer_id: Option<String>,
    pub income_entry_id: Option<String>,
    pub total_amount: Decimal,
    pub paid_amount: Decimal,
    pub remaining_amount: Decimal,
    pub status: ReceivableStatus,
    pub description: Option<String>,
}

impl NewReceivable {
    /// Builds the receivable opened by a deposit sale.
    ///
    /// `amount` is what was collected at sale time, `total_amount` the full
    /// price. Fails with `InvalidDeposit` when the total is missing, the
    /// collected amount is negative, or the total is less than the
    /// collected amount.
    pub fn from_deposit(
        customer_id: Option<String>,
        income_entry_id: Option<String>,
        amount: Decimal,
        total_amount: Option<Decimal>,
        description: Option<String>,
    ) -> Result<Self> {
        let total = total_amount.ok_or_else(|| {
            ReceivableError::InvalidDeposit(
                "a deposit sale requires the full sale amount".to_string(),
            )
        })?;
        if amount < Decimal::ZERO {
            return Err(ReceivableError::InvalidDeposit(format!(
                "collected amount {} cannot be negative",
                amount
            ))
            .into());
        }
        if total < amount {
            return Err(ReceivableError::InvalidDeposit(format!(
                "collected amount {} exceeds the total of {}",
                amount, total
            ))
            .into());
        }

        let remaining = total - amount;

        Ok(Self {
            customer_id,
            income_entry_id,
            total_amount: total,
            paid_amount: amount,
            remaining_amount: remaining,
            status: ReceivableStatus::from_balances(amount, remaining),
            description,
        })
    }

    /// Audit note describing the newly opened receivable. The related id
    /// points at the originating sale, matching what operators look up.
    pub fn opened_activity(&self) -> NewActivity {
        NewActivity::new(
            ACTIVITY_TYPE_RECEIVABLE_ADDED,
            format!(
                "Opened receivable of {}: {} paid, {} outstanding",
                self.total_amount, self.paid_amount, self.remaining_amount
            ),
            self.income_entry_id.clone(),
        )
    }
}

/// Immutable record of one payment applied against a receivable.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceivablePayment {
    pub id: String,
    pub receivable_id: String,
    pub amount: Decimal,
    pub description: Option<String>,
    pub receipt_ref: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Input model for applying a payment to a receivable.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewReceivablePayment {
    pub receivable_id: String,
    pub amount: Decimal,
    pub description: Option<String>,
    pub receipt_ref: Option<String>,
}

impl NewReceivablePayment {
    /// Validates the payment input before any storage access.
    pub fn validate(&self) -> Result<()> {
        if self.receivable_id.trim().is_empty() {
            return Err(ValidationError::MissingField("receivableId".to_string()).into());
        }
        if self.amount <= Decimal::ZERO {
            return Err(ReceivableError::InvalidAmount(self.amount).into());
        }
        Ok(())
    }
}

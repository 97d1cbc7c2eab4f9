//! Income entry domain models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::income_constants::INCOME_ENTRY_TYPES;
use crate::activities::{
    NewActivity, ACTIVITY_TYPE_INCOME_ADDED, ACTIVITY_TYPE_INCOME_DELETED,
    ACTIVITY_TYPE_INCOME_UPDATED,
};
use crate::errors::{Result, ValidationError};
use crate::receivables::ReceivableError;

/// A recorded sale. When `is_deposit` is set, only `amount` was collected
/// at sale time and the rest of `total_amount` becomes a receivable. The
/// settlement workflow reads these rows but never mutates them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomeEntry {
    pub id: String,
    pub customer_id: Option<String>,
    pub entry_type: String,
    /// Money actually collected at the time of sale.
    pub amount: Decimal,
    pub is_deposit: bool,
    /// Full sale price; present exactly when `is_deposit` is set.
    pub total_amount: Option<Decimal>,
    /// Opaque reference to a stored receipt document.
    pub receipt_ref: Option<String>,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input model for recording an income entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewIncomeEntry {
    pub customer_id: Option<String>,
    pub entry_type: String,
    pub amount: Decimal,
    #[serde(default)]
    pub is_deposit: bool,
    pub total_amount: Option<Decimal>,
    pub receipt_ref: Option<String>,
    pub description: Option<String>,
}

impl NewIncomeEntry {
    /// Validates the entry, including the deposit invariant: a deposit must
    /// carry a total at least as large as the collected amount.
    pub fn validate(&self) -> Result<()> {
        if !INCOME_ENTRY_TYPES.contains(&self.entry_type.as_str()) {
            return Err(ValidationError::InvalidInput(format!(
                "unknown income entry type '{}'",
                self.entry_type
            ))
            .into());
        }
        if self.amount <= Decimal::ZERO {
            return Err(ValidationError::InvalidInput(format!(
                "amount must be positive, got {}",
                self.amount
            ))
            .into());
        }
        if self.is_deposit {
            match self.total_amount {
                None => {
                    return Err(ReceivableError::InvalidDeposit(
                        "a deposit sale requires the full sale amount".to_string(),
                    )
                    .into())
                }
                Some(total) if total < self.amount => {
                    return Err(ReceivableError::InvalidDeposit(format!(
                        "collected amount {} exceeds the total of {}",
                        self.amount, total
                    ))
                    .into())
                }
                Some(_) => {}
            }
        }
        Ok(())
    }

    /// Audit note for the recorded entry.
    pub fn recorded_activity(&self) -> NewActivity {
        NewActivity::new(
            ACTIVITY_TYPE_INCOME_ADDED,
            format!("Recorded {} income of {}", self.entry_type, self.amount),
            None,
        )
    }
}

/// Input model for editing an existing income entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomeEntryUpdate {
    pub id: String,
    pub customer_id: Option<String>,
    pub entry_type: String,
    pub amount: Decimal,
    #[serde(default)]
    pub is_deposit: bool,
    pub total_amount: Option<Decimal>,
    pub receipt_ref: Option<String>,
    pub description: Option<String>,
}

impl IncomeEntryUpdate {
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(ValidationError::MissingField("id".to_string()).into());
        }
        let as_new = NewIncomeEntry {
            customer_id: self.customer_id.clone(),
            entry_type: self.entry_type.clone(),
            amount: self.amount,
            is_deposit: self.is_deposit,
            total_amount: self.total_amount,
            receipt_ref: self.receipt_ref.clone(),
            description: self.description.clone(),
        };
        as_new.validate()
    }

    /// Audit note for the edit.
    pub fn updated_activity(&self) -> NewActivity {
        NewActivity::new(
            ACTIVITY_TYPE_INCOME_UPDATED,
            format!("Updated income entry worth {}", self.amount),
            Some(self.id.clone()),
        )
    }
}

impl IncomeEntry {
    /// Audit note for removing this entry.
    pub fn deleted_activity(&self) -> NewActivity {
        NewActivity::new(
            ACTIVITY_TYPE_INCOME_DELETED,
            format!("Deleted income entry worth {}", self.amount),
            Some(self.id.clone()),
        )
    }
}

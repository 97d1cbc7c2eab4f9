//! Expense entry domain models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::activities::{
    NewActivity, ACTIVITY_TYPE_EXPENSE_ADDED, ACTIVITY_TYPE_EXPENSE_DELETED,
    ACTIVITY_TYPE_EXPENSE_UPDATED,
};
use crate::errors::{Result, ValidationError};

/// One outgoing ledger entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseEntry {
    pub id: String,
    pub amount: Decimal,
    pub reason: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input model for recording an expense.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewExpenseEntry {
    pub amount: Decimal,
    pub reason: String,
    pub description: Option<String>,
}

impl NewExpenseEntry {
    pub fn validate(&self) -> Result<()> {
        if self.reason.trim().is_empty() {
            return Err(ValidationError::MissingField("reason".to_string()).into());
        }
        if self.amount <= Decimal::ZERO {
            return Err(ValidationError::InvalidInput(format!(
                "amount must be positive, got {}",
                self.amount
            ))
            .into());
        }
        Ok(())
    }

    /// Audit note for the recorded expense.
    pub fn recorded_activity(&self) -> NewActivity {
        NewActivity::new(
            ACTIVITY_TYPE_EXPENSE_ADDED,
            format!("Recorded expense: {} ({})", self.reason, self.amount),
            None,
        )
    }
}

/// Input model for editing an existing expense.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseEntryUpdate {
    pub id: String,
    pub amount: Decimal,
    pub reason: String,
    pub description: Option<String>,
}

impl ExpenseEntryUpdate {
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(ValidationError::MissingField("id".to_string()).into());
        }
        if self.reason.trim().is_empty() {
            return Err(ValidationError::MissingField("reason".to_string()).into());
        }
        if self.amount <= Decimal::ZERO {
            return Err(ValidationError::InvalidInput(format!(
                "amount must be positive, got {}",
                self.amount
            ))
            .into());
        }
        Ok(())
    }

    /// Audit note for the edit.
    pub fn updated_activity(&self) -> NewActivity {
        NewActivity::new(
            ACTIVITY_TYPE_EXPENSE_UPDATED,
            format!("Updated expense: {} ({})", self.reason, self.amount),
            Some(self.id.clone()),
        )
    }
}

impl ExpenseEntry {
    /// Audit note for removing this expense.
    pub fn deleted_activity(&self) -> NewActivity {
        NewActivity::new(
            ACTIVITY_TYPE_EXPENSE_DELETED,
            format!("Deleted expense: {} ({})", self.reason, self.amount),
            Some(self.id.clone()),
        )
    }
}

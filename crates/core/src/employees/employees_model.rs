//! Employee domain models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::activities::{NewActivity, ACTIVITY_TYPE_EMPLOYEE_ADDED};
use crate::errors::{Result, ValidationError};

/// A staff member. Removing an employee deactivates the row rather than
/// deleting it, so payroll history stays reconstructable.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: String,
    pub name: String,
    pub position: Option<String>,
    pub salary: Decimal,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input model for creating a new employee.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEmployee {
    pub name: String,
    pub position: Option<String>,
    pub salary: Decimal,
}

impl NewEmployee {
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingField("name".to_string()).into());
        }
        if self.salary < Decimal::ZERO {
            return Err(ValidationError::InvalidInput(format!(
                "salary cannot be negative, got {}",
                self.salary
            ))
            .into());
        }
        Ok(())
    }

    /// Audit note for the created employee.
    pub fn created_activity(&self) -> NewActivity {
        NewActivity::new(
            ACTIVITY_TYPE_EMPLOYEE_ADDED,
            format!("Added new employee: {}", self.name),
            None,
        )
    }
}

/// Input model for editing an existing employee.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeUpdate {
    pub id: String,
    pub name: String,
    pub position: Option<String>,
    pub salary: Decimal,
}

impl EmployeeUpdate {
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(ValidationError::MissingField("id".to_string()).into());
        }
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingField("name".to_string()).into());
        }
        if self.salary < Decimal::ZERO {
            return Err(ValidationError::InvalidInput(format!(
                "salary cannot be negative, got {}",
                self.salary
            ))
            .into());
        }
        Ok(())
    }
}

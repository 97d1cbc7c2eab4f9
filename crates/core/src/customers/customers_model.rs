//! Customer domain models.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Months, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::activities::{
    NewActivity, ACTIVITY_TYPE_CUSTOMER_ADDED, ACTIVITY_TYPE_CUSTOMER_DELETED,
    ACTIVITY_TYPE_CUSTOMER_UPDATED, ACTIVITY_TYPE_SUBSCRIPTION_RENEWED,
};
use crate::errors::{Error, Result, ValidationError};

/// Subscription billing cadence offered to customers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SubscriptionType {
    Annual,
    SemiAnnual,
    Quarterly,
}

impl SubscriptionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubscriptionType::Annual => "annual",
            SubscriptionType::SemiAnnual => "semi-annual",
            SubscriptionType::Quarterly => "quarterly",
        }
    }

    /// Months a subscription of this type runs before expiring.
    pub fn duration_months(&self) -> u32 {
        match self {
            SubscriptionType::Annual => 12,
            SubscriptionType::SemiAnnual => 6,
            SubscriptionType::Quarterly => 3,
        }
    }

    /// Expiry date for a subscription starting on `join_date`. Month-end
    /// starts clamp to the last day of the target month.
    pub fn expiry_from(&self, join_date: NaiveDate) -> NaiveDate {
        join_date
            .checked_add_months(Months::new(self.duration_months()))
            .unwrap_or(join_date)
    }
}

impl fmt::Display for SubscriptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SubscriptionType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "annual" => Ok(SubscriptionType::Annual),
            "semi-annual" => Ok(SubscriptionType::SemiAnnual),
            "quarterly" => Ok(SubscriptionType::Quarterly),
            other => Err(ValidationError::InvalidInput(format!(
                "unknown subscription type '{}'",
                other
            ))
            .into()),
        }
    }
}

/// A subscription customer. The settlement workflow only ever references
/// customers, it never mutates them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: String,
    pub name: String,
    pub join_date: NaiveDate,
    pub subscription_type: SubscriptionType,
    /// Derived from `join_date` and `subscription_type` at creation.
    pub expiry_date: NaiveDate,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Customer {
    /// Expiry after a renewal: one more year on top of the current expiry,
    /// whatever the billing cadence.
    pub fn renewed_expiry(&self) -> NaiveDate {
        self.expiry_date
            .checked_add_months(Months::new(12))
            .unwrap_or(self.expiry_date)
    }

    /// Audit note for the renewal.
    pub fn renewed_activity(&self) -> NewActivity {
        NewActivity::new(
            ACTIVITY_TYPE_SUBSCRIPTION_RENEWED,
            format!("Renewed subscription for customer: {}", self.name),
            Some(self.id.clone()),
        )
    }

    /// Audit note for removing this customer.
    pub fn deleted_activity(&self) -> NewActivity {
        NewActivity::new(
            ACTIVITY_TYPE_CUSTOMER_DELETED,
            format!("Deleted customer: {}", self.name),
            Some(self.id.clone()),
        )
    }
}

/// Input model for creating a new customer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCustomer {
    pub name: String,
    pub join_date: NaiveDate,
    pub subscription_type: SubscriptionType,
}

impl NewCustomer {
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingField("name".to_string()).into());
        }
        Ok(())
    }

    /// Expiry date of the new subscription.
    pub fn expiry_date(&self) -> NaiveDate {
        self.subscription_type.expiry_from(self.join_date)
    }

    /// Audit note for the created customer.
    pub fn created_activity(&self) -> NewActivity {
        NewActivity::new(
            ACTIVITY_TYPE_CUSTOMER_ADDED,
            format!("Added new customer: {}", self.name),
            None,
        )
    }
}

/// Input model for editing an existing customer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerUpdate {
    pub id: String,
    pub name: String,
    pub join_date: NaiveDate,
    pub subscription_type: SubscriptionType,
    pub is_active: bool,
}

impl CustomerUpdate {
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(ValidationError::MissingField("id".to_string()).into());
        }
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingField("name".to_string()).into());
        }
        Ok(())
    }

    /// Expiry date implied by the updated join date and cadence.
    pub fn expiry_date(&self) -> NaiveDate {
        self.subscription_type.expiry_from(self.join_date)
    }

    /// Audit note for the edit.
    pub fn updated_activity(&self) -> NewActivity {
        NewActivity::new(
            ACTIVITY_TYPE_CUSTOMER_UPDATED,
            format!("Updated customer: {}", self.name),
            Some(self.id.clone()),
        )
    }
}

//! Audit activity domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One append-only audit note describing a state-changing event.
///
/// Activities are written as a side effect of the operation they describe,
/// inside the same transaction wherever the operation demands it, and are
/// never updated or deleted afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: String,
    pub activity_type: String,
    pub description: String,
    /// Id of the entity that triggered the note, when there is one.
    pub related_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Input model for recording a new audit activity.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewActivity {
    pub activity_type: String,
    pub description: String,
    pub related_id: Option<String>,
}

impl NewActivity {
    pub fn new(
        activity_type: &str,
        description: String,
        related_id: Option<String>,
    ) -> Self {
        Self {
            activity_type: activity_type.to_string(),
            description,
            related_id,
        }
    }
}

//! Audit activity repository and service traits.

use async_trait::async_trait;

use super::activities_model::{Activity, NewActivity};
use crate::errors::Result;

/// Trait defining the contract for audit activity persistence.
///
/// Most activity rows are written by the entity repositories inside the
/// transaction of the operation they describe; `append` exists for the few
/// notes that stand on their own.
#[async_trait]
pub trait ActivityRepositoryTrait: Send + Sync {
    /// Appends a stand-alone audit activity.
    async fn append(&self, new_activity: NewActivity) -> Result<Activity>;

    /// Returns the most recent activities, newest first.
    fn recent(&self, limit: i64) -> Result<Vec<Activity>>;
}

/// Trait defining the contract for the audit feed read surface.
pub trait ActivityServiceTrait: Send + Sync {
    /// Returns the most recent activities, newest first.
    ///
    /// `limit` defaults to [`RECENT_ACTIVITIES_DEFAULT_LIMIT`] when absent.
    ///
    /// [`RECENT_ACTIVITIES_DEFAULT_LIMIT`]: super::RECENT_ACTIVITIES_DEFAULT_LIMIT
    fn recent_activities(&self, limit: Option<i64>) -> Result<Vec<Activity>>;
}

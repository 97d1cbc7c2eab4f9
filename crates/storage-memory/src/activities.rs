use std::sync::Arc;

use async_trait::async_trait;

use tallybook_core::activities::{Activity, ActivityRepositoryTrait, NewActivity};
use tallybook_core::Result;

use crate::store::{materialize_activity, MemoryStore};

/// In-memory repository for the audit activity feed.
pub struct MemoryActivityRepository {
    store: Arc<MemoryStore>,
}

impl MemoryActivityRepository {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ActivityRepositoryTrait for MemoryActivityRepository {
    async fn append(&self, new_activity: NewActivity) -> Result<Activity> {
        let activity = materialize_activity(new_activity, None);
        let mut activities = self.store.activities.write().unwrap();
        activities.push(activity.clone());
        Ok(activity)
    }

    fn recent(&self, limit: i64) -> Result<Vec<Activity>> {
        let activities = self.store.activities.read().unwrap();
        let mut rows: Vec<Activity> = activities.clone();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        rows.truncate(limit.max(0) as usize);
        Ok(rows)
    }
}

use std::sync::Arc;

use super::activities_constants::RECENT_ACTIVITIES_DEFAULT_LIMIT;
use super::activities_model::Activity;
use super::activities_traits::{ActivityRepositoryTrait, ActivityServiceTrait};
use crate::errors::Result;

/// Read surface over the audit activity feed.
pub struct ActivityService {
    repository: Arc<dyn ActivityRepositoryTrait>,
}

impl ActivityService {
    pub fn new(repository: Arc<dyn ActivityRepositoryTrait>) -> Self {
        Self { repository }
    }
}

impl ActivityServiceTrait for ActivityService {
    fn recent_activities(&self, limit: Option<i64>) -> Result<Vec<Activity>> {
        self.repository
            .recent(limit.unwrap_or(RECENT_ACTIVITIES_DEFAULT_LIMIT))
    }
}

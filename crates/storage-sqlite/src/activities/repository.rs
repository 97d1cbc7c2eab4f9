use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;

use tallybook_core::activities::{Activity, ActivityRepositoryTrait, NewActivity};
use tallybook_core::Result;

use super::model::ActivityDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::activities;

/// Repository for the audit activity feed.
pub struct ActivityRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl ActivityRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

#[async_trait]
impl ActivityRepositoryTrait for ActivityRepository {
    async fn append(&self, new_activity: NewActivity) -> Result<Activity> {
        self.writer
            .exec(move |conn| {
                let row = ActivityDB::from_new(new_activity, None);
                diesel::insert_into(activities::table)
                    .values(&row)
                    .execute(conn)
                    .into_core()?;
                Ok(Activity::from(row))
            })
            .await
    }

    fn recent(&self, limit: i64) -> Result<Vec<Activity>> {
        let mut conn = get_connection(&self.pool)?;

        let rows = activities::table
            .select(ActivityDB::as_select())
            .order(activities::created_at.desc())
            .limit(limit)
            .load::<ActivityDB>(&mut conn)
            .into_core()?;

        Ok(rows.into_iter().map(Activity::from).collect())
    }
}

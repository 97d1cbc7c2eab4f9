//! Database models for audit activities.

use chrono::{NaiveDateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use tallybook_core::activities::{Activity, NewActivity};

use crate::utils::to_utc;

/// Database model for audit activities.
#[derive(Queryable, Selectable, Identifiable, Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::activities)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ActivityDB {
    pub id: String,
    pub activity_type: String,
    pub description: String,
    pub related_id: Option<String>,
    pub created_at: NaiveDateTime,
}

impl ActivityDB {
    /// Builds an insertable row from the template, filling the related id
    /// with `fallback_related` when the template left it empty. Entity
    /// repositories use the fallback to point the note at the row they just
    /// created.
    pub fn from_new(new: NewActivity, fallback_related: Option<&str>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            activity_type: new.activity_type,
            description: new.description,
            related_id: new
                .related_id
                .or_else(|| fallback_related.map(str::to_string)),
            created_at: Utc::now().naive_utc(),
        }
    }
}

impl From<ActivityDB> for Activity {
    fn from(db: ActivityDB) -> Self {
        Self {
            id: db.id,
            activity_type: db.activity_type,
            description: db.description,
            related_id: db.related_id,
            created_at: to_utc(db.created_at),
        }
    }
}

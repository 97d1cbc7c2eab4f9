//! Database models for employees.

use chrono::{NaiveDateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use tallybook_core::employees::{Employee, EmployeeUpdate, NewEmployee};

use crate::utils::{parse_decimal, to_utc};

/// Database model for employees.
#[derive(Queryable, Selectable, Identifiable, Insertable, AsChangeset, Debug, Clone)]
#[diesel(table_name = crate::schema::employees)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[diesel(treat_none_as_null = true)]
pub struct EmployeeDB {
    pub id: String,
    pub name: String,
    pub position: Option<String>,
    pub salary: String,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl EmployeeDB {
    pub fn from_new(new: &NewEmployee) -> Self {
        let now = Utc::now().naive_utc();
        Self {
            id: Uuid::new_v4().to_string(),
            name: new.name.clone(),
            position: new.position.clone(),
            salary: new.salary.to_string(),
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn from_update(update: &EmployeeUpdate, existing: &EmployeeDB) -> Self {
        Self {
            id: existing.id.clone(),
            name: update.name.clone(),
            position: update.position.clone(),
            salary: update.salary.to_string(),
            is_active: existing.is_active,
            created_at: existing.created_at,
            updated_at: Utc::now().naive_utc(),
        }
    }
}

impl From<EmployeeDB> for Employee {
    fn from(db: EmployeeDB) -> Self {
        Self {
            id: db.id,
            name: db.name,
            position: db.position,
            salary: parse_decimal(&db.salary, "salary"),
            is_active: db.is_active,
            created_at: to_utc(db.created_at),
            updated_at: to_utc(db.updated_at),
        }
    }
}

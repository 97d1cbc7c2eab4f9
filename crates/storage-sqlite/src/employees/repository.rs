use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use rust_decimal::Decimal;

use tallybook_core::activities::NewActivity;
use tallybook_core::employees::{Employee, EmployeeRepositoryTrait, EmployeeUpdate, NewEmployee};
use tallybook_core::{Error, Result};

use super::model::EmployeeDB;
use crate::activities::ActivityDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::{activities, employees};
use crate::utils::parse_decimal;

/// Repository for managing employee data in the database.
pub struct EmployeeRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl EmployeeRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

#[async_trait]
impl EmployeeRepositoryTrait for EmployeeRepository {
    async fn create(&self, new_employee: NewEmployee, activity: NewActivity) -> Result<Employee> {
        self.writer
            .exec(move |conn| {
                let row = EmployeeDB::from_new(&new_employee);
                diesel::insert_into(employees::table)
                    .values(&row)
                    .execute(conn)
                    .into_core()?;

                let note = ActivityDB::from_new(activity, Some(&row.id));
                diesel::insert_into(activities::table)
                    .values(&note)
                    .execute(conn)
                    .into_core()?;

                Ok(Employee::from(row))
            })
            .await
    }

    async fn update(&self, update: EmployeeUpdate) -> Result<Employee> {
        self.writer
            .exec(move |conn| {
                let existing = employees::table
                    .select(EmployeeDB::as_select())
                    .find(&update.id)
                    .first::<EmployeeDB>(conn)
                    .optional()
                    .into_core()?
                    .ok_or_else(|| {
                        Error::NotFound(format!("Employee with id {} not found", update.id))
                    })?;

                let row = EmployeeDB::from_update(&update, &existing);
                diesel::update(employees::table.find(&row.id))
                    .set(&row)
                    .execute(conn)
                    .into_core()?;

                Ok(Employee::from(row))
            })
            .await
    }

    async fn deactivate(&self, employee_id: &str) -> Result<()> {
        let employee_id = employee_id.to_string();
        self.writer
            .exec(move |conn| {
                let affected = diesel::update(employees::table.find(&employee_id))
                    .set((
                        employees::is_active.eq(false),
                        employees::updated_at.eq(Utc::now().naive_utc()),
                    ))
                    .execute(conn)
                    .into_core()?;
                if affected == 0 {
                    return Err(Error::NotFound(format!(
                        "Employee with id {} not found",
                        employee_id
                    )));
                }
                Ok(())
            })
            .await
    }

    fn get_by_id(&self, employee_id: &str) -> Result<Employee> {
        let mut conn = get_connection(&self.pool)?;

        let row = employees::table
            .select(EmployeeDB::as_select())
            .find(employee_id)
            .first::<EmployeeDB>(&mut conn)
            .optional()
            .into_core()?
            .ok_or_else(|| {
                Error::NotFound(format!("Employee with id {} not found", employee_id))
            })?;

        Ok(row.into())
    }

    fn list_active(&self) -> Result<Vec<Employee>> {
        let mut conn = get_connection(&self.pool)?;

        let rows = employees::table
            .select(EmployeeDB::as_select())
            .filter(employees::is_active.eq(true))
            .order(employees::created_at.desc())
            .load::<EmployeeDB>(&mut conn)
            .into_core()?;

        Ok(rows.into_iter().map(Employee::from).collect())
    }

    fn total_active_salaries(&self) -> Result<Decimal> {
        let mut conn = get_connection(&self.pool)?;

        let salaries: Vec<String> = employees::table
            .filter(employees::is_active.eq(true))
            .select(employees::salary)
            .load::<String>(&mut conn)
            .into_core()?;

        Ok(salaries
            .iter()
            .map(|s| parse_decimal(s, "salary"))
            .sum())
    }
}

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::Decimal;

use tallybook_core::activities::NewActivity;
use tallybook_core::employees::{Employee, EmployeeRepositoryTrait, EmployeeUpdate, NewEmployee};
use tallybook_core::{Error, Result};

use crate::store::{materialize_activity, next_id, MemoryStore};

/// In-memory repository for employee data.
pub struct MemoryEmployeeRepository {
    store: Arc<MemoryStore>,
}

impl MemoryEmployeeRepository {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl EmployeeRepositoryTrait for MemoryEmployeeRepository {
    async fn create(&self, new_employee: NewEmployee, activity: NewActivity) -> Result<Employee> {
        let now = Utc::now();
        let employee = Employee {
            id: next_id(),
            name: new_employee.name.clone(),
            position: new_employee.position.clone(),
            salary: new_employee.salary,
            is_active: true,
            created_at: now,
            updated_at: now,
        };

        let mut employees = self.store.employees.write().unwrap();
        let mut activities = self.store.activities.write().unwrap();
        employees.push(employee.clone());
        activities.push(materialize_activity(activity, Some(&employee.id)));

        Ok(employee)
    }

    async fn update(&self, update: EmployeeUpdate) -> Result<Employee> {
        let mut employees = self.store.employees.write().unwrap();
        let row = employees
            .iter_mut()
            .find(|e| e.id == update.id)
            .ok_or_else(|| Error::NotFound(format!("Employee with id {} not found", update.id)))?;

        row.name = update.name.clone();
        row.position = update.position.clone();
        row.salary = update.salary;
        row.updated_at = Utc::now();

        Ok(row.clone())
    }

    async fn deactivate(&self, employee_id: &str) -> Result<()> {
        let mut employees = self.store.employees.write().unwrap();
        let row = employees
            .iter_mut()
            .find(|e| e.id == employee_id)
            .ok_or_else(|| {
                Error::NotFound(format!("Employee with id {} not found", employee_id))
            })?;

        row.is_active = false;
        row.updated_at = Utc::now();
        Ok(())
    }

    fn get_by_id(&self, employee_id: &str) -> Result<Employee> {
        self.store
            .employees
            .read()
            .unwrap()
            .iter()
            .find(|e| e.id == employee_id)
            .cloned()
            .ok_or_else(|| Error::NotFound(format!("Employee with id {} not found", employee_id)))
    }

    fn list_active(&self) -> Result<Vec<Employee>> {
        let employees = self.store.employees.read().unwrap();
        let mut rows: Vec<Employee> = employees.iter().filter(|e| e.is_active).cloned().collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(rows)
    }

    fn total_active_salaries(&self) -> Result<Decimal> {
        let employees = self.store.employees.read().unwrap();
        Ok(employees
            .iter()
            .filter(|e| e.is_active)
            .map(|e| e.salary)
            .sum())
    }
}

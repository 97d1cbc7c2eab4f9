//! Employee repository and service traits.

use async_trait::async_trait;
use rust_decimal::Decimal;

use super::employees_model::{Employee, EmployeeUpdate, NewEmployee};
use crate::activities::NewActivity;
use crate::errors::Result;

/// Trait defining the contract for employee persistence.
#[async_trait]
pub trait EmployeeRepositoryTrait: Send + Sync {
    /// Inserts the employee and its audit activity in one transaction.
    async fn create(&self, new_employee: NewEmployee, activity: NewActivity) -> Result<Employee>;

    /// Updates an existing employee.
    async fn update(&self, update: EmployeeUpdate) -> Result<Employee>;

    /// Marks an employee inactive (soft delete).
    async fn deactivate(&self, employee_id: &str) -> Result<()>;

    /// Retrieves an employee by its ID.
    fn get_by_id(&self, employee_id: &str) -> Result<Employee>;

    /// Lists active employees, newest first.
    fn list_active(&self) -> Result<Vec<Employee>>;

    /// Sum of salaries over active employees.
    fn total_active_salaries(&self) -> Result<Decimal>;
}

/// Trait defining the contract for employee service operations.
#[async_trait]
pub trait EmployeeServiceTrait: Send + Sync {
    /// Validates and creates an employee.
    async fn create_employee(&self, new_employee: NewEmployee) -> Result<Employee>;

    /// Validates and applies an edit to an existing employee.
    async fn update_employee(&self, update: EmployeeUpdate) -> Result<Employee>;

    /// Deactivates an employee (soft delete).
    async fn remove_employee(&self, employee_id: &str) -> Result<()>;

    /// Lists active employees, newest first.
    fn list_employees(&self) -> Result<Vec<Employee>>;
}

use std::sync::Arc;

use super::employees_model::{Employee, EmployeeUpdate, NewEmployee};
use super::employees_traits::{EmployeeRepositoryTrait, EmployeeServiceTrait};
use crate::errors::Result;

/// Service for managing staff records.
pub struct EmployeeService {
    repository: Arc<dyn EmployeeRepositoryTrait>,
}

impl EmployeeService {
    pub fn new(repository: Arc<dyn EmployeeRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait::async_trait]
impl EmployeeServiceTrait for EmployeeService {
    async fn create_employee(&self, new_employee: NewEmployee) -> Result<Employee> {
        new_employee.validate()?;
        let activity = new_employee.created_activity();
        self.repository.create(new_employee, activity).await
    }

    async fn update_employee(&self, update: EmployeeUpdate) -> Result<Employee> {
        update.validate()?;
        self.repository.update(update).await
    }

    async fn remove_employee(&self, employee_id: &str) -> Result<()> {
        self.repository.deactivate(employee_id).await
    }

    fn list_employees(&self) -> Result<Vec<Employee>> {
        self.repository.list_active()
    }
}

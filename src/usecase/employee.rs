use std::sync::Arc;

use tracing::{debug, error, info};

use crate::error::Result;
use crate::model::employee::Employee;
use crate::repository::EmployeeRepository;

pub struct AddEmployee<R> {
    repository: Arc<R>,
}

impl<R: EmployeeRepository> AddEmployee<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, employee: Employee) -> Result<Employee> {
        let stored = self
            .repository
            .add_employee(employee)
            .await
            .inspect_err(|e| error!(error = %e, "Failed to Create Employee"))?;

        info!(employee_id = %stored.employee_id, "employee added");
        Ok(stored)
    }
}

pub struct GetEmployeeById<R> {
    repository: Arc<R>,
}

impl<R: EmployeeRepository> GetEmployeeById<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, employee_id: &str) -> Result<Employee> {
        debug!(employee_id, "fetching employee");
        self.repository.employee_by_id(employee_id).await
    }
}

pub struct DeleteEmployee<R> {
    repository: Arc<R>,
}

impl<R: EmployeeRepository> DeleteEmployee<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, employee_id: &str) -> Result<Employee> {
        let removed = self
            .repository
            .delete_employee(employee_id)
            .await
            .inspect_err(|e| error!(error = %e, employee_id, "Failed to delete employee"))?;

        info!(employee_id, "employee deleted");
        Ok(removed)
    }
}

pub struct GenerateQrCode<R> {
    repository: Arc<R>,
}

impl<R: EmployeeRepository> GenerateQrCode<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, first_name: &str, last_name: &str, mobile: &str) -> Result<String> {
        self.repository
            .generate_qr_code(first_name, last_name, mobile)
            .await
    }
}

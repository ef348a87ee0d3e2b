//! Capabilities the use cases need from storage. Implementations decide how
//! records are kept; failures come back as [`Error`] and are passed on as-is.

use std::future::Future;

use crate::error::{Error, Result};
use crate::model::attendance::Attendance;
use crate::model::employee::Employee;

pub mod memory;

pub trait AttendanceRepository: Send + Sync {
    fn attendance_by_id(&self, id: &str) -> impl Future<Output = Result<Attendance>> + Send;

    fn all_attendances(&self) -> impl Future<Output = Result<Vec<Attendance>>> + Send;

    /// Every known record for the employee, in no particular order.
    fn attendances_by_employee(
        &self,
        employee_id: &str,
    ) -> impl Future<Output = Result<Vec<Attendance>>> + Send;

    fn add_attendance(
        &self,
        attendance: Attendance,
    ) -> impl Future<Output = Result<Attendance>> + Send;

    /// Replaces a stored record. Unknown ids are [`Error::NotFound`].
    fn update_attendance(
        &self,
        attendance: Attendance,
    ) -> impl Future<Output = Result<Attendance>> + Send;
}

pub trait EmployeeRepository: Send + Sync {
    fn employee_by_id(&self, id: &str) -> impl Future<Output = Result<Employee>> + Send;

    fn all_employees(&self) -> impl Future<Output = Result<Vec<Employee>>> + Send;

    fn add_employee(&self, employee: Employee) -> impl Future<Output = Result<Employee>> + Send;

    fn update_employee(&self, employee: Employee)
    -> impl Future<Output = Result<Employee>> + Send;

    fn delete_employee(&self, id: &str) -> impl Future<Output = Result<Employee>> + Send;

    /// Payload to encode into the employee's QR badge.
    fn generate_qr_code(
        &self,
        first_name: &str,
        last_name: &str,
        mobile: &str,
    ) -> impl Future<Output = Result<String>> + Send;
}

pub(crate) fn not_found(what: &str, id: &str) -> Error {
    Error::NotFound(format!("{what} {id}"))
}

use std::future::ready;

use moka::future::Cache;
use moka::ops::compute::{CompResult, Op};
use tracing::debug;
use uuid::Uuid;

use crate::error::{CollaboratorError, Error, Result};
use crate::model::attendance::Attendance;
use crate::model::employee::{Employee, QrPayload};
use crate::repository::{AttendanceRepository, EmployeeRepository, not_found};

// No capacity and no expiry: these stores are the system of record, an entry
// only leaves through an explicit remove.
fn build_store<V>() -> Cache<String, V>
where
    V: Clone + Send + Sync + 'static,
{
    Cache::builder().build()
}

/// Replaces the value under `key` only if it is already there, in one step.
async fn replace_existing<V>(store: &Cache<String, V>, key: &str, value: V) -> Option<V>
where
    V: Clone + Send + Sync + 'static,
{
    let result = store
        .entry(key.to_string())
        .and_compute_with(|existing| {
            ready(match existing {
                Some(_) => Op::Put(value),
                None => Op::Nop,
            })
        })
        .await;

    match result {
        CompResult::ReplacedWith(entry) => Some(entry.into_value()),
        _ => None,
    }
}

/// Attendance records keyed by attendance id, held in process memory.
#[derive(Clone)]
pub struct InMemoryAttendanceRepository {
    records: Cache<String, Attendance>,
}

impl InMemoryAttendanceRepository {
    pub fn new() -> Self {
        Self {
            records: build_store(),
        }
    }

    fn snapshot(&self) -> Vec<Attendance> {
        let mut records: Vec<Attendance> = self.records.iter().map(|(_, a)| a).collect();
        records.sort_by_key(|a| (a.date(), a.time_in()));
        records
    }
}

impl AttendanceRepository for InMemoryAttendanceRepository {
    async fn attendance_by_id(&self, id: &str) -> Result<Attendance> {
        self.records
            .get(id)
            .await
            .ok_or_else(|| not_found("attendance", id))
    }

    async fn all_attendances(&self) -> Result<Vec<Attendance>> {
        Ok(self.snapshot())
    }

    async fn attendances_by_employee(&self, employee_id: &str) -> Result<Vec<Attendance>> {
        let records: Vec<Attendance> = self
            .snapshot()
            .into_iter()
            .filter(|a| a.employee_id() == employee_id)
            .collect();

        debug!(employee_id, count = records.len(), "attendances loaded");
        Ok(records)
    }

    async fn add_attendance(&self, attendance: Attendance) -> Result<Attendance> {
        let id = attendance.attendance_id().to_string();
        let entry = self.records.entry(id.clone()).or_insert(attendance).await;

        if !entry.is_fresh() {
            return Err(Error::Conflict(format!("attendance {id} already exists")));
        }
        Ok(entry.into_value())
    }

    async fn update_attendance(&self, attendance: Attendance) -> Result<Attendance> {
        let id = attendance.attendance_id().to_string();

        replace_existing(&self.records, &id, attendance)
            .await
            .ok_or_else(|| not_found("attendance", &id))
    }
}

impl Default for InMemoryAttendanceRepository {
    fn default() -> Self {
        Self::new()
    }
}

/// Employees keyed by employee id, held in process memory.
#[derive(Clone)]
pub struct InMemoryEmployeeRepository {
    employees: Cache<String, Employee>,
}

impl InMemoryEmployeeRepository {
    pub fn new() -> Self {
        Self {
            employees: build_store(),
        }
    }
}

impl Default for InMemoryEmployeeRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl EmployeeRepository for InMemoryEmployeeRepository {
    async fn employee_by_id(&self, id: &str) -> Result<Employee> {
        self.employees
            .get(id)
            .await
            .ok_or_else(|| not_found("employee", id))
    }

    async fn all_employees(&self) -> Result<Vec<Employee>> {
        let mut employees: Vec<Employee> = self.employees.iter().map(|(_, e)| e).collect();
        employees.sort_by(|a, b| a.employee_id.cmp(&b.employee_id));
        Ok(employees)
    }

    async fn add_employee(&self, employee: Employee) -> Result<Employee> {
        let id = employee.employee_id.clone();
        let entry = self.employees.entry(id.clone()).or_insert(employee).await;

        if !entry.is_fresh() {
            return Err(Error::Conflict(format!("employee {id} already exists")));
        }
        Ok(entry.into_value())
    }

    async fn update_employee(&self, employee: Employee) -> Result<Employee> {
        let id = employee.employee_id.clone();

        replace_existing(&self.employees, &id, employee)
            .await
            .ok_or_else(|| not_found("employee", &id))
    }

    async fn delete_employee(&self, id: &str) -> Result<Employee> {
        self.employees
            .remove(id)
            .await
            .ok_or_else(|| not_found("employee", id))
    }

    async fn generate_qr_code(
        &self,
        first_name: &str,
        last_name: &str,
        mobile: &str,
    ) -> Result<String> {
        let payload = QrPayload {
            employee_id: Uuid::new_v4().to_string(),
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            mobile: mobile.to_string(),
        };

        serde_json::to_string(&payload)
            .map_err(|e| CollaboratorError::Unknown(e.to_string()).into())
    }
}

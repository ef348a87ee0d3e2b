use std::sync::Arc;

use chrono::{NaiveDate, NaiveDateTime};
use tracing::{debug, error, info};
use uuid::Uuid;

use crate::error::Result;
use crate::model::attendance::Attendance;
use crate::repository::AttendanceRepository;

/// Input for recording a shift that doesn't exist yet.
#[derive(Debug, Clone)]
pub struct NewAttendance {
    pub employee_id: String,
    pub date: NaiveDate,
    pub time_in: NaiveDateTime,
    pub time_out: Option<NaiveDateTime>,
}

// -------------------- Add --------------------

pub struct AddAttendance<R> {
    repository: Arc<R>,
}

impl<R: AttendanceRepository> AddAttendance<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Validates the shift, assigns it a fresh id and stores it.
    pub async fn execute(&self, input: NewAttendance) -> Result<Attendance> {
        let attendance = Attendance::new(
            Uuid::new_v4().to_string(),
            input.employee_id,
            input.date,
            input.time_in,
            input.time_out,
            None,
        )?;

        let stored = self
            .repository
            .add_attendance(attendance)
            .await
            .inspect_err(|e| error!(error = %e, "Failed to add attendance"))?;

        info!(
            attendance_id = stored.attendance_id(),
            employee_id = stored.employee_id(),
            total = %stored.total_duration(),
            "attendance added"
        );
        Ok(stored)
    }
}

// -------------------- Check in --------------------

pub struct CheckIn<R> {
    repository: Arc<R>,
}

impl<R: AttendanceRepository> CheckIn<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Opens a shift dated on the day of `time_in`.
    pub async fn execute(&self, employee_id: &str, time_in: NaiveDateTime) -> Result<Attendance> {
        let attendance = Attendance::open(
            Uuid::new_v4().to_string(),
            employee_id,
            time_in.date(),
            time_in,
        );

        let stored = self
            .repository
            .add_attendance(attendance)
            .await
            .inspect_err(|e| error!(error = %e, employee_id, "Check-in failed"))?;

        info!(attendance_id = stored.attendance_id(), employee_id, "checked in");
        Ok(stored)
    }
}

// -------------------- Close / update --------------------

pub struct UpdateAttendanceTimeOut<R> {
    repository: Arc<R>,
}

impl<R: AttendanceRepository> UpdateAttendanceTimeOut<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Closes (or re-closes) the shift at `time_out`.
    pub async fn execute(&self, attendance_id: &str, time_out: NaiveDateTime) -> Result<Attendance> {
        let closed = self
            .repository
            .attendance_by_id(attendance_id)
            .await?
            .close(time_out)?;

        let stored = self
            .repository
            .update_attendance(closed)
            .await
            .inspect_err(|e| error!(error = %e, attendance_id, "Check-out failed"))?;

        info!(attendance_id, total = %stored.total_duration(), "checked out");
        Ok(stored)
    }
}

pub struct UpdateAttendance<R> {
    repository: Arc<R>,
}

impl<R: AttendanceRepository> UpdateAttendance<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Stores the record with its duration derived again from its instants.
    pub async fn execute(&self, attendance: Attendance) -> Result<Attendance> {
        let attendance = attendance.recomputed()?;

        let stored = self
            .repository
            .update_attendance(attendance)
            .await
            .inspect_err(|e| error!(error = %e, "Failed to update attendance"))?;

        info!(attendance_id = stored.attendance_id(), "attendance updated");
        Ok(stored)
    }
}

// -------------------- Queries --------------------

pub struct GetAttendanceById<R> {
    repository: Arc<R>,
}

impl<R: AttendanceRepository> GetAttendanceById<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, attendance_id: &str) -> Result<Attendance> {
        debug!(attendance_id, "fetching attendance");
        self.repository.attendance_by_id(attendance_id).await
    }
}

pub struct GetAllAttendances<R> {
    repository: Arc<R>,
}

impl<R: AttendanceRepository> GetAllAttendances<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self) -> Result<Vec<Attendance>> {
        debug!("fetching all attendances");
        self.repository.all_attendances().await
    }
}

pub struct GetAttendancesByEmployeeId<R> {
    repository: Arc<R>,
}

impl<R: AttendanceRepository> GetAttendancesByEmployeeId<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, employee_id: &str) -> Result<Vec<Attendance>> {
        debug!(employee_id, "fetching employee attendances");
        self.repository
            .attendances_by_employee(employee_id)
            .await
            .inspect_err(|e| error!(error = %e, employee_id, kind = %e.kind(), "Attendance fetch failed"))
    }
}

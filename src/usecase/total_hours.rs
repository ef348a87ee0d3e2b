use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::model::attendance::Attendance;
use crate::model::hours_and_minutes::HoursAndMinutes;
use crate::repository::AttendanceRepository;
use crate::usecase::attendance::GetAttendancesByEmployeeId;
use crate::utils::time::is_date_in_range;

/// An employee's attendances whose work day falls in `[start_date, end_date]`.
pub struct GetRangeOfAttendancesByEmployeeId<R> {
    by_employee: GetAttendancesByEmployeeId<R>,
}

impl<R: AttendanceRepository> GetRangeOfAttendancesByEmployeeId<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self {
            by_employee: GetAttendancesByEmployeeId::new(repository),
        }
    }

    /// Fails with [`Error::EmptyRecord`] when nothing falls in the range.
    pub async fn execute(
        &self,
        employee_id: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Vec<Attendance>> {
        self.by_employee
            .execute(employee_id)
            .await
            .and_then(|attendances| {
                let in_range: Vec<Attendance> = attendances
                    .into_iter()
                    .filter(|a| is_date_in_range(a.date(), start_date, end_date))
                    .collect();

                if in_range.is_empty() {
                    warn!(employee_id, %start_date, %end_date, "no attendances in range");
                    return Err(Error::EmptyRecord {
                        employee_id: employee_id.to_string(),
                        start_date,
                        end_date,
                    });
                }
                Ok(in_range)
            })
    }
}

/// Worked time of an employee over an inclusive date range.
pub struct GetEmployeeTotalHours<R> {
    range: GetRangeOfAttendancesByEmployeeId<R>,
}

impl<R: AttendanceRepository> GetEmployeeTotalHours<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self {
            range: GetRangeOfAttendancesByEmployeeId::new(repository),
        }
    }

    pub async fn execute(
        &self,
        employee_id: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<HoursAndMinutes> {
        self.range
            .execute(employee_id, start_date, end_date)
            .await
            .map(|attendances| sum_attendance_hours(&attendances))
            .inspect(|total| debug!(employee_id, %start_date, %end_date, %total, "total hours"))
    }
}

/// Open shifts count as zero.
pub fn sum_attendance_hours(attendances: &[Attendance]) -> HoursAndMinutes {
    attendances.iter().map(Attendance::total_duration).sum()
}

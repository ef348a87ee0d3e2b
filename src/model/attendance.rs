use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{Error, Result};
use crate::model::hours_and_minutes::HoursAndMinutes;

/// Whether the employee has checked out yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shift {
    Open,
    Closed {
        time_out: NaiveDateTime,
        total_duration: HoursAndMinutes,
    },
}

/// One check-in/check-out pair for a work day.
///
/// A closed shift always has `time_out > time_in`; the only way from
/// [`Shift::Open`] to [`Shift::Closed`] is [`Attendance::close`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "AttendanceRecord", into = "AttendanceRecord")]
pub struct Attendance {
    attendance_id: String,
    employee_id: String,
    date: NaiveDate,
    time_in: NaiveDateTime,
    shift: Shift,
}

/// Flat shape used on the wire and by stores.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub attendance_id: String,
    pub employee_id: String,
    pub date: NaiveDate,
    pub time_in: NaiveDateTime,
    #[serde(default)]
    pub time_out: Option<NaiveDateTime>,
    #[serde(default)]
    pub total_duration: Option<HoursAndMinutes>,
}

impl Attendance {
    /// Builds an attendance, validating the time range when `time_out` is given.
    ///
    /// A non-zero `recorded_duration` is kept as-is for closed shifts; otherwise
    /// the duration is derived from the two instants. Deserialized records are
    /// stricter, see the `TryFrom<AttendanceRecord>` impl.
    pub fn new(
        attendance_id: impl Into<String>,
        employee_id: impl Into<String>,
        date: NaiveDate,
        time_in: NaiveDateTime,
        time_out: Option<NaiveDateTime>,
        recorded_duration: Option<HoursAndMinutes>,
    ) -> Result<Self> {
        let shift = match time_out {
            None => Shift::Open,
            Some(time_out) => {
                let derived = checked_duration(time_in, time_out)?;
                let total_duration = recorded_duration
                    .filter(|d| !d.is_zero())
                    .unwrap_or(derived);
                Shift::Closed {
                    time_out,
                    total_duration,
                }
            }
        };

        Ok(Self {
            attendance_id: attendance_id.into(),
            employee_id: employee_id.into(),
            date,
            time_in,
            shift,
        })
    }

    pub fn open(
        attendance_id: impl Into<String>,
        employee_id: impl Into<String>,
        date: NaiveDate,
        time_in: NaiveDateTime,
    ) -> Self {
        Self {
            attendance_id: attendance_id.into(),
            employee_id: employee_id.into(),
            date,
            time_in,
            shift: Shift::Open,
        }
    }

    pub fn closed(
        attendance_id: impl Into<String>,
        employee_id: impl Into<String>,
        date: NaiveDate,
        time_in: NaiveDateTime,
        time_out: NaiveDateTime,
    ) -> Result<Self> {
        Self::new(
            attendance_id,
            employee_id,
            date,
            time_in,
            Some(time_out),
            None,
        )
    }

    /// Sets the check-out time and recomputes the duration from `time_in`.
    /// Closing an already closed shift replaces its previous time out.
    pub fn close(&self, time_out: NaiveDateTime) -> Result<Self> {
        let total_duration = checked_duration(self.time_in, time_out)?;

        Ok(Self {
            shift: Shift::Closed {
                time_out,
                total_duration,
            },
            ..self.clone()
        })
    }

    /// Same record with its duration derived again from the stored instants.
    pub fn recomputed(&self) -> Result<Self> {
        match self.shift {
            Shift::Open => Ok(self.clone()),
            Shift::Closed { time_out, .. } => self.close(time_out),
        }
    }

    pub fn attendance_id(&self) -> &str {
        &self.attendance_id
    }

    pub fn employee_id(&self) -> &str {
        &self.employee_id
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn time_in(&self) -> NaiveDateTime {
        self.time_in
    }

    pub fn time_out(&self) -> Option<NaiveDateTime> {
        match self.shift {
            Shift::Open => None,
            Shift::Closed { time_out, .. } => Some(time_out),
        }
    }

    pub fn shift(&self) -> Shift {
        self.shift
    }

    pub fn is_open(&self) -> bool {
        matches!(self.shift, Shift::Open)
    }

    /// Zero while the shift is open.
    pub fn total_duration(&self) -> HoursAndMinutes {
        match self.shift {
            Shift::Open => HoursAndMinutes::ZERO,
            Shift::Closed { total_duration, .. } => total_duration,
        }
    }
}

fn checked_duration(time_in: NaiveDateTime, time_out: NaiveDateTime) -> Result<HoursAndMinutes> {
    if time_out <= time_in {
        warn!(%time_in, %time_out, "rejected attendance time range");
        return Err(Error::InvalidTimeRange { time_in, time_out });
    }
    Ok(HoursAndMinutes::between(time_out, time_in))
}

/// Stored records are re-derived from their instants; a non-zero recorded
/// duration that disagrees with them is rejected rather than trusted.
impl TryFrom<AttendanceRecord> for Attendance {
    type Error = Error;

    fn try_from(record: AttendanceRecord) -> Result<Self> {
        let attendance = Attendance::new(
            record.attendance_id,
            record.employee_id,
            record.date,
            record.time_in,
            record.time_out,
            None,
        )?;

        let derived = attendance.total_duration();
        match record.total_duration.filter(|d| !d.is_zero()) {
            Some(recorded) if recorded != derived => {
                warn!(
                    attendance_id = attendance.attendance_id(),
                    %recorded,
                    %derived,
                    "rejected attendance with inconsistent duration"
                );
                Err(Error::InconsistentDuration {
                    attendance_id: attendance.attendance_id,
                    recorded,
                    derived,
                })
            }
            _ => Ok(attendance),
        }
    }
}

impl From<Attendance> for AttendanceRecord {
    fn from(attendance: Attendance) -> Self {
        let time_out = attendance.time_out();
        let total_duration = attendance.total_duration();
        AttendanceRecord {
            attendance_id: attendance.attendance_id,
            employee_id: attendance.employee_id,
            date: attendance.date,
            time_in: attendance.time_in,
            time_out,
            total_duration: Some(total_duration),
        }
    }
}

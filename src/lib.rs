//! Attendance tracking core: check-in/check-out records, worked-time
//! arithmetic and per-employee totals over date ranges.

pub mod config;
pub mod error;
pub mod model;
pub mod repository;
pub mod telemetry;
pub mod usecase;
pub mod utils;

pub use config::Config;
pub use error::{CollaboratorError, Error, ErrorKind, Result};
pub use model::attendance::{Attendance, AttendanceRecord, Shift};
pub use model::employee::{Employee, QrPayload};
pub use model::hours_and_minutes::HoursAndMinutes;
pub use repository::{AttendanceRepository, EmployeeRepository};
pub use utils::result_ext::ResultExt;

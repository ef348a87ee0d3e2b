use chrono::{NaiveDate, NaiveDateTime};
use derive_more::Display;

use crate::model::hours_and_minutes::HoursAndMinutes;

/// Failures reported by whatever sits behind a repository (network, server, ...).
/// They are passed through untouched, never retried here.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum CollaboratorError {
    #[display(fmt = "network connection failed: {}", _0)]
    NetworkConnection(String),
    #[display(fmt = "request timed out: {}", _0)]
    Timeout(String),
    #[display(fmt = "server error: {}", _0)]
    ServerError(String),
    #[display(fmt = "unauthorized: {}", _0)]
    UnAuthorized(String),
    #[display(fmt = "empty response: {}", _0)]
    EmptyResponse(String),
    #[display(fmt = "too many requests: {}", message)]
    ManyRequests {
        message: String,
        retry_after: Option<String>,
    },
    #[display(fmt = "unknown error: {}", _0)]
    Unknown(String),
}

impl std::error::Error for CollaboratorError {}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum Error {
    #[display(fmt = "time out {} is not after time in {}", time_out, time_in)]
    InvalidTimeRange {
        time_in: NaiveDateTime,
        time_out: NaiveDateTime,
    },

    #[display(
        fmt = "attendance {} records {} but its instants span {}",
        attendance_id,
        recorded,
        derived
    )]
    InconsistentDuration {
        attendance_id: String,
        recorded: HoursAndMinutes,
        derived: HoursAndMinutes,
    },

    #[display(
        fmt = "No Attendances found for employee {} from {} to {}",
        employee_id,
        start_date,
        end_date
    )]
    EmptyRecord {
        employee_id: String,
        start_date: NaiveDate,
        end_date: NaiveDate,
    },

    #[display(fmt = "not found: {}", _0)]
    NotFound(String),

    #[display(fmt = "conflict: {}", _0)]
    Conflict(String),

    #[display(fmt = "{}", _0)]
    Collaborator(CollaboratorError),
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Collaborator(e) => Some(e),
            _ => None,
        }
    }
}

impl From<CollaboratorError> for Error {
    fn from(e: CollaboratorError) -> Self {
        Error::Collaborator(e)
    }
}

/// Stable, loggable name of an [`Error`].
#[derive(
    Debug,
    Copy,
    Clone,
    Eq,
    PartialEq,
    strum_macros::Display,
    strum_macros::AsRefStr,
    strum_macros::EnumString,
)]
#[strum(serialize_all = "snake_case")]
pub enum ErrorKind {
    InvalidTimeRange,
    InconsistentDuration,
    EmptyRecord,
    NotFound,
    Conflict,
    NetworkConnection,
    Timeout,
    ServerError,
    UnAuthorized,
    EmptyResponse,
    ManyRequests,
    Unknown,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidTimeRange { .. } => ErrorKind::InvalidTimeRange,
            Error::InconsistentDuration { .. } => ErrorKind::InconsistentDuration,
            Error::EmptyRecord { .. } => ErrorKind::EmptyRecord,
            Error::NotFound(_) => ErrorKind::NotFound,
            Error::Conflict(_) => ErrorKind::Conflict,
            Error::Collaborator(e) => match e {
                CollaboratorError::NetworkConnection(_) => ErrorKind::NetworkConnection,
                CollaboratorError::Timeout(_) => ErrorKind::Timeout,
                CollaboratorError::ServerError(_) => ErrorKind::ServerError,
                CollaboratorError::UnAuthorized(_) => ErrorKind::UnAuthorized,
                CollaboratorError::EmptyResponse(_) => ErrorKind::EmptyResponse,
                CollaboratorError::ManyRequests { .. } => ErrorKind::ManyRequests,
                CollaboratorError::Unknown(_) => ErrorKind::Unknown,
            },
        }
    }

    /// `EmptyRecord` is an ordinary answer ("nothing in that range"), not a fault.
    pub fn is_expected(&self) -> bool {
        matches!(self, Error::EmptyRecord { .. })
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

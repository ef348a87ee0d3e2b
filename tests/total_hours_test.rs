use std::sync::Arc;

use attendease::usecase::total_hours::{GetEmployeeTotalHours, GetRangeOfAttendancesByEmployeeId};
use attendease::{
    Attendance, AttendanceRepository, CollaboratorError, Error, ErrorKind,
    HoursAndMinutes, ResultExt, repository::memory::InMemoryAttendanceRepository,
};
use chrono::{NaiveDate, NaiveDateTime};
use futures::executor::block_on;

fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 2, day).unwrap()
}

fn at(day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    date(day).and_hms_opt(hour, minute, 0).unwrap()
}

fn shift(id: &str, day: u32, from: (u32, u32), to: (u32, u32)) -> Attendance {
    Attendance::closed(id, "emp-1", date(day), at(day, from.0, from.1), at(day, to.0, to.1))
        .unwrap()
}

fn three_shifts() -> Vec<Attendance> {
    vec![
        shift("a-1", 5, (9, 0), (17, 0)),
        shift("a-2", 6, (9, 15), (17, 0)),
        shift("a-3", 8, (9, 0), (17, 0)),
    ]
}

async fn seeded(records: Vec<Attendance>) -> Arc<InMemoryAttendanceRepository> {
    let repository = Arc::new(InMemoryAttendanceRepository::new());
    for attendance in records {
        repository.add_attendance(attendance).await.unwrap();
    }
    repository
}

/// Hands back a fixed answer for the employee fetch; everything else is unused.
struct FixedAttendances {
    answer: Result<Vec<Attendance>, Error>,
}

impl AttendanceRepository for FixedAttendances {
    async fn attendance_by_id(&self, id: &str) -> Result<Attendance, Error> {
        Err(Error::NotFound(id.to_string()))
    }

    async fn all_attendances(&self) -> Result<Vec<Attendance>, Error> {
        self.answer.clone()
    }

    async fn attendances_by_employee(&self, _employee_id: &str) -> Result<Vec<Attendance>, Error> {
        self.answer.clone()
    }

    async fn add_attendance(&self, attendance: Attendance) -> Result<Attendance, Error> {
        Ok(attendance)
    }

    async fn update_attendance(&self, attendance: Attendance) -> Result<Attendance, Error> {
        Ok(attendance)
    }
}

#[test]
fn sums_only_records_inside_the_range() {
    block_on(async {
        let use_case = GetEmployeeTotalHours::new(seeded(three_shifts()).await);

        let total = use_case.execute("emp-1", date(5), date(7)).await;

        assert_eq!(total, Ok(HoursAndMinutes::new(15, 45)));
    });
}

#[test]
fn range_bounds_are_inclusive() {
    block_on(async {
        let use_case = GetEmployeeTotalHours::new(seeded(three_shifts()).await);

        let total = use_case.execute("emp-1", date(6), date(8)).await;

        assert_eq!(total, Ok(HoursAndMinutes::new(15, 45)));
    });
}

#[test]
fn empty_range_names_employee_and_dates() {
    block_on(async {
        let use_case = GetEmployeeTotalHours::new(seeded(three_shifts()).await);

        let err = use_case
            .execute("emp-1", date(10), date(12))
            .await
            .unwrap_err();

        assert_eq!(
            err,
            Error::EmptyRecord {
                employee_id: "emp-1".to_string(),
                start_date: date(10),
                end_date: date(12),
            }
        );
        let message = err.to_string();
        assert!(message.contains("emp-1"));
        assert!(message.contains("2024-02-10"));
        assert!(message.contains("2024-02-12"));
    });
}

#[test]
fn unknown_employee_is_an_empty_record() {
    block_on(async {
        let use_case = GetEmployeeTotalHours::new(seeded(three_shifts()).await);

        let err = use_case
            .execute("emp-404", date(1), date(29))
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::EmptyRecord);
    });
}

#[test]
fn total_does_not_depend_on_record_order() {
    let mut records = three_shifts();
    records.push(shift("a-4", 7, (8, 50), (12, 5)));

    let forward = FixedAttendances {
        answer: Ok(records.clone()),
    };
    records.reverse();
    let backward = FixedAttendances {
        answer: Ok(records),
    };

    block_on(async {
        let forward = GetEmployeeTotalHours::new(Arc::new(forward))
            .execute("emp-1", date(5), date(8))
            .await;
        let backward = GetEmployeeTotalHours::new(Arc::new(backward))
            .execute("emp-1", date(5), date(8))
            .await;

        assert_eq!(forward, Ok(HoursAndMinutes::new(27, 0)));
        assert_eq!(forward, backward);
    });
}

#[test]
fn collaborator_failure_passes_through_unchanged() {
    let failure: Error = CollaboratorError::Timeout("attendance service".to_string()).into();
    let repository = Arc::new(FixedAttendances {
        answer: Err(failure.clone()),
    });

    block_on(async {
        let total = GetEmployeeTotalHours::new(repository.clone())
            .execute("emp-1", date(5), date(7))
            .await;
        let range = GetRangeOfAttendancesByEmployeeId::new(repository)
            .execute("emp-1", date(5), date(7))
            .await;

        assert_eq!(total, Err(failure.clone()));
        assert_eq!(range.unwrap_err(), failure);
    });
}

#[test]
fn range_use_case_returns_the_filtered_records() {
    block_on(async {
        let use_case = GetRangeOfAttendancesByEmployeeId::new(seeded(three_shifts()).await);

        let records = use_case.execute("emp-1", date(5), date(7)).await.unwrap();

        let mut ids: Vec<&str> = records.iter().map(|a| a.attendance_id()).collect();
        ids.sort();
        assert_eq!(ids, vec!["a-1", "a-2"]);
    });
}

#[test]
fn callers_can_treat_empty_range_as_zero() {
    block_on(async {
        let use_case = GetEmployeeTotalHours::new(seeded(Vec::new()).await);

        let total = use_case
            .execute("emp-1", date(5), date(7))
            .await
            .recover(|_| HoursAndMinutes::ZERO);

        assert_eq!(total, Ok(HoursAndMinutes::ZERO));
    });
}

#[test]
fn a_long_history_is_summed_in_full() {
    let first_day = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let history: Vec<Attendance> = (0..300u64)
        .map(|n| {
            let day = first_day + chrono::Days::new(n);
            Attendance::closed(
                format!("a-{n}"),
                "emp-1",
                day,
                day.and_hms_opt(9, 0, 0).unwrap(),
                day.and_hms_opt(17, 0, 0).unwrap(),
            )
            .unwrap()
        })
        .collect();
    let last_day = first_day + chrono::Days::new(299);

    block_on(async {
        let repository = seeded(history).await;
        let range = GetRangeOfAttendancesByEmployeeId::new(repository.clone());
        let total = GetEmployeeTotalHours::new(repository);

        let records = range.execute("emp-1", first_day, last_day).await.unwrap();
        assert_eq!(records.len(), 300);
        assert_eq!(
            total.execute("emp-1", first_day, last_day).await,
            Ok(HoursAndMinutes::new(2400, 0))
        );
    });
}

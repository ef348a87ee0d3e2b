use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

const MINUTES_PER_HOUR: u32 = 60;

/// Worked time as whole hours plus whole minutes. `minutes` is always below 60;
/// anything above is carried into `hours`. Arithmetic never panics: `hours`
/// saturates at `u64::MAX`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawHoursAndMinutes")]
pub struct HoursAndMinutes {
    hours: u64,
    minutes: u32,
}

// Incoming values may carry unnormalized minutes, e.g. {"hours": 0, "minutes": 70}.
#[derive(Deserialize)]
struct RawHoursAndMinutes {
    hours: u64,
    minutes: u32,
}

impl From<RawHoursAndMinutes> for HoursAndMinutes {
    fn from(raw: RawHoursAndMinutes) -> Self {
        HoursAndMinutes::new(raw.hours, raw.minutes)
    }
}

impl HoursAndMinutes {
    pub const ZERO: HoursAndMinutes = HoursAndMinutes {
        hours: 0,
        minutes: 0,
    };

    pub fn new(hours: u64, minutes: u32) -> Self {
        let mut value = Self { hours, minutes };
        value.normalize();
        value
    }

    /// Elapsed time from `start` to `end`, truncated to whole minutes.
    ///
    /// Callers must ensure `end > start`; a non-positive span yields zero.
    pub fn between(end: NaiveDateTime, start: NaiveDateTime) -> Self {
        let elapsed_minutes = end.signed_duration_since(start).num_minutes().max(0);
        let elapsed_minutes = elapsed_minutes.unsigned_abs();

        Self {
            hours: elapsed_minutes / u64::from(MINUTES_PER_HOUR),
            minutes: (elapsed_minutes % u64::from(MINUTES_PER_HOUR)) as u32,
        }
    }

    pub fn hours(&self) -> u64 {
        self.hours
    }

    pub fn minutes(&self) -> u32 {
        self.minutes
    }

    /// Saturates at `u64::MAX`.
    pub fn total_minutes(&self) -> u64 {
        self.hours
            .saturating_mul(u64::from(MINUTES_PER_HOUR))
            .saturating_add(u64::from(self.minutes))
    }

    pub fn is_zero(&self) -> bool {
        self.hours == 0 && self.minutes == 0
    }

    pub fn combine(self, other: HoursAndMinutes) -> Self {
        let mut total = self;
        total += other;
        total
    }

    // Hours saturate at u64::MAX instead of overflowing.
    fn normalize(&mut self) {
        while self.minutes >= MINUTES_PER_HOUR {
            let carried = self.minutes / MINUTES_PER_HOUR;
            self.hours = self.hours.saturating_add(u64::from(carried));
            self.minutes -= carried * MINUTES_PER_HOUR;
        }
    }
}

impl AddAssign for HoursAndMinutes {
    fn add_assign(&mut self, other: HoursAndMinutes) {
        self.hours = self.hours.saturating_add(other.hours);
        self.minutes += other.minutes;
        self.normalize();
    }
}

impl Add for HoursAndMinutes {
    type Output = HoursAndMinutes;

    fn add(self, other: HoursAndMinutes) -> HoursAndMinutes {
        self.combine(other)
    }
}

impl Sum for HoursAndMinutes {
    fn sum<I: Iterator<Item = HoursAndMinutes>>(iter: I) -> Self {
        iter.fold(HoursAndMinutes::ZERO, HoursAndMinutes::combine)
    }
}

impl<'a> Sum<&'a HoursAndMinutes> for HoursAndMinutes {
    fn sum<I: Iterator<Item = &'a HoursAndMinutes>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl fmt::Display for HoursAndMinutes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hours, self.minutes)
    }
}

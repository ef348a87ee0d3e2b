pub mod attendance;
pub mod employee;
pub mod hours_and_minutes;

pub mod attendance;
pub mod employee;
pub mod total_hours;

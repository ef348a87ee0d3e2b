use serde::{Deserialize, Serialize};

use crate::model::attendance::Attendance;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub employee_id: String,
    pub first_name: String,
    pub last_name: String,
    pub mobile: String,
    /// Payload encoded into the employee's badge, see [`QrPayload`].
    pub qr_code: String,
    #[serde(default)]
    pub attendance_history: Vec<Attendance>,
}

impl Employee {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// What the check-in QR code carries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QrPayload {
    pub employee_id: String,
    pub first_name: String,
    pub last_name: String,
    pub mobile: String,
}

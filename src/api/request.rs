//! Request types for the attendance engine API.
//!
//! The payroll endpoint takes a [`PayrollInput`](crate::models::PayrollInput)
//! body directly; the smaller endpoints use the structures below.

use serde::{Deserialize, Serialize};

/// Request body for `POST /attendance/status`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceStatusRequest {
    /// Check-in time to classify (`HH:MM`).
    pub check_in_time: String,
}

/// Request body for `POST /attendance/summary`.
///
/// Either a ready late-arrival count or the raw check-in times to count.
/// When both are given the check-in times win.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LateSummaryRequest {
    /// Number of late arrivals already counted.
    #[serde(default)]
    pub late_arrival_count: Option<u32>,
    /// Check-in times (`HH:MM`) to count late arrivals from.
    #[serde(default)]
    pub check_in_times: Option<Vec<String>>,
}

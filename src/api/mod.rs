//! HTTP API module for the attendance engine.
//!
//! This module exposes the policy calculations and the payroll deduction
//! run as JSON endpoints.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{AttendanceStatusRequest, LateSummaryRequest};
pub use response::{ApiError, PolicyResponse};
pub use state::AppState;

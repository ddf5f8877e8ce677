//! HTTP request handlers for the attendance engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    calculate_grace_period_end_time, calculate_payroll, calculate_working_hours,
    count_late_arrivals, get_attendance_status, get_late_arrival_summary, is_valid_time_format,
};
use crate::error::EngineError;
use crate::models::PayrollInput;

use super::request::{AttendanceStatusRequest, LateSummaryRequest};
use super::response::{ApiError, ApiErrorResponse, PolicyResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/policy", get(policy_handler))
        .route("/attendance/status", post(attendance_status_handler))
        .route("/attendance/summary", post(late_summary_handler))
        .route("/payroll/calculate", post(payroll_handler))
        .with_state(state)
}

/// Handler for GET /policy.
///
/// Returns the active policy with its derived grace-period end and working
/// hours.
async fn policy_handler(State(state): State<AppState>) -> Response {
    let policy = state.config().policy();

    json_response(
        StatusCode::OK,
        PolicyResponse {
            policy: policy.clone(),
            grace_period_end_time: calculate_grace_period_end_time(policy),
            working_hours: calculate_working_hours(policy),
        },
    )
}

/// Handler for POST /attendance/status.
///
/// Classifies a single check-in as on time or late.
async fn attendance_status_handler(
    State(state): State<AppState>,
    payload: Result<Json<AttendanceStatusRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, &correlation_id),
    };

    if !is_valid_time_format(&request.check_in_time) {
        return error_response(
            EngineError::InvalidTimeFormat {
                value: request.check_in_time,
            },
            &correlation_id,
        );
    }

    let report = get_attendance_status(&request.check_in_time, state.config().policy());
    info!(
        correlation_id = %correlation_id,
        check_in_time = %request.check_in_time,
        minutes_late = report.minutes_late,
        "Attendance status classified"
    );

    json_response(StatusCode::OK, report)
}

/// Handler for POST /attendance/summary.
///
/// Reports deductions for a late-arrival count, or for a list of check-in
/// times counted against the active policy.
async fn late_summary_handler(
    State(state): State<AppState>,
    payload: Result<Json<LateSummaryRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, &correlation_id),
    };

    let policy = state.config().policy();
    let late_arrival_count = match (request.check_in_times, request.late_arrival_count) {
        (Some(check_in_times), _) => {
            if let Some(bad) = check_in_times.iter().find(|t| !is_valid_time_format(t)) {
                return error_response(
                    EngineError::InvalidTimeFormat { value: bad.clone() },
                    &correlation_id,
                );
            }
            count_late_arrivals(check_in_times.as_slice(), policy)
        }
        (None, Some(count)) => count,
        (None, None) => {
            warn!(correlation_id = %correlation_id, "Summary request without input");
            return json_response(
                StatusCode::BAD_REQUEST,
                ApiError::validation_error(
                    "either late_arrival_count or check_in_times must be provided",
                ),
            );
        }
    };

    let summary = get_late_arrival_summary(late_arrival_count, policy);
    info!(
        correlation_id = %correlation_id,
        late_arrivals = summary.total_late_arrivals,
        days_deducted = summary.days_deducted,
        "Late arrival summary calculated"
    );

    json_response(StatusCode::OK, summary)
}

/// Handler for POST /payroll/calculate.
///
/// Runs the payroll deduction calculation for one employee and period.
async fn payroll_handler(
    State(state): State<AppState>,
    payload: Result<Json<PayrollInput>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing payroll request");

    let input = match payload {
        Ok(Json(input)) => input,
        Err(rejection) => return rejection_response(rejection, &correlation_id),
    };

    let start_time = Instant::now();
    match calculate_payroll(&input, state.config().config()) {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = %input.employee_id,
                records = input.attendance.len(),
                deduction_amount = %result.totals.deduction_amount,
                duration_us = start_time.elapsed().as_micros(),
                "Payroll calculation completed successfully"
            );
            json_response(StatusCode::OK, result)
        }
        Err(err) => error_response(err, &correlation_id),
    }
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn error_response(err: EngineError, correlation_id: &Uuid) -> Response {
    warn!(
        correlation_id = %correlation_id,
        error = %err,
        "Request failed"
    );
    ApiErrorResponse::from(err).into_response()
}

fn rejection_response(rejection: JsonRejection, correlation_id: &Uuid) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };

    json_response(StatusCode::BAD_REQUEST, error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::{AttendanceStatus, AttendanceStatusReport, LateArrivalSummary};
    use crate::config::{ConfigLoader, EngineConfig};
    use axum::{body::Body, http::Request};
    use tower::ServiceExt;

    fn create_test_state() -> AppState {
        let mut config = EngineConfig::default();
        config.attendance_policy.grace_period_minutes = 15;
        AppState::new(ConfigLoader::from_config(config).expect("valid config"))
    }

    async fn post_json(uri: &str, body: &str) -> (StatusCode, Vec<u8>) {
        let router = create_router(create_test_state());
        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("Content-Type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, body.to_vec())
    }

    #[tokio::test]
    async fn test_policy_returns_grace_end_and_hours() {
        let router = create_router(create_test_state());
        let response = router
            .oneshot(Request::builder().uri("/policy").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers().get("content-type").unwrap();
        assert_eq!(content_type, "application/json");

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let policy: PolicyResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(policy.grace_period_end_time, "09:15");
        assert_eq!(policy.working_hours.total, 540);
    }

    #[tokio::test]
    async fn test_status_on_boundary_is_on_time() {
        let (status, body) = post_json("/attendance/status", r#"{"check_in_time": "09:15"}"#).await;

        assert_eq!(status, StatusCode::OK);
        let report: AttendanceStatusReport = serde_json::from_slice(&body).unwrap();
        assert_eq!(report.status, AttendanceStatus::OnTime);
    }

    #[tokio::test]
    async fn test_status_late() {
        let (status, body) = post_json("/attendance/status", r#"{"check_in_time": "09:16"}"#).await;

        assert_eq!(status, StatusCode::OK);
        let report: AttendanceStatusReport = serde_json::from_slice(&body).unwrap();
        assert_eq!(report.status, AttendanceStatus::Late);
        assert_eq!(report.minutes_late, 1);
    }

    #[tokio::test]
    async fn test_status_invalid_time_returns_400() {
        let (status, body) = post_json("/attendance/status", r#"{"check_in_time": "9:5"}"#).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "INVALID_TIME_FORMAT");
    }

    #[tokio::test]
    async fn test_status_malformed_json_returns_400() {
        let (status, body) = post_json("/attendance/status", "{invalid json").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_status_missing_field_returns_validation_error() {
        let (status, body) = post_json("/attendance/status", "{}").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "VALIDATION_ERROR");
        assert!(error.message.contains("missing field"));
    }

    #[tokio::test]
    async fn test_summary_from_count() {
        let (status, body) = post_json("/attendance/summary", r#"{"late_arrival_count": 3}"#).await;

        assert_eq!(status, StatusCode::OK);
        let summary: LateArrivalSummary = serde_json::from_slice(&body).unwrap();
        assert_eq!(summary.days_deducted, 1);
        assert_eq!(summary.remaining_before_deduction, 3);
    }

    #[tokio::test]
    async fn test_summary_from_check_ins() {
        let (status, body) = post_json(
            "/attendance/summary",
            r#"{"check_in_times": ["09:20", "09:10", "09:30", "09:05"]}"#,
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let summary: LateArrivalSummary = serde_json::from_slice(&body).unwrap();
        assert_eq!(summary.total_late_arrivals, 2);
        assert_eq!(summary.days_deducted, 0);
    }

    #[tokio::test]
    async fn test_summary_without_input_returns_400() {
        let (status, body) = post_json("/attendance/summary", "{}").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_summary_rejects_bad_check_in() {
        let (status, body) =
            post_json("/attendance/summary", r#"{"check_in_times": ["09:20", "24:00"]}"#).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "INVALID_TIME_FORMAT");
        assert!(error.message.contains("24:00"));
    }
}

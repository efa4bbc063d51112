//! Response types for the Staffing Cost Comparison Engine API.
//!
//! This module defines the success envelope returned by `/simulate`,
//! including the human-readable analysis strings, plus the error response
//! structures and error handling for the HTTP API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::{format_fixed, format_time_per_event};
use crate::config::DomainConstants;
use crate::error::EngineError;
use crate::models::SimulationResult;

/// Success body of the `/simulate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationResponse {
    /// The full numeric simulation result.
    pub result: SimulationResult,
    /// Human-readable renderings of the equilibrium analysis.
    pub analysis: ActivityAnalysis,
}

/// Display strings for the equilibrium analysis.
///
/// Rates are rendered at 4 decimals and volumes at 2, through the
/// centralized fixed-precision formatter; every pace string comes from the
/// Spanish duration formatter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityAnalysis {
    /// Cost-intersection rate, events per hour.
    pub cost_intersection_rate: String,
    /// Cost-intersection volume, events per day.
    pub cost_intersection_events_per_day: String,
    /// Cost-intersection volume, events per month.
    pub cost_intersection_events_per_month: String,
    /// Average time between events at the cost intersection.
    pub cost_intersection_pace: String,
    /// Salaried-contract break-even rate, events per hour.
    pub fixed_break_even_rate: String,
    /// Average time between events at the salaried break-even.
    pub fixed_break_even_pace: String,
    /// Company-absorbs-fee break-even rate, events per hour.
    pub share_break_even_rate: String,
    /// Average time between events at the company-absorbs-fee break-even.
    pub share_break_even_pace: String,
    /// Average time between events at which revenue alone covers the net
    /// salaried cost.
    pub revenue_break_even_pace: String,
}

impl SimulationResponse {
    /// Builds the response envelope, rendering the analysis strings from
    /// the numeric result.
    pub fn new(result: SimulationResult, constants: &DomainConstants) -> Self {
        let equilibria = &result.equilibria;
        let intersection_rate = equilibria.cost_intersection.activity_rate;
        let hours_per_day = Decimal::from(constants.schedule.hours_per_day);

        let analysis = ActivityAnalysis {
            cost_intersection_rate: format_fixed(intersection_rate, 4),
            cost_intersection_events_per_day: format_fixed(intersection_rate * hours_per_day, 2),
            cost_intersection_events_per_month: format_fixed(
                intersection_rate * constants.hours_per_month(),
                2,
            ),
            cost_intersection_pace: format_time_per_event(intersection_rate),
            fixed_break_even_rate: format_fixed(equilibria.fixed_break_even, 4),
            fixed_break_even_pace: format_time_per_event(equilibria.fixed_break_even),
            share_break_even_rate: format_fixed(equilibria.share_break_even, 4),
            share_break_even_pace: format_time_per_event(equilibria.share_break_even),
            revenue_break_even_pace: format_time_per_event(equilibria.revenue_break_even),
        };

        Self { result, analysis }
    }
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation rejection response carrying the user-facing
    /// message.
    pub fn validation_rejected(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_REJECTED", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            rejection @ (EngineError::PayBelowMinimum { .. }
            | EngineError::NonPositiveEventPrice) => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::validation_rejected(rejection.to_string()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
        assert!(!json.contains("details")); // Should be skipped when None
    }

    #[test]
    fn test_api_error_with_details_serialization() {
        let error = ApiError::with_details("TEST_ERROR", "Test message", "Some details");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"details\":\"Some details\""));
    }

    #[test]
    fn test_pay_below_minimum_maps_to_validation_rejected() {
        let engine_error = EngineError::PayBelowMinimum {
            minimum: Decimal::from_str("1992.50").unwrap(),
        };
        let api_error: ApiErrorResponse = engine_error.into();
        assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_error.error.code, "VALIDATION_REJECTED");
        assert_eq!(
            api_error.error.message,
            "El salario bruto no puede ser inferior a 1992.50 €."
        );
    }

    #[test]
    fn test_non_positive_price_maps_to_validation_rejected() {
        let api_error: ApiErrorResponse = EngineError::NonPositiveEventPrice.into();
        assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_error.error.code, "VALIDATION_REJECTED");
        assert_eq!(
            api_error.error.message,
            "El precio por servicio debe ser mayor que 0."
        );
    }

    #[test]
    fn test_config_error_maps_to_internal_error() {
        let engine_error = EngineError::ConfigNotFound {
            path: "/missing".to_string(),
        };
        let api_error: ApiErrorResponse = engine_error.into();
        assert_eq!(api_error.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api_error.error.code, "CONFIG_ERROR");
    }
}

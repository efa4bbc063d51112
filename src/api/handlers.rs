//! HTTP request handlers for the Staffing Cost Comparison Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::{get, post},
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::run_simulation;
use crate::models::SimulationParameters;

use super::request::SimulationRequest;
use super::response::{ApiError, ApiErrorResponse, SimulationResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/simulate", post(simulate_handler))
        .route("/defaults", get(defaults_handler))
        .with_state(state)
}

/// Handler for POST /simulate endpoint.
///
/// Accepts a simulation request and returns the full result envelope, or a
/// 400 carrying the validation rejection message.
async fn simulate_handler(
    State(state): State<AppState>,
    payload: Result<Json<SimulationRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing simulation request");

    // Handle JSON parsing errors
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    // Get the body text which contains the detailed error from serde
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    // Check if it's a missing field error
                    if body_text.contains("missing field") {
                        ApiError::new("VALIDATION_ERROR", body_text)
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
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    let params: SimulationParameters = request.into();
    let constants = state.config().constants();

    match run_simulation(&params, constants) {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                simulation_id = %result.simulation_id,
                net_salaried_cost = %result.model.net_salaried_cost,
                cost_intersection = %result.equilibria.cost_intersection.activity_rate,
                "Simulation completed successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(SimulationResponse::new(result, constants)),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Simulation rejected"
            );
            let api_error: ApiErrorResponse = err.into();
            (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response()
        }
    }
}

/// Handler for GET /defaults endpoint.
///
/// Returns the default simulation parameters from configuration, the set a
/// caller presents before any user edits.
async fn defaults_handler(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(state.config().defaults().clone()),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigLoader;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use rust_decimal::Decimal;
    use std::str::FromStr;
    use tower::ServiceExt;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_test_state() -> AppState {
        let config = ConfigLoader::load("./config/staffing").expect("Failed to load config");
        AppState::new(config)
    }

    fn create_valid_request() -> SimulationRequest {
        SimulationRequest {
            gross_monthly_pay: dec("1992.5"),
            price_per_event: dec("30"),
            company_share_percent: dec("50"),
            base_contractor_fee: dec("310"),
            company_tax_deduction_percent: dec("25"),
            annual_interest_percent: dec("5"),
        }
    }

    #[tokio::test]
    async fn test_api_001_valid_request_returns_200() {
        let state = create_test_state();
        let router = create_router(state);

        let request = create_valid_request();
        let body = serde_json::to_string(&request).unwrap();

        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/simulate")
                    .header("Content-Type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        // Verify Content-Type header
        let content_type = response.headers().get("content-type").unwrap();
        assert_eq!(content_type, "application/json");

        // Verify response body is a valid SimulationResponse
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let result: SimulationResponse = serde_json::from_slice(&body).unwrap();

        assert_eq!(result.result.model.net_salaried_cost, dec("2442.5"));
        assert_eq!(result.result.cost_curves.activity_rates.len(), 81);
        assert_eq!(result.analysis.cost_intersection_rate, "0.8821");
    }

    #[tokio::test]
    async fn test_api_002_malformed_json_returns_400() {
        let state = create_test_state();
        let router = create_router(state);

        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/simulate")
                    .header("Content-Type", "application/json")
                    .body(Body::from("{invalid json"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();

        assert_eq!(error.code, "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_api_003_missing_field_returns_400() {
        let state = create_test_state();
        let router = create_router(state);

        // JSON with a missing price_per_event field
        let body = r#"{
            "gross_monthly_pay": "1992.5",
            "company_share_percent": "50",
            "base_contractor_fee": "310",
            "company_tax_deduction_percent": "25",
            "annual_interest_percent": "5"
        }"#;

        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/simulate")
                    .header("Content-Type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();

        assert!(
            error.message.contains("missing field")
                || error.message.to_lowercase().contains("price_per_event"),
            "Expected error message to mention the missing field, got: {}",
            error.message
        );
    }

    #[tokio::test]
    async fn test_api_004_below_minimum_pay_returns_validation_rejection() {
        let state = create_test_state();
        let router = create_router(state);

        let mut request = create_valid_request();
        request.gross_monthly_pay = dec("1000");
        let body = serde_json::to_string(&request).unwrap();

        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/simulate")
                    .header("Content-Type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();

        assert_eq!(error.code, "VALIDATION_REJECTED");
        assert_eq!(
            error.message,
            "El salario bruto no puede ser inferior a 1992.50 €."
        );
    }

    #[tokio::test]
    async fn test_api_005_defaults_returns_configured_parameters() {
        let state = create_test_state();
        let router = create_router(state);

        let response = router
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/defaults")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let defaults: SimulationParameters = serde_json::from_slice(&body).unwrap();

        assert_eq!(defaults.gross_monthly_pay, dec("1992.50"));
        assert_eq!(defaults.price_per_event, dec("30"));
    }

    #[tokio::test]
    async fn test_reference_scenario_analysis_strings() {
        let state = create_test_state();
        let router = create_router(state);

        let body = serde_json::to_string(&create_valid_request()).unwrap();

        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/simulate")
                    .header("Content-Type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let result: SimulationResponse = serde_json::from_slice(&body).unwrap();

        // 0.8821/h is roughly one event every hour and eight minutes.
        assert_eq!(result.analysis.cost_intersection_rate, "0.8821");
        assert_eq!(result.analysis.cost_intersection_events_per_day, "7.06");
        assert_eq!(result.analysis.cost_intersection_events_per_month, "141.13");
        assert_eq!(result.analysis.cost_intersection_pace, "1 hora y 8 minutos");
        assert_eq!(result.analysis.fixed_break_even_rate, "1.0177");
        assert_eq!(result.analysis.fixed_break_even_pace, "59 minutos");
        assert_eq!(result.analysis.share_break_even_rate, "0.1356");
        assert_eq!(result.analysis.revenue_break_even_pace, "1 hora y 58 minutos");
    }
}

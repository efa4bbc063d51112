//! HTTP API module for the Staffing Cost Comparison Engine.
//!
//! This module provides the REST API endpoints for running staffing cost
//! simulations and fetching the default parameter set.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::SimulationRequest;
pub use response::{ActivityAnalysis, ApiError, SimulationResponse};
pub use state::AppState;

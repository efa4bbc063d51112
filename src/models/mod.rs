//! Core data models for the Staffing Cost Comparison Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod cost_model;
mod curves;
mod equilibrium;
mod parameters;
mod result;

pub use cost_model::CostModel;
pub use curves::{ActivityTable, CostCurves, ProfitCurves};
pub use equilibrium::{EquilibriumAnalysis, EquilibriumPoint};
pub use parameters::SimulationParameters;
pub use result::SimulationResult;

//! Calculation logic for the Staffing Cost Comparison Engine.
//!
//! This module contains the whole calculation pipeline: parameter
//! validation, scalar cost-model evaluation, curve sampling at table and
//! plot resolution, closed-form equilibrium solving, display formatting,
//! and the stateful session that preserves the last valid result across
//! rejected recalculations.

mod cost_model;
mod curves;
mod equilibrium;
mod format;
mod pipeline;
mod validation;

pub use cost_model::evaluate_cost_model;
pub use curves::{
    plot_rates, sample_activity_table, sample_cost_curves, sample_profit_curves, table_rates,
};
pub use equilibrium::{
    cost_intersection, fixed_break_even, revenue_break_even, share_break_even, solve_equilibria,
};
pub use format::{INFINITE_TIME, format_fixed, format_time_per_event};
pub use pipeline::{SimulationSession, run_simulation};
pub use validation::validate_parameters;

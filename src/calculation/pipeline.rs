//! Simulation pipeline and session state.
//!
//! [`run_simulation`] chains the whole pipeline for one parameter snapshot:
//! validate, evaluate the scalar model, sample both curve resolutions, and
//! solve the equilibria. [`SimulationSession`] wraps it for embedding
//! callers that recalculate on every parameter edit: a rejected edit keeps
//! the last valid result visible instead of blanking it.

use chrono::Utc;
use uuid::Uuid;

use crate::config::DomainConstants;
use crate::error::EngineResult;
use crate::models::{SimulationParameters, SimulationResult};

use super::cost_model::evaluate_cost_model;
use super::curves::{
    plot_rates, sample_activity_table, sample_cost_curves, sample_profit_curves, table_rates,
};
use super::equilibrium::solve_equilibria;
use super::validation::validate_parameters;

/// Runs the full simulation pipeline for one parameter snapshot.
///
/// Validation gates everything: when it rejects, no downstream stage runs
/// and the rejection is returned as-is. For admissible parameters the
/// result is a complete, freshly allocated [`SimulationResult`]; nothing is
/// cached between calls and concurrent runs are independent.
///
/// # Errors
///
/// Returns the validation rejection (`PayBelowMinimum` or
/// `NonPositiveEventPrice`); every stage after validation is total.
pub fn run_simulation(
    params: &SimulationParameters,
    constants: &DomainConstants,
) -> EngineResult<SimulationResult> {
    validate_parameters(params, constants)?;

    let model = evaluate_cost_model(params, constants);
    let table = sample_activity_table(&table_rates(), &model, params, constants);

    let rates = plot_rates();
    let cost_curves = sample_cost_curves(&rates, &model, params, constants);
    let profit_curves = sample_profit_curves(&rates, &model, params, constants);

    let equilibria = solve_equilibria(&model, params, constants);

    Ok(SimulationResult {
        simulation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        parameters: params.clone(),
        model,
        table,
        cost_curves,
        profit_curves,
        equilibria,
    })
}

/// Recalculation state for a caller that edits parameters interactively.
///
/// The session holds the last valid result and the current rejection
/// message. A failed recalculation records the rejection and leaves the
/// previous result untouched, so the caller keeps showing stale-but-valid
/// data next to the message; the next successful recalculation clears the
/// rejection and replaces the result.
#[derive(Debug)]
pub struct SimulationSession {
    constants: DomainConstants,
    result: Option<SimulationResult>,
    rejection: Option<String>,
}

impl SimulationSession {
    /// Creates an empty session over the given domain constants.
    pub fn new(constants: DomainConstants) -> Self {
        Self {
            constants,
            result: None,
            rejection: None,
        }
    }

    /// Recalculates the session from a fresh parameter snapshot.
    ///
    /// On success the previous result is replaced and any rejection is
    /// cleared. On failure the previous result is kept and the rejection
    /// message becomes available through [`rejection`].
    ///
    /// [`rejection`]: Self::rejection
    pub fn recalculate(
        &mut self,
        params: &SimulationParameters,
    ) -> EngineResult<&SimulationResult> {
        match run_simulation(params, &self.constants) {
            Ok(result) => {
                self.rejection = None;
                Ok(self.result.insert(result))
            }
            Err(error) => {
                self.rejection = Some(error.to_string());
                Err(error)
            }
        }
    }

    /// The last valid result, if any recalculation has succeeded.
    pub fn last_result(&self) -> Option<&SimulationResult> {
        self.result.as_ref()
    }

    /// The current rejection message, if the last recalculation failed.
    pub fn rejection(&self) -> Option<&str> {
        self.rejection.as_deref()
    }

    /// The domain constants the session was created over.
    pub fn constants(&self) -> &DomainConstants {
        &self.constants
    }
}

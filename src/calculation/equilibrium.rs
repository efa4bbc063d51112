//! Closed-form equilibrium solving.
//!
//! Every cost and revenue term of the simulation is affine in the activity
//! rate, so each crossing reduces to a single quotient; no iterative root
//! finding is involved. A zero denominator means the generating ratio is
//! degenerate (the curves never cross, or are everywhere equal) and
//! resolves to a rate of zero rather than an error, keeping the solver
//! total.

use rust_decimal::Decimal;

use crate::config::DomainConstants;
use crate::models::{CostModel, EquilibriumAnalysis, EquilibriumPoint, SimulationParameters};

/// Monthly company-share revenue per unit of activity rate.
///
/// This is the slope shared by every revenue-share curve and the
/// denominator of three of the four equilibria.
fn share_revenue_slope(params: &SimulationParameters, constants: &DomainConstants) -> Decimal {
    (params.company_share_percent / Decimal::ONE_HUNDRED)
        * constants.hours_per_month()
        * params.price_per_event
}

/// Rate at which the revenue-share total cost equals the net salaried cost.
///
/// Solves `slope * r + fee = net` for `r`; the crossing value is the net
/// salaried cost itself. A zero slope yields a rate of zero.
pub fn cost_intersection(
    model: &CostModel,
    params: &SimulationParameters,
    constants: &DomainConstants,
) -> EquilibriumPoint {
    let activity_rate = (model.net_salaried_cost - model.contractor_fee_with_interest)
        .checked_div(share_revenue_slope(params, constants))
        .unwrap_or(Decimal::ZERO);

    EquilibriumPoint {
        activity_rate,
        value: model.net_salaried_cost,
    }
}

/// Rate at which the salaried contract's profit crosses zero.
pub fn fixed_break_even(
    model: &CostModel,
    params: &SimulationParameters,
    constants: &DomainConstants,
) -> Decimal {
    model
        .net_salaried_cost
        .checked_div(share_revenue_slope(params, constants))
        .unwrap_or(Decimal::ZERO)
}

/// Rate at which the revenue-share profit crosses zero when the company
/// absorbs the contractor fee.
pub fn share_break_even(
    model: &CostModel,
    params: &SimulationParameters,
    constants: &DomainConstants,
) -> Decimal {
    model
        .contractor_fee_with_interest
        .checked_div(share_revenue_slope(params, constants))
        .unwrap_or(Decimal::ZERO)
}

/// Rate at which total revenue alone covers the net salaried cost.
///
/// Unlike the other equilibria this one is quoted against the full revenue
/// slope, not the company share of it.
pub fn revenue_break_even(
    model: &CostModel,
    params: &SimulationParameters,
    constants: &DomainConstants,
) -> Decimal {
    model
        .net_salaried_cost
        .checked_div(params.price_per_event * constants.hours_per_month())
        .unwrap_or(Decimal::ZERO)
}

/// Bundles every equilibrium into one record.
pub fn solve_equilibria(
    model: &CostModel,
    params: &SimulationParameters,
    constants: &DomainConstants,
) -> EquilibriumAnalysis {
    EquilibriumAnalysis {
        cost_intersection: cost_intersection(model, params, constants),
        fixed_break_even: fixed_break_even(model, params, constants),
        share_break_even: share_break_even(model, params, constants),
        revenue_break_even: revenue_break_even(model, params, constants),
    }
}

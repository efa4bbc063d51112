//! Curve sampling over the activity-rate domain.
//!
//! This module generates the two sampling domains (the coarse table rates
//! and the fine plot grid) and evaluates the cost and profit series of both
//! compensation structures over them. The revenue-share series are affine
//! in the activity rate; the salaried series are constants broadcast across
//! the whole domain.

use rust_decimal::Decimal;

use crate::config::DomainConstants;
use crate::models::{ActivityTable, CostCurves, CostModel, ProfitCurves, SimulationParameters};

/// Number of steps in the plot grid: the window [0, 4] at 0.05 per step.
const PLOT_STEP_COUNT: u32 = 80;

/// Activity rates used by the tabular view, in events per hour.
pub fn table_rates() -> Vec<Decimal> {
    vec![
        Decimal::ZERO,
        Decimal::ONE,
        Decimal::TWO,
        Decimal::from(4),
    ]
}

/// Activity rates used by the plotted curves: 0 to 4 events per hour
/// inclusive, at 0.05 steps.
///
/// Each rate is an exact two-decimal value, so the domain carries no
/// floating-point drift into displayed labels.
pub fn plot_rates() -> Vec<Decimal> {
    let step = Decimal::new(5, 2);
    (0..=PLOT_STEP_COUNT)
        .map(|i| step * Decimal::from(i))
        .collect()
}

/// Total monthly revenue at an activity rate.
fn total_revenue(
    rate: Decimal,
    params: &SimulationParameters,
    constants: &DomainConstants,
) -> Decimal {
    rate * constants.hours_per_month() * params.price_per_event
}

/// The company's share of monthly revenue at an activity rate.
fn company_share_revenue(
    rate: Decimal,
    params: &SimulationParameters,
    constants: &DomainConstants,
) -> Decimal {
    total_revenue(rate, params, constants) * (params.company_share_percent / Decimal::ONE_HUNDRED)
}

/// Samples the monthly company cost of both structures over a domain.
///
/// The revenue-share payout scales with the company's configured share of
/// monthly revenue; its total adds the interest-adjusted contractor fee.
/// The salaried costs do not depend on the rate and are broadcast across
/// the domain.
pub fn sample_cost_curves(
    rates: &[Decimal],
    model: &CostModel,
    params: &SimulationParameters,
    constants: &DomainConstants,
) -> CostCurves {
    let share_payout: Vec<Decimal> = rates
        .iter()
        .map(|&rate| company_share_revenue(rate, params, constants))
        .collect();
    let share_total: Vec<Decimal> = share_payout
        .iter()
        .map(|&payout| payout + model.contractor_fee_with_interest)
        .collect();

    CostCurves {
        activity_rates: rates.to_vec(),
        share_payout,
        share_total,
        fixed_gross: vec![model.gross_cost_with_interest; rates.len()],
        fixed_net: vec![model.net_salaried_cost; rates.len()],
    }
}

/// Samples the monthly company profit of both structures over a domain.
///
/// Each profit series is total revenue minus the matching cost series of
/// [`sample_cost_curves`]; for the revenue-share structure that reduces to
/// the company's own cut, with and without the contractor fee.
pub fn sample_profit_curves(
    rates: &[Decimal],
    model: &CostModel,
    params: &SimulationParameters,
    constants: &DomainConstants,
) -> ProfitCurves {
    let share_only: Vec<Decimal> = rates
        .iter()
        .map(|&rate| company_share_revenue(rate, params, constants))
        .collect();
    let share_after_fee: Vec<Decimal> = share_only
        .iter()
        .map(|&share| share - model.contractor_fee_with_interest)
        .collect();
    let fixed_gross: Vec<Decimal> = rates
        .iter()
        .map(|&rate| total_revenue(rate, params, constants) - model.gross_cost_with_interest)
        .collect();
    let fixed_net: Vec<Decimal> = rates
        .iter()
        .map(|&rate| total_revenue(rate, params, constants) - model.net_salaried_cost)
        .collect();

    ProfitCurves {
        activity_rates: rates.to_vec(),
        share_only,
        share_after_fee,
        fixed_gross,
        fixed_net,
    }
}

/// Samples the tabular profit figures over a domain.
pub fn sample_activity_table(
    rates: &[Decimal],
    model: &CostModel,
    params: &SimulationParameters,
    constants: &DomainConstants,
) -> ActivityTable {
    let total_revenue: Vec<Decimal> = rates
        .iter()
        .map(|&rate| self::total_revenue(rate, params, constants))
        .collect();
    let share_profit: Vec<Decimal> = rates
        .iter()
        .map(|&rate| {
            company_share_revenue(rate, params, constants) - model.contractor_fee_with_interest
        })
        .collect();
    let fixed_profit: Vec<Decimal> = total_revenue
        .iter()
        .map(|&revenue| revenue - model.net_salaried_cost)
        .collect();

    ActivityTable {
        activity_rates: rates.to_vec(),
        total_revenue,
        share_profit,
        fixed_profit,
    }
}

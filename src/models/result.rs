//! Simulation result envelope.
//!
//! This module contains the [`SimulationResult`] type that captures all
//! outputs of one evaluation: the echoed parameters, the scalar cost model,
//! the sampled series at both resolutions, and the equilibrium analysis.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{
    ActivityTable, CostCurves, CostModel, EquilibriumAnalysis, ProfitCurves, SimulationParameters,
};

/// The complete result of one simulation run.
///
/// Every recalculation produces a fresh envelope; nothing is cached or
/// mutated in place, so callers may hold on to a previous result while a
/// newer one is being computed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Unique identifier for this simulation run.
    pub simulation_id: Uuid,
    /// When the simulation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the simulation.
    pub engine_version: String,
    /// The parameter snapshot this result was derived from.
    pub parameters: SimulationParameters,
    /// Scalar quantities derived from the parameters.
    pub model: CostModel,
    /// Profit figures at the coarse table resolution.
    pub table: ActivityTable,
    /// Cost curves at the plot resolution.
    pub cost_curves: CostCurves,
    /// Profit curves at the plot resolution.
    pub profit_curves: ProfitCurves,
    /// Closed-form equilibrium points.
    pub equilibria: EquilibriumAnalysis,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EquilibriumPoint;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_test_result() -> SimulationResult {
        SimulationResult {
            simulation_id: Uuid::nil(),
            timestamp: DateTime::parse_from_rfc3339("2026-01-15T10:00:00Z")
                .unwrap()
                .with_timezone(&Utc),
            engine_version: "0.1.0".to_string(),
            parameters: SimulationParameters {
                gross_monthly_pay: dec("1992.5"),
                price_per_event: dec("30"),
                company_share_percent: dec("50"),
                base_contractor_fee: dec("310"),
                company_tax_deduction_percent: dec("25"),
                annual_interest_percent: dec("5"),
            },
            model: CostModel {
                social_contribution: dec("600"),
                gross_base_cost: dec("2592.5"),
                gross_cost_with_interest: dec("2722.125"),
                tax_deduction: dec("150"),
                net_salaried_cost: dec("2442.5"),
                contractor_fee_with_interest: dec("325.5"),
                contractor_share_percent: dec("50"),
            },
            table: ActivityTable {
                activity_rates: vec![dec("0")],
                total_revenue: vec![dec("0")],
                share_profit: vec![dec("-325.5")],
                fixed_profit: vec![dec("-2442.5")],
            },
            cost_curves: CostCurves {
                activity_rates: vec![dec("0")],
                share_payout: vec![dec("0")],
                share_total: vec![dec("325.5")],
                fixed_gross: vec![dec("2722.125")],
                fixed_net: vec![dec("2442.5")],
            },
            profit_curves: ProfitCurves {
                activity_rates: vec![dec("0")],
                share_only: vec![dec("0")],
                share_after_fee: vec![dec("-325.5")],
                fixed_gross: vec![dec("-2722.125")],
                fixed_net: vec![dec("-2442.5")],
            },
            equilibria: EquilibriumAnalysis {
                cost_intersection: EquilibriumPoint {
                    activity_rate: dec("0.8821"),
                    value: dec("2442.5"),
                },
                fixed_break_even: dec("1.0177"),
                share_break_even: dec("0.1356"),
                revenue_break_even: dec("0.5089"),
            },
        }
    }

    #[test]
    fn test_serialize_result_round_trip() {
        let result = create_test_result();
        let json = serde_json::to_string(&result).unwrap();
        let back: SimulationResult = serde_json::from_str(&json).unwrap();

        assert_eq!(result, back);
    }

    #[test]
    fn test_result_serializes_all_sections() {
        let result = create_test_result();
        let json = serde_json::to_string(&result).unwrap();

        assert!(json.contains("\"simulation_id\":\"00000000-0000-0000-0000-000000000000\""));
        assert!(json.contains("\"engine_version\":\"0.1.0\""));
        assert!(json.contains("\"parameters\":{"));
        assert!(json.contains("\"model\":{"));
        assert!(json.contains("\"table\":{"));
        assert!(json.contains("\"cost_curves\":{"));
        assert!(json.contains("\"profit_curves\":{"));
        assert!(json.contains("\"equilibria\":{"));
    }
}

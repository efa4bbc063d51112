//! Derived cost model.
//!
//! This module defines the [`CostModel`] struct, the flat record of scalar
//! quantities the evaluator derives from one parameter set.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Scalar quantities derived from one [`SimulationParameters`] snapshot.
///
/// All fields are pure functions of the parameters and the domain constants;
/// the curve samplers and the equilibrium solver consume this record without
/// recomputing any of it.
///
/// Note the deliberate interest asymmetry: the interest uplift applies to the
/// gross salaried cost and to the contractor fee, but the net salaried cost
/// is derived from the un-uplifted gross base cost.
///
/// [`SimulationParameters`]: super::SimulationParameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostModel {
    /// Monthly social contribution on top of the gross pay.
    pub social_contribution: Decimal,
    /// Gross pay plus social contribution, before interest.
    pub gross_base_cost: Decimal,
    /// Gross base cost with the interest uplift applied.
    pub gross_cost_with_interest: Decimal,
    /// Amount of the social contribution recovered as a tax deduction.
    pub tax_deduction: Decimal,
    /// Monthly cost of the salaried contract net of the tax deduction.
    pub net_salaried_cost: Decimal,
    /// Monthly contractor fee with the interest uplift applied.
    pub contractor_fee_with_interest: Decimal,
    /// The contractor's share of per-event revenue, 0-100.
    pub contractor_share_percent: Decimal,
}

//! Equilibrium models.
//!
//! This module defines the [`EquilibriumPoint`] coordinate and the
//! [`EquilibriumAnalysis`] record bundling every closed-form crossing the
//! solver computes.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A coordinate at which two curves cross.
///
/// The x component is an activity rate in events per hour; the y component
/// is the monthly amount both curves take at that rate. A degenerate
/// configuration (zero denominator in the generating ratio) is surfaced as
/// an `activity_rate` of zero, never as an error.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EquilibriumPoint {
    /// Activity rate at which the curves cross, in events per hour.
    pub activity_rate: Decimal,
    /// Monthly amount at the crossing.
    pub value: Decimal,
}

/// Every equilibrium the solver derives from one cost model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EquilibriumAnalysis {
    /// Rate at which the revenue-share total cost equals the net salaried
    /// cost, with the net salaried cost as the crossing value.
    pub cost_intersection: EquilibriumPoint,
    /// Rate at which the salaried contract's profit crosses zero.
    pub fixed_break_even: Decimal,
    /// Rate at which the revenue-share profit crosses zero when the company
    /// absorbs the contractor fee.
    pub share_break_even: Decimal,
    /// Rate at which total revenue alone covers the net salaried cost.
    pub revenue_break_even: Decimal,
}

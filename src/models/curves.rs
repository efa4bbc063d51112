//! Sampled curve models.
//!
//! This module defines the index-aligned series produced by the curve
//! sampler: the coarse [`ActivityTable`] for tabular display and the fine
//! [`CostCurves`]/[`ProfitCurves`] pairs for plotting.
//!
//! Every series in a struct has the same length as its `activity_rates`
//! domain, and the domain is strictly increasing and never empty. Callers
//! that retain a previous set must treat it as a snapshot; recalculation
//! always produces fresh vectors.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Profit figures at the coarse table resolution.
///
/// One row per sampled activity rate, column-wise: the total monthly
/// revenue, the revenue-share profit after the contractor fee, and the
/// salaried-contract profit after the net cost.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityTable {
    /// Sampled activity rates, in events per hour.
    pub activity_rates: Vec<Decimal>,
    /// Total monthly revenue at each rate.
    pub total_revenue: Vec<Decimal>,
    /// Revenue-share profit (company share minus contractor fee) at each rate.
    pub share_profit: Vec<Decimal>,
    /// Salaried-contract profit (revenue minus net cost) at each rate.
    pub fixed_profit: Vec<Decimal>,
}

/// Monthly company cost under both structures at the plot resolution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostCurves {
    /// Sampled activity rates, in events per hour.
    pub activity_rates: Vec<Decimal>,
    /// Revenue-share payout to the counterpart at each rate.
    pub share_payout: Vec<Decimal>,
    /// Revenue-share payout plus the contractor fee at each rate.
    pub share_total: Vec<Decimal>,
    /// Gross salaried cost, constant across the domain.
    pub fixed_gross: Vec<Decimal>,
    /// Net salaried cost, constant across the domain.
    pub fixed_net: Vec<Decimal>,
}

/// Monthly company profit under both structures at the plot resolution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfitCurves {
    /// Sampled activity rates, in events per hour.
    pub activity_rates: Vec<Decimal>,
    /// Company share of revenue, before the contractor fee.
    pub share_only: Vec<Decimal>,
    /// Company share of revenue after absorbing the contractor fee.
    pub share_after_fee: Vec<Decimal>,
    /// Revenue minus the gross salaried cost.
    pub fixed_gross: Vec<Decimal>,
    /// Revenue minus the net salaried cost.
    pub fixed_net: Vec<Decimal>,
}

impl CostCurves {
    /// Returns true if every series is index-aligned with the domain.
    pub fn is_aligned(&self) -> bool {
        let len = self.activity_rates.len();
        self.share_payout.len() == len
            && self.share_total.len() == len
            && self.fixed_gross.len() == len
            && self.fixed_net.len() == len
    }
}

impl ProfitCurves {
    /// Returns true if every series is index-aligned with the domain.
    pub fn is_aligned(&self) -> bool {
        let len = self.activity_rates.len();
        self.share_only.len() == len
            && self.share_after_fee.len() == len
            && self.fixed_gross.len() == len
            && self.fixed_net.len() == len
    }
}

impl ActivityTable {
    /// Returns true if every column is index-aligned with the domain.
    pub fn is_aligned(&self) -> bool {
        let len = self.activity_rates.len();
        self.total_revenue.len() == len
            && self.share_profit.len() == len
            && self.fixed_profit.len() == len
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_cost_curves_alignment_check() {
        let curves = CostCurves {
            activity_rates: vec![dec("0"), dec("1")],
            share_payout: vec![dec("0"), dec("2400")],
            share_total: vec![dec("325.5"), dec("2725.5")],
            fixed_gross: vec![dec("2722.125"), dec("2722.125")],
            fixed_net: vec![dec("2442.5"), dec("2442.5")],
        };
        assert!(curves.is_aligned());

        let mut misaligned = curves.clone();
        misaligned.share_total.pop();
        assert!(!misaligned.is_aligned());
    }

    #[test]
    fn test_profit_curves_alignment_check() {
        let curves = ProfitCurves {
            activity_rates: vec![dec("0")],
            share_only: vec![dec("0")],
            share_after_fee: vec![dec("-325.5")],
            fixed_gross: vec![dec("-2722.125")],
            fixed_net: vec![dec("-2442.5")],
        };
        assert!(curves.is_aligned());
    }

    #[test]
    fn test_activity_table_serialization() {
        let table = ActivityTable {
            activity_rates: vec![dec("0"), dec("1"), dec("2"), dec("4")],
            total_revenue: vec![dec("0"), dec("4800"), dec("9600"), dec("19200")],
            share_profit: vec![dec("-325.5"), dec("2074.5"), dec("4474.5"), dec("9274.5")],
            fixed_profit: vec![dec("-2442.5"), dec("2357.5"), dec("7157.5"), dec("16757.5")],
        };
        assert!(table.is_aligned());

        let json = serde_json::to_string(&table).unwrap();
        let back: ActivityTable = serde_json::from_str(&json).unwrap();
        assert_eq!(table, back);
    }
}

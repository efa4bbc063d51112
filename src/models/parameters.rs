//! Simulation parameter model.
//!
//! This module defines the [`SimulationParameters`] struct describing the
//! tunable financial inputs of one evaluation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The tunable financial parameters of one simulation.
///
/// A single parameter set describes both compensation structures at once:
/// the revenue-share engagement (per-event price, company share, contractor
/// fee) and the salaried contract (gross pay, tax deduction). The interest
/// uplift applies to the fixed cost figures of both structures.
///
/// Parameters are immutable per evaluation; every recalculation receives a
/// fresh snapshot and derives a complete result from scratch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationParameters {
    /// Gross monthly pay offered under the salaried contract.
    pub gross_monthly_pay: Decimal,
    /// Revenue charged per service event.
    pub price_per_event: Decimal,
    /// Share of per-event revenue kept by the company, 0-100.
    pub company_share_percent: Decimal,
    /// Fixed monthly contractor fee under the revenue-share engagement.
    pub base_contractor_fee: Decimal,
    /// Share of the social contribution recoverable as a tax deduction, 0-100.
    pub company_tax_deduction_percent: Decimal,
    /// Annual cost-of-capital uplift applied to fixed cost figures, percent.
    pub annual_interest_percent: Decimal,
}

impl SimulationParameters {
    /// Returns the contractor's share of per-event revenue, the complement
    /// of the company share.
    ///
    /// # Examples
    ///
    /// ```
    /// use staffing_engine::models::SimulationParameters;
    /// use rust_decimal::Decimal;
    /// use std::str::FromStr;
    ///
    /// let params = SimulationParameters {
    ///     gross_monthly_pay: Decimal::from_str("1992.5").unwrap(),
    ///     price_per_event: Decimal::from_str("30").unwrap(),
    ///     company_share_percent: Decimal::from_str("50").unwrap(),
    ///     base_contractor_fee: Decimal::from_str("310").unwrap(),
    ///     company_tax_deduction_percent: Decimal::from_str("25").unwrap(),
    ///     annual_interest_percent: Decimal::from_str("5").unwrap(),
    /// };
    /// assert_eq!(params.contractor_share_percent(), Decimal::from_str("50").unwrap());
    /// ```
    pub fn contractor_share_percent(&self) -> Decimal {
        Decimal::ONE_HUNDRED - self.company_share_percent
    }
}

//! Request types for the Staffing Cost Comparison Engine API.
//!
//! This module defines the JSON request structure for the `/simulate`
//! endpoint.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::SimulationParameters;

/// Request body for the `/simulate` endpoint.
///
/// Carries the six tunable parameters of one simulation; the domain
/// constants are server-side configuration and cannot be overridden per
/// request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationRequest {
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

impl From<SimulationRequest> for SimulationParameters {
    fn from(req: SimulationRequest) -> Self {
        SimulationParameters {
            gross_monthly_pay: req.gross_monthly_pay,
            price_per_event: req.price_per_event,
            company_share_percent: req.company_share_percent,
            base_contractor_fee: req.base_contractor_fee,
            company_tax_deduction_percent: req.company_tax_deduction_percent,
            annual_interest_percent: req.annual_interest_percent,
        }
    }
}

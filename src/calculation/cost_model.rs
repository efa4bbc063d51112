//! Cost model evaluation.
//!
//! This module derives every scalar quantity of both compensation
//! structures from a validated parameter set: the social contribution, the
//! gross and net salaried costs, the interest-adjusted contractor fee, and
//! the complementary revenue share.

use rust_decimal::Decimal;

use crate::config::DomainConstants;
use crate::models::{CostModel, SimulationParameters};

/// Derives the scalar cost model from a validated parameter set.
///
/// All operations are total: the function cannot fail for input that
/// passed [`validate_parameters`]. The social contribution is computed as
/// `gross * reference_charge / reference_salary` (multiply before divide),
/// which keeps the reference case exact in decimal arithmetic; a zero
/// reference salary degenerates to a zero contribution rather than an
/// error.
///
/// The interest uplift (`1 + annual_interest_percent / 100`) applies to the
/// gross salaried cost and to the contractor fee. The net salaried cost is
/// derived from the un-uplifted gross base cost; that asymmetry is part of
/// the model, not an oversight.
///
/// # Arguments
///
/// * `params` - The validated parameter set
/// * `constants` - The domain constants carrying the statutory figures
///
/// [`validate_parameters`]: super::validate_parameters
pub fn evaluate_cost_model(
    params: &SimulationParameters,
    constants: &DomainConstants,
) -> CostModel {
    let statutory = &constants.statutory;

    let interest_factor = Decimal::ONE + params.annual_interest_percent / Decimal::ONE_HUNDRED;

    let social_contribution = (params.gross_monthly_pay * statutory.social_reference_charge)
        .checked_div(statutory.social_reference_salary)
        .unwrap_or(Decimal::ZERO);

    let gross_base_cost = params.gross_monthly_pay + social_contribution;
    let gross_cost_with_interest = gross_base_cost * interest_factor;

    let tax_deduction =
        social_contribution * (params.company_tax_deduction_percent / Decimal::ONE_HUNDRED);
    let net_salaried_cost = gross_base_cost - tax_deduction;

    let contractor_fee_with_interest = params.base_contractor_fee * interest_factor;

    CostModel {
        social_contribution,
        gross_base_cost,
        gross_cost_with_interest,
        tax_deduction,
        net_salaried_cost,
        contractor_fee_with_interest,
        contractor_share_percent: params.contractor_share_percent(),
    }
}

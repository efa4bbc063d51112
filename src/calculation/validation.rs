//! Parameter validation.
//!
//! This module gates the calculation pipeline: no downstream stage runs on
//! a parameter set that fails domain admissibility.

use crate::config::DomainConstants;
use crate::error::{EngineError, EngineResult};
use crate::models::SimulationParameters;
use rust_decimal::Decimal;

/// Checks a parameter set for domain admissibility.
///
/// Rules are evaluated in order and the first failure wins:
/// 1. The gross monthly pay must not be below the statutory minimum.
/// 2. The price per service event must be greater than zero.
///
/// # Arguments
///
/// * `params` - The parameter set to validate
/// * `constants` - The domain constants carrying the statutory minimum
///
/// # Returns
///
/// Returns `Ok(())` when the parameters are admissible, or the rejection
/// whose `Display` carries the user-facing message:
/// - `PayBelowMinimum` when the gross pay is below the minimum
/// - `NonPositiveEventPrice` when the event price is zero or negative
pub fn validate_parameters(
    params: &SimulationParameters,
    constants: &DomainConstants,
) -> EngineResult<()> {
    if params.gross_monthly_pay < constants.statutory.minimum_monthly_pay {
        return Err(EngineError::PayBelowMinimum {
            minimum: constants.statutory.minimum_monthly_pay,
        });
    }

    if params.price_per_event <= Decimal::ZERO {
        return Err(EngineError::NonPositiveEventPrice);
    }

    Ok(())
}

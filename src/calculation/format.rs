//! Display formatting.
//!
//! This module centralizes every human-facing number rendering: the
//! fixed-precision decimal formatter used for money (2 decimals) and rates
//! (4 decimals), and the Spanish duration formatter that turns an activity
//! rate into the average time between two service events.

use rust_decimal::{Decimal, RoundingStrategy};

/// Sentinel returned for rates at which no next event ever arrives.
pub const INFINITE_TIME: &str = "un tiempo infinito";

const MINUTES_PER_HOUR: Decimal = Decimal::from_parts(60, 0, 0, false, 0);

/// Formats a decimal with a fixed number of decimal places.
///
/// Rounds half away from zero and zero-pads to the requested precision, so
/// `format_fixed(dec("1992.5"), 2)` renders as `"1992.50"`. Every display
/// site uses this one utility rather than rounding inline.
pub fn format_fixed(value: Decimal, decimal_places: u32) -> String {
    let rounded = value.round_dp_with_strategy(decimal_places, RoundingStrategy::MidpointAwayFromZero);
    format!("{rounded:.prec$}", prec = decimal_places as usize)
}

/// Formats the average time between two service events at a given activity
/// rate, in events per hour.
///
/// A rate of zero or less never produces an event, so it renders as the
/// [`INFINITE_TIME`] sentinel. Otherwise `1/rate` hours is split into whole
/// hours and half-up rounded minutes; when the minutes round up to a full
/// hour the excess carries into the hour component, so a rate just above an
/// exact-hour boundary reports "2 horas", never "1 hora y 60 minutos". Zero
/// components are omitted and units are pluralized.
///
/// # Examples
///
/// ```
/// use staffing_engine::calculation::format_time_per_event;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_time_per_event(Decimal::ONE), "1 hora");
/// assert_eq!(format_time_per_event(Decimal::TWO), "30 minutos");
/// assert_eq!(format_time_per_event(Decimal::ZERO), "un tiempo infinito");
/// ```
pub fn format_time_per_event(rate: Decimal) -> String {
    if rate <= Decimal::ZERO {
        return INFINITE_TIME.to_string();
    }

    let total_hours = match Decimal::ONE.checked_div(rate) {
        Some(hours) => hours,
        None => return INFINITE_TIME.to_string(),
    };

    let mut hours = total_hours.floor();
    let mut minutes = ((total_hours - hours) * MINUTES_PER_HOUR)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);

    // Rounding the minutes can reach a full hour; carry it.
    if minutes >= MINUTES_PER_HOUR {
        hours += Decimal::ONE;
        minutes = Decimal::ZERO;
    }

    let hour_unit = if hours > Decimal::ONE { "horas" } else { "hora" };
    let minute_unit = if minutes > Decimal::ONE {
        "minutos"
    } else {
        "minuto"
    };

    if hours > Decimal::ZERO && minutes > Decimal::ZERO {
        format!(
            "{} {} y {} {}",
            hours.normalize(),
            hour_unit,
            minutes.normalize(),
            minute_unit
        )
    } else if hours > Decimal::ZERO {
        format!("{} {}", hours.normalize(), hour_unit)
    } else {
        format!("{} {}", minutes.normalize(), minute_unit)
    }
}

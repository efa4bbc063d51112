//! Configuration types for the staffing simulation.
//!
//! This module contains the strongly-typed structures that are deserialized
//! from the YAML configuration files. These are domain constants, not user
//! inputs: they are fixed for every evaluation.

use rust_decimal::Decimal;
use serde::Deserialize;

/// The working schedule that converts activity rates into monthly volumes.
#[derive(Debug, Clone, Deserialize)]
pub struct WorkSchedule {
    /// Number of working days in a month.
    pub working_days_per_month: u32,
    /// Number of working hours in a day.
    pub hours_per_day: u32,
}

impl WorkSchedule {
    /// Total working hours in a month.
    pub fn hours_per_month(&self) -> Decimal {
        Decimal::from(self.working_days_per_month * self.hours_per_day)
    }
}

/// Statutory figures the simulation is anchored to.
///
/// The social contribution is defined as a reference charge over a reference
/// salary; the evaluator scales it proportionally to the actual gross pay.
#[derive(Debug, Clone, Deserialize)]
pub struct StatutoryRates {
    /// Minimum admissible gross monthly pay.
    pub minimum_monthly_pay: Decimal,
    /// Monthly social charge at the reference salary.
    pub social_reference_charge: Decimal,
    /// Reference salary the social charge is quoted for.
    pub social_reference_salary: Decimal,
}

/// All domain constants of the simulation.
#[derive(Debug, Clone, Deserialize)]
pub struct DomainConstants {
    /// The working schedule.
    pub schedule: WorkSchedule,
    /// The statutory figures.
    pub statutory: StatutoryRates,
}

impl DomainConstants {
    /// Total working hours in a month.
    pub fn hours_per_month(&self) -> Decimal {
        self.schedule.hours_per_month()
    }
}

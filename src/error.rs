//! Error types for the Staffing Cost Comparison Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while loading configuration or
//! validating simulation parameters.

use rust_decimal::Decimal;
use thiserror::Error;

/// The main error type for the Staffing Cost Comparison Engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// Validation variants render the exact user-facing rejection message in
/// their `Display` implementation; the calculation stages downstream of
/// validation are total and never produce errors.
///
/// # Example
///
/// ```
/// use staffing_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/file.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/file.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The gross monthly pay is below the statutory minimum.
    #[error("El salario bruto no puede ser inferior a {minimum:.2} €.")]
    PayBelowMinimum {
        /// The statutory minimum monthly pay that was violated.
        minimum: Decimal,
    },

    /// The price per service event is zero or negative.
    #[error("El precio por servicio debe ser mayor que 0.")]
    NonPositiveEventPrice,
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

//! Configuration loading and management for the Staffing Cost Comparison Engine.
//!
//! This module provides functionality to load the domain constants (work
//! schedule and statutory figures) and the default simulation parameters
//! from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use staffing_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/staffing").unwrap();
//! println!("Hours per month: {}", config.constants().hours_per_month());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{DomainConstants, StatutoryRates, WorkSchedule};

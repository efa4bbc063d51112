//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the domain
//! constants and default parameters from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::models::SimulationParameters;

use super::types::DomainConstants;

/// Default parameters file structure.
#[derive(Debug, Clone, serde::Deserialize)]
struct DefaultsConfig {
    /// The default simulation parameters.
    parameters: SimulationParameters,
}

/// Loads and provides access to the simulation configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory and
/// provides the domain constants plus the default parameter set presented
/// to a caller before any user edits.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/staffing/
/// ├── constants.yaml   # Work schedule and statutory figures
/// └── defaults.yaml    # Default simulation parameters
/// ```
///
/// # Example
///
/// ```no_run
/// use staffing_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/staffing").unwrap();
/// println!("Minimum pay: {}", loader.constants().statutory.minimum_monthly_pay);
/// println!("Default price: {}", loader.defaults().price_per_event);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    constants: DomainConstants,
    defaults: SimulationParameters,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/staffing")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - Any required field is missing from the configuration
    ///
    /// # Example
    ///
    /// ```no_run
    /// use staffing_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/staffing")?;
    /// # Ok::<(), staffing_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let constants_path = path.join("constants.yaml");
        let constants = Self::load_yaml::<DomainConstants>(&constants_path)?;

        let defaults_path = path.join("defaults.yaml");
        let defaults = Self::load_yaml::<DefaultsConfig>(&defaults_path)?;

        Ok(Self {
            constants,
            defaults: defaults.parameters,
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the domain constants.
    pub fn constants(&self) -> &DomainConstants {
        &self.constants
    }

    /// Returns the default simulation parameters.
    pub fn defaults(&self) -> &SimulationParameters {
        &self.defaults
    }
}

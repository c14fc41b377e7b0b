//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading pay scheme
//! presets from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::policy::SalaryPolicy;

use super::types::{PayrollConfig, SchemeConfig, SchemesFile};

/// Loads and provides access to the payroll configuration.
///
/// The `ConfigLoader` reads a YAML configuration file from a directory and
/// provides methods to query scheme presets and build policies from them.
///
/// # Directory Structure
///
/// ```text
/// config/payroll/
/// └── schemes.yaml   # Payroll metadata and named pay scheme presets
/// ```
///
/// # Example
///
/// ```no_run
/// use rust_decimal::Decimal;
/// use salary_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/payroll").unwrap();
///
/// let policy = loader.build_policy("hourly_standard").unwrap();
/// println!("3 hours pay: {}", policy.calculate(Decimal::from(3)));
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: PayrollConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/payroll")
    ///
    /// # Errors
    ///
    /// Returns an error if `schemes.yaml` is missing from the directory or
    /// contains invalid YAML.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let schemes_path = path.join("schemes.yaml");
        let file = Self::load_yaml::<SchemesFile>(&schemes_path)?;

        let config = PayrollConfig::new(file.payroll, file.schemes);

        Ok(Self { config })
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

    /// Returns the underlying payroll configuration.
    pub fn config(&self) -> &PayrollConfig {
        &self.config
    }

    /// Looks up a scheme preset by name.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::SchemeNotFound`] if no preset has that name.
    pub fn get_scheme(&self, name: &str) -> EngineResult<&SchemeConfig> {
        self.config
            .schemes()
            .get(name)
            .ok_or_else(|| EngineError::SchemeNotFound {
                name: name.to_string(),
            })
    }

    /// Builds the salary policy for a named scheme preset.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::SchemeNotFound`] if no preset has that name,
    /// or [`EngineError::InvalidPolicy`] if the preset's parameters violate
    /// the policy invariants.
    pub fn build_policy(&self, name: &str) -> EngineResult<Box<dyn SalaryPolicy>> {
        self.get_scheme(name)?.build()
    }
}

//! Configuration types for pay scheme presets.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML configuration file.

use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::HashMap;

use crate::error::EngineResult;
use crate::policy::{FixedRate, HourlyRate, SalaryPolicy, default_work_day_hours};

/// Metadata about the payroll configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct PayrollMetadata {
    /// The human-readable name of this payroll configuration.
    pub name: String,
    /// The version or effective date of the configuration.
    pub version: String,
}

/// A pay scheme preset as declared in configuration.
///
/// The variant set is closed here on purpose: YAML needs a tagged, finite
/// representation. Presets convert into boxed [`SalaryPolicy`] values at
/// the edge via [`SchemeConfig::build`].
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SchemeConfig {
    /// Fixed rate per worked hour.
    Hourly {
        /// The cost of one worked hour.
        cost_per_hour: Decimal,
    },
    /// Monthly salary prorated by worked days.
    FixedRate {
        /// The monthly gross salary.
        salary: Decimal,
        /// The number of hours in one workday.
        #[serde(default = "default_work_day_hours")]
        work_day_duration: Decimal,
    },
}

impl SchemeConfig {
    /// Builds the salary policy this preset describes.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::EngineError::InvalidPolicy`] if the preset's
    /// parameters violate the policy invariants.
    pub fn build(&self) -> EngineResult<Box<dyn SalaryPolicy>> {
        match self {
            SchemeConfig::Hourly { cost_per_hour } => {
                Ok(Box::new(HourlyRate::new(*cost_per_hour)?))
            }
            SchemeConfig::FixedRate {
                salary,
                work_day_duration,
            } => Ok(Box::new(FixedRate::with_work_day_duration(
                *salary,
                *work_day_duration,
            )?)),
        }
    }
}

/// Schemes configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct SchemesFile {
    /// Payroll metadata.
    pub payroll: PayrollMetadata,
    /// Map of scheme name to scheme preset.
    pub schemes: HashMap<String, SchemeConfig>,
}

/// The complete payroll configuration loaded from YAML.
#[derive(Debug, Clone)]
pub struct PayrollConfig {
    metadata: PayrollMetadata,
    schemes: HashMap<String, SchemeConfig>,
}

impl PayrollConfig {
    /// Creates a new PayrollConfig from its component parts.
    pub fn new(metadata: PayrollMetadata, schemes: HashMap<String, SchemeConfig>) -> Self {
        Self { metadata, schemes }
    }

    /// Returns the payroll metadata.
    pub fn payroll(&self) -> &PayrollMetadata {
        &self.metadata
    }

    /// Returns all scheme presets.
    pub fn schemes(&self) -> &HashMap<String, SchemeConfig> {
        &self.schemes
    }
}

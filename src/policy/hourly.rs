//! Hourly payment policy.
//!
//! The simplest pay scheme: every worked hour is paid at a fixed rate.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};

use super::SalaryPolicy;

/// Pays a fixed rate for every hour worked.
///
/// `amount = round(cost_per_hour * hours_worked, 2)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HourlyRate {
    cost_per_hour: Decimal,
}

impl HourlyRate {
    /// Creates an hourly policy with the given cost per hour.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidPolicy`] if `cost_per_hour` is negative.
    pub fn new(cost_per_hour: Decimal) -> EngineResult<Self> {
        if cost_per_hour < Decimal::ZERO {
            return Err(EngineError::InvalidPolicy {
                parameter: "cost_per_hour".to_string(),
                message: "cannot be negative".to_string(),
            });
        }
        Ok(Self { cost_per_hour })
    }

    /// Returns the cost of one worked hour.
    pub fn cost_per_hour(&self) -> Decimal {
        self.cost_per_hour
    }
}

impl SalaryPolicy for HourlyRate {
    fn name(&self) -> &'static str {
        "hourly"
    }

    fn calculate(&self, hours_worked: Decimal) -> Decimal {
        (self.cost_per_hour * hours_worked).round_dp(2)
    }
}

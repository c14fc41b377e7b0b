//! Fixed monthly rate policy.
//!
//! Prorates a monthly gross salary by the fraction of a standard
//! 22-workday month actually worked.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};

use super::SalaryPolicy;

/// Returns the assumed number of workdays in a month.
pub fn workdays_per_month() -> Decimal {
    Decimal::from(22)
}

/// Returns the default number of hours in a workday.
pub fn default_work_day_hours() -> Decimal {
    Decimal::from(8)
}

/// Prorates a monthly salary by worked days.
///
/// `days = hours_worked / work_day_duration`;
/// `amount = round(salary * days / 22, 2)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedRate {
    salary: Decimal,
    work_day_duration: Decimal,
}

impl FixedRate {
    /// Creates a fixed-rate policy with the default 8-hour workday.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidPolicy`] if `salary` is negative.
    pub fn new(salary: Decimal) -> EngineResult<Self> {
        Self::with_work_day_duration(salary, default_work_day_hours())
    }

    /// Creates a fixed-rate policy with an explicit workday duration.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidPolicy`] if `salary` is negative or
    /// `work_day_duration` is not strictly positive.
    pub fn with_work_day_duration(
        salary: Decimal,
        work_day_duration: Decimal,
    ) -> EngineResult<Self> {
        if salary < Decimal::ZERO {
            return Err(EngineError::InvalidPolicy {
                parameter: "salary".to_string(),
                message: "cannot be negative".to_string(),
            });
        }
        if work_day_duration <= Decimal::ZERO {
            return Err(EngineError::InvalidPolicy {
                parameter: "work_day_duration".to_string(),
                message: "must be greater than zero".to_string(),
            });
        }
        Ok(Self {
            salary,
            work_day_duration,
        })
    }

    /// Returns the monthly gross salary.
    pub fn salary(&self) -> Decimal {
        self.salary
    }

    /// Returns the number of hours in one workday.
    pub fn work_day_duration(&self) -> Decimal {
        self.work_day_duration
    }
}

impl SalaryPolicy for FixedRate {
    fn name(&self) -> &'static str {
        "fixed_rate"
    }

    fn calculate(&self, hours_worked: Decimal) -> Decimal {
        let days = hours_worked / self.work_day_duration;
        (self.salary * days / workdays_per_month()).round_dp(2)
    }
}

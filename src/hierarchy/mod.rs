//! Per-type salary calculation, without a pluggable policy.
//!
//! Here each employee type owns its own pay calculation: the scheme is part
//! of the type, so adding a scheme means adding a whole employee type and
//! duplicating the identity fields and `full_name` logic in it. The
//! [`crate::models::Employee`] form exists precisely to avoid this coupling;
//! this module is kept as the working counter-example, and both forms
//! produce identical amounts for matching parameters.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::policy::{default_work_day_hours, workdays_per_month};

/// An employee that can name itself and compute its own salary.
pub trait SalariedEmployee {
    /// Returns the full name, `"{firstname} {lastname}"`.
    fn full_name(&self) -> String;

    /// Calculates the salary for the hours this employee worked.
    fn calculate_salary(&self) -> Decimal;
}

/// An employee paid a fixed rate per worked hour.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HourlyPaymentEmployee {
    firstname: String,
    lastname: String,
    hours_worked: Decimal,
    cost_per_hour: Decimal,
}

impl HourlyPaymentEmployee {
    /// Creates an hourly-paid employee.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidEmployee`] if `hours_worked` is negative,
    /// or [`EngineError::InvalidPolicy`] if `cost_per_hour` is negative.
    pub fn new(
        firstname: impl Into<String>,
        lastname: impl Into<String>,
        hours_worked: Decimal,
        cost_per_hour: Decimal,
    ) -> EngineResult<Self> {
        if hours_worked < Decimal::ZERO {
            return Err(EngineError::InvalidEmployee {
                field: "hours_worked".to_string(),
                message: "cannot be negative".to_string(),
            });
        }
        if cost_per_hour < Decimal::ZERO {
            return Err(EngineError::InvalidPolicy {
                parameter: "cost_per_hour".to_string(),
                message: "cannot be negative".to_string(),
            });
        }
        Ok(Self {
            firstname: firstname.into(),
            lastname: lastname.into(),
            hours_worked,
            cost_per_hour,
        })
    }
}

impl SalariedEmployee for HourlyPaymentEmployee {
    fn full_name(&self) -> String {
        format!("{} {}", self.firstname, self.lastname)
    }

    fn calculate_salary(&self) -> Decimal {
        (self.cost_per_hour * self.hours_worked).round_dp(2)
    }
}

/// An employee paid a monthly salary prorated by worked days.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedRateEmployee {
    firstname: String,
    lastname: String,
    hours_worked: Decimal,
    salary: Decimal,
    work_day_duration: Decimal,
}

impl FixedRateEmployee {
    /// Creates a fixed-rate employee with the default 8-hour workday.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidEmployee`] if `hours_worked` is negative,
    /// or [`EngineError::InvalidPolicy`] if `salary` is negative.
    pub fn new(
        firstname: impl Into<String>,
        lastname: impl Into<String>,
        hours_worked: Decimal,
        salary: Decimal,
    ) -> EngineResult<Self> {
        Self::with_work_day_duration(
            firstname,
            lastname,
            hours_worked,
            salary,
            default_work_day_hours(),
        )
    }

    /// Creates a fixed-rate employee with an explicit workday duration.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidEmployee`] if `hours_worked` is negative,
    /// or [`EngineError::InvalidPolicy`] if `salary` is negative or
    /// `work_day_duration` is not strictly positive.
    pub fn with_work_day_duration(
        firstname: impl Into<String>,
        lastname: impl Into<String>,
        hours_worked: Decimal,
        salary: Decimal,
        work_day_duration: Decimal,
    ) -> EngineResult<Self> {
        if hours_worked < Decimal::ZERO {
            return Err(EngineError::InvalidEmployee {
                field: "hours_worked".to_string(),
                message: "cannot be negative".to_string(),
            });
        }
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
            firstname: firstname.into(),
            lastname: lastname.into(),
            hours_worked,
            salary,
            work_day_duration,
        })
    }
}

impl SalariedEmployee for FixedRateEmployee {
    fn full_name(&self) -> String {
        format!("{} {}", self.firstname, self.lastname)
    }

    fn calculate_salary(&self) -> Decimal {
        let days = self.hours_worked / self.work_day_duration;
        (self.salary * days / workdays_per_month()).round_dp(2)
    }
}

//! Employee model.
//!
//! An employee is bound to one salary policy at construction time and
//! delegates the salary calculation entirely to it. The employee knows
//! nothing about which concrete policy it holds.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::policy::SalaryPolicy;

/// An employee with a bound salary policy.
///
/// # Example
///
/// ```
/// use rust_decimal::Decimal;
/// use salary_engine::models::Employee;
/// use salary_engine::policy::HourlyRate;
///
/// let employee = Employee::new(
///     "Вася",
///     "Пупкин",
///     Decimal::from(3),
///     Box::new(HourlyRate::new(Decimal::from(1500)).unwrap()),
/// )
/// .unwrap();
///
/// assert_eq!(employee.full_name(), "Вася Пупкин");
/// assert_eq!(employee.calculate_salary(), Decimal::from(4500));
/// ```
#[derive(Debug)]
pub struct Employee {
    firstname: String,
    lastname: String,
    hours_worked: Decimal,
    policy: Box<dyn SalaryPolicy>,
}

impl Employee {
    /// Creates an employee bound to the given salary policy.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidEmployee`] if `hours_worked` is negative.
    pub fn new(
        firstname: impl Into<String>,
        lastname: impl Into<String>,
        hours_worked: Decimal,
        policy: Box<dyn SalaryPolicy>,
    ) -> EngineResult<Self> {
        if hours_worked < Decimal::ZERO {
            return Err(EngineError::InvalidEmployee {
                field: "hours_worked".to_string(),
                message: "cannot be negative".to_string(),
            });
        }
        Ok(Self {
            firstname: firstname.into(),
            lastname: lastname.into(),
            hours_worked,
            policy,
        })
    }

    /// Returns the full name, `"{firstname} {lastname}"`.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.firstname, self.lastname)
    }

    /// Returns the hours worked in the pay period.
    pub fn hours_worked(&self) -> Decimal {
        self.hours_worked
    }

    /// Returns the bound salary policy.
    pub fn policy(&self) -> &dyn SalaryPolicy {
        self.policy.as_ref()
    }

    /// Calculates the salary by delegating to the bound policy.
    pub fn calculate_salary(&self) -> Decimal {
        self.policy.calculate(self.hours_worked)
    }

    /// Rebinds this employee to a different salary policy.
    ///
    /// Only the computed amount changes; identity and hours are untouched.
    pub fn with_policy(self, policy: Box<dyn SalaryPolicy>) -> Self {
        Self { policy, ..self }
    }
}

//! Interchangeable salary calculation policies.
//!
//! A policy maps hours worked to a monetary amount, rounded to 2 decimal
//! places. Policies are pure: no side effects, no stored state beyond their
//! own parameters. Employees hold a policy as a boxed trait object, so new
//! pay schemes can be added without modifying the employee model.

mod fixed_rate;
mod hourly;

pub use fixed_rate::{FixedRate, default_work_day_hours, workdays_per_month};
pub use hourly::HourlyRate;

use std::fmt;

use rust_decimal::Decimal;

/// A salary calculation policy.
///
/// Implementations must be pure functions of `hours_worked` and their own
/// parameters. Amounts are non-negative and rounded to 2 decimal places.
///
/// # Example
///
/// ```
/// use rust_decimal::Decimal;
/// use salary_engine::policy::{HourlyRate, SalaryPolicy};
///
/// let policy: Box<dyn SalaryPolicy> = Box::new(HourlyRate::new(Decimal::from(1500)).unwrap());
/// assert_eq!(policy.calculate(Decimal::from(3)), Decimal::from(4500));
/// ```
pub trait SalaryPolicy: fmt::Debug + Send + Sync {
    /// Returns the machine-readable name of this pay scheme.
    fn name(&self) -> &'static str;

    /// Calculates the salary amount for the given hours worked.
    fn calculate(&self, hours_worked: Decimal) -> Decimal;
}

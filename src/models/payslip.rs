//! Payslip result model.
//!
//! A payslip captures the outcome of one salary calculation: who was paid,
//! under which scheme, for how many hours, and the resulting amount.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Employee;

/// The complete result of a salary calculation.
///
/// # Example
///
/// ```
/// use rust_decimal::Decimal;
/// use salary_engine::models::{Employee, Payslip};
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
/// let payslip = Payslip::for_employee(&employee);
/// assert_eq!(payslip.amount, Decimal::from(4500));
/// assert_eq!(payslip.scheme, "hourly");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payslip {
    /// Unique identifier for this payslip.
    pub payslip_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// The employee's full name.
    pub fullname: String,
    /// The name of the pay scheme applied.
    pub scheme: String,
    /// The hours worked in the pay period.
    pub hours_worked: Decimal,
    /// The computed salary amount.
    pub amount: Decimal,
}

impl Payslip {
    /// Builds a payslip for the given employee under its bound policy.
    pub fn for_employee(employee: &Employee) -> Self {
        Self {
            payslip_id: Uuid::new_v4(),
            timestamp: Utc::now(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            fullname: employee.full_name(),
            scheme: employee.policy().name().to_string(),
            hours_worked: employee.hours_worked(),
            amount: employee.calculate_salary(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::{FixedRate, HourlyRate};
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_test_employee() -> Employee {
        Employee::new(
            "Петя",
            "Пупкин",
            dec("56"),
            Box::new(FixedRate::new(dec("35000")).unwrap()),
        )
        .unwrap()
    }

    /// PS-001: payslip reflects the employee and its policy
    #[test]
    fn test_payslip_reflects_employee_and_policy() {
        let payslip = Payslip::for_employee(&create_test_employee());

        assert_eq!(payslip.fullname, "Петя Пупкин");
        assert_eq!(payslip.scheme, "fixed_rate");
        assert_eq!(payslip.hours_worked, dec("56"));
        assert_eq!(payslip.amount, dec("11136.36"));
        assert_eq!(payslip.engine_version, env!("CARGO_PKG_VERSION"));
    }

    /// PS-002: each payslip gets its own id
    #[test]
    fn test_each_payslip_gets_its_own_id() {
        let employee = create_test_employee();
        let first = Payslip::for_employee(&employee);
        let second = Payslip::for_employee(&employee);
        assert_ne!(first.payslip_id, second.payslip_id);
    }

    #[test]
    fn test_payslip_serialization() {
        let employee = Employee::new(
            "Вася",
            "Пупкин",
            dec("3"),
            Box::new(HourlyRate::new(dec("1500")).unwrap()),
        )
        .unwrap();
        let payslip = Payslip::for_employee(&employee);

        let json = serde_json::to_string(&payslip).unwrap();
        assert!(json.contains("\"fullname\":\"Вася Пупкин\""));
        assert!(json.contains("\"scheme\":\"hourly\""));
        assert!(json.contains("\"amount\":\"4500\""));
    }

    #[test]
    fn test_payslip_round_trip() {
        let payslip = Payslip::for_employee(&create_test_employee());
        let json = serde_json::to_string(&payslip).unwrap();
        let deserialized: Payslip = serde_json::from_str(&json).unwrap();
        assert_eq!(payslip, deserialized);
    }
}

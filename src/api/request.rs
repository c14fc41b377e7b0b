//! Request types for the salary engine API.
//!
//! This module defines the JSON request structures for the `/calculate`
//! endpoint.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::ConfigLoader;
use crate::error::EngineResult;
use crate::models::Employee;
use crate::policy::{FixedRate, HourlyRate, SalaryPolicy, default_work_day_hours};

/// Request body for the `/calculate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// The employee to build a payslip for.
    pub employee: EmployeeRequest,
}

/// Employee information in a calculation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeRequest {
    /// The employee's first name.
    pub firstname: String,
    /// The employee's last name.
    pub lastname: String,
    /// The hours worked in the pay period.
    pub hours_worked: Decimal,
    /// The pay scheme to apply.
    pub scheme: SchemeRequest,
}

/// The pay scheme in a calculation request: inline parameters or a named
/// preset from the loaded configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SchemeRequest {
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
    /// A named preset resolved from configuration.
    Preset {
        /// The preset name.
        name: String,
    },
}

impl SchemeRequest {
    /// Resolves this request into a concrete salary policy.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::EngineError::SchemeNotFound`] for an unknown
    /// preset name, or [`crate::error::EngineError::InvalidPolicy`] for
    /// invalid inline parameters.
    pub fn resolve(&self, config: &ConfigLoader) -> EngineResult<Box<dyn SalaryPolicy>> {
        match self {
            SchemeRequest::Hourly { cost_per_hour } => {
                Ok(Box::new(HourlyRate::new(*cost_per_hour)?))
            }
            SchemeRequest::FixedRate {
                salary,
                work_day_duration,
            } => Ok(Box::new(FixedRate::with_work_day_duration(
                *salary,
                *work_day_duration,
            )?)),
            SchemeRequest::Preset { name } => config.build_policy(name),
        }
    }
}

impl EmployeeRequest {
    /// Converts this request into a domain employee with its bound policy.
    ///
    /// # Errors
    ///
    /// Returns an error if the scheme cannot be resolved or the employee
    /// fields violate the model invariants.
    pub fn into_employee(self, config: &ConfigLoader) -> EngineResult<Employee> {
        let policy = self.scheme.resolve(config)?;
        Employee::new(self.firstname, self.lastname, self.hours_worked, policy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn load_config() -> ConfigLoader {
        ConfigLoader::load("./config/payroll").unwrap()
    }

    #[test]
    fn test_deserialize_inline_hourly_request() {
        let json = r#"{
            "employee": {
                "firstname": "Вася",
                "lastname": "Пупкин",
                "hours_worked": "3",
                "scheme": {
                    "type": "hourly",
                    "cost_per_hour": "1500"
                }
            }
        }"#;

        let request: CalculationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.employee.firstname, "Вася");
        assert_eq!(request.employee.hours_worked, dec("3"));
        match request.employee.scheme {
            SchemeRequest::Hourly { cost_per_hour } => assert_eq!(cost_per_hour, dec("1500")),
            other => panic!("Expected Hourly, got {:?}", other),
        }
    }

    #[test]
    fn test_deserialize_fixed_rate_defaults_work_day_duration() {
        let json = r#"{
            "employee": {
                "firstname": "Петя",
                "lastname": "Пупкин",
                "hours_worked": "56",
                "scheme": {
                    "type": "fixed_rate",
                    "salary": "35000"
                }
            }
        }"#;

        let request: CalculationRequest = serde_json::from_str(json).unwrap();
        match request.employee.scheme {
            SchemeRequest::FixedRate {
                salary,
                work_day_duration,
            } => {
                assert_eq!(salary, dec("35000"));
                assert_eq!(work_day_duration, dec("8"));
            }
            other => panic!("Expected FixedRate, got {:?}", other),
        }
    }

    #[test]
    fn test_deserialize_preset_request() {
        let json = r#"{
            "employee": {
                "firstname": "Вася",
                "lastname": "Пупкин",
                "hours_worked": "3",
                "scheme": {
                    "type": "preset",
                    "name": "hourly_standard"
                }
            }
        }"#;

        let request: CalculationRequest = serde_json::from_str(json).unwrap();
        match request.employee.scheme {
            SchemeRequest::Preset { name } => assert_eq!(name, "hourly_standard"),
            other => panic!("Expected Preset, got {:?}", other),
        }
    }

    #[test]
    fn test_into_employee_with_inline_scheme() {
        let request = EmployeeRequest {
            firstname: "Вася".to_string(),
            lastname: "Пупкин".to_string(),
            hours_worked: dec("3"),
            scheme: SchemeRequest::Hourly {
                cost_per_hour: dec("1500"),
            },
        };

        let employee = request.into_employee(&load_config()).unwrap();
        assert_eq!(employee.full_name(), "Вася Пупкин");
        assert_eq!(employee.calculate_salary(), dec("4500"));
    }

    #[test]
    fn test_into_employee_with_preset_scheme() {
        let request = EmployeeRequest {
            firstname: "Петя".to_string(),
            lastname: "Пупкин".to_string(),
            hours_worked: dec("56"),
            scheme: SchemeRequest::Preset {
                name: "fixed_standard".to_string(),
            },
        };

        let employee = request.into_employee(&load_config()).unwrap();
        assert_eq!(employee.calculate_salary(), dec("11136.36"));
    }

    #[test]
    fn test_into_employee_with_unknown_preset_fails() {
        let request = EmployeeRequest {
            firstname: "Вася".to_string(),
            lastname: "Пупкин".to_string(),
            hours_worked: dec("3"),
            scheme: SchemeRequest::Preset {
                name: "unknown".to_string(),
            },
        };

        assert!(request.into_employee(&load_config()).is_err());
    }
}

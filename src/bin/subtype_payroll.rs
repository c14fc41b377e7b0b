//! Prints the demo roster's salaries using per-type employees.
//!
//! Same roster and amounts as `policy_payroll`, but here each pay scheme
//! is its own employee type with the calculation baked in.

use rust_decimal::Decimal;
use salary_engine::error::EngineResult;
use salary_engine::hierarchy::{FixedRateEmployee, HourlyPaymentEmployee, SalariedEmployee};

fn main() -> EngineResult<()> {
    let employees: Vec<Box<dyn SalariedEmployee>> = vec![
        Box::new(HourlyPaymentEmployee::new(
            "Вася",
            "Пупкин",
            Decimal::from(3),
            Decimal::from(1500),
        )?),
        Box::new(FixedRateEmployee::new(
            "Петя",
            "Пупкин",
            Decimal::from(56),
            Decimal::from(35000),
        )?),
    ];

    for person in &employees {
        println!(
            "{} заработал {}",
            person.full_name(),
            person.calculate_salary()
        );
    }

    Ok(())
}
